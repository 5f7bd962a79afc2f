//! Pricing tags.

use std::fmt;

use crate::models::PricingOption;

/// A pricing filter tag as it appears in the URL and the filter UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricingTag {
    Paid,
    Free,
    ViewOnly,
}

/// Tag <-> token <-> pricing option. Both the selector and the URL codec go
/// through this table.
///
/// Row `i` holds the tag and the option whose discriminants are both `i`.
static TAG_TABLE: [(PricingTag, &str, PricingOption); 3] = [
    (PricingTag::Paid, "paid", PricingOption::BuyNow),
    (PricingTag::Free, "free", PricingOption::Free),
    (PricingTag::ViewOnly, "view-only", PricingOption::ViewOnly),
];

impl PricingTag {
    /// All tags in display order.
    pub const ALL: [PricingTag; 3] = [Self::Paid, Self::Free, Self::ViewOnly];

    /// Parse a URL token. Returns `None` for anything unrecognized.
    pub fn parse(token: &str) -> Option<Self> {
        TAG_TABLE
            .iter()
            .find(|(_, name, _)| *name == token)
            .map(|(tag, _, _)| *tag)
    }

    /// URL token for this tag.
    pub fn as_str(self) -> &'static str {
        self.entry().1
    }

    /// Pricing option selected by this tag.
    pub fn pricing_option(self) -> PricingOption {
        self.entry().2
    }

    /// Tag that selects the given pricing option.
    pub fn for_option(option: PricingOption) -> Self {
        TAG_TABLE[option as usize].0
    }

    /// Label shown next to the checkbox.
    pub fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Free => "Free",
            Self::ViewOnly => "View Only",
        }
    }

    fn entry(self) -> &'static (PricingTag, &'static str, PricingOption) {
        &TAG_TABLE[self as usize]
    }
}

impl fmt::Display for PricingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
