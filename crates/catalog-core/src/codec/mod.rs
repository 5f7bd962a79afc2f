//! URL codec for filter state.
//!
//! Maps [`FilterState`] to and from query parameters:
//! - `search=<text>` - present only when the trimmed search term is non-empty
//! - `pricing=<tag>[,<tag>]*` - present only when at least one tag is selected
//!
//! The default state produces no parameters, so its URL is the bare base path.
//! Unrecognized `pricing` tokens are dropped on the way in, which lets older
//! or newer links still open with whatever part of them is understood.

mod location;
mod query;

pub use location::{LocationReader, LocationWriter, MemoryLocation};
pub use query::QueryParams;

use tracing::{debug, warn};

use crate::config::{PRICING_PARAM, SEARCH_PARAM};
use crate::error::CodecError;
use crate::filter::{FilterState, PricingFilter};

/// Encode filter state as query parameters.
pub fn serialize(state: &FilterState) -> QueryParams {
    let mut params = QueryParams::new();

    let term = state.search_term().trim();
    if !term.is_empty() {
        params.set(SEARCH_PARAM, term);
    }

    if let Some(tags) = state.pricing_filter().to_param() {
        params.set(PRICING_PARAM, tags);
    }

    params
}

/// Decode filter state from query parameters.
///
/// `search` is taken verbatim. Unknown `pricing` tokens are discarded.
pub fn deserialize(params: &QueryParams) -> FilterState {
    let search_term = params.get(SEARCH_PARAM).unwrap_or_default();
    let pricing_filter = params
        .get(PRICING_PARAM)
        .map(PricingFilter::from_param)
        .unwrap_or_default();

    FilterState::new(search_term, pricing_filter)
}

/// URL mirroring `state` under `base_path`.
pub fn location_url(state: &FilterState, base_path: &str) -> String {
    let params = serialize(state);
    if params.is_empty() {
        base_path.to_string()
    } else {
        format!("{}?{}", base_path, params)
    }
}

/// Replace the current history entry with the URL for `state`.
///
/// Returns the URL that was written.
pub fn write_to_location<W>(
    state: &FilterState,
    base_path: &str,
    writer: &W,
) -> Result<String, CodecError>
where
    W: LocationWriter + ?Sized,
{
    let url = location_url(state, base_path);
    writer.replace_location(&url)?;
    debug!(%url, "filter state mirrored to location");
    Ok(url)
}

/// Read filter state from the current location, reporting failures.
pub fn try_read_from_location<R>(reader: &R) -> Result<FilterState, CodecError>
where
    R: LocationReader + ?Sized,
{
    let query = reader.query_string()?;
    let params = QueryParams::parse(&query)?;
    Ok(deserialize(&params))
}

/// Read filter state from the current location.
///
/// Never fails: an unreadable location or malformed query string is logged
/// and yields the default state.
pub fn read_from_location<R>(reader: &R) -> FilterState
where
    R: LocationReader + ?Sized,
{
    try_read_from_location(reader).unwrap_or_else(|e| {
        warn!(error = %e, "falling back to default filters");
        FilterState::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_PATH;
    use crate::filter::PricingTag;

    fn state(term: &str, tags: &[PricingTag]) -> FilterState {
        FilterState::new(term, tags.iter().copied().collect())
    }

    fn tags_of(state: &FilterState) -> Vec<PricingTag> {
        state.pricing_filter().iter().collect()
    }

    struct BrokenLocation;

    impl LocationReader for BrokenLocation {
        fn query_string(&self) -> Result<String, CodecError> {
            Err(CodecError::LocationUnavailable("no window".to_string()))
        }
    }

    impl LocationWriter for BrokenLocation {
        fn replace_location(&self, _url: &str) -> Result<(), CodecError> {
            Err(CodecError::LocationUnavailable("no history".to_string()))
        }
    }

    // ---- serialize ----

    #[test]
    fn test_serialize_default_is_empty() {
        let params = serialize(&FilterState::default());
        assert!(params.is_empty());
        assert_eq!(params.to_string(), "");
    }

    #[test]
    fn test_serialize_search_only() {
        let params = serialize(&state("test search", &[]));
        assert_eq!(params.get("search"), Some("test search"));
        assert_eq!(params.get("pricing"), None);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_serialize_trims_search() {
        let params = serialize(&state("  cat  ", &[]));
        assert_eq!(params.get("search"), Some("cat"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_serialize_pricing_only() {
        let params = serialize(&state("", &[PricingTag::Paid, PricingTag::Free]));
        assert_eq!(params.get("search"), None);
        assert_eq!(params.get("pricing"), Some("paid,free"));
    }

    #[test]
    fn test_serialize_both() {
        let params = serialize(&state("test", &[PricingTag::Paid, PricingTag::ViewOnly]));
        assert_eq!(params.get("search"), Some("test"));
        assert_eq!(params.get("pricing"), Some("paid,view-only"));
    }

    #[test]
    fn test_serialize_ignores_blank_search() {
        let params = serialize(&state("   ", &[PricingTag::Paid]));
        assert_eq!(params.get("search"), None);
        assert_eq!(params.get("pricing"), Some("paid"));
    }

    // ---- deserialize ----

    #[test]
    fn test_deserialize_empty() {
        assert_eq!(deserialize(&QueryParams::new()), FilterState::default());
    }

    #[test]
    fn test_deserialize_search_only() {
        let params = QueryParams::parse("search=test%20search").unwrap();
        let decoded = deserialize(&params);
        assert_eq!(decoded.search_term(), "test search");
        assert!(decoded.pricing_filter().is_empty());
    }

    #[test]
    fn test_deserialize_search_is_not_trimmed() {
        let params = QueryParams::parse("search=%20dog%20").unwrap();
        assert_eq!(deserialize(&params).search_term(), " dog ");
    }

    #[test]
    fn test_deserialize_pricing_only() {
        let params = QueryParams::parse("pricing=paid,free").unwrap();
        let decoded = deserialize(&params);
        assert_eq!(decoded.search_term(), "");
        assert_eq!(tags_of(&decoded), vec![PricingTag::Paid, PricingTag::Free]);
    }

    #[test]
    fn test_deserialize_drops_invalid_tags() {
        let params = QueryParams::parse("pricing=paid,invalid,free").unwrap();
        let decoded = deserialize(&params);
        assert_eq!(tags_of(&decoded), vec![PricingTag::Paid, PricingTag::Free]);
    }

    #[test]
    fn test_deserialize_all_invalid_tags() {
        let params = QueryParams::parse("pricing=auction,PAID").unwrap();
        assert!(deserialize(&params).pricing_filter().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_filtering_intent() {
        let original = state(" red cat ", &[PricingTag::ViewOnly, PricingTag::Paid]);
        let query = serialize(&original).to_string();
        let decoded = deserialize(&QueryParams::parse(&query).unwrap());

        assert_eq!(decoded.search_term(), original.search_term().trim());
        assert!(decoded.pricing_filter().same_tags(original.pricing_filter()));
    }

    #[test]
    fn test_round_trip_is_idempotent() {
        let once = deserialize(&serialize(&state("  a&b=c ", &[PricingTag::Free])));
        let twice = deserialize(&serialize(&once));
        assert_eq!(once, twice);
    }

    // ---- location ----

    #[test]
    fn test_location_url_default_is_base_path() {
        assert_eq!(location_url(&FilterState::default(), "/"), "/");
        assert_eq!(location_url(&FilterState::default(), "/shop"), "/shop");
    }

    #[test]
    fn test_write_search_term() {
        let location = MemoryLocation::new("/");
        let url = write_to_location(&state("test", &[]), DEFAULT_BASE_PATH, &location).unwrap();
        assert_eq!(url, "/?search=test");
        assert_eq!(location.url(), "/?search=test");
    }

    #[test]
    fn test_write_pricing_encodes_separator() {
        let location = MemoryLocation::new("/");
        write_to_location(
            &state("", &[PricingTag::Paid, PricingTag::Free]),
            DEFAULT_BASE_PATH,
            &location,
        )
        .unwrap();
        assert_eq!(location.url(), "/?pricing=paid%2Cfree");
    }

    #[test]
    fn test_write_both() {
        let location = MemoryLocation::new("/");
        write_to_location(&state("test", &[PricingTag::Paid]), DEFAULT_BASE_PATH, &location)
            .unwrap();
        assert_eq!(location.url(), "/?search=test&pricing=paid");
    }

    #[test]
    fn test_write_default_clears_query() {
        let location = MemoryLocation::new("/?search=old");
        write_to_location(&FilterState::default(), DEFAULT_BASE_PATH, &location).unwrap();
        assert_eq!(location.url(), "/");
        assert_eq!(location.replacements(), 1);
    }

    #[test]
    fn test_write_reports_writer_failure() {
        let err = write_to_location(&state("x", &[]), "/", &BrokenLocation).unwrap_err();
        assert!(matches!(err, CodecError::LocationUnavailable(_)));
    }

    #[test]
    fn test_read_from_location() {
        let location = MemoryLocation::new("/?search=test&pricing=paid,free");
        let decoded = read_from_location(&location);
        assert_eq!(decoded.search_term(), "test");
        assert_eq!(tags_of(&decoded), vec![PricingTag::Paid, PricingTag::Free]);
    }

    #[test]
    fn test_read_from_empty_location() {
        assert_eq!(
            read_from_location(&MemoryLocation::new("/")),
            FilterState::default()
        );
    }

    #[test]
    fn test_read_falls_back_on_unavailable_location() {
        assert!(try_read_from_location(&BrokenLocation).is_err());
        assert_eq!(read_from_location(&BrokenLocation), FilterState::default());
    }

    #[test]
    fn test_read_falls_back_on_malformed_query() {
        let location = MemoryLocation::new("/?search=%C3%28&pricing=free");
        assert!(matches!(
            try_read_from_location(&location),
            Err(CodecError::MalformedQuery(_))
        ));
        assert_eq!(read_from_location(&location), FilterState::default());
    }
}
