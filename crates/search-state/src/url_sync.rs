//! Two-way mapping between `FilterState` and the page URL.
//!
//! Only the parent topic round-trips through the URL. `disableRegions` is
//! read but never written.

use crate::error::Result;
use crate::taxonomy::Taxonomy;
use crate::types::FilterState;
use tracing::debug;
use url::Url;

pub const PARENT_TOPIC_PARAM: &str = "parentTopic";
pub const DISABLE_REGIONS_PARAM: &str = "disableRegions";

/// Base used to resolve path-only URLs such as `/search?parentTopic=People`
const RELATIVE_BASE: &str = "http://localhost/";

/// The query parameters this crate cares about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    pub parent_topic: Option<String>,
    /// Presence-only flag; any value counts
    pub disable_regions: bool,
}

/// Parse an absolute URL, or a path resolved against a local base
pub fn parse_url(raw: &str) -> Result<Url> {
    match Url::parse(raw) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Url::parse(RELATIVE_BASE)?.join(raw)?),
        Err(e) => Err(e.into()),
    }
}

/// Read `parentTopic` and `disableRegions` from a URL
pub fn read_params(url: &Url) -> UrlParams {
    let mut params = UrlParams::default();
    for (key, value) in url.query_pairs() {
        if key == PARENT_TOPIC_PARAM && params.parent_topic.is_none() {
            let value = value.trim();
            if !value.is_empty() {
                params.parent_topic = Some(value.to_string());
            }
        } else if key == DISABLE_REGIONS_PARAM {
            params.disable_regions = true;
        }
    }
    params
}

/// Rehydrate the parent-topic dimension from a URL.
///
/// The URL is authoritative for parent topics: a missing parameter clears
/// them, an unknown topic name is ignored. Every other dimension is kept.
pub fn query_to_state(url: &Url, taxonomy: &Taxonomy, state: FilterState) -> FilterState {
    let params = read_params(url);
    let parent = params.parent_topic.as_deref().and_then(|name| {
        let canonical = taxonomy.canonical_parent(name).ok();
        if canonical.is_none() {
            debug!("Ignoring unknown {} '{}'", PARENT_TOPIC_PARAM, name);
        }
        canonical
    });
    state.with_parent_topic(taxonomy, parent)
}

/// Mirror the first selected parent topic into the URL.
///
/// The parameter is replaced where it stands (or appended), and every
/// other parameter is kept in order. With no parent selected the parameter
/// is removed.
pub fn state_to_query(state: &FilterState, url: &Url) -> Url {
    let parent = state.parent_topics().next();

    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut written = false;
    for (key, value) in url.query_pairs() {
        if key == PARENT_TOPIC_PARAM {
            if let (Some(parent), false) = (parent, written) {
                pairs.push((PARENT_TOPIC_PARAM.to_string(), parent.to_string()));
                written = true;
            }
        } else {
            pairs.push((key.into_owned(), value.into_owned()));
        }
    }
    if let (Some(parent), false) = (parent, written) {
        pairs.push((PARENT_TOPIC_PARAM.to_string(), parent.to_string()));
    }

    let mut next = url.clone();
    next.set_query(None);
    if !pairs.is_empty() {
        next.query_pairs_mut()
            .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    next
}
