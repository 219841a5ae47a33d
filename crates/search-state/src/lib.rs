//! # Search State Crate
//!
//! The state side of the portal search: what the reader has typed and
//! selected, the taxonomy those selections are drawn from, and how the
//! parent-topic selection travels through the URL.
//!
//! ## Components
//!
//! - **types**: `FilterState`, `TopicSelection`, `SortMode`, `DateRange`,
//!   `SearchContext`
//! - **taxonomy**: the fixed topic groups and regions
//! - **url_sync**: `query_to_state` / `state_to_query`
//!
//! ## Example Usage
//!
//! ```ignore
//! use search_state::{Dimension, FilterState, Taxonomy, url_sync};
//!
//! let taxonomy = Taxonomy::builtin();
//! let url = url_sync::parse_url("/search?parentTopic=Heritage")?;
//!
//! let state = url_sync::query_to_state(&url, &taxonomy, FilterState::new())
//!     .toggle(&taxonomy, Dimension::Region, "Europe");
//! let next_url = url_sync::state_to_query(&state, &url);
//! ```

pub mod error;
pub mod taxonomy;
pub mod types;
pub mod url_sync;

pub use error::{Result, StateError};
pub use taxonomy::{Taxonomy, TopicGroup};
pub use types::{
    parse_date_bound, DateRange, Dimension, FilterChip, FilterState, SearchContext, SortMode,
    TopicRef, TopicSelection,
};
pub use url_sync::{parse_url, query_to_state, read_params, state_to_query, UrlParams};
