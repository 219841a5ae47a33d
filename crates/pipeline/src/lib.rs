//! Search pipeline for the content portal.
//!
//! This crate provides:
//! - Filter trait and one implementation per search dimension
//! - FilterPipeline for composing filters
//! - Sorting, partitioning and the "is a search active" check
//!
//! ## Architecture
//! A search runs in stages:
//! 1. `is_search_active` decides between the landing and results layouts
//! 2. Filters narrow the collection (text AND region AND topic AND date)
//! 3. `sort_items` orders the matches
//! 4. `partition` splits off the highlighted top matches
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, partition, sort_items, DEFAULT_TOP_MATCHES};
//!
//! let pipeline = FilterPipeline::standard(taxonomy.clone());
//! let mut matches = pipeline.apply(index.items(), &context)?;
//! sort_items(&mut matches, context.filters.sort_by());
//! let (top, rest) = partition(&matches, DEFAULT_TOP_MATCHES);
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod results;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use results::{is_search_active, partition, sort_items, DEFAULT_TOP_MATCHES};
pub use traits::Filter;
