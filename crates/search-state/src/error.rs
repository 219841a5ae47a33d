//! Errors raised while turning user input into filter state.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StateError {
    /// A date bound that is neither `YYYY-MM-DD` nor `DD/MM/YYYY`
    #[error("Invalid date '{value}': expected YYYY-MM-DD or DD/MM/YYYY")]
    InvalidDate { value: String },

    /// `from` falls after `to`
    #[error("Date range is reversed: {from} is after {to}")]
    ReversedRange { from: String, to: String },

    #[error("Unknown topic: {name}")]
    UnknownTopic { name: String },

    #[error("Unknown region: {name}")]
    UnknownRegion { name: String },

    #[error("Unknown sort mode: {value}")]
    UnknownSortMode { value: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, StateError>;
