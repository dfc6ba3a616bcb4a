//! Leaf engines of the aggregation pipeline:
//!
//! - `fetch`: one HTTP GET per endpoint, outcome classified instead of
//!   raised
//! - `normalize`: unit-interval vs percent encoding detection and
//!   clamping
//! - `aggregate`: request-volume-weighted statistics
//! - `validate`: declarative shape checks for structured payloads

pub mod aggregate;
pub mod fetch;
pub mod normalize;
pub mod validate;

pub use fetch::{ApiClient, FetchError, FetchResult};
pub use normalize::RatioEncoding;
pub use validate::{FieldRule, FieldSpec, ValidateError};
