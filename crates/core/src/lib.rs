pub mod config;
pub mod domain;
pub mod provenance;
pub mod range;
pub mod series;

pub use config::{ApiConfig, Config, DataMode};
pub use provenance::{DegradeReason, Provenance};
pub use range::TimeRange;
pub use series::TimeSeriesPoint;
