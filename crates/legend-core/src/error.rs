// File: crates/legend-core/src/error.rs
// Summary: Error type shared by the legend registry, configuration loading and chart host lookups.

use crate::series::SeriesId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LegendError {
    #[error("series {0} is already registered with the legend")]
    DuplicateSeries(SeriesId),

    #[error("series {0} is not known to the chart")]
    UnknownSeries(SeriesId),

    #[error("invalid legend config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LegendError>;
