//! Glossa Core — error type, run configuration, respondent populations.

pub mod config;
pub mod error;
pub mod mode;
pub mod population;

pub use config::{GlossaConfig, InputPaths, RulePaths, StopwordPaths};
pub use error::{Error, Result};
pub use mode::ReductionMode;
pub use population::Population;
