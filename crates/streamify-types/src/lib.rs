pub mod chart;
pub mod domain;
pub mod error;
pub mod metrics;

pub use chart::*;
pub use domain::*;
pub use error::{Error, Result};
pub use metrics::*;
