pub mod config;
pub mod context;
pub mod error;
pub mod mock;
pub mod store;

pub use config::{Config, MockConfig, TableConfig, resolve_data_path};
pub use context::DashboardContext;
pub use error::{Error, Result};
pub use mock::MockGenerator;
pub use store::RecordStore;
