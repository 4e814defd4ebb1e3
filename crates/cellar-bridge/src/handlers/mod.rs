//! One handler module per operation family.

pub mod app;
pub mod data;
pub mod message;
pub mod window;

pub use app::AppInfo;
pub use data::{DataService, PlaceholderDataService};
