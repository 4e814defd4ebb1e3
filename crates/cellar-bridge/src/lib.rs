//! Bridge between the host process and presentation content.
//!
//! The catalog is closed: [`Operation`] lists everything content can ask
//! for, [`BridgeRegistry`] answers requests, and [`client_stub_script`] is
//! the only code injected into content to reach it.

pub mod handlers;
pub mod message;
pub mod operation;
pub mod registry;
pub mod stub;

pub use handlers::{AppInfo, DataService, PlaceholderDataService};
pub use message::{BridgeReply, BridgeRequest, BridgeResponse, GenericMessage};
pub use operation::{Operation, CATALOG_VERSION};
pub use registry::BridgeRegistry;
pub use stub::{client_stub_script, settle_script};
