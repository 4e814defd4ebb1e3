//! Presentation shell for Cellar.
//!
//! The route table and error boundary are decided and rendered here. The
//! bootstrap document embeds the result so the webview script only looks
//! up views and fills slots. The bundle exporter packages it.

pub mod boundary;
pub mod bundle;
pub mod document;
pub mod markup;
pub mod routes;

pub use boundary::{CaughtError, Fallback, RecoveryAction};
pub use document::ShellDocument;
pub use routes::{RouteMatch, RouteTable, Screen};
