//! winit + wry backend for the host controller.

mod probe;
mod system;
mod window;

pub use probe::check_packaged_bundle;
pub use system::WinitWindowing;
pub use window::WryWindow;
