pub mod crash_report;
pub mod info;
pub mod paths;
pub mod policy;

pub use info::{arch_name, platform_name};
pub use paths::{crash_report_dir, data_dir, log_dir};
pub use policy::LifecyclePolicy;
