//! Read-side views over a [`crate::stats::Snapshot`].
//!
//! - `info`       : flat JSON payload (also the HTML page data)
//! - `prometheus` : text exposition format
//! - `html`       : index page via the `template` engine
//! - `uptime`     : human uptime string shared by JSON and HTML

pub mod html;
pub mod info;
pub mod prometheus;
pub mod template;
pub mod uptime;

pub use info::{AppInfo, AppMeta};
pub use template::Template;
pub use uptime::format_uptime;
