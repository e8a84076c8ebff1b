//! Index page rendering.

use crate::error::RenderError;

use super::info::AppInfo;
use super::template::Template;

pub const CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Parse `source` and execute it against `info`.
///
/// The template is parsed on every call so a broken template surfaces as a
/// per-request error rather than a startup failure.
pub fn render_page(source: &str, info: &AppInfo) -> Result<String, RenderError> {
    let tmpl = Template::parse(source)?;
    let data = serde_json::to_value(info).map_err(|e| RenderError::Data(e.to_string()))?;
    tmpl.render(&data)
}
