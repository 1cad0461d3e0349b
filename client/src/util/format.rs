//! Text formatting for ticket cards.
//!
//! TRADE-OFFS
//! ==========
//! In the browser timestamps go through `Date.toLocaleString` so they follow
//! the viewer's locale and time zone. Elsewhere (SSR, tests) a fixed
//! en-US-style UTC rendering keeps output deterministic.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// Characters of description shown on a list card before the ellipsis.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 160;

/// Shorten `text` to at most `max_chars` characters, breaking on a char
/// boundary and appending an ellipsis when anything was cut.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        None => text.to_owned(),
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
    }
}

#[must_use]
pub fn description_preview(text: &str) -> String {
    truncate_chars(text, DESCRIPTION_PREVIEW_CHARS)
}

/// Render a server timestamp as short month, day, hour and minute.
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_created_at(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(local) = locale_timestamp(raw) {
            return local;
        }
    }
    utc_timestamp(raw).unwrap_or_else(|| raw.to_owned())
}

fn utc_timestamp(raw: &str) -> Option<String> {
    let parsed = OffsetDateTime::parse(raw.trim(), &Rfc3339).ok()?;
    let utc = parsed.to_offset(time::UtcOffset::UTC);
    utc.format(format_description!("[month repr:short] [day padding:none], [hour repr:12]:[minute] [period]"))
        .ok()
}

#[cfg(feature = "hydrate")]
fn locale_timestamp(raw: &str) -> Option<String> {
    use wasm_bindgen::JsValue;

    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return None;
    }
    let options = js_sys::Object::new();
    for (key, value) in [("month", "short"), ("day", "numeric"), ("hour", "2-digit"), ("minute", "2-digit")] {
        js_sys::Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value)).ok()?;
    }
    date.to_locale_string("default", &options).as_string()
}
