//! Calendar date parsing and display formatting.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result`/`Option` outputs instead of panics so a malformed
//! record date degrades to its raw string in the UI.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::Date;
use time::macros::format_description;

/// Error returned by [`format_display_date`].
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    /// The input is not a valid ISO `YYYY-MM-DD` calendar date.
    #[error("failed to parse ISO date: {0}")]
    Parse(#[from] time::error::Parse),
    /// The parsed date could not be rendered in the display format.
    #[error("failed to format date for display: {0}")]
    Format(#[from] time::error::Format),
}

/// Parse an ISO `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns a parse error if `input` is not a valid calendar date in that
/// exact format.
pub fn parse_iso_date(input: &str) -> Result<Date, time::error::Parse> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(input, &format)
}

/// Render an ISO `YYYY-MM-DD` date as a short display form, e.g. `19 Jan 2025`.
///
/// # Errors
///
/// Returns [`DateError`] if the input fails to parse or format.
pub fn format_display_date(iso: &str) -> Result<String, DateError> {
    let format = format_description!("[day padding:none] [month repr:short] [year]");
    let date = parse_iso_date(iso)?;
    Ok(date.format(&format)?)
}

/// Today's date from the browser clock, localized for display.
///
/// Returns `None` off-browser, where there is no locale clock to read.
#[must_use]
pub fn today_display() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        let localized = now.to_locale_date_string("en-GB", &wasm_bindgen::JsValue::UNDEFINED);
        Some(String::from(localized))
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
