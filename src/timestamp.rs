//! "Last updated" stamp derived from the document's modification time.
//!
//! The instant comes from the host document (`document.lastModified`), which
//! on static hosting reflects the served file's metadata. It is rendered the
//! way browsers render it for the `de-DE` locale with a long month name and a
//! two-digit `HH:MM` time, in Europe/Berlin civil time:
//!
//! ```text
//! 19. Oktober 2026 um 14:05
//! ```
//!
//! Berlin civil time comes from the IANA `Europe/Berlin` zone, so historical
//! instants get the offsets Germany actually observed (no summer time before
//! 1980, September changeover until 1995).

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike, Utc};
use chrono_tz::Europe::Berlin;

use crate::config::PageConfig;
use crate::host::Document;

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

const GERMAN_MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// UTC offset of Europe/Berlin at `instant`, in seconds.
pub fn berlin_offset_seconds(instant: DateTime<Utc>) -> i32 {
    Berlin.offset_from_utc_datetime(&instant.naive_utc()).fix().local_minus_utc()
}

/// Render `instant` as Berlin civil time in the German long form.
pub fn format_german_at(instant: DateTime<Utc>) -> Option<String> {
    let local = instant.with_timezone(&Berlin);
    let month = GERMAN_MONTHS.get(local.month0() as usize)?;
    Some(format!(
        "{}. {} {} um {:02}:{:02}",
        local.day(),
        month,
        local.year(),
        local.hour(),
        local.minute()
    ))
}

/// Render Unix milliseconds. `None` when the instant is out of range.
pub fn format_german(millis: i64) -> Option<String> {
    format_german_at(DateTime::from_timestamp_millis(millis)?)
}

/// Write the document's last-modified stamp into the summary and detail
/// labels that exist on this page. Returns how many labels were written.
///
/// Safe to call repeatedly; each call re-reads the instant and rewrites the
/// same text.
pub fn update_last_modified<D>(doc: &D, config: &PageConfig) -> usize
where
    D: Document + ?Sized,
{
    let summary = doc.element_by_id(&config.last_updated_id);
    let detail = doc.element_by_id(&config.page_last_updated_id);
    if summary.is_none() && detail.is_none() {
        return 0;
    }

    let Some(formatted) = doc.last_modified_millis().and_then(format_german) else {
        log::debug!("timestamp: document has no usable last-modified instant");
        return 0;
    };

    let mut written = 0;
    if let Some(label) = summary {
        doc.set_text(&label, &format!("{}{formatted}", config.last_updated_prefix));
        written += 1;
    }
    if let Some(label) = detail {
        doc.set_text(&label, &formatted);
        written += 1;
    }
    written
}
