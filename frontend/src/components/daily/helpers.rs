//! Utility functions for the daily upload component: the local calendar
//! date, the client-side extension filter, and the deterministic storage
//! path for uploaded exports.

use chrono::{Local, NaiveDate};
use common::model::daily_upload::UploadSource;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Filename-only accept filter for export uploads. Returns the canonical
/// extension when the name ends in `.csv` or `.xlsx` (any case), `None`
/// otherwise. Content is not validated here.
pub fn accepted_extension(file_name: &str) -> Option<&'static str> {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".csv") {
        Some("csv")
    } else if lower.ends_with(".xlsx") {
        Some("xlsx")
    } else {
        None
    }
}

/// Deterministic object path keyed by restaurant, date, and source.
/// Re-uploading a source on the same day targets the same path, so the blob
/// store overwrites rather than accumulating copies.
pub fn object_path(
    restaurant: &str,
    date: NaiveDate,
    source: UploadSource,
    extension: &str,
) -> String {
    format!(
        "{}/{}/{}.{}",
        slug(restaurant),
        date,
        source.object_stem(),
        extension
    )
}

/// Lowercases, keeps ASCII alphanumerics, collapses everything else into
/// single dashes. Falls back to a fixed stem for names with no usable
/// characters so the path always has three segments.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut gap = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if gap && !out.is_empty() {
                out.push('-');
            }
            gap = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            gap = true;
        }
    }
    if out.is_empty() {
        "restaurant".to_string()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_csv_and_xlsx_any_case() {
        assert_eq!(accepted_extension("sales.csv"), Some("csv"));
        assert_eq!(accepted_extension("SALES.CSV"), Some("csv"));
        assert_eq!(accepted_extension("week.Xlsx"), Some("xlsx"));
    }

    #[test]
    fn rejects_other_names() {
        assert_eq!(accepted_extension("sales.xls"), None);
        assert_eq!(accepted_extension("sales.csv.pdf"), None);
        assert_eq!(accepted_extension("csv"), None);
        assert_eq!(accepted_extension(""), None);
    }

    #[test]
    fn slug_collapses_and_lowercases() {
        assert_eq!(slug("Casa Alba"), "casa-alba");
        assert_eq!(slug("  Tio's -- Tacos!  "), "tio-s-tacos");
        assert_eq!(slug("家"), "restaurant");
    }

    #[test]
    fn object_path_is_deterministic() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let path = object_path("Casa Alba", date, UploadSource::DoorDash, "csv");
        assert_eq!(path, "casa-alba/2026-08-30/doordash.csv");
        assert_eq!(
            path,
            object_path("Casa Alba", date, UploadSource::DoorDash, "csv")
        );
    }
}
