//! Text rendering of asset cards and report tables.
//!
//! Dates are shown the way the viewer's locale writes calendar dates, in the
//! viewer's time zone. Both are injectable through [`DateFormatter`] so output
//! is reproducible in tests.

use crate::api::assets::structs::Asset;
use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, Utc};
use comfy_table::{ContentArrangement, Table, presets};
use std::env;

/// Placeholder for missing department or creation date.
pub const PLACEHOLDER: &str = "—";

pub const REPORT_HEADER: [&str; 7] = [
    "#",
    "Device",
    "Type",
    "Department",
    "Location",
    "Status",
    "Created",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLocale {
    /// `M/D/YYYY`
    EnUs,
    /// `DD/MM/YYYY`
    EnGb,
    /// `D/M/YYYY`
    Id,
    /// `D.M.YYYY`
    De,
    /// `YYYY-MM-DD`
    Iso,
}

impl DateLocale {
    /// Maps a POSIX locale name such as `id_ID.UTF-8` to a calendar style.
    pub fn from_lang(lang: &str) -> Self {
        let tag = lang
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('-', "_");
        let mut parts = tag.split('_');
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().unwrap_or_default().to_ascii_uppercase();
        match (language.as_str(), region.as_str()) {
            ("en", "US") | ("en", "") => DateLocale::EnUs,
            ("en", _) => DateLocale::EnGb,
            ("id", _) | ("ms", _) => DateLocale::Id,
            ("de", _) | ("ru", _) | ("pl", _) => DateLocale::De,
            ("sv", _) | ("lt", _) => DateLocale::Iso,
            ("fr", _) | ("es", _) | ("it", _) | ("pt", _) | ("nl", _) => DateLocale::EnGb,
            _ => DateLocale::EnUs,
        }
    }

    /// Reads `LC_ALL`, `LC_TIME` and `LANG` in that order.
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_TIME", "LANG"]
            .iter()
            .filter_map(|key| env::var(key).ok())
            .find(|v| !v.is_empty() && v != "C" && v != "POSIX")
            .map(|v| Self::from_lang(&v))
            .unwrap_or(DateLocale::EnUs)
    }

    pub fn format(&self, date: NaiveDate) -> String {
        let (y, m, d) = (date.year(), date.month(), date.day());
        match self {
            DateLocale::EnUs => format!("{}/{}/{}", m, d, y),
            DateLocale::EnGb => format!("{:02}/{:02}/{}", d, m, y),
            DateLocale::Id => format!("{}/{}/{}", d, m, y),
            DateLocale::De => format!("{}.{}.{}", d, m, y),
            DateLocale::Iso => format!("{}-{:02}-{:02}", y, m, d),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateZone {
    Local,
    Fixed(FixedOffset),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatter {
    pub locale: DateLocale,
    pub zone: DateZone,
}

impl DateFormatter {
    pub fn new(locale: DateLocale, zone: DateZone) -> Self {
        Self { locale, zone }
    }

    /// The viewer's own conventions: locale from the environment, local time zone.
    pub fn local() -> Self {
        Self::new(DateLocale::from_env(), DateZone::Local)
    }

    pub fn calendar_date(&self, ts: &DateTime<Utc>) -> NaiveDate {
        match self.zone {
            DateZone::Local => ts.with_timezone(&Local).date_naive(),
            DateZone::Fixed(offset) => ts.with_timezone(&offset).date_naive(),
        }
    }

    pub fn format(&self, ts: Option<&DateTime<Utc>>) -> String {
        match ts {
            Some(ts) => self.locale.format(self.calendar_date(ts)),
            None => PLACEHOLDER.to_string(),
        }
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::local()
    }
}

/// Label/value lines of one asset card; "Assigned To" only when a user is set.
pub fn card_lines(asset: &Asset) -> Vec<(&'static str, String)> {
    let mut lines = vec![
        ("Device", asset.device_name.clone()),
        ("Brand", asset.brand.clone()),
        ("Model", asset.model.clone()),
        ("Asset Type", asset.asset_type.to_string()),
        ("Status", asset.status.to_string()),
        ("Location", asset.location.clone()),
    ];
    if let Some(user) = asset.assigned_user() {
        lines.push(("Assigned To", user.to_string()));
    }
    lines
}

/// Report rows numbered from 1 in response order.
pub fn report_rows(assets: &[Asset], dates: &DateFormatter) -> Vec<Vec<String>> {
    assets
        .iter()
        .enumerate()
        .map(|(index, asset)| {
            vec![
                (index + 1).to_string(),
                asset.device_name.clone(),
                asset.asset_type.to_string(),
                asset
                    .department_name()
                    .unwrap_or(PLACEHOLDER)
                    .to_string(),
                asset.location.clone(),
                asset.status.label().to_string(),
                dates.format(asset.created_at.as_ref()),
            ]
        })
        .collect()
}

pub fn render_cards(assets: &[Asset]) -> String {
    assets
        .iter()
        .map(|asset| {
            let mut card = Table::new();
            card.load_preset(presets::UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic);
            for (label, value) in card_lines(asset) {
                card.add_row(vec![label.to_string(), value]);
            }
            card.to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_report_table(assets: &[Asset], dates: &DateFormatter) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(REPORT_HEADER.to_vec());
    for row in report_rows(assets, dates) {
        table.add_row(row);
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::assets::structs::{AssetStatus, AssetType, NamedRef};
    use chrono::TimeZone;

    fn asset(id: u64, name: &str) -> Asset {
        Asset {
            id,
            device_name: name.to_string(),
            brand: "Dell".into(),
            model: "OptiPlex 7010".into(),
            asset_type: AssetType::Pc,
            status: AssetStatus::Backup,
            location: "Warehouse".into(),
            created_at: None,
            user: None,
            department: None,
        }
    }

    fn utc_plus_7() -> DateFormatter {
        DateFormatter::new(
            DateLocale::Id,
            DateZone::Fixed(FixedOffset::east_opt(7 * 3600).unwrap()),
        )
    }

    #[test]
    fn test_locale_from_lang() {
        assert_eq!(DateLocale::from_lang("en_US.UTF-8"), DateLocale::EnUs);
        assert_eq!(DateLocale::from_lang("en_GB.UTF-8"), DateLocale::EnGb);
        assert_eq!(DateLocale::from_lang("id_ID.UTF-8"), DateLocale::Id);
        assert_eq!(DateLocale::from_lang("de-DE"), DateLocale::De);
        assert_eq!(DateLocale::from_lang("sv_SE"), DateLocale::Iso);
        assert_eq!(DateLocale::from_lang("xx"), DateLocale::EnUs);
    }

    #[test]
    fn test_locale_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(DateLocale::EnUs.format(date), "3/5/2024");
        assert_eq!(DateLocale::EnGb.format(date), "05/03/2024");
        assert_eq!(DateLocale::Id.format(date), "5/3/2024");
        assert_eq!(DateLocale::De.format(date), "5.3.2024");
        assert_eq!(DateLocale::Iso.format(date), "2024-03-05");
    }

    #[test]
    fn test_zone_shifts_calendar_day() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 20, 0, 0).unwrap();
        assert_eq!(utc_plus_7().format(Some(&ts)), "6/3/2024");
        let us_west = DateFormatter::new(
            DateLocale::EnUs,
            DateZone::Fixed(FixedOffset::west_opt(8 * 3600).unwrap()),
        );
        assert_eq!(us_west.format(Some(&ts)), "3/5/2024");
    }

    #[test]
    fn test_missing_department_and_date_use_placeholder() {
        let rows = report_rows(&[asset(1, "Tower")], &utc_plus_7());
        assert_eq!(rows[0][3], PLACEHOLDER);
        assert_eq!(rows[0][6], PLACEHOLDER);
        assert_eq!(rows[0][5], "Backup");
    }

    #[test]
    fn test_status_column_uses_label() {
        let mut a = asset(1, "Old Tablet");
        a.status = AssetStatus::ToBeDisposal;
        let rows = report_rows(&[a.clone()], &utc_plus_7());
        assert_eq!(rows[0][5], "To Be Disposal");
        let card = card_lines(&a);
        assert!(card.contains(&("Status", "to_be_disposal".to_string())));
    }

    #[test]
    fn test_rows_numbered_from_one() {
        let assets = vec![asset(40, "A"), asset(12, "B"), asset(99, "C")];
        let rows = report_rows(&assets, &utc_plus_7());
        let numbers: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(numbers, ["1", "2", "3"]);
        assert_eq!(rows[1][1], "B");
    }

    #[test]
    fn test_card_assigned_to_only_when_present() {
        let mut a = asset(1, "Tower");
        assert!(card_lines(&a).iter().all(|(label, _)| *label != "Assigned To"));
        a.user = Some(NamedRef {
            id: Some(2),
            name: Some("Budi".into()),
        });
        let lines = card_lines(&a);
        assert_eq!(lines.last().unwrap(), &("Assigned To", "Budi".to_string()));
        assert!(render_cards(&[a]).contains("Budi"));
    }

    #[test]
    fn test_table_contains_header() {
        let out = render_report_table(&[asset(1, "Tower")], &utc_plus_7());
        for column in REPORT_HEADER {
            assert!(out.contains(column));
        }
        assert!(out.contains("Tower"));
    }
}
