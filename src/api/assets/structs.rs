use crate::handler::error::ApiError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    Laptop,
    #[serde(rename = "PC")]
    Pc,
    Tablet,
    Monitor,
    Printer,
    Smartphone,
}

impl AssetType {
    pub const ALL: [AssetType; 6] = [
        AssetType::Laptop,
        AssetType::Pc,
        AssetType::Tablet,
        AssetType::Monitor,
        AssetType::Printer,
        AssetType::Smartphone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Laptop => "Laptop",
            AssetType::Pc => "PC",
            AssetType::Tablet => "Tablet",
            AssetType::Monitor => "Monitor",
            AssetType::Printer => "Printer",
            AssetType::Smartphone => "Smartphone",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ApiError::InvalidFilter(format!("unknown asset type '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Live,
    Backup,
    ToBeDisposal,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 3] = [
        AssetStatus::Live,
        AssetStatus::Backup,
        AssetStatus::ToBeDisposal,
    ];

    /// Wire value, as sent in query parameters and received in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Live => "live",
            AssetStatus::Backup => "backup",
            AssetStatus::ToBeDisposal => "to_be_disposal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Live => "Live",
            AssetStatus::Backup => "Backup",
            AssetStatus::ToBeDisposal => "To Be Disposal",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        AssetStatus::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(wanted) || st.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ApiError::InvalidFilter(format!("unknown status '{}'", s)))
    }
}

/// Reference to a related record (assigned user, department) by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl NamedRef {
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: u64,
    pub device_name: String,
    pub brand: String,
    pub model: String,
    pub asset_type: AssetType,
    pub status: AssetStatus,
    pub location: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user: Option<NamedRef>,
    #[serde(default)]
    pub department: Option<NamedRef>,
}

impl Asset {
    pub fn assigned_user(&self) -> Option<&str> {
        self.user.as_ref().and_then(NamedRef::display_name)
    }

    pub fn department_name(&self) -> Option<&str> {
        self.department.as_ref().and_then(NamedRef::display_name)
    }
}

/// Accepts RFC 3339 timestamps and the naive `YYYY-MM-DD HH:MM:SS` form (as UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_timestamp(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", s))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Department,
    AssetType,
    Status,
    FromDate,
    ToDate,
}

impl FilterField {
    pub fn key(&self) -> &'static str {
        match self {
            FilterField::Department => "department",
            FilterField::AssetType => "asset_type",
            FilterField::Status => "status",
            FilterField::FromDate => "from_date",
            FilterField::ToDate => "to_date",
        }
    }
}

/// User-selected report constraints. Empty fields leave the query unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub department: String,
    pub asset_type: Option<AssetType>,
    pub status: Option<AssetStatus>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates one field from raw user input; an empty string clears the field.
    ///
    /// Department is free text and is stored exactly as typed.
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidFilter`] for unknown enum values or dates not
    /// in `YYYY-MM-DD` form. The criteria are left unchanged in that case.
    pub fn set(&mut self, field: FilterField, raw: &str) -> Result<(), ApiError> {
        let value = raw.trim();
        match field {
            FilterField::Department => self.department = raw.to_string(),
            FilterField::AssetType => self.asset_type = parse_optional(value)?,
            FilterField::Status => self.status = parse_optional(value)?,
            FilterField::FromDate => self.from_date = parse_date(field, value)?,
            FilterField::ToDate => self.to_date = parse_date(field, value)?,
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Non-empty fields as `(key, value)` pairs in a fixed order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.department.is_empty() {
            pairs.push((FilterField::Department.key(), self.department.clone()));
        }
        if let Some(t) = self.asset_type {
            pairs.push((FilterField::AssetType.key(), t.as_str().to_string()));
        }
        if let Some(s) = self.status {
            pairs.push((FilterField::Status.key(), s.as_str().to_string()));
        }
        if let Some(d) = self.from_date {
            pairs.push((FilterField::FromDate.key(), d.format("%Y-%m-%d").to_string()));
        }
        if let Some(d) = self.to_date {
            pairs.push((FilterField::ToDate.key(), d.format("%Y-%m-%d").to_string()));
        }
        pairs
    }

    /// Percent-encoded query string without the leading `?`.
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn parse_optional<T: FromStr<Err = ApiError>>(value: &str) -> Result<Option<T>, ApiError> {
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

fn parse_date(field: FilterField, value: &str) -> Result<Option<NaiveDate>, ApiError> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            ApiError::InvalidFilter(format!("{} must be YYYY-MM-DD, got '{}'", field.key(), value))
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Fixed download name; repeated exports overwrite each other.
    pub fn file_name(&self) -> String {
        format!("assets_report.{}", self.as_str())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(ApiError::UnsupportedFormat(other.to_string())),
        }
    }
}
