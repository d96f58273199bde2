//! Parsing of the notifier's `-list` output

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::request::ALL_GROUPS;
use crate::domain::error::ListParseError;

/// Placeholder the notifier prints for absent values
pub const NULL_TOKEN: &str = "(null)";

/// First line of every non-empty `-list` output
pub const LIST_HEADER: &str = "GroupID\tTitle\tSubtitle\tMessage\tDelivered At";

/// Format of the `Delivered At` column, e.g. `2012-08-06 19:45:30 +0000`
pub const DELIVERED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

const FIELD_COUNT: usize = 5;

/// A notification currently shown by the notifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRecord {
    pub group: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub message: Option<String>,
    pub delivered_at: DateTime<FixedOffset>,
}

impl NotificationRecord {
    /// Parse one tab-separated data line. `line_number` is 1-based and only
    /// used for error reporting.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Self, ListParseError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != FIELD_COUNT {
            return Err(ListParseError::FieldCount {
                line: line_number,
                found: fields.len(),
            });
        }

        let delivered_at = DateTime::parse_from_str(fields[4].trim(), DELIVERED_AT_FORMAT)
            .map_err(|e| ListParseError::Timestamp {
                value: fields[4].to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            group: optional_field(fields[0]),
            title: optional_field(fields[1]),
            subtitle: optional_field(fields[2]),
            message: optional_field(fields[3]),
            delivered_at,
        })
    }
}

fn optional_field(value: &str) -> Option<String> {
    if value == NULL_TOKEN {
        None
    } else {
        Some(value.to_string())
    }
}

/// Result of listing notifications.
///
/// Empty output is `Empty`. Querying a specific group that has exactly one
/// notification yields `Single`. Everything else is `Many`, including a
/// header-only reply to `ALL`. Serializes to `null`, an object, or an array
/// respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Listing {
    Empty,
    Single(NotificationRecord),
    Many(Vec<NotificationRecord>),
}

impl Listing {
    /// Parse raw `-list` output for the given group query
    pub fn parse(raw: &str, group: &str) -> Result<Self, ListParseError> {
        if raw.trim().is_empty() {
            return Ok(Self::Empty);
        }

        // Line 1 is the header
        let mut records = raw
            .lines()
            .enumerate()
            .skip(1)
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| NotificationRecord::parse_line(line, index + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(match records.len() {
            0 if group == ALL_GROUPS => Self::Many(records),
            0 => Self::Empty,
            1 if group != ALL_GROUPS => Self::Single(records.remove(0)),
            _ => Self::Many(records),
        })
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Single(_) => false,
            Self::Many(records) => records.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Single(_) => 1,
            Self::Many(records) => records.len(),
        }
    }

    /// Flatten into a list regardless of shape
    pub fn into_records(self) -> Vec<NotificationRecord> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(record) => vec![record],
            Self::Many(records) => records,
        }
    }
}
