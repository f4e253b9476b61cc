use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub mod expense {
    use super::*;

    /// JSON shape of an expense, used for request bodies and responses.
    ///
    /// Unknown fields are ignored. `id` is only meaningful in responses: the
    /// server assigns it on create and takes it from the path on update.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Expense {
        #[serde(default)]
        pub id: Option<i64>,
        pub amount: f64,
        pub category: String,
        pub description: String,
        #[serde(default, with = "crate::civil_date_time")]
        pub date: Option<NaiveDateTime>,
    }
}

pub mod stats {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CategoryTotal {
        pub category: String,
        pub amount: f64,
        pub percentage: f64,
    }

    /// Totals span every expense. `monthly_breakdown` only covers the
    /// current month, with each share taken against `total_amount`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseStats {
        pub total_amount: f64,
        pub total_entries: u64,
        pub average_amount: f64,
        pub monthly_breakdown: Vec<CategoryTotal>,
    }
}

/// Serde helpers for civil (zone-less) date-times.
///
/// Accepted inputs, tried in order:
/// - `2024-05-01T12:30:00` with optional fractional seconds
/// - `2024-05-01T12:30`
/// - an RFC 3339 timestamp such as `2024-05-01T10:30:00.000Z`, converted to
///   the server's local time
/// - `2024-05-01`, read as midnight
///
/// Output is always the ISO form produced by chrono.
pub mod civil_date_time {
    use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

    pub fn parse(value: &str) -> Result<NaiveDateTime, String> {
        let value = value.trim();

        if let Ok(date_time) = value.parse::<NaiveDateTime>() {
            return Ok(date_time);
        }
        if let Ok(date_time) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
            return Ok(date_time);
        }
        if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
            return Ok(date_time.with_timezone(&Local).naive_local());
        }
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return Ok(date.and_time(NaiveTime::MIN));
        }

        Err(format!("invalid date-time: \"{value}\""))
    }

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|value| parse(&value).map_err(de::Error::custom))
            .transpose()
    }
}
