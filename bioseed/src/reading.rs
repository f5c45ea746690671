use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// Where a reading came from. Seeded data always enters as `manual`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Manual,
}

impl Source {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Manual => "manual",
        }
    }
}

/// One timestamped biometric data point attributed to a user.
///
/// `value` is kept unrounded in memory; serialization rounds it to one
/// decimal place. `recorded_at` serializes as ISO-8601 with a `+00:00`
/// suffix appended textually.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub id: Uuid,
    pub user_id: String,
    pub biometric_name: String,
    #[serde(serialize_with = "serialize_rounded")]
    pub value: f64,
    pub unit: String,
    #[serde(serialize_with = "serialize_recorded_at")]
    pub recorded_at: NaiveDateTime,
    pub source: Source,
}

impl Reading {
    /// The value as it appears in serialized output.
    #[must_use]
    pub fn rounded_value(&self) -> f64 {
        round_one_decimal(self.value)
    }

    /// `recorded_at` in serialized form, e.g. `2025-10-16T05:15:41+00:00`.
    #[must_use]
    pub fn recorded_at_utc(&self) -> String {
        format!("{}+00:00", self.recorded_at.format("%Y-%m-%dT%H:%M:%S"))
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn serialize_rounded<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round_one_decimal(*value))
}

fn serialize_recorded_at<S>(recorded_at: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&format_args!(
        "{}+00:00",
        recorded_at.format("%Y-%m-%dT%H:%M:%S")
    ))
}
