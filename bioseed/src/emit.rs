use std::io::Write;

use chrono::NaiveDateTime;

use crate::error::SeedError;
use crate::reading::Reading;

/// Table the SQL form inserts into.
pub const SQL_TABLE: &str = "patient_biometric_readings";

/// Writes one single-row `INSERT` per reading, grouped under a comment line
/// per biometric. `created_at`/`updated_at` are left to the receiving
/// store's `NOW()`. Catalog names and units are quoted verbatim, without
/// escaping.
///
/// # Errors
/// Errors when writing to `out` fails
pub fn write_sql<W: Write>(
    out: &mut W,
    readings: &[Reading],
    user_id: &str,
    base: NaiveDateTime,
) -> Result<(), SeedError> {
    writeln!(out, "-- Generated Biometric Test Data")?;
    writeln!(out, "-- User ID: {}", user_id)?;
    writeln!(out, "-- Base Date: {}", base.format("%Y-%m-%dT%H:%M:%S"))?;
    writeln!(out)?;

    let mut current: Option<&str> = None;
    for reading in readings {
        if current != Some(reading.biometric_name.as_str()) {
            if current.is_some() {
                writeln!(out)?;
            }
            writeln!(out, "-- {}", reading.biometric_name)?;
            current = Some(reading.biometric_name.as_str());
        }
        writeln!(
            out,
            "INSERT INTO {} (id, user_id, biometric_name, value, unit, recorded_at, source, created_at, updated_at)",
            SQL_TABLE
        )?;
        writeln!(
            out,
            "VALUES ('{}', '{}', '{}', {:.1}, '{}', '{}', '{}', NOW(), NOW());",
            reading.id,
            reading.user_id,
            reading.biometric_name,
            reading.value,
            reading.unit,
            reading.recorded_at_utc(),
            reading.source.as_str()
        )?;
    }
    if !readings.is_empty() {
        writeln!(out)?;
    }

    Ok(())
}

/// Writes the readings as a pretty-printed JSON array, optionally preceded
/// by a `Generated {n} records` line.
///
/// # Errors
/// Errors when serialization or writing to `out` fails
pub fn write_json<W: Write>(
    out: &mut W,
    readings: &[Reading],
    with_count: bool,
) -> Result<(), SeedError> {
    if with_count {
        writeln!(out, "Generated {} records", readings.len())?;
    }
    serde_json::to_writer_pretty(&mut *out, readings)?;
    writeln!(out)?;

    Ok(())
}
