use std::convert::TryFrom;
use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::error::SeedError;

/// A biometric baseline. Guaranteed positive and finite by construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Baseline(f64);

impl TryFrom<f64> for Baseline {
    type Error = SeedError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() && value > 0.0 {
            Ok(Baseline(value))
        } else {
            Err(SeedError::InvalidBaseline)
        }
    }
}

impl Baseline {
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Raw CSV row of a catalog file, before baseline validation.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Deserialize)]
pub struct CatalogRecord {
    pub name: String,
    pub baseline: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BiometricType {
    pub name: String,
    pub baseline: Baseline,
    pub unit: String,
}

impl BiometricType {
    /// # Errors
    /// Errors when `baseline` is not a positive, finite number
    pub fn new(
        name: impl Into<String>,
        baseline: f64,
        unit: impl Into<String>,
    ) -> Result<Self, SeedError> {
        Ok(BiometricType {
            name: name.into(),
            baseline: Baseline::try_from(baseline)?,
            unit: unit.into(),
        })
    }
}

impl TryFrom<CatalogRecord> for BiometricType {
    type Error = SeedError;
    fn try_from(record: CatalogRecord) -> Result<Self, Self::Error> {
        BiometricType::new(record.name, record.baseline, record.unit)
    }
}

/// Ordered set of biometric types. Iteration order is insertion order and
/// determines the order of generated output.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<BiometricType>,
}

impl Catalog {
    /// # Errors
    /// Errors when the entry's name is already present in the catalog
    pub fn push(&mut self, entry: BiometricType) -> Result<(), SeedError> {
        if self.entries.iter().any(|e| e.name == entry.name) {
            return Err(SeedError::DuplicateBiometric);
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Reads a catalog from CSV with a `name,baseline,unit` header row.
    ///
    /// # Errors
    /// Errors on malformed CSV, a non-positive baseline, a duplicate name,
    /// or a file with no data rows
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, SeedError> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let mut catalog = Catalog::default();
        for record in csv_reader.deserialize() {
            let record: CatalogRecord = record?;
            catalog.push(BiometricType::try_from(record)?)?;
        }
        if catalog.is_empty() {
            return Err(SeedError::EmptyCatalog);
        }
        Ok(catalog)
    }

    /// # Errors
    /// Errors when the file cannot be opened, plus everything
    /// [`Catalog::from_csv_reader`] errors on
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let file = File::open(path)?;
        Catalog::from_csv_reader(file)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BiometricType> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The full set of biometric types seeded for a test user.
    #[must_use]
    pub fn full_preset() -> Self {
        Catalog::preset(&[
            ("VO2 Max", 55.0, "mL/kg/min"),
            ("Resting Heart Rate", 65.0, "bpm"),
            ("Heart Rate Variability", 45.0, "ms"),
            ("Systolic Blood Pressure", 120.0, "mmHg"),
            ("Diastolic Blood Pressure", 80.0, "mmHg"),
            ("Body Weight", 75.0, "kg"),
            ("Body Fat Percentage", 20.0, "%"),
            ("BMI", 23.5, "kg/m²"),
            ("Lean Mass", 60.0, "kg"),
            ("Active Energy", 500.0, "kcal"),
            ("Steps", 8000.0, "steps"),
            ("Walking Running Distance", 6.0, "km"),
            ("Flights Climbed", 10.0, "flights"),
            ("Sleep Duration", 7.5, "hours"),
            ("Deep Sleep", 1.5, "hours"),
            ("REM Sleep", 1.8, "hours"),
            ("Sleep Efficiency", 85.0, "%"),
        ])
    }

    /// Biometric names aligned with the `biometrics_base` table.
    #[must_use]
    pub fn matching_preset() -> Self {
        Catalog::preset(&[
            ("VO2 Max", 55.0, "mL/kg/min"),
            ("Resting Heart Rate", 65.0, "bpm"),
            ("HRV", 45.0, "ms"),
            ("Blood Pressure (Systolic)", 120.0, "mmHg"),
            ("Blood Pressure (Diastolic)", 80.0, "mmHg"),
            ("Weight", 75.0, "kg"),
            ("Bodyfat", 20.0, "%"),
            ("BMI", 23.5, "kg/m²"),
            ("Steps/Day", 8000.0, "steps"),
            ("Total Sleep", 7.5, "hours"),
            ("Deep Sleep", 1.5, "hours"),
            ("REM Sleep", 1.8, "hours"),
        ])
    }

    // Preset baselines are compile-time literals, all positive.
    fn preset(entries: &[(&str, f64, &str)]) -> Self {
        Catalog {
            entries: entries
                .iter()
                .map(|&(name, baseline, unit)| BiometricType {
                    name: name.to_string(),
                    baseline: Baseline(baseline),
                    unit: unit.to_string(),
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BiometricType;
    type IntoIter = std::slice::Iter<'a, BiometricType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_try_from() {
        assert!(Baseline::try_from(-65.0).is_err());
        assert!(Baseline::try_from(0.0).is_err());
        assert!(Baseline::try_from(f64::NAN).is_err());
        assert!(Baseline::try_from(f64::INFINITY).is_err());

        let baseline = Baseline::try_from(65.0).unwrap();
        assert!((baseline.get() - 65.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_biometric_type_try_from_record() {
        let record = CatalogRecord {
            name: "Resting Heart Rate".to_string(),
            baseline: 65.0,
            unit: "bpm".to_string(),
        };
        let biometric = BiometricType::try_from(record).unwrap();
        assert_eq!(biometric.name, "Resting Heart Rate");
        assert_eq!(biometric.unit, "bpm");

        let record = CatalogRecord {
            name: "Resting Heart Rate".to_string(),
            baseline: -1.0,
            unit: "bpm".to_string(),
        };
        assert!(BiometricType::try_from(record).is_err());
    }

    #[test]
    fn test_push_rejects_duplicate_names() {
        let mut catalog = Catalog::default();
        catalog
            .push(BiometricType::new("Steps", 8000.0, "steps").unwrap())
            .unwrap();
        let res = catalog.push(BiometricType::new("Steps", 9000.0, "steps").unwrap());
        assert!(res.is_err());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_csv_reader() {
        let data = "\
name,baseline,unit
Resting Heart Rate, 65.0, bpm
Body Weight, 75.0, kg
Sleep Duration, 7.5, hours
";
        let catalog = Catalog::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);
        let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Resting Heart Rate", "Body Weight", "Sleep Duration"]
        );
        let weight = catalog.iter().find(|e| e.name == "Body Weight").unwrap();
        assert!((weight.baseline.get() - 75.0).abs() < f64::EPSILON);
        assert_eq!(weight.unit, "kg");
    }

    #[test]
    fn test_from_csv_reader_rejects_bad_baseline() {
        let data = "name,baseline,unit\nBody Weight,-75.0,kg\n";
        assert!(Catalog::from_csv_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_from_csv_reader_rejects_empty_file() {
        let data = "name,baseline,unit\n";
        assert!(Catalog::from_csv_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_presets() {
        let full = Catalog::full_preset();
        assert_eq!(full.len(), 17);
        assert_eq!(full.iter().next().unwrap().name, "VO2 Max");

        let matching = Catalog::matching_preset();
        assert_eq!(matching.len(), 12);
        assert!(matching.iter().any(|e| e.name == "Steps/Day"));
    }
}
