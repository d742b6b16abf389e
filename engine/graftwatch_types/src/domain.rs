// Transplant monitoring domain types.
// These are plain inputs to the risk engine; nothing here is mutated by it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::traits::{Validatable, ValidationError};

/// Opaque patient identifier handed out by a patient directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub String);

impl PatientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Validatable for PatientId {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.0.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "patient_id",
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for PatientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for PatientId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PatientId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One lab draw. Concentrations are in ng/mL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub date: NaiveDate,
    pub total_cfdna: f64,
    pub donor_cfdna: f64,
    /// Clinical outcome noted alongside the draw, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
}

impl Measurement {
    pub fn new(date: NaiveDate, total_cfdna: f64, donor_cfdna: f64) -> Self {
        Self {
            date,
            total_cfdna,
            donor_cfdna,
            outcome: None,
        }
    }

    pub fn with_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcome = Some(outcome.into());
        self
    }
}

fn check_concentration(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidConcentration {
            field,
            actual: value,
        });
    }
    Ok(())
}

impl Validatable for Measurement {
    fn validate(&self) -> Result<(), ValidationError> {
        check_concentration("total_cfdna", self.total_cfdna)?;
        check_concentration("donor_cfdna", self.donor_cfdna)?;
        if self.donor_cfdna > self.total_cfdna {
            return Err(ValidationError::DonorExceedsTotal {
                donor: self.donor_cfdna,
                total: self.total_cfdna,
            });
        }
        Ok(())
    }
}

/// A monitored transplant recipient.
///
/// `measurements` is kept in chronological order (oldest first); the engine
/// treats the last element as the current reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub age: u32,
    pub organ_type: String,
    pub transplant_date: NaiveDate,
    pub last_checkup_date: NaiveDate,
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}

impl Patient {
    /// Most recent measurement, if any
    pub fn latest(&self) -> Option<&Measurement> {
        self.measurements.last()
    }
}

impl Validatable for Patient {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "name" });
        }
        if self.organ_type.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "organ_type",
            });
        }
        if self.last_checkup_date < self.transplant_date {
            return Err(ValidationError::BeforeTransplant {
                field: "last_checkup_date",
                date: self.last_checkup_date,
                transplant: self.transplant_date,
            });
        }

        for (index, m) in self.measurements.iter().enumerate() {
            m.validate().map_err(|e| ValidationError::Measurement {
                index,
                source: Box::new(e),
            })?;
        }

        // Same-day draws are allowed; going backwards is not.
        for pair in self.measurements.windows(2) {
            if pair[1].date < pair[0].date {
                return Err(ValidationError::OutOfOrder {
                    previous: pair[0].date,
                    current: pair[1].date,
                });
            }
        }
        Ok(())
    }
}
