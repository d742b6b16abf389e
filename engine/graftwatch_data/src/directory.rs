//! Thread-safe patient directory

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;
use std::sync::Arc;

use graftwatch_types::{Patient, PatientId, Validatable, ValidationError};
use parking_lot::RwLock;
use thiserror::Error;

/// Errors that can occur while populating a directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Patient already exists: {0}")]
    AlreadyExists(PatientId),
    #[error("Invalid record for {id}: {source}")]
    Invalid {
        id: PatientId,
        #[source]
        source: ValidationError,
    },
    #[error("Failed to read patient file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse patient JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Lookup of patients by opaque identifier.
///
/// Implementations hand out owned records so callers never hold a lock.
pub trait PatientDirectory: Send + Sync {
    fn get(&self, id: &str) -> Option<Patient>;

    /// All known identifiers, sorted
    fn ids(&self) -> Vec<PatientId>;

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

/// Directory kept entirely in process memory.
/// Clones share the same underlying records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    patients: Arc<RwLock<BTreeMap<PatientId, Patient>>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validated patient under `id`
    pub fn insert(&self, id: impl Into<PatientId>, patient: Patient) -> Result<(), DirectoryError> {
        let id = id.into();
        if let Err(source) = id.validate().and_then(|_| patient.validate()) {
            log::warn!("rejecting patient record {id}: {source}");
            return Err(DirectoryError::Invalid { id, source });
        }

        let mut patients = self.patients.write();
        if patients.contains_key(&id) {
            return Err(DirectoryError::AlreadyExists(id));
        }
        log::debug!(
            "registered patient {id} with {} measurements",
            patient.measurements.len()
        );
        patients.insert(id, patient);
        Ok(())
    }

    pub fn remove(&self, id: &str) -> Option<Patient> {
        self.patients.write().remove(id)
    }

    pub fn len(&self) -> usize {
        self.patients.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.read().is_empty()
    }

    /// Build a directory from a JSON object keyed by patient id
    pub fn from_json(s: &str) -> Result<Self, DirectoryError> {
        let records: BTreeMap<PatientId, Patient> = serde_json::from_str(s)?;
        let directory = Self::new();
        for (id, patient) in records {
            directory.insert(id, patient)?;
        }
        Ok(directory)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let s = read_to_string(path)?;
        Self::from_json(&s)
    }
}

impl PatientDirectory for InMemoryDirectory {
    fn get(&self, id: &str) -> Option<Patient> {
        self.patients.read().get(id).cloned()
    }

    fn ids(&self) -> Vec<PatientId> {
        self.patients.read().keys().cloned().collect()
    }
}
