//! Reference records for demos and tests: one stable kidney recipient and
//! one heart recipient whose dd-cfDNA is climbing.

use chrono::NaiveDate;
use graftwatch_types::{Measurement, Patient, PatientId};

use crate::directory::{DirectoryError, InMemoryDirectory};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("sample fixture date {year}-{month}-{day} does not exist"))
}

fn draw(date: NaiveDate, total: f64, donor: f64, outcome: &str) -> Measurement {
    Measurement::new(date, total, donor).with_outcome(outcome)
}

/// The two reference patients keyed `patient001` and `patient002`
pub fn sample_patients() -> Vec<(PatientId, Patient)> {
    vec![
        (
            PatientId::new("patient001"),
            Patient {
                name: "John Smith".to_string(),
                age: 45,
                organ_type: "Kidney".to_string(),
                transplant_date: date(2024, 1, 15),
                last_checkup_date: date(2025, 11, 1),
                measurements: vec![
                    draw(date(2025, 10, 25), 120.5, 4.2, "Stable"),
                    draw(date(2025, 11, 1), 118.3, 5.1, "Stable"),
                    draw(date(2025, 11, 4), 125.7, 4.8, "Stable"),
                ],
            },
        ),
        (
            PatientId::new("patient002"),
            Patient {
                name: "Maria Garcia".to_string(),
                age: 52,
                organ_type: "Heart".to_string(),
                transplant_date: date(2024, 2, 20),
                last_checkup_date: date(2025, 11, 4),
                measurements: vec![
                    draw(date(2025, 10, 25), 110.2, 5.5, "Stable"),
                    draw(date(2025, 11, 1), 135.8, 12.3, "Mild Rejection"),
                    draw(date(2025, 11, 4), 280.5, 25.7, "Severe Rejection"),
                ],
            },
        ),
    ]
}

/// An in-memory directory pre-loaded with [`sample_patients`].
///
/// Fails if any record is rejected by [`InMemoryDirectory::insert`].
pub fn sample_directory() -> Result<InMemoryDirectory, DirectoryError> {
    directory_from(sample_patients())
}

fn directory_from(
    records: Vec<(PatientId, Patient)>,
) -> Result<InMemoryDirectory, DirectoryError> {
    let directory = InMemoryDirectory::new();
    for (id, patient) in records {
        directory.insert(id, patient)?;
    }
    log::debug!("sample directory loaded with {} patients", directory.len());
    Ok(directory)
}
