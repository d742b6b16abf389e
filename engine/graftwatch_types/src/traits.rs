// Shared traits for monitoring records

use chrono::NaiveDate;
use thiserror::Error;

/// Simple validation trait used by domain types.
///
/// Nothing in the risk engine calls this; it is for collaborators that want
/// to reject physically impossible input before it reaches the engine.
pub trait Validatable {
    fn validate(&self) -> Result<(), ValidationError>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("'{field}' cannot be empty.")]
    EmptyField { field: &'static str },

    #[error("Field '{field}' must be a finite, non-negative number (got {actual}).")]
    InvalidConcentration { field: &'static str, actual: f64 },

    #[error("Donor cfDNA {donor} ng/mL exceeds total cfDNA {total} ng/mL.")]
    DonorExceedsTotal { donor: f64, total: f64 },

    #[error("Measurement dated {current} precedes the previous draw on {previous}.")]
    OutOfOrder {
        previous: NaiveDate,
        current: NaiveDate,
    },

    #[error("Field '{field}' ({date}) precedes the transplant date {transplant}.")]
    BeforeTransplant {
        field: &'static str,
        date: NaiveDate,
        transplant: NaiveDate,
    },

    #[error("Measurement #{index} is invalid: {source}")]
    Measurement {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}
