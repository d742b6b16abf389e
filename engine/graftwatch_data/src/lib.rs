//! Patient records for GraftWatch.
//!
//! The risk engine never holds patient data itself. Presentation code looks
//! patients up through a [`PatientDirectory`], which keeps the data source
//! swappable:
//!
//! ```
//! use graftwatch_data::{sample_directory, PatientDirectory};
//!
//! let directory = sample_directory()?;
//! let maria = directory.get("patient002").expect("sample record");
//! assert_eq!(maria.organ_type, "Heart");
//! assert!(directory.get("patient999").is_none());
//! # Ok::<(), graftwatch_data::DirectoryError>(())
//! ```

pub mod directory;
pub mod sample;

pub use directory::{DirectoryError, InMemoryDirectory, PatientDirectory};
pub use sample::{sample_directory, sample_patients};
