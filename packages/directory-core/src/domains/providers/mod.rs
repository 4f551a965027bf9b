//! Providers domain - the raw record collection shown in the directory

pub mod models;
pub mod store;

// Re-export commonly used types
pub use models::{Clinic, ClinicAddress, ProviderRecord, Speciality};
pub use store::RecordStore;
