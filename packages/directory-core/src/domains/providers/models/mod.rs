pub mod provider;

pub use provider::{Clinic, ClinicAddress, ProviderRecord, Speciality};
