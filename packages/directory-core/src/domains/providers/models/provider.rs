use serde::{Deserialize, Serialize};

use crate::common::LooseNumber;

/// A named speciality attached to a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speciality {
    pub name: String,
}

/// Street address of a clinic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicAddress {
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
}

/// Clinic a provider practices from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinic {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: ClinicAddress,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Provider record - one entry in the directory
///
/// Deserialized straight from the feed. Records are never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRecord {
    #[serde(default)]
    pub id: String,

    // Profile
    pub name: String,
    #[serde(default, rename = "doctor_introduction")]
    pub introduction: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,

    // Practice
    #[serde(default)]
    pub experience: Option<LooseNumber>,
    #[serde(default)]
    pub fees: Option<LooseNumber>,
    #[serde(default)]
    pub specialities: Vec<Speciality>,
    #[serde(default)]
    pub clinic: Clinic,

    // Consult modes
    #[serde(default)]
    pub video_consult: bool,
    #[serde(default)]
    pub in_clinic: bool,
}

impl ProviderRecord {
    /// Minimal record with only a name; every other field at its default
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            introduction: None,
            photo: None,
            languages: Vec::new(),
            experience: None,
            fees: None,
            specialities: Vec::new(),
            clinic: Clinic::default(),
            video_consult: false,
            in_clinic: false,
        }
    }

    pub fn with_fees(mut self, fees: impl Into<LooseNumber>) -> Self {
        self.fees = Some(fees.into());
        self
    }

    pub fn with_experience(mut self, experience: impl Into<LooseNumber>) -> Self {
        self.experience = Some(experience.into());
        self
    }

    pub fn with_consult_modes(mut self, video_consult: bool, in_clinic: bool) -> Self {
        self.video_consult = video_consult;
        self.in_clinic = in_clinic;
        self
    }

    pub fn with_speciality(mut self, name: impl Into<String>) -> Self {
        self.specialities.push(Speciality { name: name.into() });
        self
    }

    /// Parsed consultation fee, `None` when absent or unparseable
    pub fn fee_value(&self) -> Option<f64> {
        self.fees.as_ref().and_then(LooseNumber::value)
    }

    /// Parsed years of experience, `None` when absent or unparseable
    pub fn experience_value(&self) -> Option<f64> {
        self.experience.as_ref().and_then(LooseNumber::value)
    }

    /// Whether the provider offers video or in-clinic consultation
    pub fn supports_any_consult(&self) -> bool {
        self.video_consult || self.in_clinic
    }

    pub fn has_speciality(&self, name: &str) -> bool {
        self.specialities.iter().any(|s| s.name == name)
    }

    /// Case-insensitive substring match on the name; `needle` must already be lowercase
    pub fn name_contains_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}
