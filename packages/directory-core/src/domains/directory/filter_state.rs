use std::collections::BTreeSet;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Which consultation modes a provider must support to be shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultMode {
    /// Video or in-clinic; providers offering neither are still excluded
    #[default]
    Both,
    VideoOnly,
    ClinicOnly,
}

impl ConsultMode {
    pub fn variants() -> &'static [ConsultMode] {
        &[ConsultMode::Both, ConsultMode::VideoOnly, ConsultMode::ClinicOnly]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConsultMode::Both => "All consult types",
            ConsultMode::VideoOnly => "Video consult",
            ConsultMode::ClinicOnly => "In clinic",
        }
    }

    /// Token used in the address, `None` for the default
    pub fn query_token(&self) -> Option<&'static str> {
        match self {
            ConsultMode::Both => None,
            ConsultMode::VideoOnly => Some("video"),
            ConsultMode::ClinicOnly => Some("clinic"),
        }
    }
}

impl std::fmt::Display for ConsultMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsultMode::Both => write!(f, "both"),
            ConsultMode::VideoOnly => write!(f, "video"),
            ConsultMode::ClinicOnly => write!(f, "clinic"),
        }
    }
}

impl std::str::FromStr for ConsultMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "both" => Ok(ConsultMode::Both),
            "video" => Ok(ConsultMode::VideoOnly),
            "clinic" => Ok(ConsultMode::ClinicOnly),
            _ => Err(anyhow::anyhow!("Invalid consult mode: {}", s)),
        }
    }
}

/// Ordering applied to the filtered records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Keep feed order
    #[default]
    None,
    FeesAscending,
    ExperienceDescending,
}

impl SortKey {
    pub fn variants() -> &'static [SortKey] {
        &[
            SortKey::None,
            SortKey::FeesAscending,
            SortKey::ExperienceDescending,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::None => "Relevance",
            SortKey::FeesAscending => "Fees: low to high",
            SortKey::ExperienceDescending => "Experience: most first",
        }
    }

    /// Token used in the address, `None` for the default
    pub fn query_token(&self) -> Option<&'static str> {
        match self {
            SortKey::None => None,
            SortKey::FeesAscending => Some("fees"),
            SortKey::ExperienceDescending => Some("experience"),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::None => write!(f, "none"),
            SortKey::FeesAscending => write!(f, "fees"),
            SortKey::ExperienceDescending => write!(f, "experience"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(SortKey::None),
            "fees" => Ok(SortKey::FeesAscending),
            "experience" => Ok(SortKey::ExperienceDescending),
            _ => Err(anyhow::anyhow!("Invalid sort key: {}", s)),
        }
    }
}

/// The complete set of user-chosen search, filter and sort criteria
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    pub consult_mode: ConsultMode,
    pub selected_specialities: BTreeSet<String>,
    pub sort_key: SortKey,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_consult_mode(mut self, mode: ConsultMode) -> Self {
        self.consult_mode = mode;
        self
    }

    pub fn with_speciality(mut self, name: impl Into<String>) -> Self {
        self.selected_specialities.insert(name.into());
        self
    }

    pub fn with_sort_key(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// True when every field is at its default
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// The search term with surrounding whitespace removed
    pub fn trimmed_search(&self) -> &str {
        self.search_term.trim()
    }

    /// Add the speciality if absent, remove it if present.
    ///
    /// Blank names and names containing `,` cannot be carried in an address
    /// and are never added, though one that is already selected can still be
    /// removed. Returns whether the selection changed.
    pub fn toggle_speciality(&mut self, name: &str) -> bool {
        if self.selected_specialities.remove(name) {
            return true;
        }
        if name.trim().is_empty() || name.contains(',') {
            return false;
        }
        self.selected_specialities.insert(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = FilterState::new();
        assert_eq!(state.search_term, "");
        assert_eq!(state.consult_mode, ConsultMode::Both);
        assert!(state.selected_specialities.is_empty());
        assert_eq!(state.sort_key, SortKey::None);
        assert!(state.is_default());
    }

    #[test]
    fn test_toggle_speciality() {
        let mut state = FilterState::new();

        assert!(state.toggle_speciality("Dentist"));
        assert!(state.selected_specialities.contains("Dentist"));

        assert!(state.toggle_speciality("Dentist"));
        assert!(state.selected_specialities.is_empty());
    }

    #[test]
    fn test_toggle_ignores_unrepresentable_names() {
        let mut state = FilterState::new();
        assert!(!state.toggle_speciality(""));
        assert!(!state.toggle_speciality("   "));
        assert!(!state.toggle_speciality("Ear, Nose"));
        assert!(state.is_default());
    }

    #[test]
    fn test_toggle_removes_blank_name_already_selected() {
        let mut state = FilterState::new();
        state.selected_specialities.insert("  ".to_string());

        assert!(state.toggle_speciality("  "));
        assert!(state.is_default());
        assert!(!state.toggle_speciality("  "));
    }

    #[test]
    fn test_enum_tokens_round_trip_through_from_str() {
        for mode in ConsultMode::variants() {
            assert_eq!(mode.to_string().parse::<ConsultMode>().unwrap(), *mode);
        }
        for key in SortKey::variants() {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), *key);
        }
        assert!("walk".parse::<ConsultMode>().is_err());
        assert!("bogus".parse::<SortKey>().is_err());
    }
}
