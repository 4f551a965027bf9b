//! Filter pipeline - pure derivation of the displayed records.
//!
//! `RecordStore x FilterState -> DerivedView`. Filters are conjunctive and all
//! run before the stable sort. Absent or unparseable numbers never fail the
//! derivation; they fall back to fixed values instead.

use std::cmp::Ordering;
use std::sync::Arc;

use super::filter_state::{ConsultMode, FilterState, SortKey};
use crate::domains::providers::{ProviderRecord, RecordStore};

/// Experience assumed when the record has none or it cannot be parsed
const MISSING_EXPERIENCE: f64 = 0.0;

/// Fee assumed when the record has none or it cannot be parsed (sorts last)
const MISSING_FEE: f64 = f64::INFINITY;

/// Filtered and sorted records currently shown
#[derive(Debug, Clone, Default)]
pub struct DerivedView {
    records: Vec<Arc<ProviderRecord>>,
}

impl DerivedView {
    pub fn records(&self) -> &[Arc<ProviderRecord>] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ProviderRecord>> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }
}

/// Derive the view for `state` from `store`.
pub fn derive(store: &RecordStore, state: &FilterState) -> DerivedView {
    let needle = state.trimmed_search().to_lowercase();

    let mut records: Vec<Arc<ProviderRecord>> = store
        .iter()
        .filter(|record| needle.is_empty() || record.name_contains_lowercase(&needle))
        .filter(|record| matches_consult_mode(record, state.consult_mode))
        .filter(|record| {
            state.selected_specialities.is_empty()
                || record
                    .specialities
                    .iter()
                    .any(|s| state.selected_specialities.contains(&s.name))
        })
        .cloned()
        .collect();

    // `sort_by` is stable, equal keys keep feed order
    match state.sort_key {
        SortKey::None => {}
        SortKey::FeesAscending => records.sort_by(|a, b| compare_fees(a, b)),
        SortKey::ExperienceDescending => records.sort_by(|a, b| compare_experience(a, b)),
    }

    DerivedView { records }
}

fn matches_consult_mode(record: &ProviderRecord, mode: ConsultMode) -> bool {
    match mode {
        ConsultMode::VideoOnly => record.video_consult,
        ConsultMode::ClinicOnly => record.in_clinic,
        ConsultMode::Both => record.supports_any_consult(),
    }
}

fn fee_key(record: &ProviderRecord) -> f64 {
    record.fee_value().unwrap_or(MISSING_FEE)
}

fn experience_key(record: &ProviderRecord) -> f64 {
    record.experience_value().unwrap_or(MISSING_EXPERIENCE)
}

fn compare_fees(a: &ProviderRecord, b: &ProviderRecord) -> Ordering {
    fee_key(a).total_cmp(&fee_key(b))
}

fn compare_experience(a: &ProviderRecord, b: &ProviderRecord) -> Ordering {
    experience_key(b).total_cmp(&experience_key(a))
}
