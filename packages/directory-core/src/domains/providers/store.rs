use std::collections::HashSet;
use std::sync::Arc;

use crate::domains::providers::models::ProviderRecord;

/// Immutable collection of provider records for one session
///
/// Populated once from the data source. Cloning shares the underlying records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Arc<ProviderRecord>>,
}

impl RecordStore {
    pub fn new(records: Vec<ProviderRecord>) -> Self {
        Self {
            records: records.into_iter().map(Arc::new).collect(),
        }
    }

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

    /// Distinct speciality names in first-seen order
    pub fn specialities(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .flat_map(|record| record.specialities.iter())
            .filter(|s| seen.insert(s.name.as_str()))
            .map(|s| s.name.clone())
            .collect()
    }
}

impl From<Vec<ProviderRecord>> for RecordStore {
    fn from(records: Vec<ProviderRecord>) -> Self {
        Self::new(records)
    }
}
