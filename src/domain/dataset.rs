use super::launch::LaunchRecord;
use super::selection::PayloadRange;
use std::collections::BTreeSet;

/// The launch dataset: loaded once, read-only afterwards.
///
/// There is no mutating API; the engine and the dashboard borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
}

impl Dataset {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed `[min_payload, max_payload]`, or `None` for an empty dataset.
    pub fn payload_bounds(&self) -> Option<PayloadRange> {
        let mut masses = self.records.iter().map(|r| r.payload_mass_kg);
        let first = masses.next()?;
        let (min, max) = masses.fold((first, first), |(lo, hi), m| (lo.min(m), hi.max(m)));
        Some(PayloadRange { min, max })
    }

    /// Distinct launch sites, sorted.
    pub fn sites(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.launch_site.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }
}

impl FromIterator<LaunchRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = LaunchRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
