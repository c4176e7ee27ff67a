use super::launch::{Kilograms, LaunchRecord, Outcome};
use serde::Serialize;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Value the site dropdown uses for "no site constraint".
pub const ALL_SITES: &str = "ALL";

/// Launch site constraint chosen in the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteFilter {
    #[default]
    All,
    Site(String),
}

impl SiteFilter {
    pub fn site(name: impl Into<String>) -> Self {
        Self::Site(name.into())
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            Self::All => true,
            Self::Site(site) => record.launch_site == *site,
        }
    }
}

impl FromStr for SiteFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == ALL_SITES {
            Ok(Self::All)
        } else {
            Ok(Self::Site(s.to_string()))
        }
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_SITES),
            Self::Site(site) => f.write_str(site),
        }
    }
}

/// Closed payload interval `[min, max]` in kilograms.
///
/// Bounds are not validated: an inverted range simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PayloadRange {
    pub min: Kilograms,
    pub max: Kilograms,
}

impl PayloadRange {
    pub fn new(min: impl Into<Kilograms>, max: impl Into<Kilograms>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    pub fn contains(&self, mass: Kilograms) -> bool {
        self.min <= mass && mass <= self.max
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Key of one pie slice.
///
/// Grouping is by site when every site is selected and by outcome class when a
/// single site is selected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Site(String),
    Outcome(Outcome),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Site(site) => f.write_str(site),
            Self::Outcome(outcome) => write!(f, "{outcome}"),
        }
    }
}

/// Counts per group. Groups without matching records are absent, never zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuccessSummary {
    counts: BTreeMap<GroupKey, usize>,
}

impl SuccessSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: GroupKey) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    pub fn get(&self, key: &GroupKey) -> Option<usize> {
        self.counts.get(key).copied()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, usize)> {
        self.counts.iter().map(|(key, count)| (key, *count))
    }
}

impl FromIterator<GroupKey> for SuccessSummary {
    fn from_iter<I: IntoIterator<Item = GroupKey>>(iter: I) -> Self {
        let mut summary = Self::new();
        for key in iter {
            summary.increment(key);
        }
        summary
    }
}

/// One scatter chart point: payload on x, outcome class on y, colored by booster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScatterPoint {
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: Kilograms,
    #[serde(rename = "class")]
    pub outcome: Outcome,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            launch_site: record.launch_site.clone(),
            payload_mass_kg: record.payload_mass_kg,
            outcome: record.outcome,
            booster_version_category: record.booster_version_category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_site_filter_parsing() {
        assert_eq!("ALL".parse::<SiteFilter>().unwrap(), SiteFilter::All);
        assert_eq!(
            " KSC LC-39A ".parse::<SiteFilter>().unwrap(),
            SiteFilter::site("KSC LC-39A")
        );
        // The sentinel is case-sensitive, like the dropdown value it mirrors.
        assert_eq!("all".parse::<SiteFilter>().unwrap(), SiteFilter::site("all"));
        assert_eq!(SiteFilter::All.to_string(), "ALL");
    }

    #[test]
    fn test_payload_range_inclusive() {
        let range = PayloadRange::new(dec!(500), dec!(1500));
        assert!(range.contains(Kilograms::new(dec!(500))));
        assert!(range.contains(Kilograms::new(dec!(1500.0))));
        assert!(!range.contains(Kilograms::new(dec!(1500.01))));
        assert!(!range.contains(Kilograms::new(dec!(499.99))));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = PayloadRange::new(dec!(2000), dec!(1000));
        assert!(!range.contains(Kilograms::new(dec!(1500))));
        assert!(!range.contains(Kilograms::new(dec!(1000))));
    }

    #[test]
    fn test_summary_counts_and_omits_empty_groups() {
        let summary: SuccessSummary = ["A", "B", "A"]
            .into_iter()
            .map(|site| GroupKey::Site(site.to_string()))
            .collect();

        assert_eq!(summary.get(&GroupKey::Site("A".into())), Some(2));
        assert_eq!(summary.get(&GroupKey::Site("C".into())), None);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary.total(), 3);
    }
}
