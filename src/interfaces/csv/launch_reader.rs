use crate::domain::dataset::Dataset;
use crate::domain::launch::LaunchRecord;
use crate::error::{DashboardError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads launch records from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<LaunchRecord>`.
/// It trims whitespace and ignores columns the dashboard does not use.
pub struct LaunchReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> LaunchReader<R> {
    /// Creates a new `LaunchReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes launch records.
    ///
    /// Errors carry the 1-based data row they were found on.
    pub fn records(self) -> impl Iterator<Item = Result<LaunchRecord>> {
        self.reader
            .into_deserialize::<LaunchRecord>()
            .enumerate()
            .map(|(i, result)| {
                result.map_err(|source| DashboardError::InvalidRow { row: i + 1, source })
            })
    }

    /// Reads the whole source into a `Dataset`, stopping at the first bad row.
    pub fn into_dataset(self) -> Result<Dataset> {
        let dataset = self.records().collect::<Result<Dataset>>()?;
        if dataset.is_empty() {
            return Err(DashboardError::EmptyDataset);
        }
        Ok(dataset)
    }
}

/// Loads the launch dataset from a CSV file.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let dataset = LaunchReader::new(File::open(path)?).into_dataset()?;
    log::info!(
        "loaded {} launch records from {} ({} sites, payload {})",
        dataset.len(),
        path.display(),
        dataset.sites().len(),
        dataset
            .payload_bounds()
            .map(|b| b.to_string())
            .unwrap_or_default()
    );
    Ok(dataset)
}
