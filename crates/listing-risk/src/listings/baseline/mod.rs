mod normalizer;
mod parser;

use normalizer::normalize_neighborhood;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Reference averages for one neighborhood; both values are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NeighborhoodAverages {
    pub average_deposit: f64,
    pub average_rent: f64,
}

impl NeighborhoodAverages {
    fn is_usable(&self) -> bool {
        [self.average_deposit, self.average_rent]
            .iter()
            .all(|value| value.is_finite() && *value > 0.0)
    }
}

/// Read-only table of neighborhood averages keyed by neighborhood name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeighborhoodBaseline {
    entries: HashMap<String, NeighborhoodAverages>,
}

impl NeighborhoodBaseline {
    pub fn lookup(&self, neighborhood: &str) -> Option<&NeighborhoodAverages> {
        self.entries.get(&normalize_neighborhood(neighborhood))
    }

    pub fn contains(&self, neighborhood: &str) -> bool {
        self.lookup(neighborhood).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Neighborhood names in alphabetical order.
    pub fn neighborhoods(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Builds a table from in-memory entries. Later duplicates do not replace earlier ones,
/// and entries with non-positive averages are ignored.
impl<S: AsRef<str>> FromIterator<(S, NeighborhoodAverages)> for NeighborhoodBaseline {
    fn from_iter<I: IntoIterator<Item = (S, NeighborhoodAverages)>>(iter: I) -> Self {
        let mut entries = HashMap::new();
        for (name, averages) in iter {
            let key = normalize_neighborhood(name.as_ref());
            if key.is_empty() || !averages.is_usable() {
                continue;
            }
            entries.entry(key).or_insert(averages);
        }
        Self { entries }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BaselineImportError {
    #[error("failed to read neighborhood baseline: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid neighborhood baseline CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads the neighborhood-average CSV (`동,평균보증금,평균월세`).
pub struct BaselineImporter;

impl BaselineImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<NeighborhoodBaseline, BaselineImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let baseline = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            neighborhoods = baseline.len(),
            "neighborhood baseline loaded"
        );
        Ok(baseline)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<NeighborhoodBaseline, BaselineImportError> {
        let mut entries: HashMap<String, NeighborhoodAverages> = HashMap::new();

        for record in parser::parse_records(reader)? {
            match record {
                Ok((neighborhood, averages)) => {
                    if entries.contains_key(&neighborhood) {
                        warn!(%neighborhood, "duplicate baseline row ignored");
                        continue;
                    }
                    entries.insert(neighborhood, averages);
                }
                Err(rejection) => {
                    warn!(
                        line = rejection.line,
                        reason = %rejection.reason,
                        "baseline row skipped"
                    );
                }
            }
        }

        Ok(NeighborhoodBaseline { entries })
    }
}
