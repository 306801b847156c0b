//! City catalog: maps each [`City`] to the CSV file holding its trips.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::filters::City;

/// Resolves data files for each city under a data directory.
///
/// Defaults to the shipped file names. Overrides are read from a plain JSON
/// object on disk:
/// ```json
/// {
///   "chicago": "chicago_2017.csv",
///   "new york city": "/data/nyc/trips.csv"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CityCatalog {
    data_dir: PathBuf,
    entries: HashMap<City, String>,
}

impl CityCatalog {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let entries = City::ALL
            .into_iter()
            .map(|city| (city, city.default_file_name().to_string()))
            .collect();
        Self {
            data_dir: data_dir.into(),
            entries,
        }
    }

    /// Applies overrides from a JSON file at `path`.
    pub fn with_overrides_file(self, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading city catalog {}", path.display()))?;
        let entries: HashMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("parsing city catalog {}", path.display()))?;
        self.with_overrides(entries)
    }

    /// Replaces the file for each named city. Keys are parsed like prompt answers.
    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Result<Self> {
        for (name, file) in overrides {
            let city: City = name.parse()?;
            self.entries.insert(city, file);
        }
        Ok(self)
    }

    pub fn file_name(&self, city: City) -> &str {
        self.entries
            .get(&city)
            .map(String::as_str)
            .unwrap_or_else(|| city.default_file_name())
    }

    /// Full path of the city's data file. Absolute overrides are used as-is.
    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(self.file_name(city))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
