use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::BikeshareError;

/// Rows shown per page when browsing raw trip data.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Which cities can be explored and where their trip logs live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Directory that relative city file paths are resolved against
    pub data_dir: PathBuf,
    /// Rows per page of raw data
    pub page_size: usize,
    /// Lower-case city name -> CSV file
    pub cities: BTreeMap<String, PathBuf>,
}

/// On-disk shape of the config file; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    data_dir: Option<PathBuf>,
    page_size: Option<usize>,
    cities: Option<BTreeMap<String, PathBuf>>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        let cities = [
            ("chicago", "chicago.csv"),
            ("new york city", "new_york_city.csv"),
            ("washington", "washington.csv"),
        ]
        .into_iter()
        .map(|(city, file)| (city.to_string(), PathBuf::from(file)))
        .collect();

        Self {
            data_dir: PathBuf::from("."),
            page_size: DEFAULT_PAGE_SIZE,
            cities,
        }
    }
}

impl ExplorerConfig {
    /// Parse a TOML config. Keys left out keep their default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bikeshare_explorer::ExplorerConfig;
    ///
    /// let config = ExplorerConfig::from_toml_str("page_size = 10").unwrap();
    /// assert_eq!(config.page_size, 10);
    /// assert!(config.cities.contains_key("chicago"));
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, BikeshareError> {
        let raw: RawConfig = toml::from_str(text)?;
        let mut config = Self::default();

        if let Some(dir) = raw.data_dir {
            config.data_dir = dir;
        }
        if let Some(size) = raw.page_size {
            if size == 0 {
                return Err(BikeshareError::ParseError(
                    "page_size must be at least 1".to_string(),
                ));
            }
            config.page_size = size;
        }
        if let Some(cities) = raw.cities {
            if cities.is_empty() {
                return Err(BikeshareError::ParseError(
                    "at least one city must be configured".to_string(),
                ));
            }
            config.cities = cities
                .into_iter()
                .map(|(city, file)| (city.trim().to_lowercase(), file))
                .collect();
        }

        Ok(config)
    }

    /// Load a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BikeshareError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Configured city names, sorted.
    pub fn city_names(&self) -> Vec<&str> {
        self.cities.keys().map(String::as_str).collect()
    }

    /// Resolve the CSV path for a city; relative paths are joined onto `data_dir`.
    pub fn city_path(&self, city: &str) -> Result<PathBuf, BikeshareError> {
        let file = self
            .cities
            .get(&city.trim().to_lowercase())
            .ok_or_else(|| BikeshareError::UnknownCity(city.to_string()))?;
        if file.is_absolute() {
            Ok(file.clone())
        } else {
            Ok(self.data_dir.join(file))
        }
    }
}
