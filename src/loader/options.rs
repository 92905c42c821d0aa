use super::LoadError;

/// How a country-filtered load treats lines outside the requested country
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountryScan {
    /// Stop at the first non-matching line after the country's block.
    /// GeoNames exports are grouped by country, so nothing is lost on them;
    /// an unsorted file is silently truncated.
    #[default]
    StopAfterGroup,
    /// Read every line, skipping those of other countries.
    Full,
}

/// Options for a single dataset load
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub country: Option<String>,
    pub scan: CountryScan,
}

impl LoadOptions {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn country(country: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            scan: CountryScan::default(),
        }
    }

    pub fn with_scan(mut self, scan: CountryScan) -> Self {
        self.scan = scan;
        self
    }

    /// Validated, upper-cased country filter
    pub(crate) fn country_filter(&self) -> Result<Option<String>, LoadError> {
        match &self.country {
            None => Ok(None),
            Some(country) if country.chars().count() == 2 => Ok(Some(country.to_uppercase())),
            Some(country) => Err(LoadError::InvalidCountry {
                value: country.clone(),
            }),
        }
    }
}
