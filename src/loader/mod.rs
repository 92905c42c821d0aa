//! GeoNames postal code dataset loader.
//!
//! The export is one record per line with 12 tab-separated columns:
//!
//! ```text
//! country  code  place  admin1  admin1_code  admin2  admin2_code  admin3  admin3_code  lat  lon  accuracy
//! ```
//!
//! Only the country, code, place, admin1, admin1 code and coordinates are
//! kept. Any malformed line rejects the whole dataset.

mod error;
mod options;

pub use error::{Coordinate, LoadError};
pub use options::{CountryScan, LoadOptions};

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::{debug, info};

use crate::models::{PostalIndex, PostalRecord};

/// Columns per line in a GeoNames postal code export
pub const FIELD_COUNT: usize = 12;

const COUNTRY: usize = 0;
const CODE: usize = 1;
const PLACE_NAME: usize = 2;
const ADMIN_NAME: usize = 3;
const STATE_CODE: usize = 4;
const LATITUDE: usize = 9;
const LONGITUDE: usize = 10;

impl PostalIndex {
    /// Load every record of the dataset
    pub fn load_all<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Self::load_with(path, &LoadOptions::all())
    }

    /// Load only the records of one ISO country code (case-insensitive)
    pub fn load_by_country<P: AsRef<Path>>(path: P, country: &str) -> Result<Self, LoadError> {
        Self::load_with(path, &LoadOptions::country(country))
    }

    /// Load a dataset file. Paths ending in `.gz` are decompressed.
    pub fn load_with<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self, LoadError> {
        let path = path.as_ref();
        // Reject a bad filter before touching the file
        options.country_filter()?;

        info!(
            "Loading postal codes from {} (country: {})",
            path.display(),
            options.country.as_deref().unwrap_or("all")
        );

        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader: Box<dyn Read> = if path.extension().is_some_and(|e| e == "gz") {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };

        let index =
            Self::from_reader(reader, options).map_err(|e| e.with_path(path.to_path_buf()))?;

        info!(
            "Loaded {} records for {} postal codes",
            index.record_count(),
            index.len()
        );
        Ok(index)
    }

    /// Load a dataset from any reader in a single pass.
    ///
    /// Lines end at `\n`; one trailing `\r` is dropped. Every line read,
    /// blank ones included, must have exactly [`FIELD_COUNT`] fields.
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self, LoadError> {
        let country = options.country_filter()?;

        let mut reader = BufReader::new(reader);
        let mut buffer = Vec::new();
        let mut line: u64 = 0;

        let mut index = PostalIndex::new();
        let mut in_country = false;

        loop {
            buffer.clear();
            let read = reader
                .read_until(b'\n', &mut buffer)
                .map_err(LoadError::Read)?;
            if read == 0 {
                break;
            }
            line += 1;

            let text = std::str::from_utf8(strip_line_ending(&buffer))
                .map_err(|_| LoadError::Encoding { line })?;
            let fields: Vec<&str> = text.split('\t').collect();

            if fields.len() != FIELD_COUNT {
                return Err(LoadError::MalformedRecord {
                    line,
                    fields: fields.len(),
                });
            }

            if let Some(country) = &country {
                if fields[COUNTRY] != country.as_str() {
                    if in_country && options.scan == CountryScan::StopAfterGroup {
                        debug!("Leaving country {} at line {}, stopping scan", country, line);
                        break;
                    }
                    continue;
                }
                in_country = true;
            }

            index.insert(parse_record(&fields, line)?);
        }

        Ok(index)
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn parse_record(fields: &[&str], line: u64) -> Result<PostalRecord, LoadError> {
    Ok(PostalRecord {
        code: fields[CODE].to_string(),
        place_name: fields[PLACE_NAME].to_string(),
        admin_name: fields[ADMIN_NAME].to_string(),
        state_code: fields[STATE_CODE].to_string(),
        latitude: parse_coordinate(fields[LATITUDE], Coordinate::Latitude, line)?,
        longitude: parse_coordinate(fields[LONGITUDE], Coordinate::Longitude, line)?,
    })
}

fn parse_coordinate(value: &str, coordinate: Coordinate, line: u64) -> Result<f64, LoadError> {
    value.parse::<f64>().map_err(|_| LoadError::NumericFormat {
        line,
        coordinate,
        value: value.to_string(),
    })
}
