//! Lookup results and the conditions attached to them.

use super::PostalRecord;

/// Lookup failure: no data is returned
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("postal code '{code}' not found")]
    NotFound { code: String },
}

/// Advisory attached to a successful lookup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupWarning {
    #[error("postal code '{code}' has {count} locations")]
    MultipleMatches { code: String, count: usize },
}

/// Records found for a postal code, in dataset order.
///
/// A code shared by several localities yields every record plus
/// [`LookupWarning::MultipleMatches`]; check [`Matches::warning`] before
/// settling on the first record.
#[derive(Debug, Clone, Copy)]
pub struct Matches<'a> {
    code: &'a str,
    records: &'a [PostalRecord],
}

impl<'a> Matches<'a> {
    pub(crate) fn new(code: &'a str, records: &'a [PostalRecord]) -> Self {
        Self { code, records }
    }

    pub fn code(&self) -> &'a str {
        self.code
    }

    pub fn records(&self) -> &'a [PostalRecord] {
        self.records
    }

    /// First record in dataset order. Never `None` for a lookup hit.
    pub fn first(&self) -> Option<&'a PostalRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_ambiguous(&self) -> bool {
        self.records.len() > 1
    }

    pub fn warning(&self) -> Option<LookupWarning> {
        self.is_ambiguous().then(|| LookupWarning::MultipleMatches {
            code: self.code.to_string(),
            count: self.records.len(),
        })
    }

    pub fn into_vec(self) -> Vec<PostalRecord> {
        self.records.to_vec()
    }
}

impl<'a> IntoIterator for Matches<'a> {
    type Item = &'a PostalRecord;
    type IntoIter = std::slice::Iter<'a, PostalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
