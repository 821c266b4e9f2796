//! Identifier lists.
//!
//! An id segment such as `1,2,3` addresses one or more instances of a
//! resource type. Identifiers stay raw strings; coercing them to the key type
//! of a repository is the caller's business.

use std::fmt;

use crate::constants::ID_SEPARATOR;

/// Ordered identifiers parsed from a single path segment.
///
/// Order is significant and duplicates are kept, so a list re-joins to the
/// segment it was parsed from. A parsed list is never empty: splitting an
/// empty segment yields one empty identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdList {
    ids: Vec<String>,
}

impl IdList {
    /// Creates a list from already separated identifiers.
    ///
    /// The list may be empty here; a path chain rejects an empty list.
    #[must_use]
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }

    /// Splits a path segment on [`ID_SEPARATOR`].
    ///
    /// Empty pieces are preserved verbatim (`"1,"` gives `["1", ""]`).
    #[must_use]
    pub fn parse(segment: &str) -> Self {
        Self {
            ids: segment.split(ID_SEPARATOR).map(str::to_owned).collect(),
        }
    }

    /// Returns the identifiers in path order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Returns the number of identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the list holds no identifiers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns true if more than one instance is selected.
    #[must_use]
    pub fn is_many(&self) -> bool {
        self.ids.len() > 1
    }

    /// Returns the identifier when exactly one is present.
    #[must_use]
    pub fn single(&self) -> Option<&str> {
        match self.ids.as_slice() {
            [id] => Some(id),
            _ => None,
        }
    }

    /// Iterates over the identifiers in path order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Consumes the list, returning the identifiers.
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.ids
    }
}

impl From<Vec<String>> for IdList {
    fn from(ids: Vec<String>) -> Self {
        Self::new(ids)
    }
}

/// Splits like [`IdList::parse`], so `"1,2"` holds two identifiers.
impl From<&str> for IdList {
    fn from(segment: &str) -> Self {
        Self::parse(segment)
    }
}

impl fmt::Display for IdList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.ids.iter().enumerate() {
            if i > 0 {
                write!(f, "{ID_SEPARATOR}")?;
            }
            f.write_str(id)?;
        }
        Ok(())
    }
}
