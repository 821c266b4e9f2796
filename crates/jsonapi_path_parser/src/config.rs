//! Configuration for path parsing and serialization.

use jsonapi_path_foundation::{
    DEFAULT_RELATIONSHIP_MARK, Error, ID_SEPARATOR, PATH_SEPARATOR, Result,
};

/// Configuration shared by the parser and the serializer.
///
/// Both sides must agree on the relationship marker for a serialized path
/// to parse back into the same chain.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathConfig {
    /// Reserved segment preceding a relationship linkage field.
    pub relationship_mark: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            relationship_mark: DEFAULT_RELATIONSHIP_MARK.to_string(),
        }
    }
}

impl PathConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the relationship marker.
    #[must_use]
    pub fn with_relationship_mark(mut self, mark: impl Into<String>) -> Self {
        self.relationship_mark = mark.into();
        self
    }

    /// Checks that the marker can appear as a single path segment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the marker is empty or contains a
    /// path or id separator.
    pub fn validate(&self) -> Result<()> {
        let mark = &self.relationship_mark;
        if mark.is_empty() {
            return Err(Error::config("relationship mark must not be empty"));
        }
        if mark.contains(PATH_SEPARATOR) || mark.contains(ID_SEPARATOR) {
            return Err(Error::config(format!(
                "relationship mark must not contain '{PATH_SEPARATOR}' or '{ID_SEPARATOR}': {mark}"
            )));
        }
        Ok(())
    }
}
