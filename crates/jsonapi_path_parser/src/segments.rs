//! Path segmentation.
//!
//! Splits a raw request path into segments and walks them left to right.

use jsonapi_path_foundation::PATH_SEPARATOR;

/// Cursor over the segments of a raw path.
#[derive(Clone, Debug)]
pub struct PathSegments<'a> {
    segments: Vec<&'a str>,
    position: usize,
    relationship_mark: &'a str,
}

impl<'a> PathSegments<'a> {
    /// Creates a cursor over `raw`, treating `relationship_mark` as reserved.
    #[must_use]
    pub fn new(raw: &'a str, relationship_mark: &'a str) -> Self {
        Self {
            segments: Self::split(raw),
            position: 0,
            relationship_mark,
        }
    }

    /// Splits a raw path into segments.
    ///
    /// - Trims surrounding whitespace
    /// - Strips one leading and one trailing separator
    /// - Drops trailing empty segments; interior ones are kept
    #[must_use]
    pub fn split(raw: &'a str) -> Vec<&'a str> {
        let trimmed = raw.trim();
        let trimmed = trimmed.strip_prefix(PATH_SEPARATOR).unwrap_or(trimmed);
        let trimmed = trimmed.strip_suffix(PATH_SEPARATOR).unwrap_or(trimmed);

        let mut segments: Vec<&str> = trimmed.split(PATH_SEPARATOR).collect();
        while segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }
        segments
    }

    /// Returns true if the path holds no segment at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the total number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Index of the next unconsumed segment.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true once every segment has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.segments.len()
    }

    /// Returns the next segment without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a str> {
        self.segments.get(self.position).copied()
    }

    /// Returns the next segment unless it is the relationship marker.
    #[must_use]
    pub fn peek_element(&self) -> Option<&'a str> {
        self.peek().filter(|s| *s != self.relationship_mark)
    }

    /// Consumes the next segment.
    pub fn advance(&mut self) -> Option<&'a str> {
        let segment = self.peek()?;
        self.position += 1;
        Some(segment)
    }

    /// Consumes the next segment if it is the relationship marker.
    pub fn advance_if_marker(&mut self) -> bool {
        if self.peek() == Some(self.relationship_mark) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the next segment unless it is the relationship marker.
    pub fn advance_element(&mut self) -> Option<&'a str> {
        let segment = self.peek_element()?;
        self.position += 1;
        Some(segment)
    }
}
