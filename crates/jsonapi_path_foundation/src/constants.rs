//! Separators and reserved tokens of the path grammar.

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// Separator between identifiers inside an id segment.
pub const ID_SEPARATOR: char = ',';

/// Reserved segment announcing the linkage form of a relationship.
pub const DEFAULT_RELATIONSHIP_MARK: &str = "relationships";
