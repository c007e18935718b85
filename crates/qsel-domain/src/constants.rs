//! Domain layer constants

// ============================================================================
// QUALIFIER CONSTANTS
// ============================================================================

/// Name of the conventional string-valued qualifier (`named(value=...)`)
pub const NAMED_QUALIFIER: &str = "named";

/// Member holding the value of a `named` qualifier
pub const NAMED_VALUE_MEMBER: &str = "value";

/// Separator between qualifiers in their textual list form
pub const QUALIFIER_LIST_SEPARATOR: char = ',';
