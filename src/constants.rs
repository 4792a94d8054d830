/// Common constants used across the termfold project.
///
/// These defaults are used for command line arguments and
/// configuration when explicit values are not provided.

/// Upper bound on the number of mapping hops a resolution will walk.
/// Requests asking for more are clamped to this value.
pub const MAX_MAPPING_DISTANCE: u32 = 3;

/// Default number of mapping hops when a request does not specify one.
pub const DEFAULT_MAPPING_DISTANCE: u32 = 3;
