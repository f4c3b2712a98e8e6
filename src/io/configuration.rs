//! Runtime defaults and safety limits

/// Fixed seed for reproducible carving
pub const DEFAULT_SEED: u64 = 42;

/// Default cell rows for carved mazes
pub const DEFAULT_ROWS: usize = 10;

/// Default cell columns for carved mazes
pub const DEFAULT_COLS: usize = 10;

/// Default expansion budget before the search gives up
pub const DEFAULT_MAX_EXPANSIONS: usize = 1_000_000;

// Safety limit to prevent excessive memory allocation
/// Maximum carved cell rows or columns
pub const MAX_CARVE_DIMENSION: usize = 1_000;

/// Expansions between progress callbacks
pub const PROGRESS_UPDATE_INTERVAL: usize = 1_024;
