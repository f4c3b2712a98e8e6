/// Randomized depth-first maze carving
pub mod carve;
/// Move alphabet and move-sequence handling
pub mod moves;
/// Breadth-first search over move sequences
pub mod search;
