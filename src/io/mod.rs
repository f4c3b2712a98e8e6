/// Command-line interface and solve orchestration
pub mod cli;
/// Runtime defaults and safety limits
pub mod configuration;
/// Error types for carving, searching, and file output
pub mod error;
/// Live search progress display
pub mod progress;
