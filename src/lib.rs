//! gostrap materializes a parameterized Go web project skeleton on disk
//! from templates bundled into the binary, substituting per-project
//! variables into each file.

/// Command-line interface module for the gostrap application
pub mod cli;

/// Per-run substitution variables and project-name validation
pub mod context;

/// Error types and handling for the gostrap application
pub mod error;

/// Generation orchestration and progress reporting
pub mod generator;

/// Author identity lookup from the global git configuration
pub mod identity;

/// Logger initialization
pub mod logger;

/// The ordered template-to-destination mapping defining a project's shape
pub mod manifest;

/// Destination directory planning and creation
pub mod planner;

/// Template substitution engine
/// Handles the actual template processing logic
pub mod renderer;

/// Bundled template resources
pub mod store;
