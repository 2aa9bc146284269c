//! Handling of the `clivo` front end's own arguments.
//!
//! This module turns what the user typed after `clivo` into the inputs of
//! the parser and the prompts:
//! - **Option declarations**: `NAME[:LETTER[:LABEL]]`
//! - **Choices**: `name` or `name=Label`
//! - **Workflow steps**: `KIND:MESSAGE[:CHOICE,...]`
//!
//! It also renders parse results for printing.

// Export public items from submodules
pub mod output;
pub mod processing;
pub mod request;

// Re-exports for convenience
pub use output::{render, OutputFormat};
pub use request::{build_request, Provider};
