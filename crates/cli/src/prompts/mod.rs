//! Interactive line-based prompts.
//!
//! Every prompt is a plain question and answer over a [`Terminal`]: a
//! numbered choice list, free text, a number, a fixed sequence of those
//! (a workflow), or a menu whose entries run actions and may open further
//! menus.
//!
//! Invalid answers to choice and number prompts are reported and the
//! question is asked again until a valid answer arrives or input closes.

// Export public items from submodules
pub mod input;
pub mod terminal;
pub mod types;
pub mod workflow;

// Re-exports for convenience
pub use input::{prompt_number, prompt_options, prompt_text};
pub use terminal::{install_interrupt_handler, StdTerminal, Terminal};
pub use types::{Choice, MenuAction, MenuItem, WorkflowAnswer, WorkflowStep};
pub use workflow::{prompt_menu, prompt_workflow};
