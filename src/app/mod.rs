//! Application-Layer: State, Änderungsprotokoll und Use-Cases.

pub mod change_log;
pub mod state;
pub mod use_cases;

pub use change_log::{ChangeEntry, ChangeLog};
pub use state::EditorState;
