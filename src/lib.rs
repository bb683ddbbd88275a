//! Netzplan-Editor Library.
//! Strukturkern als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;

pub use app::{ChangeEntry, ChangeLog, EditorState};
pub use core::{color_for_line, BendHalf, Direction, Line, MetroMap, Station};
pub use json::{LineRecord, MapDocument, StationRecord};
pub use shared::EditorOptions;
