//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::EditorOptions;
pub use options::{CHANGE_LOG_CAPACITY, DEFAULT_STATION_SHAPE};
