//! JSON Import/Export für Netzplan-Dokumente.
//!
//! Das Austauschformat nutzt camelCase-Schlüssel und flache Arrays; der
//! Reader überführt sie in die ID-indizierten Tabellen der `MetroMap`.

pub mod document;
pub mod reader;
pub mod writer;

pub use document::{LineRecord, MapDocument, StationRecord};
pub use reader::{apply_document, load_from_file, load_from_str, parse_document};
pub use writer::{build_document, save_to_file, to_json_string};
