//! Use-Cases der Application-Layer-Orchestrierung.
//!
//! Jede mutierende Operation arbeitet auf `&mut EditorState`, führt genau
//! ein `Arc::make_mut` aus und hinterlässt den Netzplan invariant-konform.

pub mod add_line;
pub mod add_station;
pub mod delete_line;
pub mod delete_station;
pub mod line_fields;
pub mod line_membership;
pub mod station_fields;

use crate::core::MetroMap;

/// Entwicklungs-Prüfung nach einer Mutation: Verstöße brechen im Debug-Build
/// ab und werden im Release nur geloggt.
pub(crate) fn debug_validate(map: &MetroMap) {
    if let Err(e) = map.check_invariants() {
        log::error!("Invariante verletzt: {e}");
        debug_assert!(false, "Invariante verletzt: {e}");
    }
}
