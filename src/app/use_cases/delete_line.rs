//! Use-Case: Linie löschen und bei allen Stationen austragen.

use crate::app::EditorState;
use anyhow::{bail, Result};
use std::sync::Arc;

/// Löscht eine Linie. Alle Mitglieds-Stationen verlieren die Zugehörigkeit;
/// die Stationen selbst bleiben bestehen.
pub fn delete_line(state: &mut EditorState, line_id: u64) -> Result<()> {
    let map = Arc::make_mut(&mut state.metro_map);
    let Some(removed) = map.delete_line(line_id) else {
        bail!("Unbekannte Linie {}", line_id);
    };
    super::debug_validate(map);

    log::info!(
        "Linie {} gelöscht ({} Verlaufs-Einträge)",
        line_id,
        removed.station_ids.len()
    );
    Ok(())
}
