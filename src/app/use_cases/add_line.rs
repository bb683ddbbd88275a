//! Use-Case: Neue Linie mit einer Start-Station anlegen.

use crate::app::EditorState;
use crate::core::{color_for_line, Line};
use anyhow::{bail, Result};
use std::sync::Arc;

/// Legt eine neue Linie an, deren Verlauf mit `seed_station` beginnt.
///
/// Farbe kommt aus der Palette (Eintrag `id-1`, danach deterministischer
/// Fallback), Name aus der Vorlage, Kurzzeichen und Sortierschlüssel aus der
/// ID. Gibt die vergebene Linien-ID zurück.
pub fn add_line(state: &mut EditorState, seed_station: u64) -> Result<u64> {
    if state.metro_map.station(seed_station).is_none() {
        bail!("Unbekannte Station {}", seed_station);
    }
    let new_id = state.metro_map.next_line_id();
    let name = state.options.line_name_for(new_id);
    let color = color_for_line(&state.options.line_palette, new_id);

    let map = Arc::make_mut(&mut state.metro_map);
    let line = Line::new(new_id, name, color, seed_station);
    map.add_line(line);
    super::debug_validate(map);

    log::info!("Linie {} ab Station {} angelegt", new_id, seed_station);
    Ok(new_id)
}
