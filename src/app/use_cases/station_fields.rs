//! Use-Cases: Feld-Änderungen an einzelnen Stationen.

use crate::app::{ChangeEntry, EditorState};
use crate::core::Direction;
use anyhow::{bail, Result};
use std::sync::Arc;

/// Verschiebt eine Station und protokolliert den Schritt (von → nach).
pub fn move_station(state: &mut EditorState, station_id: u64, x: f64, y: f64) -> Result<()> {
    let Some(from) = state.metro_map.station(station_id).map(|s| s.position) else {
        bail!("Unbekannte Station {}", station_id);
    };

    let map = Arc::make_mut(&mut state.metro_map);
    map.set_station_position(station_id, x, y);
    let to = map
        .station(station_id)
        .map(|s| s.position)
        .unwrap_or(from);
    super::debug_validate(map);

    state.change_log.append(ChangeEntry::PositionChange {
        station_id,
        from,
        to,
    });
    log::debug!("Station {} verschoben: {:?} → {:?}", station_id, from, to);
    Ok(())
}

/// Benennt eine Station um (`false` = unbekannte ID).
pub fn rename_station(state: &mut EditorState, station_id: u64, name: String) -> bool {
    Arc::make_mut(&mut state.metro_map).set_station_name(station_id, name)
}

/// Ändert die Form-Kennung einer Station (`false` = unbekannte ID).
pub fn set_station_shape(state: &mut EditorState, station_id: u64, shape: String) -> bool {
    Arc::make_mut(&mut state.metro_map).set_station_shape(station_id, shape)
}

/// Setzt oder löscht die Schild-Richtung einer Station (`false` = unbekannte ID).
pub fn set_station_tag_direction(
    state: &mut EditorState,
    station_id: u64,
    direction: Option<Direction>,
) -> bool {
    Arc::make_mut(&mut state.metro_map).set_station_tag_direction(station_id, direction)
}
