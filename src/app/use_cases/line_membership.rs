//! Use-Cases: Stationen in Linienverläufe einfügen und daraus entfernen.

use crate::app::{ChangeEntry, EditorState};
use anyhow::{bail, Result};
use std::sync::Arc;

/// Fügt eine bestehende Station an Position `index` in den Verlauf einer
/// Linie ein.
///
/// `Ok(false)` ist die reguläre Ablehnung (benachbartes Duplikat oder Index
/// außerhalb des Verlaufs) — dann wurde nichts verändert. Fehler nur bei
/// unbekannter Station oder Linie.
pub fn insert_station_into_line(
    state: &mut EditorState,
    line_id: u64,
    station_id: u64,
    index: usize,
) -> Result<bool> {
    if state.metro_map.station(station_id).is_none() {
        bail!("Unbekannte Station {}", station_id);
    }
    if state.metro_map.line(line_id).is_none() {
        bail!("Unbekannte Linie {}", line_id);
    }

    let map = Arc::make_mut(&mut state.metro_map);
    if !map.insert_station_into_line(line_id, station_id, index) {
        log::debug!(
            "Einfügen abgelehnt: Station {} an Position {} der Linie {}",
            station_id,
            index,
            line_id
        );
        return Ok(false);
    }
    super::debug_validate(map);

    state.change_log.append(ChangeEntry::LineMembership {
        station_id,
        line_id,
        station_index: index,
    });
    log::info!(
        "Station {} an Position {} in Linie {} eingefügt",
        station_id,
        index,
        line_id
    );
    Ok(true)
}

/// Entfernt den Verlaufs-Eintrag an Position `index` einer Linie.
///
/// `Ok(false)` wenn an `index` nicht die angegebene Station steht (nichts
/// verändert). Entstehende benachbarte Duplikate kollabieren; war es das
/// letzte Vorkommen, verliert die Station die Zugehörigkeit.
pub fn remove_station_from_line(
    state: &mut EditorState,
    station_id: u64,
    line_id: u64,
    index: usize,
) -> Result<bool> {
    if state.metro_map.station(station_id).is_none() {
        bail!("Unbekannte Station {}", station_id);
    }
    if state.metro_map.line(line_id).is_none() {
        bail!("Unbekannte Linie {}", line_id);
    }

    let map = Arc::make_mut(&mut state.metro_map);
    if !map.remove_station_from_line(station_id, line_id, index) {
        log::debug!(
            "Entfernen abgelehnt: Position {} der Linie {} führt nicht Station {}",
            index,
            line_id,
            station_id
        );
        return Ok(false);
    }
    super::debug_validate(map);

    state.change_log.append(ChangeEntry::LineMembership {
        station_id,
        line_id,
        station_index: index,
    });
    log::info!(
        "Station {} von Position {} der Linie {} entfernt",
        station_id,
        index,
        line_id
    );
    Ok(true)
}
