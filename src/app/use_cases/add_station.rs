//! Use-Case: Neue Station an einer Planposition anlegen.

use crate::app::{ChangeEntry, EditorState};
use crate::core::Station;
use std::sync::Arc;

/// Legt eine neue Station an der gegebenen Position an.
///
/// ID, Name (aus der Vorlage) und Form kommen aus den Optionen; die Station
/// startet ohne Linienzugehörigkeit. Gibt die vergebene ID zurück.
pub fn add_station(state: &mut EditorState, x: f64, y: f64) -> u64 {
    let new_id = state.metro_map.next_station_id();
    let name = state.options.station_name_for(new_id);
    let shape = state.options.default_station_shape.clone();

    let map = Arc::make_mut(&mut state.metro_map);
    let station = Station::new(new_id, name, Station::grid_position(x, y), shape);
    map.add_station(station.clone());
    super::debug_validate(map);

    state.change_log.append(ChangeEntry::StationSnapshot(station));
    log::info!("Station {} an ({:.1}, {:.1}) angelegt", new_id, x, y);
    new_id
}

/// Legt eine Station aus einer protokollierten Kopie neu an (Wiederherstellung
/// nach einem zurückgenommenen Löschen).
///
/// Die Kopie bekommt eine frische ID; Linienzugehörigkeiten werden nicht
/// übernommen, da die Verlaufs-Einträge beim Löschen kaskadiert entfernt
/// wurden. Gibt die neue ID zurück.
pub fn add_station_from_record(state: &mut EditorState, record: Station) -> u64 {
    let map = Arc::make_mut(&mut state.metro_map);
    let new_id = map.next_station_id();
    let station = Station {
        id: new_id,
        line_ids: Default::default(),
        ..record
    };
    map.add_station(station.clone());
    super::debug_validate(map);

    state.change_log.append(ChangeEntry::StationSnapshot(station));
    log::info!("Station {} aus Protokoll wiederhergestellt", new_id);
    new_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_add_station_assigns_fresh_id_and_defaults() {
        let mut state = EditorState::new();
        let first = add_station(&mut state, 10.4, 20.6);
        let second = add_station(&mut state, 0.0, 0.0);
        assert_eq!(first, 1);
        assert_eq!(second, 2);

        let station = state.metro_map.station(first).expect("Station 1");
        assert_eq!(station.name, "Station 1");
        assert_eq!(station.position, IVec2::new(10, 21));
        assert_eq!(station.shape, "circle");
        assert!(station.line_ids.is_empty());
        assert_eq!(state.change_log.len(), 2);
    }

    #[test]
    fn test_add_station_uses_custom_name_template() {
        let mut state = EditorState::new();
        state.options.station_name_template = "Halt {id}".to_string();
        let id = add_station(&mut state, 0.0, 0.0);
        assert_eq!(state.metro_map.station(id).expect("Station").name, "Halt 1");
    }

    #[test]
    fn test_add_from_record_takes_fresh_id() {
        let mut state = EditorState::new();
        add_station(&mut state, 0.0, 0.0);

        let mut record = state
            .metro_map
            .station(1)
            .expect("Station 1")
            .clone();
        record.name = "Altstadt".to_string();
        let new_id = add_station_from_record(&mut state, record);

        assert_eq!(new_id, 2);
        let restored = state.metro_map.station(2).expect("Station 2");
        assert_eq!(restored.name, "Altstadt");
        assert!(restored.line_ids.is_empty());
    }
}
