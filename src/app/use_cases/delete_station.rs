//! Use-Case: Station löschen (mit Kaskade über alle Linienverläufe).

use crate::app::{ChangeEntry, EditorState};
use anyhow::{bail, Result};
use std::sync::Arc;

/// Löscht eine Station.
///
/// Jedes Vorkommen verschwindet aus jedem Linienverlauf; dabei benachbart
/// gewordene Duplikate kollabieren. Die entfernte Station wandert als Kopie
/// ins Änderungsprotokoll.
pub fn delete_station(state: &mut EditorState, station_id: u64) -> Result<()> {
    let map = Arc::make_mut(&mut state.metro_map);
    let Some(removed) = map.delete_station(station_id) else {
        bail!("Unbekannte Station {}", station_id);
    };
    super::debug_validate(map);

    log::info!(
        "Station {} gelöscht (war auf {} Linien)",
        station_id,
        removed.line_ids.len()
    );
    state.change_log.append(ChangeEntry::StationSnapshot(removed));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::{add_line, add_station, line_membership};

    #[test]
    fn test_delete_unknown_station_fails() {
        let mut state = EditorState::new();
        assert!(delete_station(&mut state, 7).is_err());
    }

    #[test]
    fn test_delete_cascades_through_lines() {
        let mut state = EditorState::new();
        let a = add_station::add_station(&mut state, 0.0, 0.0);
        let b = add_station::add_station(&mut state, 10.0, 0.0);
        let c = add_station::add_station(&mut state, 20.0, 0.0);
        let line = add_line::add_line(&mut state, a).expect("Linie");
        assert!(line_membership::insert_station_into_line(&mut state, line, b, 1)
            .expect("Einfügen"));
        assert!(line_membership::insert_station_into_line(&mut state, line, c, 2)
            .expect("Einfügen"));

        delete_station(&mut state, b).expect("Löschen");

        assert!(state.metro_map.station(b).is_none());
        assert_eq!(
            state.metro_map.line(line).expect("Linie").station_ids,
            vec![a, c]
        );
        state
            .metro_map
            .check_invariants()
            .expect("Invarianten nach Kaskade");
    }
}
