//! Use-Cases: Feld-Änderungen an einzelnen Linien.

use crate::app::EditorState;
use std::sync::Arc;

/// Benennt eine Linie um (`false` = unbekannte ID).
pub fn rename_line(state: &mut EditorState, line_id: u64, name: String) -> bool {
    Arc::make_mut(&mut state.metro_map).set_line_name(line_id, name)
}

/// Ändert die Farbe einer Linie (`false` = unbekannte ID).
pub fn set_line_color(state: &mut EditorState, line_id: u64, color: String) -> bool {
    Arc::make_mut(&mut state.metro_map).set_line_color(line_id, color)
}

/// Ändert das Kurzzeichen einer Linie (`false` = unbekannte ID).
pub fn set_line_sign(state: &mut EditorState, line_id: u64, sign: String) -> bool {
    Arc::make_mut(&mut state.metro_map).set_line_sign(line_id, sign)
}

/// Ändert den Sortierschlüssel einer Linie (`false` = unbekannte ID).
pub fn set_line_order(state: &mut EditorState, line_id: u64, order: i32) -> bool {
    Arc::make_mut(&mut state.metro_map).set_line_order(line_id, order)
}

/// Markiert eine Linie als Neben- bzw. Hauptlinie (`false` = unbekannte ID).
pub fn set_line_sub_line(state: &mut EditorState, line_id: u64, sub_line: bool) -> bool {
    Arc::make_mut(&mut state.metro_map).set_line_sub_line(line_id, sub_line)
}

/// Setzt die Knick-Reihenfolge an Verlaufs-Position `index`
/// (`false` = unbekannte Linie oder Index außerhalb des Verlaufs).
pub fn set_bend_first(state: &mut EditorState, line_id: u64, index: usize, value: bool) -> bool {
    Arc::make_mut(&mut state.metro_map).set_bend_first(line_id, index, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::{add_line, add_station};

    fn state_with_line() -> (EditorState, u64) {
        let mut state = EditorState::new();
        let seed = add_station::add_station(&mut state, 0.0, 0.0);
        let line = add_line::add_line(&mut state, seed).expect("Linie");
        (state, line)
    }

    #[test]
    fn test_scalar_setters() {
        let (mut state, line) = state_with_line();

        assert!(rename_line(&mut state, line, "Ringbahn".to_string()));
        assert!(set_line_color(&mut state, line, "#123abc".to_string()));
        assert!(set_line_sign(&mut state, line, "S41".to_string()));
        assert!(set_line_order(&mut state, line, -3));
        assert!(set_line_sub_line(&mut state, line, true));

        let stored = state.metro_map.line(line).expect("Linie");
        assert_eq!(stored.name, "Ringbahn");
        assert_eq!(stored.color, "#123abc");
        assert_eq!(stored.sign, "S41");
        assert_eq!(stored.order, -3);
        assert!(stored.sub_line);
    }

    #[test]
    fn test_setters_report_unknown_line() {
        let mut state = EditorState::new();
        assert!(!rename_line(&mut state, 5, "X".to_string()));
        assert!(!set_line_order(&mut state, 5, 1));
        assert!(!set_bend_first(&mut state, 5, 0, true));
    }

    #[test]
    fn test_bend_first_index_bounds() {
        let (mut state, line) = state_with_line();
        assert!(set_bend_first(&mut state, line, 0, false));
        assert_eq!(state.metro_map.bend_first(line, 0), Some(false));
        assert!(!set_bend_first(&mut state, line, 4, true));
    }
}
