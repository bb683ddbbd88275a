//! Zufällige Mutationsfolgen: nach jedem Schritt müssen die strukturellen
//! Invarianten des Netzplans halten.

use metro_map_editor::app::use_cases::{
    add_line, add_station, delete_line, delete_station, line_fields, line_membership,
    station_fields,
};
use metro_map_editor::EditorState;

/// Kleiner deterministischer Generator (LCG), damit der Test reproduzierbar
/// bleibt ohne zusätzliche Abhängigkeit.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound.max(1)
    }
}

fn random_station_id(state: &EditorState, rng: &mut Lcg) -> Option<u64> {
    let ids: Vec<u64> = state.metro_map.stations_iter().map(|s| s.id).collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids[rng.below(ids.len() as u64) as usize])
    }
}

fn random_line_id(state: &EditorState, rng: &mut Lcg) -> Option<u64> {
    let ids: Vec<u64> = state.metro_map.lines_iter().map(|l| l.id).collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids[rng.below(ids.len() as u64) as usize])
    }
}

/// Führt `steps` zufällige Operationen aus und prüft nach jeder einzelnen
/// die Invarianten. Abgelehnte Edits und Fehler auf unbekannte IDs sind
/// erlaubte Ausgänge; Invariantenbrüche nicht.
fn run_sequence(seed: u64, steps: u32) {
    let mut rng = Lcg(seed);
    let mut state = EditorState::new();

    for step in 0..steps {
        match rng.below(10) {
            // Stationen anlegen (häufig, damit die Karte wächst)
            0 | 1 => {
                let x = rng.below(200) as f64 - 100.0;
                let y = rng.below(200) as f64 - 100.0;
                add_station::add_station(&mut state, x, y);
            }
            2 => {
                if let Some(seed_station) = random_station_id(&state, &mut rng) {
                    add_line::add_line(&mut state, seed_station).expect("Seed existiert");
                }
            }
            3 => {
                if let Some(id) = random_station_id(&state, &mut rng) {
                    delete_station::delete_station(&mut state, id).expect("Station existiert");
                }
            }
            4 => {
                if let Some(id) = random_line_id(&state, &mut rng) {
                    delete_line::delete_line(&mut state, id).expect("Linie existiert");
                }
            }
            5 | 6 => {
                if let (Some(line), Some(station)) = (
                    random_line_id(&state, &mut rng),
                    random_station_id(&state, &mut rng),
                ) {
                    let len = state.metro_map.line(line).expect("Linie").station_ids.len();
                    let index = rng.below(len as u64 + 2) as usize;
                    // Ok(false) = reguläre Ablehnung
                    line_membership::insert_station_into_line(&mut state, line, station, index)
                        .expect("IDs existieren");
                }
            }
            7 => {
                if let Some(line) = random_line_id(&state, &mut rng) {
                    let path = state.metro_map.line(line).expect("Linie").station_ids.clone();
                    if !path.is_empty() {
                        let index = rng.below(path.len() as u64) as usize;
                        line_membership::remove_station_from_line(
                            &mut state,
                            path[index],
                            line,
                            index,
                        )
                        .expect("IDs existieren");
                    }
                }
            }
            8 => {
                if let Some(id) = random_station_id(&state, &mut rng) {
                    let x = rng.below(200) as f64 - 100.0;
                    let y = rng.below(200) as f64 - 100.0;
                    station_fields::move_station(&mut state, id, x, y)
                        .expect("Station existiert");
                }
            }
            _ => {
                if let Some(line) = random_line_id(&state, &mut rng) {
                    let len = state.metro_map.line(line).expect("Linie").station_ids.len();
                    let index = rng.below(len as u64 + 1) as usize;
                    // false bei Index außerhalb ist in Ordnung
                    line_fields::set_bend_first(&mut state, line, index, rng.below(2) == 0);
                }
            }
        }

        state
            .metro_map
            .check_invariants()
            .unwrap_or_else(|e| panic!("Invariante nach Schritt {} verletzt: {}", step, e));
    }
}

#[test]
fn test_zufallsfolge_haelt_invarianten_seed_1() {
    run_sequence(1, 400);
}

#[test]
fn test_zufallsfolge_haelt_invarianten_seed_42() {
    run_sequence(42, 400);
}

#[test]
fn test_zufallsfolge_haelt_invarianten_seed_2024() {
    run_sequence(2024, 400);
}
