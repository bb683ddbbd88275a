//! Die zentrale MetroMap-Datenstruktur: Stationen und Linien als
//! beidseitig verzeigerte Inzidenz-Tabellen.

use super::{Direction, Line, Station};
use anyhow::{bail, Result};
use indexmap::IndexMap;

/// Container für den gesamten Netzplan.
///
/// Beide Tabellen sind über IDs verknüpft statt über Referenzen:
/// `Station::line_ids` und `Line::station_ids` müssen sich gegenseitig
/// abdecken (referentielle Geschlossenheit). Alle Kaskaden, die diese
/// Geschlossenheit erhalten, leben hier.
#[derive(Debug, Clone, Default)]
pub struct MetroMap {
    /// Alle Stationen, indexiert nach ihrer ID (deterministische Reihenfolge)
    stations: IndexMap<u64, Station>,
    /// Alle Linien, indexiert nach ihrer ID
    lines: IndexMap<u64, Line>,
}

impl MetroMap {
    /// Erstellt einen leeren Netzplan
    pub fn new() -> Self {
        Self::default()
    }

    // ── Lesezugriffe ──────────────────────────────────────────

    /// Station nach ID
    pub fn station(&self, id: u64) -> Option<&Station> {
        self.stations.get(&id)
    }

    /// Linie nach ID
    pub fn line(&self, id: u64) -> Option<&Line> {
        self.lines.get(&id)
    }

    /// Iterator über alle Stationen (deterministische Einfüge-Reihenfolge)
    pub fn stations_iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Iterator über alle Linien
    pub fn lines_iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    /// Stationen einer Linie in Verlaufs-Reihenfolge.
    ///
    /// `None` bei unbekannter Linie. Verlaufs-Einträge ohne zugehörige
    /// Station (Verletzung der Geschlossenheit) werden übersprungen.
    pub fn stations_in_line(&self, line_id: u64) -> Option<Vec<&Station>> {
        let line = self.lines.get(&line_id)?;
        Some(
            line.station_ids
                .iter()
                .filter_map(|sid| self.stations.get(sid))
                .collect(),
        )
    }

    /// Gibt die Anzahl der Stationen zurück
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Gibt die Anzahl der Linien zurück
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Berechnet die nächste freie Stations-ID
    pub fn next_station_id(&self) -> u64 {
        self.stations.keys().max().copied().unwrap_or(0) + 1
    }

    /// Berechnet die nächste freie Linien-ID
    pub fn next_line_id(&self) -> u64 {
        self.lines.keys().max().copied().unwrap_or(0) + 1
    }

    // ── Einfügen ──────────────────────────────────────────────

    /// Fügt eine Station hinzu (ohne Linienzugehörigkeit)
    pub fn add_station(&mut self, station: Station) {
        self.stations.insert(station.id, station);
    }

    /// Fügt eine Linie hinzu und trägt sie bei allen Verlaufs-Stationen ein
    pub fn add_line(&mut self, line: Line) {
        for &sid in &line.station_ids {
            if let Some(station) = self.stations.get_mut(&sid) {
                station.line_ids.insert(line.id);
            }
        }
        self.lines.insert(line.id, line);
    }

    // ── Kaskaden ──────────────────────────────────────────────

    /// Entfernt eine Station inklusive aller Verlaufs-Einträge.
    ///
    /// Jedes Vorkommen wird aus jeder referenzierenden Linie entfernt;
    /// dadurch benachbart gewordene Duplikate kollabieren (der frühere
    /// `bend_first`-Eintrag überlebt). Gibt die entfernte Station zurück.
    pub fn delete_station(&mut self, station_id: u64) -> Option<Station> {
        let station = self.stations.shift_remove(&station_id)?;
        for &lid in &station.line_ids {
            if let Some(line) = self.lines.get_mut(&lid) {
                line.remove_station_everywhere(station_id);
            }
        }
        Some(station)
    }

    /// Entfernt eine Linie und streicht sie bei allen Mitglieds-Stationen.
    pub fn delete_line(&mut self, line_id: u64) -> Option<Line> {
        let line = self.lines.shift_remove(&line_id)?;
        for &sid in &line.station_ids {
            if let Some(station) = self.stations.get_mut(&sid) {
                station.line_ids.shift_remove(&line_id);
            }
        }
        Some(line)
    }

    /// Fügt eine bestehende Station an Position `index` in den Verlauf einer
    /// Linie ein und pflegt die Zugehörigkeit nach.
    ///
    /// `false` wenn Station oder Linie unbekannt sind oder die Linie die
    /// Einfügung ablehnt (benachbartes Duplikat, Index außerhalb).
    pub fn insert_station_into_line(
        &mut self,
        line_id: u64,
        station_id: u64,
        index: usize,
    ) -> bool {
        if !self.stations.contains_key(&station_id) {
            return false;
        }
        let Some(line) = self.lines.get_mut(&line_id) else {
            return false;
        };
        if !line.insert_station(station_id, index) {
            return false;
        }
        if let Some(station) = self.stations.get_mut(&station_id) {
            station.line_ids.insert(line_id);
        }
        true
    }

    /// Entfernt den Verlaufs-Eintrag an Position `index` einer Linie.
    ///
    /// `false` wenn Linie unbekannt ist oder an `index` nicht die angegebene
    /// Station steht. War es das letzte Vorkommen, wird auch die
    /// Zugehörigkeit der Station gestrichen.
    pub fn remove_station_from_line(
        &mut self,
        station_id: u64,
        line_id: u64,
        index: usize,
    ) -> bool {
        let Some(line) = self.lines.get_mut(&line_id) else {
            return false;
        };
        if !line.remove_station_at(station_id, index) {
            return false;
        }
        if !line.contains(station_id) {
            if let Some(station) = self.stations.get_mut(&station_id) {
                station.line_ids.shift_remove(&line_id);
            }
        }
        true
    }

    // ── Feld-Setter (false = unbekannte ID) ───────────────────

    /// Benennt eine Station um
    pub fn set_station_name(&mut self, station_id: u64, name: String) -> bool {
        if let Some(station) = self.stations.get_mut(&station_id) {
            station.name = name;
            true
        } else {
            false
        }
    }

    /// Verschiebt eine Station (Gleitkomma-Eingabe wird gerastert)
    pub fn set_station_position(&mut self, station_id: u64, x: f64, y: f64) -> bool {
        if let Some(station) = self.stations.get_mut(&station_id) {
            station.position = Station::grid_position(x, y);
            true
        } else {
            false
        }
    }

    /// Ändert die Form-Kennung einer Station
    pub fn set_station_shape(&mut self, station_id: u64, shape: String) -> bool {
        if let Some(station) = self.stations.get_mut(&station_id) {
            station.shape = shape;
            true
        } else {
            false
        }
    }

    /// Setzt oder löscht (`None`) die Schild-Richtung einer Station
    pub fn set_station_tag_direction(
        &mut self,
        station_id: u64,
        direction: Option<Direction>,
    ) -> bool {
        if let Some(station) = self.stations.get_mut(&station_id) {
            station.tag_direction = direction;
            true
        } else {
            false
        }
    }

    /// Benennt eine Linie um
    pub fn set_line_name(&mut self, line_id: u64, name: String) -> bool {
        if let Some(line) = self.lines.get_mut(&line_id) {
            line.name = name;
            true
        } else {
            false
        }
    }

    /// Ändert die Farbe einer Linie
    pub fn set_line_color(&mut self, line_id: u64, color: String) -> bool {
        if let Some(line) = self.lines.get_mut(&line_id) {
            line.color = color;
            true
        } else {
            false
        }
    }

    /// Ändert das Kurzzeichen einer Linie
    pub fn set_line_sign(&mut self, line_id: u64, sign: String) -> bool {
        if let Some(line) = self.lines.get_mut(&line_id) {
            line.sign = sign;
            true
        } else {
            false
        }
    }

    /// Ändert den Sortierschlüssel einer Linie
    pub fn set_line_order(&mut self, line_id: u64, order: i32) -> bool {
        if let Some(line) = self.lines.get_mut(&line_id) {
            line.order = order;
            true
        } else {
            false
        }
    }

    /// Markiert eine Linie als Neben- bzw. Hauptlinie
    pub fn set_line_sub_line(&mut self, line_id: u64, sub_line: bool) -> bool {
        if let Some(line) = self.lines.get_mut(&line_id) {
            line.sub_line = sub_line;
            true
        } else {
            false
        }
    }

    /// Knick-Reihenfolge an Verlaufs-Position `index` einer Linie
    pub fn bend_first(&self, line_id: u64, index: usize) -> Option<bool> {
        self.lines.get(&line_id)?.bend_first_at(index)
    }

    /// Setzt die Knick-Reihenfolge an Verlaufs-Position `index`
    pub fn set_bend_first(&mut self, line_id: u64, index: usize, value: bool) -> bool {
        match self.lines.get_mut(&line_id) {
            Some(line) => line.set_bend_first(index, value),
            None => false,
        }
    }

    // ── Konsistenz ────────────────────────────────────────────

    /// Prüft alle strukturellen Invarianten des Netzplans.
    ///
    /// Geprüft werden referentielle Geschlossenheit in beide Richtungen,
    /// die Längengleichheit von Verlauf und `bend_first` sowie die
    /// Abwesenheit benachbarter Verlaufs-Duplikate.
    pub fn check_invariants(&self) -> Result<()> {
        for station in self.stations.values() {
            for &lid in &station.line_ids {
                let Some(line) = self.lines.get(&lid) else {
                    bail!(
                        "Station {} referenziert unbekannte Linie {}",
                        station.id,
                        lid
                    );
                };
                if !line.contains(station.id) {
                    bail!(
                        "Station {} referenziert Linie {}, die sie nicht führt",
                        station.id,
                        lid
                    );
                }
            }
        }
        for line in self.lines.values() {
            if line.station_ids.len() != line.bend_first.len() {
                bail!(
                    "Linie {}: Verlauf ({}) und bend_first ({}) sind nicht positionsgleich",
                    line.id,
                    line.station_ids.len(),
                    line.bend_first.len()
                );
            }
            for window in line.station_ids.windows(2) {
                if window[0] == window[1] {
                    bail!(
                        "Linie {}: benachbartes Duplikat von Station {}",
                        line.id,
                        window[0]
                    );
                }
            }
            for &sid in &line.station_ids {
                let Some(station) = self.stations.get(&sid) else {
                    bail!("Linie {} führt unbekannte Station {}", line.id, sid);
                };
                if !station.line_ids.contains(&line.id) {
                    bail!(
                        "Linie {} führt Station {}, die sie nicht referenziert",
                        line.id,
                        sid
                    );
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn station(id: u64) -> Station {
        Station::new(id, format!("S{id}"), IVec2::new(id as i32, 0), "circle".to_string())
    }

    fn map_with_stations(ids: &[u64]) -> MetroMap {
        let mut map = MetroMap::new();
        for &id in ids {
            map.add_station(station(id));
        }
        map
    }

    #[test]
    fn test_next_ids_are_max_plus_one() {
        let mut map = map_with_stations(&[1, 7, 3]);
        assert_eq!(map.next_station_id(), 8);
        assert_eq!(map.next_line_id(), 1);
        map.add_line(Line::new(5, "U5".to_string(), "#123456".to_string(), 1));
        assert_eq!(map.next_line_id(), 6);
    }

    #[test]
    fn test_add_line_registers_memberships() {
        let mut map = map_with_stations(&[1, 2]);
        let mut line = Line::new(1, "U1".to_string(), "#ff0000".to_string(), 1);
        assert!(line.insert_station(2, 1));
        map.add_line(line);

        assert!(map.station(1).expect("Station 1").line_ids.contains(&1));
        assert!(map.station(2).expect("Station 2").line_ids.contains(&1));
        map.check_invariants().expect("Invarianten nach add_line");
    }

    #[test]
    fn test_delete_station_cascades_and_collapses() {
        let mut map = map_with_stations(&[1, 2, 3]);
        let mut line = Line::new(1, "U1".to_string(), "#ff0000".to_string(), 1);
        assert!(line.insert_station(2, 1));
        assert!(line.insert_station(1, 2));
        assert!(line.insert_station(3, 3));
        map.add_line(line);

        // Verlauf 1-2-1-3: Entfernen der 2 lässt 1-1 kollabieren
        let removed = map.delete_station(2).expect("Station 2 entfernt");
        assert_eq!(removed.id, 2);
        assert_eq!(map.line(1).expect("Linie 1").station_ids, vec![1, 3]);
        assert!(map.station(2).is_none());
        map.check_invariants().expect("Invarianten nach Kaskade");
    }

    #[test]
    fn test_delete_line_strips_memberships() {
        let mut map = map_with_stations(&[1, 2]);
        let mut line = Line::new(1, "U1".to_string(), "#ff0000".to_string(), 1);
        assert!(line.insert_station(2, 1));
        map.add_line(line);

        let removed = map.delete_line(1).expect("Linie 1 entfernt");
        assert_eq!(removed.id, 1);
        assert!(map.station(1).expect("Station 1").line_ids.is_empty());
        assert!(map.station(2).expect("Station 2").line_ids.is_empty());
        map.check_invariants().expect("Invarianten nach delete_line");
    }

    #[test]
    fn test_insert_station_into_line_maintains_membership() {
        let mut map = map_with_stations(&[1, 2]);
        map.add_line(Line::new(1, "U1".to_string(), "#ff0000".to_string(), 1));

        assert!(map.insert_station_into_line(1, 2, 1));
        assert!(map.station(2).expect("Station 2").line_ids.contains(&1));
        // benachbartes Duplikat wird abgelehnt, nichts ändert sich
        assert!(!map.insert_station_into_line(1, 2, 1));
        assert!(!map.insert_station_into_line(1, 99, 0));
        assert!(!map.insert_station_into_line(99, 2, 0));
        assert_eq!(map.line(1).expect("Linie 1").station_ids, vec![1, 2]);
        map.check_invariants().expect("Invarianten nach Einfügen");
    }

    #[test]
    fn test_remove_last_occurrence_drops_membership() {
        let mut map = map_with_stations(&[1, 2, 3]);
        let mut line = Line::new(1, "U1".to_string(), "#ff0000".to_string(), 1);
        assert!(line.insert_station(2, 1));
        assert!(line.insert_station(3, 2));
        map.add_line(line);

        assert!(map.remove_station_from_line(2, 1, 1));
        assert!(!map.station(2).expect("Station 2").line_ids.contains(&1));
        map.check_invariants().expect("Invarianten nach Entfernen");
    }

    #[test]
    fn test_remove_keeps_membership_while_occurrences_remain() {
        let mut map = map_with_stations(&[1, 2, 3]);
        let mut line = Line::new(1, "U1".to_string(), "#ff0000".to_string(), 1);
        assert!(line.insert_station(2, 1));
        assert!(line.insert_station(1, 2));
        assert!(line.insert_station(3, 3));
        map.add_line(line);

        // Verlauf 1-2-1-3: erstes Vorkommen der 1 entfernen
        assert!(map.remove_station_from_line(1, 1, 0));
        assert!(map.station(1).expect("Station 1").line_ids.contains(&1));
        assert_eq!(map.line(1).expect("Linie 1").station_ids, vec![2, 1, 3]);
        map.check_invariants().expect("Invarianten nach Entfernen");
    }

    #[test]
    fn test_setters_report_unknown_ids() {
        let mut map = map_with_stations(&[1]);
        assert!(map.set_station_name(1, "Mitte".to_string()));
        assert!(!map.set_station_name(9, "Nirgendwo".to_string()));
        assert!(!map.set_line_color(9, "#000000".to_string()));
        assert!(!map.set_bend_first(9, 0, true));
    }

    #[test]
    fn test_position_setter_rounds_and_sanitizes() {
        let mut map = map_with_stations(&[1]);
        assert!(map.set_station_position(1, 10.6, f64::NAN));
        assert_eq!(map.station(1).expect("Station 1").position, IVec2::new(11, 0));
    }

    #[test]
    fn test_stations_in_line_preserves_path_order() {
        let mut map = map_with_stations(&[1, 2, 3]);
        let mut line = Line::new(1, "U1".to_string(), "#ff0000".to_string(), 3);
        assert!(line.insert_station(1, 1));
        assert!(line.insert_station(2, 2));
        map.add_line(line);

        let path: Vec<u64> = map
            .stations_in_line(1)
            .expect("Linie 1")
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(path, vec![3, 1, 2]);
        assert!(map.stations_in_line(9).is_none());
    }
}
