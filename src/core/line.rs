/// Repräsentiert eine Linie im Netzplan.
///
/// Der Linienverlauf ist die geordnete Stationsfolge `station_ids`; Stationen
/// dürfen mehrfach vorkommen (Schleifen), nur nie an benachbarten Positionen.
/// `bend_first` läuft positionsgleich mit: pro Verlaufseintrag bestimmt das
/// Flag, ob das Segment zur Folgestation mit dem Diagonal-Teilschritt beginnt.
#[derive(Debug, Clone)]
pub struct Line {
    /// Eindeutige Linien-ID
    pub id: u64,
    /// Anzeigename
    pub name: String,
    /// Linienfarbe als `#RRGGBB`
    pub color: String,
    /// Kurzzeichen (Liniensignal)
    pub sign: String,
    /// Sortierschlüssel für die Linienliste
    pub order: i32,
    /// Geordneter Linienverlauf (Stations-IDs)
    pub station_ids: Vec<u64>,
    /// Knick-Reihenfolge je Verlaufseintrag, positionsgleich zu `station_ids`
    pub bend_first: Vec<bool>,
    /// Nebenlinie (wird in Übersichten untergeordnet dargestellt)
    pub sub_line: bool,
}

impl Line {
    /// Erstellt eine neue Linie mit einer einzelnen Start-Station
    pub fn new(id: u64, name: String, color: String, seed_station: u64) -> Self {
        Self {
            id,
            name,
            color,
            sign: id.to_string(),
            order: id as i32,
            station_ids: vec![seed_station],
            bend_first: vec![true],
            sub_line: false,
        }
    }

    /// Prüft ob die Station im Verlauf vorkommt
    pub fn contains(&self, station_id: u64) -> bool {
        self.station_ids.contains(&station_id)
    }

    /// Fügt eine Station an Position `index` in den Verlauf ein.
    ///
    /// Abgelehnt (`false`, Verlauf unverändert) wenn `index` außerhalb von
    /// `0..=len` liegt oder die Einfügung ein benachbartes Duplikat erzeugen
    /// würde (gleiche Station direkt vor oder an `index`).
    pub fn insert_station(&mut self, station_id: u64, index: usize) -> bool {
        if index > self.station_ids.len() {
            return false;
        }
        if index > 0 && self.station_ids[index - 1] == station_id {
            return false;
        }
        if index < self.station_ids.len() && self.station_ids[index] == station_id {
            return false;
        }
        self.station_ids.insert(index, station_id);
        self.bend_first.insert(index, true);
        true
    }

    /// Entfernt den Verlaufseintrag an Position `index`.
    ///
    /// Abgelehnt (`false`, Verlauf unverändert) wenn an `index` nicht die
    /// angegebene Station steht. Entstehen durch die Entfernung benachbarte
    /// Duplikate, werden sie kollabiert; der frühere `bend_first`-Eintrag
    /// überlebt.
    pub fn remove_station_at(&mut self, station_id: u64, index: usize) -> bool {
        if self.station_ids.get(index) != Some(&station_id) {
            return false;
        }
        self.station_ids.remove(index);
        self.bend_first.remove(index);
        self.collapse_adjacent_duplicates();
        true
    }

    /// Entfernt jedes Vorkommen der Station aus dem Verlauf (Kaskade beim
    /// Löschen einer Station). Gibt `true` zurück wenn sich etwas geändert hat.
    pub fn remove_station_everywhere(&mut self, station_id: u64) -> bool {
        let before = self.station_ids.len();
        let mut kept_ids = Vec::with_capacity(before);
        let mut kept_bends = Vec::with_capacity(before);
        for (&sid, &bend) in self.station_ids.iter().zip(&self.bend_first) {
            if sid == station_id || kept_ids.last() == Some(&sid) {
                continue;
            }
            kept_ids.push(sid);
            kept_bends.push(bend);
        }
        self.station_ids = kept_ids;
        self.bend_first = kept_bends;
        self.station_ids.len() != before
    }

    /// Kollabiert benachbarte Duplikate im Verlauf (der frühere
    /// `bend_first`-Eintrag bleibt erhalten).
    pub fn collapse_adjacent_duplicates(&mut self) -> bool {
        let before = self.station_ids.len();
        let mut read = 1;
        while read < self.station_ids.len() {
            if self.station_ids[read] == self.station_ids[read - 1] {
                self.station_ids.remove(read);
                self.bend_first.remove(read);
            } else {
                read += 1;
            }
        }
        self.station_ids.len() != before
    }

    /// Knick-Reihenfolge an Position `index` (`None` außerhalb des Verlaufs)
    pub fn bend_first_at(&self, index: usize) -> Option<bool> {
        self.bend_first.get(index).copied()
    }

    /// Setzt die Knick-Reihenfolge an Position `index`
    pub fn set_bend_first(&mut self, index: usize, value: bool) -> bool {
        match self.bend_first.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}
