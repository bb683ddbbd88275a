//! Lineares Änderungsprotokoll mit Cursor für Undo/Redo.

use crate::core::Station;
use glam::IVec2;

/// Ein protokollierter Bearbeitungsschritt.
///
/// Das Protokoll speichert nur die Daten, die der Host zum Wiederherstellen
/// braucht; das Abspielen selbst läuft über die Use-Cases.
#[derive(Debug, Clone)]
pub enum ChangeEntry {
    /// Station wurde angelegt oder gelöscht (vollständige Kopie)
    StationSnapshot(Station),
    /// Station wurde in einen Linienverlauf eingefügt oder daraus entfernt
    LineMembership {
        /// Betroffene Station
        station_id: u64,
        /// Betroffene Linie
        line_id: u64,
        /// Verlaufs-Position der Änderung
        station_index: usize,
    },
    /// Station wurde verschoben
    PositionChange {
        /// Betroffene Station
        station_id: u64,
        /// Position vor der Verschiebung
        from: IVec2,
        /// Position nach der Verschiebung
        to: IVec2,
    },
}

/// Lineares Protokoll ausgeführter Änderungen.
///
/// Der Cursor zeigt auf den zuletzt angewandten Eintrag (`None` = noch keine
/// Änderung bzw. alles zurückgenommen). Ein `append` nach Undo-Schritten
/// verwirft den wiederherstellbaren Rest; bei voller Kapazität werden die
/// ältesten Einträge verdrängt.
#[derive(Debug)]
pub struct ChangeLog {
    entries: Vec<ChangeEntry>,
    cursor: Option<usize>,
    capacity: usize,
}

impl Default for ChangeLog {
    fn default() -> Self {
        Self::new_with_capacity(crate::shared::CHANGE_LOG_CAPACITY)
    }
}

impl ChangeLog {
    /// Erstellt ein leeres Protokoll mit der gegebenen Kapazität.
    pub fn new_with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    /// Hängt eine Änderung an.
    ///
    /// Alles hinter dem Cursor wird verworfen (ein neuer Zweig ersetzt den
    /// Redo-Rest), dann rückt der Cursor auf den neuen Eintrag.
    pub fn append(&mut self, entry: ChangeEntry) {
        let keep = match self.cursor {
            Some(index) => index + 1,
            None => 0,
        };
        self.entries.truncate(keep);
        self.entries.push(entry);
        if self.entries.len() > self.capacity {
            let evict = self.entries.len() - self.capacity;
            self.entries.drain(..evict);
        }
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Nimmt den Eintrag am Cursor zurück und liefert ihn zum Abspielen.
    /// `None` wenn nichts zurückzunehmen ist.
    pub fn undo(&mut self) -> Option<ChangeEntry> {
        let index = self.cursor?;
        let entry = self.entries[index].clone();
        self.cursor = index.checked_sub(1);
        Some(entry)
    }

    /// Rückt den Cursor vor und liefert den wiederherzustellenden Eintrag.
    /// `None` am Ende des Protokolls.
    pub fn redo(&mut self) -> Option<ChangeEntry> {
        let next = match self.cursor {
            Some(index) => index + 1,
            None => 0,
        };
        if next >= self.entries.len() {
            return None;
        }
        self.cursor = Some(next);
        Some(self.entries[next].clone())
    }

    /// Prüft ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    /// Prüft ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        match self.cursor {
            Some(index) => index + 1 < self.entries.len(),
            None => !self.entries.is_empty(),
        }
    }

    /// Gibt die Anzahl der protokollierten Einträge zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
