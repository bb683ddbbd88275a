use super::Direction;
use glam::IVec2;
use indexmap::IndexSet;

/// Repräsentiert eine Station im Netzplan.
/// Eine Station kennt die IDs aller Linien, die über sie verlaufen;
/// die Gegenrichtung der Referenz liegt in `Line::station_ids`.
#[derive(Debug, Clone)]
pub struct Station {
    /// Eindeutige Stations-ID
    pub id: u64,
    /// Anzeigename
    pub name: String,
    /// Position im Integer-Raster des Plans
    pub position: IVec2,
    /// Form-Kennung (opaker Tag, z.B. "circle"; wird hier nicht interpretiert)
    pub shape: String,
    /// IDs aller Linien, die diese Station enthalten
    pub line_ids: IndexSet<u64>,
    /// Richtung des Namensschilds; `None` = Host-Default
    pub tag_direction: Option<Direction>,
}

impl Station {
    /// Erstellt eine neue Station ohne Linienzugehörigkeit
    pub fn new(id: u64, name: String, position: IVec2, shape: String) -> Self {
        Self {
            id,
            name,
            position,
            shape,
            line_ids: IndexSet::new(),
            tag_direction: None,
        }
    }

    /// Rundet Gleitkomma-Koordinaten auf das Integer-Raster.
    ///
    /// Nicht-finite Eingaben (NaN, ±inf) werden auf 0 abgebildet, damit aus
    /// fehlerhaften Host-Eingaben nie eine unbrauchbare Position entsteht.
    pub fn grid_position(x: f64, y: f64) -> IVec2 {
        let clamp = |v: f64| if v.is_finite() { v.round() as i32 } else { 0 };
        IVec2::new(clamp(x), clamp(y))
    }
}
