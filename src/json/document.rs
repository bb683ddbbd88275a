//! Serde-Dokumentmodell des JSON-Austauschformats (camelCase-Schlüssel).

use crate::core::{Direction, Line, Station};
use serde::{Deserialize, Serialize};

/// Station im Austauschformat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    /// Stations-ID
    pub station_id: u64,
    /// Anzeigename
    pub station_name: String,
    /// Position als `[x, y]`
    pub position: [i32; 2],
    /// Form-Kennung
    pub shape: String,
    /// IDs der Linien über diese Station
    #[serde(default)]
    pub line_ids: Vec<u64>,
    /// Schild-Richtung als flacher Code 0..=16; fehlend = Host-Default
    #[serde(
        default,
        with = "direction_code",
        skip_serializing_if = "Option::is_none"
    )]
    pub tag_direction: Option<Direction>,
}

/// Linie im Austauschformat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    /// Linien-ID
    pub line_id: u64,
    /// Anzeigename
    pub line_name: String,
    /// Farbe als `#RRGGBB`
    pub color: String,
    /// Geordneter Linienverlauf
    #[serde(default)]
    pub station_ids: Vec<u64>,
    /// Kurzzeichen
    pub sign: String,
    /// Sortierschlüssel
    pub order: i32,
    /// Knick-Reihenfolge, positionsgleich zu `stationIds`
    #[serde(default)]
    pub bend_first: Vec<bool>,
    /// Nebenlinie; fehlend = `false`
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub sub_line: bool,
}

/// Wurzel des Austauschformats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDocument {
    /// Alle Stationen
    #[serde(default)]
    pub stations: Vec<StationRecord>,
    /// Alle Linien
    #[serde(default)]
    pub lines: Vec<LineRecord>,
    /// Plan-Titel
    #[serde(default)]
    pub title: String,
    /// Hintergrundfarbe
    #[serde(default = "default_background_color")]
    pub background_color: String,
    /// Ansichts-Verschiebung X
    #[serde(default)]
    pub translate_x: f64,
    /// Ansichts-Verschiebung Y
    #[serde(default)]
    pub translate_y: f64,
    /// Ansichts-Maßstab
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Deckungs-Niveau des Hintergrundbilds
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Hintergrundbild, base64-kodiert (optional mit `data:`-Präfix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_background_color() -> String {
    "#ffffff".to_string()
}

fn default_scale() -> f64 {
    1.0
}

fn default_opacity() -> f64 {
    1.0
}

/// Serde-Helfer: `Option<Direction>` als flacher Richtungscode.
mod direction_code {
    use crate::core::Direction;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<Direction>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(direction) => serializer.serialize_u8(direction.code()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Direction>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<u8>::deserialize(deserializer)? {
            None => Ok(None),
            Some(code) => Direction::from_code(code).map(Some).ok_or_else(|| {
                serde::de::Error::custom(format!("Ungültiger Richtungscode {code}"))
            }),
        }
    }
}

impl StationRecord {
    /// Erstellt den Austausch-Datensatz einer Station
    pub fn from_station(station: &Station) -> Self {
        Self {
            station_id: station.id,
            station_name: station.name.clone(),
            position: [station.position.x, station.position.y],
            shape: station.shape.clone(),
            line_ids: station.line_ids.iter().copied().collect(),
            tag_direction: station.tag_direction,
        }
    }

    /// Baut die Domänen-Station aus dem Datensatz
    pub fn into_station(self) -> Station {
        Station {
            id: self.station_id,
            name: self.station_name,
            position: glam::IVec2::new(self.position[0], self.position[1]),
            shape: self.shape,
            line_ids: self.line_ids.into_iter().collect(),
            tag_direction: self.tag_direction,
        }
    }
}

impl LineRecord {
    /// Erstellt den Austausch-Datensatz einer Linie
    pub fn from_line(line: &Line) -> Self {
        Self {
            line_id: line.id,
            line_name: line.name.clone(),
            color: line.color.clone(),
            station_ids: line.station_ids.clone(),
            sign: line.sign.clone(),
            order: line.order,
            bend_first: line.bend_first.clone(),
            sub_line: line.sub_line,
        }
    }

    /// Baut die Domänen-Linie aus dem Datensatz.
    ///
    /// `bendFirst` wird auf die Pfadlänge normalisiert: fehlende Einträge
    /// werden mit `true` aufgefüllt, überzählige abgeschnitten.
    pub fn into_line(self) -> Line {
        let mut bend_first = self.bend_first;
        bend_first.resize(self.station_ids.len(), true);
        Line {
            id: self.line_id,
            name: self.line_name,
            color: self.color,
            sign: self.sign,
            order: self.order,
            station_ids: self.station_ids,
            bend_first,
            sub_line: self.sub_line,
        }
    }
}
