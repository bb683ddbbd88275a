//! Zentrale Konfiguration für den Netzplan-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Benennung ───────────────────────────────────────────────────────

/// Namensvorlage für neue Stationen (`{id}` wird ersetzt).
pub const STATION_NAME_TEMPLATE: &str = "Station {id}";
/// Namensvorlage für neue Linien (`{id}` wird ersetzt).
pub const LINE_NAME_TEMPLATE: &str = "Linie {id}";
/// Form-Kennung neuer Stationen.
pub const DEFAULT_STATION_SHAPE: &str = "circle";

// ── Änderungsprotokoll ──────────────────────────────────────────────

/// Maximale Anzahl gemerkter Änderungen (älteste werden verdrängt).
pub const CHANGE_LOG_CAPACITY: usize = 1000;

// ── Ansicht ─────────────────────────────────────────────────────────

/// Standard-Deckungs-Niveau des Hintergrundbilds.
pub const BACKGROUND_OPACITY_DEFAULT: f64 = 1.0;

/// Standard-Linienpalette: Linie `n` erhält Eintrag `n-1`.
fn default_line_palette() -> Vec<String> {
    [
        "#e4002b", "#0098d8", "#f39800", "#00ac9a", "#8f76d6", "#9caeb7",
        "#00a7db", "#9c5e31", "#d7c447", "#b5b5ac",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `metro_map_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Benennung ───────────────────────────────────────────────
    /// Namensvorlage für neue Stationen (`{id}` wird ersetzt)
    pub station_name_template: String,
    /// Namensvorlage für neue Linien (`{id}` wird ersetzt)
    pub line_name_template: String,
    /// Form-Kennung neuer Stationen
    pub default_station_shape: String,

    // ── Farben ──────────────────────────────────────────────────
    /// Linienpalette; Linie `n` erhält Eintrag `n-1`, danach Fallback
    #[serde(default = "default_line_palette")]
    pub line_palette: Vec<String>,

    // ── Änderungsprotokoll ──────────────────────────────────────
    /// Kapazität des Änderungsprotokolls
    #[serde(default = "default_change_log_capacity")]
    pub change_log_capacity: usize,

    // ── Ansicht ─────────────────────────────────────────────────
    /// Standard-Deckungs-Niveau des Hintergrundbilds
    #[serde(default = "default_background_opacity")]
    pub background_opacity_default: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            station_name_template: STATION_NAME_TEMPLATE.to_string(),
            line_name_template: LINE_NAME_TEMPLATE.to_string(),
            default_station_shape: DEFAULT_STATION_SHAPE.to_string(),
            line_palette: default_line_palette(),
            change_log_capacity: CHANGE_LOG_CAPACITY,
            background_opacity_default: BACKGROUND_OPACITY_DEFAULT,
        }
    }
}

/// Serde-Default für `change_log_capacity` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_change_log_capacity() -> usize {
    CHANGE_LOG_CAPACITY
}

/// Serde-Default für `background_opacity_default` (Abwärtskompatibilität).
fn default_background_opacity() -> f64 {
    BACKGROUND_OPACITY_DEFAULT
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("metro_map_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("metro_map_editor.toml")
    }

    /// Füllt eine Namensvorlage mit der vergebenen ID.
    pub fn station_name_for(&self, id: u64) -> String {
        self.station_name_template.replace("{id}", &id.to_string())
    }

    /// Füllt die Linien-Namensvorlage mit der vergebenen ID.
    pub fn line_name_for(&self, id: u64) -> String {
        self.line_name_template.replace("{id}", &id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_templates_replace_id() {
        let opts = EditorOptions::default();
        assert_eq!(opts.station_name_for(7), "Station 7");
        assert_eq!(opts.line_name_for(2), "Linie 2");
    }

    #[test]
    fn test_toml_roundtrip() {
        let opts = EditorOptions::default();
        let toml_text = toml::to_string_pretty(&opts).expect("TOML-Export");
        let parsed: EditorOptions = toml::from_str(&toml_text).expect("TOML-Import");
        assert_eq!(parsed.line_palette, opts.line_palette);
        assert_eq!(parsed.change_log_capacity, opts.change_log_capacity);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let toml_text = r#"
            station_name_template = "Halt {id}"
            line_name_template = "Linie {id}"
            default_station_shape = "square"
        "#;
        let parsed: EditorOptions = toml::from_str(toml_text).expect("TOML-Import");
        assert_eq!(parsed.station_name_for(1), "Halt 1");
        assert_eq!(parsed.change_log_capacity, CHANGE_LOG_CAPACITY);
        assert!(!parsed.line_palette.is_empty());
    }
}
