//! Application State — zentrale Datenhaltung.

use super::ChangeLog;
use crate::core::MetroMap;
use crate::shared::EditorOptions;
use std::sync::mpsc::Receiver;
use std::sync::Arc;

/// Hauptzustand des Editors.
///
/// Der Netzplan hängt als `Arc<MetroMap>` am State (Copy-on-Write): Use-Cases
/// klonen erst beim `Arc::make_mut`, und Beobachter mit einem älteren Arc
/// sehen bis dahin den letzten konsistenten Stand.
pub struct EditorState {
    /// Aktueller Netzplan
    pub metro_map: Arc<MetroMap>,
    /// Plan-Titel
    pub title: String,
    /// Hintergrundfarbe als `#RRGGBB`
    pub background_color: String,
    /// Dekodiertes Hintergrundbild (None = keins gesetzt oder noch in Arbeit)
    pub background_image: Option<image::DynamicImage>,
    /// Ansichts-Verschiebung X
    pub translate_x: f64,
    /// Ansichts-Verschiebung Y
    pub translate_y: f64,
    /// Ansichts-Maßstab
    pub scale: f64,
    /// Deckungs-Niveau des Hintergrundbilds (0.0..=1.0)
    pub opacity: f64,
    /// Protokoll ausgeführter Änderungen
    pub change_log: ChangeLog,
    /// Laufzeit-Optionen (Palette, Namensvorlagen, Kapazitäten)
    pub options: EditorOptions,
    /// Kanal der laufenden Hintergrundbild-Dekodierung
    pending_image: Option<Receiver<image::DynamicImage>>,
}

impl EditorState {
    /// Erstellt einen leeren Editor-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren Editor-State mit den gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let opacity = options.background_opacity_default.clamp(0.0, 1.0);
        Self {
            metro_map: Arc::new(MetroMap::new()),
            title: String::new(),
            background_color: "#ffffff".to_string(),
            background_image: None,
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            opacity,
            change_log: ChangeLog::new_with_capacity(options.change_log_capacity),
            options,
            pending_image: None,
        }
    }

    /// Gibt die Anzahl der Stationen zurück (für Anzeige)
    pub fn station_count(&self) -> usize {
        self.metro_map.station_count()
    }

    /// Gibt die Anzahl der Linien zurück (für Anzeige)
    pub fn line_count(&self) -> usize {
        self.metro_map.line_count()
    }

    /// Setzt das Deckungs-Niveau (wird auf 0.0..=1.0 begrenzt; nicht-finite
    /// Eingaben fallen auf den Options-Default zurück).
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            self.options.background_opacity_default.clamp(0.0, 1.0)
        };
    }

    /// Hinterlegt den Empfangskanal einer laufenden Bild-Dekodierung.
    pub fn set_pending_image(&mut self, receiver: Receiver<image::DynamicImage>) {
        self.pending_image = Some(receiver);
    }

    /// Prüft ob noch eine Bild-Dekodierung aussteht.
    pub fn has_pending_image(&self) -> bool {
        self.pending_image.is_some()
    }

    /// Holt ein fertig dekodiertes Hintergrundbild ab.
    ///
    /// Nicht blockierend; gibt `true` zurück wenn in diesem Aufruf ein Bild
    /// übernommen wurde. Ein geschlossener Kanal (Dekodierung fehlgeschlagen,
    /// der Fehler wurde dort bereits geloggt) räumt den Empfänger still ab.
    pub fn poll_background_image(&mut self) -> bool {
        use std::sync::mpsc::TryRecvError;
        let Some(receiver) = &self.pending_image else {
            return false;
        };
        match receiver.try_recv() {
            Ok(decoded) => {
                log::info!(
                    "Hintergrundbild übernommen ({}x{})",
                    decoded.width(),
                    decoded.height()
                );
                self.background_image = Some(decoded);
                self.pending_image = None;
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.pending_image = None;
                false
            }
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
