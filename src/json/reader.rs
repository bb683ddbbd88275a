//! Reader: Austauschdokument → Editor-State.

use super::document::MapDocument;
use crate::app::EditorState;
use crate::core::MetroMap;
use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::sync::mpsc;
use std::sync::Arc;

/// Parst ein Austauschdokument aus JSON-Text.
pub fn parse_document(json: &str) -> Result<MapDocument> {
    serde_json::from_str(json).context("Austauschdokument nicht lesbar")
}

/// Übernimmt ein Dokument in den Editor-State.
///
/// Die Arrays werden in ID-indizierte Tabellen überführt; bei doppelten IDs
/// gewinnt der letzte Eintrag (kein Fehler, nur eine Warnung). Ein
/// eingebettetes Hintergrundbild wird auf einem Hintergrund-Thread dekodiert
/// und später über `EditorState::poll_background_image` abgeholt; eine
/// fehlgeschlagene Dekodierung lässt das Bild einfach ungesetzt.
pub fn apply_document(state: &mut EditorState, document: MapDocument) {
    let mut map = MetroMap::new();
    for record in document.stations {
        if map.station(record.station_id).is_some() {
            log::warn!(
                "Doppelte Stations-ID {} im Dokument, letzter Eintrag gewinnt",
                record.station_id
            );
        }
        map.add_station(record.into_station());
    }
    for record in document.lines {
        if map.line(record.line_id).is_some() {
            log::warn!(
                "Doppelte Linien-ID {} im Dokument, letzter Eintrag gewinnt",
                record.line_id
            );
        }
        map.add_line(record.into_line());
    }

    state.metro_map = Arc::new(map);
    state.title = document.title;
    state.background_color = document.background_color;
    state.translate_x = document.translate_x;
    state.translate_y = document.translate_y;
    state.scale = document.scale;
    state.set_opacity(document.opacity);
    state.background_image = None;
    state.change_log = crate::app::ChangeLog::new_with_capacity(state.options.change_log_capacity);

    if let Some(encoded) = document.image {
        let (tx, rx) = mpsc::channel();
        state.set_pending_image(rx);
        std::thread::spawn(move || match decode_embedded_image(&encoded) {
            Ok(decoded) => {
                // Empfänger kann inzwischen weg sein (neues Dokument geladen)
                let _ = tx.send(decoded);
            }
            Err(e) => {
                log::warn!("Hintergrundbild nicht dekodierbar: {e:#}");
            }
        });
    }

    log::info!(
        "Dokument übernommen: {} Stationen, {} Linien",
        state.station_count(),
        state.line_count()
    );
}

/// Lädt einen JSON-Text vollständig in den Editor-State.
pub fn load_from_str(state: &mut EditorState, json: &str) -> Result<()> {
    let document = parse_document(json)?;
    apply_document(state, document);
    Ok(())
}

/// Lädt ein Austauschdokument aus einer Datei.
pub fn load_from_file(state: &mut EditorState, path: &std::path::Path) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?;
    load_from_str(state, &json)?;
    log::info!("Dokument geladen aus: {}", path.display());
    Ok(())
}

/// Dekodiert ein eingebettetes Bild (base64, optional mit `data:`-Präfix).
fn decode_embedded_image(encoded: &str) -> Result<image::DynamicImage> {
    let payload = match encoded.split_once(',') {
        Some((head, body)) if head.starts_with("data:") => body,
        _ => encoded,
    };
    let bytes = STANDARD
        .decode(payload.trim())
        .context("Base64-Dekodierung fehlgeschlagen")?;
    image::load_from_memory(&bytes).context("Bildformat nicht erkannt")
}
