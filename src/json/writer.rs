//! Writer: Editor-State → Austauschdokument.

use super::document::{LineRecord, MapDocument, StationRecord};
use crate::app::EditorState;
use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Erstellt das Austauschdokument zum aktuellen State.
///
/// Stationen und Linien werden nach ID sortiert ausgegeben, damit gleiche
/// Pläne byte-gleiche Dokumente ergeben. Ein gesetztes Hintergrundbild wird
/// als PNG re-kodiert und base64-eingebettet.
pub fn build_document(state: &EditorState) -> Result<MapDocument> {
    let mut stations: Vec<StationRecord> = state
        .metro_map
        .stations_iter()
        .map(StationRecord::from_station)
        .collect();
    stations.sort_unstable_by_key(|record| record.station_id);

    let mut lines: Vec<LineRecord> = state
        .metro_map
        .lines_iter()
        .map(LineRecord::from_line)
        .collect();
    lines.sort_unstable_by_key(|record| record.line_id);

    let image = match &state.background_image {
        Some(background) => Some(encode_background(background)?),
        None => None,
    };

    Ok(MapDocument {
        stations,
        lines,
        title: state.title.clone(),
        background_color: state.background_color.clone(),
        translate_x: state.translate_x,
        translate_y: state.translate_y,
        scale: state.scale,
        opacity: state.opacity,
        image,
    })
}

/// Serialisiert den State als JSON-Text.
pub fn to_json_string(state: &EditorState) -> Result<String> {
    let document = build_document(state)?;
    serde_json::to_string_pretty(&document).context("JSON-Export fehlgeschlagen")
}

/// Schreibt den State als Austauschdokument in eine Datei.
pub fn save_to_file(state: &EditorState, path: &std::path::Path) -> Result<()> {
    let json = to_json_string(state)?;
    std::fs::write(path, json)
        .with_context(|| format!("Datei nicht schreibbar: {}", path.display()))?;
    log::info!("Dokument gespeichert nach: {}", path.display());
    Ok(())
}

/// Kodiert das Hintergrundbild als PNG-Data-URL.
fn encode_background(background: &image::DynamicImage) -> Result<String> {
    let mut png_bytes = Vec::new();
    background
        .write_to(
            &mut std::io::Cursor::new(&mut png_bytes),
            image::ImageFormat::Png,
        )
        .context("PNG-Kodierung fehlgeschlagen")?;
    Ok(format!(
        "data:image/png;base64,{}",
        STANDARD.encode(&png_bytes)
    ))
}
