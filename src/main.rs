//! Netzplan-Editor — Wartungs-CLI.
//!
//! Lädt ein Austauschdokument, meldet Kennzahlen, prüft die strukturellen
//! Invarianten und schreibt auf Wunsch eine normalisierte Kopie (nach ID
//! sortiert, Hintergrundbild als PNG re-kodiert).

use anyhow::{bail, Result};
use metro_map_editor::{json, EditorOptions, EditorState};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Netzplan-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input, output) = parse_args(&args)?;

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let options = EditorOptions::load_from_file(&config_path);

    let mut state = EditorState::with_options(options);
    json::load_from_file(&mut state, &input)?;

    log::info!(
        "Geladen: {} Stationen, {} Linien, Titel \"{}\"",
        state.station_count(),
        state.line_count(),
        state.title
    );

    match state.metro_map.check_invariants() {
        Ok(()) => log::info!("Invarianten-Prüfung bestanden"),
        Err(e) => log::warn!("Invarianten-Prüfung fehlgeschlagen: {e}"),
    }

    if let Some(output) = output {
        // Laufende Bild-Dekodierung vor dem Export abwarten (begrenzt)
        let mut waited = 0u32;
        while state.has_pending_image() && waited < 200 {
            if state.poll_background_image() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
            waited += 1;
        }
        json::save_to_file(&state, &output)?;
    }

    Ok(())
}

/// Zerlegt die Kommandozeile: `<eingabe.json> [--normalize <ausgabe.json>]`.
fn parse_args(args: &[String]) -> Result<(PathBuf, Option<PathBuf>)> {
    let mut input = None;
    let mut output = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--normalize" => {
                let Some(path) = iter.next() else {
                    bail!("--normalize braucht einen Ausgabe-Pfad");
                };
                output = Some(PathBuf::from(path));
            }
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            other => bail!("Unbekanntes Argument: {}", other),
        }
    }
    let Some(input) = input else {
        bail!("Aufruf: metro-map-editor <datei.json> [--normalize <ausgabe.json>]");
    };
    Ok((input, output))
}
