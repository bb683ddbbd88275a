//! Farbzuweisung für neue Linien: Palette zuerst, danach deterministischer
//! Fallback.

/// Wählt die Farbe für eine neue Linie.
///
/// Linien-ID `n` bekommt den Paletteneintrag `n-1`; ist die Palette
/// erschöpft (oder leer), liefert der Fallback eine aus der ID abgeleitete,
/// gut unterscheidbare Farbe. Gleiche ID ergibt immer dieselbe Farbe.
pub fn color_for_line(palette: &[String], line_id: u64) -> String {
    let index = line_id.saturating_sub(1) as usize;
    match palette.get(index) {
        Some(color) => color.clone(),
        None => fallback_color(line_id),
    }
}

/// Deterministische Fallback-Farbe: HSL aus der ID gestreut, nach `#RRGGBB`
/// konvertiert. Der 137°-Schritt verteilt aufeinanderfolgende IDs weit über
/// den Farbkreis.
fn fallback_color(seed: u64) -> String {
    let hue = ((seed * 137) % 360) as f64;
    let saturation = 65.0 + ((seed * 97) % 20) as f64;
    let lightness = 55.0 + ((seed * 53) % 15) as f64;

    let chroma = (1.0 - (2.0 * lightness / 100.0 - 1.0).abs()) * saturation / 100.0;
    let second = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let base = lightness / 100.0 - chroma / 2.0;

    let (red, green, blue) = match hue as u32 {
        0..=59 => (chroma, second, 0.0),
        60..=119 => (second, chroma, 0.0),
        120..=179 => (0.0, chroma, second),
        180..=239 => (0.0, second, chroma),
        240..=299 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };

    format!(
        "#{:02X}{:02X}{:02X}",
        ((red + base) * 255.0) as u8,
        ((green + base) * 255.0) as u8,
        ((blue + base) * 255.0) as u8
    )
}
