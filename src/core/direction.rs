//! Richtungsalgebra für oktilineare Linienführung.
//!
//! Ein Netzplan zeichnet Liniensegmente nur entlang der acht Kompass-Oktanten
//! (45°-Raster). Richtungswechsel, die kein Vielfaches von 45° sind, werden
//! über "Bend"-Richtungen ausgedrückt: eine Diagonale zwischen zwei Oktanten,
//! die beim Zeichnen in zwei gerade Teilsegmente zerlegt wird.

use anyhow::{bail, Result};

/// Hälfte des Quadranten, in der eine Bend-Richtung liegt.
///
/// `A` ist die obere, `B` die untere Hälfte — alle Richtungen sind im
/// Uhrzeigersinn nummeriert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BendHalf {
    /// Obere Hälfte des Quadranten
    A,
    /// Untere Hälfte des Quadranten
    B,
}

/// Eine von 17 diskreten Richtungen.
///
/// Flache Integer-Codierung (für das Austauschformat):
/// - `0..=7`: Standard-Oktanten, im Uhrzeigersinn ab "oben"
///   (0 = up, 1 = upRight, 2 = right, … 7 = leftUp)
/// - `8..=15`: Bend-Richtungen, `8 + 2*quadrant + half`
/// - `16`: `Coincide` — zwei Richtungen zeigen in dieselbe Richtung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Standard-Oktant (0..=7), direkt als gerades Segment zeichenbar
    Standard(u8),
    /// Diagonale zwischen zwei Oktanten (quadrant 0..=3)
    Bend {
        /// Quadrant im Uhrzeigersinn (0 = oben-rechts, … 3 = links-oben)
        quadrant: u8,
        /// Obere oder untere Quadranten-Hälfte
        half: BendHalf,
    },
    /// Deckungsgleiche Richtung (Vergleichsergebnis, keine Zeichenrichtung)
    Coincide,
}

impl Direction {
    /// Dekodiert den flachen Richtungscode 0..=16.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0..=7 => Some(Direction::Standard(code)),
            8..=15 => {
                let half = if code % 2 == 0 { BendHalf::A } else { BendHalf::B };
                Some(Direction::Bend {
                    quadrant: (code - 8) / 2,
                    half,
                })
            }
            16 => Some(Direction::Coincide),
            _ => None,
        }
    }

    /// Flacher Richtungscode 0..=16 (Austauschformat).
    pub fn code(&self) -> u8 {
        match *self {
            Direction::Standard(octant) => octant,
            Direction::Bend { quadrant, half } => {
                8 + 2 * quadrant + if half == BendHalf::B { 1 } else { 0 }
            }
            Direction::Coincide => 16,
        }
    }

    /// Gibt `true` zurück, wenn die Richtung ein Standard-Oktant ist.
    pub fn is_standard(&self) -> bool {
        matches!(self, Direction::Standard(_))
    }

    /// Entgegengesetzte Richtung (180°-Drehung).
    ///
    /// Zweifache Anwendung liefert die Ausgangsrichtung; `Coincide` bildet
    /// auf sich selbst ab.
    pub fn opposite(&self) -> Direction {
        match *self {
            Direction::Standard(octant) => Direction::Standard((octant + 4) % 8),
            Direction::Bend { quadrant, half } => Direction::Bend {
                quadrant: (quadrant + 2) % 4,
                half,
            },
            Direction::Coincide => Direction::Coincide,
        }
    }

    /// Prüft ob `self` die Gegenrichtung von `other` ist.
    pub fn opposite_to(&self, other: Direction) -> bool {
        other.opposite() == *self
    }

    /// Prüft ob beide Richtungen identisch sind.
    pub fn same_to(&self, other: Direction) -> bool {
        *self == other
    }

    /// Minimale vorzeichenbehaftete Drehung (in 45°-Schritten), um `self`
    /// mit `other` zur Deckung zu bringen.
    ///
    /// Positiv = im Uhrzeigersinn, negativ = gegen den Uhrzeigersinn,
    /// 0 = keine Drehung nötig, 4 = Gegenrichtung (180°, richtungsneutral).
    /// Nur für Standard-Oktanten definiert; sonst `None`.
    pub fn rotation_to(&self, other: Direction) -> Option<i8> {
        let (Direction::Standard(from), Direction::Standard(to)) = (*self, other) else {
            return None;
        };
        if self.opposite_to(other) {
            return Some(4);
        }
        let mut side = to as i8 - from as i8;
        if side < -4 {
            side += 8;
        }
        if side > 4 {
            side -= 8;
        }
        Some(side)
    }

    /// Zerlegt eine Bend-Richtung in ihre zwei Standard-Oktant-Teilschritte.
    ///
    /// Eine Bend-Richtung bezeichnet eine Diagonale, die nicht als ein
    /// gerades oktant-gebundenes Segment gezeichnet werden kann. Sie wird in
    /// den Diagonal-Oktanten des Quadranten (`2*quadrant + 1`) und den
    /// angrenzenden Achsen-Oktanten zerlegt (Hälfte A: `2*quadrant`,
    /// Hälfte B: `2*quadrant + 2` mod 8). `bend_first` bestimmt, welches
    /// Teilsegment zuerst durchlaufen wird — und damit die Pixelposition des
    /// Knicks.
    ///
    /// Schlägt für Standard-Richtungen und `Coincide` fehl.
    pub fn bend_steps(&self, bend_first: bool) -> Result<[Direction; 2]> {
        let Direction::Bend { quadrant, half } = *self else {
            bail!("Keine Bend-Richtung: {:?}", self);
        };
        let diagonal = Direction::Standard(2 * quadrant + 1);
        let axis = match half {
            BendHalf::A => Direction::Standard(2 * quadrant),
            BendHalf::B => Direction::Standard((2 * quadrant + 2) % 8),
        };
        Ok(if bend_first {
            [diagonal, axis]
        } else {
            [axis, diagonal]
        })
    }
}
