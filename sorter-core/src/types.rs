//! Core Types für den Sortierer
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB16;

/// Anzahl der Behälter unter der Rutsche
pub const BIN_COUNT: usize = 6;

/// Winkelabstand zwischen zwei Behältern in Grad
pub const BIN_SPACING_DEG: u8 = 20;

/// Behälter, der genutzt wird, wenn die Farbe nicht im Layout steht
pub const FALLBACK_SLOT: usize = 2;

/// Rohwert des Farbsensors: je ein 16-Bit Kanal für Rot, Grün, Blau
///
/// `r`, `g` und `b` werden jeweils aus einem Low- und einem High-Byte
/// zusammengesetzt (siehe [`crate::combine_bytes`]).
pub type ColorReading = RGB16;

/// Farbe eines Behälters bzw. Ergebnis der Klassifizierung
///
/// Die Zahlenwerte entsprechen der Kodierung des Bin-Layouts
/// (0 = leer, 1 = Rot, 2 = Grün, 3 = Blau).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Color {
    /// Unbelegter Behälter, wird nie klassifiziert
    Empty = 0,
    Red = 1,
    Green = 2,
    Blue = 3,
}

impl Color {
    /// Anzeigename für Ausgaben an den Bediener
    pub fn name(self) -> &'static str {
        match self {
            Color::Empty => "Leer",
            Color::Red => "Rot",
            Color::Green => "Grün",
            Color::Blue => "Blau",
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = LayoutError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Color::Empty),
            1 => Ok(Color::Red),
            2 => Ok(Color::Green),
            3 => Ok(Color::Blue),
            other => Err(LayoutError::UnknownColorCode(other)),
        }
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color as u8
    }
}

/// Fehler beim Aufbau oder Abfragen eines Bin-Layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout-String hat nicht genau [`BIN_COUNT`] Einträge
    WrongSlotCount(usize),
    /// Eintrag ist keine Zahl
    InvalidCode,
    /// Zahl liegt außerhalb von 0..=3
    UnknownColorCode(u8),
    /// Farbe kommt in keinem Behälter vor
    ColorNotFound(Color),
}

/// Zielposition der Rutsche
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Behälter mit passender Farbe gefunden
    Bin { slot: usize, angle: u8 },
    /// Farbe nicht im Layout, Ausweich-Behälter
    Fallback { angle: u8, missing: Color },
}

impl Placement {
    pub fn angle(&self) -> u8 {
        match *self {
            Placement::Bin { angle, .. } | Placement::Fallback { angle, .. } => angle,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Placement::Fallback { .. })
    }

    /// Diagnose zum Ausweich-Behälter: welche Farbe im Layout gefehlt hat
    pub fn not_found(&self) -> Option<LayoutError> {
        match *self {
            Placement::Bin { .. } => None,
            Placement::Fallback { missing, .. } => Some(LayoutError::ColorNotFound(missing)),
        }
    }
}

/// Zuordnung Behälter-Index → Farbe
///
/// Behälter `i` liegt bei `i * 20` Grad. Das Layout wird einmal beim Start
/// festgelegt und danach nicht mehr verändert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinLayout {
    slots: [Color; BIN_COUNT],
}

impl BinLayout {
    pub const fn new(slots: [Color; BIN_COUNT]) -> Self {
        Self { slots }
    }

    /// Erstellt ein Layout aus der Zahlen-Kodierung
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use sorter_core::{BinLayout, Color};
    /// let layout = BinLayout::from_codes([1, 2, 3, 0, 0, 0]).unwrap();
    /// assert_eq!(layout.slots()[1], Color::Green);
    /// ```
    pub fn from_codes(codes: [u8; BIN_COUNT]) -> Result<Self, LayoutError> {
        let mut slots = [Color::Empty; BIN_COUNT];
        for (slot, code) in slots.iter_mut().zip(codes) {
            *slot = Color::try_from(code)?;
        }
        Ok(Self { slots })
    }

    /// Liest ein Layout aus einem kommagetrennten String, z.B. `"1,2,3,0,0,0"`
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let mut codes = [0u8; BIN_COUNT];
        let mut count = 0;

        for entry in text.split(',') {
            let code = entry
                .trim()
                .parse::<u8>()
                .map_err(|_| LayoutError::InvalidCode)?;
            if count < BIN_COUNT {
                codes[count] = code;
            }
            count += 1;
        }

        if count != BIN_COUNT {
            return Err(LayoutError::WrongSlotCount(count));
        }
        Self::from_codes(codes)
    }

    pub fn slots(&self) -> &[Color; BIN_COUNT] {
        &self.slots
    }

    /// Servo-Winkel eines Behälters
    pub fn angle_of(slot: usize) -> u8 {
        // slot < BIN_COUNT, passt also immer in u8
        slot as u8 * BIN_SPACING_DEG
    }

    /// Erster Behälter (von links) mit der gesuchten Farbe
    pub fn slot_of(&self, color: Color) -> Result<usize, LayoutError> {
        self.slots
            .iter()
            .position(|&slot| slot == color)
            .ok_or(LayoutError::ColorNotFound(color))
    }

    /// Zielposition für eine Farbe, mit Ausweich-Behälter wenn sie fehlt
    pub fn position_for(&self, color: Color) -> Placement {
        match self.slot_of(color) {
            Ok(slot) => Placement::Bin {
                slot,
                angle: Self::angle_of(slot),
            },
            Err(LayoutError::ColorNotFound(missing)) => Placement::Fallback {
                angle: Self::angle_of(FALLBACK_SLOT),
                missing,
            },
            // slot_of meldet nur ColorNotFound
            Err(_) => Placement::Fallback {
                angle: Self::angle_of(FALLBACK_SLOT),
                missing: color,
            },
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Color {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LayoutError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LayoutError::WrongSlotCount(count) => {
                defmt::write!(fmt, "WrongSlotCount({})", count)
            }
            LayoutError::InvalidCode => defmt::write!(fmt, "InvalidCode"),
            LayoutError::UnknownColorCode(code) => {
                defmt::write!(fmt, "UnknownColorCode({})", code)
            }
            LayoutError::ColorNotFound(color) => {
                defmt::write!(fmt, "ColorNotFound({})", color)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Placement {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Placement::Bin { slot, angle } => {
                defmt::write!(fmt, "Bin {{ slot: {}, angle: {} }}", slot, angle)
            }
            Placement::Fallback { angle, missing } => {
                defmt::write!(fmt, "Fallback {{ angle: {}, missing: {} }}", angle, missing)
            }
        }
    }
}
