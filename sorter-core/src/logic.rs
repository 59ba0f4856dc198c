//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{Color, ColorReading};

/// Setzt zwei 8-Bit Register zu einem 16-Bit Kanalwert zusammen
///
/// Das Low-Byte ist das niederwertige Byte.
///
/// ```
/// # use sorter_core::combine_bytes;
/// assert_eq!(combine_bytes(0x12, 0x03), 0x0312);
/// ```
pub fn combine_bytes(low: u8, high: u8) -> u16 {
    u16::from(low) | (u16::from(high) << 8)
}

/// Bestimmt die dominante Farbe eines Messwerts
///
/// Reihenfolge der Prüfung:
/// 1. Rot, wenn `r >= g && r >= b`
/// 2. Grün, wenn `g > r && g >= b`
/// 3. sonst Blau
///
/// Bei Gleichstand gewinnt also Rot vor Grün und Blau, Grün vor Blau.
/// Liefert nie [`Color::Empty`].
///
/// ```
/// # use rgb::RGB16;
/// # use sorter_core::{classify, Color};
/// assert_eq!(classify(RGB16::new(10, 50, 5)), Color::Green);
/// ```
pub fn classify(reading: ColorReading) -> Color {
    let ColorReading { r, g, b } = reading;

    if r >= g && r >= b {
        Color::Red
    } else if g > r && g >= b {
        Color::Green
    } else {
        Color::Blue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB16;

    #[test]
    fn test_combine_bytes_low_is_least_significant() {
        assert_eq!(combine_bytes(0x12, 0x03), 0x0312);
        assert_eq!(combine_bytes(0xFF, 0x00), 0x00FF);
        assert_eq!(combine_bytes(0x00, 0xFF), 0xFF00);
    }

    #[test]
    fn test_classify_all_equal_is_red() {
        assert_eq!(classify(RGB16::new(500, 500, 500)), Color::Red);
    }

    #[test]
    fn test_classify_green_blue_tie_is_green() {
        assert_eq!(classify(RGB16::new(400, 500, 500)), Color::Green);
    }

    #[test]
    fn test_classify_blue_dominant() {
        assert_eq!(classify(RGB16::new(400, 400, 500)), Color::Blue);
    }

    #[test]
    fn test_classify_red_green_tie_is_red() {
        assert_eq!(classify(RGB16::new(500, 500, 400)), Color::Red);
    }

    #[test]
    fn test_classify_zero_reading_is_red() {
        // alle Kanäle gleich → Rot
        assert_eq!(classify(RGB16::new(0, 0, 0)), Color::Red);
    }

    #[test]
    fn test_classify_never_empty() {
        let values = [0u16, 1, 255, 256, 30_000, u16::MAX];
        for &r in &values {
            for &g in &values {
                for &b in &values {
                    assert_ne!(classify(RGB16::new(r, g, b)), Color::Empty);
                }
            }
        }
    }
}
