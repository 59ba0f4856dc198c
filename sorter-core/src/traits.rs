//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Sensor, Servo und Beleuchtung
//! ohne konkrete Implementierung. Bus und Delay kommen direkt aus
//! `embedded-hal` (`I2c`, `DelayNs`).

use embedded_hal::i2c::ErrorKind;

use crate::types::ColorReading;

/// Lebenszyklus eines Farbsensors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorState {
    Uninitialized,
    Configured,
}

/// Fehler-Typ für Sensor-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// `read_color()` vor `setup()` aufgerufen
    NotConfigured,
    /// I2C-Transaktion fehlgeschlagen (z.B. NACK)
    Bus(ErrorKind),
}

/// Trait für Farbsensor-Chips
///
/// # Implementierungen
/// - **Production:** [`crate::Apds9960`] (I2C)
/// - **Testing:** Stub-Sensoren in `sorter-tests`
pub trait ColorSensor {
    /// Konfiguriert den Chip. Muss vor dem ersten Lesen aufgerufen werden.
    fn setup(&mut self) -> Result<(), SensorError>;

    /// Liest einen RGB-Messwert
    ///
    /// # Fehlerbehandlung
    /// Gibt `SensorError::NotConfigured` zurück wenn `setup()` noch nicht
    /// erfolgreich war. In diesem Fall findet keine Bus-Transaktion statt.
    fn read_color(&mut self) -> Result<ColorReading, SensorError>;

    fn state(&self) -> SensorState;
}

/// Fehler-Typ für Servo-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServoError {
    /// Winkel größer als 180 Grad
    AngleOutOfRange(u8),
    PwmFailed,
}

/// Trait für Servo-Ansteuerung
pub trait Servo {
    /// Fährt den Servo auf `degrees` (0..=180)
    fn write_angle(&mut self, degrees: u8) -> Result<(), ServoError>;
}

/// Fehler-Typ für die Beleuchtung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightError {
    WriteFailed,
}

/// Trait für die Beleuchtung der Scan-Position
///
/// # Implementierungen
/// - **Production:** [`crate::PinLight`] (GPIO) oder WS2812 via RMT (Firmware)
/// - **Testing:** MockLight (in-memory Mock)
pub trait IndicatorLight {
    fn write(&mut self, on: bool) -> Result<(), LightError>;
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for SensorState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SensorState::Uninitialized => defmt::write!(fmt, "Uninitialized"),
            SensorState::Configured => defmt::write!(fmt, "Configured"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SensorError::NotConfigured => defmt::write!(fmt, "NotConfigured"),
            SensorError::Bus(kind) => defmt::write!(fmt, "Bus({})", kind),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ServoError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ServoError::AngleOutOfRange(degrees) => {
                defmt::write!(fmt, "AngleOutOfRange({})", degrees)
            }
            ServoError::PwmFailed => defmt::write!(fmt, "PwmFailed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LightError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LightError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}
