// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Pin-Zuordnung (fest in bin/main.rs über die typisierten esp-hal Peripherals):
//   GPIO6  I2C0 SDA (APDS-9960)
//   GPIO7  I2C0 SCL (APDS-9960)
//   GPIO19 Servo-Signal (LEDC Channel0)
//   GPIO18 weiße LEDs am Scan-Schacht
//   GPIO8  On-Board WS2812 (nur mit `smartled-indicator`)
use sorter_core::{BIN_COUNT, BinLayout, LayoutError};

// ============================================================================
// Start
// ============================================================================

/// Wartezeit nach dem Einschalten, bevor der Durchlauf beginnt (ms)
/// Gibt Servo-Versorgung und Sensor Zeit zum Hochfahren
pub const STARTUP_DELAY_MS: u32 = 2000;

// ============================================================================
// Farbsensor (APDS-9960, I2C0)
// ============================================================================

/// I2C Taktfrequenz in kHz (Standard Mode)
pub const I2C_FREQUENCY_KHZ: u32 = 100;

// ============================================================================
// Servo (LEDC PWM)
// ============================================================================

/// PWM-Frequenz für Hobby-Servos (20 ms Rahmen)
pub const SERVO_PWM_HZ: u32 = 50;

// ============================================================================
// Beleuchtung
// ============================================================================

/// Helligkeits-Level für die On-Board LED (0-255)
/// Voll weiß, damit die Süßigkeit gleichmäßig beleuchtet wird
pub const SMARTLED_BRIGHTNESS: u8 = 255;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Bin-Layout
// ============================================================================

/// Standard-Belegung der Behälter: Rot, Grün, Blau, leer, leer, leer
/// Kodierung: 0 = leer, 1 = Rot, 2 = Grün, 3 = Blau
pub const DEFAULT_BIN_LAYOUT: [u8; BIN_COUNT] = [1, 2, 3, 0, 0, 0];

/// Bin-Layout aus der Build-Umgebung
/// Wird zur Build-Zeit aus der Environment Variable SORTER_BIN_LAYOUT geladen
/// (z.B. "0,0,0,3,2,1"). Setze diese in .env file (siehe .env.example)
pub const BIN_LAYOUT_ENV: Option<&str> = option_env!("SORTER_BIN_LAYOUT");

/// Liefert das Bin-Layout für diesen Build
pub fn bin_layout() -> Result<BinLayout, LayoutError> {
    match BIN_LAYOUT_ENV {
        Some(text) => BinLayout::parse(text),
        None => BinLayout::from_codes(DEFAULT_BIN_LAYOUT),
    }
}
