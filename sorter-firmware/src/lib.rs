// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;

// Re-exports von sorter-core
pub use sorter_core::{
    Apds9960, BinLayout, Color, IndicatorLight, PinLight, PwmServo, SortError, SortOutcome,
    Sorter,
};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Diese Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal).
// Sämtliche testbare Logik liegt deshalb in sorter-core:
//
// - APDS-9960 Protokoll: generisch über embedded_hal::i2c::I2c
// - Servo: generisch über embedded_hal::pwm::SetDutyCycle
// - Ablauf: generisch über ColorSensor / Servo / IndicatorLight / DelayNs
//
// Die Host-Tests in sorter-tests setzen dort Mock-Implementierungen ein.
// Hier bleiben nur Pin-Zuordnung, Peripherie-Init und der WS2812-Adapter.
