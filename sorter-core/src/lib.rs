//! Sorter Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE chip-spezifischen Dependencies.
//! Sie definiert Traits, das APDS-9960 Protokoll und den Sortier-Ablauf
//! auf Basis von `embedded-hal`.

#![no_std]

#[macro_use]
mod fmt;

pub mod apds9960;
pub mod light;
pub mod logic;
pub mod servo;
pub mod sorter;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use apds9960::Apds9960;
pub use light::PinLight;
pub use logic::{classify, combine_bytes};
pub use servo::PwmServo;
pub use sorter::{SortError, SortOutcome, SortPhase, Sorter};
pub use traits::{
    ColorSensor, IndicatorLight, LightError, SensorError, SensorState, Servo, ServoError,
};
pub use types::{BIN_COUNT, BinLayout, Color, ColorReading, LayoutError, Placement};
