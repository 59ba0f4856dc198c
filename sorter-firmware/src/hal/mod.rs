// Hardware Abstraction Layer (HAL) Module
//
// Adapter zwischen esp-hal Peripherie und den Traits aus sorter-core.
// GPIO-LEDs und Servo laufen direkt über sorter_core::{PinLight, PwmServo},
// hier liegt nur die WS2812-Variante der Beleuchtung.

#[cfg(feature = "smartled-indicator")]
pub mod smart_light;

#[cfg(feature = "smartled-indicator")]
pub use smart_light::SmartLedLight;
