// WS2812 On-Board LED als Beleuchtung
//
// Schaltet die SmartLED (WS2812/Neopixel) über das RMT Peripheral
// zwischen Weiß und Aus.

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;
use sorter_core::{IndicatorLight, LightError};

// Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
pub const LED_BUFFER_SIZE: usize = 25;

/// WS2812 Beleuchtung
///
/// Nutzt ESP32 RMT Peripheral um die LED anzusteuern.
///
/// Hinweis: Der Buffer muss länger leben als der Adapter, daher wird er in
/// main() erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct SmartLedLight<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
    brightness: u8,
}

impl<'a> SmartLedLight<'a> {
    /// Erstellt eine neue SmartLedLight
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `brightness`: Helligkeit je Kanal im eingeschalteten Zustand
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(1) Macro)
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        brightness: u8,
        buffer: &'a mut [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE],
    ) -> Result<Self, esp_hal::rmt::Error> {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))?;

        // SmartLED Adapter erstellen
        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Ok(Self { led, brightness })
    }
}

impl IndicatorLight for SmartLedLight<'_> {
    fn write(&mut self, on: bool) -> Result<(), LightError> {
        let level = if on { self.brightness } else { 0 };
        let color = RGB8 {
            r: level,
            g: level,
            b: level,
        };
        self.led
            .write([color].into_iter())
            .map_err(|_| LightError::WriteFailed)
    }
}
