// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::{error, info};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::main;
use esp_hal::time::Rate;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_sortierer::config::{I2C_FREQUENCY_KHZ, SERVO_PWM_HZ, STARTUP_DELAY_MS, bin_layout};
use esp_sortierer::{Apds9960, PwmServo, Sorter};

#[cfg(not(feature = "smartled-indicator"))]
use esp_hal::gpio::{Level, Output, OutputConfig};
#[cfg(not(feature = "smartled-indicator"))]
use esp_sortierer::PinLight;

#[cfg(feature = "smartled-indicator")]
use esp_hal_smartled::smart_led_buffer;
#[cfg(feature = "smartled-indicator")]
use esp_sortierer::config::{RMT_CLOCK_MHZ, SMARTLED_BRIGHTNESS};
#[cfg(feature = "smartled-indicator")]
use esp_sortierer::hal::SmartLedLight;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, führt genau einen Sortier-Durchlauf aus und
/// wartet danach endlos. Für die nächste Süßigkeit: Reset-Taste.
#[main]
fn main() -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);
    let delay = Delay::new();

    // Versorgung von Servo und Sensor stabilisieren lassen
    delay.delay_millis(STARTUP_DELAY_MS);

    let layout = bin_layout().expect("SORTER_BIN_LAYOUT ungültig (6 Werte aus 0..=3)");
    info!("Bin-Layout: {}", layout.slots());

    // Farbsensor an I2C0 (SDA GPIO6, SCL GPIO7, Pin-Zuordnung siehe config.rs)
    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ)),
    )
    .expect("Failed to initialize I2C")
    .with_sda(peripherals.GPIO6)
    .with_scl(peripherals.GPIO7);
    let sensor = Apds9960::new(i2c, Delay::new());

    // Servo an LEDC: 50 Hz, 14 Bit Auflösung
    let mut ledc = Ledc::new(peripherals.LEDC);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let mut servo_timer = ledc.timer::<LowSpeed>(timer::Number::Timer0);
    servo_timer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty14Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_hz(SERVO_PWM_HZ),
        })
        .expect("Failed to configure LEDC timer");

    // GPIO19: Servo-Signal (Pin-Zuordnung in config.rs)
    let mut servo_channel = ledc.channel(channel::Number::Channel0, peripherals.GPIO19);
    servo_channel
        .configure(channel::config::Config {
            timer: &servo_timer,
            duty_pct: 0,
            pin_config: channel::config::PinConfig::PushPull,
        })
        .expect("Failed to configure LEDC channel");
    let mut servo = PwmServo::new(servo_channel);

    // Beleuchtung: weiße LEDs an GPIO18 ...
    #[cfg(not(feature = "smartled-indicator"))]
    let mut light = PinLight::new(Output::new(
        peripherals.GPIO18,
        Level::Low,
        OutputConfig::default(),
    ));

    // ... oder die On-Board WS2812 an GPIO8
    #[cfg(feature = "smartled-indicator")]
    let mut rmt_buffer = smart_led_buffer!(1);
    #[cfg(feature = "smartled-indicator")]
    let mut light = SmartLedLight::new(
        peripherals.GPIO8,
        peripherals.RMT,
        RMT_CLOCK_MHZ,
        SMARTLED_BRIGHTNESS,
        &mut rmt_buffer,
    )
    .expect("Failed to initialize RMT");

    let mut sorter = Sorter::new(sensor, &layout, &mut servo, &mut light, Delay::new());
    match sorter.run() {
        Ok(outcome) => info!("Sortieren abgeschlossen: {}", outcome),
        Err(e) => error!("Sortierlauf abgebrochen: {}", e),
    }

    // Ein Durchlauf pro Start
    loop {
        delay.delay_millis(1000);
    }
}
