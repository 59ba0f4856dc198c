//! Sortier-Ablauf
//!
//! Ein Durchlauf: Sensor einrichten → Countdown → Scan → Farbe bestimmen →
//! Rutsche ausrichten. Alles blockierend, keine Wiederholungen.

use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::logic::classify;
use crate::traits::{
    ColorSensor, IndicatorLight, LightError, SensorError, Servo, ServoError,
};
use crate::types::{BinLayout, Color, ColorReading, Placement};

/// Mittelstellung der Rutsche während der Eingabe
pub const NEUTRAL_ANGLE_DEG: u8 = 40;

/// Countdown-Schritte, in denen der Bediener die Süßigkeit einlegt
pub const COUNTDOWN_TICKS: u32 = 5;

/// Dauer eines Countdown-Schritts
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

/// Licht bleibt nach dem Lesen noch so lange an
pub const SCAN_HOLD_MS: u32 = 1_000;

/// Servo muss einschwingen, Bediener lässt die Süßigkeit fallen
pub const RELEASE_HOLD_MS: u32 = 5_000;

/// Phasen eines Durchlaufs, nur vorwärts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPhase {
    Idle,
    SensorSetup,
    AwaitingInput,
    Scanning,
    Classifying,
    Positioning,
    Done,
}

/// Fehler, die einen Durchlauf abbrechen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    Sensor(SensorError),
    Servo(ServoError),
    Light(LightError),
    /// `run()` wurde bereits aufgerufen
    AlreadyRun,
}

impl From<SensorError> for SortError {
    fn from(e: SensorError) -> Self {
        SortError::Sensor(e)
    }
}

impl From<ServoError> for SortError {
    fn from(e: ServoError) -> Self {
        SortError::Servo(e)
    }
}

impl From<LightError> for SortError {
    fn from(e: LightError) -> Self {
        SortError::Light(e)
    }
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::Sensor(SensorError::NotConfigured) => {
                write!(f, "Farbsensor nicht eingerichtet")
            }
            SortError::Sensor(SensorError::Bus(kind)) => {
                write!(f, "I2C-Fehler am Farbsensor: {:?}", kind)
            }
            SortError::Servo(ServoError::AngleOutOfRange(degrees)) => {
                write!(f, "Servo-Winkel {} außerhalb 0..=180", degrees)
            }
            SortError::Servo(ServoError::PwmFailed) => write!(f, "Servo-PWM fehlgeschlagen"),
            SortError::Light(LightError::WriteFailed) => {
                write!(f, "Beleuchtung konnte nicht geschaltet werden")
            }
            SortError::AlreadyRun => write!(f, "Sortierer ist bereits gelaufen"),
        }
    }
}

/// Ergebnis eines erfolgreichen Durchlaufs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOutcome {
    pub reading: ColorReading,
    pub color: Color,
    pub placement: Placement,
}

/// Steuert einen kompletten Sortier-Durchlauf
///
/// Besitzt den Sensor (und damit den Bus), leiht sich Servo, Licht und
/// Bin-Layout vom Aufrufer.
pub struct Sorter<'a, S, V, L, D> {
    sensor: S,
    servo: &'a mut V,
    light: &'a mut L,
    layout: &'a BinLayout,
    delay: D,
    phase: SortPhase,
}

impl<'a, S, V, L, D> Sorter<'a, S, V, L, D>
where
    S: ColorSensor,
    V: Servo,
    L: IndicatorLight,
    D: DelayNs,
{
    pub fn new(
        sensor: S,
        layout: &'a BinLayout,
        servo: &'a mut V,
        light: &'a mut L,
        delay: D,
    ) -> Self {
        Self {
            sensor,
            servo,
            light,
            layout,
            delay,
            phase: SortPhase::Idle,
        }
    }

    pub fn phase(&self) -> SortPhase {
        self.phase
    }

    /// Gibt Sensor und Delay zurück
    pub fn release(self) -> (S, D) {
        (self.sensor, self.delay)
    }

    fn enter(&mut self, phase: SortPhase) {
        debug!("Phase: {}", phase);
        self.phase = phase;
    }

    /// Führt genau einen Sortier-Durchlauf aus (~12-15 s)
    ///
    /// # Fehlerbehandlung
    /// Sensor-, Servo- und Licht-Fehler brechen den Durchlauf ab. Eine Farbe,
    /// die nicht im Layout steht, ist kein Fehler: die Rutsche fährt auf den
    /// Ausweich-Behälter.
    pub fn run(&mut self) -> Result<SortOutcome, SortError> {
        if self.phase != SortPhase::Idle {
            return Err(SortError::AlreadyRun);
        }
        info!("Sortierer startet");

        self.enter(SortPhase::SensorSetup);
        self.sensor.setup()?;

        self.enter(SortPhase::AwaitingInput);
        self.servo.write_angle(NEUTRAL_ANGLE_DEG)?;
        info!("Süßigkeit einlegen");
        self.light.write(true)?;
        self.countdown();

        self.enter(SortPhase::Scanning);
        let reading = self.scan()?;
        info!("rot: {} grün: {} blau: {}", reading.r, reading.g, reading.b);

        self.enter(SortPhase::Classifying);
        let color = classify(reading);
        info!("Farbe erkannt: {}", color);

        self.enter(SortPhase::Positioning);
        let placement = self.layout.position_for(color);
        if let Some(reason) = placement.not_found() {
            warn!("{}, nutze Standard-Behälter", reason);
        }
        self.servo.write_angle(placement.angle())?;
        self.delay.delay_ms(RELEASE_HOLD_MS);

        self.enter(SortPhase::Done);
        Ok(SortOutcome {
            reading,
            color,
            placement,
        })
    }

    fn countdown(&mut self) {
        for tick in (1..=COUNTDOWN_TICKS).rev() {
            info!("{}", tick);
            self.delay.delay_ms(COUNTDOWN_TICK_MS);
        }
    }

    /// Liest den Sensor; das Licht geht erst nach `SCAN_HOLD_MS` aus
    fn scan(&mut self) -> Result<ColorReading, SortError> {
        let reading = match self.sensor.read_color() {
            Ok(reading) => reading,
            Err(e) => {
                error!("Scan abgebrochen: {}", e);
                // Licht trotzdem ausschalten, der Lesefehler hat Vorrang
                if let Err(light_err) = self.light.write(false) {
                    warn!("Licht konnte nicht ausgeschaltet werden: {}", light_err);
                }
                return Err(e.into());
            }
        };

        self.delay.delay_ms(SCAN_HOLD_MS);
        self.light.write(false)?;
        Ok(reading)
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for SortPhase {
    fn format(&self, fmt: defmt::Formatter) {
        let name = match self {
            SortPhase::Idle => "Idle",
            SortPhase::SensorSetup => "SensorSetup",
            SortPhase::AwaitingInput => "AwaitingInput",
            SortPhase::Scanning => "Scanning",
            SortPhase::Classifying => "Classifying",
            SortPhase::Positioning => "Positioning",
            SortPhase::Done => "Done",
        };
        defmt::write!(fmt, "{}", name)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SortError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SortError::Sensor(e) => defmt::write!(fmt, "Sensor({})", e),
            SortError::Servo(e) => defmt::write!(fmt, "Servo({})", e),
            SortError::Light(e) => defmt::write!(fmt, "Light({})", e),
            SortError::AlreadyRun => defmt::write!(fmt, "AlreadyRun"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SortOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "SortOutcome {{ rgb: ({}, {}, {}), color: {}, placement: {} }}",
            self.reading.r,
            self.reading.g,
            self.reading.b,
            self.color,
            self.placement
        )
    }
}
