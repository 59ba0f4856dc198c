//! Gemeinsame Mocks für die Host-Tests
//!
//! Alle Mocks schreiben in ein gemeinsames Event-Log, damit die exakte
//! Reihenfolge von Bus-Zugriffen, Wartezeiten, Servo und Licht geprüft
//! werden kann.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{self, ErrorKind, I2c, NoAcknowledgeSource, Operation};
use sorter_core::{
    ColorReading, ColorSensor, IndicatorLight, LightError, SensorError, SensorState, Servo,
    ServoError, apds9960::regs,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    BusWrite { address: u8, bytes: Vec<u8> },
    BusRead { address: u8, byte: u8 },
    Delay(u32),
    Servo(u8),
    Light(bool),
    SensorSetup,
    SensorRead,
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

// ============================================================================
// Mock I2C Bus mit Register-Datei
// ============================================================================

#[derive(Debug)]
pub struct MockBusError;

impl i2c::Error for MockBusError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
    }
}

pub struct MockBus {
    pub registers: [u8; 256],
    pub selected: u8,
    pub fail_all: bool,
    /// Transaktionen ab dieser Nummer (0-basiert) schlagen fehl
    pub fail_from: Option<usize>,
    transactions: usize,
    log: EventLog,
}

impl MockBus {
    pub fn new(log: &EventLog) -> Self {
        Self {
            registers: [0; 256],
            selected: 0,
            fail_all: false,
            fail_from: None,
            transactions: 0,
            log: Rc::clone(log),
        }
    }

    /// Legt einen Messwert in die Farbregister (RDATAL..BDATAH)
    pub fn with_reading(mut self, reading: ColorReading) -> Self {
        for (channel, value) in [reading.r, reading.g, reading.b].into_iter().enumerate() {
            let low = regs::RDATAL as usize + channel * 2;
            self.registers[low] = (value & 0xFF) as u8;
            self.registers[low + 1] = (value >> 8) as u8;
        }
        self
    }
}

impl i2c::ErrorType for MockBus {
    type Error = MockBusError;
}

impl I2c for MockBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let index = self.transactions;
        self.transactions += 1;
        if self.fail_all || self.fail_from.is_some_and(|n| index >= n) {
            return Err(MockBusError);
        }

        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    let bytes: &[u8] = bytes;
                    self.log.borrow_mut().push(Event::BusWrite {
                        address,
                        bytes: bytes.to_vec(),
                    });
                    match bytes {
                        [register] => self.selected = *register,
                        [register, value] => self.registers[*register as usize] = *value,
                        _ => {}
                    }
                }
                Operation::Read(buffer) => {
                    for byte in buffer.iter_mut() {
                        *byte = self.registers[self.selected as usize];
                        self.log.borrow_mut().push(Event::BusRead {
                            address,
                            byte: *byte,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

pub struct MockDelay {
    log: EventLog,
}

impl MockDelay {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::Delay(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Delay(ms));
    }
}

// ============================================================================
// Mock Servo / Licht
// ============================================================================

pub struct MockServo {
    pub angle: Option<u8>,
    pub fail_next_write: bool,
    log: EventLog,
}

impl MockServo {
    pub fn new(log: &EventLog) -> Self {
        Self {
            angle: None,
            fail_next_write: false,
            log: Rc::clone(log),
        }
    }
}

impl Servo for MockServo {
    fn write_angle(&mut self, degrees: u8) -> Result<(), ServoError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(ServoError::PwmFailed);
        }
        self.angle = Some(degrees);
        self.log.borrow_mut().push(Event::Servo(degrees));
        Ok(())
    }
}

/// Beleuchtung; mit `fail_switch_off` schlägt das Ausschalten fehl
pub struct MockLight {
    pub on: bool,
    pub fail_switch_off: bool,
    log: EventLog,
}

impl MockLight {
    pub fn new(log: &EventLog) -> Self {
        Self {
            on: false,
            fail_switch_off: false,
            log: Rc::clone(log),
        }
    }
}

impl IndicatorLight for MockLight {
    fn write(&mut self, on: bool) -> Result<(), LightError> {
        if !on && self.fail_switch_off {
            return Err(LightError::WriteFailed);
        }
        self.on = on;
        self.log.borrow_mut().push(Event::Light(on));
        Ok(())
    }
}

// ============================================================================
// Stub-Sensor ohne Bus
// ============================================================================

/// Sensor, der einen festen Wert liefert
///
/// Mit `configures = false` bleibt er nach `setup()` unkonfiguriert.
pub struct StubSensor {
    pub reading: ColorReading,
    pub configures: bool,
    state: SensorState,
    log: EventLog,
}

impl StubSensor {
    pub fn new(log: &EventLog, reading: ColorReading) -> Self {
        Self {
            reading,
            configures: true,
            state: SensorState::Uninitialized,
            log: Rc::clone(log),
        }
    }
}

impl ColorSensor for StubSensor {
    fn setup(&mut self) -> Result<(), SensorError> {
        self.log.borrow_mut().push(Event::SensorSetup);
        if self.configures {
            self.state = SensorState::Configured;
        }
        Ok(())
    }

    fn read_color(&mut self) -> Result<ColorReading, SensorError> {
        if self.state != SensorState::Configured {
            return Err(SensorError::NotConfigured);
        }
        self.log.borrow_mut().push(Event::SensorRead);
        Ok(self.reading)
    }

    fn state(&self) -> SensorState {
        self.state
    }
}
