//! APDS-9960 Farbsensor über I2C
//!
//! Der Chip legt die Farbkanäle als Low/High-Byte-Paare ab (RDATAL..BDATAH).
//! Jedes Register wird einzeln gelesen: erst eine Write-Transaktion mit der
//! Registeradresse, dann eine separate Read-Transaktion für ein Byte.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, I2c};

use crate::logic::combine_bytes;
use crate::traits::{ColorSensor, SensorError, SensorState};
use crate::types::ColorReading;

/// Registeradressen und Werte laut APDS-9960 Datenblatt
pub mod regs {
    /// Feste 7-Bit I2C-Adresse
    pub const ADDRESS: u8 = 0x39;
    /// ENABLE: PON (Bit 0) und AEN (Bit 1)
    pub const ENABLE: u8 = 0x80;
    /// Power On + ALS/Farb-Engine an
    pub const ENABLE_PON_AEN: u8 = 0x03;
    /// CONTROL: AGAIN in Bit 0-1
    pub const CONTROL: u8 = 0x8F;
    /// AGAIN = 64x (Maximum)
    pub const CONTROL_AGAIN_MAX: u8 = 0x03;
    /// RDATAL, danach RDATAH, GDATAL, GDATAH, BDATAL, BDATAH
    pub const RDATAL: u8 = 0x96;
}

/// Wartezeit nach jedem Konfigurations-Write (Power-On des Chips)
pub const POWER_ON_SETTLE_MS: u32 = 7;

/// Wartezeit nach jedem gelesenen Register (Integrationszyklus der Farb-Engine)
pub const REGISTER_SETTLE_MS: u32 = 100;

/// Kanäle in Lesereihenfolge: Rot, Grün, Blau
const CHANNEL_COUNT: u8 = 3;

/// APDS-9960 Treiber
///
/// Besitzt den Bus exklusiv. Der Bus-Typ bleibt durchgehend der generische
/// `I2C`-Parameter, es gibt keinen Cast auf eine konkrete Implementierung.
pub struct Apds9960<I2C, D> {
    i2c: I2C,
    delay: D,
    state: SensorState,
}

impl<I2C, D> Apds9960<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            state: SensorState::Uninitialized,
        }
    }

    /// Gibt Bus und Delay wieder frei
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Schreibt `value` in das Register `register` (eine Transaktion)
    fn write_register(&mut self, register: u8, value: u8) -> Result<(), SensorError> {
        self.i2c
            .write(regs::ADDRESS, &[register, value])
            .map_err(|e| SensorError::Bus(e.kind()))
    }

    /// Liest ein einzelnes Register
    fn read_register(&mut self, register: u8) -> Result<u8, SensorError> {
        self.i2c
            .write(regs::ADDRESS, &[register])
            .map_err(|e| SensorError::Bus(e.kind()))?;

        let mut buffer = [0u8];
        self.i2c
            .read(regs::ADDRESS, &mut buffer)
            .map_err(|e| SensorError::Bus(e.kind()))?;

        self.delay.delay_ms(REGISTER_SETTLE_MS);

        Ok(buffer[0])
    }

    /// Liest einen Farbkanal (0 = Rot, 1 = Grün, 2 = Blau)
    fn read_channel(&mut self, channel: u8) -> Result<u16, SensorError> {
        let low_register = regs::RDATAL + channel * 2;
        let low = self.read_register(low_register)?;
        let high = self.read_register(low_register + 1)?;
        Ok(combine_bytes(low, high))
    }
}

impl<I2C, D> ColorSensor for Apds9960<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn setup(&mut self) -> Result<(), SensorError> {
        info!("Farbsensor wird eingerichtet");

        self.write_register(regs::ENABLE, regs::ENABLE_PON_AEN)?;
        self.delay.delay_ms(POWER_ON_SETTLE_MS);

        self.write_register(regs::CONTROL, regs::CONTROL_AGAIN_MAX)?;
        self.delay.delay_ms(POWER_ON_SETTLE_MS);

        self.state = SensorState::Configured;
        Ok(())
    }

    fn read_color(&mut self) -> Result<ColorReading, SensorError> {
        if self.state != SensorState::Configured {
            error!("setup() muss vor dem Lesen eines Farbwerts aufgerufen werden");
            return Err(SensorError::NotConfigured);
        }

        let mut channels = [0u16; CHANNEL_COUNT as usize];
        for (channel, value) in (0..CHANNEL_COUNT).zip(channels.iter_mut()) {
            *value = self.read_channel(channel)?;
        }

        let [r, g, b] = channels;
        Ok(ColorReading { r, g, b })
    }

    fn state(&self) -> SensorState {
        self.state
    }
}
