//! Beleuchtung über einen einfachen GPIO-Ausgang

use embedded_hal::digital::OutputPin;

use crate::traits::{IndicatorLight, LightError};

/// LEDs an einem digitalen Ausgang (high = an)
pub struct PinLight<P> {
    pin: P,
}

impl<P: OutputPin> PinLight<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: OutputPin> IndicatorLight for PinLight<P> {
    fn write(&mut self, on: bool) -> Result<(), LightError> {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| LightError::WriteFailed)
    }
}
