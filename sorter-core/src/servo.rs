//! Hobby-Servo über PWM
//!
//! 50 Hz Rahmen (20 ms), Pulsbreite 500 µs (0°) bis 2500 µs (180°).

use embedded_hal::pwm::SetDutyCycle;

use crate::traits::{Servo, ServoError};

/// Größter zulässiger Winkel
pub const MAX_ANGLE_DEG: u8 = 180;

/// PWM-Periode bei 50 Hz
pub const FRAME_US: u16 = 20_000;

pub const MIN_PULSE_US: u16 = 500;
pub const MAX_PULSE_US: u16 = 2_500;

/// Servo an einem PWM-Kanal
///
/// Der Kanal muss bereits auf 50 Hz konfiguriert sein.
pub struct PwmServo<P> {
    pwm: P,
}

impl<P: SetDutyCycle> PwmServo<P> {
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }

    pub fn release(self) -> P {
        self.pwm
    }

    /// Pulsbreite für einen Winkel, linear interpoliert
    pub fn pulse_us(degrees: u8) -> u16 {
        let span = u32::from(MAX_PULSE_US - MIN_PULSE_US);
        let offset = span * u32::from(degrees) / u32::from(MAX_ANGLE_DEG);
        MIN_PULSE_US + offset as u16
    }
}

impl<P: SetDutyCycle> Servo for PwmServo<P> {
    fn write_angle(&mut self, degrees: u8) -> Result<(), ServoError> {
        if degrees > MAX_ANGLE_DEG {
            return Err(ServoError::AngleOutOfRange(degrees));
        }

        self.pwm
            .set_duty_cycle_fraction(Self::pulse_us(degrees), FRAME_US)
            .map_err(|_| ServoError::PwmFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::ErrorType;

    struct MockPwm {
        duty: Option<u16>,
    }

    impl ErrorType for MockPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            16_383 // 14 Bit
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = Some(duty);
            Ok(())
        }
    }

    #[test]
    fn test_pulse_width_range() {
        assert_eq!(PwmServo::<MockPwm>::pulse_us(0), 500);
        assert_eq!(PwmServo::<MockPwm>::pulse_us(90), 1_500);
        assert_eq!(PwmServo::<MockPwm>::pulse_us(180), 2_500);
    }

    #[test]
    fn test_write_angle_sets_duty() {
        let mut servo = PwmServo::new(MockPwm { duty: None });
        servo.write_angle(90).unwrap();
        // 16383 * 1500 / 20000
        assert_eq!(servo.release().duty, Some(1_228));
    }

    #[test]
    fn test_write_angle_rejects_out_of_range() {
        let mut servo = PwmServo::new(MockPwm { duty: None });
        assert_eq!(
            servo.write_angle(181),
            Err(ServoError::AngleOutOfRange(181))
        );
        assert_eq!(servo.release().duty, None);
    }
}
