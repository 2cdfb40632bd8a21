use embedded_hal::{delay::DelayNs, i2c::I2c};

use crate::error::Sht21Error;

/// Fixed 7-bit I2C address of the SHT21.
const I2C_ADDRESS: u8 = 0x40;

/// Settle time after a soft reset (datasheet: at most 15 ms).
const SOFT_RESET_DELAY_MS: u32 = 15;

/// Worst-case conversion time for a no-hold measurement.
///
/// In no-hold mode the sensor releases the bus after the trigger command,
/// so the driver must wait this long before reading the result.
const MEASUREMENT_DELAY_MS: u32 = 250;

/// SHT21 command set used by this driver.
enum Command {
    SoftReset,
    TriggerTemperatureNoHold,
    TriggerHumidityNoHold,
}

impl Command {
    fn value(&self) -> u8 {
        match self {
            Command::SoftReset => 0xFE,
            Command::TriggerTemperatureNoHold => 0xF3,
            Command::TriggerHumidityNoHold => 0xF5,
        }
    }
}

/// Driver for the SHT21 temperature and humidity sensor.
pub struct Sht21<I2C, D> {
    i2c: I2C,
    delay: D,
}

impl<I2C, D> core::fmt::Debug for Sht21<I2C, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sht21").finish_non_exhaustive()
    }
}

impl<I2C, D, E> Sht21<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    /// Creates a new instance of the SHT21 driver.
    ///
    /// Issues a soft reset to the sensor and blocks for the 15 ms settle
    /// time before returning, so the driver is ready to measure as soon as
    /// construction succeeds.
    ///
    /// # Arguments
    ///
    /// * `i2c` - The I2C bus the sensor is attached to. Pass `&mut bus` to
    ///   keep ownership on the caller's side.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    ///
    /// # Errors
    ///
    /// Returns `Sht21Error::I2c` if the reset command cannot be written.
    pub fn new(i2c: I2C, delay: D) -> Result<Self, Sht21Error<E>> {
        let mut sensor = Sht21 { i2c, delay };
        sensor.command(Command::SoftReset)?;
        sensor.delay.delay_ms(SOFT_RESET_DELAY_MS);
        Ok(sensor)
    }

    /// Reads the temperature in degrees Celsius.
    ///
    /// Triggers a no-hold temperature measurement, blocks for 250 ms to let
    /// the conversion finish, then reads and converts the two result bytes.
    pub fn read_temperature(&mut self) -> Result<f32, Sht21Error<E>> {
        let raw = self.measure_raw(Command::TriggerTemperatureNoHold)?;
        Ok(convert_temperature(raw))
    }

    /// Reads the relative humidity in percent.
    ///
    /// Same sequencing as [`Self::read_temperature`] with the humidity
    /// trigger command. The result is not clamped: readings slightly below
    /// 0 % or above 100 % can occur at the extremes of the sensor's range.
    pub fn read_humidity(&mut self) -> Result<f32, Sht21Error<E>> {
        let raw = self.measure_raw(Command::TriggerHumidityNoHold)?;
        Ok(convert_humidity(raw))
    }

    /// Consumes the driver and hands the I2C bus back to the caller.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Triggers a measurement and reads back the 16-bit raw count.
    ///
    /// One trigger write, the worst-case conversion wait, then exactly two
    /// single-byte reads combined big-endian. No other bus traffic may be
    /// interleaved between the trigger and the reads, or the in-flight
    /// measurement is corrupted.
    fn measure_raw(&mut self, trigger: Command) -> Result<u16, Sht21Error<E>> {
        self.command(trigger)?;
        self.delay.delay_ms(MEASUREMENT_DELAY_MS);
        let high = self.read_byte()?;
        let low = self.read_byte()?;
        Ok(u16::from_be_bytes([high, low]))
    }

    /// Writes a single command byte to the sensor.
    fn command(&mut self, command: Command) -> Result<(), Sht21Error<E>> {
        self.i2c.write(I2C_ADDRESS, &[command.value()])?;
        Ok(())
    }

    /// Reads a single byte from the sensor.
    fn read_byte(&mut self) -> Result<u8, Sht21Error<E>> {
        let mut buf = [0u8; 1];
        self.i2c.read(I2C_ADDRESS, &mut buf)?;
        Ok(buf[0])
    }
}

/// Converts a raw temperature count to degrees Celsius.
///
/// T = -46.85 + 175.72 * (raw / 2^16), per the SHT21 datasheet. The two
/// least-significant status bits of the raw count are not masked off.
fn convert_temperature(raw: u16) -> f32 {
    -46.85 + 175.72 * (raw as f32 / 65536.0)
}

/// Converts a raw humidity count to percent relative humidity.
///
/// RH = -6 + 125 * (raw / 2^16), per the SHT21 datasheet.
fn convert_humidity(raw: u16) -> f32 {
    -6.0 + 125.0 * (raw as f32 / 65536.0)
}
