/// Possible errors from the SHT21 driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum Sht21Error<E> {
    /// Error from the underlying I2C bus.
    I2c(E),
}

impl<E> From<E> for Sht21Error<E> {
    fn from(value: E) -> Self {
        Self::I2c(value)
    }
}
