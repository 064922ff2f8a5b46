//! Clock-output divider control.

use crate::{Error, bus::RegisterBus, regs, rtc::Max31335};

/// Square-wave output rates supported by the divider, in hertz.
pub const CLKOUT_RATES_HZ: [u32; 4] = [1, 64, 1024, 32768];

// The rate-select field is masked to the bits covering the table, so any
// stored index maps into the table. That only holds for a power-of-two
// table length; resizing the table must revisit RATE_MASK.
const RATE_MASK: u8 = (CLKOUT_RATES_HZ.len().next_power_of_two() - 1) as u8;
const _: () = assert!(CLKOUT_RATES_HZ.len().is_power_of_two());
const _: () = assert!(!CLKOUT_RATES_HZ.is_empty());

/// Index of the table entry closest to `rate_hz`.
fn closest_rate_index(rate_hz: u32) -> usize {
    let mut index: usize = CLKOUT_RATES_HZ.len() - 1;
    for i in 0..CLKOUT_RATES_HZ.len() - 1 {
        let midpoint: u32 = (CLKOUT_RATES_HZ[i] + CLKOUT_RATES_HZ[i + 1] + 1) / 2;
        if rate_hz <= midpoint {
            index = i;
            break;
        }
    }
    index
}

/// The supported output rate closest to `rate_hz`.
///
/// Pure table lookup; no hardware access.
///
/// # Example
///
/// ```
/// use max31335::round_clkout_rate;
///
/// assert_eq!(round_clkout_rate(500), 64);
/// assert_eq!(round_clkout_rate(100_000), 32_768);
/// ```
#[must_use]
pub fn round_clkout_rate(rate_hz: u32) -> u32 {
    CLKOUT_RATES_HZ[closest_rate_index(rate_hz)]
}

impl<B: RegisterBus> Max31335<B> {
    /// Enable the square-wave output.
    ///
    /// # Errors
    ///
    /// * [`Error::Bus`] if the register access fails.
    pub fn clkout_enable(&mut self) -> Result<(), Error<B::Error>> {
        self.bus
            .set_bits(regs::RTC_CONFIG2, regs::ENCLKO)
            .map_err(Error::Bus)
    }

    /// Disable the square-wave output.
    ///
    /// # Errors
    ///
    /// * [`Error::Bus`] if the register access fails.
    pub fn clkout_disable(&mut self) -> Result<(), Error<B::Error>> {
        self.bus
            .clear_bits(regs::RTC_CONFIG2, regs::ENCLKO)
            .map_err(Error::Bus)
    }

    /// Returns `true` if the square-wave output is enabled.
    ///
    /// # Errors
    ///
    /// * [`Error::Bus`] if the register read fails.
    pub fn clkout_enabled(&mut self) -> Result<bool, Error<B::Error>> {
        let reg: u8 = self.bus.read_reg(regs::RTC_CONFIG2).map_err(Error::Bus)?;
        Ok(reg & regs::ENCLKO != 0)
    }

    /// Read the configured output rate in hertz.
    ///
    /// The stored rate-select index is masked into the rate table, so a
    /// value the driver never wrote still reads back as a defined rate.
    ///
    /// # Errors
    ///
    /// * [`Error::Bus`] if the register read fails.
    pub fn clkout_rate(&mut self) -> Result<u32, Error<B::Error>> {
        let reg: u8 = self.bus.read_reg(regs::RTC_CONFIG2).map_err(Error::Bus)?;
        Ok(CLKOUT_RATES_HZ[usize::from(reg & RATE_MASK)])
    }

    /// Set the output rate to the supported rate closest to `rate_hz`.
    ///
    /// Returns the achieved rate, which is [`round_clkout_rate`] of the
    /// request. Only the rate-select field is modified.
    ///
    /// # Errors
    ///
    /// * [`Error::Bus`] if the register access fails.
    pub fn set_clkout_rate(&mut self, rate_hz: u32) -> Result<u32, Error<B::Error>> {
        let index: usize = closest_rate_index(rate_hz);
        self.bus
            .update_bits(regs::RTC_CONFIG2, RATE_MASK, index as u8)
            .map_err(Error::Bus)?;
        Ok(CLKOUT_RATES_HZ[index])
    }
}
