//! Device context and time translation.

use crate::{
    Error, bcd,
    bus::RegisterBus,
    datetime::{CENTURY, DateTime, weekday_from_reg, weekday_to_reg},
    regs,
};

/// MAX31335 driver.
///
/// Owns the register bus for the lifetime of the device. All operations
/// take `&mut self`; when the device is shared between a thread and an
/// interrupt handler, wrap it in the platform's mutex (for example
/// `cortex_m::interrupt::Mutex<RefCell<_>>`) so both paths serialize on the
/// same instance.
///
/// Nothing is cached between calls: the chip's clock advances on its own,
/// so every read issues fresh bus transactions.
#[derive(Debug)]
pub struct Max31335<B> {
    pub(crate) bus: B,
}

impl<B> Max31335<B> {
    /// Create a new driver from a register bus.
    ///
    /// No bus traffic occurs until the first operation.
    #[inline]
    pub const fn new(bus: B) -> Self {
        Max31335 { bus }
    }

    /// Free the register bus.
    #[inline]
    pub fn free(self) -> B {
        self.bus
    }
}

/// Decode the hours register, honoring the 12/24-hour mode flag.
const fn hour_from_reg(raw: u8) -> u8 {
    if raw & regs::HRS_F_12_24 == 0 {
        // 24-hour mode
        return bcd::decode(raw, 0x3F);
    }

    // 12-hour mode: BCD 12 is midnight or noon
    let mut hour: u8 = bcd::decode(raw, 0x1F);
    if hour == 12 {
        hour = 0;
    }
    if raw & regs::HRS_F_AM_PM != 0 {
        hour += 12;
    }
    hour
}

impl<B: RegisterBus> Max31335<B> {
    /// Read the current date and time.
    ///
    /// The 7-byte time-keeping block is read in a single bus transaction so
    /// the chip's internal tick cannot tear the record. Both 12-hour and
    /// 24-hour register formats are decoded.
    ///
    /// # Errors
    ///
    /// * [`Error::Bus`] if the register read fails.
    pub fn read_time(&mut self) -> Result<DateTime, Error<B::Error>> {
        let mut block: [u8; regs::TIME_LEN] = [0; regs::TIME_LEN];
        self.bus
            .read_block(regs::SECONDS, &mut block)
            .map_err(Error::Bus)?;

        let mut year: u16 = 2000 + u16::from(bcd::decode(block[6], 0xFF));
        if block[5] & regs::MONTH_CENTURY != 0 {
            year += 100;
        }

        Ok(DateTime {
            second: bcd::decode(block[0], 0x7F),
            minute: bcd::decode(block[1], 0x7F),
            hour: hour_from_reg(block[2]),
            weekday: weekday_from_reg(block[3]),
            day: bcd::decode(block[4], 0x3F),
            month: bcd::decode(block[5], 0x1F),
            year,
        })
    }

    /// Set the date and time.
    ///
    /// The hours register is written in 24-hour format. The century flag is
    /// set for years at or beyond 2100. All seven bytes are encoded before
    /// any bus traffic and written as one transaction; a failed write leaves
    /// no partial update.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArgument`] if any field of `dt` is out of range
    ///   (no bus transaction is issued).
    /// * [`Error::Bus`] if the register write fails.
    pub fn set_time(&mut self, dt: &DateTime) -> Result<(), Error<B::Error>> {
        if !dt.is_valid() {
            return Err(Error::InvalidArgument);
        }

        let mut block: [u8; regs::TIME_LEN] = [
            bcd::encode(dt.second),
            bcd::encode(dt.minute),
            bcd::encode(dt.hour),
            bcd::encode(weekday_to_reg(dt.weekday)),
            bcd::encode(dt.day),
            bcd::encode(dt.month),
            bcd::encode((dt.year % 100) as u8),
        ];
        if dt.year >= CENTURY {
            block[5] |= regs::MONTH_CENTURY;
        }

        self.bus
            .write_block(regs::SECONDS, &block)
            .map_err(Error::Bus)
    }

    /// Read the aging offset calibration value.
    ///
    /// # Errors
    ///
    /// * [`Error::Bus`] if the register read fails.
    pub fn read_offset(&mut self) -> Result<i8, Error<B::Error>> {
        let raw: u8 = self.bus.read_reg(regs::AGING_OFFSET).map_err(Error::Bus)?;
        Ok(raw as i8)
    }

    /// Set the aging offset calibration value.
    ///
    /// The value is written verbatim; the chip applies it to the oscillator
    /// load capacitance.
    ///
    /// # Errors
    ///
    /// * [`Error::Bus`] if the register write fails.
    pub fn set_offset(&mut self, offset: i8) -> Result<(), Error<B::Error>> {
        self.bus
            .write_reg(regs::AGING_OFFSET, offset as u8)
            .map_err(Error::Bus)
    }

    /// Configure and enable the backup-battery trickle charger.
    ///
    /// # Errors
    ///
    /// * [`Error::Bus`] if the register write fails.
    pub fn set_trickle_charger(
        &mut self,
        resistor: TrickleResistor,
        diode: bool,
    ) -> Result<(), Error<B::Error>> {
        let sel: u8 = resistor as u8 + if diode { 4 } else { 1 };
        self.bus
            .write_reg(
                regs::TRICKLE,
                (sel << regs::TRICKLE_SEL_SHIFT) | regs::TRICKLE_EN,
            )
            .map_err(Error::Bus)
    }
}

/// Trickle charger current-limiting resistor.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TrickleResistor {
    /// 3 kΩ
    Ohms3000 = 0,
    /// 6 kΩ
    Ohms6000 = 1,
    /// 11 kΩ
    Ohms11000 = 2,
}

impl TrickleResistor {
    /// Resistance in ohms.
    #[must_use]
    pub const fn ohms(self) -> u16 {
        match self {
            TrickleResistor::Ohms3000 => 3000,
            TrickleResistor::Ohms6000 => 6000,
            TrickleResistor::Ohms11000 => 11000,
        }
    }
}
