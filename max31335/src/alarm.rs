//! Alarm-1 compare management and interrupt servicing.

use crate::{
    Error, bcd,
    bus::RegisterBus,
    datetime::{CENTURY, YEAR_MAX, YEAR_MIN},
    regs,
    rtc::Max31335,
};

/// Alarm-1 settings.
///
/// The alarm fires when the live date and time exactly match every field;
/// the chip raises the pending flag and, when enabled, asserts the
/// interrupt line.
///
/// `enabled` and `pending` live in separate control and status registers
/// rather than the alarm register block; [`Max31335::read_alarm`] reads
/// them fresh on every call.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alarm {
    /// Absolute year, `2000..=2199`.
    ///
    /// The alarm register only stores two digits; the century is resolved
    /// against the live clock on read.
    pub year: u16,
    /// Month of the year, `1..=12`.
    pub month: u8,
    /// Day of the month, `1..=31`.
    pub day: u8,
    /// Hour of the day, `0..=23`.
    pub hour: u8,
    /// Minute of the hour, `0..=59`.
    pub minute: u8,
    /// Second of the minute, `0..=59`.
    pub second: u8,
    /// Alarm interrupt enabled.
    pub enabled: bool,
    /// Alarm match has occurred and has not been acknowledged.
    pub pending: bool,
}

impl Alarm {
    /// Returns `true` if every time field is within the chip's legal range.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.year >= YEAR_MIN
            && self.year <= YEAR_MAX
            && self.month >= 1
            && self.month <= 12
            && self.day >= 1
            && self.day <= 31
            && self.hour <= 23
            && self.minute <= 59
            && self.second <= 59
    }
}

impl<B: RegisterBus> Max31335<B> {
    /// Read the alarm settings.
    ///
    /// Reads the 6-byte alarm block in one transaction, then the live time
    /// (to resolve the alarm's century), then the interrupt-enable and
    /// status registers for `enabled` and `pending`.
    ///
    /// # Errors
    ///
    /// * [`Error::Bus`] if any register read fails.
    pub fn read_alarm(&mut self) -> Result<Alarm, Error<B::Error>> {
        let mut block: [u8; regs::ALM1_LEN] = [0; regs::ALM1_LEN];
        self.bus
            .read_block(regs::ALM1_SEC, &mut block)
            .map_err(Error::Bus)?;

        // the alarm year has no century bit of its own
        let mut year: u16 = 2000 + u16::from(bcd::decode(block[5], 0xFF));
        if self.read_time()?.year >= CENTURY {
            year += 100;
        }

        let ctrl: u8 = self.bus.read_reg(regs::INT_EN1).map_err(Error::Bus)?;
        let status: u8 = self.bus.read_reg(regs::STATUS1).map_err(Error::Bus)?;

        Ok(Alarm {
            second: bcd::decode(block[0], 0x7F),
            minute: bcd::decode(block[1], 0x7F),
            hour: bcd::decode(block[2], 0x3F),
            day: bcd::decode(block[3], 0x3F),
            month: bcd::decode(block[4], 0x1F),
            year,
            enabled: ctrl & regs::INT_EN1_A1IE != 0,
            pending: status & regs::STATUS1_A1F != 0,
        })
    }

    /// Set the alarm.
    ///
    /// Writes the 6-byte alarm block, updates the interrupt-enable bit to
    /// match [`Alarm::enabled`], and clears a stale pending flag so a
    /// freshly armed alarm does not immediately report a match. These are
    /// three separate bus transactions; if one of the later steps fails the
    /// register block and the flags may diverge, so re-read the alarm to
    /// confirm the final state after any error.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArgument`] if any time field of `alarm` is out of
    ///   range (no bus transaction is issued).
    /// * [`Error::Bus`] if a register access fails.
    pub fn set_alarm(&mut self, alarm: &Alarm) -> Result<(), Error<B::Error>> {
        if !alarm.is_valid() {
            return Err(Error::InvalidArgument);
        }

        let block: [u8; regs::ALM1_LEN] = [
            bcd::encode(alarm.second),
            bcd::encode(alarm.minute),
            bcd::encode(alarm.hour),
            bcd::encode(alarm.day),
            bcd::encode(alarm.month),
            bcd::encode((alarm.year % 100) as u8),
        ];

        self.bus
            .write_block(regs::ALM1_SEC, &block)
            .map_err(Error::Bus)?;

        let enable: u8 = if alarm.enabled { regs::INT_EN1_A1IE } else { 0 };
        self.bus
            .update_bits(regs::INT_EN1, regs::INT_EN1_A1IE, enable)
            .map_err(Error::Bus)?;

        self.bus
            .clear_bits(regs::STATUS1, regs::STATUS1_A1F)
            .map_err(Error::Bus)
    }

    /// Enable or disable the alarm interrupt.
    ///
    /// A read-modify-write of the interrupt-enable bit; all other control
    /// bits are left untouched.
    ///
    /// # Errors
    ///
    /// * [`Error::Bus`] if the register access fails.
    pub fn set_alarm_enabled(&mut self, enabled: bool) -> Result<(), Error<B::Error>> {
        let enable: u8 = if enabled { regs::INT_EN1_A1IE } else { 0 };
        self.bus
            .update_bits(regs::INT_EN1, regs::INT_EN1_A1IE, enable)
            .map_err(Error::Bus)
    }

    /// Service the alarm interrupt.
    ///
    /// Call from the interrupt handler for the chip's interrupt line. If
    /// the alarm pending flag is set it is cleared (other status bits are
    /// untouched) and `true` is returned; deliver the alarm notification to
    /// the rest of the system after this call returns, outside any lock
    /// guarding the device.
    ///
    /// The interrupt line may be shared, so a clear pending flag is not an
    /// error; the call is a no-op returning `false`.
    ///
    /// A bus fault while servicing is swallowed and `false` is returned: a
    /// transient transport error must not wedge the interrupt path, and a
    /// missed acknowledgement self-corrects on the next status read. The
    /// platform-level interrupt must still be acknowledged by the caller.
    pub fn handle_interrupt(&mut self) -> bool {
        match self.ack_alarm() {
            Ok(fired) => fired,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("bus fault while servicing alarm interrupt");
                false
            }
        }
    }

    fn ack_alarm(&mut self) -> Result<bool, B::Error> {
        let status: u8 = self.bus.read_reg(regs::STATUS1)?;
        if status & regs::STATUS1_A1F == 0 {
            return Ok(false);
        }
        self.bus.clear_bits(regs::STATUS1, regs::STATUS1_A1F)?;
        Ok(true)
    }
}
