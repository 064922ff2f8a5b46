//! Driver for the MAX31335 I2C real-time clock.
//!
//! The chip keeps time in packed-BCD registers, fires an interrupt when the
//! clock exactly matches a stored alarm, and divides its oscillator down to
//! a selectable square-wave output. This crate translates between those
//! registers and calendar values, and manages the alarm enable/acknowledge
//! protocol.
//!
//! The driver is written against [`bus::RegisterBus`], a byte-addressed
//! register space with fallible transactions. [`bus::I2cBus`] adapts any
//! embedded-hal blocking I2C bus; any other implementation works, including
//! an in-memory one for host tests:
//!
//! ```
//! use max31335::{DateTime, Max31335, bus::RegisterBus, chrono::Weekday};
//!
//! struct MemBus([u8; 0x60]);
//!
//! impl RegisterBus for MemBus {
//!     type Error = core::convert::Infallible;
//!
//!     fn read_reg(&mut self, reg: u8) -> Result<u8, Self::Error> {
//!         Ok(self.0[usize::from(reg)])
//!     }
//!     fn read_block(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
//!         let reg: usize = reg.into();
//!         buf.copy_from_slice(&self.0[reg..reg + buf.len()]);
//!         Ok(())
//!     }
//!     fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Self::Error> {
//!         self.0[usize::from(reg)] = value;
//!         Ok(())
//!     }
//!     fn write_block(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error> {
//!         let reg: usize = reg.into();
//!         self.0[reg..reg + data.len()].copy_from_slice(data);
//!         Ok(())
//!     }
//! }
//!
//! let mut rtc = Max31335::new(MemBus([0; 0x60]));
//!
//! let dt = DateTime {
//!     year: 2024,
//!     month: 1,
//!     day: 2,
//!     weekday: Weekday::Tue,
//!     hour: 3,
//!     minute: 4,
//!     second: 5,
//! };
//! rtc.set_time(&dt)?;
//! assert_eq!(rtc.read_time()?, dt);
//! # Ok::<(), max31335::Error<core::convert::Infallible>>(())
//! ```
#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]

pub mod bcd;
pub mod bus;
pub mod regs;

mod alarm;
mod clkout;
mod datetime;
mod rtc;

pub use alarm::Alarm;
pub use chrono;
pub use clkout::{CLKOUT_RATES_HZ, round_clkout_rate};
pub use datetime::{DateTime, InvalidDateTime, YEAR_MAX, YEAR_MIN};
pub use rtc::{Max31335, TrickleResistor};

/// Driver error.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error<E> {
    /// A register bus transaction failed.
    ///
    /// Propagated verbatim from the transport; this layer does not retry.
    Bus(E),
    /// A caller-supplied time or alarm field is outside its legal range.
    ///
    /// Rejected before any register access.
    InvalidArgument,
}

/// The RTC operation table.
///
/// Named after the operations an RTC subsystem dispatches to a hardware
/// driver; [`Max31335`] implements it over any [`bus::RegisterBus`].
pub trait RtcOps {
    /// Operation error.
    type Error;

    /// Read the current date and time.
    fn read_time(&mut self) -> Result<DateTime, Self::Error>;
    /// Set the date and time.
    fn set_time(&mut self, dt: &DateTime) -> Result<(), Self::Error>;
    /// Read the aging offset calibration value.
    fn read_offset(&mut self) -> Result<i8, Self::Error>;
    /// Set the aging offset calibration value.
    fn set_offset(&mut self, offset: i8) -> Result<(), Self::Error>;
    /// Read the alarm settings.
    fn read_alarm(&mut self) -> Result<Alarm, Self::Error>;
    /// Set the alarm.
    fn set_alarm(&mut self, alarm: &Alarm) -> Result<(), Self::Error>;
    /// Enable or disable the alarm interrupt.
    fn set_alarm_enabled(&mut self, enabled: bool) -> Result<(), Self::Error>;
}

impl<B: bus::RegisterBus> RtcOps for Max31335<B> {
    type Error = Error<B::Error>;

    fn read_time(&mut self) -> Result<DateTime, Self::Error> {
        Max31335::read_time(self)
    }

    fn set_time(&mut self, dt: &DateTime) -> Result<(), Self::Error> {
        Max31335::set_time(self, dt)
    }

    fn read_offset(&mut self) -> Result<i8, Self::Error> {
        Max31335::read_offset(self)
    }

    fn set_offset(&mut self, offset: i8) -> Result<(), Self::Error> {
        Max31335::set_offset(self, offset)
    }

    fn read_alarm(&mut self) -> Result<Alarm, Self::Error> {
        Max31335::read_alarm(self)
    }

    fn set_alarm(&mut self, alarm: &Alarm) -> Result<(), Self::Error> {
        Max31335::set_alarm(self, alarm)
    }

    fn set_alarm_enabled(&mut self, enabled: bool) -> Result<(), Self::Error> {
        Max31335::set_alarm_enabled(self, enabled)
    }
}
