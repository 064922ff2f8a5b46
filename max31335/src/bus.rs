//! Register access port.
//!
//! The driver core is written against [`RegisterBus`], a byte-addressed
//! register space with fallible transactions. [`I2cBus`] binds it to an
//! embedded-hal blocking I2C bus; a simulated register space can implement
//! the same trait for host testing.

use crate::regs;
use embedded_hal::blocking::i2c::{Write, WriteRead};

/// 7-bit I2C address of the MAX31335.
pub const I2C_ADDRESS: u8 = 0x68;

// register address + longest block (time-keeping, 7 bytes)
const MAX_WRITE: usize = 1 + regs::TIME_LEN;

/// Byte-addressed register transport.
///
/// Multi-byte records (the time-keeping and alarm blocks) are transferred
/// with [`read_block`](Self::read_block) / [`write_block`](Self::write_block)
/// as one bus transaction each, so a chip-internal tick can never be
/// observed as a torn record.
pub trait RegisterBus {
    /// Bus transaction error.
    type Error;

    /// Read one register.
    fn read_reg(&mut self, reg: u8) -> Result<u8, Self::Error>;

    /// Read `buf.len()` contiguous registers starting at `reg` in a single
    /// transaction.
    fn read_block(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write one register.
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Self::Error>;

    /// Write `data.len()` contiguous registers starting at `reg` in a single
    /// transaction.
    fn write_block(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read-modify-write the bits selected by `mask` to `value`.
    ///
    /// The write is skipped when the register already holds the target
    /// value.
    fn update_bits(&mut self, reg: u8, mask: u8, value: u8) -> Result<(), Self::Error> {
        let old: u8 = self.read_reg(reg)?;
        let new: u8 = (old & !mask) | (value & mask);
        if new != old {
            self.write_reg(reg, new)?;
        }
        Ok(())
    }

    /// Set the bits selected by `mask`.
    fn set_bits(&mut self, reg: u8, mask: u8) -> Result<(), Self::Error> {
        self.update_bits(reg, mask, mask)
    }

    /// Clear the bits selected by `mask`.
    fn clear_bits(&mut self, reg: u8, mask: u8) -> Result<(), Self::Error> {
        self.update_bits(reg, mask, 0)
    }
}

/// [`RegisterBus`] implementation over an embedded-hal blocking I2C bus.
#[derive(Debug)]
pub struct I2cBus<I2C> {
    i2c: I2C,
}

impl<I2C> I2cBus<I2C> {
    /// Create a new register bus from an I2C peripheral.
    ///
    /// The chip responds at [`I2C_ADDRESS`].
    #[inline]
    pub const fn new(i2c: I2C) -> Self {
        I2cBus { i2c }
    }

    /// Free the I2C peripheral.
    #[inline]
    pub fn free(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> RegisterBus for I2cBus<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
{
    type Error = E;

    fn read_reg(&mut self, reg: u8) -> Result<u8, E> {
        let mut buf: [u8; 1] = [0];
        self.i2c.write_read(I2C_ADDRESS, &[reg], &mut buf)?;
        Ok(buf[0])
    }

    fn read_block(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), E> {
        self.i2c.write_read(I2C_ADDRESS, &[reg], buf)
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), E> {
        self.i2c.write(I2C_ADDRESS, &[reg, value])
    }

    fn write_block(&mut self, reg: u8, data: &[u8]) -> Result<(), E> {
        debug_assert!(data.len() < MAX_WRITE);
        let mut frame: [u8; MAX_WRITE] = [0; MAX_WRITE];
        frame[0] = reg;
        frame[1..=data.len()].copy_from_slice(data);
        self.i2c.write(I2C_ADDRESS, &frame[..=data.len()])
    }
}
