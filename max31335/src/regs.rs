//! MAX31335 register map.
//!
//! Addresses are fixed by hardware. The register space is partitioned into
//! status/control, clock-output config, time-keeping, alarm, power,
//! temperature, and timestamp-snapshot regions.

/// Status register 1.
pub const STATUS1: u8 = 0x00;
/// Interrupt enable register 1.
pub const INT_EN1: u8 = 0x01;
/// Status register 2.
pub const STATUS2: u8 = 0x02;
/// Interrupt enable register 2.
pub const INT_EN2: u8 = 0x03;
/// RTC software reset.
pub const RTC_RESET: u8 = 0x04;
/// RTC configuration 1.
pub const RTC_CONFIG1: u8 = 0x05;
/// RTC configuration 2: clock-output rate select and enable.
pub const RTC_CONFIG2: u8 = 0x06;
/// Timestamp function configuration.
pub const TIMESTAMP_CONFIG: u8 = 0x07;
/// Countdown timer configuration.
pub const TIMER_CONFIG: u8 = 0x08;

/// Sub-second counter (1/128 s).
pub const SECONDS_1_128: u8 = 0x09;
/// Start of the 7-byte time-keeping block.
pub const SECONDS: u8 = 0x0A;
/// Minutes.
pub const MINUTES: u8 = 0x0B;
/// Hours, with 12/24-hour mode and AM/PM flags.
pub const HOURS: u8 = 0x0C;
/// Day of the week, 1-7.
pub const DAY: u8 = 0x0D;
/// Day of the month, 1-31.
pub const DATE: u8 = 0x0E;
/// Month 1-12, with the century flag in bit 7.
pub const MONTH: u8 = 0x0F;
/// Two-digit year.
pub const YEAR: u8 = 0x10;

/// Length of the time-keeping block.
pub const TIME_LEN: usize = 7;

/// Start of the 6-byte alarm-1 block.
pub const ALM1_SEC: u8 = 0x11;
/// Alarm-1 minutes.
pub const ALM1_MIN: u8 = 0x12;
/// Alarm-1 hours (24-hour format).
pub const ALM1_HRS: u8 = 0x13;
/// Alarm-1 day of the month.
pub const ALM1_DAY_DATE: u8 = 0x14;
/// Alarm-1 month (no century flag).
pub const ALM1_MON: u8 = 0x15;
/// Alarm-1 two-digit year.
pub const ALM1_YEAR: u8 = 0x16;

/// Length of the alarm-1 block.
pub const ALM1_LEN: usize = 6;

/// Alarm-2 minutes.
pub const ALM2_MIN: u8 = 0x17;
/// Alarm-2 hours.
pub const ALM2_HRS: u8 = 0x18;
/// Alarm-2 day of the month.
pub const ALM2_DAY_DATE: u8 = 0x19;

/// Countdown timer value.
pub const TIMER_COUNT: u8 = 0x1A;
/// Countdown timer reload value.
pub const TIMER_INIT: u8 = 0x1B;
/// Power management.
pub const PWR_MGMT: u8 = 0x1C;
/// Trickle charger configuration.
pub const TRICKLE: u8 = 0x1D;
/// Aging offset, signed.
pub const AGING_OFFSET: u8 = 0x1E;

/// Temperature sensor configuration.
pub const TS_CONFIG: u8 = 0x30;
/// Temperature alarm high threshold, MSB.
pub const TEMP_ALARM_HIGH_MSB: u8 = 0x31;
/// Temperature alarm high threshold, LSB.
pub const TEMP_ALARM_HIGH_LSB: u8 = 0x32;
/// Temperature alarm low threshold, MSB.
pub const TEMP_ALARM_LOW_MSB: u8 = 0x33;
/// Temperature alarm low threshold, LSB.
pub const TEMP_ALARM_LOW_LSB: u8 = 0x34;
/// Temperature reading, MSB.
pub const TEMP_DATA_MSB: u8 = 0x35;
/// Temperature reading, LSB.
pub const TEMP_DATA_LSB: u8 = 0x36;

/// Start of timestamp snapshot 0 (8 bytes per snapshot, 4 snapshots).
pub const TS0_SEC_1_128: u8 = 0x40;
/// Start of timestamp snapshot 1.
pub const TS1_SEC_1_128: u8 = 0x48;
/// Start of timestamp snapshot 2.
pub const TS2_SEC_1_128: u8 = 0x50;
/// Start of timestamp snapshot 3.
pub const TS3_SEC_1_128: u8 = 0x58;

/// Highest implemented register address.
pub const MAX_REGISTER: u8 = 0x5F;

/// STATUS1: alarm-1 pending flag.
pub const STATUS1_A1F: u8 = 1 << 0;
/// INT_EN1: alarm-1 interrupt enable.
pub const INT_EN1_A1IE: u8 = 1 << 0;

/// HOURS: AM/PM flag, valid in 12-hour mode.
pub const HRS_F_AM_PM: u8 = 1 << 5;
/// HOURS: 12-hour mode select.
pub const HRS_F_12_24: u8 = 1 << 6;
/// MONTH: century extension flag.
pub const MONTH_CENTURY: u8 = 1 << 7;

/// RTC_CONFIG2: clock output enable.
pub const ENCLKO: u8 = 1 << 2;

/// TRICKLE: charging path enable.
pub const TRICKLE_EN: u8 = 1 << 0;
/// TRICKLE: resistor/diode select field.
pub const TRICKLE_SEL_MASK: u8 = 0x0E;
/// TRICKLE: resistor/diode select field offset.
pub const TRICKLE_SEL_SHIFT: u8 = 1;
