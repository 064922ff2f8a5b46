//! Calendar value type.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use num_traits::FromPrimitive;

/// First year representable by the chip.
pub const YEAR_MIN: u16 = 2000;
/// Last year representable by the chip.
///
/// The year register holds two BCD digits; the century flag in the month
/// register extends the range by another 100 years.
pub const YEAR_MAX: u16 = 2199;

/// Years at or beyond this threshold set the century flag.
pub(crate) const CENTURY: u16 = 2100;

/// Calendar date and time, in the chip's native fields.
///
/// The fields are unconstrained; out-of-range values are rejected with
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) before any bus
/// traffic when passed to the driver. Use the [`chrono`] conversions to get
/// values that are valid by construction.
///
/// # Example
///
/// ```
/// use max31335::{DateTime, chrono::NaiveDate};
///
/// let dt: DateTime = NaiveDate::from_ymd_opt(2024, 1, 2)
///     .unwrap()
///     .and_hms_opt(3, 4, 5)
///     .unwrap()
///     .into();
/// assert_eq!(dt.year, 2024);
/// assert_eq!(dt.weekday, max31335::chrono::Weekday::Tue);
/// assert!(dt.is_valid());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DateTime {
    /// Absolute year, `2000..=2199`.
    pub year: u16,
    /// Month of the year, `1..=12`.
    pub month: u8,
    /// Day of the month, `1..=31`.
    pub day: u8,
    /// Day of the week.
    pub weekday: Weekday,
    /// Hour of the day, `0..=23`.
    pub hour: u8,
    /// Minute of the hour, `0..=59`.
    pub minute: u8,
    /// Second of the minute, `0..=59`.
    pub second: u8,
}

impl DateTime {
    /// Returns `true` if every field is within the chip's legal range.
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

/// Conversion to [`chrono::NaiveDateTime`] failed.
///
/// The [`DateTime`] did not name a real calendar date.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidDateTime;

impl From<NaiveDateTime> for DateTime {
    fn from(dt: NaiveDateTime) -> Self {
        DateTime {
            // years outside u16 fail `is_valid` anyway
            year: u16::try_from(dt.year()).unwrap_or(0),
            month: dt.month() as u8,
            day: dt.day() as u8,
            weekday: dt.weekday(),
            hour: dt.hour() as u8,
            minute: dt.minute() as u8,
            second: dt.second() as u8,
        }
    }
}

impl TryFrom<DateTime> for NaiveDateTime {
    type Error = InvalidDateTime;

    fn try_from(dt: DateTime) -> Result<Self, InvalidDateTime> {
        NaiveDate::from_ymd_opt(dt.year.into(), dt.month.into(), dt.day.into())
            .and_then(|date| {
                date.and_hms_opt(dt.hour.into(), dt.minute.into(), dt.second.into())
            })
            .ok_or(InvalidDateTime)
    }
}

/// Weekday to the chip's 1-7 register convention, 1 = Sunday.
pub(crate) fn weekday_to_reg(wd: Weekday) -> u8 {
    wd.num_days_from_sunday() as u8 + 1
}

/// Weekday from the chip's 1-7 register convention.
pub(crate) fn weekday_from_reg(raw: u8) -> Weekday {
    let days_from_sunday: u8 = (raw & 0x07).saturating_sub(1);
    Weekday::from_u8((days_from_sunday + 6) % 7).unwrap_or(Weekday::Sun)
}
