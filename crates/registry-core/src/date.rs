//! Date-of-birth codec for the fixed `YYYY-MM-DD` wire format.

use crate::{RegistryError, RegistryResult};
use chrono::NaiveDate;

/// `strftime` pattern used for formatting.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of a well-formed `YYYY-MM-DD` string.
const DATE_LEN: usize = 10;

/// Stateless codec between `YYYY-MM-DD` text and [`NaiveDate`].
///
/// Parsing is strict: exactly four year digits, two month digits and two
/// day digits separated by `-`. Chrono's own `%Y-%m-%d` parser accepts
/// unpadded fields and signed years, so the shape is checked first.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateCodec;

impl DateCodec {
    /// Parses `YYYY-MM-DD` text into a calendar date.
    pub fn parse(text: &str) -> RegistryResult<NaiveDate> {
        if !Self::is_well_formed(text) {
            return Err(RegistryError::invalid_date(format!(
                "'{}' does not match YYYY-MM-DD",
                text
            )));
        }

        let bytes = text.as_bytes();
        let year = digits(&bytes[0..4]);
        let month = digits(&bytes[5..7]);
        let day = digits(&bytes[8..10]);

        i32::try_from(year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, month, day))
            .ok_or_else(|| {
                RegistryError::invalid_date(format!("'{}' is not a valid calendar date", text))
            })
    }

    /// Formats a date as zero-padded `YYYY-MM-DD`.
    #[must_use]
    pub fn format(date: NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Checks the structural shape only, without calendar validation.
    #[must_use]
    pub fn is_well_formed(text: &str) -> bool {
        let bytes = text.as_bytes();
        bytes.len() == DATE_LEN
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            })
    }
}

fn digits(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
