//! The legacy name checksum.

use log::trace;

use crate::palette::PALETTE_LEN;

/// Modulo that rounds the quotient toward negative infinity.
///
/// The result takes the sign of `b`, so it is never negative for a positive
/// divisor. `b` must not be zero.
#[inline]
pub fn floor_mod(a: i64, b: i64) -> i64 {
    let rem = a % b;
    if rem != 0 && (rem < 0) != (b < 0) {
        rem + b
    } else {
        rem
    }
}

/// Signed sum of the UTF-16 code units of `text`.
///
/// Units are weighted by their distance from the end of the string: the
/// sign alternates every two positions, and for odd lengths the pattern is
/// shifted by one so the last unit is always added.
pub fn checksum(text: &str) -> i64 {
    let units: Vec<u16> = text.encode_utf16().collect();
    let len = units.len() as i64;
    let odd = floor_mod(len, 2) == 1;

    units
        .iter()
        .enumerate()
        .map(|(i, &unit)| {
            let mut ri = len - i as i64;
            if odd {
                ri -= 1;
            }

            let cv = i64::from(unit);
            if floor_mod(ri, 4) >= 2 { -cv } else { cv }
        })
        .sum()
}

/// Palette index selected by `text`, always in `0..PALETTE_LEN`.
pub fn palette_index(text: &str) -> usize {
    let value = checksum(text);
    let index = floor_mod(value, PALETTE_LEN as i64) as usize;
    trace!(
        "[checksum] units: {}, value: {value}, index: {index}",
        text.encode_utf16().count()
    );
    index
}
