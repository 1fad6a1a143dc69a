//! Decoder for the encoded polyline format the solver uses for route
//! geometries: zig-zag deltas of `lat, lon` pairs, packed in 5-bit chunks
//! offset by 63.

use geo::{Coord, LineString};
use thiserror::Error;

/// Precision of the geometries returned by the solver.
pub const DEFAULT_PRECISION: u32 = 5;

const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: u64 = 0x1f;
const CONTINUATION_BIT: u64 = 0x20;
const CHAR_OFFSET: u8 = 63;

#[derive(Debug, Error, PartialEq)]
pub enum PolylineError {
    #[error("Invalid character {character:?} at byte {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Polyline ends in the middle of a coordinate")]
    Truncated,

    #[error("Value starting at byte {0} is out of range")]
    Overflow(usize),
}

struct Decoder<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl Decoder<'_> {
    fn is_done(&self) -> bool {
        self.position >= self.bytes.len()
    }

    fn next_delta(&mut self) -> Result<i64, PolylineError> {
        let start = self.position;
        let mut result: u64 = 0;
        let mut shift = 0;

        loop {
            let byte = *self.bytes.get(self.position).ok_or(PolylineError::Truncated)?;
            if !(CHAR_OFFSET..=127).contains(&byte) {
                return Err(PolylineError::InvalidCharacter {
                    character: char::from(byte),
                    position: self.position,
                });
            }
            if shift >= u64::BITS {
                return Err(PolylineError::Overflow(start));
            }

            let chunk = u64::from(byte - CHAR_OFFSET);
            let bits = (chunk & CHUNK_MASK) << shift;
            if bits >> shift != chunk & CHUNK_MASK {
                return Err(PolylineError::Overflow(start));
            }

            result |= bits;
            shift += CHUNK_BITS;
            self.position += 1;

            if chunk & CONTINUATION_BIT == 0 {
                break;
            }
        }

        let value = (result >> 1) as i64;
        Ok(if result & 1 == 1 { !value } else { value })
    }

    /// Adds the next delta to `previous`.
    fn next_value(&mut self, previous: i64) -> Result<i64, PolylineError> {
        let start = self.position;
        previous
            .checked_add(self.next_delta()?)
            .ok_or(PolylineError::Overflow(start))
    }
}

/// Decodes `encoded` into a line string of `x = lon, y = lat` coordinates.
pub fn decode(encoded: &str, precision: u32) -> Result<LineString<f64>, PolylineError> {
    let factor = 10_f64.powi(precision as i32);
    let mut decoder = Decoder {
        bytes: encoded.as_bytes(),
        position: 0,
    };

    let mut lat: i64 = 0;
    let mut lon: i64 = 0;
    let mut coords = Vec::new();

    while !decoder.is_done() {
        lat = decoder.next_value(lat)?;
        lon = decoder.next_value(lon)?;

        coords.push(Coord {
            x: lon as f64 / factor,
            y: lat as f64 / factor,
        });
    }

    Ok(LineString::new(coords))
}
