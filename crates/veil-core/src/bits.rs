//! Turns a text message into a self terminated bitstream and back.
//!
//! Every character becomes one byte, written most significant bit first.
//! The stream is closed by [`SENTINEL`], which the extractor looks for.

use std::fmt::{self, Display, Formatter};
use std::slice::Iter;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::{Result, SteganoError};

/// Terminator appended to every bitstream, `1111111111111110`
pub const SENTINEL: u16 = 0b1111_1111_1111_1110;

/// Number of bits of [`SENTINEL`]
pub const SENTINEL_LEN: usize = 16;

/// An ordered sequence of single bits, ready to be hidden in a carrier
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Bitstream {
    bits: Vec<bool>,
}

impl Bitstream {
    /// unpacks bytes into bits, most significant bit first
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = BitReader::endian(bytes, BigEndian);
        let bits = (0..bytes.len() * 8)
            .map(|_| reader.read_bit())
            .collect::<std::io::Result<Vec<bool>>>()?;

        Ok(Self { bits })
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, bool> {
        self.bits.iter()
    }

    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }
}

impl From<Vec<bool>> for Bitstream {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl<'a> IntoIterator for &'a Bitstream {
    type Item = &'a bool;
    type IntoIter = Iter<'a, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Bitstream {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Serializes `text` into one byte per character followed by the [`SENTINEL`].
///
/// Characters above `U+00FF` have no single byte representation and fail with
/// [`SteganoError::Encoding`]. Payload bits are not escaped, a message that
/// contains the sentinel pattern itself will be cut short on extraction.
pub fn serialize(text: &str) -> Result<Bitstream> {
    let mut writer = BitWriter::endian(Vec::with_capacity(text.len() + 2), BigEndian);
    for (position, character) in text.chars().enumerate() {
        let byte =
            u8::try_from(character).map_err(|_| SteganoError::Encoding { character, position })?;
        writer.write(8, byte)?;
    }
    writer.write(SENTINEL_LEN as u32, SENTINEL)?;

    Bitstream::from_bytes(&writer.into_writer())
}

/// Packs `bits` back into characters, one per 8 bits.
///
/// The sentinel must already be removed.
pub fn deserialize(bits: &[bool]) -> Result<String> {
    if bits.len() % 8 != 0 {
        return Err(SteganoError::Decoding { bits: bits.len() });
    }

    let mut writer = BitWriter::endian(Vec::with_capacity(bits.len() / 8), BigEndian);
    for bit in bits {
        writer.write_bit(*bit)?;
    }

    Ok(writer.into_writer().into_iter().map(char::from).collect())
}
