use std::fmt::{self, Display, Formatter};
use std::path::Path;

use crate::capacity::max_payload_chars;
use crate::media::open_carrier;
use crate::pixels::PixelBuffer;
use crate::Result;

/// How much text a carrier image can take
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CapacityReport {
    pub width: u32,
    pub height: u32,
    pub bit_slots: usize,
    pub max_chars: usize,
}

impl From<&PixelBuffer> for CapacityReport {
    fn from(buffer: &PixelBuffer) -> Self {
        let bit_slots = buffer.bit_slots();
        Self {
            width: buffer.width(),
            height: buffer.height(),
            bit_slots,
            max_chars: max_payload_chars(bit_slots),
        }
    }
}

impl Display for CapacityReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} pixels, {} bit-slots, up to {} characters",
            self.width, self.height, self.bit_slots, self.max_chars
        )
    }
}

pub fn of_file(image: impl AsRef<Path>) -> Result<CapacityReport> {
    let buffer = open_carrier(image)?;
    Ok(CapacityReport::from(&buffer))
}
