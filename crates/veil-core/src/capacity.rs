use crate::bits::SENTINEL_LEN;

/// Color channels that carry data per pixel: R, G and B
pub const CHANNELS: usize = 3;

/// Amount of addressable least significant bits of a `width` x `height` RGB image
pub fn bit_slots(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}

/// `true` if a bitstream of `bitstream_len` bits fits into `bit_slots`
pub fn has_capacity(bit_slots: usize, bitstream_len: usize) -> bool {
    bitstream_len <= bit_slots
}

/// The longest message, in characters, that still fits together with its terminator
pub fn max_payload_chars(bit_slots: usize) -> usize {
    bit_slots.saturating_sub(SENTINEL_LEN) / 8
}
