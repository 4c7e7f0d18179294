use bitstream_io::{BigEndian, BitWrite, BitWriter};

use crate::bits::{deserialize, SENTINEL, SENTINEL_LEN};
use crate::error::Fault;
use crate::pixels::PixelBuffer;
use crate::progress::{ProgressGuard, ProgressReporter};
use crate::{Result, SteganoError};

/// Collects the least significant bits of `buffer` until the sentinel shows up.
///
/// The trailing 16 collected bits are compared to the sentinel after every
/// single bit, not only on byte boundaries. The first match ends the scan, even
/// if it lies inside the hidden text. A match that is not preceded by whole
/// bytes fails with [`Fault::Misaligned`].
///
/// Returns `Ok(None)` if the whole buffer was scanned without a match.
/// Progress is reported after every bit and reset to 0 on return.
pub fn extract<P>(buffer: &PixelBuffer, progress: &mut P) -> Result<Option<String>>
where
    P: ProgressReporter + ?Sized,
{
    let mut progress = ProgressGuard::new(progress);

    let samples = buffer.samples();
    if samples.is_empty() {
        return Err(SteganoError::Extract(Fault::Empty));
    }
    let expected = buffer.bit_slots();
    if samples.len() != expected {
        return Err(SteganoError::Extract(Fault::LengthMismatch {
            len: samples.len(),
            expected,
        }));
    }

    let total = samples.len();
    let mut bits = Vec::new();
    let mut window: u16 = 0;
    for (index, sample) in samples.iter().enumerate() {
        let bit = sample & 1 == 1;
        bits.push(bit);
        window = (window << 1) | u16::from(bit);

        progress.step(index, total);

        if bits.len() >= SENTINEL_LEN && window == SENTINEL {
            bits.truncate(bits.len() - SENTINEL_LEN);
            return match deserialize(&bits) {
                Ok(text) => Ok(Some(text)),
                Err(SteganoError::Decoding { bits }) => {
                    Err(SteganoError::Extract(Fault::Misaligned { bits }))
                }
                Err(e) => Err(e),
            };
        }
    }

    Ok(None)
}

/// Packs all least significant bits of `buffer` into bytes, most significant bit first.
///
/// No sentinel is searched for, this is a plain dump of the hidden bit plane.
/// A trailing partial byte is padded with zeros.
pub fn lsb_bytes(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    let samples = buffer.samples();
    let mut writer = BitWriter::endian(Vec::with_capacity(samples.len() / 8 + 1), BigEndian);
    for sample in samples {
        writer.write_bit(sample & 1 == 1)?;
    }
    writer.byte_align()?;

    Ok(writer.into_writer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::hide_message;
    use crate::progress::NoProgress;
    use crate::test_utils::{prepare_gradient_buffer, ProgressRecorder};

    fn carrier_with(text: &str, width: u32, height: u32) -> PixelBuffer {
        let mut buffer = prepare_gradient_buffer(width, height);
        hide_message(&mut buffer, text, &mut NoProgress).expect("message should fit");
        buffer
    }

    #[test]
    fn should_recover_hi_from_a_4x4_carrier() {
        let buffer = carrier_with("Hi", 4, 4);

        let text = extract(&buffer, &mut NoProgress).unwrap();

        assert_eq!(text.as_deref(), Some("Hi"));
    }

    #[test]
    fn should_recover_a_message_that_fills_the_carrier() {
        let buffer = carrier_with("abcd", 4, 4);

        assert_eq!(
            extract(&buffer, &mut NoProgress).unwrap().as_deref(),
            Some("abcd")
        );
    }

    #[test]
    fn should_recover_an_empty_message() {
        let buffer = carrier_with("", 3, 2);

        assert_eq!(
            extract(&buffer, &mut NoProgress).unwrap().as_deref(),
            Some("")
        );
    }

    #[test]
    fn should_stop_scanning_right_after_the_sentinel() {
        let buffer = carrier_with("Hi", 8, 8);
        let mut recorder = ProgressRecorder::default();

        extract(&buffer, &mut recorder).unwrap();

        // 32 bits scanned plus the reset
        assert_eq!(recorder.values.len(), 33);
    }

    #[test]
    fn should_scan_everything_and_find_nothing_in_a_plain_carrier() {
        let buffer = PixelBuffer::new(4, 4, vec![0x10; 48]);
        let mut recorder = ProgressRecorder::default();

        let text = extract(&buffer, &mut recorder).unwrap();

        assert_eq!(text, None);
        let (last, running) = recorder.values.split_last().unwrap();
        assert_eq!(*last, 0);
        assert_eq!(running.len(), 48);
        assert_eq!(running.last(), Some(&97));
        assert!(running.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn should_cut_a_message_short_at_an_embedded_sentinel() {
        // 0xFF 0xFE in the text form the terminator on a byte boundary
        let buffer = carrier_with("A\u{ff}\u{fe}B", 4, 4);

        assert_eq!(
            extract(&buffer, &mut NoProgress).unwrap().as_deref(),
            Some("A")
        );
    }

    #[test]
    fn should_match_the_sentinel_off_byte_boundaries() {
        // 0111_1111 1111_1111 0... contains the terminator after the first bit
        let buffer = carrier_with("\u{7f}\u{ff}\u{0}", 4, 4);

        match extract(&buffer, &mut NoProgress) {
            Err(SteganoError::Extract(fault)) => assert_eq!(fault, Fault::Misaligned { bits: 1 }),
            other => panic!("expected an extract error, got {other:?}"),
        }
    }

    #[test]
    fn should_fail_on_an_empty_buffer() {
        let buffer = PixelBuffer::new(0, 0, Vec::new());
        let mut recorder = ProgressRecorder::default();

        let result = extract(&buffer, &mut recorder);

        assert!(matches!(result, Err(SteganoError::Extract(Fault::Empty))));
        assert_eq!(recorder.values, vec![0]);
    }

    #[test]
    fn should_fail_on_a_buffer_that_does_not_match_its_dimensions() {
        let buffer = PixelBuffer::new(4, 4, vec![0; 47]);

        match extract(&buffer, &mut NoProgress) {
            Err(SteganoError::Extract(fault)) => assert_eq!(
                fault,
                Fault::LengthMismatch {
                    len: 47,
                    expected: 48
                }
            ),
            other => panic!("expected an extract error, got {other:?}"),
        }
    }

    #[test]
    fn should_dump_the_raw_bit_plane() {
        // 'H' and the first nibble of 'i'
        let samples = "010010000110".bytes().map(|b| 0x20 | (b - b'0')).collect();
        let buffer = PixelBuffer::new(2, 2, samples);

        let bytes = lsb_bytes(&buffer).unwrap();

        assert_eq!(bytes, vec![0b0100_1000, 0b0110_0000]);
    }
}
