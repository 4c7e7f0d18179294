use crate::bits::{serialize, Bitstream};
use crate::capacity::has_capacity;
use crate::error::Fault;
use crate::pixels::PixelBuffer;
use crate::progress::{ProgressGuard, ProgressReporter};
use crate::{Result, SteganoError};

/// Writes `bits` into the least significant bits of `buffer`, one bit per sample.
///
/// The first `bits.len()` samples get their bit 0 replaced, the upper 7 bits
/// and all following samples stay untouched. Nothing is written if the
/// carrier is too small. If the buffer turns out to be shorter than its
/// dimensions claim, every sample written so far is restored and
/// [`SteganoError::Embed`] is returned, so a failed call never leaves a
/// half written carrier behind.
///
/// Progress is reported after every bit and reset to 0 on return.
pub fn embed<P>(buffer: &mut PixelBuffer, bits: &Bitstream, progress: &mut P) -> Result<()>
where
    P: ProgressReporter + ?Sized,
{
    let mut progress = ProgressGuard::new(progress);

    let available = buffer.bit_slots();
    let total = bits.len();
    if !has_capacity(available, total) {
        return Err(SteganoError::Capacity {
            required: total,
            available,
        });
    }

    let samples = buffer.samples_mut();
    let len = samples.len();
    let mut previous = Vec::with_capacity(total);
    for (index, bit) in bits.iter().enumerate() {
        let Some(sample) = samples.get_mut(index) else {
            restore(samples, &previous);
            return Err(SteganoError::Embed(Fault::Truncated { index, len }));
        };
        previous.push(*sample & 1);
        *sample = (*sample & 0xFE) | u8::from(*bit);

        progress.step(index, total);
    }

    Ok(())
}

/// Serializes `text` and embeds it, see [`embed`]
pub fn hide_message<P>(buffer: &mut PixelBuffer, text: &str, progress: &mut P) -> Result<()>
where
    P: ProgressReporter + ?Sized,
{
    let bits = serialize(text)?;
    embed(buffer, &bits, progress)
}

fn restore(samples: &mut [u8], previous: &[u8]) {
    for (sample, lsb) in samples.iter_mut().zip(previous) {
        *sample = (*sample & 0xFE) | lsb;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoProgress;
    use crate::test_utils::{prepare_gradient_buffer, ProgressRecorder};

    #[test]
    fn should_write_hi_into_the_first_32_samples() {
        let original = prepare_gradient_buffer(4, 4);
        let mut buffer = original.clone();
        let bits = serialize("Hi").unwrap();

        embed(&mut buffer, &bits, &mut NoProgress).expect("4x4 has room for 32 bits");

        for (i, (before, after)) in original
            .samples()
            .iter()
            .zip(buffer.samples())
            .enumerate()
        {
            assert_eq!(before & 0xFE, after & 0xFE, "upper bits of sample {i} changed");
            if let Some(bit) = bits.as_bits().get(i) {
                assert_eq!(after & 1, u8::from(*bit), "bit {i} was not written");
            } else {
                assert_eq!(before, after, "sample {i} behind the message changed");
            }
        }
    }

    #[test]
    fn should_fill_the_carrier_to_the_last_slot() {
        let mut buffer = prepare_gradient_buffer(4, 4);
        let bits = serialize("abcd").unwrap();
        assert_eq!(bits.len(), buffer.bit_slots());

        embed(&mut buffer, &bits, &mut NoProgress).expect("exactly 48 bits fit into 4x4");
    }

    #[test]
    fn should_not_touch_the_carrier_when_one_bit_is_too_many() {
        let original = prepare_gradient_buffer(4, 4);
        let mut buffer = original.clone();
        let bits = Bitstream::from(vec![true; 49]);
        let mut recorder = ProgressRecorder::default();

        match embed(&mut buffer, &bits, &mut recorder) {
            Err(SteganoError::Capacity {
                required,
                available,
            }) => {
                assert_eq!(required, 49);
                assert_eq!(available, 48);
            }
            other => panic!("expected a capacity error, got {other:?}"),
        }
        assert_eq!(buffer, original);
        assert_eq!(recorder.values, vec![0]);
    }

    #[test]
    fn should_refuse_a_1000_bit_message_on_a_2x2_carrier() {
        let original = prepare_gradient_buffer(2, 2);
        let mut buffer = original.clone();
        let bits = Bitstream::from(vec![false; 1000]);

        let result = embed(&mut buffer, &bits, &mut NoProgress);

        assert!(matches!(result, Err(SteganoError::Capacity { .. })));
        assert_eq!(buffer, original);
    }

    #[test]
    fn should_roll_back_when_the_buffer_is_shorter_than_announced() {
        let samples: Vec<u8> = (0..20).map(|i| i * 11).collect();
        let original = PixelBuffer::new(4, 4, samples);
        let mut buffer = original.clone();
        let mut recorder = ProgressRecorder::default();

        let result = hide_message(&mut buffer, "Hi", &mut recorder);

        match result {
            Err(SteganoError::Embed(fault)) => {
                assert_eq!(fault, Fault::Truncated { index: 20, len: 20 })
            }
            other => panic!("expected an embed error, got {other:?}"),
        }
        assert_eq!(buffer, original, "a failed embed must not leave bits behind");
        assert_eq!(recorder.values.last(), Some(&0));
    }

    #[test]
    fn should_report_growing_progress_and_reset_it_afterwards() {
        let mut buffer = prepare_gradient_buffer(4, 4);
        let mut recorder = ProgressRecorder::default();

        hide_message(&mut buffer, "Hi", &mut recorder).unwrap();

        let (last, running) = recorder.values.split_last().unwrap();
        assert_eq!(*last, 0);
        assert_eq!(running.len(), 32);
        assert!(running.windows(2).all(|w| w[0] <= w[1]));
        assert!(running.iter().all(|p| *p < 100));
        assert_eq!(running.last(), Some(&96));
    }

    #[test]
    fn should_fail_on_characters_beyond_one_byte_before_writing() {
        let original = prepare_gradient_buffer(4, 4);
        let mut buffer = original.clone();

        let result = hide_message(&mut buffer, "→", &mut NoProgress);

        assert!(matches!(result, Err(SteganoError::Encoding { .. })));
        assert_eq!(buffer, original);
    }
}
