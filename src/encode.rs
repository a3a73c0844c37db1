// trisynth -- composable triangle wave samplers rendered to wav files
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Conversion between amplitudes and 16 bit PCM frames.

/// Integer value of a frame with amplitude `1.0`.
pub const FRAME_SCALE: f64 = 16384.0;

/// Size of one encoded frame in bytes.
pub const FRAME_BYTES: usize = 2;

/// Quantize an amplitude to a signed 16 bit frame, rounding towards zero.
///
/// Out of range amplitudes are not clamped, they wrap around.
///
/// ```
/// use trisynth::encode::*;
///
/// assert_eq!(quantize(0.5), 8192);
/// assert_eq!(quantize(-0.99999), -16383);
/// // 2.5 * 16384 = 40960 does not fit and wraps
/// assert_eq!(quantize(2.5), 40960i32 as i16);
/// ```
pub fn quantize(amplitude: f64) -> i16 {
    (amplitude * FRAME_SCALE) as i32 as i16
}

/// Encode an amplitude as the little endian bytes of its frame.
pub fn encode(amplitude: f64) -> [u8; FRAME_BYTES] {
    quantize(amplitude).to_le_bytes()
}

/// Inverse of `encode`, up to the quantization error.
pub fn decode(frame: [u8; FRAME_BYTES]) -> f64 {
    i16::from_le_bytes(frame) as f64 / FRAME_SCALE
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip_within_quantization() {
        for i in -1000..=1000 {
            let x = i as f64 / 1000.0;
            let decoded = decode(encode(x));
            assert!(
                (decoded - x).abs() <= 1.0 / FRAME_SCALE,
                "{} decoded as {}",
                x,
                decoded
            );
        }
    }

    #[test]
    fn truncates_towards_zero() {
        // 0.3 * 16384 = 4915.2
        assert_eq!(quantize(0.3), 4915);
        assert_eq!(quantize(-0.3), -4915);
        assert_eq!(quantize(1.0), 16384);
        assert_eq!(quantize(-1.0), -16384);
    }

    #[test]
    fn little_endian() {
        assert_eq!(encode(1.0), [0x00, 0x40]);
        assert_eq!(encode(-1.0 / FRAME_SCALE), [0xff, 0xff]);
    }

    #[test]
    fn overflow_wraps() {
        assert_eq!(quantize(2.0), i16::MIN);
        assert_eq!(quantize(-2.0), i16::MIN);
        assert_eq!(quantize(2.0 + 1.0 / FRAME_SCALE), i16::MIN + 1);
    }
}
