// trisynth -- composable triangle wave samplers rendered to wav files
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Writing sampled audio to files.

pub mod raw;
pub mod wav;

use std::io;
use std::path::PathBuf;

use snafu::Snafu;

use crate::encode::{self, FRAME_BYTES};
use crate::wave::{SampleTime, Sampler, FRAME_RATE};

pub use raw::write_raw;
pub use wav::{play, write_wav};

/// Channels of every output file.
pub const CHANNELS: u16 = 1;

/// Bits per frame of every output file.
pub const BITS_PER_SAMPLE: u16 = 16;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not create {}: {}", path.display(), source))]
    Create { path: PathBuf, source: hound::Error },
    #[snafu(display("Could not write frame {}: {}", frame, source))]
    WriteFrame { frame: usize, source: hound::Error },
    #[snafu(display("Could not finalize the wav header: {}", source))]
    Finalize { source: hound::Error },
    #[snafu(display("Could not write {}: {}", path.display(), source))]
    WriteRaw { path: PathBuf, source: io::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Number of frames rendered for `seconds` of audio, i.e. how many
/// `t = 0, 1, ...` satisfy `t < seconds * FRAME_RATE`.
///
/// ```
/// use trisynth::output::frame_count;
///
/// assert_eq!(frame_count(2.0), 22050);
/// assert_eq!(frame_count(0.125), 1379);
/// assert_eq!(frame_count(0.0), 0);
/// assert_eq!(frame_count(-1.0), 0);
/// ```
pub fn frame_count(seconds: f64) -> usize {
    let limit = seconds * FRAME_RATE as f64;
    if limit > 0.0 {
        limit.ceil() as usize
    } else {
        0
    }
}

/// The frame times covering `seconds` of audio.
pub fn frames(seconds: f64) -> impl Iterator<Item = SampleTime> {
    (0..frame_count(seconds)).map(SampleTime)
}

/// Encode `seconds` of `sampler` as headerless PCM, mono, 16 bit little endian.
pub fn render_pcm<S: Sampler + ?Sized>(sampler: &S, seconds: f64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(frame_count(seconds) * FRAME_BYTES);
    for t in frames(seconds) {
        bytes.extend_from_slice(&encode::encode(sampler.sample(t)));
    }
    bytes
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::encode::decode;
    use crate::oscillator::tri;

    #[test]
    fn two_seconds_of_pcm() {
        let bytes = render_pcm(&tri(261.63), 2.0);
        assert_eq!(bytes.len(), 44100);
    }

    #[test]
    fn pcm_frames_follow_sampler() {
        let c = tri(261.63);
        let bytes = render_pcm(&c, 0.1);
        assert_eq!(bytes.len(), frame_count(0.1) * FRAME_BYTES);
        for (t, frame) in bytes.chunks_exact(FRAME_BYTES).enumerate() {
            let decoded = decode([frame[0], frame[1]]);
            let expected = c.sample(SampleTime(t));
            assert!((decoded - expected).abs() <= 1.0 / encode::FRAME_SCALE);
        }
    }

    #[test]
    fn partial_frames_round_up() {
        // 0.5 * 11025 = 5512.5, so t = 5512 is still rendered
        assert_eq!(frame_count(0.5), 5513);
        assert_eq!(frames(0.5).last(), Some(SampleTime(5512)));
    }
}
