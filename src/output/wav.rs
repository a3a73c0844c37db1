// trisynth -- composable triangle wave samplers rendered to wav files
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use std::io;
use std::path::Path;

use log::{debug, info};
use snafu::ResultExt;

use super::{frames, Create, Finalize, Result, WriteFrame, BITS_PER_SAMPLE, CHANNELS};
use crate::encode::quantize;
use crate::wave::{Sampler, FRAME_RATE};

/// Header of every wav file: mono, 16 bit signed integers at `FRAME_RATE`.
pub fn spec() -> hound::WavSpec {
    hound::WavSpec {
        channels: CHANNELS,
        sample_rate: FRAME_RATE,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Write `seconds` of `sampler` to a wav file at `path`.
///
/// Returns the number of frames written.
pub fn play<S: Sampler + ?Sized>(sampler: &S, path: &Path, seconds: f64) -> Result<usize> {
    info!("writing {} ({} seconds)", path.display(), seconds);
    let mut writer = hound::WavWriter::create(path, spec()).context(Create { path })?;
    let written = write_frames(sampler, &mut writer, seconds)?;
    writer.finalize().context(Finalize)?;
    debug!("{}: {} frames", path.display(), written);
    Ok(written)
}

/// Like `play`, but to an arbitrary seekable stream.
pub fn write_wav<S, W>(sampler: &S, out: W, seconds: f64) -> Result<usize>
where
    S: Sampler + ?Sized,
    W: io::Write + io::Seek,
{
    let mut writer = hound::WavWriter::new(out, spec()).context(Create { path: "<stream>" })?;
    let written = write_frames(sampler, &mut writer, seconds)?;
    writer.finalize().context(Finalize)?;
    Ok(written)
}

fn write_frames<S, W>(sampler: &S, writer: &mut hound::WavWriter<W>, seconds: f64) -> Result<usize>
where
    S: Sampler + ?Sized,
    W: io::Write + io::Seek,
{
    let mut written = 0;
    for t in frames(seconds) {
        writer
            .write_sample(quantize(sampler.sample(t)))
            .context(WriteFrame { frame: t.0 })?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::melody::tune_at_octave;
    use crate::mix::both;
    use crate::oscillator::tri;
    use crate::output::Error;
    use crate::wave::SampleTime;
    use std::io::Cursor;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("trisynth-{}-{}", std::process::id(), name))
    }

    #[test]
    fn two_second_file() {
        let path = temp_path("song.wav");
        let written = play(&tri(261.63), &path, 2.0).unwrap();
        assert_eq!(written, 2 * 11025);

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec(), spec());
        assert_eq!(reader.len(), 2 * 11025);
        let body_bytes = reader.len() as usize * reader.spec().bits_per_sample as usize / 8;
        assert_eq!(body_bytes, 44100);
        drop(reader);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn frames_round_trip() {
        let song = both(tune_at_octave(1.0), tune_at_octave(0.5));
        let mut buffer = Cursor::new(Vec::new());
        let written = write_wav(&song, &mut buffer, 0.5).unwrap();
        assert_eq!(written, 5513);

        buffer.set_position(0);
        let mut reader = hound::WavReader::new(buffer).unwrap();
        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples.len(), written);
        for (t, &frame) in samples.iter().enumerate() {
            assert_eq!(frame, quantize(song.sample(SampleTime(t))));
        }
    }

    #[test]
    fn missing_directory() {
        let path = temp_path("no/such/dir/out.wav");
        match play(&tri(261.63), &path, 1.0) {
            Err(Error::Create { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
