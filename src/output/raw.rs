// trisynth -- composable triangle wave samplers rendered to wav files
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Headerless PCM output, e.g. for `play -t s16 -r 11025 -c 1 song.raw`.

use std::path::Path;

use log::info;
use snafu::ResultExt;

use super::{render_pcm, Result, WriteRaw};
use crate::encode::FRAME_BYTES;
use crate::wave::Sampler;

/// Write `seconds` of `sampler` as raw frames to `path`.
///
/// Returns the number of frames written.
pub fn write_raw<S: Sampler + ?Sized>(sampler: &S, path: &Path, seconds: f64) -> Result<usize> {
    info!("writing {} ({} seconds, raw)", path.display(), seconds);
    let bytes = render_pcm(sampler, seconds);
    std::fs::write(path, &bytes).context(WriteRaw { path })?;
    Ok(bytes.len() / FRAME_BYTES)
}
