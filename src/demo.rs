// trisynth -- composable triangle wave samplers rendered to wav files
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The pieces rendered by the `trisynth` binary, from a single tone up to
//! the tune mixed with itself one octave lower.

use crate::envelope::note;
use crate::melody::{tune, tune_at_octave, Voices};
use crate::mix::both;
use crate::util::from_octaves;
use crate::wave::BoxedSampler;

/// Length of every rendered piece, in seconds.
pub const SECONDS: f64 = 2.0;

/// A named sampler, written to `<name>.wav`.
pub struct Piece {
    pub name: &'static str,
    pub sampler: BoxedSampler,
}

impl Piece {
    fn new(name: &'static str, sampler: BoxedSampler) -> Self {
        Self { name, sampler }
    }
}

impl std::fmt::Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Piece").field("name", &self.name).finish()
    }
}

pub fn pieces() -> Vec<Piece> {
    let Voices { c, e, .. } = Voices::default();
    let lower = from_octaves(-1.0);
    vec![
        Piece::new("song", Box::new(c)),
        Piece::new("ce", Box::new(both(c, e))),
        Piece::new(
            "note",
            Box::new(both(note(c, 0.0, 0.25), note(e, 0.5, 1.0))),
        ),
        Piece::new("mysong", Box::new(tune(&Voices::default()))),
        Piece::new("mario", Box::new(tune_at_octave(1.0))),
        Piece::new("lower_mario", Box::new(tune_at_octave(lower))),
        Piece::new(
            "mix_mario",
            Box::new(both(tune_at_octave(1.0), tune_at_octave(lower))),
        ),
    ]
}
