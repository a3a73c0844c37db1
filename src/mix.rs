// trisynth -- composable triangle wave samplers rendered to wav files
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Layering samplers on top of each other.

use crate::wave::{SampleTime, Sampler};

/// Two samplers played at the same time.
///
/// The amplitudes are summed as they are, mixing two loud samplers can
/// exceed the representable range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Both<F, G> {
    first: F,
    second: G,
}

/// Play `f` and `g` at the same time.
///
/// ```
/// use trisynth::mix::both;
/// use trisynth::wave::*;
///
/// let chord = both(from_fn(|_| 0.25), from_fn(|t| t.0 as f64));
/// assert_eq!(chord.sample(SampleTime(2)), 2.25);
/// ```
pub fn both<F: Sampler, G: Sampler>(f: F, g: G) -> Both<F, G> {
    Both {
        first: f,
        second: g,
    }
}

impl<F: Sampler, G: Sampler> Sampler for Both<F, G> {
    fn sample(&self, t: SampleTime) -> f64 {
        self.first.sample(t) + self.second.sample(t)
    }
}

/// Zero everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Silence;

impl Sampler for Silence {
    fn sample(&self, _t: SampleTime) -> f64 {
        0.0
    }
}
