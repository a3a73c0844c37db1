// trisynth -- composable triangle wave samplers rendered to wav files
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! This is the namespace for all parts dealing with data in sampled waves.

/// Number of frames per second of audio. All samplers and all output files use this rate.
pub const FRAME_RATE: u32 = 11025;

/// Time measured in frames since the start of the rendered file.
///
/// ```
/// use trisynth::wave::*;
///
/// assert_eq!(SampleTime(11025).seconds(), 1.0);
/// assert_eq!(SampleTime::from_seconds(0.5), SampleTime(5512));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SampleTime(pub usize);

impl SampleTime {
    /// The time in seconds this frame is played at.
    pub fn seconds(self) -> f64 {
        self.0 as f64 / FRAME_RATE as f64
    }

    /// The frame that is playing at `seconds`.
    pub fn from_seconds(seconds: f64) -> Self {
        SampleTime((seconds * FRAME_RATE as f64) as usize)
    }
}

/// A pure mapping from a frame index to an amplitude.
///
/// Amplitudes are nominally in `[-1, 1]`, but nothing enforces that.
/// Mixing several full scale samplers can leave that range.
pub trait Sampler {
    fn sample(&self, t: SampleTime) -> f64;
}

/// Samplers of different types, e.g. while folding a melody.
pub type BoxedSampler = Box<dyn Sampler>;

impl<S: Sampler + ?Sized> Sampler for &S {
    fn sample(&self, t: SampleTime) -> f64 {
        (**self).sample(t)
    }
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn sample(&self, t: SampleTime) -> f64 {
        (**self).sample(t)
    }
}

/// A sampler backed by a closure.
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Turn a closure into a sampler.
///
/// ```
/// use trisynth::wave::*;
///
/// let ramp = from_fn(|t| t.0 as f64 / 10.0);
/// assert_eq!(ramp.sample(SampleTime(5)), 0.5);
/// ```
pub fn from_fn<F: Fn(SampleTime) -> f64>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F: Fn(SampleTime) -> f64> Sampler for FromFn<F> {
    fn sample(&self, t: SampleTime) -> f64 {
        (self.0)(t)
    }
}
