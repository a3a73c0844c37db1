// trisynth -- composable triangle wave samplers rendered to wav files
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use crate::wave::{SampleTime, Sampler, FRAME_RATE};

/// Peak amplitude used by `tri`.
pub const DEFAULT_AMPLITUDE: f64 = 0.3;

/// A continuous triangle wave.
///
/// The period is a whole number of frames, so the actual pitch is slightly
/// above `frequency` for most frequencies.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    frequency: f64,
    amplitude: f64,
    /// Frames per period, `FRAME_RATE // frequency`.
    period: f64,
}

impl Triangle {
    /// Panics unless `0 < frequency <= FRAME_RATE`, as lower frequencies have no
    /// period and higher ones a period of zero frames.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        assert!(
            frequency > 0.0,
            "triangle frequency must be positive, got {}",
            frequency
        );
        let period = (FRAME_RATE as f64 / frequency).floor();
        assert!(
            period >= 1.0,
            "triangle frequency {} exceeds the frame rate {}",
            frequency,
            FRAME_RATE
        );
        Self {
            frequency,
            amplitude,
            period,
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// The same wave with its frequency multiplied by `factor`.
    pub fn transposed(&self, factor: f64) -> Self {
        Self::new(self.frequency * factor, self.amplitude)
    }
}

/// A triangle wave of `frequency` Hz at the default amplitude.
pub fn tri(frequency: f64) -> Triangle {
    Triangle::new(frequency, DEFAULT_AMPLITUDE)
}

impl Sampler for Triangle {
    fn sample(&self, t: SampleTime) -> f64 {
        let phase = t.0 as f64 / self.period;
        // Sawtooth in [-0.5, 0.5), folded into [-1, 1]
        let saw = phase - (phase + 0.5).floor();
        let triangle = 2.0 * (2.0 * saw).abs() - 1.0;
        self.amplitude * triangle
    }
}
