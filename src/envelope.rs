// trisynth -- composable triangle wave samplers rendered to wav files
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use crate::wave::{SampleTime, Sampler};

/// Seconds used by `note` for fading in and out.
pub const DEFAULT_FADE: f64 = 0.01;

/// A sampler that only sounds between `start` and `end` (in seconds).
/// The volume rises linearly from zero over the first `fade` seconds and
/// falls back to zero over the last `fade` seconds.
///
/// When the note is shorter than two fades, the fade in takes precedence.
///
/// # Example
///
/// ```
/// use trisynth::envelope::*;
/// use trisynth::wave::*;
///
/// let one = from_fn(|_| 1.0);
/// // 11025 frames per second
/// let n = note_with_fade(one, 1.0, 2.0, 0.25);
/// assert_eq!(n.sample(SampleTime(0)), 0.0);
/// assert_eq!(n.sample(SampleTime(11025)), 0.0);
/// assert!((n.sample(SampleTime(11025 + 1378)) - 0.5).abs() < 1e-3);
/// assert_eq!(n.sample(SampleTime(16538)), 1.0);
/// assert!((n.sample(SampleTime(22050 - 1378)) - 0.5).abs() < 1e-3);
/// assert_eq!(n.sample(SampleTime(22050)), 0.0);
/// assert_eq!(n.sample(SampleTime(22051)), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note<S> {
    sampler: S,
    /// Time in seconds where the note starts
    pub start: f64,
    /// Time in seconds where the note has faded out
    pub end: f64,
    /// Length of fade in and fade out in seconds
    pub fade: f64,
}

/// Play `sampler` from `start` to `end` seconds with the default fade.
pub fn note<S: Sampler>(sampler: S, start: f64, end: f64) -> Note<S> {
    note_with_fade(sampler, start, end, DEFAULT_FADE)
}

pub fn note_with_fade<S: Sampler>(sampler: S, start: f64, end: f64, fade: f64) -> Note<S> {
    Note {
        sampler,
        start,
        end,
        fade,
    }
}

impl<S> Note<S> {
    /// Gain applied to the wrapped sampler at `seconds`.
    /// The order of the checks matters for notes shorter than two fades.
    pub fn gain(&self, seconds: f64) -> f64 {
        if seconds < self.start || seconds > self.end {
            0.0
        } else if seconds < self.start + self.fade {
            (seconds - self.start) / self.fade
        } else if seconds > self.end - self.fade {
            (self.end - seconds) / self.fade
        } else {
            1.0
        }
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }
}

impl<S: Sampler> Sampler for Note<S> {
    fn sample(&self, t: SampleTime) -> f64 {
        let seconds = t.seconds();
        if seconds < self.start || seconds > self.end {
            0.0
        } else if seconds < self.start + self.fade || seconds > self.end - self.fade {
            self.gain(seconds) * self.sampler.sample(t)
        } else {
            self.sampler.sample(t)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::oscillator::tri;
    use crate::wave::{from_fn, FRAME_RATE};

    #[test]
    fn silent_after_end() {
        let n = note(tri(261.63), 0.0, 1.0);
        let t = SampleTime::from_seconds(1.5);
        assert_eq!(n.sample(t), 0.0);
        assert_eq!(n.sample(SampleTime(FRAME_RATE as usize + 1)), 0.0);
    }

    #[test]
    fn silent_before_start() {
        let n = note(from_fn(|_| 1.0), 0.5, 1.0);
        for t in 0..FRAME_RATE as usize / 2 {
            assert_eq!(n.sample(SampleTime(t)), 0.0);
        }
    }

    #[test]
    fn passthrough_between_fades() {
        let wave = tri(329.63);
        let n = note_with_fade(wave, 0.0, 1.0, 0.01);
        // midpoint between the end of the fade in and the start of the fade out
        let t = SampleTime::from_seconds((0.01 + 0.99) / 2.0);
        assert_eq!(n.sample(t), wave.sample(t));
        for t in (200..10800).map(SampleTime) {
            assert_eq!(n.sample(t), wave.sample(t));
        }
    }

    #[test]
    fn fades_are_linear() {
        let n = note_with_fade(from_fn(|_| 2.0), 0.0, 1.0, 0.5);
        let quarter = SampleTime::from_seconds(0.25);
        assert!((n.sample(quarter) - 2.0 * quarter.seconds() / 0.5).abs() < 1e-12);
        let three_quarters = SampleTime::from_seconds(0.75);
        assert!((n.sample(three_quarters) - 2.0 * (1.0 - three_quarters.seconds()) / 0.5).abs() < 1e-12);
    }

    #[test]
    fn short_note_prefers_fade_in() {
        // Both fades overlap for the whole note
        let n = note_with_fade(from_fn(|_| 1.0), 0.0, 0.01, 0.01);
        let t = SampleTime(100);
        let seconds = t.seconds();
        assert_eq!(n.gain(seconds), seconds / 0.01);
        assert_eq!(n.sample(t), seconds / 0.01);
    }

    #[test]
    fn gain_matches_sample() {
        let n = note(from_fn(|_| 1.0), 0.25, 0.5);
        for t in (0..FRAME_RATE as usize).map(SampleTime) {
            assert_eq!(n.sample(t), n.gain(t.seconds()));
        }
    }
}
