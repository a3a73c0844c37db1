// trisynth -- composable triangle wave samplers rendered to wav files
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Melodies are built from a fixed manifest of notes played one after another.

use log::trace;

use crate::envelope::note;
use crate::mix::{both, Silence};
use crate::oscillator::{tri, Triangle};
use crate::wave::{BoxedSampler, SampleTime, Sampler};

pub const C_FREQ: f64 = 261.63;
pub const E_FREQ: f64 = 329.63;
pub const G_FREQ: f64 = 392.00;

/// The pitches a manifest can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voice {
    C,
    E,
    G,
    /// G one octave below `G`
    LowG,
}

/// The oscillator playing each voice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voices {
    pub c: Triangle,
    pub e: Triangle,
    pub g: Triangle,
    pub low_g: Triangle,
}

impl Default for Voices {
    fn default() -> Self {
        Self {
            c: tri(C_FREQ),
            e: tri(E_FREQ),
            g: tri(G_FREQ),
            low_g: tri(G_FREQ / 2.0),
        }
    }
}

impl Voices {
    /// All voices with their frequencies multiplied by `factor`,
    /// e.g. `0.5` for one octave lower.
    pub fn at_octave(&self, factor: f64) -> Self {
        Self {
            c: self.c.transposed(factor),
            e: self.e.transposed(factor),
            g: self.g.transposed(factor),
            low_g: self.low_g.transposed(factor),
        }
    }

    pub fn get(&self, voice: Voice) -> Triangle {
        match voice {
            Voice::C => self.c,
            Voice::E => self.e,
            Voice::G => self.g,
            Voice::LowG => self.low_g,
        }
    }
}

/// One entry of a manifest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub voice: Voice,
    /// How long the note sounds, in seconds.
    pub length: f64,
    /// How far the next note starts after this one, in seconds.
    /// Anything beyond `length` is a rest.
    pub advance: f64,
}

impl Step {
    /// A note directly followed by the next one.
    pub const fn note(voice: Voice, duration: f64) -> Self {
        Step {
            voice,
            length: duration,
            advance: duration,
        }
    }

    /// A note of `length` seconds followed by a rest until `advance` seconds have passed.
    pub const fn with_rest(voice: Voice, length: f64, advance: f64) -> Self {
        Step {
            voice,
            length,
            advance,
        }
    }
}

/// The short tune rendered by the demo, two seconds long.
pub const TUNE: [Step; 7] = [
    Step::note(Voice::E, 0.125),
    Step::with_rest(Voice::E, 0.125, 0.25),
    Step::with_rest(Voice::E, 0.125, 0.25),
    Step::note(Voice::C, 0.125),
    Step::with_rest(Voice::E, 0.125, 0.25),
    Step::with_rest(Voice::G, 0.125, 0.5),
    Step::with_rest(Voice::LowG, 0.125, 0.5),
];

/// All notes of a manifest mixed into one sampler.
pub struct Melody {
    song: BoxedSampler,
    length: f64,
}

impl Melody {
    /// Seconds from the start of the first note to the end of the last step, rests included.
    pub fn length(&self) -> f64 {
        self.length
    }
}

impl Sampler for Melody {
    fn sample(&self, t: SampleTime) -> f64 {
        self.song.sample(t)
    }
}

impl std::fmt::Debug for Melody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Melody")
            .field("length", &self.length)
            .finish()
    }
}

/// Play the steps of `manifest` one after another, starting at zero seconds.
pub fn compose(manifest: &[Step], voices: &Voices) -> Melody {
    let (length, song) = manifest.iter().fold(
        (0.0, Box::new(Silence) as BoxedSampler),
        |(cursor, song), step| {
            let end = cursor + step.length;
            trace!("{:?} from {} to {}", step.voice, cursor, end);
            let placed = note(voices.get(step.voice), cursor, end);
            (cursor + step.advance, Box::new(both(song, placed)) as BoxedSampler)
        },
    );
    Melody { song, length }
}

/// `TUNE` played by `voices`.
pub fn tune(voices: &Voices) -> Melody {
    compose(&TUNE, voices)
}

/// `TUNE` with all frequencies multiplied by `factor`.
pub fn tune_at_octave(factor: f64) -> Melody {
    tune(&Voices::default().at_octave(factor))
}
