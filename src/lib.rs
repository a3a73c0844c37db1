// trisynth -- composable triangle wave samplers rendered to wav files
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

// modules for making sounds
pub mod envelope;
pub mod mix;
pub mod oscillator;
pub mod wave;

// Building songs
pub mod demo;
pub mod melody;

// Writing files
pub mod encode;
pub mod output;

// Utility modules
pub mod util;
