// trisynth -- composable triangle wave samplers rendered to wav files
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `trisynth` renders the demo pieces to wav files.

use std::io;
use std::path::PathBuf;

use log::info;
use snafu::{ensure, ResultExt, Snafu};
use structopt::StructOpt;

use trisynth::demo::{self, Piece};
use trisynth::output;

#[derive(Debug, StructOpt)]
#[structopt(name = "trisynth", about = "Rendering triangle wave tunes to wav files")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// Directory the files are written to.
    #[structopt(short, long, parse(from_os_str), default_value = ".")]
    output_dir: PathBuf,

    /// Length of every file in seconds.
    #[structopt(short, long, default_value = "2")]
    seconds: f64,

    /// Write headerless 16 bit PCM (`.raw`) instead of wav files.
    #[structopt(long)]
    raw: bool,

    /// Pieces to render, all of them if none are given.
    pieces: Vec<String>,
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("Unknown piece {:?}, expected one of: {}", name, known))]
    UnknownPiece { name: String, known: String },
    #[snafu(display("Could not create {}: {}", path.display(), source))]
    OutputDir { path: PathBuf, source: io::Error },
    #[snafu(display("{}", source))]
    Render { source: output::Error },
    #[snafu(display("Could not initialize logging: {}", source))]
    Logger { source: log::SetLoggerError },
}

fn select(all: Vec<Piece>, names: &[String]) -> Result<Vec<Piece>, Error> {
    if names.is_empty() {
        return Ok(all);
    }
    let known = all.iter().map(|p| p.name).collect::<Vec<_>>().join(", ");
    for name in names {
        ensure!(
            all.iter().any(|p| p.name == name.as_str()),
            UnknownPiece {
                name: name.as_str(),
                known: known.as_str(),
            }
        );
    }
    Ok(all
        .into_iter()
        .filter(|p| names.iter().any(|n| n.as_str() == p.name))
        .collect())
}

fn main() -> Result<(), Error> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level).context(Logger)?;

    let pieces = select(demo::pieces(), &opt.pieces)?;
    std::fs::create_dir_all(&opt.output_dir).context(OutputDir {
        path: &opt.output_dir,
    })?;

    let extension = if opt.raw { "raw" } else { "wav" };
    for piece in pieces {
        let path = opt.output_dir.join(format!("{}.{}", piece.name, extension));
        let frames = if opt.raw {
            output::write_raw(&piece.sampler, &path, opt.seconds)
        } else {
            output::play(&piece.sampler, &path, opt.seconds)
        }
        .context(Render)?;
        info!("{}: {} frames", piece.name, frames);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn select_all_by_default() {
        let all = select(demo::pieces(), &[]).unwrap();
        assert_eq!(all.len(), demo::pieces().len());
    }

    #[test]
    fn select_keeps_order() {
        let names = vec!["mix_mario".to_string(), "ce".to_string()];
        let picked: Vec<_> = select(demo::pieces(), &names)
            .unwrap()
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(picked, vec!["ce", "mix_mario"]);
    }

    #[test]
    fn select_unknown() {
        let names = vec!["ce".to_string(), "zelda".to_string()];
        match select(demo::pieces(), &names) {
            Err(Error::UnknownPiece { name, .. }) => assert_eq!(name, "zelda"),
            other => panic!("unexpected result {:?}", other.map(|p| p.len())),
        }
    }
}
