// Copyright 2026 The verses Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use clap::Parser;
use eyre::{Report, WrapErr, bail};
use log::info;
use std::{
    fs::{File, create_dir_all},
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};
use verses::{Repeats, types::Verse};
use verseutils::{tsv_to_verses, write_verses};

fn main() -> Result<(), Report> {
    pretty_env_logger::init();

    match Args::parse() {
        Args::Convert { input, output } => {
            let verses = tsv_to_verses(BufReader::new(
                File::open(&input).wrap_err_with(|| format!("Failed to open {input:?}"))?,
            ))
            .wrap_err_with(|| format!("Failed to read {input:?}"))?;
            if let Some(parent) = output.parent() {
                create_dir_all(parent)?;
            }
            write_verses(BufWriter::new(File::create(&output)?), &verses)
                .wrap_err_with(|| format!("Failed to write {output:?}"))?;
            println!("Generated {} verses → {}", verses.len(), output.display());
        }
        Args::Print { path, practice } => {
            for verse in read_verses(&path)? {
                print_verse(&verse, practice);
            }
        }
        Args::Plan {
            path,
            id,
            singles,
            pairs,
            full,
        } => {
            let verses = read_verses(&path)?;
            let Some(verse) = verses.iter().find(|verse| verse.id == id) else {
                bail!("No verse with ID {id:?} in {path:?}");
            };
            print_plan(
                verse,
                Repeats {
                    singles,
                    pairs,
                    full,
                },
            );
        }
    }

    Ok(())
}

#[derive(Clone, Debug, Parser)]
enum Args {
    /// Convert a tab-separated verse table to a verses JSON file.
    Convert {
        #[arg(long, default_value = "data/verses.tsv")]
        input: PathBuf,
        #[arg(long, default_value = "data/verses.json")]
        output: PathBuf,
    },
    /// Print the verses from the given verses JSON file to standard output.
    Print {
        path: PathBuf,
        /// Show the practice text rather than the canonical text.
        #[arg(long)]
        practice: bool,
    },
    /// Print the audio files which would be played to practice the given verse.
    Plan {
        path: PathBuf,
        id: String,
        /// How many times to play each pāda.
        #[arg(long, default_value_t = 3)]
        singles: usize,
        /// How many times to play each combined half-verse.
        #[arg(long, default_value_t = 2)]
        pairs: usize,
        /// How many times to play the full verse.
        #[arg(long, default_value_t = 1)]
        full: usize,
    },
}

fn read_verses(path: &Path) -> Result<Vec<Verse>, Report> {
    let file = File::open(path).wrap_err_with(|| format!("Failed to open {path:?}"))?;
    let verses: Vec<Verse> = serde_json::from_reader(BufReader::new(file))
        .wrap_err_with(|| format!("Failed to parse {path:?}"))?;
    info!("Read {} verses from {path:?}", verses.len());
    Ok(verses)
}

fn print_verse(verse: &Verse, practice: bool) {
    println!("= {} =", verse.display_title());
    println!("Meter: {}", verse.meter);
    if !verse.full.is_empty() {
        println!("{}", verse.full);
    }
    for (i, pada) in verse.padas(practice).iter().enumerate() {
        println!("{}: {pada}", i + 1);
    }
    if !verse.gloss.sa.is_empty() {
        println!("अर्थः: {}", verse.gloss.sa);
    }
    if !verse.gloss.en.is_empty() {
        println!("Meaning: {}", verse.gloss.en);
    }
    println!();
}

fn print_plan(verse: &Verse, repeats: Repeats) {
    println!("= {} =", verse.display_title());
    let singles = verse
        .singles()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    println!("Singles: {}", singles.join(", "));
    for (i, unit) in (0..4).filter_map(|i| Some((i, verse.tap_unit(i)?))) {
        println!("Tap pāda {}: {unit}", i + 1);
    }
    for path in verse.schedule(repeats) {
        println!("{path}");
    }
    println!("Total plays: {}", verse.total_plays(repeats));
}
