// Copyright 2026 The verses Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Types deriving the appropriate serde traits for the verse documents used by the recitation
//! practice app, and helper methods for planning a practice session.
//!
//! [`types::Verse`] is the type of each entry in a verses JSON file, e.g.:
//!
//! ```no_run
//! use verses::types::Verse;
//! use std::{fs::File, io::BufReader};
//!
//! let verses: Vec<Verse> = serde_json::from_reader(BufReader::new(File::open("verses.json")?))?;
//! println!("Title: {}", verses[0].display_title());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod types;

use crate::types::{Padas, PracticeUnit, Verse};

/// How many times to repeat each stage of a practice session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Repeats {
    /// Repeats of each single unit.
    pub singles: usize,
    /// Repeats of each combined half-verse.
    pub pairs: usize,
    /// Repeats of the full verse.
    pub full: usize,
}

impl Default for Repeats {
    fn default() -> Self {
        Self {
            singles: 3,
            pairs: 2,
            full: 1,
        }
    }
}

impl Verse {
    /// Returns the title to show for the verse, falling back to its ID.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.id
        } else {
            &self.title
        }
    }

    /// Returns either the practice text or the canonical text.
    pub fn padas(&self, use_practice: bool) -> &Padas {
        if use_practice {
            &self.practice
        } else {
            &self.text
        }
    }

    /// Returns the audio path for the given unit, if there is one.
    pub fn audio_for(&self, unit: PracticeUnit) -> Option<&str> {
        let path = match unit {
            PracticeUnit::P1 => Some(&self.audio.p1),
            PracticeUnit::P2 => Some(&self.audio.p2),
            PracticeUnit::P3 => Some(&self.audio.p3),
            PracticeUnit::P4 => Some(&self.audio.p4),
            PracticeUnit::P12 => self.audio.p12.as_ref(),
            PracticeUnit::P34 => self.audio.p34.as_ref(),
            PracticeUnit::Full => Some(&self.audio.full),
        };
        path.map(String::as_str).filter(|path| !path.is_empty())
    }

    /// Returns the units played one at a time in the first stage of practice.
    ///
    /// Verses which need split practice may not have recordings of the individual pādas, so use
    /// the combined halves instead.
    pub fn singles(&self) -> &'static [PracticeUnit] {
        if self.needs_split_practice {
            &PracticeUnit::PAIRS
        } else {
            &PracticeUnit::PADAS
        }
    }

    /// Returns whether the given combined half-verse is both marked available and has a path.
    pub fn has_pair(&self, unit: PracticeUnit) -> bool {
        let available = match unit {
            PracticeUnit::P12 => self.available.p12,
            PracticeUnit::P34 => self.available.p34,
            _ => return false,
        };
        available && self.audio_for(unit).is_some()
    }

    /// Estimates the total number of plays in a practice session.
    pub fn total_plays(&self, repeats: Repeats) -> usize {
        let pairs = PracticeUnit::PAIRS
            .into_iter()
            .filter(|&unit| self.has_pair(unit))
            .count();
        self.singles().len() * repeats.singles + pairs * repeats.pairs + repeats.full
    }

    /// Returns the audio paths to play for a practice session, in order.
    ///
    /// Each unit is repeated the given number of times before moving on to the next. Units
    /// without audio are skipped.
    pub fn schedule(&self, repeats: Repeats) -> Vec<&str> {
        let mut schedule = Vec::new();
        for &unit in self.singles() {
            self.push_repeated(&mut schedule, unit, repeats.singles);
        }
        for unit in PracticeUnit::PAIRS {
            self.push_repeated(&mut schedule, unit, repeats.pairs);
        }
        self.push_repeated(&mut schedule, PracticeUnit::Full, repeats.full);
        schedule
    }

    fn push_repeated<'a>(&'a self, schedule: &mut Vec<&'a str>, unit: PracticeUnit, count: usize) {
        if let Some(path) = self.audio_for(unit) {
            schedule.extend(std::iter::repeat_n(path, count));
        }
    }

    /// Returns the unit to play when the pāda with the given index (0 to 3) is tapped.
    pub fn tap_unit(&self, index: usize) -> Option<PracticeUnit> {
        let unit = *PracticeUnit::PADAS.get(index)?;
        if self.needs_split_practice {
            Some(if index < 2 {
                PracticeUnit::P12
            } else {
                PracticeUnit::P34
            })
        } else {
            Some(unit)
        }
    }
}
