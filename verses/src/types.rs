// Copyright 2026 The verses Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A single verse, as consumed by the practice app.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verse {
    pub id: String,
    pub title: String,
    pub meter: String,
    pub full: String,
    /// The canonical pāda split, kept for reference.
    pub text: Padas,
    /// Practice text, which may be simplified from the canonical text.
    pub practice: Padas,
    /// Whether the practice flow should use the combined halves rather than the individual pādas.
    pub needs_split_practice: bool,
    pub available: Available,
    pub audio: Audio,
    pub gloss: Gloss,
}

/// The four quarter-lines of a verse.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Padas {
    pub p1: String,
    pub p2: String,
    pub p3: String,
    pub p4: String,
}

impl Padas {
    /// Returns the pādas in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [&self.p1, &self.p2, &self.p3, &self.p4]
            .into_iter()
            .map(String::as_str)
    }
}

/// Which combined half-verse recordings exist.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Available {
    pub p12: bool,
    pub p34: bool,
}

/// Paths to the audio files for a verse, relative to the app root.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Audio {
    pub p1: String,
    pub p2: String,
    pub p3: String,
    pub p4: String,
    pub p12: Option<String>,
    pub p34: Option<String>,
    pub full: String,
}

impl Audio {
    /// Builds the conventional audio paths for the verse with the given ID.
    ///
    /// The combined half-verse paths are only included if they are marked as available.
    pub fn for_verse(id: &str, available: Available) -> Self {
        let path = |suffix: &str| format!("audio/{id}_{suffix}.mp3");
        Self {
            p1: path("p1"),
            p2: path("p2"),
            p3: path("p3"),
            p4: path("p4"),
            p12: available.p12.then(|| path("p12")),
            p34: available.p34.then(|| path("p34")),
            full: path("full"),
        }
    }
}

/// Sanskrit gloss and English meaning.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Gloss {
    pub sa: String,
    pub en: String,
}

/// A unit of audio which can be played on its own.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeUnit {
    P1,
    P2,
    P3,
    P4,
    P12,
    P34,
    Full,
}

impl PracticeUnit {
    pub const PADAS: [Self; 4] = [Self::P1, Self::P2, Self::P3, Self::P4];
    pub const PAIRS: [Self; 2] = [Self::P12, Self::P34];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::P1 => "p1",
            Self::P2 => "p2",
            Self::P3 => "p3",
            Self::P4 => "p4",
            Self::P12 => "p12",
            Self::P34 => "p34",
            Self::Full => "full",
        }
    }
}

impl Display for PracticeUnit {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
