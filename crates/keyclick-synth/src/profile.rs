//! The closed catalog of keyboard sound profiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SynthError;

/// A simulated switch type. Each variant has one dedicated recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Cherry MX Blue: sharp click with plastic impact.
    Blue,
    /// Cherry MX Brown: tactile bump without the click.
    Brown,
    /// Cherry MX Red: linear, smooth and quiet.
    Red,
    /// Aggressive metal-on-metal bottom out.
    Hard,
    /// Buckling spring (IBM Model M style).
    Mechanical,
    /// Deep Topre-style thock.
    Thock,
    /// Lubed, smooth switches.
    Creamy,
    /// Unlubricated, scratchy switches.
    Dry,
    /// Extra clicky (Box Jade/Navy).
    Clicky,
    /// Dampened silent switches.
    Silent,
    /// Pronounced tactile bump.
    Tactile,
    /// Vintage typewriter.
    Typewriter,
    /// Warm, soft, nostalgic.
    Lofi,
    /// Smooth gaming switch.
    GxFeryn,
    /// Sharp, martial-arts strike.
    LeeSin,
    /// Retro terminal with digital glitches.
    Hacker,
}

impl Profile {
    /// Every profile, in catalog order.
    pub const ALL: [Profile; 16] = [
        Profile::Blue,
        Profile::Brown,
        Profile::Red,
        Profile::Hard,
        Profile::Mechanical,
        Profile::Thock,
        Profile::Creamy,
        Profile::Dry,
        Profile::Clicky,
        Profile::Silent,
        Profile::Tactile,
        Profile::Typewriter,
        Profile::Lofi,
        Profile::GxFeryn,
        Profile::LeeSin,
        Profile::Hacker,
    ];

    /// Identifier used on the command line and in asset file names.
    pub fn name(self) -> &'static str {
        match self {
            Profile::Blue => "blue",
            Profile::Brown => "brown",
            Profile::Red => "red",
            Profile::Hard => "hard",
            Profile::Mechanical => "mechanical",
            Profile::Thock => "thock",
            Profile::Creamy => "creamy",
            Profile::Dry => "dry",
            Profile::Clicky => "clicky",
            Profile::Silent => "silent",
            Profile::Tactile => "tactile",
            Profile::Typewriter => "typewriter",
            Profile::Lofi => "lofi",
            Profile::GxFeryn => "gx_feryn",
            Profile::LeeSin => "lee_sin",
            Profile::Hacker => "hacker",
        }
    }

    /// Human-readable label for settings screens.
    pub fn display_name(self) -> &'static str {
        match self {
            Profile::Blue => "Blue (Cherry MX)",
            Profile::Brown => "Brown (Tactile)",
            Profile::Red => "Red (Linear)",
            Profile::Hard => "Hard (Aggressive)",
            Profile::Mechanical => "Mechanical (Heavy)",
            Profile::Thock => "Thock (Deep)",
            Profile::Creamy => "Creamy (Smooth)",
            Profile::Dry => "Dry (Scratchy)",
            Profile::Clicky => "Clicky (Extra)",
            Profile::Silent => "Silent (Quiet)",
            Profile::Tactile => "Tactile (Bump)",
            Profile::Typewriter => "Typewriter (Vintage)",
            Profile::Lofi => "Lofi (Chill)",
            Profile::GxFeryn => "GX Feryn (Gaming)",
            Profile::LeeSin => "Lee Sin (Sharp)",
            Profile::Hacker => "Hacker (Matrix)",
        }
    }

    /// File name of this profile's rendered asset.
    pub fn asset_file_name(self) -> String {
        format!("keyboard_{}.wav", self.name())
    }

    /// Position in catalog order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next profile in catalog order, wrapping around.
    pub fn next(self) -> Profile {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous profile in catalog order, wrapping around.
    pub fn previous(self) -> Profile {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Profile::ALL
            .iter()
            .copied()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| SynthError::invalid_profile(s))
    }
}

/// Which profiles a generation run covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileSelection {
    /// The whole catalog.
    #[default]
    All,
    /// A single profile.
    One(Profile),
}

impl ProfileSelection {
    /// Sentinel selector meaning "every profile".
    pub const ALL_SENTINEL: &'static str = "all";

    /// Profiles covered by this selection, in catalog order.
    pub fn profiles(&self) -> Vec<Profile> {
        match self {
            ProfileSelection::All => Profile::ALL.to_vec(),
            ProfileSelection::One(profile) => vec![*profile],
        }
    }
}

impl fmt::Display for ProfileSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileSelection::All => f.write_str(Self::ALL_SENTINEL),
            ProfileSelection::One(profile) => write!(f, "{}", profile),
        }
    }
}

impl FromStr for ProfileSelection {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_SENTINEL) {
            Ok(ProfileSelection::All)
        } else {
            s.parse().map(ProfileSelection::One)
        }
    }
}
