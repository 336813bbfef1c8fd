//! Static planet and difficulty tables.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Per-planet record. `relative_difficulty` divides the player's raw input power
/// so that every planet takes a comparable amount of mashing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetSpec {
    pub name: &'static str,
    /// Equatorial surface speed in mph.
    pub target_mph: f64,
    pub relative_difficulty: f64,
    pub color: Color,
    /// Rotates backwards relative to its orbit.
    pub retrograde: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Mercury,
    Venus,
    #[default]
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

static PLANETS: [PlanetSpec; 8] = [
    PlanetSpec { name: "Mercury", target_mph: 7.0, relative_difficulty: 0.01, color: Color::Rgb(0xA9, 0xA9, 0xA9), retrograde: false },
    PlanetSpec { name: "Venus", target_mph: 4.0, relative_difficulty: 0.004, color: Color::Rgb(0xE7, 0xCF, 0xAD), retrograde: true },
    PlanetSpec { name: "Earth", target_mph: 1039.0, relative_difficulty: 1.0, color: Color::Rgb(0x1E, 0x90, 0xFF), retrograde: false },
    PlanetSpec { name: "Mars", target_mph: 537.0, relative_difficulty: 0.52, color: Color::Rgb(0xCD, 0x5C, 0x5C), retrograde: false },
    PlanetSpec { name: "Jupiter", target_mph: 27501.0, relative_difficulty: 26.46, color: Color::Rgb(0xE8, 0xAE, 0x68), retrograde: false },
    PlanetSpec { name: "Saturn", target_mph: 21335.0, relative_difficulty: 20.53, color: Color::Rgb(0xF4, 0xE3, 0xB2), retrograde: false },
    PlanetSpec { name: "Uranus", target_mph: 5744.0, relative_difficulty: 5.53, color: Color::Rgb(0xB0, 0xE0, 0xE6), retrograde: true },
    PlanetSpec { name: "Neptune", target_mph: 5967.0, relative_difficulty: 5.74, color: Color::Rgb(0x41, 0x69, 0xE1), retrograde: false },
];

impl Planet {
    /// Catalog order, used for the previous/next selector.
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    pub fn spec(self) -> &'static PlanetSpec {
        &PLANETS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Planet {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Planet {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Planet::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPlanet(s.to_string()))
    }
}

/// Tuning knobs for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Multiplier on the 5% per-step speed decay.
    pub speed_decay: f64,
    /// Multiplier on the speed gained per input.
    pub click_power: f64,
    /// Allowed fractional deviation from the target speed while still scoring.
    pub tolerance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile { speed_decay: 0.8, click_power: 2.0, tolerance: 0.2 },
            Difficulty::Normal => DifficultyProfile { speed_decay: 1.0, click_power: 1.0, tolerance: 0.1 },
            Difficulty::Hard => DifficultyProfile { speed_decay: 1.2, click_power: 0.7, tolerance: 0.05 },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn cycle(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownDifficulty(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_values_are_positive() {
        for planet in Planet::ALL {
            let spec = planet.spec();
            assert!(spec.target_mph > 0.0, "{} has no target speed", spec.name);
            assert!(spec.relative_difficulty > 0.0, "{} has no difficulty", spec.name);
        }
    }

    #[test]
    fn test_spec_lookup_matches_variant() {
        for planet in Planet::ALL {
            assert_eq!(planet.spec().name, format!("{planet:?}"));
        }
        assert_eq!(Planet::Earth.spec().target_mph, 1039.0);
        assert_eq!(Planet::Jupiter.spec().relative_difficulty, 26.46);
    }

    #[test]
    fn test_planet_names_unique() {
        let mut names: Vec<_> = Planet::ALL.iter().map(|p| p.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_selector_wraps() {
        assert_eq!(Planet::Neptune.next(), Planet::Mercury);
        assert_eq!(Planet::Mercury.prev(), Planet::Neptune);
        assert_eq!(Planet::Earth.next(), Planet::Mars);
        assert_eq!(Planet::Earth.prev(), Planet::Venus);
    }

    #[test]
    fn test_only_venus_and_uranus_retrograde() {
        let retro: Vec<_> = Planet::ALL.into_iter().filter(|p| p.spec().retrograde).collect();
        assert_eq!(retro, vec![Planet::Venus, Planet::Uranus]);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("mars".parse::<Planet>().unwrap(), Planet::Mars);
        assert_eq!(" SATURN ".parse::<Planet>().unwrap(), Planet::Saturn);
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!("pluto".parse::<Planet>(), Err(Error::UnknownPlanet(_))));
        assert!(matches!("insane".parse::<Difficulty>(), Err(Error::UnknownDifficulty(_))));
    }

    #[test]
    fn test_difficulty_profiles() {
        let normal = Difficulty::Normal.profile();
        assert_eq!(normal.click_power, 1.0);
        assert_eq!(normal.speed_decay, 1.0);
        assert_eq!(normal.tolerance, 0.1);
        assert!(Difficulty::Easy.profile().tolerance > Difficulty::Hard.profile().tolerance);
        assert_eq!(Difficulty::Hard.cycle(), Difficulty::Easy);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Planet::Neptune).unwrap();
        assert_eq!(json, "\"neptune\"");
        let back: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(back, Difficulty::Easy);
    }
}
