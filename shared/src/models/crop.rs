//! Crop recommendation records

use serde::Serialize;

use crate::i18n::{DifficultyNames, LevelNames, ResultsStrings};

/// Three-step scale used for water need and profitability
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn name<'a>(&self, names: &'a LevelNames) -> &'a str {
        match self {
            Level::Low => names.low,
            Level::Medium => names.medium,
            Level::High => names.high,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Low => write!(f, "Low"),
            Level::Medium => write!(f, "Medium"),
            Level::High => write!(f, "High"),
        }
    }
}

/// How hard a crop is to grow
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn name<'a>(&self, names: &'a DifficultyNames) -> &'a str {
        match self {
            Difficulty::Easy => names.easy,
            Difficulty::Medium => names.medium,
            Difficulty::Hard => names.hard,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A crop recommendation; all instances are compile-time constants
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub name: &'static str,
    pub season: &'static str,
    pub water_requirement: Level,
    pub profitability: Level,
    pub difficulty: Difficulty,
    pub description: &'static str,
    pub tips: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fertilizer: Option<&'static str>,
    /// Empty when there is nothing to warn about
    #[serde(skip_serializing_if = "no_lines")]
    pub warnings: &'static [&'static str],
}

fn no_lines(lines: &&'static [&'static str]) -> bool {
    lines.is_empty()
}

/// Level badges of a crop, named in the results language
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CropBadges {
    pub profit: &'static str,
    pub water: &'static str,
    pub difficulty: &'static str,
}

impl Crop {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Badge labels for the results card
    pub fn badges(&self, strings: &'static ResultsStrings) -> CropBadges {
        CropBadges {
            profit: self.profitability.name(&strings.profit_levels),
            water: self.water_requirement.name(&strings.water_levels),
            difficulty: self.difficulty.name(&strings.difficulty_levels),
        }
    }
}
