//! Fixed material and collection enumerations.
//!
//! These do not depend on input data; every import emits the full set.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialId {
    #[serde(rename = "pure-silver-999")]
    PureSilver999,
    #[serde(rename = "sterling-silver-925")]
    SterlingSilver925,
    TraditionalSilverAlloy,
}

impl MaterialId {
    pub const ALL: [MaterialId; 3] = [
        MaterialId::PureSilver999,
        MaterialId::SterlingSilver925,
        MaterialId::TraditionalSilverAlloy,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            MaterialId::PureSilver999 => "pure-silver-999",
            MaterialId::SterlingSilver925 => "sterling-silver-925",
            MaterialId::TraditionalSilverAlloy => "traditional-silver-alloy",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            MaterialId::PureSilver999 => "Pure Silver (999)",
            MaterialId::SterlingSilver925 => "Sterling Silver (925)",
            MaterialId::TraditionalSilverAlloy => "Traditional Silver Alloy",
        }
    }

    /// Silver content in parts per thousand.
    #[must_use]
    pub fn purity(self) -> u16 {
        match self {
            MaterialId::PureSilver999 => 999,
            MaterialId::SterlingSilver925 => 925,
            MaterialId::TraditionalSilverAlloy => 800,
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            MaterialId::PureSilver999 => {
                "Fine silver at 99.9% purity, used for coins, bars, and small devotional pieces."
            }
            MaterialId::SterlingSilver925 => {
                "Sterling silver at 92.5% purity, the standard for durable everyday silverware."
            }
            MaterialId::TraditionalSilverAlloy => {
                "A hard-wearing traditional alloy suited to large, heavy vessels and utensils."
            }
        }
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionId {
    PlainHeritage,
    HandEngraving,
    MachineEngraving,
    NagasDesign,
    Ashtalakshmi,
    MatteFinish,
    PoojaEssentials,
    DailyUse,
}

impl CollectionId {
    pub const ALL: [CollectionId; 8] = [
        CollectionId::PlainHeritage,
        CollectionId::HandEngraving,
        CollectionId::MachineEngraving,
        CollectionId::NagasDesign,
        CollectionId::Ashtalakshmi,
        CollectionId::MatteFinish,
        CollectionId::PoojaEssentials,
        CollectionId::DailyUse,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            CollectionId::PlainHeritage => "plain-heritage",
            CollectionId::HandEngraving => "hand-engraving",
            CollectionId::MachineEngraving => "machine-engraving",
            CollectionId::NagasDesign => "nagas-design",
            CollectionId::Ashtalakshmi => "ashtalakshmi",
            CollectionId::MatteFinish => "matte-finish",
            CollectionId::PoojaEssentials => "pooja-essentials",
            CollectionId::DailyUse => "daily-use",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            CollectionId::PlainHeritage => "Plain Heritage",
            CollectionId::HandEngraving => "Hand Engraving",
            CollectionId::MachineEngraving => "Machine Engraving",
            CollectionId::NagasDesign => "Nagas Design",
            CollectionId::Ashtalakshmi => "Ashtalakshmi",
            CollectionId::MatteFinish => "Matte Finish",
            CollectionId::PoojaEssentials => "Pooja Essentials",
            CollectionId::DailyUse => "Daily Use",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            CollectionId::PlainHeritage => "Unadorned, polished silver in classic forms.",
            CollectionId::HandEngraving => "Motifs chased and engraved by hand.",
            CollectionId::MachineEngraving => "Precise, repeatable machine-cut patterns.",
            CollectionId::NagasDesign => "Serpent motifs drawn from temple traditions.",
            CollectionId::Ashtalakshmi => "The eight forms of Lakshmi worked in relief.",
            CollectionId::MatteFinish => "Brushed, low-sheen surfaces.",
            CollectionId::PoojaEssentials => "Lamps and vessels for ritual worship.",
            CollectionId::DailyUse => "Everyday silverware for the table and home.",
        }
    }
}

impl std::fmt::Display for CollectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
