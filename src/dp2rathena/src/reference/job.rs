//! Job definitions and job permission decoding
//!
//! Divine Pride packs job permissions into one integer with two unrelated
//! encodings:
//! - the low 20 bits are a composable bitmask over the base jobs
//! - a handful of exact values are "extended" ids for newer jobs
//!
//! Extended ids never combine with the bitmask or with each other, so items
//! usable by both an extended job and a base job cannot be represented by
//! the catalog at all. [`JobPermission`] keeps the two encodings apart.

use std::fmt;

/// rAthena job (`Jobs` keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Job {
    All,
    Acolyte,
    Alchemist,
    Archer,
    Assassin,
    /// Bard and Dancer share one permission in rAthena
    BardDancer,
    Blacksmith,
    Crusader,
    Gunslinger,
    Hunter,
    /// Kagerou and Oboro
    KagerouOboro,
    Knight,
    Mage,
    Merchant,
    Monk,
    Ninja,
    Novice,
    Priest,
    Rebellion,
    Rogue,
    Sage,
    SoulLinker,
    StarGladiator,
    Summoner,
    SuperNovice,
    Swordman,
    Taekwon,
    Thief,
    Wizard,
}

impl Job {
    pub fn name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Acolyte => "Acolyte",
            Self::Alchemist => "Alchemist",
            Self::Archer => "Archer",
            Self::Assassin => "Assassin",
            Self::BardDancer => "BardDancer",
            Self::Blacksmith => "Blacksmith",
            Self::Crusader => "Crusader",
            Self::Gunslinger => "Gunslinger",
            Self::Hunter => "Hunter",
            Self::KagerouOboro => "KagerouOboro",
            Self::Knight => "Knight",
            Self::Mage => "Mage",
            Self::Merchant => "Merchant",
            Self::Monk => "Monk",
            Self::Ninja => "Ninja",
            Self::Novice => "Novice",
            Self::Priest => "Priest",
            Self::Rebellion => "Rebellion",
            Self::Rogue => "Rogue",
            Self::Sage => "Sage",
            Self::SoulLinker => "SoulLinker",
            Self::StarGladiator => "StarGladiator",
            Self::Summoner => "Summoner",
            Self::SuperNovice => "SuperNovice",
            Self::Swordman => "Swordman",
            Self::Taekwon => "Taekwon",
            Self::Thief => "Thief",
            Self::Wizard => "Wizard",
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every base job bit set
pub const ALL_JOBS_MASK: u32 = 0xFFFFF;

pub const NOVICE_BIT: u32 = 0x00001;
/// Bard bit, also the male half of the gender proxy
pub const BARD_BIT: u32 = 0x08000;
/// Dancer bit, also the female half of the gender proxy
pub const DANCER_BIT: u32 = 0x10000;

/// Base job bits, one per job
///
/// Bard and Dancer have separate bits in the catalog but a single rAthena
/// job; gender resolution tells them apart.
pub fn base_job_bits() -> &'static [(u32, Job)] {
    &[
        (NOVICE_BIT, Job::Novice),
        (0x00002, Job::Swordman),
        (0x00004, Job::Mage),       // 83 for 3rd job
        (0x00008, Job::Archer),
        (0x00010, Job::Acolyte),
        (0x00020, Job::Merchant),   // 81 for 3rd job
        (0x00040, Job::Thief),      // 82 for 3rd job
        (0x00080, Job::Knight),     // 95 Lord Knight, 111 Rune Knight
        (0x00100, Job::Wizard),     // 99 High Wizard, 118 Warlock
        (0x00200, Job::Hunter),     // 116 Ranger
        (0x00400, Job::Priest),     // 105 High Priest, 122 Arch Bishop
        (0x00800, Job::Blacksmith), // 97 Whitesmith, 115 Mechanic
        (0x01000, Job::Assassin),   // 114 Guillotine Cross
        (0x02000, Job::Crusader),   // 112 Royal Guard
        (0x04000, Job::Sage),       // 119 Sorcerer
        (BARD_BIT, Job::BardDancer),
        (DANCER_BIT, Job::BardDancer),
        (0x20000, Job::Monk),       // 106 Champion, 123 Sura
        (0x40000, Job::Alchemist),  // 117 Genetic
        (0x80000, Job::Rogue),      // 107 Stalker, 124 Shadow Chaser
    ]
}

/// Jobs for an extended job id, `None` when the id is not extended
pub fn extended_jobs(id: u16) -> Option<&'static [Job]> {
    match id {
        73 => Some(&[Job::Gunslinger]),
        74 => Some(&[Job::Ninja]),
        141 => Some(&[Job::SoulLinker]),
        142 => Some(&[Job::Summoner]),
        143 => Some(&[Job::Taekwon]),
        144 => Some(&[Job::KagerouOboro, Job::Rebellion]),
        // Star Emperor and Soul Reaper have no rAthena job of their own
        145 => Some(&[Job::StarGladiator]),
        146 => Some(&[Job::SoulLinker]),
        500 => Some(&[Job::Rebellion]),
        501 => Some(&[Job::KagerouOboro]),
        502 => Some(&[Job::SuperNovice]),
        503 => Some(&[Job::StarGladiator]),
        _ => None,
    }
}

/// A decoded `job` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobPermission {
    /// Composable base job bits (only the low 20 bits are kept)
    Bitmask(u32),
    /// Exact-match id from the extended table
    Extended(u16),
}

impl JobPermission {
    /// Classify a raw `job` value; extended ids win over bit decomposition
    pub fn from_raw(value: u64) -> Self {
        if let Ok(id) = u16::try_from(value) {
            if extended_jobs(id).is_some() {
                return Self::Extended(id);
            }
        }
        Self::Bitmask((value & u64::from(ALL_JOBS_MASK)) as u32)
    }

    /// True when every base job bit is set
    pub fn is_all_jobs(self) -> bool {
        matches!(self, Self::Bitmask(bits) if bits & ALL_JOBS_MASK == ALL_JOBS_MASK)
    }

    /// True when this is a bitmask containing all of `bit`
    pub fn has_bit(self, bit: u32) -> bool {
        matches!(self, Self::Bitmask(bits) if bits & bit == bit)
    }
}
