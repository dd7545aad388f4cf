//! Ammo subtype definitions

use std::fmt;

/// rAthena ammo subtype (`SubType` of `Ammo` items)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmmoType {
    Arrow,
    Dagger,
    Bullet,
    Shell,
    Grenade,
    Shuriken,
    Kunai,
    CannonBall,
    ThrowWeapon,
}

/// All ammo subtypes in rAthena declaration order
pub const AMMO_TYPES: &[AmmoType] = &[
    AmmoType::Arrow,
    AmmoType::Dagger,
    AmmoType::Bullet,
    AmmoType::Shell,
    AmmoType::Grenade,
    AmmoType::Shuriken,
    AmmoType::Kunai,
    AmmoType::CannonBall,
    AmmoType::ThrowWeapon,
];

impl AmmoType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Arrow => "Arrow",
            Self::Dagger => "Dagger",
            Self::Bullet => "Bullet",
            Self::Shell => "Shell",
            Self::Grenade => "Grenade",
            Self::Shuriken => "Shuriken",
            Self::Kunai => "Kunai",
            Self::CannonBall => "CannonBall",
            Self::ThrowWeapon => "ThrowWeapon",
        }
    }

    /// Divine Pride only distinguishes four ammo subtypes (1024..=1027)
    pub fn from_catalog_code(code: i64) -> Option<Self> {
        match code {
            1024 => Some(Self::Arrow),
            1025 => Some(Self::CannonBall),
            1026 => Some(Self::ThrowWeapon),
            1027 => Some(Self::Bullet),
            _ => None,
        }
    }
}

impl fmt::Display for AmmoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every ammo subtype as one slash-joined review marker
pub fn ammo_candidates() -> String {
    super::join_candidates(AMMO_TYPES.iter().map(|a| a.name()))
}
