//! Weapon subtype definitions

use std::fmt;

/// rAthena weapon subtype (`SubType` of `Weapon` items)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponType {
    Dagger,
    OneHandSword,
    TwoHandSword,
    OneHandSpear,
    TwoHandSpear,
    OneHandAxe,
    TwoHandAxe,
    Mace,
    TwoHandMace,
    Staff,
    TwoHandStaff,
    Bow,
    Knuckle,
    Musical,
    Whip,
    Book,
    Katar,
    Revolver,
    Rifle,
    Gatling,
    Shotgun,
    Grenade,
    Huuma,
}

impl WeaponType {
    /// Name as written in the rAthena item database
    pub fn name(self) -> &'static str {
        match self {
            Self::Dagger => "Dagger",
            Self::OneHandSword => "1hSword",
            Self::TwoHandSword => "2hSword",
            Self::OneHandSpear => "1hSpear",
            Self::TwoHandSpear => "2hSpear",
            Self::OneHandAxe => "1hAxe",
            Self::TwoHandAxe => "2hAxe",
            Self::Mace => "Mace",
            Self::TwoHandMace => "2hMace",
            Self::Staff => "Staff",
            Self::TwoHandStaff => "2hStaff",
            Self::Bow => "Bow",
            Self::Knuckle => "Knuckle",
            Self::Musical => "Musical",
            Self::Whip => "Whip",
            Self::Book => "Book",
            Self::Katar => "Katar",
            Self::Revolver => "Revolver",
            Self::Rifle => "Rifle",
            Self::Gatling => "Gatling",
            Self::Shotgun => "Shotgun",
            Self::Grenade => "Grenade",
            Self::Huuma => "Huuma",
        }
    }

    /// Divine Pride weapon subtypes occupy the contiguous range 256..=278
    pub fn from_catalog_code(code: i64) -> Option<Self> {
        match code {
            256 => Some(Self::Dagger),
            257 => Some(Self::OneHandSword),
            258 => Some(Self::TwoHandSword),
            259 => Some(Self::OneHandSpear),
            260 => Some(Self::TwoHandSpear),
            261 => Some(Self::OneHandAxe),
            262 => Some(Self::TwoHandAxe),
            263 => Some(Self::Mace),
            264 => Some(Self::TwoHandMace),
            265 => Some(Self::Staff),
            266 => Some(Self::TwoHandStaff),
            267 => Some(Self::Bow),
            268 => Some(Self::Knuckle),
            269 => Some(Self::Musical),
            270 => Some(Self::Whip),
            271 => Some(Self::Book),
            272 => Some(Self::Katar),
            273 => Some(Self::Revolver),
            274 => Some(Self::Rifle),
            275 => Some(Self::Gatling),
            276 => Some(Self::Shotgun),
            277 => Some(Self::Grenade),
            278 => Some(Self::Huuma),
            _ => None,
        }
    }
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
