//! Item type and subtype definitions
//!
//! Divine Pride splits items into an `itemTypeId` and an `itemSubTypeId`.
//! Some codes map straight onto an rAthena value; others name a catalog
//! category that only becomes an rAthena value after resolution (see
//! `resolve::category`).

use std::fmt;

use super::{AmmoType, Location, WeaponType};

/// rAthena item category (`Type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Healing,
    Usable,
    Etc,
    /// Armor, garment, boots, headgear and accessories
    Armor,
    Weapon,
    Card,
    PetEgg,
    PetArmor,
    /// Arrows, bullets and other ammunition
    Ammo,
    /// Usable with delayed consumption (intended for `itemskill`)
    DelayConsume,
    ShadowGear,
    /// Delayed consume that asks the player for confirmation
    Cash,
}

impl ItemType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Healing => "Healing",
            Self::Usable => "Usable",
            Self::Etc => "Etc",
            Self::Armor => "Armor",
            Self::Weapon => "Weapon",
            Self::Card => "Card",
            Self::PetEgg => "PetEgg",
            Self::PetArmor => "PetArmor",
            Self::Ammo => "Ammo",
            Self::DelayConsume => "DelayConsume",
            Self::ShadowGear => "ShadowGear",
            Self::Cash => "Cash",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Divine Pride categories with no one-to-one rAthena counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogType {
    Helm,
    Armor,
    Shield,
    Garment,
    Shoes,
    Accessory,
    Pet,
    /// rAthena stores the costume flag in `Locations` instead
    Costume,
    CostumeHelm,
    CostumeGarment,
    /// No rAthena equivalent
    CostumeFloor,
    /// Generic consumable, refined by its subtype
    Consumable,
    /// Consumable subtype that covers several rAthena types
    Special,
    /// Consumable subtype for healing and stat buffs
    Regeneration,
}

impl CatalogType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Helm => "Helm",
            Self::Armor => "Armor",
            Self::Shield => "Shield",
            Self::Garment => "Garment",
            Self::Shoes => "Shoes",
            Self::Accessory => "Accessory",
            Self::Pet => "Pet",
            Self::Costume => "Costume",
            Self::CostumeHelm => "Costume_Helm",
            Self::CostumeGarment => "Costume_Garment",
            Self::CostumeFloor => "Costume_Floor",
            Self::Consumable => "Consumable",
            Self::Special => "Special",
            Self::Regeneration => "Regeneration",
        }
    }
}

impl fmt::Display for CatalogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an `itemTypeId` stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    /// Code 0: the item has no category
    None,
    Item(ItemType),
    Catalog(CatalogType),
}

/// What an `itemSubTypeId` stands for
///
/// One table covers several domains; the code ranges never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtypeCode {
    /// Code 0: no subtype
    None,
    Weapon(WeaponType),
    Ammo(AmmoType),
    Catalog(CatalogType),
    /// Shadow gear subtypes are named after their equip slot
    Location(Location),
}

impl SubtypeCode {
    /// Wire name of the subtype, `None` for code 0
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Weapon(w) => Some(w.name()),
            Self::Ammo(a) => Some(a.name()),
            Self::Catalog(c) => Some(c.name()),
            Self::Location(l) => Some(l.name()),
        }
    }
}

/// Look up an `itemTypeId`
pub fn type_by_code(code: i64) -> Option<TypeCode> {
    match code {
        0 => Some(TypeCode::None),
        1 => Some(TypeCode::Item(ItemType::Weapon)),
        2 => Some(TypeCode::Item(ItemType::Armor)),
        3 => Some(TypeCode::Catalog(CatalogType::Consumable)),
        4 => Some(TypeCode::Item(ItemType::Ammo)),
        5 => Some(TypeCode::Item(ItemType::Etc)),
        6 => Some(TypeCode::Item(ItemType::Card)),
        7 => Some(TypeCode::Item(ItemType::Cash)),
        9 => Some(TypeCode::Catalog(CatalogType::Costume)),
        10 => Some(TypeCode::Item(ItemType::ShadowGear)),
        _ => None,
    }
}

/// Look up an `itemSubTypeId`
pub fn subtype_by_code(code: i64) -> Option<SubtypeCode> {
    if let Some(weapon) = WeaponType::from_catalog_code(code) {
        return Some(SubtypeCode::Weapon(weapon));
    }
    if let Some(ammo) = AmmoType::from_catalog_code(code) {
        return Some(SubtypeCode::Ammo(ammo));
    }

    match code {
        0 => Some(SubtypeCode::None),
        280 => Some(SubtypeCode::Location(Location::ShadowWeapon)),
        // Armor subtypes
        512 => Some(SubtypeCode::Catalog(CatalogType::Helm)),
        513 => Some(SubtypeCode::Catalog(CatalogType::Armor)),
        514 => Some(SubtypeCode::Catalog(CatalogType::Shield)),
        515 => Some(SubtypeCode::Catalog(CatalogType::Garment)),
        516 => Some(SubtypeCode::Catalog(CatalogType::Shoes)),
        517 => Some(SubtypeCode::Catalog(CatalogType::Accessory)),
        518 => Some(SubtypeCode::Catalog(CatalogType::Pet)),
        519 => Some(SubtypeCode::Catalog(CatalogType::CostumeHelm)),
        522 => Some(SubtypeCode::Catalog(CatalogType::CostumeGarment)),
        525 => Some(SubtypeCode::Catalog(CatalogType::CostumeFloor)),
        // Shadow gear
        526 => Some(SubtypeCode::Location(Location::ShadowArmor)),
        527 => Some(SubtypeCode::Location(Location::ShadowShield)),
        528 => Some(SubtypeCode::Location(Location::ShadowShoes)),
        529 => Some(SubtypeCode::Location(Location::ShadowRightAccessory)),
        530 => Some(SubtypeCode::Location(Location::ShadowLeftAccessory)),
        // Consumables
        768 => Some(SubtypeCode::Catalog(CatalogType::Special)),
        769 => Some(SubtypeCode::Catalog(CatalogType::Regeneration)),
        _ => None,
    }
}
