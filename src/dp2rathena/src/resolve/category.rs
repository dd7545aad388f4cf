//! Item type, subtype and weapon level resolution
//!
//! Both `itemTypeId` and `itemSubTypeId` must be known codes; an unknown
//! code aborts the conversion instead of guessing a category.

use serde_yaml::Value;

use crate::error::{ConvertError, Result};
use crate::record::RawRecord;
use crate::reference::{
    ammo_candidates, join_candidates, subtype_by_code, type_by_code, CatalogType, ItemType,
    SubtypeCode, TypeCode,
};
use crate::schema::Resolved;

/// rAthena types a catalog "special" consumable may turn out to be
pub const CONSUMABLE_CANDIDATES: &[ItemType] = &[
    ItemType::Healing,
    ItemType::Usable,
    ItemType::DelayConsume,
    ItemType::Cash,
];

/// Weapon levels offered for review; the catalog's `itemLevel` is always null
pub const WEAPON_LEVELS: &[&str] = &["1", "2", "3", "4"];

/// Looked-up type and subtype codes of one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCodes {
    pub item_type: TypeCode,
    pub subtype: SubtypeCode,
}

impl ItemCodes {
    pub fn from_record(record: &RawRecord) -> Result<Self> {
        let item_type = item_type_code(record)?;
        let subtype_id = record.require_int("itemSubTypeId")?;
        let subtype = subtype_by_code(subtype_id)
            .ok_or(ConvertError::UnrecognizedItemSubType(subtype_id))?;
        Ok(Self { item_type, subtype })
    }
}

/// Look up `itemTypeId` alone
pub fn item_type_code(record: &RawRecord) -> Result<TypeCode> {
    let type_id = record.require_int("itemTypeId")?;
    type_by_code(type_id).ok_or(ConvertError::UnrecognizedItemType(type_id))
}

/// Result of category resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Known(ItemType),
    /// Several rAthena types fit; a human picks one
    Candidates(&'static [ItemType]),
    /// Catalog category with no rAthena type, passed through for review
    Unmapped(CatalogType),
}

impl Category {
    /// Value written to `Type`
    pub fn to_wire(self) -> String {
        match self {
            Self::Known(item_type) => item_type.name().to_string(),
            Self::Candidates(types) => join_candidates(types.iter().map(|t| t.name())),
            Self::Unmapped(catalog) => catalog.name().to_string(),
        }
    }
}

/// Decide the rAthena category, `None` when the item has no category
///
/// Heuristics, in order:
/// - the catalog files pet eggs and pet equipment together under armor/pet;
///   "Egg" in the name marks an egg
/// - consumables split on subtype: regeneration is healing, "special" is
///   ambiguous
/// - costumes are armor (rAthena keeps the costume flag in `Locations`)
pub fn classify(codes: ItemCodes, name: &str) -> Option<Category> {
    let category = match (codes.item_type, codes.subtype) {
        (TypeCode::None, _) => return None,
        (TypeCode::Item(ItemType::Armor), SubtypeCode::Catalog(CatalogType::Pet)) => {
            if name.contains("Egg") {
                Category::Known(ItemType::PetEgg)
            } else {
                Category::Known(ItemType::PetArmor)
            }
        }
        (
            TypeCode::Catalog(CatalogType::Consumable),
            SubtypeCode::Catalog(CatalogType::Regeneration),
        ) => Category::Known(ItemType::Healing),
        (TypeCode::Catalog(CatalogType::Consumable), SubtypeCode::Catalog(CatalogType::Special)) => {
            Category::Candidates(CONSUMABLE_CANDIDATES)
        }
        (TypeCode::Catalog(CatalogType::Costume), _) => Category::Known(ItemType::Armor),
        (TypeCode::Item(item_type), _) => Category::Known(item_type),
        (TypeCode::Catalog(catalog), _) => Category::Unmapped(catalog),
    };
    Some(category)
}

/// `Type` resolver
pub fn item_type(record: &RawRecord) -> Result<Resolved> {
    let codes = ItemCodes::from_record(record)?;
    let name = record.str("name")?.unwrap_or_default();

    Ok(classify(codes, name).map(|category| {
        match category {
            Category::Known(item_type) => tracing::debug!(%item_type, "resolved item type"),
            Category::Candidates(_) => {
                tracing::warn!(id = record.id(), "ambiguous consumable type left for review")
            }
            Category::Unmapped(catalog) => {
                tracing::warn!(id = record.id(), %catalog, "catalog type has no rAthena type")
            }
        }
        Value::from(category.to_wire())
    }))
}

/// `SubType` resolver
///
/// The catalog only knows four ammo subtypes and files the rest under them,
/// so ammo gets the full candidate list. Weapons copy their subtype.
pub fn item_subtype(record: &RawRecord) -> Result<Resolved> {
    let codes = ItemCodes::from_record(record)?;

    Ok(match codes.item_type {
        TypeCode::Item(ItemType::Ammo) => {
            tracing::warn!(id = record.id(), "ammo subtype left for review");
            Some(Value::from(ammo_candidates()))
        }
        TypeCode::Item(ItemType::Weapon) => codes.subtype.name().map(Value::from),
        _ => None,
    })
}

/// `WeaponLevel` resolver: candidate list for weapons, absent otherwise
pub fn weapon_level(record: &RawRecord) -> Result<Resolved> {
    if item_type_code(record)? != TypeCode::Item(ItemType::Weapon) {
        return Ok(None);
    }
    Ok(Some(Value::from(join_candidates(WEAPON_LEVELS.iter().copied()))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(type_id: i64, subtype_id: i64, name: &str) -> RawRecord {
        RawRecord::from_value(json!({
            "itemTypeId": type_id,
            "itemSubTypeId": subtype_id,
            "name": name,
        }))
        .unwrap()
    }

    fn wire(type_id: i64, subtype_id: i64, name: &str) -> Option<Value> {
        item_type(&record(type_id, subtype_id, name)).unwrap()
    }

    #[test]
    fn test_regeneration_is_healing() {
        assert_eq!(wire(3, 769, "Red Potion"), Some(Value::from("Healing")));
    }

    #[test]
    fn test_special_consumable_lists_candidates() {
        assert_eq!(
            wire(3, 768, "Fly Wing"),
            Some(Value::from("Healing/Usable/DelayConsume/Cash"))
        );
    }

    #[test]
    fn test_other_consumable_passes_catalog_name() {
        assert_eq!(wire(3, 0, "Mystery"), Some(Value::from("Consumable")));
    }

    #[test]
    fn test_pet_egg_heuristic() {
        assert_eq!(wire(2, 518, "Poring Egg"), Some(Value::from("PetEgg")));
        assert_eq!(wire(2, 518, "Backpack"), Some(Value::from("PetArmor")));
        // Case-sensitive
        assert_eq!(wire(2, 518, "eggshell hat"), Some(Value::from("PetArmor")));
    }

    #[test]
    fn test_pet_heuristic_needs_armor_type() {
        // Pet subtype on a non-armor type is not disambiguated
        assert_eq!(wire(5, 518, "Poring Egg"), Some(Value::from("Etc")));
    }

    #[test]
    fn test_costume_is_armor() {
        assert_eq!(wire(9, 519, "Costume Hat"), Some(Value::from("Armor")));
        assert_eq!(wire(9, 0, "Costume"), Some(Value::from("Armor")));
    }

    #[test]
    fn test_direct_types() {
        assert_eq!(wire(1, 256, "Knife [3]"), Some(Value::from("Weapon")));
        assert_eq!(wire(6, 0, "Poring Card"), Some(Value::from("Card")));
        assert_eq!(wire(10, 526, "Shadow Armor"), Some(Value::from("ShadowGear")));
    }

    #[test]
    fn test_no_category() {
        assert_eq!(wire(0, 0, "Nothing"), None);
    }

    #[test]
    fn test_unrecognized_type() {
        let err = item_type(&record(999, 0, "Bogus")).unwrap_err();
        assert!(matches!(err, ConvertError::UnrecognizedItemType(999)));
        assert!(err.is_unrecognized_code());
    }

    #[test]
    fn test_unrecognized_subtype() {
        let err = item_type(&record(1, 4242, "Bogus")).unwrap_err();
        assert!(matches!(err, ConvertError::UnrecognizedItemSubType(4242)));
        assert!(item_subtype(&record(1, 4242, "Bogus")).is_err());
    }

    #[test]
    fn test_ammo_subtype_candidates() {
        assert_eq!(
            item_subtype(&record(4, 1024, "Arrow")).unwrap(),
            Some(Value::from(
                "Arrow/Dagger/Bullet/Shell/Grenade/Shuriken/Kunai/CannonBall/ThrowWeapon"
            ))
        );
    }

    #[test]
    fn test_weapon_subtype() {
        assert_eq!(
            item_subtype(&record(1, 257, "Sword")).unwrap(),
            Some(Value::from("1hSword"))
        );
        assert_eq!(item_subtype(&record(1, 0, "Sword")).unwrap(), None);
        assert_eq!(item_subtype(&record(2, 513, "Cotton Shirt")).unwrap(), None);
    }

    #[test]
    fn test_weapon_level() {
        assert_eq!(
            weapon_level(&record(1, 256, "Knife")).unwrap(),
            Some(Value::from("1/2/3/4"))
        );
        assert_eq!(weapon_level(&record(2, 513, "Cotton Shirt")).unwrap(), None);
        assert!(weapon_level(&record(999, 0, "Bogus")).is_err());
    }

    #[test]
    fn test_missing_type_code() {
        let r = RawRecord::from_value(json!({ "itemSubTypeId": 0 })).unwrap();
        assert!(matches!(
            item_type(&r),
            Err(ConvertError::MissingField("itemTypeId"))
        ));
    }
}
