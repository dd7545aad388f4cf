//! Reference data for item conversion
//!
//! Closed vocabularies of the rAthena item database (item types, weapon and
//! ammo subtypes, jobs, class tiers, genders, equip locations), the Divine
//! Pride catalog's own category codes, and the fixed tables that map Divine
//! Pride numeric codes onto them.
//!
//! Lookups return `None` for codes outside the documented ranges; callers
//! decide whether that is fatal.

mod ammo;
mod class;
mod gender;
mod item_type;
mod job;
mod location;
mod weapon;

pub use ammo::{ammo_candidates, AmmoType, AMMO_TYPES};
pub use class::{class_tiers_by_code, ClassTier};
pub use gender::Gender;
pub use item_type::{
    subtype_by_code, type_by_code, CatalogType, ItemType, SubtypeCode, TypeCode,
};
pub use job::{
    base_job_bits, extended_jobs, Job, JobPermission, ALL_JOBS_MASK, BARD_BIT, DANCER_BIT,
    NOVICE_BIT,
};
pub use location::Location;
pub use weapon::WeaponType;

/// Join wire names into a slash-separated review marker (e.g. `"1/2/3/4"`)
///
/// These markers are free text for a human to resolve, not an enumeration
/// the target format parses.
pub fn join_candidates<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().collect::<Vec<_>>().join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_candidates() {
        assert_eq!(join_candidates(["1", "2", "3", "4"]), "1/2/3/4");
        assert_eq!(join_candidates(["Healing"]), "Healing");
        assert_eq!(join_candidates(std::iter::empty()), "");
    }
}
