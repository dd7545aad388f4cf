//! Job, class tier and gender resolution
//!
//! All three read the catalog's `job`/`classNum` fields. `Jobs` and `Gender`
//! share the decoded [`JobPermission`]; the all-jobs mask is rAthena's
//! default and resolves to absent for both.

use std::collections::BTreeSet;

use serde_yaml::{Mapping, Value};

use super::todo_marker;
use crate::error::Result;
use crate::record::RawRecord;
use crate::reference::{
    base_job_bits, class_tiers_by_code, extended_jobs, join_candidates, ClassTier, Gender, Job,
    JobPermission, BARD_BIT, DANCER_BIT, NOVICE_BIT,
};
use crate::schema::Resolved;

/// Decoded `job` field
///
/// Negative values are read as their two's complement bit pattern, so `-1`
/// is every job.
fn permission(record: &RawRecord) -> Result<Option<JobPermission>> {
    Ok(record.int("job")?.map(|raw| {
        if raw < 0 {
            tracing::warn!(id = record.id(), job = raw, "negative job value read as a bitmask");
        }
        JobPermission::from_raw(raw as u64)
    }))
}

/// Job names a permission grants, sorted by name
///
/// Empty for the all-jobs mask.
pub fn job_names(permission: JobPermission) -> BTreeSet<&'static str> {
    let mut names = BTreeSet::new();
    match permission {
        JobPermission::Extended(id) => {
            if let Some(jobs) = extended_jobs(id) {
                names.extend(jobs.iter().map(|job| job.name()));
            }
        }
        _ if permission.is_all_jobs() => {}
        JobPermission::Bitmask(_) => {
            for &(bit, job) in base_job_bits() {
                if permission.has_bit(bit) {
                    names.insert(job.name());
                }
            }
            // rAthena grants Super Novice wherever Novice is allowed
            if permission.has_bit(NOVICE_BIT) {
                names.insert(Job::SuperNovice.name());
            }
        }
    }
    names
}

/// `Jobs` resolver: `{name: true}` per allowed job
///
/// Absent only when `job` is missing or grants every job. A value that
/// grants no job is an empty mapping: leaving it out would read as "all".
pub fn jobs(record: &RawRecord) -> Result<Resolved> {
    let Some(permission) = permission(record)? else {
        return Ok(None);
    };
    if permission.is_all_jobs() {
        return Ok(None);
    }

    let names = job_names(permission);
    if names.is_empty() {
        tracing::warn!(id = record.id(), "item grants no job");
    }

    let mut out = Mapping::new();
    for name in names {
        out.insert(Value::from(name), Value::Bool(true));
    }
    Ok(Some(Value::Mapping(out)))
}

/// Gender implied by the Bard/Dancer bits
pub fn gender_of(permission: JobPermission) -> Option<Gender> {
    if permission.is_all_jobs() {
        return None;
    }
    match (permission.has_bit(BARD_BIT), permission.has_bit(DANCER_BIT)) {
        (true, true) => Some(Gender::Both),
        (true, false) => Some(Gender::Male),
        (false, true) => Some(Gender::Female),
        (false, false) => None,
    }
}

/// `Gender` resolver
pub fn gender(record: &RawRecord) -> Result<Resolved> {
    Ok(permission(record)?
        .and_then(gender_of)
        .map(|gender| Value::from(gender.name())))
}

/// `Classes` resolver
///
/// One known tier becomes `{tier: true}`; `All` is rAthena's default and is
/// omitted. Codes with several candidate tiers, and unknown codes, become a
/// `TODO:` marker.
pub fn classes(record: &RawRecord) -> Result<Resolved> {
    let Some(code) = record.int("classNum")? else {
        return Ok(None);
    };

    match class_tiers_by_code(code) {
        [] => {
            tracing::warn!(code, "unknown classNum left for review");
            Ok(Some(Value::from(todo_marker(code))))
        }
        [ClassTier::All] => Ok(None),
        [tier] => {
            let mut out = Mapping::new();
            out.insert(Value::from(tier.name()), Value::Bool(true));
            Ok(Some(Value::Mapping(out)))
        }
        tiers => {
            tracing::warn!(code, candidates = tiers.len(), "ambiguous classNum left for review");
            let candidates = join_candidates(tiers.iter().map(|t| t.name()));
            Ok(Some(Value::from(format!(
                "{} ({})",
                todo_marker(code),
                candidates
            ))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ALL_JOBS_MASK;
    use serde_json::json;

    fn job_record(job: serde_json::Value) -> RawRecord {
        RawRecord::from_value(json!({ "job": job })).unwrap()
    }

    fn keys(value: Option<Value>) -> Vec<String> {
        value
            .and_then(|v| v.as_mapping().cloned())
            .map(|m| {
                m.keys()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_novice_includes_super_novice() {
        let out = jobs(&job_record(json!(NOVICE_BIT))).unwrap();
        assert_eq!(keys(out), vec!["Novice", "SuperNovice"]);
    }

    #[test]
    fn test_extended_id_bypasses_bitmask() {
        let out = jobs(&job_record(json!(144))).unwrap();
        assert_eq!(keys(out), vec!["KagerouOboro", "Rebellion"]);

        // 73 as a bitmask would be Novice|Mage|Archer|Thief
        let out = jobs(&job_record(json!(73))).unwrap();
        assert_eq!(keys(out), vec!["Gunslinger"]);
    }

    #[test]
    fn test_all_jobs_is_absent() {
        for raw in [json!(ALL_JOBS_MASK), json!(0xFFFF_FFFFu64)] {
            let r = job_record(raw);
            assert_eq!(jobs(&r).unwrap(), None);
            assert_eq!(gender(&r).unwrap(), None);
        }
    }

    #[test]
    fn test_bitmask_output_sorted_by_name() {
        // Swordman | Mage | Knight | Wizard
        let out = jobs(&job_record(json!(0x2 | 0x4 | 0x80 | 0x100))).unwrap();
        assert_eq!(keys(out), vec!["Knight", "Mage", "Swordman", "Wizard"]);
    }

    #[test]
    fn test_bard_and_dancer_share_a_job() {
        let out = jobs(&job_record(json!(BARD_BIT | DANCER_BIT))).unwrap();
        assert_eq!(keys(out), vec!["BardDancer"]);
    }

    #[test]
    fn test_missing_job_is_absent() {
        assert_eq!(jobs(&job_record(json!(null))).unwrap(), None);
        assert_eq!(jobs(&RawRecord::default()).unwrap(), None);
        assert_eq!(gender(&RawRecord::default()).unwrap(), None);
    }

    #[test]
    fn test_empty_job_set_is_kept() {
        // 0x100000 sits above the base bits and masks to nothing
        for raw in [0u64, 0x100000] {
            assert_eq!(
                jobs(&job_record(json!(raw))).unwrap(),
                Some(Value::Mapping(Mapping::new()))
            );
        }
    }

    #[test]
    fn test_negative_job_is_masked() {
        let r = job_record(json!(-1));
        assert_eq!(jobs(&r).unwrap(), None);
        assert_eq!(gender(&r).unwrap(), None);

        // -2 clears only the Novice bit
        let names = keys(jobs(&job_record(json!(-2))).unwrap());
        assert!(!names.iter().any(|n| n == "Novice" || n == "SuperNovice"));
        assert!(names.iter().any(|n| n == "Rogue"));
    }

    #[test]
    fn test_gender_from_bard_dancer_bits() {
        let g = |raw: u32| gender(&job_record(json!(raw))).unwrap();
        assert_eq!(g(BARD_BIT | DANCER_BIT), Some(Value::from("Both")));
        assert_eq!(g(BARD_BIT), Some(Value::from("Male")));
        assert_eq!(g(DANCER_BIT | NOVICE_BIT), Some(Value::from("Female")));
        assert_eq!(g(NOVICE_BIT), None);
    }

    #[test]
    fn test_gender_ignores_extended_ids() {
        assert_eq!(gender_of(JobPermission::Extended(144)), None);
    }

    #[test]
    fn test_classes() {
        let c = |code: i64| classes(&RawRecord::from_value(json!({ "classNum": code })).unwrap());

        assert_eq!(keys(c(3).unwrap()), vec!["All_Upper"]);
        assert_eq!(keys(c(15).unwrap()), vec!["All_Third"]);
        assert_eq!(
            c(12).unwrap(),
            Some(Value::from("TODO: 12 (Third/Third_Upper/Third_Baby)"))
        );
        assert_eq!(
            c(0).unwrap(),
            Some(Value::from("TODO: 0 (All/Normal/Upper/Baby/All_Baby)"))
        );
        assert_eq!(c(7).unwrap(), Some(Value::from("TODO: 7")));
        assert_eq!(classes(&RawRecord::default()).unwrap(), None);
    }
}
