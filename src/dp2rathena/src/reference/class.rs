//! Class tier definitions
//!
//! Divine Pride's `classNum` is not fully understood. Known codes map to a
//! set of candidate tiers; a code with several candidates cannot be resolved
//! without a human.

use std::fmt;

/// rAthena upper-class tier (`Classes` keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassTier {
    All,
    /// No Baby, Transcendent or Third classes
    Normal,
    /// Transcendent classes, excluding Transcendent-Third
    Upper,
    /// Baby classes, excluding Third-Baby
    Baby,
    /// Third classes, excluding Transcendent-Third and Third-Baby
    Third,
    ThirdUpper,
    ThirdBaby,
    AllUpper,
    AllBaby,
    AllThird,
}

impl ClassTier {
    pub fn name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Normal => "Normal",
            Self::Upper => "Upper",
            Self::Baby => "Baby",
            Self::Third => "Third",
            Self::ThirdUpper => "Third_Upper",
            Self::ThirdBaby => "Third_Baby",
            Self::AllUpper => "All_Upper",
            Self::AllBaby => "All_Baby",
            Self::AllThird => "All_Third",
        }
    }
}

impl fmt::Display for ClassTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Candidate tiers for a `classNum`, empty for unknown codes
pub fn class_tiers_by_code(code: i64) -> &'static [ClassTier] {
    match code {
        0 => &[
            ClassTier::All,
            ClassTier::Normal,
            ClassTier::Upper,
            ClassTier::Baby,
            ClassTier::AllBaby,
        ],
        3 => &[ClassTier::AllUpper],
        12 => &[ClassTier::Third, ClassTier::ThirdUpper, ClassTier::ThirdBaby],
        15 => &[ClassTier::AllThird],
        _ => &[],
    }
}
