//! Member field constants and validation.
//!
//! This module lives in `core` (zero internal deps) so the same rules apply
//! to the admin CRUD endpoints and to bulk import.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

/// Maximum length of a member's full name.
pub const MAX_FULL_NAME_LENGTH: usize = 200;

/// Lowest valid generation number (1 = eldest known generation).
pub const MIN_GENERATION: i32 = 1;

/// Lowest valid birth order (1 = first-born).
pub const MIN_BIRTH_ORDER: i32 = 1;

// ---------------------------------------------------------------------------
// Gender constants
// ---------------------------------------------------------------------------

pub const GENDER_MALE: &str = "male";
pub const GENDER_FEMALE: &str = "female";

/// Valid member genders.
pub const VALID_GENDERS: &[&str] = &[GENDER_MALE, GENDER_FEMALE];

// ---------------------------------------------------------------------------
// Calendar systems
// ---------------------------------------------------------------------------

/// Gregorian dates.
pub const CALENDAR_SOLAR: &str = "solar";

/// Lunisolar dates, kept as free text (e.g. "15/07" in the lunar year).
pub const CALENDAR_LUNAR: &str = "lunar";

/// Valid calendar systems for dates and anniversaries.
pub const VALID_CALENDAR_TYPES: &[&str] = &[CALENDAR_SOLAR, CALENDAR_LUNAR];

// ---------------------------------------------------------------------------
// Relationship kinds
// ---------------------------------------------------------------------------

pub const RELATIONSHIP_BIOLOGICAL: &str = "biological";
pub const RELATIONSHIP_ADOPTED: &str = "adopted";
pub const RELATIONSHIP_STEP: &str = "step";

/// Valid parent-child relationship kinds.
pub const VALID_RELATIONSHIP_KINDS: &[&str] = &[
    RELATIONSHIP_BIOLOGICAL,
    RELATIONSHIP_ADOPTED,
    RELATIONSHIP_STEP,
];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a member's full name: non-empty after trimming, bounded length.
pub fn validate_full_name(full_name: &str) -> Result<(), CoreError> {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Full name must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_FULL_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Full name must be at most {MAX_FULL_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate that a gender is one of the known values.
pub fn validate_gender(gender: &str) -> Result<(), CoreError> {
    if VALID_GENDERS.contains(&gender) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid gender '{gender}'. Must be one of: {}",
            VALID_GENDERS.join(", ")
        )))
    }
}

/// Validate that a calendar system is one of the known values.
pub fn validate_calendar_type(calendar_type: &str) -> Result<(), CoreError> {
    if VALID_CALENDAR_TYPES.contains(&calendar_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid calendar type '{calendar_type}'. Must be one of: {}",
            VALID_CALENDAR_TYPES.join(", ")
        )))
    }
}

/// Validate that a parent-child relationship kind is one of the known values.
pub fn validate_relationship_kind(kind: &str) -> Result<(), CoreError> {
    if VALID_RELATIONSHIP_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid relationship kind '{kind}'. Must be one of: {}",
            VALID_RELATIONSHIP_KINDS.join(", ")
        )))
    }
}

/// Validate a generation number (1 = eldest known generation).
pub fn validate_generation(generation: i32) -> Result<(), CoreError> {
    if generation >= MIN_GENERATION {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Generation must be at least {MIN_GENERATION}"
        )))
    }
}

/// Validate a birth order (sibling rank, 1 = first-born).
pub fn validate_birth_order(birth_order: i32) -> Result<(), CoreError> {
    if birth_order >= MIN_BIRTH_ORDER {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Birth order must be at least {MIN_BIRTH_ORDER}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of members per list page.
pub const DEFAULT_MEMBER_LIMIT: i64 = 20;

/// Maximum number of members per list page.
pub const MAX_MEMBER_LIMIT: i64 = 100;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_full_name --------------------------------------------------

    #[test]
    fn full_name_accepts_ordinary_names() {
        assert!(validate_full_name("Nguyen Van An").is_ok());
        assert!(validate_full_name("Trần Thị Bình").is_ok());
    }

    #[test]
    fn full_name_rejects_empty() {
        assert!(validate_full_name("").is_err());
        assert!(validate_full_name("   ").is_err());
    }

    #[test]
    fn full_name_rejects_over_limit() {
        let long = "a".repeat(MAX_FULL_NAME_LENGTH + 1);
        assert!(validate_full_name(&long).is_err());
        let exactly = "a".repeat(MAX_FULL_NAME_LENGTH);
        assert!(validate_full_name(&exactly).is_ok());
    }

    // -- enum-like fields ----------------------------------------------------

    #[test]
    fn gender_accepts_known_values() {
        assert!(validate_gender("male").is_ok());
        assert!(validate_gender("female").is_ok());
    }

    #[test]
    fn gender_rejects_unknown_values() {
        let msg = validate_gender("other").unwrap_err().to_string();
        assert!(msg.contains("other"));
        assert!(validate_gender("").is_err());
        assert!(validate_gender("Male").is_err());
    }

    #[test]
    fn calendar_type_accepts_known_values() {
        assert!(validate_calendar_type("solar").is_ok());
        assert!(validate_calendar_type("lunar").is_ok());
        assert!(validate_calendar_type("julian").is_err());
    }

    #[test]
    fn relationship_kind_accepts_known_values() {
        assert!(validate_relationship_kind("biological").is_ok());
        assert!(validate_relationship_kind("adopted").is_ok());
        assert!(validate_relationship_kind("step").is_ok());
        assert!(validate_relationship_kind("guardian").is_err());
    }

    // -- numeric fields ------------------------------------------------------

    #[test]
    fn generation_must_be_positive() {
        assert!(validate_generation(1).is_ok());
        assert!(validate_generation(12).is_ok());
        assert!(validate_generation(0).is_err());
        assert!(validate_generation(-3).is_err());
    }

    #[test]
    fn birth_order_must_be_positive() {
        assert!(validate_birth_order(1).is_ok());
        assert!(validate_birth_order(7).is_ok());
        assert!(validate_birth_order(0).is_err());
    }

    // -- pagination clamps ---------------------------------------------------

    #[test]
    fn limit_clamps_to_bounds() {
        assert_eq!(clamp_limit(None, 20, 100), 20);
        assert_eq!(clamp_limit(Some(50), 20, 100), 50);
        assert_eq!(clamp_limit(Some(0), 20, 100), 1);
        assert_eq!(clamp_limit(Some(500), 20, 100), 100);
    }

    #[test]
    fn offset_clamps_to_non_negative() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(40)), 40);
        assert_eq!(clamp_offset(Some(-5)), 0);
    }
}
