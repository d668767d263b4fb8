//! Pure per-field validators for the insights request form
//!
//! Each validator takes the raw field value and returns the error for that
//! field, if any. Validators have no side effects; error display is handled
//! by the form state.

use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// Simple single-@, single-dot-after-@ check. Not full RFC validation; the
// webhook side owns anything stricter.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validation failure for a single form field.
///
/// The `Display` strings are the exact messages shown inline next to the
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter at least {min} characters.")]
    TooShort { min: usize },
    #[error("{0} is too long.")]
    TooLong(&'static str),
    #[error("{0} is required.")]
    Required(&'static str),
    #[error("Please enter a valid date.")]
    InvalidDate,
    #[error("Date of birth cannot be in the future.")]
    FutureDate,
    #[error("Please choose an area of focus.")]
    NoSelection,
    #[error("Please enter a valid email address.")]
    InvalidFormat,
}

/// Validate the full name: trimmed length must be within [2, 100].
pub fn validate_name(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    let len = value.chars().count();
    if len < 2 {
        return Err(FieldError::TooShort { min: 2 });
    }
    if len > 100 {
        return Err(FieldError::TooLong("Name"));
    }
    Ok(())
}

/// Validate the date of birth against the local calendar date.
pub fn validate_date(value: &str) -> Result<(), FieldError> {
    validate_date_with_today(value, Local::now().date_naive())
}

/// Validate the date of birth against an explicit `today`.
///
/// The date field is an ISO `YYYY-MM-DD` input. Today's date passes;
/// anything strictly after `today` is rejected.
pub fn validate_date_with_today(value: &str, today: NaiveDate) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required("Date of birth"));
    }
    // Whitespace-only input is present but unparseable, so it falls through
    // to the invalid-date case rather than the required one.
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| FieldError::InvalidDate)?;
    if date > today {
        return Err(FieldError::FutureDate);
    }
    Ok(())
}

/// Validate the place of birth: trimmed length must be within [2, 200].
pub fn validate_place(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    let len = value.chars().count();
    if len < 2 {
        return Err(FieldError::TooShort { min: 2 });
    }
    if len > 200 {
        return Err(FieldError::TooLong("Place name"));
    }
    Ok(())
}

/// Validate the area of focus selection.
pub fn validate_area_of_focus(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::NoSelection);
    }
    Ok(())
}

/// Validate the email address format (after trimming).
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required("Email"));
    }
    if !EMAIL_REGEX.is_match(value) {
        return Err(FieldError::InvalidFormat);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    mod name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn accepts_lengths_within_bounds() {
            assert_eq!(validate_name("Jo"), Ok(()));
            assert_eq!(validate_name("Jane Doe"), Ok(()));
            assert_eq!(validate_name(&"x".repeat(100)), Ok(()));
        }

        #[test]
        fn trims_before_measuring() {
            assert_eq!(validate_name("  Jo  "), Ok(()));
            assert_eq!(validate_name(" J "), Err(FieldError::TooShort { min: 2 }));
        }

        #[test]
        fn rejects_too_short() {
            assert_eq!(validate_name(""), Err(FieldError::TooShort { min: 2 }));
            assert_eq!(validate_name("J"), Err(FieldError::TooShort { min: 2 }));
        }

        #[test]
        fn rejects_too_long() {
            assert_eq!(
                validate_name(&"x".repeat(101)),
                Err(FieldError::TooLong("Name"))
            );
        }

        #[test]
        fn counts_characters_not_bytes() {
            // Two non-ASCII characters are still two characters
            assert_eq!(validate_name("éà"), Ok(()));
        }
    }

    mod date {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn rejects_empty() {
            assert_eq!(
                validate_date_with_today("", fixed_today()),
                Err(FieldError::Required("Date of birth"))
            );
        }

        #[test]
        fn whitespace_only_is_an_invalid_date_not_missing() {
            assert_eq!(
                validate_date_with_today("   ", fixed_today()),
                Err(FieldError::InvalidDate)
            );
        }

        #[test]
        fn trims_surrounding_whitespace_before_parsing() {
            assert_eq!(
                validate_date_with_today(" 1990-04-12 ", fixed_today()),
                Ok(())
            );
        }

        #[test]
        fn rejects_unparseable() {
            assert_eq!(
                validate_date_with_today("not-a-date", fixed_today()),
                Err(FieldError::InvalidDate)
            );
            assert_eq!(
                validate_date_with_today("1990-13-40", fixed_today()),
                Err(FieldError::InvalidDate)
            );
            assert_eq!(
                validate_date_with_today("12/04/1990", fixed_today()),
                Err(FieldError::InvalidDate)
            );
        }

        #[test]
        fn rejects_future_dates() {
            assert_eq!(
                validate_date_with_today("2099-01-01", fixed_today()),
                Err(FieldError::FutureDate)
            );
            assert_eq!(
                validate_date_with_today("2026-08-31", fixed_today()),
                Err(FieldError::FutureDate)
            );
        }

        #[test]
        fn accepts_past_and_present() {
            assert_eq!(validate_date_with_today("1990-04-12", fixed_today()), Ok(()));
            assert_eq!(validate_date_with_today("2026-08-30", fixed_today()), Ok(()));
        }

        #[test]
        fn clock_based_entry_point_rejects_far_future() {
            assert_eq!(validate_date("2099-01-01"), Err(FieldError::FutureDate));
            assert_eq!(validate_date("1990-04-12"), Ok(()));
        }
    }

    mod place {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn accepts_lengths_within_bounds() {
            assert_eq!(validate_place("Lisbon"), Ok(()));
            assert_eq!(validate_place(&"x".repeat(200)), Ok(()));
        }

        #[test]
        fn rejects_too_short() {
            assert_eq!(validate_place("X"), Err(FieldError::TooShort { min: 2 }));
            assert_eq!(validate_place(""), Err(FieldError::TooShort { min: 2 }));
        }

        #[test]
        fn rejects_too_long() {
            assert_eq!(
                validate_place(&"x".repeat(201)),
                Err(FieldError::TooLong("Place name"))
            );
        }
    }

    mod area_of_focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn rejects_unselected() {
            assert_eq!(validate_area_of_focus(""), Err(FieldError::NoSelection));
        }

        #[test]
        fn accepts_any_selection() {
            assert_eq!(validate_area_of_focus("Career & Work"), Ok(()));
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn rejects_empty() {
            assert_eq!(validate_email(""), Err(FieldError::Required("Email")));
            assert_eq!(validate_email("  "), Err(FieldError::Required("Email")));
        }

        #[test]
        fn accepts_simple_addresses() {
            assert_eq!(validate_email("a@b.c"), Ok(()));
            assert_eq!(validate_email("jane.doe@example.com"), Ok(()));
            assert_eq!(validate_email("  user@host.io  "), Ok(()));
        }

        #[test]
        fn rejects_missing_at() {
            assert_eq!(validate_email("not-an-email"), Err(FieldError::InvalidFormat));
        }

        #[test]
        fn rejects_missing_dot_after_at() {
            assert_eq!(validate_email("a@b"), Err(FieldError::InvalidFormat));
        }

        #[test]
        fn rejects_whitespace_inside() {
            assert_eq!(validate_email("a b@c.d"), Err(FieldError::InvalidFormat));
        }

        #[test]
        fn error_messages_match_inline_text() {
            assert_eq!(
                validate_email("a@b").unwrap_err().to_string(),
                "Please enter a valid email address."
            );
            assert_eq!(
                validate_name("J").unwrap_err().to_string(),
                "Please enter at least 2 characters."
            );
        }
    }
}
