//! Validated identity fields of a person.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use parkpass_core::{DomainError, DomainResult, ValueObject};

/// The local calendar date right now.
///
/// Used as the reference "today" when a date of birth is checked.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ─────────────────────────────────────────────────────────────────────────────
// Name
// ─────────────────────────────────────────────────────────────────────────────

/// A person's full name. Never blank; stored exactly as given (not trimmed).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    pub const FIELD: &'static str = "name";

    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                Self::FIELD,
                "Name cannot be empty or contain only whitespace",
            ));
        }
        Ok(Self(name))
    }

    /// Validate an optional name, treating `None` as a missing value.
    pub fn required(name: Option<String>) -> DomainResult<Self> {
        match name {
            Some(name) => Self::new(name),
            None => Err(DomainError::invalid_argument(Self::FIELD, "Name cannot be null")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for PersonName {}

impl core::fmt::Display for PersonName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Date of birth
// ─────────────────────────────────────────────────────────────────────────────

/// A date of birth that was not in the future when it was checked.
///
/// The check is made once, against the local date at creation. A stored value
/// is never re-validated, so a value created just before midnight stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    pub const FIELD: &'static str = "date_of_birth";

    /// Validate `date` against an explicit reference date.
    ///
    /// `date == today` is accepted; only strictly later dates are rejected.
    pub(crate) fn new(date: NaiveDate, today: NaiveDate) -> DomainResult<Self> {
        if date > today {
            return Err(DomainError::invalid_argument(
                Self::FIELD,
                "Date of birth cannot be in the future",
            ));
        }
        Ok(Self(date))
    }

    /// Validate `date` against the local wall clock.
    pub fn as_of_now(date: NaiveDate) -> DomainResult<Self> {
        Self::new(date, today())
    }

    pub(crate) fn required(date: Option<NaiveDate>, today: NaiveDate) -> DomainResult<Self> {
        match date {
            Some(date) => Self::new(date, today),
            None => Err(DomainError::invalid_argument(
                Self::FIELD,
                "Date of birth cannot be null",
            )),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl ValueObject for DateOfBirth {}

impl core::fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // NaiveDate renders as ISO 8601 (YYYY-MM-DD).
        core::fmt::Display::fmt(&self.0, f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Email address
// ─────────────────────────────────────────────────────────────────────────────

/// An email address: not blank and containing at least one `@`.
///
/// No further syntax is enforced; `"a@b"` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const FIELD: &'static str = "email_address";

    pub fn new(email: impl Into<String>) -> DomainResult<Self> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                Self::FIELD,
                "Email address cannot be empty or contain only whitespace",
            ));
        }
        if !email.contains('@') {
            return Err(DomainError::invalid_argument(
                Self::FIELD,
                "Email address must contain @ symbol",
            ));
        }
        Ok(Self(email))
    }

    pub fn required(email: Option<String>) -> DomainResult<Self> {
        match email {
            Some(email) => Self::new(email),
            None => Err(DomainError::invalid_argument(
                Self::FIELD,
                "Email address cannot be null",
            )),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for EmailAddress {}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn name_keeps_surrounding_whitespace() {
        let name = PersonName::new("  Alice  ").unwrap();
        assert_eq!(name.as_str(), "  Alice  ");
    }

    #[test]
    fn blank_names_are_rejected() {
        for blank in ["", "   ", "\t\n"] {
            let err = PersonName::new(blank).unwrap_err();
            assert_eq!(err.field(), PersonName::FIELD);
            assert_eq!(err.reason(), "Name cannot be empty or contain only whitespace");
        }
    }

    #[test]
    fn missing_name_reports_null() {
        let err = PersonName::required(None).unwrap_err();
        assert_eq!(err.reason(), "Name cannot be null");
    }

    #[test]
    fn date_of_birth_on_reference_day_is_accepted() {
        let today = date(2024, 6, 15);
        let dob = DateOfBirth::new(today, today).unwrap();
        assert_eq!(dob.date(), today);
    }

    #[test]
    fn date_of_birth_after_reference_day_is_rejected() {
        let today = date(2024, 6, 15);
        let err = DateOfBirth::new(date(2024, 6, 16), today).unwrap_err();
        assert_eq!(err.field(), DateOfBirth::FIELD);
        assert_eq!(err.reason(), "Date of birth cannot be in the future");
    }

    #[test]
    fn missing_date_of_birth_reports_null() {
        let err = DateOfBirth::required(None, date(2024, 6, 15)).unwrap_err();
        assert_eq!(err.reason(), "Date of birth cannot be null");
    }

    #[test]
    fn date_of_birth_displays_as_iso() {
        let dob = DateOfBirth::new(date(2000, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(dob.to_string(), "2000-01-01");
    }

    #[test]
    fn minimal_email_is_accepted() {
        assert_eq!(EmailAddress::new("a@b").unwrap().as_str(), "a@b");
    }

    #[test]
    fn email_rules_report_specific_reasons() {
        assert_eq!(
            EmailAddress::new("no-at-symbol").unwrap_err().reason(),
            "Email address must contain @ symbol"
        );
        assert_eq!(
            EmailAddress::new("  ").unwrap_err().reason(),
            "Email address cannot be empty or contain only whitespace"
        );
        assert_eq!(
            EmailAddress::required(None).unwrap_err().reason(),
            "Email address cannot be null"
        );
    }
}
