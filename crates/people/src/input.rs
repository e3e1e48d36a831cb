//! Unvalidated person input, as collected by an embedding application.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use parkpass_core::{DomainError, DomainResult};

use crate::person::Person;
use crate::value::{DateOfBirth, EmailAddress, PersonName, today};

/// Raw person data, e.g. from a form or a JSON document.
///
/// Any field may be missing; a missing identity field is reported as null by
/// validation. There is no pass field: a person built from input never holds
/// a pass, and unknown JSON keys such as `hasParkingPass` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub email_address: Option<String>,
}

impl NewPerson {
    pub fn new(
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        email_address: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            date_of_birth: Some(date_of_birth),
            email_address: Some(email_address.into()),
        }
    }

    /// Validate against the local wall clock.
    pub fn validate(self) -> DomainResult<Person> {
        self.validate_as_of(today())
    }

    /// Validate against an explicit reference date.
    ///
    /// Fields are checked in order (name, date of birth, email address) and the
    /// first failure is returned.
    pub(crate) fn validate_as_of(self, today: NaiveDate) -> DomainResult<Person> {
        let result = PersonName::required(self.name).and_then(|name| {
            let date_of_birth = DateOfBirth::required(self.date_of_birth, today)?;
            let email_address = EmailAddress::required(self.email_address)?;
            Ok((name, date_of_birth, email_address))
        });

        let (name, date_of_birth, email_address) = result.inspect_err(log_rejection)?;
        Ok(Person::from_parts(name, date_of_birth, email_address))
    }
}

impl TryFrom<NewPerson> for Person {
    type Error = DomainError;

    fn try_from(input: NewPerson) -> Result<Self, Self::Error> {
        input.validate()
    }
}

pub(crate) fn log_rejection(err: &DomainError) {
    tracing::debug!(field = err.field(), reason = err.reason(), "person rejected");
}
