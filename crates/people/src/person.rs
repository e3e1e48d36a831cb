use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use parkpass_core::DomainResult;

use crate::input::{NewPerson, log_rejection};
use crate::value::{DateOfBirth, EmailAddress, PersonName, today};

/// Entity: a person who may hold a parking pass.
///
/// # Invariants
/// - Name, date of birth and email address are valid and never change after
///   construction (no setters exist).
/// - The parking pass flag starts `false` and, once `true`, stays `true`.
///
/// Every public constructor checks the date of birth against the local date
/// and yields a person without a pass. Deserializing restores a previously
/// serialized person, pass included, after re-validating its identity fields.
///
/// A `Person` has no internal synchronization. Share one across threads by
/// wrapping it, e.g. in a `Mutex<Person>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredPerson")]
pub struct Person {
    name: PersonName,
    date_of_birth: DateOfBirth,
    email_address: EmailAddress,
    has_parking_pass: bool,
}

impl Person {
    /// Create a person, checking the date of birth against the local date today.
    pub fn new(
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        email_address: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::new_as_of(name, date_of_birth, email_address, today())
    }

    /// Create a person, checking the date of birth against `today`.
    pub(crate) fn new_as_of(
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        email_address: impl Into<String>,
        today: NaiveDate,
    ) -> DomainResult<Self> {
        let validated = PersonName::new(name).and_then(|name| {
            let date_of_birth = DateOfBirth::new(date_of_birth, today)?;
            let email_address = EmailAddress::new(email_address)?;
            Ok((name, date_of_birth, email_address))
        });

        let (name, date_of_birth, email_address) = validated.inspect_err(log_rejection)?;
        Ok(Self::from_parts(name, date_of_birth, email_address))
    }

    /// Assemble a person from already-validated fields. No pass is held.
    pub(crate) fn from_parts(
        name: PersonName,
        date_of_birth: DateOfBirth,
        email_address: EmailAddress,
    ) -> Self {
        Self {
            name,
            date_of_birth,
            email_address,
            has_parking_pass: false,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth.date()
    }

    /// Alias of [`Person::date_of_birth`].
    pub fn dob(&self) -> NaiveDate {
        self.date_of_birth()
    }

    pub fn email_address(&self) -> &str {
        self.email_address.as_str()
    }

    pub fn has_parking_pass(&self) -> bool {
        self.has_parking_pass
    }

    /// Alias of [`Person::has_parking_pass`].
    pub fn is_purchased_parking_pass(&self) -> bool {
        self.has_parking_pass
    }

    /// Try to buy a parking pass.
    ///
    /// Returns `true` if the pass was bought now, `false` if one was already
    /// held (state is left unchanged). Never fails.
    pub fn purchase_parking_pass(&mut self) -> bool {
        if self.has_parking_pass {
            tracing::debug!("parking pass already held");
            return false;
        }
        self.has_parking_pass = true;
        tracing::debug!("parking pass purchased");
        true
    }
}

/// Serialized form of a [`Person`], pass flag included.
///
/// Only reachable through `Person`'s `Deserialize` impl; form input goes
/// through [`NewPerson`], which has no pass field.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPerson {
    name: Option<String>,
    date_of_birth: Option<NaiveDate>,
    email_address: Option<String>,
    #[serde(default)]
    has_parking_pass: bool,
}

impl TryFrom<StoredPerson> for Person {
    type Error = parkpass_core::DomainError;

    fn try_from(stored: StoredPerson) -> Result<Self, Self::Error> {
        let mut person = NewPerson {
            name: stored.name,
            date_of_birth: stored.date_of_birth,
            email_address: stored.email_address,
        }
        .validate()?;

        // Restored through the purchase path so the flag only ever moves to true.
        if stored.has_parking_pass {
            person.purchase_parking_pass();
        }
        Ok(person)
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Person{{name='{}', dateOfBirth={}, emailAddress='{}', hasParkingPass={}}}",
            self.name, self.date_of_birth, self.email_address, self.has_parking_pass
        )
    }
}
