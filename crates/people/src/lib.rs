//! People domain module (persons and their parking pass).
//!
//! This crate contains the Person entity and the value objects it is built
//! from, implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). The only clock read is the "today" used to reject future dates of
//! birth, and it happens once, at construction.

pub mod input;
pub mod person;
pub mod value;

pub use input::NewPerson;
pub use person::Person;
pub use value::{DateOfBirth, EmailAddress, PersonName, today};
