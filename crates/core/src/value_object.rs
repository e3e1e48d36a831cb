//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. In this
/// workspace every value object is validated on construction: holding one
/// means the rule it encodes was satisfied at that moment.
///
/// ## Design Constraints
///
/// - **Clone**: value objects are values, not references
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable for logging and testing
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct EmailAddress(String);
///
/// impl ValueObject for EmailAddress {}
///
/// let a = EmailAddress::new("a@b")?;
/// let b = EmailAddress::new("a@b")?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
