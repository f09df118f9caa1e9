//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two values with the same attributes are
/// equal. `Money` and `Quantity` are value objects; a catalog item is not.
///
/// ```ignore
/// let a = Money::from_cents(999);
/// let b = Money::from_cents(999);
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
