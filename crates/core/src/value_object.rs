//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity: two values with the same attributes are
/// interchangeable (`Money`, price ranges, stock thresholds). They are
/// immutable; "changing" one means building a new value.
///
/// ```ignore
/// let a = Money::from_minor(12_999);
/// let b = Money::from_major_minor(129, 99);
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
