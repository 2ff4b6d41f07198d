//! Value object trait: equality by value, not identity.
//!
//! Planning outputs (execution records, resource estimates) are value objects:
//! they have **no identity** and are defined entirely by their attribute values.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two resource
/// estimates computed from the same strategy configuration and order quantity
/// are equal, which is what makes delegation through a context checkable.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy
/// - **PartialEq**: compared by attribute values
/// - **Debug**: helpful for logging and tests
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct MachineHours(f64);
///
/// impl ValueObject for MachineHours {}
///
/// assert_eq!(MachineHours(6.0), MachineHours(6.0));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
