//! Value object trait: equality by value, not identity.
//!
//! Everything the engine produces is a value object: observations, forecast
//! points and recommendations have no identity and are never mutated after
//! construction. A run is a pure function of its inputs, so two runs over equal
//! inputs yield equal values.

/// Marker trait for value objects.
///
/// ## Design Constraints
///
/// - **Clone**: values are copied freely between pipeline stages
/// - **PartialEq**: compared by attribute values (tests rely on this)
/// - **Debug**: printable in logs and assertion failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Demand {
///     units: f64,
/// }
///
/// impl ValueObject for Demand {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
