//! Capability-conditioned expression macros.

// =============================================================================
// probe_match! - Inline branch based on a capability probe
// =============================================================================

/// Inline compile-time branch on a capability probe.
///
/// Both arms must have the same type; the condition is a constant, so the
/// dead arm is trivially removed.
///
/// # Example
///
/// ```
/// use sercaps::probe_match;
///
/// let label = probe_match!(i32: Integral, {
///     Present => "counts",
///     Absent => "does not count",
/// });
/// assert_eq!(label, "counts");
/// ```
#[macro_export]
macro_rules! probe_match {
    ($ty:ty : $cap:ident, {
        Present => $present:expr,
        Absent => $absent:expr $(,)?
    }) => {{
        // Compile-time const evaluation
        if $crate::probe!($ty: $cap) {
            $present
        } else {
            $absent
        }
    }};
}
