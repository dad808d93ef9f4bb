//! Validation errors

use crate::float_types::Real;
use thiserror::Error;

/// Raised by [`GearMesh::gear`](crate::mesh::GearMesh::gear) when a
/// [`GearSpec`](crate::gear::GearSpec) violates an input invariant. Each
/// variant names the invariant and carries the offending values.
///
/// Invalid parameters are a programming error, not a transient condition:
/// nothing here is retried, and the error propagates to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidGearSpec {
    /// A tooth profile needs at least 3 repetitions to close without
    /// self-intersecting.
    #[error("a gear needs at least 3 teeth, got {teeth}")]
    TooFewTeeth { teeth: u32 },

    /// The bore must sit strictly inside the rim: `0 < inner < outer`.
    #[error("radii out of order: inner radius {inner} must satisfy 0 < inner < outer ({outer})")]
    RadiiOutOfOrder { inner: Real, outer: Real },

    /// Extrusion thickness along the rotation axis must be positive.
    #[error("gear width must be positive, got {width}")]
    NonPositiveWidth { width: Real },

    /// The tooth band may collapse to zero but not invert.
    #[error("tooth depth must be non-negative, got {tooth_depth}")]
    NegativeToothDepth { tooth_depth: Real },

    /// Half the tooth depth reaches below the bore, so the root circle would
    /// self-intersect with the central hole.
    #[error(
        "tooth depth {tooth_depth} sinks the tooth root below the bore (inner {inner}, outer {outer})"
    )]
    ToothDepthExceedsRim {
        tooth_depth: Real,
        inner: Real,
        outer: Real,
    },

    /// A parameter is NaN or infinite.
    #[error("{field} is not finite: {value}")]
    NonFinite { field: &'static str, value: Real },
}
