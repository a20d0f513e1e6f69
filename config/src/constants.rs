//! # Configuration Constants
//!
//! Centralized constants for the thread mesh pipeline. All geometry
//! calculations, tessellation parameters, and precision values are defined
//! here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Facet derivation for helical tessellation
//! - **Defaults**: Thread form parameters used when callers leave them unset
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for vertex deduplication and degenerate-triangle detection.
///
/// Slightly larger tolerance used when deciding whether a triangle has
/// collapsed to zero area or two vertices coincide. Downstream boolean
/// kernels re-weld vertices with a comparable threshold.
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Target arc length of one facet at the thread crest, in model units (mm).
///
/// Facet counts per revolution are derived from the crest circumference and
/// this value, so larger diameters get proportionally more facets. The value
/// trades visual/manufacturing smoothness against mesh size: 0.2 mm keeps
/// FDM-printed threads smooth without exploding triangle counts.
///
/// # Example
///
/// ```rust
/// use config::constants::THREAD_RESOLUTION;
///
/// let radius = 3.0;
/// let facets = (2.0 * std::f64::consts::PI * radius / THREAD_RESOLUTION).ceil();
/// assert!(facets > 90.0);
/// ```
pub const THREAD_RESOLUTION: f64 = 0.2;

/// Minimum number of facets per revolution.
///
/// Three points are the geometric minimum for a closed ring; 4 is used as a
/// practical floor so even sub-millimeter threads keep a usable cross-section.
pub const MIN_THREAD_FACETS: u32 = 4;

/// Maximum number of facets per revolution.
///
/// Safety limit to prevent excessive tessellation that could cause memory
/// issues on very large diameters.
pub const MAX_THREAD_FACETS: u32 = 1000;

// =============================================================================
// THREAD FORM DEFAULTS
// =============================================================================

/// Default flank angle in degrees, measured between a tooth flank and the
/// plane perpendicular to the thread axis.
///
/// 30 degrees gives the 60-degree included angle of ISO metric threads.
pub const DEFAULT_TOOTH_ANGLE: f64 = 30.0;

/// Default radial engagement clearance between mating threads, in mm.
///
/// An externally threaded part and an internally threaded part generated with
/// the same nominal diameter and this tolerance seat with 0.4 mm of radial
/// play, which suits typical FDM shrinkage.
pub const DEFAULT_THREAD_TOLERANCE: f64 = 0.4;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely complex models.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extremely complex models.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Computes the number of facets per revolution for a helical solid.
///
/// The count follows the crest circumference divided by [`THREAD_RESOLUTION`],
/// clamped to `MIN_THREAD_FACETS..=MAX_THREAD_FACETS`, so the facet density
/// scales with diameter.
///
/// # Arguments
///
/// * `radius` - The crest radius of the thread
///
/// # Example
///
/// ```rust
/// use config::constants::{compute_thread_facets, MIN_THREAD_FACETS};
///
/// let facets = compute_thread_facets(3.0);
/// assert!(facets >= MIN_THREAD_FACETS);
///
/// // Tiny radii clamp to the floor
/// assert_eq!(compute_thread_facets(0.01), MIN_THREAD_FACETS);
/// ```
pub fn compute_thread_facets(radius: f64) -> u32 {
    let facets = (2.0 * std::f64::consts::PI * radius / THREAD_RESOLUTION).ceil() as u32;
    facets.clamp(MIN_THREAD_FACETS, MAX_THREAD_FACETS)
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
