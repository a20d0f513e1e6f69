//! # Thread Profile Generation
//!
//! Computes helical ring stacks for screw threads and closes them into
//! manifold solids. Conventional and auger threads share one sampling loop;
//! they differ in how the tooth form and the tip taper derive the local
//! radius.
//!
//! ## Geometry model
//!
//! The thread surface is sampled as a stack of helical bands, three per
//! pitch, hitting the tooth profile's feature levels exactly: root start,
//! crest, root end. Within a band each point advances clockwise (viewed from
//! +Z) by one facet while its height descends linearly, which keeps the
//! physical helix right-handed and satisfies the stitcher's winding
//! precondition by construction. Band heights clamp into a strictly ordered
//! corridor so the first and last rings flatten into planar cap rings.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::stitch::{close_points, Ring, RingStack};
use config::constants::{
    compute_thread_facets, DEFAULT_THREAD_TOLERANCE, DEFAULT_TOOTH_ANGLE, EPSILON, MAX_TRIANGLES,
    MAX_VERTICES, THREAD_RESOLUTION,
};
use config::standards::thread_pitch;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Feature levels sampled per pitch: root start, crest, root end.
const LEVELS_PER_PITCH: u32 = 3;

/// Extra ring levels appended at each end so height clamping always reaches
/// flat cap rings.
const END_EXTRA_LEVELS: u32 = 3;

/// Fraction of the pitch used as the strict height separation between
/// clamped rings.
const HEIGHT_FUDGE_FRACTION: f64 = 1e-3;

/// Radius floor for auger point tips. Keeps cap-fan facets above the
/// degenerate-triangle threshold while staying invisible at print scale.
const TIP_RADIUS_FLOOR: f64 = 0.25 * THREAD_RESOLUTION;

/// Which side of a threaded joint the solid represents.
///
/// The tolerance is split symmetrically: external threads shrink every radius
/// by half the clearance and internal threads grow every radius by half, so
/// nominally equal diameters mesh with exactly the requested play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreadKind {
    /// A solid external thread (bolt, screw)
    External,
    /// The negative volume cut away for an internal thread (nut, tapped hole)
    Internal,
}

/// Parameters for a conventional screw thread.
///
/// Optional fields resolve from the standards table or the thread form
/// defaults when left as `None`. An explicit `Some(0.0)` is rejected as
/// invalid rather than silently treated as "use the default", so there is no
/// ambiguity between a requested zero and an unset value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadParams {
    /// Nominal outer (crest) diameter
    pub outer_diam: f64,
    /// Helix advance per full turn; `None` resolves from the coarse standards
    /// table by diameter
    pub pitch: Option<f64>,
    /// Flank angle in degrees, measured from the plane perpendicular to the
    /// thread axis; must lie strictly between 0 and 90
    pub tooth_angle: f64,
    /// Radial tooth depth (crest radius minus root radius); `None` resolves
    /// to the sharp-V depth at which adjacent flanks meet
    pub tooth_height: Option<f64>,
    /// Radial engagement clearance between mating parts
    pub tolerance: f64,
    /// Axial length of the terminal taper; `None` means no tip shaping
    pub tip_height: Option<f64>,
    /// Fraction of the tooth depth retained at the very tip; `None` means 0
    pub tip_min_fract: Option<f64>,
    /// Which side of the joint this solid represents
    pub kind: ThreadKind,
}

impl ThreadParams {
    /// Creates parameters for a nominal outer diameter with every other
    /// field at its default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use thread_mesh::ThreadParams;
    ///
    /// let params = ThreadParams::new(6.0);
    /// assert_eq!(params.outer_diam, 6.0);
    /// assert!(params.pitch.is_none());
    /// ```
    pub fn new(outer_diam: f64) -> Self {
        Self {
            outer_diam,
            pitch: None,
            tooth_angle: DEFAULT_TOOTH_ANGLE,
            tooth_height: None,
            tolerance: DEFAULT_THREAD_TOLERANCE,
            tip_height: None,
            tip_min_fract: None,
            kind: ThreadKind::External,
        }
    }
}

/// Parameters for an auger thread.
///
/// An auger blends two helices: the crest helix at the outer diameter and the
/// core helix at the inner diameter. The flute depth is their radial
/// difference, and the pitch is a free design choice (typically several times
/// the tooth span), so it is required rather than looked up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AugerParams {
    /// Crest (flute edge) diameter
    pub outer_diam: f64,
    /// Core diameter between flutes; must be smaller than `outer_diam`
    pub inner_diam: f64,
    /// Helix advance per full turn
    pub pitch: f64,
    /// Flank angle in degrees from the plane perpendicular to the axis
    pub tooth_angle: f64,
    /// Radial engagement clearance between mating parts
    pub tolerance: f64,
    /// Axial length of the terminal taper; `None` means no tip shaping
    pub tip_height: Option<f64>,
    /// Fraction of the full radius retained at the very tip; `None` (or 0)
    /// tapers all the way to a point
    pub tip_min_fract: Option<f64>,
    /// Which side of the joint this solid represents
    pub kind: ThreadKind,
}

impl AugerParams {
    /// Creates auger parameters with the form defaults.
    pub fn new(outer_diam: f64, inner_diam: f64, pitch: f64) -> Self {
        Self {
            outer_diam,
            inner_diam,
            pitch,
            tooth_angle: DEFAULT_TOOTH_ANGLE,
            tolerance: DEFAULT_THREAD_TOLERANCE,
            tip_height: None,
            tip_min_fract: None,
            kind: ThreadKind::External,
        }
    }
}

/// How the tip taper shrinks geometry near the terminal end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaperMode {
    /// Conventional threads: only the tooth depth shrinks, the core stays
    ToothDepth,
    /// Auger threads: the entire radius shrinks, allowing a point tip
    FullRadius,
}

/// A fully resolved thread form, ready for sampling.
#[derive(Debug, Clone)]
struct ProfileSpec {
    crest_r: f64,
    root_r: f64,
    pitch: f64,
    /// Axial distance from root start to crest
    flank_half_span: f64,
    /// Axial distance from root start to root end
    tooth_span: f64,
    tan_angle: f64,
    tip_height: f64,
    tip_min_fract: f64,
    taper: TaperMode,
    facets: u32,
}

fn validate_common(
    outer_diam: f64,
    height: f64,
    tooth_angle: f64,
    tolerance: f64,
) -> Result<(), MeshError> {
    if outer_diam <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "outer diameter must be positive: {}",
            outer_diam
        )));
    }
    if height <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "thread height must be positive: {}",
            height
        )));
    }
    if !(tooth_angle > 0.0 && tooth_angle < 90.0) {
        return Err(MeshError::invalid_parameter(format!(
            "tooth angle must lie strictly between 0 and 90 degrees: {}",
            tooth_angle
        )));
    }
    if tolerance < 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "tolerance must be non-negative: {}",
            tolerance
        )));
    }
    Ok(())
}

fn resolve_tip(
    tip_height: Option<f64>,
    tip_min_fract: Option<f64>,
) -> Result<(f64, f64), MeshError> {
    let tip_height = tip_height.unwrap_or(0.0);
    if tip_height < 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "tip height must be non-negative: {}",
            tip_height
        )));
    }

    let tip_min_fract = tip_min_fract.unwrap_or(0.0);
    if !(0.0..1.0).contains(&tip_min_fract) {
        return Err(MeshError::invalid_parameter(format!(
            "tip fraction must lie in [0, 1): {}",
            tip_min_fract
        )));
    }

    Ok((tip_height, tip_min_fract.min(0.9999)))
}

/// Radial offset shared by every radius of the profile.
fn tolerance_offset(kind: ThreadKind, tolerance: f64) -> f64 {
    match kind {
        ThreadKind::External => -tolerance / 2.0,
        ThreadKind::Internal => tolerance / 2.0,
    }
}

fn resolve_thread(params: &ThreadParams, height: f64) -> Result<ProfileSpec, MeshError> {
    validate_common(params.outer_diam, height, params.tooth_angle, params.tolerance)?;

    let pitch = params
        .pitch
        .unwrap_or_else(|| thread_pitch(params.outer_diam));
    if pitch <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "thread pitch must be positive: {}",
            pitch
        )));
    }

    let tan_angle = params.tooth_angle.to_radians().tan();
    // Sharp-V default: the depth at which adjacent flanks meet over one pitch
    let tooth_height = params
        .tooth_height
        .unwrap_or(pitch / (2.0 * tan_angle));
    if tooth_height <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "tooth height must be positive: {}",
            tooth_height
        )));
    }

    let offset = tolerance_offset(params.kind, params.tolerance);
    let crest_r = params.outer_diam / 2.0 + offset;
    if crest_r <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "tolerance {} leaves no material at diameter {}",
            params.tolerance, params.outer_diam
        )));
    }

    let root_r = crest_r - tooth_height;
    if root_r <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "tooth height {} exceeds the feasible radius {}",
            tooth_height, crest_r
        )));
    }

    let flank_half_span = tooth_height * tan_angle;
    let tooth_span = 2.0 * flank_half_span;
    if tooth_span > pitch + EPSILON {
        return Err(MeshError::invalid_parameter(format!(
            "tooth flanks overlap: axial tooth span {:.4} exceeds pitch {:.4}",
            tooth_span, pitch
        )));
    }

    let (tip_height, tip_min_fract) = resolve_tip(params.tip_height, params.tip_min_fract)?;

    Ok(ProfileSpec {
        crest_r,
        root_r,
        pitch,
        flank_half_span,
        tooth_span,
        tan_angle,
        tip_height,
        tip_min_fract,
        taper: TaperMode::ToothDepth,
        facets: compute_thread_facets(crest_r),
    })
}

fn resolve_auger(params: &AugerParams, height: f64) -> Result<ProfileSpec, MeshError> {
    validate_common(params.outer_diam, height, params.tooth_angle, params.tolerance)?;

    if params.inner_diam <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "inner diameter must be positive: {}",
            params.inner_diam
        )));
    }
    if params.outer_diam <= params.inner_diam {
        return Err(MeshError::invalid_parameter(format!(
            "outer diameter {} must exceed inner diameter {}",
            params.outer_diam, params.inner_diam
        )));
    }
    if params.pitch <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "thread pitch must be positive: {}",
            params.pitch
        )));
    }

    let offset = tolerance_offset(params.kind, params.tolerance);
    let crest_r = params.outer_diam / 2.0 + offset;
    let root_r = params.inner_diam / 2.0 + offset;
    if root_r <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "tolerance {} consumes the entire core diameter {}",
            params.tolerance, params.inner_diam
        )));
    }

    // The flute depth is fixed by the two helices
    let tooth_height = crest_r - root_r;
    let tan_angle = params.tooth_angle.to_radians().tan();
    let flank_half_span = tooth_height * tan_angle;
    let tooth_span = 2.0 * flank_half_span;
    if tooth_span > params.pitch + EPSILON {
        return Err(MeshError::invalid_parameter(format!(
            "flute flanks overlap: axial span {:.4} exceeds pitch {:.4}; \
             increase the pitch or reduce the diameter difference",
            tooth_span, params.pitch
        )));
    }

    let (tip_height, tip_min_fract) = resolve_tip(params.tip_height, params.tip_min_fract)?;

    Ok(ProfileSpec {
        crest_r,
        root_r,
        pitch: params.pitch,
        flank_half_span,
        tooth_span,
        tan_angle,
        tip_height,
        tip_min_fract,
        taper: TaperMode::FullRadius,
        facets: compute_thread_facets(crest_r),
    })
}

/// Radial width of the tooth at an axial phase within one period.
///
/// Trapezoidal period profile: rising flank to the crest, falling flank back
/// to the root, then a root plateau until the next period. Alternating
/// crest/root radii rather than a smooth sinusoid, because real thread
/// cross-sections are near-trapezoidal.
fn tooth_width(spec: &ProfileSpec, phase: f64) -> f64 {
    if phase <= spec.flank_half_span {
        phase / spec.tan_angle
    } else if phase <= spec.tooth_span {
        (spec.tooth_span - phase) / spec.tan_angle
    } else {
        0.0
    }
}

/// Local radius after tip shaping.
///
/// Above `tip_start` the depth factor falls linearly from 1 to
/// `tip_min_fract`. Conventional threads taper only the tooth depth toward
/// the core; augers taper the whole radius and may close to a (floored)
/// point.
fn local_radius(spec: &ProfileSpec, width: f64, h: f64, tip_start: f64) -> f64 {
    if spec.tip_height <= 0.0 || h <= tip_start {
        return spec.root_r + width;
    }

    let along = ((h - tip_start) / spec.tip_height).clamp(0.0, 1.0);
    let scale = 1.0 - (1.0 - spec.tip_min_fract) * along;
    match spec.taper {
        TaperMode::ToothDepth => spec.root_r + width * scale,
        TaperMode::FullRadius => ((spec.root_r + width) * scale).max(TIP_RADIUS_FLOOR),
    }
}

/// Samples a resolved profile into a ring stack.
fn generate_rings(spec: &ProfileSpec, height: f64) -> Result<RingStack, MeshError> {
    let facets = spec.facets as usize;
    let hsteps = (LEVELS_PER_PITCH as f64 * height / spec.pitch).ceil() as usize
        + 2 * END_EXTRA_LEVELS as usize;
    let ring_count = hsteps + 1;

    let vertex_count = ring_count * facets + 2;
    if vertex_count > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: vertex_count,
            max: MAX_VERTICES,
        });
    }
    let triangle_count = 2 * facets * hsteps + 2 * facets;
    if triangle_count > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: triangle_count,
            max: MAX_TRIANGLES,
        });
    }

    // Strict ring separation; kept well below the flank span so the level
    // ordering survives, and below a height share so clamping stays ordered
    let fudge = (spec.pitch * HEIGHT_FUDGE_FRACTION)
        .min(spec.flank_half_span / 2.0)
        .min(height / (10.0 * ring_count as f64));
    let tip_start = height - spec.tip_height;

    let mut stack = RingStack::with_capacity(ring_count);
    for hs in 0..ring_count {
        let level = match hs as u32 % LEVELS_PER_PITCH {
            0 => 0.0,
            1 => spec.flank_half_span,
            _ => spec.tooth_span - fudge,
        };
        let base_turn =
            ((hs as f64 - END_EXTRA_LEVELS as f64) / LEVELS_PER_PITCH as f64).floor() + 1.0;
        let h_min = hs as f64 * fudge;
        let h_max = height - (hsteps - hs) as f64 * fudge;

        let mut ring = Ring::with_capacity(facets);
        for s in 0..facets {
            let u = s as f64 / facets as f64;
            // Clockwise sweep seen from +Z; the height falls with the sweep,
            // which keeps the physical helix right-handed
            let ang = -2.0 * PI * u;
            let helix_drop = -u * spec.pitch;

            let h_raw = base_turn * spec.pitch + level + helix_drop;
            let h = h_raw.clamp(h_min, h_max);

            // Axial phase of the (possibly clamped) height relative to the
            // helical root line; constant per ring except at the flat ends,
            // where it sweeps the partial teeth of the cap rings
            let phase = (h - helix_drop).rem_euclid(spec.pitch);
            let width = tooth_width(spec, phase);
            let r = local_radius(spec, width, h, tip_start);

            ring.push(DVec3::new(r * ang.cos(), r * ang.sin(), h));
        }
        stack.push_ring(ring);
    }

    Ok(stack)
}

/// Computes the ring stack of a conventional screw thread.
///
/// The stack satisfies every structural precondition of
/// [`close_points`](crate::stitch::close_points) by construction: uniform
/// point counts, clockwise-from-+Z winding, star-shaped terminal rings, and
/// strictly increasing ring heights.
///
/// # Arguments
///
/// * `params` - Thread form parameters; unset options resolve to standards
/// * `height` - Axial length of the threaded section
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] for non-positive dimensions or an
/// infeasible form (tooth deeper than the radius, flank overlap), and the
/// size-limit variants when the derived tessellation would exceed the safety
/// bounds.
pub fn thread_rings(params: &ThreadParams, height: f64) -> Result<RingStack, MeshError> {
    let spec = resolve_thread(params, height)?;
    generate_rings(&spec, height)
}

/// Computes the ring stack of an auger thread.
///
/// See [`thread_rings`]; augers additionally validate `outer_diam >
/// inner_diam` and taper the full radius at the tip.
pub fn auger_rings(params: &AugerParams, height: f64) -> Result<RingStack, MeshError> {
    let spec = resolve_auger(params, height)?;
    generate_rings(&spec, height)
}

/// Generates a closed manifold mesh for a conventional screw thread.
///
/// Equivalent to [`thread_rings`] followed by
/// [`close_points`](crate::stitch::close_points). The mesh sits on the XY
/// plane with +Z as the thread axis; positioning is the caller's concern.
///
/// # Example
///
/// ```rust
/// use thread_mesh::{screw_thread, ThreadParams};
///
/// // M6 x 10, pitch resolved to 1.0 from the standards table
/// let mesh = screw_thread(&ThreadParams::new(6.0), 10.0).unwrap();
/// assert!(mesh.triangle_count() > 0);
/// assert!(mesh.signed_volume() > 0.0);
/// ```
pub fn screw_thread(params: &ThreadParams, height: f64) -> Result<Mesh, MeshError> {
    close_points(&thread_rings(params, height)?)
}

/// Generates a closed manifold mesh for an auger thread.
///
/// Equivalent to [`auger_rings`] followed by
/// [`close_points`](crate::stitch::close_points).
///
/// # Example
///
/// ```rust
/// use thread_mesh::{auger_thread, AugerParams};
///
/// let mesh = auger_thread(&AugerParams::new(20.0, 8.0, 8.0), 40.0).unwrap();
/// assert!(mesh.signed_volume() > 0.0);
/// ```
pub fn auger_thread(params: &AugerParams, height: f64) -> Result<Mesh, MeshError> {
    close_points(&auger_rings(params, height)?)
}
