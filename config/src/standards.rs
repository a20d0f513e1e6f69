//! # Thread Standards Data
//!
//! Immutable lookup data for resolving unspecified thread parameters.
//! The core mesh generator consults this table only when a caller leaves the
//! pitch unset; everything here is pure data with no lifecycle concerns.

/// ISO 261 coarse-pitch series: (nominal diameter, pitch) in mm.
///
/// Diameters between entries resolve by linear interpolation, matching how
/// parametric CAD tools treat off-catalog sizes.
const COARSE_PITCH: &[(f64, f64)] = &[
    (1.0, 0.25),
    (1.2, 0.25),
    (1.4, 0.3),
    (1.6, 0.35),
    (1.8, 0.35),
    (2.0, 0.4),
    (2.5, 0.45),
    (3.0, 0.5),
    (3.5, 0.6),
    (4.0, 0.7),
    (5.0, 0.8),
    (6.0, 1.0),
    (7.0, 1.0),
    (8.0, 1.25),
    (10.0, 1.5),
    (12.0, 1.75),
    (14.0, 2.0),
    (16.0, 2.0),
    (18.0, 2.5),
    (20.0, 2.5),
    (22.0, 2.5),
    (24.0, 3.0),
    (27.0, 3.0),
    (30.0, 3.5),
    (33.0, 3.5),
    (36.0, 4.0),
    (39.0, 4.0),
    (42.0, 4.5),
    (45.0, 4.5),
    (48.0, 5.0),
    (52.0, 5.0),
    (56.0, 5.5),
    (60.0, 5.5),
    (64.0, 6.0),
];

/// Returns the default coarse thread pitch for a nominal outer diameter.
///
/// Exact catalog sizes return their ISO 261 pitch; in-between diameters
/// interpolate linearly between neighboring entries. Diameters below the
/// smallest entry clamp to its pitch, and diameters beyond the largest entry
/// extrapolate proportionally (pitch grows with diameter at the 64 mm ratio).
///
/// # Example
///
/// ```rust
/// use config::standards::thread_pitch;
///
/// assert_eq!(thread_pitch(6.0), 1.0);
/// assert_eq!(thread_pitch(10.0), 1.5);
///
/// // Off-catalog sizes interpolate
/// let p = thread_pitch(9.0);
/// assert!(p > 1.25 && p < 1.5);
/// ```
pub fn thread_pitch(diameter: f64) -> f64 {
    let (first_d, first_p) = COARSE_PITCH[0];
    if diameter <= first_d {
        return first_p;
    }

    let (last_d, last_p) = COARSE_PITCH[COARSE_PITCH.len() - 1];
    if diameter >= last_d {
        return diameter * last_p / last_d;
    }

    for pair in COARSE_PITCH.windows(2) {
        let (d0, p0) = pair[0];
        let (d1, p1) = pair[1];
        if diameter <= d1 {
            let t = (diameter - d0) / (d1 - d0);
            return p0 + t * (p1 - p0);
        }
    }

    last_p
}
