//! Shared numeric constants for the camera editor core.

// ── Axis domains ────────────────────────────────────────────────

/// Lower bound of the orbit angle, in degrees.
pub const ROTATE_MIN_DEG: f64 = -90.0;

/// Upper bound of the orbit angle, in degrees.
pub const ROTATE_MAX_DEG: f64 = 90.0;

/// Lower bound of the dolly scalar (baseline distance).
pub const FORWARD_MIN: f64 = 0.0;

/// Upper bound of the dolly scalar (closest approach).
pub const FORWARD_MAX: f64 = 10.0;

/// Lower bound of the pitch scalar (camera looking up from below).
pub const TILT_MIN: f64 = -1.0;

/// Upper bound of the pitch scalar (camera looking down from above).
pub const TILT_MAX: f64 = 1.0;

// ── History ─────────────────────────────────────────────────────

/// Maximum number of undo snapshots retained; the oldest is evicted first.
pub const HISTORY_CAP: usize = 50;

// ── Prompt thresholds ───────────────────────────────────────────

/// Tilt magnitude at or below which the composed policy treats pitch as level.
pub const TILT_DEADBAND: f64 = 0.1;

/// Dolly value above which the banded policy switches to macro framing.
pub const DOLLY_MACRO_THRESHOLD: f64 = 5.0;

/// Dolly value above which the banded policy emits a medium-shot segment.
pub const DOLLY_MEDIUM_THRESHOLD: f64 = 2.0;

/// Tilt magnitude beyond which the banded policy emits an angle segment.
pub const TILT_BAND_THRESHOLD: f64 = 0.4;

// ── Interaction ─────────────────────────────────────────────────

/// Degrees of orbit per horizontal drag pixel.
pub const DRAG_ROTATE_PER_PX: f64 = 0.4;

/// Tilt units per vertical drag pixel; dragging up pitches the camera up.
pub const DRAG_TILT_PER_PX: f64 = 0.01;

/// Camera distance in metres when the dolly scalar is zero.
pub const BASELINE_DISTANCE_M: f64 = 10.0;
