//! Interaction-layer math: raw drag and slider input becomes clamped
//! camera updates, plus the display labels the host UI shows next to them.
//!
//! The store trusts its callers to stay inside the axis domains; this
//! module is that caller. Every function here returns values already
//! clamped, so out-of-range input never reaches the store.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::{CameraState, CameraUpdate, clamp_forward, clamp_rotate, clamp_tilt};
use crate::consts::{BASELINE_DISTANCE_M, DRAG_ROTATE_PER_PX, DRAG_TILT_PER_PX};

/// Translate an orbit-drag delta (screen pixels) into a clamped update.
///
/// Horizontal motion orbits the camera; vertical motion pitches it, with
/// upward drag pitching up. Non-finite deltas are treated as zero.
#[must_use]
pub fn orbit_drag(state: &CameraState, dx_px: f64, dy_px: f64) -> CameraUpdate {
    let dx = if dx_px.is_finite() { dx_px } else { 0.0 };
    let dy = if dy_px.is_finite() { dy_px } else { 0.0 };
    CameraUpdate {
        rotate: Some(clamp_rotate(state.rotate + dx * DRAG_ROTATE_PER_PX)),
        tilt: Some(clamp_tilt(state.tilt - dy * DRAG_TILT_PER_PX)),
        ..CameraUpdate::default()
    }
}

/// A clamped update from the rotation slider's raw value.
#[must_use]
pub fn rotate_slider(value: f64) -> CameraUpdate {
    CameraUpdate { rotate: Some(clamp_rotate(value)), ..CameraUpdate::default() }
}

/// A clamped update from the dolly slider's raw value.
#[must_use]
pub fn forward_slider(value: f64) -> CameraUpdate {
    CameraUpdate { forward: Some(clamp_forward(value)), ..CameraUpdate::default() }
}

/// A clamped update from the tilt slider's raw value.
#[must_use]
pub fn tilt_slider(value: f64) -> CameraUpdate {
    CameraUpdate { tilt: Some(clamp_tilt(value)), ..CameraUpdate::default() }
}

/// An update that flips the wide-angle lens toggle.
#[must_use]
pub fn toggle_wide_angle(state: &CameraState) -> CameraUpdate {
    CameraUpdate { wide_angle: Some(!state.wide_angle), ..CameraUpdate::default() }
}

/// An update that flips the floating-subject toggle.
#[must_use]
pub fn toggle_floating(state: &CameraState) -> CameraUpdate {
    CameraUpdate { floating: Some(!state.floating), ..CameraUpdate::default() }
}

/// Lens-to-subject distance in metres for a dolly scalar.
#[must_use]
pub fn lens_distance_m(forward: f64) -> f64 {
    BASELINE_DISTANCE_M - forward
}

/// Rotation readout, whole degrees: `"30°"`, `"-45°"`.
#[must_use]
pub fn format_rotate_label(rotate: f64) -> String {
    format!("{rotate:.0}°")
}

/// Distance readout in metres, one decimal: `"7.5m"`.
#[must_use]
pub fn format_distance_label(forward: f64) -> String {
    format!("{:.1}m", lens_distance_m(forward))
}

/// Tilt readout, two decimals: `"0.25"`.
#[must_use]
pub fn format_tilt_label(tilt: f64) -> String {
    format!("{tilt:.2}")
}
