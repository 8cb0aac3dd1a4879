//! Camera value types: the full pose and its sparse update.
//!
//! `CameraState` is the complete pose of the virtual camera around the
//! uploaded photo. `CameraUpdate` carries only the fields a caller wants
//! to change; absent fields leave the current value untouched. The store
//! accepts updates as-is, so clamping to the axis domains is the caller's
//! job - the [`crate::input`] module is that caller for raw UI deltas.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    FORWARD_MAX, FORWARD_MIN, ROTATE_MAX_DEG, ROTATE_MIN_DEG, TILT_MAX, TILT_MIN,
};

/// The full pose of the virtual camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraState {
    /// Signed orbit angle in degrees, -90 to 90. 0 = centered on the subject.
    pub rotate: f64,
    /// Dolly/magnification scalar, 0 to 10. 0 = baseline distance.
    pub forward: f64,
    /// Pitch scalar, -1 to 1. 0 = level with the subject.
    pub tilt: f64,
    /// 14mm wide-angle lens toggle.
    pub wide_angle: bool,
    /// Subject-levitation scene effect.
    pub floating: bool,
}

impl CameraState {
    /// This pose with every numeric axis clamped to its domain.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            rotate: clamp_rotate(self.rotate),
            forward: clamp_forward(self.forward),
            tilt: clamp_tilt(self.tilt),
            ..self
        }
    }

    /// Whether every numeric axis lies within its declared domain.
    #[must_use]
    pub fn in_domain(&self) -> bool {
        (ROTATE_MIN_DEG..=ROTATE_MAX_DEG).contains(&self.rotate)
            && (FORWARD_MIN..=FORWARD_MAX).contains(&self.forward)
            && (TILT_MIN..=TILT_MAX).contains(&self.tilt)
    }
}

/// Sparse update for a camera pose. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraUpdate {
    /// New orbit angle in degrees, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    /// New dolly scalar, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward: Option<f64>,
    /// New pitch scalar, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tilt: Option<f64>,
    /// New wide-angle toggle, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wide_angle: Option<bool>,
    /// New floating toggle, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floating: Option<bool>,
}

impl CameraUpdate {
    /// Whether applying this update to `state` would change at least one
    /// supplied field. Comparison is exact; absent fields never count.
    #[must_use]
    pub fn changes(&self, state: &CameraState) -> bool {
        self.rotate.is_some_and(|v| v != state.rotate)
            || self.forward.is_some_and(|v| v != state.forward)
            || self.tilt.is_some_and(|v| v != state.tilt)
            || self.wide_angle.is_some_and(|v| v != state.wide_angle)
            || self.floating.is_some_and(|v| v != state.floating)
    }

    /// Merge the supplied fields into `state`, leaving the rest untouched.
    pub fn apply_to(&self, state: &mut CameraState) {
        if let Some(rotate) = self.rotate {
            state.rotate = rotate;
        }
        if let Some(forward) = self.forward {
            state.forward = forward;
        }
        if let Some(tilt) = self.tilt {
            state.tilt = tilt;
        }
        if let Some(wide_angle) = self.wide_angle {
            state.wide_angle = wide_angle;
        }
        if let Some(floating) = self.floating {
            state.floating = floating;
        }
    }

    /// This update with every supplied numeric axis clamped to its domain.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            rotate: self.rotate.map(clamp_rotate),
            forward: self.forward.map(clamp_forward),
            tilt: self.tilt.map(clamp_tilt),
            ..self
        }
    }

    /// Whether no field is supplied at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rotate.is_none()
            && self.forward.is_none()
            && self.tilt.is_none()
            && self.wide_angle.is_none()
            && self.floating.is_none()
    }
}

impl From<CameraState> for CameraUpdate {
    /// An update that sets every field, used for preset jumps and restores.
    fn from(state: CameraState) -> Self {
        Self {
            rotate: Some(state.rotate),
            forward: Some(state.forward),
            tilt: Some(state.tilt),
            wide_angle: Some(state.wide_angle),
            floating: Some(state.floating),
        }
    }
}

/// Clamp an orbit angle to the rotate domain.
#[must_use]
pub fn clamp_rotate(deg: f64) -> f64 {
    deg.clamp(ROTATE_MIN_DEG, ROTATE_MAX_DEG)
}

/// Clamp a dolly scalar to the forward domain.
#[must_use]
pub fn clamp_forward(value: f64) -> f64 {
    value.clamp(FORWARD_MIN, FORWARD_MAX)
}

/// Clamp a pitch scalar to the tilt domain.
#[must_use]
pub fn clamp_tilt(value: f64) -> f64 {
    value.clamp(TILT_MIN, TILT_MAX)
}
