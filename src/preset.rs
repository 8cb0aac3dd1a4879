//! Named camera presets: one-tap poses applied through the store.

#[cfg(test)]
#[path = "preset_test.rs"]
mod preset_test;

use serde::{Deserialize, Serialize};

use crate::camera::{CameraState, CameraUpdate};

/// Identifier for a built-in camera preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CameraPreset {
    /// Classic eye-level framing (the default pose).
    Default,
    /// High vantage point emphasizing scene geometry.
    Birdseye,
    /// Canted camera for dramatic tension.
    Dutch,
    /// Extreme close-up on fine detail.
    Macro,
    /// Shot from below, lending the subject stature.
    LowAngle,
    /// Dynamic orbit with a wide sweep of the space.
    WideOrbit,
    /// Straight vertical look down.
    TopDown,
}

/// A preset's display copy and the pose it applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetDef {
    pub id: CameraPreset,
    pub label: &'static str,
    pub description: &'static str,
    pub state: CameraState,
}

/// Every built-in preset, in gallery order.
pub const ALL_PRESETS: [CameraPreset; 7] = [
    CameraPreset::Default,
    CameraPreset::Birdseye,
    CameraPreset::Dutch,
    CameraPreset::Macro,
    CameraPreset::LowAngle,
    CameraPreset::WideOrbit,
    CameraPreset::TopDown,
];

impl CameraPreset {
    /// The definition record for this preset.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn def(self) -> PresetDef {
        match self {
            Self::Default => PresetDef {
                id: self,
                label: "Standard",
                description: "Classic eye-level portrait framing.",
                state: CameraState {
                    rotate: 0.0,
                    forward: 0.0,
                    tilt: 0.0,
                    wide_angle: false,
                    floating: false,
                },
            },
            Self::Birdseye => PresetDef {
                id: self,
                label: "Bird's-Eye",
                description: "High vantage point that brings out the scene's geometry.",
                state: CameraState {
                    rotate: 0.0,
                    forward: 2.0,
                    tilt: 0.9,
                    wide_angle: true,
                    floating: false,
                },
            },
            Self::Dutch => PresetDef {
                id: self,
                label: "Dutch Angle",
                description: "Dramatic camera cant that builds tension.",
                state: CameraState {
                    rotate: 15.0,
                    forward: 3.0,
                    tilt: -0.2,
                    wide_angle: false,
                    floating: false,
                },
            },
            Self::Macro => PresetDef {
                id: self,
                label: "Macro",
                description: "Extreme close-up on facial detail.",
                state: CameraState {
                    rotate: 0.0,
                    forward: 8.5,
                    tilt: 0.0,
                    wide_angle: false,
                    floating: false,
                },
            },
            Self::LowAngle => PresetDef {
                id: self,
                label: "Heroic",
                description: "Shot from below. Lends the subject stature and dominance.",
                state: CameraState {
                    rotate: 0.0,
                    forward: 4.0,
                    tilt: -0.8,
                    wide_angle: true,
                    floating: false,
                },
            },
            Self::WideOrbit => PresetDef {
                id: self,
                label: "Orbital",
                description: "Dynamic orbit with a wide sweep of the space.",
                state: CameraState {
                    rotate: 45.0,
                    forward: 1.0,
                    tilt: 0.3,
                    wide_angle: true,
                    floating: false,
                },
            },
            Self::TopDown => PresetDef {
                id: self,
                label: "Zenith",
                description: "Straight vertical look down.",
                state: CameraState {
                    rotate: 0.0,
                    forward: 0.0,
                    tilt: 1.0,
                    wide_angle: true,
                    floating: false,
                },
            },
        }
    }

    /// The sparse update that jumps the store to this preset's pose.
    #[must_use]
    pub fn update(self) -> CameraUpdate {
        CameraUpdate::from(self.def().state)
    }
}
