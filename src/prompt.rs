//! Prompt compiler: deterministic translation of a camera pose into the
//! instruction string consumed by the downstream image model.
//!
//! DESIGN
//! ======
//! Two wording policies exist for the same responsibility and are not
//! compatible segment-for-segment, so both live behind one `compile`
//! interface as named strategies. [`PromptPolicy::Composed`] is canonical:
//! a fixed composition directive followed by inclusive per-axis segments.
//! [`PromptPolicy::Banded`] is the retained earlier variant that maps the
//! dolly and tilt axes into qualitative bands and always closes with a
//! lens segment. Both are pure: same pose in, same string out.
//!
//! The neutral sentinel tells the downstream consumer to skip spatial
//! transformation and prioritize faithful restoration, so it must stay
//! distinct from every transformation description.

#[cfg(test)]
#[path = "prompt_test.rs"]
mod prompt_test;

use serde::{Deserialize, Serialize};

use crate::camera::CameraState;
use crate::consts::{
    DOLLY_MACRO_THRESHOLD, DOLLY_MEDIUM_THRESHOLD, TILT_BAND_THRESHOLD, TILT_DEADBAND,
};

/// Sentinel returned for a pose with no transformation to describe.
pub const NEUTRAL_PROMPT: &str = "no camera movement (identity and scene restoration mode)";

/// Wording policy used to compile a pose into an instruction string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptPolicy {
    /// Canonical wording: composition directive first, inclusive segments.
    #[default]
    Composed,
    /// Earlier wording: threshold-banded dolly/tilt, mandatory lens segment.
    Banded,
}

impl PromptPolicy {
    /// Compile a pose into a non-empty instruction string.
    #[must_use]
    pub fn compile(self, state: &CameraState) -> String {
        match self {
            Self::Composed => compile_composed(state),
            Self::Banded => compile_banded(state),
        }
    }
}

fn direction_label(rotate: f64) -> &'static str {
    if rotate > 0.0 { "clockwise" } else { "counter-clockwise" }
}

fn compile_composed(state: &CameraState) -> String {
    let mut segments = vec![
        "STRICT_COMPOSITION: Keep all visible props and held objects in frame.".to_owned(),
    ];

    if state.floating {
        segments.push(
            "PHYSICS_OVERRIDE: Floating subject. 50cm offset. Maintain props integrity."
                .to_owned(),
        );
    }

    if state.rotate != 0.0 {
        segments.push(format!(
            "ORBIT_TRANSFORM: Pivot {} deg {}. Keep subject and held items centered.",
            state.rotate.abs(),
            direction_label(state.rotate),
        ));
    }

    if state.forward > 0.0 {
        segments.push(format!(
            "DOLLY_ZOOM: Magnification level {}. Ensure held items remain fully visible and in focus.",
            state.forward,
        ));
    }

    if state.tilt.abs() > TILT_DEADBAND {
        segments.push(format!(
            "PITCH_AXIS: Angle {}. Adjust perspective for subject and all interactive elements.",
            state.tilt,
        ));
    }

    if state.wide_angle {
        segments.push(
            "LENS_PROFILE: 14mm. Expand field of view to capture more of the environment and subject details."
                .to_owned(),
        );
    }

    // Only the fixed directive fired: nothing to transform.
    if segments.len() > 1 {
        segments.join(" ")
    } else {
        NEUTRAL_PROMPT.to_owned()
    }
}

fn axes_neutral(state: &CameraState) -> bool {
    state.rotate == 0.0 && state.forward == 0.0 && state.tilt == 0.0 && !state.wide_angle
}

fn compile_banded(state: &CameraState) -> String {
    // Floating alone is a non-trivial prompt, so it bypasses the early exit.
    if axes_neutral(state) && !state.floating {
        return NEUTRAL_PROMPT.to_owned();
    }

    let mut segments: Vec<String> = Vec::new();

    if state.floating {
        segments.push(
            "PHYSICS_OVERRIDE: Subject levitates 50cm above the ground plane. Remove the contact shadow and add soft ambient occlusion beneath the subject."
                .to_owned(),
        );
    }

    if state.rotate != 0.0 {
        segments.push(format!(
            "ORBIT_TRANSFORM: Pivot the camera {} deg {} around the subject and recalculate scene lighting for the new viewpoint.",
            state.rotate.abs(),
            direction_label(state.rotate),
        ));
    }

    if state.forward > DOLLY_MACRO_THRESHOLD {
        segments.push(
            "DOLLY_ZOOM: Extreme close-up with macro framing on the subject's defining details."
                .to_owned(),
        );
    } else if state.forward > DOLLY_MEDIUM_THRESHOLD {
        segments
            .push("DOLLY_ZOOM: Medium shot. The subject fills most of the frame.".to_owned());
    }

    if state.tilt > TILT_BAND_THRESHOLD {
        segments
            .push("PITCH_AXIS: High-angle god view looking down at the subject.".to_owned());
    } else if state.tilt < -TILT_BAND_THRESHOLD {
        segments.push("PITCH_AXIS: Low-angle hero shot looking up at the subject.".to_owned());
    }

    // Lens wording closes every banded prompt.
    segments.push(if state.wide_angle {
        "LENS_PROFILE: 14mm wide-angle. Allow mild peripheral distortion and pull extra environment detail into frame."
            .to_owned()
    } else {
        "LENS_PROFILE: 50mm prime. Natural perspective with zero distortion.".to_owned()
    });

    segments.join(" ")
}
