//! Per-session editor facade composing the camera store, render settings,
//! prompt policy, and active preset.
//!
//! DESIGN
//! ======
//! One `EditorSession` is constructed per editing session and owned by the
//! host; all interaction routes through it, replacing what would otherwise
//! be module-level mutable state. Components keep their own invariants
//! (the store guards its history), so they are exposed as public fields.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::camera::CameraUpdate;
use crate::instruction::build_instruction;
use crate::preset::CameraPreset;
use crate::prompt::PromptPolicy;
use crate::settings::RenderSettings;
use crate::store::CameraStore;

/// Everything one editing session owns.
#[derive(Debug, Clone)]
pub struct EditorSession {
    /// Camera pose and undo/redo history.
    pub camera: CameraStore,
    /// Settings attached to the next generation request.
    pub settings: RenderSettings,
    /// Wording policy for the compiled prompt.
    pub policy: PromptPolicy,
    /// Most recently applied preset; manual edits do not clear it.
    pub active_preset: Option<CameraPreset>,
}

impl EditorSession {
    /// A fresh session: default pose, random seed, canonical policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(PromptPolicy::default())
    }

    /// A fresh session compiling prompts with the given policy.
    #[must_use]
    pub fn with_policy(policy: PromptPolicy) -> Self {
        Self {
            camera: CameraStore::new(),
            settings: RenderSettings::randomized(),
            policy,
            active_preset: Some(CameraPreset::Default),
        }
    }

    /// Jump the camera to a preset pose. Routes through the store, so the
    /// jump is undoable like any other mutation.
    pub fn apply_preset(&mut self, preset: CameraPreset) {
        self.camera.update(&preset.update());
        self.active_preset = Some(preset);
    }

    /// Merge a clamped sparse update into the camera pose.
    pub fn update_camera(&mut self, update: &CameraUpdate) {
        self.camera.update(update);
    }

    /// The instruction string derived from the current pose.
    #[must_use]
    pub fn prompt(&self) -> String {
        self.policy.compile(&self.camera.state())
    }

    /// The full model instruction for the current pose and settings.
    #[must_use]
    pub fn instruction(&self) -> String {
        build_instruction(&self.prompt(), &self.settings)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
