//! Render settings for a generation request: seed, output geometry,
//! sampling steps, and quality tier.
//!
//! The host clamps slider input through [`RenderSettings::clamped`];
//! [`RenderSettings::validate`] is the hard check applied before a
//! request leaves the session.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Smallest accepted output dimension, in pixels.
pub const DIMENSION_MIN: u32 = 256;

/// Largest accepted output dimension, in pixels.
pub const DIMENSION_MAX: u32 = 1024;

/// Output dimensions snap to this grid.
pub const DIMENSION_STEP: u32 = 64;

/// Minimum sampling steps.
pub const STEPS_MIN: u32 = 1;

/// Maximum sampling steps.
pub const STEPS_MAX: u32 = 40;

/// Largest accepted seed (the downstream service takes a 31-bit seed).
pub const SEED_MAX: u32 = 2_147_483_647;

/// Error from [`RenderSettings::validate`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A width or height is outside 256..=1024 or off the 64px grid.
    #[error("output dimension {0} must be between 256 and 1024 on a 64px grid")]
    InvalidDimension(u32),
    /// Sampling steps outside 1..=40.
    #[error("sampling steps {0} must be between 1 and 40")]
    InvalidSteps(u32),
    /// Seed larger than the downstream 31-bit limit.
    #[error("seed {0} exceeds the 31-bit service limit")]
    SeedOutOfRange(u32),
}

/// Quality tier of the generation model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Fast tier, fixed 1K output.
    #[default]
    Flash,
    /// Paid tier with selectable output size.
    Pro,
}

impl Quality {
    /// Downstream model id for this tier.
    #[must_use]
    pub fn model_id(self) -> &'static str {
        match self {
            Self::Flash => "gemini-2.5-flash-image",
            Self::Pro => "gemini-3-pro-image-preview",
        }
    }
}

/// Output size selector, honored on the pro tier only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

/// Settings attached to one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSettings {
    /// Reproducibility seed, 0 to [`SEED_MAX`].
    pub seed: u32,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Sampling steps.
    pub steps: u32,
    /// Model quality tier.
    pub quality: Quality,
    /// Requested output size; ignored off the pro tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size: Option<ImageSize>,
    /// Free-form scene direction appended to the instruction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative_context: Option<String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            width: 1024,
            height: 1024,
            steps: 4,
            quality: Quality::Flash,
            image_size: Some(ImageSize::OneK),
            creative_context: None,
        }
    }
}

impl RenderSettings {
    /// Default settings with a fresh random seed, as a new session gets.
    #[must_use]
    pub fn randomized() -> Self {
        Self { seed: rand::rng().random_range(0..=SEED_MAX), ..Self::default() }
    }

    /// The output size the downstream service will honor: the selected
    /// size on the pro tier (1K when unset), nothing on flash.
    #[must_use]
    pub fn effective_image_size(&self) -> Option<ImageSize> {
        match self.quality {
            Quality::Pro => Some(self.image_size.unwrap_or_default()),
            Quality::Flash => None,
        }
    }

    /// Check every numeric field against its service limit.
    ///
    /// # Errors
    ///
    /// Returns the first violated limit as a [`SettingsError`].
    pub fn validate(&self) -> Result<(), SettingsError> {
        for dim in [self.width, self.height] {
            if !(DIMENSION_MIN..=DIMENSION_MAX).contains(&dim) || dim % DIMENSION_STEP != 0 {
                return Err(SettingsError::InvalidDimension(dim));
            }
        }
        if !(STEPS_MIN..=STEPS_MAX).contains(&self.steps) {
            return Err(SettingsError::InvalidSteps(self.steps));
        }
        if self.seed > SEED_MAX {
            return Err(SettingsError::SeedOutOfRange(self.seed));
        }
        Ok(())
    }

    /// These settings with every numeric field snapped into its limits,
    /// mirroring what the host sliders enforce.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            seed: self.seed.min(SEED_MAX),
            width: snap_dimension(self.width),
            height: snap_dimension(self.height),
            steps: self.steps.clamp(STEPS_MIN, STEPS_MAX),
            ..self.clone()
        }
    }
}

/// Snap a raw dimension onto the 64px grid within the service limits.
#[must_use]
pub fn snap_dimension(raw: u32) -> u32 {
    let clamped = raw.clamp(DIMENSION_MIN, DIMENSION_MAX);
    let snapped = (clamped + DIMENSION_STEP / 2) / DIMENSION_STEP * DIMENSION_STEP;
    snapped.clamp(DIMENSION_MIN, DIMENSION_MAX)
}
