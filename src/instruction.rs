//! Full model-instruction envelope around the compiled camera prompt.
//!
//! The downstream image model receives a single text block: an analysis
//! phase, the camera transform, an integrity protocol, and trailing
//! context and seed lines. Building that block is pure text synthesis;
//! attaching the image payload and sending the request belong to the host.

#[cfg(test)]
#[path = "instruction_test.rs"]
mod instruction_test;

use crate::settings::RenderSettings;

/// Context line used when the caller supplies none.
pub const DEFAULT_CONTEXT: &str = "Maximum realism.";

/// Build the complete instruction text for one generation request.
#[must_use]
pub fn build_instruction(camera_prompt: &str, settings: &RenderSettings) -> String {
    let context = settings
        .creative_context
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_CONTEXT);

    format!(
        "## MODEL INSTRUCTION (IDENTITY PRESERVATION ENGINE) ##\n\
         \n\
         PHASE 1: DEEP STRUCTURAL ANALYSIS\n\
         Analyze the image and record EVERY element of the scene:\n\
         - SUBJECT: facial features, proportions, clothing.\n\
         - INTERACTION: record any items held in the hands (documents, cards, gadgets). These are CRITICAL scene elements.\n\
         - ENVIRONMENT: background, lighting, shadows.\n\
         *FORBIDDEN:* Do not ignore or remove small objects. If the person holds a document, that document is part of their identity in this scene.\n\
         \n\
         PHASE 2: RECONSTRUCTION WITH SCENE INTEGRITY\n\
         Apply the perspective transformation: \"{camera_prompt}\".\n\
         \n\
         SCENE_INTEGRITY_LOCK PROTOCOL:\n\
         1. OBJECT PRESERVATION: Every item the subject holds (cards, documents, accessories) MUST stay in frame and be rendered clearly. Dropping or cropping these objects is a critical rendering failure.\n\
         2. NO CROP: Never move the frame boundary so that important details (hands with items) fall out of view.\n\
         3. IDENTITY: Face, hair, age and appearance must match the original at 100%.\n\
         4. TECHNICAL CLEANUP: Remove noise and compression artifacts, but keep any text or structure on held items legible without changing its content.\n\
         \n\
         Goal: a technically clean rendition of the original from the new viewpoint WHERE ALL ELEMENTS (including documents in hand) ARE PRESERVED AND IMPROVED.\n\
         \n\
         CONTEXT: {context}\n\
         SEED: {seed}",
        seed = settings.seed,
    )
}
