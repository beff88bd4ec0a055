//! Prompt text for the farm assistant

use shared::{FarmProfileUpdate, OptimizationResult};

/// System prompt establishing the assistant's role and voice
pub const SYSTEM_PROMPT: &str = "\
You are Prometheus, an agricultural extension officer and personal assistant for farmers.

ROLE
- Help farmers optimize crop yields, manage resources efficiently, and troubleshoot problems.
- Audience: farmers and farm managers with varying levels of technical expertise.

STYLE (FOR VOICE OUTPUT)
- Be concise, clear, and conversational: 2-5 short sentences by default.
- Use simple language and explain jargon only when needed.
- Prefer numbered, actionable steps over long explanations.
- Confirm key assumptions briefly, such as location and current crop.
- Call out safety, cost, or legal issues explicitly and conservatively.

CONTEXT
- Reuse what you know about the farmer: location, crops, soil, irrigation method, past advice.
- If location, crop, or growth stage is missing, ask 1-2 clarifying questions first.

LIMITS
- Weather, soil, yield, and vision results in this system are simulated; say so when it matters.
- Never recommend pesticide rates beyond label directions. Suggest a local agronomist for serious problems.";

/// One-line rendering of a farmer profile sent with a request
pub fn profile_snippet(profile: &FarmProfileUpdate) -> String {
    let crops = profile
        .primary_crops
        .as_ref()
        .map(|crops| crops.join(", "))
        .filter(|joined| !joined.is_empty())
        .unwrap_or_else(|| "unspecified".to_string());

    format!(
        "Farmer profile: name={}, location={}, primary crops={}. Notes={}. ",
        or_placeholder(profile.name.as_deref(), "unknown"),
        or_placeholder(profile.location.as_deref(), "unknown"),
        crops,
        or_placeholder(profile.notes.as_deref(), "none"),
    )
}

fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value.filter(|text| !text.trim().is_empty()).unwrap_or(placeholder)
}

/// The user turn for a chat message, prefixed with farm context
pub fn chat_prompt(farm_summary: &str, profile: Option<&FarmProfileUpdate>, message: &str) -> String {
    let snippet = profile.map(profile_snippet).unwrap_or_default();
    format!(
        "Context about this farm (digital twin summary): {}\n\n\
         Now answer the farmer's question in a concise, voice-friendly way.\n\n\
         {}{}",
        farm_summary, snippet, message
    )
}

/// The user turn for an image diagnosis, including the vision tool's findings
pub fn image_diagnosis_prompt(
    image_reference: &str,
    crop: Option<&str>,
    description: Option<&str>,
    vision_findings: &str,
) -> String {
    let mut parts = vec![
        "The farmer has shared a plant image for diagnosis.".to_string(),
        format!("Image reference: {}.", image_reference),
    ];
    if let Some(crop) = crop {
        parts.push(format!("Crop: {}.", crop));
    }
    if let Some(description) = description {
        parts.push(format!("Farmer description of symptoms: {}.", description));
    }

    format!(
        "Please analyze the plant health issue using the vision analysis below. \
         Use a supportive, clear tone. \
         Provide a likely diagnosis and a 2-step treatment plan.\n\n\
         {}\n\nVision analysis: {}",
        parts.join(" "),
        vision_findings
    )
}

/// The user turn asking the model to explain an optimizer result
pub fn decision_explainer_prompt(farm_summary: &str, result: &OptimizationResult) -> String {
    format!(
        "You are Prometheus, a multi-objective farm planning assistant. \
         A simple optimizer has selected the following best and alternative \
         plans for the farmer, given their preferences and resource limits.\n\n\
         Farm state summary: {}\n\n\
         Optimizer reasoning summary: {}\n\n\
         Best plan: {}: {}\n\n\
         Alternative plan: {}: {}\n\n\
         In 3-6 short sentences suitable for voice, explain:\n\
         1) What you recommend the farmer should actually do.\n\
         2) The main trade-offs between the best and alternative plans.\n\
         3) Any cautions or simple checks before committing.\n",
        farm_summary,
        result.reasoning_summary,
        result.best_plan.name,
        result.best_plan.description,
        result.alternative_plan.name,
        result.alternative_plan.description,
    )
}
