// Prompt fragments shared by every extraction call.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant acting as an \
    applicant tracking system parser. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to extraction prompts so absent facts stay absent.
pub const NO_INVENTION_INSTRUCTION: &str = "\
    Only extract what the document states. Use an empty list or 0 for anything \
    that is not present. Never guess or invent values.";
