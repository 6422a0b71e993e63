// LLM prompt constants for message generation.

/// System prompt — the model must return JSON only.
pub const MESSAGE_SYSTEM: &str = "You are helping the sender write an effective \
    LinkedIn connection request. Return only valid JSON.";

/// Message generation prompt template.
/// Replace: {sender_json}, {target_json}, {tone}
pub const MESSAGE_PROMPT_TEMPLATE: &str = r#"Write a personalized LinkedIn connection message to initiate a meaningful conversation for a potential job-seeker sender:
SENDER: {sender_json}
TARGET: {target_json}
TONE: {tone}

Requirements:
- Max 300 characters
- Reference something specific within their profile
- Include why the sender wants to connect with the target
- End with a question
- Format as JSON with: message.text, commonalities.key_points (list), conversation_starters (list)"#;
