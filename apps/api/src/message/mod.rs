// Outreach message generation: tone selection, prompt assembly, the LLM
// orchestration with its memo, and the endpoint.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod tone;
