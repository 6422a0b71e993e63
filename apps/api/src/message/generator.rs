//! Message generation — serializes the sender and target records into one
//! LLM call and reshapes the reply.
//!
//! Upstream and parse failures come back as error values inside the
//! message body, not as request failures; the HTTP caller still gets its
//! 200 and can inspect the raw reply.

use std::sync::Mutex;

use linked_hash_map::LinkedHashMap;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, LlmClient, LlmError};
use crate::message::prompts::{MESSAGE_PROMPT_TEMPLATE, MESSAGE_SYSTEM};
use crate::message::tone::Tone;
use crate::models::profile::ProfileRecord;

/// Bounded memo over (sender, target, tone); identical inputs reuse the
/// previous generation instead of a second LLM call. Only successfully
/// parsed messages are memoized so transient failures are not pinned.
const MEMO_CAPACITY: usize = 100;

type MemoKey = (String, String, Tone);

pub struct MessageService {
    llm: LlmClient,
    memo: Mutex<LinkedHashMap<MemoKey, Value>>,
}

impl MessageService {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            memo: Mutex::new(LinkedHashMap::new()),
        }
    }

    /// Generates the outreach message structure for one sender/target pair.
    ///
    /// Sender and target serialize with stable key ordering, so identical
    /// inputs produce identical prompts and hit the memo.
    pub async fn generate(
        &self,
        sender: &Value,
        target: &ProfileRecord,
        tone: Tone,
    ) -> Result<Value, AppError> {
        let sender_json = serde_json::to_string(sender)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize sender: {e}")))?;
        let target_json = serde_json::to_string(target)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize target: {e}")))?;

        let key = (sender_json.clone(), target_json.clone(), tone);
        if let Some(cached) = self
            .memo
            .lock()
            .expect("message memo lock poisoned")
            .get_refresh(&key)
        {
            debug!("Message memo hit");
            return Ok(cached.clone());
        }

        let prompt = MESSAGE_PROMPT_TEMPLATE
            .replace("{sender_json}", &sender_json)
            .replace("{target_json}", &target_json)
            .replace("{tone}", tone.as_str());

        let response = match self.llm.call(&prompt, MESSAGE_SYSTEM).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Generation call failed: {e}");
                return Ok(json!({ "error": e.to_string() }));
            }
        };

        let Some(text) = response.text() else {
            warn!("Generation reply had no content");
            return Ok(json!({ "error": LlmError::EmptyContent.to_string() }));
        };

        let message = parse_generated_message(text);
        if message.get("error").is_none() {
            let mut memo = self.memo.lock().expect("message memo lock poisoned");
            if memo.len() >= MEMO_CAPACITY {
                memo.pop_front();
            }
            memo.insert(key, message.clone());
        }
        Ok(message)
    }
}

/// Parses the generation reply as JSON. A reply that is not valid JSON is
/// preserved verbatim next to the error so the caller can diagnose it.
pub(crate) fn parse_generated_message(text: &str) -> Value {
    match serde_json::from_str(strip_json_fences(text)) {
        Ok(message) => message,
        Err(e) => {
            warn!("Generation reply was not valid JSON: {e}");
            json!({
                "error": format!("Failed to parse generation output: {e}"),
                "raw_response": text,
            })
        }
    }
}
