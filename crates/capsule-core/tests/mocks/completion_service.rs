use std::sync::{Arc, Mutex};

use capsule_core::{CapsuleError, CompletionService};

#[derive(Clone)]
pub struct MockCompletionService {
    pub response: String,
    /// `(api_key, prompt)` per call
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_with: Option<String>,
}

impl MockCompletionService {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            response: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl CompletionService for MockCompletionService {
    async fn complete(&self, api_key: &str, prompt: &str) -> capsule_core::Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), prompt.to_string()));
        if let Some(ref msg) = self.fail_with {
            return Err(CapsuleError::Api {
                status: 429,
                message: msg.clone(),
            });
        }
        Ok(self.response.clone())
    }

    fn name(&self) -> &str {
        "mock-gpt"
    }
}
