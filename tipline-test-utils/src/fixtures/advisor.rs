//! Chat completion HTTP mock endpoint creation utilities.

use mockito::Mock;

use crate::{constant::CHAT_COMPLETIONS_PATH, TestContext};

impl TestContext {
    pub fn advisor<'a>(&'a mut self) -> AdvisorFixtures<'a> {
        AdvisorFixtures { setup: self }
    }
}

pub struct AdvisorFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> AdvisorFixtures<'a> {
    /// Create a mock chat completions endpoint whose first choice contains `answer`.
    ///
    /// Non-2xx statuses return an OpenAI style error body instead.
    pub fn create_chat_completion_endpoint(&mut self, status: usize, answer: &str) -> Mock {
        let body = if (200..300).contains(&status) {
            serde_json::json!({
                "id": "chatcmpl-test",
                "object": "chat.completion",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": answer },
                    "finish_reason": "stop",
                }],
            })
        } else {
            serde_json::json!({
                "error": { "message": answer, "type": "server_error" },
            })
        };

        self.setup
            .server
            .mock("POST", CHAT_COMPLETIONS_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create()
    }
}
