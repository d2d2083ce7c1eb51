use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::server::{
    error::advisor::AdvisorError, model::db::CrimeTypeModel,
    service::classifier::CrimeTypeAdvisor,
};

pub static OPENAI_MODEL: &str = "gpt-4o-mini";

static CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Serialize)]
struct Candidate<'a> {
    id: i32,
    major: &'a str,
    minor: Option<&'a str>,
}

/// Crime type advisor backed by an OpenAI compatible chat completions API
pub struct OpenAiAdvisor {
    http_client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiAdvisor {
    pub fn new(http_client: reqwest::Client, api_key: String, base_url: &str) -> Self {
        Self {
            http_client,
            api_key,
            endpoint: format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                CHAT_COMPLETIONS_PATH
            ),
        }
    }

    fn build_prompt(content: &str, candidates: &[CrimeTypeModel]) -> String {
        let candidates: Vec<Candidate> = candidates
            .iter()
            .map(|c| Candidate {
                id: c.id,
                major: &c.major,
                minor: c.minor.as_deref(),
            })
            .collect();
        // Serializing borrowed strings & integers cannot fail
        let candidates = serde_json::to_string(&candidates).unwrap_or_default();

        format!(
            "Classify the following crime report into exactly one of these crime types.\n\
             Crime types: {}\n\
             Report: {}\n\
             Answer with the id of the crime type only.",
            candidates, content
        )
    }

    async fn request_suggestion(
        &self,
        content: &str,
        candidates: &[CrimeTypeModel],
    ) -> Result<i32, AdvisorError> {
        let request = ChatCompletionRequest {
            model: OPENAI_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Some(
                        "You classify citizen crime reports. Reply with a single number."
                            .to_string(),
                    ),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Some(Self::build_prompt(content, candidates)),
                },
            ],
            max_tokens: 10,
            temperature: 0.0,
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdvisorError::Status(status.as_u16()));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let answer = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AdvisorError::EmptyResponse)?;

        let crime_type_id = match answer.trim().parse::<i32>() {
            Ok(id) => id,
            Err(_) => return Err(AdvisorError::UnparseableAnswer(answer)),
        };

        if !candidates.iter().any(|c| c.id == crime_type_id) {
            return Err(AdvisorError::UnknownCandidate(crime_type_id));
        }

        Ok(crime_type_id)
    }
}

#[async_trait]
impl CrimeTypeAdvisor for OpenAiAdvisor {
    async fn suggest(&self, content: &str, candidates: &[CrimeTypeModel]) -> Option<i32> {
        if candidates.is_empty() {
            return None;
        }

        match self.request_suggestion(content, candidates).await {
            Ok(crime_type_id) => {
                tracing::debug!(crime_type_id, "Crime type advisor suggested a crime type");
                Some(crime_type_id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Crime type advisor failed, keeping submitted crime type");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tipline_test_utils::prelude::*;

    use super::OpenAiAdvisor;
    use crate::server::{model::db::CrimeTypeModel, service::classifier::CrimeTypeAdvisor};

    fn candidates() -> Vec<CrimeTypeModel> {
        vec![
            CrimeTypeModel {
                id: 1,
                major: "Theft".to_string(),
                minor: Some("Pickpocketing".to_string()),
            },
            CrimeTypeModel {
                id: 2,
                major: "Assault".to_string(),
                minor: None,
            },
        ]
    }

    fn advisor(test: &TestContext) -> OpenAiAdvisor {
        OpenAiAdvisor::new(
            reqwest::Client::new(),
            constant::TEST_OPENAI_API_KEY.to_string(),
            &test.server_url(),
        )
    }

    /// Expect the trimmed answer to be returned when it is one of the candidates
    #[tokio::test]
    async fn returns_candidate_suggestion() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_advisor_endpoint(200, " 2\n")
            .build()
            .await?;

        let result = advisor(&test)
            .suggest("Someone punched me outside the bar", &candidates())
            .await;

        assert_eq!(result, Some(2));
        test.assert_mocks();

        Ok(())
    }

    /// Expect None when the suggested ID is not among the candidates
    #[tokio::test]
    async fn ignores_unknown_candidate() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_advisor_endpoint(200, "99")
            .build()
            .await?;

        let result = advisor(&test).suggest("Report", &candidates()).await;

        assert!(result.is_none());

        Ok(())
    }

    /// Expect None when the answer is not a number
    #[tokio::test]
    async fn ignores_unparseable_answer() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_advisor_endpoint(200, "Theft")
            .build()
            .await?;

        let result = advisor(&test).suggest("Report", &candidates()).await;

        assert!(result.is_none());

        Ok(())
    }

    /// Expect None when the API responds with an error status
    #[tokio::test]
    async fn degrades_on_server_error() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_advisor_endpoint(500, "The server had an error")
            .build()
            .await?;

        let result = advisor(&test).suggest("Report", &candidates()).await;

        assert!(result.is_none());
        test.assert_mocks();

        Ok(())
    }

    /// Expect None when the API cannot be reached
    #[tokio::test]
    async fn degrades_when_unreachable() {
        let advisor = OpenAiAdvisor::new(
            reqwest::Client::new(),
            constant::TEST_OPENAI_API_KEY.to_string(),
            "http://127.0.0.1:1",
        );

        let result = advisor.suggest("Report", &candidates()).await;

        assert!(result.is_none());
    }

    /// Expect no request to be made when there is nothing to choose from
    #[tokio::test]
    async fn skips_request_without_candidates() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = advisor(&test).suggest("Report", &[]).await;

        assert!(result.is_none());

        Ok(())
    }
}
