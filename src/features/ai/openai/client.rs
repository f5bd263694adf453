use async_trait::async_trait;
use log::{error, info};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::features::ai::error::AiError;
use crate::features::ai::openai::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ImageGenerationRequest,
    ImageGenerationResponse,
};
use crate::features::ai::provider::{AiProvider, GeneratedImage, ImageOptions};
use crate::features::app::config::OpenAiConfig;

pub struct OpenAiClient {
    http: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, AiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        info!("POST {}", url);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!("Error calling {}: {}", url, e);
                AiError::Http(e)
            })?;

        Self::read_success(resp).await
    }

    async fn read_success<R: DeserializeOwned>(resp: Response) -> Result<R, AiError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_else(|_| "No response body".to_string());
            error!("AI provider responded with status {}: {}", status, body);
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        info!("AI provider responded with status {}", status);
        Ok(resp.json::<R>().await?)
    }
}

#[async_trait]
impl AiProvider for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let request = ChatCompletionRequest {
            model: self.config.chat_model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response: ChatCompletionResponse = self.post_json("chat/completions", &request).await?;
        if let Some(usage) = &response.usage {
            info!(
                "Completion used {} prompt + {} completion tokens",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AiError::EmptyCompletion)
    }

    async fn generate_images(
        &self,
        instruction: &str,
        options: &ImageOptions,
    ) -> Result<Vec<GeneratedImage>, AiError> {
        let request = ImageGenerationRequest {
            model: self.config.image_model.clone(),
            prompt: instruction.to_string(),
            n: options.n,
            size: options.size(),
            quality: options.quality.as_str().to_string(),
            response_format: "url".to_string(),
        };

        let response: ImageGenerationResponse =
            self.post_json("images/generations", &request).await?;

        Ok(response
            .data
            .into_iter()
            .map(|data| GeneratedImage {
                url: data.url,
                revised_prompt: data.revised_prompt,
            })
            .collect())
    }
}
