use std::sync::Arc;

use log::{info, warn};

use crate::features::ai::error::AiError;
use crate::features::ai::provider::{AiProvider, ImageOptions};

/// Chat and image generation over a single injected provider.
#[derive(Clone)]
pub struct AiService {
    provider: Arc<dyn AiProvider>,
}

impl AiService {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub async fn chat(&self, query: &str) -> Result<String, AiError> {
        info!("Forwarding chat query ({} chars)", query.len());
        self.provider.complete(query).await
    }

    /// Generates one image with [`ImageOptions::FIXED`] and returns the URL
    /// of the first result.
    pub async fn generate_image(&self, instruction: &str) -> Result<String, AiError> {
        info!("Forwarding image instruction: {}", instruction);
        let images = self
            .provider
            .generate_images(instruction, &ImageOptions::FIXED)
            .await?;

        match images.into_iter().next().and_then(|image| image.url) {
            Some(url) => Ok(url),
            None => {
                warn!("Image response carried no URL in its first result");
                Err(AiError::MissingImageUrl)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::ai::provider::GeneratedImage;
    use async_trait::async_trait;

    struct FixedProvider {
        images: Vec<GeneratedImage>,
    }

    #[async_trait]
    impl AiProvider for FixedProvider {
        async fn complete(&self, prompt: &str) -> Result<String, AiError> {
            Ok(prompt.to_uppercase())
        }

        async fn generate_images(
            &self,
            _instruction: &str,
            _options: &ImageOptions,
        ) -> Result<Vec<GeneratedImage>, AiError> {
            Ok(self.images.clone())
        }
    }

    fn service(urls: &[Option<&str>]) -> AiService {
        let images = urls
            .iter()
            .map(|url| GeneratedImage {
                url: url.map(str::to_string),
                revised_prompt: None,
            })
            .collect();
        AiService::new(Arc::new(FixedProvider { images }))
    }

    #[actix_web::test]
    async fn chat_returns_provider_text() {
        let answer = service(&[]).chat("hello").await.unwrap();
        assert_eq!(answer, "HELLO");
    }

    #[actix_web::test]
    async fn first_result_url_wins() {
        let url = service(&[Some("https://a.example/1.png"), Some("https://a.example/2.png")])
            .generate_image("two cats")
            .await
            .unwrap();
        assert_eq!(url, "https://a.example/1.png");
    }

    #[actix_web::test]
    async fn first_result_without_url_is_an_error() {
        let err = service(&[None, Some("https://a.example/2.png")])
            .generate_image("two cats")
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::MissingImageUrl));
    }
}
