use async_trait::async_trait;

use crate::features::ai::error::AiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageQuality {
    Hd,
    Standard,
}

impl ImageQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageQuality::Hd => "hd",
            ImageQuality::Standard => "standard",
        }
    }
}

/// Generation options sent along with every image instruction.
///
/// Providers accept 1024x1024, 1024x1536 and 1536x1024 with either quality;
/// nothing here checks that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageOptions {
    pub width: u32,
    pub height: u32,
    pub quality: ImageQuality,
    pub n: u32,
}

impl ImageOptions {
    pub const FIXED: ImageOptions = ImageOptions {
        width: 1024,
        height: 1024,
        quality: ImageQuality::Hd,
        n: 1,
    };

    /// `WIDTHxHEIGHT`, the form image APIs expect.
    pub fn size(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self::FIXED
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: Option<String>,
    pub revised_prompt: Option<String>,
}

/// The external model API: single-turn chat completion and image generation.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Sends `prompt` as one user message and returns the completion text.
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;

    async fn generate_images(
        &self,
        instruction: &str,
        options: &ImageOptions,
    ) -> Result<Vec<GeneratedImage>, AiError>;
}
