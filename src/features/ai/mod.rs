pub mod error;
pub mod openai;
pub mod provider;
pub mod service;

pub use error::AiError;
pub use provider::{AiProvider, GeneratedImage, ImageOptions, ImageQuality};
pub use service::AiService;
