//! External API integrations

pub mod gemini;
pub mod inference;

pub use gemini::GeminiClient;
pub use inference::InferenceClient;
