//! External collaborators: text generation, video search, document extraction.
//!
//! Only their call/response contracts live here. A host wires concrete
//! implementations into `AppState`; without one, the endpoints depending on it
//! answer 503.

use async_trait::async_trait;

use crate::domain::VideoRef;
use crate::error::CollabError;

/// Accepts a prompt plus optional free-form context and returns generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
  async fn generate(&self, prompt: &str, context: Option<&str>) -> Result<String, CollabError>;
}

/// Looks up videos for a topic, best match first.
#[async_trait]
pub trait VideoSearch: Send + Sync {
  async fn search(&self, topic: &str) -> Result<Vec<VideoRef>, CollabError>;
}

/// Fetches a document by URL and returns its plain text.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
  async fn extract(&self, file_url: &str) -> Result<String, CollabError>;
}
