//! Error types for modal rendering and provider configuration

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModalError>;

/// Faults raised while rendering a modal or setting up a provider.
///
/// Registry and context operations never produce these; they only surface
/// from a modal's `render` (caught by that modal's boundary) or from loading
/// a [`ProviderConfig`](crate::ProviderConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModalError {
  #[error("modal '{key}' failed to render: {message}")]
  Render { key: String, message: String },

  #[error("modal '{key}' is missing required data '{field}'")]
  MissingData { key: String, field: String },

  #[error("invalid provider config: {0}")]
  Config(String),
}

impl ModalError {
  pub fn render(key: impl Into<String>, message: impl Into<String>) -> Self {
    Self::Render {
      key: key.into(),
      message: message.into(),
    }
  }

  pub fn missing_data(key: impl Into<String>, field: impl Into<String>) -> Self {
    Self::MissingData {
      key: key.into(),
      field: field.into(),
    }
  }
}

/// Render an error and its source chain as display text for a fallback.
pub fn format_error<E>(err: &E) -> String
where
  E: std::error::Error + ?Sized,
{
  let mut out = err.to_string();
  let mut source = err.source();
  while let Some(cause) = source {
    out.push_str("\n  caused by: ");
    out.push_str(&cause.to_string());
    source = cause.source();
  }
  out
}
