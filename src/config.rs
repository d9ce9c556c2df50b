use crate::error::{ModalError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Presentation settings for a [`ModalProvider`](crate::components::ModalProvider)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
  /// DOM id of the element wrapping rendered modals
  #[serde(default = "default_container_id")]
  pub container_id: String,
  #[serde(default = "default_container_class")]
  pub container_class: String,
  /// First line of the alert shown when a modal faults
  #[serde(default = "default_fallback_heading")]
  pub fallback_heading: String,
  /// Clicking the overlay outside a dialog closes it
  #[serde(default = "default_true")]
  pub close_on_backdrop: bool,
  /// Log caught render faults to the console
  #[serde(default = "default_true")]
  pub log_faults: bool,
}

fn default_container_id() -> String {
  "modal-container".to_string()
}

fn default_container_class() -> String {
  "modal-container".to_string()
}

fn default_fallback_heading() -> String {
  "Something went wrong:".to_string()
}

fn default_true() -> bool {
  true
}

impl Default for ProviderConfig {
  fn default() -> Self {
    Self {
      container_id: default_container_id(),
      container_class: default_container_class(),
      fallback_heading: default_fallback_heading(),
      close_on_backdrop: true,
      log_faults: true,
    }
  }
}

impl ProviderConfig {
  pub fn from_yaml_str(yaml: &str) -> Result<Self> {
    serde_yaml::from_str(yaml).map_err(|e| ModalError::Config(e.to_string()))
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
      .map_err(|e| ModalError::Config(format!("{}: {}", path.display(), e)))?;
    Self::from_yaml_str(&content)
  }
}
