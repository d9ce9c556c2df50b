//! Modal registry: the open/closed state of every modal shown by a provider.
//!
//! Entries are created on the first show or hide of a key and are never removed for
//! the lifetime of the registry. Hiding only flips the open flag, so the unit
//! and its data stay around until the next show overwrites them.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Caller-assigned modal identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalKey(String);

impl ModalKey {
  pub fn new(key: impl Into<String>) -> Self {
    Self(key.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ModalKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for ModalKey {
  fn from(key: &str) -> Self {
    Self(key.to_string())
  }
}

impl From<String> for ModalKey {
  fn from(key: String) -> Self {
    Self(key)
  }
}

impl AsRef<str> for ModalKey {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

/// State of a single registered modal
#[derive(Clone, Debug, PartialEq)]
pub struct ModalEntry<M> {
  pub is_open: bool,
  /// `None` for keys closed before they were ever shown.
  pub modal: Option<M>,
  /// Bumped on every show, used to remount the unit when it is replaced.
  pub revision: u64,
}

/// Insertion-ordered mapping from key to modal state
#[derive(Clone, Debug)]
pub struct ModalRegistry<M> {
  entries: Vec<(ModalKey, ModalEntry<M>)>,
  next_revision: u64,
}

impl<M> ModalRegistry<M> {
  pub fn new() -> Self {
    Self {
      entries: Vec::new(),
      next_revision: 1,
    }
  }

  fn position(&self, key: &str) -> Option<usize> {
    self.entries.iter().position(|(k, _)| k.as_str() == key)
  }

  /// Open `key` with `modal`, replacing whatever was registered before.
  /// Returns the revision assigned to the new entry.
  pub fn show(&mut self, key: impl Into<ModalKey>, modal: M) -> u64 {
    let key = key.into();
    let revision = self.next_revision;
    self.next_revision += 1;

    let entry = ModalEntry {
      is_open: true,
      modal: Some(modal),
      revision,
    };

    match self.position(key.as_str()) {
      Some(idx) => {
        debug!(key = %key, revision, "modal replaced");
        self.entries[idx].1 = entry;
      }
      None => {
        debug!(key = %key, revision, "modal registered");
        self.entries.push((key, entry));
      }
    }

    revision
  }

  /// Close `key`, keeping its unit and data. A key that was never shown is
  /// registered closed with no unit, which pins its render position.
  /// Returns whether the key was already registered.
  pub fn hide(&mut self, key: &str) -> bool {
    match self.position(key) {
      Some(idx) => {
        debug!(key, "modal closed");
        self.entries[idx].1.is_open = false;
        true
      }
      None => {
        trace!(key, "hide requested for unknown modal");
        self.entries.push((
          ModalKey::from(key),
          ModalEntry {
            is_open: false,
            modal: None,
            revision: 0,
          },
        ));
        false
      }
    }
  }

  pub fn any_open(&self) -> bool {
    self.entries.iter().any(|(_, entry)| entry.is_open)
  }

  pub fn is_open(&self, key: &str) -> bool {
    self.get(key).map(|entry| entry.is_open).unwrap_or(false)
  }

  pub fn get(&self, key: &str) -> Option<&ModalEntry<M>> {
    self.position(key).map(|idx| &self.entries[idx].1)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Registered keys in first-registration order
  pub fn keys(&self) -> impl Iterator<Item = &ModalKey> {
    self.entries.iter().map(|(k, _)| k)
  }

  /// Every entry in first-registration order
  pub fn iter(&self) -> impl Iterator<Item = (&ModalKey, &ModalEntry<M>)> {
    self.entries.iter().map(|(k, entry)| (k, entry))
  }

  /// Open entries that have a unit to render, in first-registration order
  pub fn open_entries(&self) -> impl Iterator<Item = (&ModalKey, &ModalEntry<M>)> {
    self
      .iter()
      .filter(|(_, entry)| entry.is_open && entry.modal.is_some())
  }
}

impl<M> Default for ModalRegistry<M> {
  fn default() -> Self {
    Self::new()
  }
}
