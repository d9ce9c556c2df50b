//! Modal context shared with every descendant of a provider

use crate::modal::ModalHandle;
use crate::registry::{ModalEntry, ModalKey, ModalRegistry};
use leptos::*;
use tracing::debug;

/// Handle to the registry of the nearest [`ModalProvider`](crate::components::ModalProvider).
///
/// The handle is `Copy` and its identity does not change across renders, so
/// it can be captured by event handlers freely.
#[derive(Clone, Copy)]
pub struct ModalContext {
  registry: RwSignal<ModalRegistry<ModalHandle>>,
  any_open: Memo<bool>,
}

impl ModalContext {
  /// Create a fresh registry owned by the current reactive scope.
  pub fn new() -> Self {
    let registry = create_rw_signal(ModalRegistry::new());
    let any_open = create_memo(move |_| registry.with(ModalRegistry::any_open));
    Self { registry, any_open }
  }

  /// Open `key` with `modal`, replacing any previous unit and data.
  pub fn show_modal(&self, key: impl Into<ModalKey>, modal: impl Into<ModalHandle>) {
    let key = key.into();
    let handle = modal.into();
    self.registry.update(|registry| {
      registry.show(key, handle);
    });
  }

  /// Close `key`. Unknown keys are registered closed.
  pub fn hide_modal(&self, key: &str) {
    self.registry.update(|registry| {
      registry.hide(key);
    });
  }

  /// Close `key`, then run `on_close`.
  pub fn hide_modal_then(&self, key: &str, on_close: impl FnOnce()) {
    self.hide_modal(key);
    debug!(key, "running close callback");
    on_close();
  }

  /// True while at least one modal is open. Tracks reactively.
  pub fn is_opened_modal(&self) -> bool {
    self.any_open.get()
  }

  pub fn is_open(&self, key: &str) -> bool {
    self.registry.with(|registry| registry.is_open(key))
  }

  /// Snapshot of every registered entry in first-registration order
  pub fn entries(&self) -> Vec<(ModalKey, ModalEntry<ModalHandle>)> {
    self.registry.with(|registry| {
      registry
        .iter()
        .map(|(key, entry)| (key.clone(), entry.clone()))
        .collect()
    })
  }

  /// Snapshot of the open entries in first-registration order
  pub fn open_entries(&self) -> Vec<(ModalKey, ModalEntry<ModalHandle>)> {
    self.registry.with(|registry| {
      registry
        .open_entries()
        .map(|(key, entry)| (key.clone(), entry.clone()))
        .collect()
    })
  }

  pub fn with_registry<R>(&self, f: impl FnOnce(&ModalRegistry<ModalHandle>) -> R) -> R {
    self.registry.with(f)
  }
}

impl Default for ModalContext {
  fn default() -> Self {
    Self::new()
  }
}

/// Create a registry and publish it to descendants of the current scope.
pub fn provide_modal_context() -> ModalContext {
  let ctx = ModalContext::new();
  provide_context(ctx);
  ctx
}

pub fn try_use_modals() -> Option<ModalContext> {
  use_context::<ModalContext>()
}

/// Context of the nearest provider. Panics outside a `ModalProvider`.
pub fn use_modals() -> ModalContext {
  use_context::<ModalContext>().expect("ModalContext not found")
}
