//! The contract between the provider and the modals it renders

use crate::error::ModalError;
use crate::registry::ModalKey;
use leptos::*;
use std::fmt;
use std::rc::Rc;

/// Props handed to a modal when its provider renders it
#[derive(Clone)]
pub struct ModalProps {
  pub key: ModalKey,
  pub is_open: bool,
  /// Closes this modal; bound to `key` by the provider.
  pub on_close: Callback<()>,
}

impl ModalProps {
  pub fn close(&self) {
    self.on_close.call(());
  }
}

/// A renderable modal carrying its own data.
///
/// Applications usually implement this on an enum with one variant per
/// dialog, each holding the typed data that dialog needs. Returning `Err`
/// from `render` is caught by the modal's own error boundary; siblings keep
/// rendering.
pub trait ModalView: 'static {
  fn render(&self, props: ModalProps) -> Result<View, ModalError>;
}

/// Shared, type-erased handle to a modal stored in the registry
#[derive(Clone)]
pub struct ModalHandle(Rc<dyn ModalView>);

impl ModalHandle {
  pub fn new(modal: impl ModalView) -> Self {
    Self(Rc::new(modal))
  }

  pub fn render(&self, props: ModalProps) -> Result<View, ModalError> {
    self.0.render(props)
  }

  /// Whether both handles point at the same modal value
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }
}

impl<M: ModalView> From<M> for ModalHandle {
  fn from(modal: M) -> Self {
    Self::new(modal)
  }
}

impl fmt::Debug for ModalHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("ModalHandle").finish_non_exhaustive()
  }
}
