//! Modal registry for Leptos front-ends.
//!
//! Wrap the application in a [`ModalProvider`](components::ModalProvider),
//! then open and close dialogs from anywhere below it through the
//! [`ModalContext`] returned by [`use_modals`]. Every open modal renders in
//! its own error boundary, so a faulting dialog shows an alert without taking
//! down its siblings or the rest of the page.

pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod modal;
pub mod registry;

pub use config::ProviderConfig;
pub use context::{provide_modal_context, try_use_modals, use_modals, ModalContext};
pub use error::{format_error, ModalError, Result};
pub use modal::{ModalHandle, ModalProps, ModalView};
pub use registry::{ModalEntry, ModalKey, ModalRegistry};
