//! Leptos components

mod fallback;
mod modal;
mod provider;

pub use fallback::ErrorFallback;
pub use modal::Modal;
pub use provider::ModalProvider;
