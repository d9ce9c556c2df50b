//! Fallback shown in place of a modal whose render faulted

use crate::error::format_error;
use crate::registry::ModalKey;
use leptos::*;

#[component]
pub fn ErrorFallback(
  /// Errors collected by the enclosing `ErrorBoundary`
  errors: RwSignal<Errors>,
  #[prop(into)] heading: String,
  #[prop(optional)] modal_key: Option<ModalKey>,
  #[prop(default = true)] log: bool,
) -> impl IntoView {
  let messages = move || {
    errors
      .get()
      .into_iter()
      .map(|(_, err)| format_error(&*err.into_inner()))
      .collect::<Vec<_>>()
      .join("\n")
  };

  if log {
    let label = modal_key
      .as_ref()
      .map(ModalKey::to_string)
      .unwrap_or_else(|| "<unkeyed>".to_string());
    for (_, err) in errors.get_untracked() {
      leptos::logging::error!("Modal {} faulted: {}", label, err);
    }
  }

  view! {
    <div role="alert" class="modal-fault">
      <p>{heading}</p>
      <pre>{messages}</pre>
    </div>
  }
}
