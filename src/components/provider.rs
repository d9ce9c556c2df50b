//! Provider that owns the modal registry and renders open modals

use super::ErrorFallback;
use crate::config::ProviderConfig;
use crate::context::{provide_modal_context, use_modals};
use crate::modal::{ModalHandle, ModalProps};
use crate::registry::ModalKey;
use leptos::*;

/// Publishes a [`ModalContext`](crate::ModalContext) to `children` and renders
/// every open modal after them, each inside its own error boundary.
#[component]
pub fn ModalProvider(
  #[prop(optional)] config: Option<ProviderConfig>,
  children: Children,
) -> impl IntoView {
  let config = config.unwrap_or_default();
  let ctx = provide_modal_context();
  provide_context(config.clone());

  let children = children();

  view! {
    {children}
    <div id=config.container_id class=config.container_class>
      <For
        each=move || {
          ctx
            .open_entries()
            .into_iter()
            .filter_map(|(key, entry)| entry.modal.map(|modal| (key, entry.revision, modal)))
            .collect::<Vec<_>>()
        }
        key=|(key, revision, _)| (key.clone(), *revision)
        children=move |(key, _, modal)| {
          view! { <IsolatedModal modal_key=key modal=modal/> }
        }
      />
    </div>
  }
}

/// One open modal behind its own error boundary
#[component]
fn IsolatedModal(modal_key: ModalKey, modal: ModalHandle) -> impl IntoView {
  let ctx = use_modals();
  let config = use_context::<ProviderConfig>().unwrap_or_default();

  let close_key = modal_key.clone();
  let on_close = Callback::new(move |_| ctx.hide_modal(close_key.as_str()));
  let props = ModalProps {
    key: modal_key.clone(),
    is_open: true,
    on_close,
  };

  let heading = config.fallback_heading;
  let log = config.log_faults;
  let fallback = move |errors: RwSignal<Errors>| {
    view! {
      <ErrorFallback
        errors=errors
        heading=heading.clone()
        modal_key=modal_key.clone()
        log=log
      />
    }
  };

  view! {
    <ErrorBoundary fallback=fallback>
      {modal.render(props)}
    </ErrorBoundary>
  }
}
