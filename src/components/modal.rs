//! Dialog chrome for modals rendered by a provider

use crate::config::ProviderConfig;
use leptos::*;

/// Overlay, header and body shared by the application's dialogs.
///
/// Pass the `on_close` callback from the modal's props so the close button
/// (and the backdrop, unless disabled in the provider config) close the
/// modal through its provider.
#[component]
pub fn Modal(
  #[prop(into)] title: String,
  on_close: Callback<()>,
  #[prop(optional, into)] class: Option<String>,
  children: Children,
) -> impl IntoView {
  let close_on_backdrop = use_context::<ProviderConfig>()
    .map(|config| config.close_on_backdrop)
    .unwrap_or(true);
  let dialog_class = match class {
    Some(extra) => format!("modal {}", extra),
    None => "modal".to_string(),
  };

  view! {
    <div
      class="modal-overlay active"
      data-backdrop=(!close_on_backdrop).then_some("static")
      on:click=move |_| {
        if close_on_backdrop {
          on_close.call(());
        }
      }
    >
      <div
        class=dialog_class
        role="dialog"
        aria-modal="true"
        on:click=|e| e.stop_propagation()
      >
        <div class="modal-header">
          <h3>{title}</h3>
          <button
            class="modal-close"
            aria-label="Close"
            on:click=move |_| on_close.call(())
          >
            "×"
          </button>
        </div>
        <div class="modal-body">
          {children()}
        </div>
      </div>
    </div>
  }
}
