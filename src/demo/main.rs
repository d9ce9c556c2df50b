//! Modal provider demo - Client-Side Rendered (WASM)

use leptos::*;
use modal_provider::components::{Modal, ModalProvider};
use modal_provider::{use_modals, ModalError, ModalProps, ModalView};

#[derive(Clone)]
enum DemoModal {
  Confirm { message: String },
  Profile { name: String, email: Option<String> },
  Broken,
}

impl ModalView for DemoModal {
  fn render(&self, props: ModalProps) -> Result<View, ModalError> {
    match self {
      DemoModal::Confirm { message } => {
        let message = message.clone();
        let close = props.on_close.clone();
        Ok(
          view! {
            <Modal title="Confirm" on_close=props.on_close>
              <p>{message}</p>
              <div class="modal-actions">
                <button class="btn btn-primary" on:click=move |_| close.call(())>"OK"</button>
              </div>
            </Modal>
          }
          .into_view(),
        )
      }
      DemoModal::Profile { name, email } => {
        let email = email
          .clone()
          .ok_or_else(|| ModalError::missing_data(props.key.as_str(), "email"))?;
        Ok(
          view! {
            <Modal title="Profile" on_close=props.on_close>
              <dl>
                <dt>"Name"</dt>
                <dd>{name.clone()}</dd>
                <dt>"Email"</dt>
                <dd>{email}</dd>
              </dl>
            </Modal>
          }
          .into_view(),
        )
      }
      DemoModal::Broken => Err(ModalError::render(props.key.as_str(), "demo fault")),
    }
  }
}

#[component]
fn Toolbar() -> impl IntoView {
  let modals = use_modals();

  view! {
    <div class="toolbar">
      <button on:click=move |_| {
        modals.show_modal("confirm", DemoModal::Confirm {
          message: "Save changes?".to_string(),
        })
      }>"Confirm"</button>
      <button on:click=move |_| {
        modals.show_modal("profile", DemoModal::Profile {
          name: "Ada".to_string(),
          email: None,
        })
      }>"Profile (missing email)"</button>
      <button on:click=move |_| modals.show_modal("broken", DemoModal::Broken)>"Broken"</button>
      <button on:click=move |_| {
        modals.hide_modal_then("confirm", || leptos::logging::log!("confirm closed"))
      }>"Close confirm"</button>
      <span class="status">
        {move || if modals.is_opened_modal() { "A modal is open" } else { "No modal open" }}
      </span>
    </div>
  }
}

#[component]
fn App() -> impl IntoView {
  view! {
    <ModalProvider>
      <Toolbar/>
    </ModalProvider>
  }
}

fn main() {
  console_error_panic_hook::set_once();
  mount_to_body(|| view! { <App/> });
}
