#![cfg(not(feature = "csr"))]

use leptos::*;
use modal_provider::components::{Modal, ModalProvider};
use modal_provider::{use_modals, ModalContext, ModalError, ModalProps, ModalView, ProviderConfig};

#[derive(Clone)]
enum TestModal {
  Greeting { name: String },
  Dialog { body: String },
  Closable {
    label: String,
    close: StoredValue<Option<Callback<()>>>,
  },
  Broken,
}

impl ModalView for TestModal {
  fn render(&self, props: ModalProps) -> Result<View, ModalError> {
    match self {
      TestModal::Greeting { name } => {
        let text = format!("Hello {}", name);
        Ok(view! { <p class="greeting">{text}</p> }.into_view())
      }
      TestModal::Dialog { body } => {
        let body = body.clone();
        Ok(
          view! {
            <Modal title="Dialog" on_close=props.on_close>
              <span>{body}</span>
            </Modal>
          }
          .into_view(),
        )
      }
      TestModal::Closable { label, close } => {
        close.set_value(Some(props.on_close));
        let label = label.clone();
        Ok(view! { <p>{label}</p> }.into_view())
      }
      TestModal::Broken => Err(ModalError::render(props.key.as_str(), "kaboom")),
    }
  }
}

#[component]
fn Opener(
  opens: Vec<(&'static str, TestModal)>,
  #[prop(optional)] hides: Vec<&'static str>,
  captured: StoredValue<Option<ModalContext>>,
) -> impl IntoView {
  let modals = use_modals();
  for (key, modal) in opens {
    modals.show_modal(key, modal);
  }
  for key in hides {
    modals.hide_modal(key);
  }
  captured.set_value(Some(modals));
  view! { <main>"application"</main> }
}

fn render_with(
  config: ProviderConfig,
  opens: Vec<(&'static str, TestModal)>,
  hides: Vec<&'static str>,
) -> (String, ModalContext) {
  let captured = store_value(None);
  let html = view! {
    <ModalProvider config=config>
      <Opener opens=opens hides=hides captured=captured/>
    </ModalProvider>
  }
  .into_view()
  .render_to_string()
  .to_string();
  let ctx = captured
    .get_value()
    .expect("Opener did not run inside the provider");
  (html, ctx)
}

#[test]
fn test_children_render_without_modals() {
  let runtime = create_runtime();

  let (html, ctx) = render_with(ProviderConfig::default(), vec![], vec![]);
  assert!(html.contains("application"));
  assert!(html.contains("modal-container"));
  assert!(!html.contains("role=\"alert\""));
  assert!(!ctx.is_opened_modal());

  runtime.dispose();
}

#[test]
fn test_open_modal_renders_after_children() {
  let runtime = create_runtime();

  let (html, ctx) = render_with(
    ProviderConfig::default(),
    vec![(
      "greet",
      TestModal::Greeting {
        name: "Ada".to_string(),
      },
    )],
    vec![],
  );
  let app_at = html.find("application").unwrap();
  let modal_at = html.find("Hello Ada").unwrap();
  assert!(app_at < modal_at);
  assert!(ctx.is_opened_modal());

  runtime.dispose();
}

#[test]
fn test_hidden_modal_is_not_rendered() {
  let runtime = create_runtime();

  let (html, ctx) = render_with(
    ProviderConfig::default(),
    vec![(
      "greet",
      TestModal::Greeting {
        name: "Ada".to_string(),
      },
    )],
    vec!["greet"],
  );
  assert!(!html.contains("Hello Ada"));
  assert!(!ctx.is_opened_modal());
  assert_eq!(ctx.entries().len(), 1);

  runtime.dispose();
}

#[test]
fn test_faulty_modal_shows_fallback_and_stays_open() {
  let runtime = create_runtime();

  let (html, ctx) = render_with(
    ProviderConfig::default(),
    vec![("broken", TestModal::Broken)],
    vec![],
  );
  assert!(html.contains("role=\"alert\""));
  assert!(html.contains("Something went wrong:"));
  assert!(html.contains("kaboom"));
  assert!(ctx.is_open("broken"));
  assert!(ctx.is_opened_modal());

  runtime.dispose();
}

#[test]
fn test_fault_is_isolated_from_siblings() {
  let runtime = create_runtime();

  let (html, _ctx) = render_with(
    ProviderConfig::default(),
    vec![
      (
        "greet",
        TestModal::Greeting {
          name: "Grace".to_string(),
        },
      ),
      ("broken", TestModal::Broken),
      (
        "dialog",
        TestModal::Dialog {
          body: "still here".to_string(),
        },
      ),
    ],
    vec![],
  );
  assert!(html.contains("application"));
  assert!(html.contains("Hello Grace"));
  assert!(html.contains("still here"));
  assert_eq!(html.matches("role=\"alert\"").count(), 1);

  runtime.dispose();
}

#[test]
fn test_config_controls_container_and_heading() {
  let runtime = create_runtime();

  let config = ProviderConfig {
    container_id: "dialogs".to_string(),
    fallback_heading: "Dialog crashed".to_string(),
    log_faults: false,
    ..ProviderConfig::default()
  };
  let (html, _ctx) = render_with(config, vec![("broken", TestModal::Broken)], vec![]);
  assert!(html.contains("id=\"dialogs\""));
  assert!(html.contains("Dialog crashed"));
  assert!(!html.contains("Something went wrong:"));

  runtime.dispose();
}

#[test]
fn test_modal_shell_renders_chrome() {
  let runtime = create_runtime();

  let (html, _ctx) = render_with(
    ProviderConfig::default(),
    vec![(
      "dialog",
      TestModal::Dialog {
        body: "body text".to_string(),
      },
    )],
    vec![],
  );
  assert!(html.contains("modal-overlay"));
  assert!(html.contains("role=\"dialog\""));
  assert!(html.contains("Dialog"));
  assert!(html.contains("body text"));

  runtime.dispose();
}

#[test]
fn test_bound_close_hides_only_its_key() {
  let runtime = create_runtime();

  let close_a = store_value(None);
  let close_b = store_value(None);
  let (html, ctx) = render_with(
    ProviderConfig::default(),
    vec![
      (
        "a",
        TestModal::Closable {
          label: "first".to_string(),
          close: close_a,
        },
      ),
      (
        "b",
        TestModal::Closable {
          label: "second".to_string(),
          close: close_b,
        },
      ),
    ],
    vec![],
  );
  assert!(html.contains("first"));
  assert!(html.contains("second"));

  let on_close: Callback<()> = close_a.get_value().expect("modal a was not rendered");
  on_close.call(());

  assert!(!ctx.is_open("a"));
  assert!(ctx.is_open("b"));
  assert!(ctx.is_opened_modal());
  assert!(close_b.get_value().is_some());

  runtime.dispose();
}

#[test]
fn test_backdrop_close_can_be_disabled() {
  let runtime = create_runtime();

  let dialog = || {
    vec![(
      "dialog",
      TestModal::Dialog {
        body: "body".to_string(),
      },
    )]
  };

  let (html, _ctx) = render_with(ProviderConfig::default(), dialog(), vec![]);
  assert!(!html.contains("data-backdrop=\"static\""));

  let config = ProviderConfig {
    close_on_backdrop: false,
    ..ProviderConfig::default()
  };
  let (html, _ctx) = render_with(config, dialog(), vec![]);
  assert!(html.contains("data-backdrop=\"static\""));

  runtime.dispose();
}
