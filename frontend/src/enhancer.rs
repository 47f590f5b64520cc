use gloo::events::EventListener;
use web_sys::Document;

use crate::account_modal::AccountModal;
use crate::config::EnhancerConfig;
use crate::dom::{self, BindingError, PageBindings};
use crate::ledger_modal::LedgerModal;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::{form_guard, reveal};

const COMPONENT: &str = "enhancer";

/// What `init` wired, for logging and tests.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InitReport {
    pub reveal_items: usize,
    pub loading_forms: usize,
    pub account_modal: bool,
    pub ledger_modal: bool,
}

/// Entry point: run `init` once the document has been parsed.
pub fn start() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            gloo::console::error!(format!("[{}] {}", COMPONENT, err));
            return;
        }
    };

    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_| run(document)).forget();
    } else {
        run(document);
    }
}

fn run(document: Document) {
    let config = match dom::body(&document) {
        Ok(body) => EnhancerConfig::from_body(&body),
        Err(_) => EnhancerConfig::default(),
    };
    if let Err(err) = init(document, config) {
        Logger::error_with_component(COMPONENT, &format!("Page enhancement failed: {}", err));
    }
}

/// Wire every behavior onto `document`.
///
/// Reveal and form guard always run. A modal whose elements are missing is
/// skipped with a warning.
pub fn init(document: Document, config: EnhancerConfig) -> Result<InitReport, BindingError> {
    Logger::set_level(config.log_level);
    let dom_config = &config.dom;
    let bindings = PageBindings::bind(document, dom_config)?;
    let api = ApiClient::with_base_url(config.api_base_url.clone());

    let mut report = InitReport {
        reveal_items: reveal::schedule(
            bindings.reveal_items,
            config.reveal_step_ms,
            &dom_config.visible_class,
        ),
        loading_forms: form_guard::guard(
            bindings.loading_forms,
            &dom_config.loading_class,
            &dom_config.submit_button_selector,
        ),
        ..InitReport::default()
    };

    match bindings.account {
        Ok(account) => {
            AccountModal::wire(&bindings.document, account, dom_config, api.clone());
            report.account_modal = true;
        }
        Err(err) => {
            Logger::warn_with_component(
                COMPONENT,
                &format!("Account modal not wired: {}", err),
            );
        }
    }

    match bindings.ledger {
        Ok(ledger) => {
            LedgerModal::wire(&bindings.document, ledger, dom_config, api);
            report.ledger_modal = true;
        }
        Err(err) => {
            Logger::warn_with_component(
                COMPONENT,
                &format!("Ledger modal not wired: {}", err),
            );
        }
    }

    Logger::info_with_component(COMPONENT, &format!("Page enhanced: {:?}", report));
    Ok(report)
}
