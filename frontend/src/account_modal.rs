use std::rc::Rc;

use gloo::events::EventListener;
use loyalty_shared::{plan_account_open, resolve_account_id, ModalContent, OpenPlan};
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::config::DomConfig;
use crate::dom::AccountModalBindings;
use crate::modal::ModalController;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "account-modal";

/// Profile dialog opened from the profile button.
pub struct AccountModal {
    bindings: AccountModalBindings,
    body_account_attribute: String,
    modal: Rc<ModalController>,
    api: ApiClient,
}

impl AccountModal {
    pub fn wire(
        document: &Document,
        bindings: AccountModalBindings,
        dom: &DomConfig,
        api: ApiClient,
    ) -> Rc<Self> {
        let modal = ModalController::mount(COMPONENT, &bindings.modal, &dom.hidden_class);
        modal.wire_close_triggers(document, &bindings.modal);

        let controller = Rc::new(Self {
            bindings,
            body_account_attribute: dom.body_account_attribute.clone(),
            modal,
            api,
        });

        let on_click = Rc::clone(&controller);
        EventListener::new(&controller.bindings.trigger, "click", move |_| {
            on_click.open();
        })
        .forget();

        controller
    }

    #[cfg(test)]
    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    /// The account to show: the dashboard input if filled, else the body attribute.
    pub fn resolve_account_id(&self) -> Option<String> {
        let from_input = self.bindings.account_input.as_ref().map(|input| input.value());
        let from_body = self.bindings.body.get_attribute(&self.body_account_attribute);
        resolve_account_id(from_input.as_deref(), from_body.as_deref())
    }

    /// Show the modal right away, then fill it once the account arrives.
    pub fn open(&self) -> OpenPlan {
        let plan = plan_account_open(self.resolve_account_id());
        self.modal.show(plan.content.clone());

        match &plan.fetch_id {
            Some(account_id) => {
                Logger::debug_with_component(COMPONENT, &format!("Loading account {}", account_id));
                let api = self.api.clone();
                let modal = Rc::clone(&self.modal);
                let account_id = account_id.clone();
                spawn_local(async move {
                    let result = api.get_account(&account_id).await;
                    if let Err(err) = &result {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Error loading account details: {}", err),
                        );
                    }
                    modal.set_content(ModalContent::from_account_result(&result));
                });
            }
            None => Logger::info_with_component(COMPONENT, "No account selected"),
        }

        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::tests::{fixture, ACCOUNT_MODAL};
    use gloo::timers::future::TimeoutFuture;
    use loyalty_shared::view::ACCOUNT_ERROR_MESSAGE;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn wired(extra_html: &str) -> (Document, Rc<AccountModal>) {
        let document = fixture(&format!("{}{}", extra_html, ACCOUNT_MODAL));
        document.body().unwrap().remove_attribute("data-account-id").unwrap();
        let dom = DomConfig::default();
        let bindings = AccountModalBindings::bind(&document, &dom).unwrap();
        // Unroutable base so no test ever reaches a real server
        let api = ApiClient::with_base_url("http://127.0.0.1:9");
        let controller = AccountModal::wire(&document, bindings, &dom, api);
        (document, controller)
    }

    #[wasm_bindgen_test]
    fn test_open_without_account_skips_fetch() {
        let (_, controller) = wired("");

        let plan = controller.open();
        assert_eq!(plan.fetch_id, None);
        assert_eq!(plan.content, ModalContent::account_missing());
        assert!(controller.modal().is_open());
    }

    #[wasm_bindgen_test]
    fn test_open_is_optimistic() {
        let (_, controller) = wired(r#"<input id="accountId" value="42">"#);

        let plan = controller.open();
        assert_eq!(plan.fetch_id.as_deref(), Some("42"));
        assert!(controller.modal().is_open());
    }

    #[wasm_bindgen_test]
    fn test_body_attribute_fallback() {
        let (document, controller) = wired(r#"<input id="accountId" value="">"#);
        document.body().unwrap().set_attribute("data-account-id", "8").unwrap();

        assert_eq!(controller.resolve_account_id().as_deref(), Some("8"));
        document.body().unwrap().remove_attribute("data-account-id").unwrap();
    }

    #[wasm_bindgen_test]
    fn test_profile_button_opens_modal() {
        let (document, controller) = wired("");
        let button = document.get_element_by_id("profileBtn").unwrap();

        button.dyn_ref::<HtmlElement>().unwrap().click();
        assert!(controller.modal().is_open());
    }

    #[wasm_bindgen_test]
    async fn test_failed_fetch_shows_error_message() {
        let (document, controller) = wired(r#"<input id="accountId" value="42">"#);

        controller.open();

        let content = document.get_element_by_id("accountContent").unwrap();
        for _ in 0..50 {
            if content.text_content().unwrap_or_default().contains(ACCOUNT_ERROR_MESSAGE) {
                break;
            }
            TimeoutFuture::new(100).await;
        }
        assert!(content.text_content().unwrap_or_default().contains(ACCOUNT_ERROR_MESSAGE));
        assert!(controller.modal().is_open());
    }
}
