use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use loyalty_shared::{ModalContent, ModalEvent, ModalState};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};
use yew::AppHandle;

use crate::components::{ModalBody, ModalBodyProps};
use crate::dom::ModalBindings;
use crate::services::logging::Logger;

/// One modal dialog: visibility via the hidden class, content via a Yew app.
pub struct ModalController {
    name: &'static str,
    root: Element,
    hidden_class: String,
    body: RefCell<AppHandle<ModalBody>>,
}

impl ModalController {
    /// Take over the modal's content region. Server-rendered children are cleared.
    pub fn mount(name: &'static str, bindings: &ModalBindings, hidden_class: &str) -> Rc<Self> {
        bindings.content.set_inner_html("");
        let body = yew::Renderer::<ModalBody>::with_root_and_props(
            bindings.content.clone(),
            ModalBodyProps::default(),
        )
        .render();

        Rc::new(Self {
            name,
            root: bindings.root.clone(),
            hidden_class: hidden_class.to_string(),
            body: RefCell::new(body),
        })
    }

    /// Current visibility, read from the DOM so outside class changes are respected.
    pub fn state(&self) -> ModalState {
        ModalState::from_hidden(self.root.class_list().contains(&self.hidden_class))
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Apply `event`; returns whether visibility changed.
    pub fn handle(&self, event: ModalEvent) -> bool {
        let Some(next) = self.state().transition(&event) else {
            return false;
        };

        let class_list = self.root.class_list();
        let result = match next {
            ModalState::Open => class_list.remove_1(&self.hidden_class),
            ModalState::Closed => class_list.add_1(&self.hidden_class),
        };
        if let Err(err) = result {
            Logger::warn_with_component(
                self.name,
                &format!("Failed to toggle visibility: {:?}", err),
            );
            return false;
        }

        Logger::debug_with_component(self.name, &format!("{:?} -> {:?}", event, next));
        true
    }

    /// Replace the whole content region.
    pub fn set_content(&self, content: ModalContent) {
        self.body.borrow_mut().update(ModalBodyProps { content });
    }

    /// Show `content` and make the modal visible in the same step.
    pub fn show(&self, content: ModalContent) {
        self.set_content(content);
        self.handle(ModalEvent::Open);
    }

    /// Close button, overlay click and Escape all hide this modal.
    /// Listeners live for the rest of the page.
    pub fn wire_close_triggers(self: &Rc<Self>, document: &Document, bindings: &ModalBindings) {
        if let Some(button) = &bindings.close_button {
            let modal = Rc::clone(self);
            EventListener::new(button, "click", move |_| {
                modal.handle(ModalEvent::CloseButton);
            })
            .forget();
        }

        if let Some(overlay) = &bindings.overlay {
            let modal = Rc::clone(self);
            EventListener::new(overlay, "click", move |_| {
                modal.handle(ModalEvent::OverlayClick);
            })
            .forget();
        }

        let modal = Rc::clone(self);
        EventListener::new(document, "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                modal.handle(ModalEvent::KeyDown(key_event.key()));
            }
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DomConfig;
    use crate::dom::tests::{fixture, ACCOUNT_MODAL};
    use crate::dom::ModalBindings;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mounted() -> (Document, ModalBindings, Rc<ModalController>) {
        let document = fixture(ACCOUNT_MODAL);
        let dom = DomConfig::default();
        let bindings = ModalBindings::bind(
            &document,
            &dom.account_modal_id,
            &dom.account_content_id,
            &dom.account_close_id,
            &dom.overlay_selector,
        )
        .unwrap();
        let modal = ModalController::mount("test-modal", &bindings, &dom.hidden_class);
        modal.wire_close_triggers(&document, &bindings);
        (document, bindings, modal)
    }

    fn press(document: &Document, key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        document.dispatch_event(&event).unwrap();
    }

    fn click(element: &Element) {
        element.dyn_ref::<HtmlElement>().unwrap().click();
    }

    #[wasm_bindgen_test]
    fn test_show_then_hide() {
        let (_, _, modal) = mounted();
        assert!(!modal.is_open());

        modal.show(ModalContent::Notice("hello".to_string()));
        assert!(modal.is_open());

        assert!(modal.handle(ModalEvent::CloseButton));
        assert!(!modal.is_open());
        assert!(!modal.handle(ModalEvent::CloseButton));
    }

    #[wasm_bindgen_test]
    fn test_close_button_and_overlay() {
        let (_, bindings, modal) = mounted();

        modal.show(ModalContent::Empty);
        click(bindings.close_button.as_ref().unwrap());
        assert!(!modal.is_open());

        modal.show(ModalContent::Empty);
        click(bindings.overlay.as_ref().unwrap());
        assert!(!modal.is_open());

        click(bindings.overlay.as_ref().unwrap());
        assert!(!modal.is_open());
    }

    #[wasm_bindgen_test]
    fn test_escape_only_hides_open_modal() {
        let (document, bindings, modal) = mounted();

        press(&document, "Escape");
        assert!(!modal.is_open());
        assert!(bindings.root.class_list().contains("hidden"));

        modal.show(ModalContent::Empty);
        press(&document, "Enter");
        assert!(modal.is_open());

        press(&document, "Escape");
        assert!(!modal.is_open());
    }
}
