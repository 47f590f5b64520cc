use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, NodeList};

use crate::config::DomConfig;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindingError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("missing element `{selector}`")]
    MissingElement { selector: String },
    #[error("element `{selector}` is not a {expected}")]
    WrongElementType { selector: String, expected: &'static str },
    #[error("invalid selector `{selector}`")]
    InvalidSelector { selector: String },
}

pub fn document() -> Result<Document, BindingError> {
    web_sys::window()
        .ok_or(BindingError::NoWindow)?
        .document()
        .ok_or(BindingError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement, BindingError> {
    document.body().ok_or(BindingError::NoBody)
}

/// Required element by id, cast to `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, BindingError> {
    let selector = format!("#{}", id);
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindingError::MissingElement {
            selector: selector.clone(),
        })?
        .dyn_into::<T>()
        .map_err(|_| BindingError::WrongElementType {
            selector,
            expected: type_label::<T>(),
        })
}

/// Bare type name, e.g. `HtmlInputElement`.
fn type_label<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Optional element by id; absent or of the wrong type both mean `None`.
pub fn optional_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// First descendant of `parent` matching `selector`, if any.
pub fn query_within(parent: &Element, selector: &str) -> Result<Option<Element>, BindingError> {
    parent
        .query_selector(selector)
        .map_err(|_| BindingError::InvalidSelector {
            selector: selector.to_string(),
        })
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, BindingError> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .map_err(|_| BindingError::InvalidSelector {
            selector: selector.to_string(),
        })
}

pub fn query_all_within(parent: &Element, selector: &str) -> Result<Vec<Element>, BindingError> {
    parent
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .map_err(|_| BindingError::InvalidSelector {
            selector: selector.to_string(),
        })
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Root, content region and close controls of one modal.
#[derive(Debug, Clone)]
pub struct ModalBindings {
    pub root: Element,
    pub content: Element,
    pub close_button: Option<Element>,
    pub overlay: Option<Element>,
}

impl ModalBindings {
    pub fn bind(
        document: &Document,
        modal_id: &str,
        content_id: &str,
        close_id: &str,
        overlay_selector: &str,
    ) -> Result<Self, BindingError> {
        let root: Element = by_id(document, modal_id)?;
        let content: Element = by_id(document, content_id)?;
        let close_button = optional_by_id::<Element>(document, close_id);
        let overlay = query_within(&root, overlay_selector)?;

        Ok(Self {
            root,
            content,
            close_button,
            overlay,
        })
    }

    /// Fail unless both the close button and the overlay exist.
    pub fn require_close_controls(
        self,
        close_id: &str,
        overlay_selector: &str,
    ) -> Result<Self, BindingError> {
        if self.close_button.is_none() {
            return Err(BindingError::MissingElement {
                selector: format!("#{}", close_id),
            });
        }
        if self.overlay.is_none() {
            return Err(BindingError::MissingElement {
                selector: overlay_selector.to_string(),
            });
        }
        Ok(self)
    }
}

#[derive(Debug, Clone)]
pub struct AccountModalBindings {
    pub trigger: Element,
    /// The dashboard's account id field; not every page has one
    pub account_input: Option<HtmlInputElement>,
    pub body: HtmlElement,
    pub modal: ModalBindings,
}

impl AccountModalBindings {
    pub fn bind(document: &Document, dom: &DomConfig) -> Result<Self, BindingError> {
        let trigger: Element = by_id(document, &dom.profile_button_id)?;
        let modal = ModalBindings::bind(
            document,
            &dom.account_modal_id,
            &dom.account_content_id,
            &dom.account_close_id,
            &dom.overlay_selector,
        )?
        .require_close_controls(&dom.account_close_id, &dom.overlay_selector)?;

        Ok(Self {
            trigger,
            account_input: optional_by_id(document, &dom.account_input_id),
            body: body(document)?,
            modal,
        })
    }
}

#[derive(Debug, Clone)]
pub struct LedgerModalBindings {
    pub rows: Vec<Element>,
    pub modal: ModalBindings,
}

impl LedgerModalBindings {
    pub fn bind(document: &Document, dom: &DomConfig) -> Result<Self, BindingError> {
        let modal = ModalBindings::bind(
            document,
            &dom.ledger_modal_id,
            &dom.ledger_content_id,
            &dom.ledger_close_id,
            &dom.overlay_selector,
        )?;

        Ok(Self {
            rows: query_all(document, &dom.ledger_row_selector())?,
            modal,
        })
    }
}

/// Everything the enhancer wires on one page view.
///
/// The modals bind independently; a page without one of them still gets the rest.
#[derive(Debug)]
pub struct PageBindings {
    pub document: Document,
    pub reveal_items: Vec<Element>,
    pub loading_forms: Vec<HtmlFormElement>,
    pub account: Result<AccountModalBindings, BindingError>,
    pub ledger: Result<LedgerModalBindings, BindingError>,
}

impl PageBindings {
    pub fn bind(document: Document, dom: &DomConfig) -> Result<Self, BindingError> {
        let reveal_items = query_all(&document, &dom.reveal_selector)?;
        let loading_forms = query_all(&document, &dom.loading_form_selector)?
            .into_iter()
            .filter_map(|element| element.dyn_into::<HtmlFormElement>().ok())
            .collect();
        let account = AccountModalBindings::bind(&document, dom);
        let ledger = LedgerModalBindings::bind(&document, dom);

        Ok(Self {
            document,
            reveal_items,
            loading_forms,
            account,
            ledger,
        })
    }
}
