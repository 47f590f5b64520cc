use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlFormElement};

use crate::dom::{query_all_within, BindingError};
use crate::services::logging::Logger;

const COMPONENT: &str = "form-guard";

/// Mark `form` as loading and disable its submit buttons. Returns how many were disabled.
pub fn mark_submitting(
    form: &HtmlFormElement,
    loading_class: &str,
    submit_selector: &str,
) -> Result<usize, BindingError> {
    if form.class_list().add_1(loading_class).is_err() {
        Logger::warn_with_component(COMPONENT, "Failed to add loading class");
    }

    let buttons: Vec<HtmlButtonElement> = query_all_within(form, submit_selector)?
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlButtonElement>().ok())
        .collect();
    for button in &buttons {
        button.set_disabled(true);
    }

    Ok(buttons.len())
}

/// Install the submit handler on every loading-aware form.
/// The handler never prevents the submission itself.
pub fn guard(forms: Vec<HtmlFormElement>, loading_class: &str, submit_selector: &str) -> usize {
    let count = forms.len();

    for form in forms {
        let loading_class = loading_class.to_string();
        let submit_selector = submit_selector.to_string();
        let target = form.clone();
        EventListener::new(&target, "submit", move |_| {
            if let Err(err) = mark_submitting(&form, &loading_class, &submit_selector) {
                Logger::warn_with_component(COMPONENT, &err.to_string());
            }
        })
        .forget();
    }

    count
}
