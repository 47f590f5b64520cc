use std::rc::Rc;

use gloo::events::EventListener;
use loyalty_shared::{plan_ledger_open, ModalContent, OpenPlan};
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::config::DomConfig;
use crate::dom::LedgerModalBindings;
use crate::modal::ModalController;
use crate::services::api::ApiClient;

const COMPONENT: &str = "ledger-modal";

/// Purchase detail dialog opened from ledger rows.
pub struct LedgerModal {
    modal: Rc<ModalController>,
    api: ApiClient,
}

impl LedgerModal {
    pub fn wire(
        document: &Document,
        bindings: LedgerModalBindings,
        dom: &DomConfig,
        api: ApiClient,
    ) -> Rc<Self> {
        let modal = ModalController::mount(COMPONENT, &bindings.modal, &dom.hidden_class);
        modal.wire_close_triggers(document, &bindings.modal);

        let controller = Rc::new(Self { modal, api });

        for row in bindings.rows {
            let on_click = Rc::clone(&controller);
            let attribute = dom.ledger_row_attribute.clone();
            let target = row.clone();
            EventListener::new(&target, "click", move |_| {
                on_click.open(row.get_attribute(&attribute).as_deref());
            })
            .forget();
        }

        controller
    }

    #[cfg(test)]
    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    /// Open for `ledger_id`. Rows without an id are ignored and return `None`.
    ///
    /// Responses are not sequenced: whichever fetch resolves last wins.
    pub fn open(&self, ledger_id: Option<&str>) -> Option<OpenPlan> {
        let plan = plan_ledger_open(ledger_id)?;
        self.modal.show(plan.content.clone());

        if let Some(ledger_id) = plan.fetch_id.clone() {
            let api = self.api.clone();
            let modal = Rc::clone(&self.modal);
            spawn_local(async move {
                let result = api.get_purchase_details(&ledger_id).await;
                modal.set_content(ModalContent::from_purchase_result(&result));
            });
        }

        Some(plan)
    }
}
