use loyalty_shared::{AccountBlock, AccountView, DetailRow, ModalContent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct ModalBodyProps {
    #[prop_or_default]
    pub content: ModalContent,
}

/// Content region of a modal. Mounted once per modal and updated on every open.
#[function_component(ModalBody)]
pub fn modal_body(props: &ModalBodyProps) -> Html {
    match &props.content {
        ModalContent::Empty => html! {},
        ModalContent::Loading(message) | ModalContent::Notice(message) => html! {
            <div class="text-ink/60">{ message.clone() }</div>
        },
        ModalContent::Error(message) => html! {
            <div class="text-red-600">{ message.clone() }</div>
        },
        ModalContent::Account(view) => html! {
            <AccountDetails view={view.clone()} />
        },
        ModalContent::Purchase(rows) => html! {
            <PurchaseRows rows={rows.clone()} />
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct AccountDetailsProps {
    pub view: AccountView,
}

#[function_component(AccountDetails)]
pub fn account_details(props: &AccountDetailsProps) -> Html {
    html! {
        <div class="space-y-4">
            { for props.view.blocks.iter().map(account_block) }
        </div>
    }
}

fn account_block(block: &AccountBlock) -> Html {
    match block {
        AccountBlock::Field { label, value } => labeled_value(label, value),
        AccountBlock::Points { label, value } => html! {
            <div>
                <span class="text-ink/60 text-sm">{ *label }</span>
                <div class="font-display text-3xl font-bold mt-2 text-accent">{ value.to_string() }</div>
            </div>
        },
        AccountBlock::Badges { label, pills } => html! {
            <div>
                <span class="text-ink/60 text-sm">{ *label }</span>
                <div class="flex gap-2 mt-2">
                    { for pills.iter().map(|pill| html! { <span class="stat-pill">{ pill.clone() }</span> }) }
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct PurchaseRowsProps {
    pub rows: Vec<DetailRow>,
}

#[function_component(PurchaseRows)]
pub fn purchase_rows(props: &PurchaseRowsProps) -> Html {
    html! {
        <div class="space-y-4">
            { for props.rows.iter().map(|row| labeled_value(row.label, &row.value)) }
        </div>
    }
}

fn labeled_value(label: &str, value: &str) -> Html {
    html! {
        <div>
            <span class="text-ink/60 text-sm">{ label.to_string() }</span>
            <div class="font-semibold text-lg mt-1">{ value.to_string() }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use loyalty_shared::{AccountSummary, PurchaseDetails};
    use wasm_bindgen_test::*;
    use web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn render(content: ModalContent) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&host).unwrap();

        yew::Renderer::<ModalBody>::with_root_and_props(host.clone(), ModalBodyProps { content })
            .render();
        TimeoutFuture::new(0).await;
        host
    }

    #[wasm_bindgen_test]
    async fn test_account_without_status_has_no_pills() {
        let account = AccountSummary {
            id: Some(1),
            first_name: Some("A".to_string()),
            last_name: Some("B".to_string()),
            current_points: Some(5),
            ..AccountSummary::default()
        };
        let host = render(ModalContent::Account(AccountView::from_account(&account))).await;

        let text = host.text_content().unwrap_or_default();
        assert!(text.contains("Customer Name"));
        assert!(text.contains("A B"));
        assert!(text.contains("Profile ID"));
        assert!(text.contains("Current Points"));
        assert!(host.query_selector(".stat-pill").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_purchase_rows_render_placeholders() {
        let details = PurchaseDetails {
            account_id: Some(1),
            ..PurchaseDetails::default()
        };
        let content = ModalContent::from_purchase_result(&Ok(details));
        let host = render(content).await;

        let values = host.query_selector_all(".font-semibold").unwrap();
        assert_eq!(values.length(), 7);
        assert_eq!(values.item(0).unwrap().text_content().as_deref(), Some("1"));
        assert_eq!(values.item(6).unwrap().text_content().as_deref(), Some("-"));
    }

    #[wasm_bindgen_test]
    async fn test_values_are_text_not_markup() {
        let account = AccountSummary {
            account_number: Some("<b>ACC</b>".to_string()),
            ..AccountSummary::default()
        };
        let host = render(ModalContent::Account(AccountView::from_account(&account))).await;

        assert!(host.query_selector("b").unwrap().is_none());
        assert!(host.text_content().unwrap_or_default().contains("<b>ACC</b>"));
    }
}
