use web_sys::HtmlElement;

/// Minimum level the console logger emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Selectors, ids and class names the enhancer expects on the host page.
#[derive(Debug, Clone, PartialEq)]
pub struct DomConfig {
    pub reveal_selector: String,
    pub visible_class: String,
    pub loading_form_selector: String,
    pub loading_class: String,
    pub submit_button_selector: String,
    /// Marker class whose presence means a modal is closed
    pub hidden_class: String,
    pub overlay_selector: String,
    pub profile_button_id: String,
    pub account_modal_id: String,
    pub account_content_id: String,
    pub account_close_id: String,
    pub account_input_id: String,
    pub body_account_attribute: String,
    pub ledger_modal_id: String,
    pub ledger_content_id: String,
    pub ledger_close_id: String,
    pub ledger_row_attribute: String,
    pub api_base_attribute: String,
    pub log_level_attribute: String,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            reveal_selector: ".reveal".to_string(),
            visible_class: "is-visible".to_string(),
            loading_form_selector: "form[data-loading]".to_string(),
            loading_class: "is-loading".to_string(),
            submit_button_selector: "button[type='submit']".to_string(),
            hidden_class: "hidden".to_string(),
            overlay_selector: ".modal-overlay".to_string(),
            profile_button_id: "profileBtn".to_string(),
            account_modal_id: "accountModal".to_string(),
            account_content_id: "accountContent".to_string(),
            account_close_id: "closeModalBtn".to_string(),
            account_input_id: "accountId".to_string(),
            body_account_attribute: "data-account-id".to_string(),
            ledger_modal_id: "ledgerModal".to_string(),
            ledger_content_id: "ledgerContent".to_string(),
            ledger_close_id: "closeLedgerModalBtn".to_string(),
            ledger_row_attribute: "data-ledger-id".to_string(),
            api_base_attribute: "data-api-base".to_string(),
            log_level_attribute: "data-log-level".to_string(),
        }
    }
}

impl DomConfig {
    pub fn ledger_row_selector(&self) -> String {
        format!("[{}]", self.ledger_row_attribute)
    }
}

/// Top-level configuration for the page enhancer
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancerConfig {
    /// Prefix for API paths; empty means same origin
    pub api_base_url: String,
    pub reveal_step_ms: u32,
    pub log_level: LogLevel,
    pub dom: DomConfig,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            reveal_step_ms: 80,
            log_level: LogLevel::default(),
            dom: DomConfig::default(),
        }
    }
}

impl EnhancerConfig {
    /// Defaults, overridden by `data-api-base` / `data-log-level` on `<body>`.
    pub fn from_body(body: &HtmlElement) -> Self {
        let mut config = Self::default();

        if let Some(base) = body.get_attribute(&config.dom.api_base_attribute) {
            config.api_base_url = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(level) = body
            .get_attribute(&config.dom.log_level_attribute)
            .and_then(|value| LogLevel::parse(&value))
        {
            config.log_level = level;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn detached_body() -> HtmlElement {
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .create_element("body")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_config_default() {
        let config = EnhancerConfig::default();
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.reveal_step_ms, 80);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.dom.hidden_class, "hidden");
        assert_eq!(config.dom.ledger_row_selector(), "[data-ledger-id]");
    }

    #[wasm_bindgen_test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse(" warning "), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("loud"), None);
        assert!(LogLevel::Debug < LogLevel::Error);
    }

    #[wasm_bindgen_test]
    fn test_config_from_body_attributes() {
        let body = detached_body();
        body.set_attribute("data-api-base", "https://loyalty.example/").unwrap();
        body.set_attribute("data-log-level", "error").unwrap();

        let config = EnhancerConfig::from_body(&body);
        assert_eq!(config.api_base_url, "https://loyalty.example");
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[wasm_bindgen_test]
    fn test_config_from_plain_body() {
        assert_eq!(EnhancerConfig::from_body(&detached_body()), EnhancerConfig::default());
    }
}
