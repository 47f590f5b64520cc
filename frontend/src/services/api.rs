use gloo::net::http::Request;
use loyalty_shared::{account_path, purchase_path, AccountSummary, ApiError, PurchaseDetails};

/// API client for the loyalty backend
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client with an explicit base URL (no trailing slash)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn account_url(&self, account_id: &str) -> String {
        format!("{}{}", self.base_url, account_path(&encode_segment(account_id)))
    }

    pub fn purchase_url(&self, ledger_id: &str) -> String {
        format!("{}{}", self.base_url, purchase_path(&encode_segment(ledger_id)))
    }

    /// Fetch an account summary. The HTTP status is not checked; a body that is
    /// not an account fails to parse instead.
    pub async fn get_account(&self, account_id: &str) -> Result<AccountSummary, ApiError> {
        let response = Request::get(&self.account_url(account_id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        response
            .json::<AccountSummary>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Fetch the purchase behind a ledger entry. Any non-2xx status is an error.
    pub async fn get_purchase_details(&self, ledger_id: &str) -> Result<PurchaseDetails, ApiError> {
        let response = Request::get(&self.purchase_url(ledger_id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
            });
        }

        response
            .json::<PurchaseDetails>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

fn encode_segment(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}
