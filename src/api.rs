use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::Credential;

#[derive(Debug, Serialize)]
pub(crate) struct CreateAccountRequest<'a> {
    pub(crate) name: &'a str,
    pub(crate) pin: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct TransactionRequest {
    pub(crate) account_number: u32,
    pub(crate) pin: u16,
    pub(crate) amount: Decimal,
}

#[derive(Debug, Serialize)]
pub(crate) struct CredentialRequest {
    account_number: u32,
    pin: u16,
}

impl From<Credential> for CredentialRequest {
    fn from(credential: Credential) -> Self {
        Self {
            account_number: credential.account_number,
            pin: credential.pin,
        }
    }
}

/// Parsed response of a POST endpoint. Every response carries at least
/// `success`; the balance endpoint omits `message` on success and fills
/// the detail fields instead.
#[derive(Debug, Deserialize, PartialEq)]
pub(crate) struct ApiResult {
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) message: String,
    pub(crate) account_name: Option<String>,
    pub(crate) account_number: Option<u64>,
    pub(crate) currency: Option<String>,
    pub(crate) balance: Option<Decimal>,
}

impl ApiResult {
    fn network_error(err: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: format!("Network error: {err}"),
            account_name: None,
            account_number: None,
            currency: None,
            balance: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccountsResult {
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) accounts: Vec<AccountSummary>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub(crate) struct AccountSummary {
    pub(crate) account_number: u64,
    pub(crate) name: String,
    pub(crate) currency: String,
    pub(crate) balance: Decimal,
}

/// Client for the bank API.
pub(crate) struct BankClient {
    http: Client,
    base_url: String,
}

impl BankClient {
    pub(crate) fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(3))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// POST helper shared by every form operation. Transport failures are
    /// folded into a failure result so callers render success and failure
    /// through the same path.
    async fn post<B: Serialize>(&self, path: &str, body: &B) -> ApiResult {
        match self.try_post(path, body).await {
            Ok(result) => result,
            Err(e) => {
                warn!("request to {path} failed: {e}");
                ApiResult::network_error(e)
            }
        }
    }

    async fn try_post<B: Serialize>(&self, path: &str, body: &B) -> reqwest::Result<ApiResult> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {url}");
        self.http.post(url).json(body).send().await?.json().await
    }

    pub(crate) async fn create_account(&self, request: &CreateAccountRequest<'_>) -> ApiResult {
        self.post("/api/create_account", request).await
    }

    pub(crate) async fn deposit(&self, request: &TransactionRequest) -> ApiResult {
        self.post("/api/deposit", request).await
    }

    pub(crate) async fn withdraw(&self, request: &TransactionRequest) -> ApiResult {
        self.post("/api/withdraw", request).await
    }

    pub(crate) async fn balance(&self, credential: Credential) -> ApiResult {
        self.post("/api/balance", &CredentialRequest::from(credential))
            .await
    }

    pub(crate) async fn delete_account(&self, credential: Credential) -> ApiResult {
        self.post("/api/delete_account", &CredentialRequest::from(credential))
            .await
    }

    /// The accounts listing keeps its own error path; the caller decides
    /// how a failed load is reported.
    pub(crate) async fn accounts(&self) -> reqwest::Result<AccountsResult> {
        let url = format!("{}/api/accounts", self.base_url);
        debug!("GET {url}");
        self.http.get(url).send().await?.json().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_account_body_keeps_pin_as_string() {
        let request = CreateAccountRequest {
            name: "Alice",
            pin: "1234",
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"name": "Alice", "pin": "1234"})
        );
    }

    #[test]
    fn transaction_body_is_numeric() {
        let request = TransactionRequest {
            account_number: 1234567,
            pin: 1234,
            amount: Decimal::new(505, 1),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"account_number": 1234567, "pin": 1234, "amount": 50.5})
        );
    }

    #[test]
    fn balance_success_parses_without_message() {
        let result: ApiResult = serde_json::from_value(json!({
            "success": true,
            "account_name": "Bob",
            "account_number": 1234567,
            "currency": "$",
            "balance": 42.5
        }))
        .unwrap();
        assert!(result.success);
        assert_eq!(result.message, "");
        assert_eq!(result.account_name.as_deref(), Some("Bob"));
        assert_eq!(result.balance, Some(Decimal::new(425, 1)));
    }

    #[test]
    fn failure_parses_with_message_only() {
        let result: ApiResult = serde_json::from_value(json!({
            "success": false,
            "message": "Invalid account number or PIN"
        }))
        .unwrap();
        assert!(!result.success);
        assert_eq!(result.message, "Invalid account number or PIN");
        assert_eq!(result.balance, None);
    }

    #[test]
    fn empty_accounts_listing_parses() {
        let result: AccountsResult =
            serde_json::from_value(json!({"success": true, "accounts": []})).unwrap();
        assert!(result.success);
        assert!(result.accounts.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_becomes_failure_result() {
        // Bind then drop to get a local port with nothing listening.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = BankClient::new(format!("http://127.0.0.1:{port}")).unwrap();
        let result = client
            .deposit(&TransactionRequest {
                account_number: 1234567,
                pin: 1234,
                amount: Decimal::new(50, 0),
            })
            .await;
        assert!(!result.success);
        assert!(result.message.starts_with("Network error:"));
    }
}
