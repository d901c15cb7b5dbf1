use crate::api::{ApiResult, BankClient, CreateAccountRequest, TransactionRequest};
use crate::error::Result;
use crate::input::{self, Credential};
use crate::view::{self, Feedback};

fn feedback_from(result: ApiResult) -> Feedback {
    if result.success {
        Feedback::Success(result.message)
    } else {
        Feedback::Error(result.message)
    }
}

fn parse_new_account<'a>(name: &'a str, pin: &'a str) -> Result<CreateAccountRequest<'a>> {
    let name = input::parse_name(name)?;
    let pin = pin.trim();
    input::parse_pin(pin)?;
    // The create endpoint takes the pin as a string on the wire.
    Ok(CreateAccountRequest { name, pin })
}

fn parse_transaction(account: &str, pin: &str, amount: &str) -> Result<TransactionRequest> {
    let credential = Credential::parse(account, pin)?;
    let amount = input::parse_amount(amount)?;
    Ok(TransactionRequest {
        account_number: credential.account_number,
        pin: credential.pin,
        amount,
    })
}

pub(crate) async fn create_account(client: &BankClient, name: &str, pin: &str) -> Feedback {
    match parse_new_account(name, pin) {
        Ok(request) => feedback_from(client.create_account(&request).await),
        Err(e) => Feedback::Error(e.to_string()),
    }
}

pub(crate) async fn deposit(client: &BankClient, account: &str, pin: &str, amount: &str) -> Feedback {
    match parse_transaction(account, pin, amount) {
        Ok(request) => feedback_from(client.deposit(&request).await),
        Err(e) => Feedback::Error(e.to_string()),
    }
}

pub(crate) async fn withdraw(client: &BankClient, account: &str, pin: &str, amount: &str) -> Feedback {
    match parse_transaction(account, pin, amount) {
        Ok(request) => feedback_from(client.withdraw(&request).await),
        Err(e) => Feedback::Error(e.to_string()),
    }
}

pub(crate) async fn check_balance(client: &BankClient, account: &str, pin: &str) -> Feedback {
    let credential = match Credential::parse(account, pin) {
        Ok(credential) => credential,
        Err(e) => return Feedback::Error(e.to_string()),
    };
    let result = client.balance(credential).await;
    if !result.success {
        return Feedback::Error(result.message);
    }
    match (
        result.account_name,
        result.account_number,
        result.currency,
        result.balance,
    ) {
        (Some(name), Some(number), Some(currency), Some(balance)) => {
            Feedback::Success(view::balance_details(&name, number, &currency, balance))
        }
        _ => Feedback::Error("Malformed balance response from server".to_string()),
    }
}

pub(crate) async fn delete_account(client: &BankClient, account: &str, pin: &str) -> Feedback {
    match Credential::parse(account, pin) {
        Ok(credential) => feedback_from(client.delete_account(credential).await),
        Err(e) => Feedback::Error(e.to_string()),
    }
}

pub(crate) async fn load_accounts(client: &BankClient) -> Feedback {
    match client.accounts().await {
        Ok(result) => {
            let accounts = if result.success {
                result.accounts
            } else {
                Vec::new()
            };
            Feedback::Success(view::accounts_table(&accounts))
        }
        Err(e) => Feedback::Error(format!("Error loading accounts: {e}")),
    }
}
