use rust_decimal::{Decimal, RoundingStrategy};

use crate::api::AccountSummary;

pub(crate) const NO_ACCOUNTS: &str = "No accounts found";

/// What a handler produced for the user. Rendering to the terminal
/// happens once, in `main`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Feedback {
    Success(String),
    Error(String),
}

/// Two decimal places, currency symbol in front. Midpoints round away
/// from zero, not to nearest even.
pub(crate) fn format_money(currency: &str, amount: Decimal) -> String {
    let amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{currency}{amount:.2}")
}

pub(crate) fn balance_details(
    account_name: &str,
    account_number: u64,
    currency: &str,
    balance: Decimal,
) -> String {
    format!(
        "Account Holder: {account_name}\n\
         Account Number: {account_number}\n\
         Current Balance: {}",
        format_money(currency, balance)
    )
}

/// Plain-text table of all accounts, or the placeholder when there are
/// none.
pub(crate) fn accounts_table(accounts: &[AccountSummary]) -> String {
    if accounts.is_empty() {
        return NO_ACCOUNTS.to_string();
    }

    const HEADER: [&str; 3] = ["Account Number", "Name", "Balance"];
    let rows: Vec<[String; 3]> = accounts
        .iter()
        .map(|account| {
            [
                account.account_number.to_string(),
                account.name.clone(),
                format_money(&account.currency, account.balance),
            ]
        })
        .collect();

    let mut widths = [HEADER[0].len(), HEADER[1].len(), HEADER[2].len()];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    fn render_row(widths: &[usize; 3], cells: [&str; 3]) -> String {
        format!(
            "{:<w0$}  {:<w1$}  {}",
            cells[0],
            cells[1],
            cells[2],
            w0 = widths[0],
            w1 = widths[1]
        )
    }

    let mut lines = vec![
        render_row(&widths, HEADER),
        format!(
            "{}  {}  {}",
            "-".repeat(widths[0]),
            "-".repeat(widths[1]),
            "-".repeat(widths[2])
        ),
    ];
    for row in &rows {
        lines.push(render_row(&widths, [&row[0], &row[1], &row[2]]));
    }
    lines.join("\n")
}
