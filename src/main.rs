mod api;
mod error;
mod forms;
mod input;
mod view;

use clap::{Parser, Subcommand};

use crate::view::Feedback;

/// Command-line teller for the bank demo API.
#[derive(Parser, Debug)]
#[command(name = "teller")]
#[command(about = "Command-line teller for the bank demo API")]
struct Cli {
    /// Base URL of the bank API server
    #[arg(short, long, default_value = "http://127.0.0.1:5000", env = "TELLER_URL")]
    url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a new account
    CreateAccount { name: String, pin: String },
    /// Deposit money into an account
    Deposit {
        account: String,
        pin: String,
        amount: String,
    },
    /// Withdraw money from an account
    Withdraw {
        account: String,
        pin: String,
        amount: String,
    },
    /// Show account holder, number and current balance
    Balance { account: String, pin: String },
    /// Delete an account
    DeleteAccount { account: String, pin: String },
    /// List all accounts
    Accounts,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let client = match api::BankClient::new(cli.url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create HTTP client: {e}");
            std::process::exit(1);
        }
    };

    // No subcommand lists accounts, like the original page-load refresh.
    let feedback = match cli.command.unwrap_or(Command::Accounts) {
        Command::CreateAccount { name, pin } => forms::create_account(&client, &name, &pin).await,
        Command::Deposit {
            account,
            pin,
            amount,
        } => forms::deposit(&client, &account, &pin, &amount).await,
        Command::Withdraw {
            account,
            pin,
            amount,
        } => forms::withdraw(&client, &account, &pin, &amount).await,
        Command::Balance { account, pin } => forms::check_balance(&client, &account, &pin).await,
        Command::DeleteAccount { account, pin } => {
            forms::delete_account(&client, &account, &pin).await
        }
        Command::Accounts => forms::load_accounts(&client).await,
    };

    match feedback {
        Feedback::Success(text) => println!("{text}"),
        Feedback::Error(text) => {
            eprintln!("{text}");
            std::process::exit(1);
        }
    }
}
