use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, Error>;

/// Local validation failures. The `Display` text is the exact message
/// shown to the user; once one of these is raised no request is sent.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Please enter your name")]
    EmptyName,
    #[error("Account number must be a 7-digit number")]
    BadAccountNumber,
    #[error("PIN must be a 4-digit number")]
    BadPin,
    #[error("Please enter a valid amount")]
    BadAmount,
}
