use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Validated account credential. Construction goes through `parse`, so a
/// request can never carry a malformed account number or pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Credential {
    pub(crate) account_number: u32,
    pub(crate) pin: u16,
}

impl Credential {
    /// Fields are checked in form order: account number before pin.
    pub(crate) fn parse(account: &str, pin: &str) -> Result<Self> {
        Ok(Self {
            account_number: parse_account_number(account)?,
            pin: parse_pin(pin)?,
        })
    }
}

pub(crate) fn parse_name(input: &str) -> Result<&str> {
    let name = input.trim();
    if name.is_empty() {
        Err(Error::EmptyName)
    } else {
        Ok(name)
    }
}

/// Exactly 7 numeral characters.
pub(crate) fn parse_account_number(input: &str) -> Result<u32> {
    let digits = input.trim();
    if digits.len() != 7 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::BadAccountNumber);
    }
    digits.parse().map_err(|_| Error::BadAccountNumber)
}

/// Exactly 4 numeral characters.
pub(crate) fn parse_pin(input: &str) -> Result<u16> {
    let digits = input.trim();
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::BadPin);
    }
    digits.parse().map_err(|_| Error::BadPin)
}

/// A number strictly greater than zero.
pub(crate) fn parse_amount(input: &str) -> Result<Decimal> {
    let amount: Decimal = input.trim().parse().map_err(|_| Error::BadAmount)?;
    if amount > Decimal::ZERO {
        Ok(amount)
    } else {
        Err(Error::BadAmount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_number_accepts_exactly_seven_digits() {
        assert_eq!(parse_account_number("1234567"), Ok(1234567));
        assert_eq!(parse_account_number("0000001"), Ok(1));
        assert_eq!(parse_account_number(" 1234567 "), Ok(1234567));
    }

    #[test]
    fn account_number_rejects_bad_input() {
        for input in ["", "123456", "12345678", "123456a", "12 4567", "-123456"] {
            assert_eq!(parse_account_number(input), Err(Error::BadAccountNumber));
        }
    }

    #[test]
    fn pin_accepts_exactly_four_digits() {
        assert_eq!(parse_pin("1234"), Ok(1234));
        assert_eq!(parse_pin("0042"), Ok(42));
    }

    #[test]
    fn pin_rejects_bad_input() {
        for input in ["", "123", "12345", "12a4", "+123"] {
            assert_eq!(parse_pin(input), Err(Error::BadPin));
        }
    }

    #[test]
    fn amount_must_be_a_positive_number() {
        assert_eq!(parse_amount("50"), Ok(Decimal::new(50, 0)));
        assert_eq!(parse_amount("0.01"), Ok(Decimal::new(1, 2)));
        for input in ["", "0", "-5", "abc", "12abc"] {
            assert_eq!(parse_amount(input), Err(Error::BadAmount));
        }
    }

    #[test]
    fn name_must_be_non_empty_after_trimming() {
        assert_eq!(parse_name("  Alice "), Ok("Alice"));
        assert_eq!(parse_name("   "), Err(Error::EmptyName));
    }

    #[test]
    fn credential_checks_account_before_pin() {
        assert_eq!(
            Credential::parse("12", "12"),
            Err(Error::BadAccountNumber)
        );
        assert_eq!(Credential::parse("1234567", "12"), Err(Error::BadPin));
        assert_eq!(
            Credential::parse("1234567", "1234"),
            Ok(Credential {
                account_number: 1234567,
                pin: 1234
            })
        );
    }
}
