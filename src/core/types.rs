//! src/core/types.rs
//!
//! Value types for IBAN construction
//!
//! This module defines the values that flow through the generation pipeline:
//! - `AccountNumber`: A validated account number (1 to 16 ASCII digits)
//! - `BankCode`: A four-character bank identifier taken from the registry
//! - `Bban`: Bank code followed by the zero-padded account number
//! - `CheckDigits`: The two ISO 7064 MOD 97-10 check digits
//! - `Iban`: Country code, check digits and BBAN (24 characters for PK)
//! - `FormattedIban`: The IBAN grouped into space-separated blocks of four
//!
//! None of these types can be built from arbitrary strings outside the crate.
//! They are produced by the validator and builder, so holding one means the
//! invariants listed on each type already hold.

use serde::Serialize;
use std::fmt;

/// Country code for Pakistani IBANs
pub const COUNTRY_CODE: &str = "PK";

/// Maximum number of digits in an account number
pub const ACCOUNT_NUMBER_LENGTH: usize = 16;

/// Length of a bank identifier
pub const BANK_CODE_LENGTH: usize = 4;

/// Length of a Pakistani BBAN (bank code + padded account number)
pub const BBAN_LENGTH: usize = BANK_CODE_LENGTH + ACCOUNT_NUMBER_LENGTH;

/// Length of a complete Pakistani IBAN
pub const IBAN_LENGTH: usize = COUNTRY_CODE.len() + 2 + BBAN_LENGTH;

/// Width of one display group in a formatted IBAN
pub const GROUP_WIDTH: usize = 4;

/// A validated account number
///
/// Contains only `0`-`9` and is between 1 and 16 characters long.
/// Produced by [`validate_account_number`](crate::core::validator::validate_account_number).
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub(crate) fn new_unchecked(digits: &str) -> Self {
        Self(digits.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Account number left-padded with `'0'` to 16 digits
    pub fn padded(&self) -> String {
        format!("{:0>width$}", self.0, width = ACCOUNT_NUMBER_LENGTH)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bank identifier known to the registry
///
/// Always four uppercase ASCII alphanumerics (e.g. `HABB`, `MEZN`).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct BankCode(String);

impl BankCode {
    pub(crate) fn new_unchecked(code: &str) -> Self {
        Self(code.to_string())
    }

    /// Returns true if `code` has the shape of a bank identifier
    ///
    /// This only checks the shape. Whether the bank exists is a registry
    /// question.
    pub fn is_well_formed(code: &str) -> bool {
        code.len() == BANK_CODE_LENGTH
            && code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BankCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Basic Bank Account Number
///
/// Bank code followed by the account number padded to 16 digits.
/// Always exactly 20 characters.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Bban(String);

impl Bban {
    pub(crate) fn new_unchecked(bban: String) -> Self {
        Self(bban)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ISO 7064 MOD 97-10 check digits
///
/// Held as a number in the range 2..=98 and rendered as two
/// zero-padded decimal digits.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct CheckDigits(u8);

impl CheckDigits {
    pub(crate) fn new_unchecked(value: u8) -> Self {
        Self(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CheckDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A complete IBAN without spaces
///
/// Country code + check digits + BBAN.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct Iban(String);

impl Iban {
    /// Builds the IBAN from its three parts
    pub(crate) fn from_parts(country_code: &str, check_digits: CheckDigits, bban: &Bban) -> Self {
        Self(format!("{}{}{}", country_code, check_digits, bban))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Country code (first two characters)
    pub fn country_code(&self) -> &str {
        &self.0[..2]
    }

    /// Check digits as written (characters three and four)
    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    /// Everything after the check digits
    pub fn bban(&self) -> &str {
        &self.0[4..]
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An IBAN grouped for display
///
/// Space-separated groups of four characters, e.g.
/// `PK29 HABB 0001 2345 6789 0123`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct FormattedIban(String);

impl FormattedIban {
    pub(crate) fn new_unchecked(formatted: String) -> Self {
        Self(formatted)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The IBAN with all whitespace removed (the form used for copying)
    pub fn compact(&self) -> String {
        crate::core::builder::compact(&self.0)
    }

    /// Individual display groups
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }
}

impl fmt::Display for FormattedIban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
