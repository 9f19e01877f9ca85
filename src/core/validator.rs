// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Input validation for account numbers and bank selection
//!
//! Account numbers are checked in a fixed order so the user always sees the
//! most basic problem first:
//! 1. Empty input
//! 2. Characters outside `0`-`9`
//! 3. More than 16 digits
//!
//! The candidate string is never trimmed, truncated or otherwise sanitised.
//! Callers keep what the user typed and only get back a verdict.

use thiserror::Error;

use crate::core::registry::BankRegistry;
use crate::core::types::{AccountNumber, BankCode, ACCOUNT_NUMBER_LENGTH};

/// Validation errors
///
/// The display text is the user-facing message shown next to the form.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    /// Account number field is empty
    #[error("Account number is required.")]
    EmptyAccountNumber,

    /// Account number contains something other than ASCII digits
    #[error("Account number must contain only digits.")]
    NonDigitAccountNumber,

    /// Account number is longer than 16 digits
    #[error("Account number cannot exceed 16 digits.")]
    AccountNumberTooLong,

    /// No bank has been chosen
    #[error("Please select a bank.")]
    NoBankSelected,

    /// Bank code is not in the registry
    #[error("Unknown bank code '{0}'.")]
    UnknownBank(String),
}

/// Validates a raw account number candidate
///
/// # Returns
///
/// * `Ok(AccountNumber)` - 1 to 16 ASCII digits
/// * `Err(ValidationError)` - The first rule the candidate breaks
///
/// # Example
///
/// ```
/// use pk_iban_generator::core::validator::{validate_account_number, ValidationError};
///
/// assert!(validate_account_number("1234567890123").is_ok());
/// assert_eq!(
///     validate_account_number("12a4"),
///     Err(ValidationError::NonDigitAccountNumber)
/// );
/// ```
pub fn validate_account_number(candidate: &str) -> Result<AccountNumber, ValidationError> {
    if candidate.is_empty() {
        return Err(ValidationError::EmptyAccountNumber);
    }

    if !candidate.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::NonDigitAccountNumber);
    }

    // All ASCII at this point, so byte length == character count
    if candidate.len() > ACCOUNT_NUMBER_LENGTH {
        return Err(ValidationError::AccountNumberTooLong);
    }

    Ok(AccountNumber::new_unchecked(candidate))
}

/// Validates the bank selection against the registry
///
/// An absent or empty selection is `NoBankSelected`. Anything else must
/// match a registry code exactly.
pub fn validate_bank_selection(
    selection: Option<&str>,
    registry: &BankRegistry,
) -> Result<BankCode, ValidationError> {
    let code = match selection {
        Some(code) if !code.is_empty() => code,
        _ => return Err(ValidationError::NoBankSelected),
    };

    registry
        .find(code)
        .map(|entry| entry.code.clone())
        .ok_or_else(|| ValidationError::UnknownBank(code.to_string()))
}
