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

//! src/core/builder.rs
//!
//! IBAN assembly and formatting
//!
//! `generate_iban` runs the whole pipeline:
//! 1. Validate the account number (first failure wins)
//! 2. Validate the bank selection against the registry
//! 3. Assemble the BBAN
//! 4. Compute check digits
//! 5. Group the IBAN for display
//!
//! Steps 3 to 5 are total once the inputs have been validated.

use tracing::debug;

use crate::core::checksum::compute_check_digits;
use crate::core::registry::BankRegistry;
use crate::core::types::{
    AccountNumber, BankCode, Bban, FormattedIban, Iban, ACCOUNT_NUMBER_LENGTH, COUNTRY_CODE,
    GROUP_WIDTH,
};
use crate::core::validator::{validate_account_number, validate_bank_selection, ValidationError};

/// Assembles the BBAN from a bank code and an account number
///
/// The account number is left-padded with `'0'` to 16 digits. It is never
/// truncated; `AccountNumber` already guarantees at most 16 digits.
pub fn assemble_bban(bank: &BankCode, account: &AccountNumber) -> Bban {
    debug_assert!(account.as_str().len() <= ACCOUNT_NUMBER_LENGTH);
    Bban::new_unchecked(format!("{}{}", bank, account.padded()))
}

/// Builds the unformatted IBAN for a BBAN
pub fn build_iban(bban: &Bban) -> Iban {
    let check_digits = compute_check_digits(bban.as_str(), COUNTRY_CODE);
    Iban::from_parts(COUNTRY_CODE, check_digits, bban)
}

/// Groups an IBAN into space-separated blocks of four
///
/// The last block may be shorter when the length is not a multiple of four.
///
/// # Example
///
/// ```
/// use pk_iban_generator::core::builder::format_iban;
///
/// assert_eq!(
///     format_iban("PK29HABB0001234567890123").as_str(),
///     "PK29 HABB 0001 2345 6789 0123"
/// );
/// ```
pub fn format_iban(iban: &str) -> FormattedIban {
    let chars: Vec<char> = iban.chars().collect();
    let grouped = chars
        .chunks(GROUP_WIDTH)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");

    FormattedIban::new_unchecked(grouped)
}

/// Removes all whitespace from a (formatted) IBAN
pub fn compact(formatted: &str) -> String {
    formatted.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Generates a formatted IBAN from raw inputs
///
/// Account number errors are reported before bank errors.
///
/// # Arguments
///
/// * `account_number` - Raw account number as typed
/// * `bank_code` - Selected bank code (empty string means nothing selected)
/// * `registry` - Banks the code must belong to
///
/// # Example
///
/// ```
/// use pk_iban_generator::core::{builder::generate_iban, registry::BankRegistry};
///
/// let registry = BankRegistry::builtin();
/// let iban = generate_iban("1234567890123", "HABB", &registry)?;
/// assert_eq!(iban.as_str(), "PK29 HABB 0001 2345 6789 0123");
/// # Ok::<(), pk_iban_generator::core::ValidationError>(())
/// ```
pub fn generate_iban(
    account_number: &str,
    bank_code: &str,
    registry: &BankRegistry,
) -> Result<FormattedIban, ValidationError> {
    let account = validate_account_number(account_number)?;
    let bank = validate_bank_selection(Some(bank_code), registry)?;

    let bban = assemble_bban(&bank, &account);
    let iban = build_iban(&bban);

    debug!(bank = %bank, iban = %iban, "generated IBAN");

    Ok(format_iban(iban.as_str()))
}
