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

//! ISO 7064 MOD 97-10 check digits and ISO 13616 IBAN validation
//!
//! # Algorithm
//!
//! Letters are transliterated to two-digit numbers (A=10 ... Z=35) and the
//! resulting digit string is reduced modulo 97 one digit at a time:
//!
//! ```text
//! remainder = (remainder * 10 + digit) % 97
//! ```
//!
//! A PK check string is 30+ digits long, well past `u64`, so the string is
//! never parsed as a single integer.
//!
//! # Check digit range
//!
//! The raw value is `(98 - remainder) % 97`. Raw 0 is written as 97 and
//! raw 1 as 98, which keeps every check value in 02..=98. Both substitutes
//! are congruent to the raw value mod 97, so the IBAN validity check is
//! unaffected.

use thiserror::Error;
use tracing::trace;

use crate::core::types::{CheckDigits, COUNTRY_CODE, IBAN_LENGTH};

/// Errors from validating an existing IBAN
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum IbanError {
    /// Fewer than five characters after removing spaces
    #[error("IBAN too short: {0} characters")]
    TooShort(usize),

    /// Anything other than ASCII letters and digits
    #[error("Invalid character '{0}' in IBAN")]
    InvalidCharacter(char),

    /// First two characters are not letters or the next two are not digits
    #[error("Malformed IBAN header '{0}'")]
    MalformedHeader(String),

    /// Wrong length for the country
    #[error("Wrong IBAN length for {country}: expected {expected}, found {found}")]
    WrongLength {
        country: String,
        expected: usize,
        found: usize,
    },

    /// MOD 97 remainder is not 1
    #[error("Checksum mismatch: remainder {0}, expected 1")]
    ChecksumMismatch(u32),
}

/// Transliterates letters to their two-digit codes
///
/// `A`-`Z` (and `a`-`z`) become `10`-`35`; digits pass through unchanged.
/// Other characters are dropped. Callers are expected to hand in
/// alphanumeric input.
///
/// # Example
///
/// ```
/// use pk_iban_generator::core::checksum::transliterate;
///
/// assert_eq!(transliterate("PK00"), "252000");
/// ```
pub fn transliterate(input: &str) -> String {
    let mut digits = String::with_capacity(input.len() * 2);

    for c in input.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if c.is_ascii_alphabetic() {
            let value = c.to_ascii_uppercase() as u32 - 'A' as u32 + 10;
            digits.push_str(&value.to_string());
        }
    }

    digits
}

/// Reduces a decimal digit string modulo 97
///
/// Non-digit characters are skipped.
pub fn mod97(digits: &str) -> u32 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0, |remainder, digit| (remainder * 10 + digit) % 97)
}

/// Computes the check digits for a BBAN
///
/// Builds `bban + country_code + "00"`, transliterates it, reduces it
/// modulo 97 and derives the two check digits.
///
/// # Example
///
/// ```
/// use pk_iban_generator::core::checksum::compute_check_digits;
///
/// let digits = compute_check_digits("HABB0001234567890123", "PK");
/// assert_eq!(digits.to_string(), "29");
/// ```
pub fn compute_check_digits(bban: &str, country_code: &str) -> CheckDigits {
    let check_string = format!("{}{}00", bban, country_code);
    let remainder = mod97(&transliterate(&check_string));

    let value = match (98 - remainder) % 97 {
        0 => 97,
        1 => 98,
        other => other,
    };

    trace!(bban, remainder, value, "computed check digits");

    // value is in 2..=98
    CheckDigits::new_unchecked(value as u8)
}

/// Validates an IBAN using the ISO 13616 check
///
/// Spaces are ignored. The first four characters are moved to the end,
/// the result is transliterated, and the remainder mod 97 must be 1.
/// For `PK` IBANs the length must also be 24.
pub fn validate_iban(iban: &str) -> Result<(), IbanError> {
    let compact: String = iban.chars().filter(|c| !c.is_whitespace()).collect();

    if compact.len() < 5 {
        return Err(IbanError::TooShort(compact.len()));
    }

    if let Some(bad) = compact.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(IbanError::InvalidCharacter(bad));
    }

    let compact = compact.to_ascii_uppercase();
    let (header, rest) = compact.split_at(4);
    let header_ok = header[..2].chars().all(|c| c.is_ascii_alphabetic())
        && header[2..].chars().all(|c| c.is_ascii_digit());
    if !header_ok {
        return Err(IbanError::MalformedHeader(header.to_string()));
    }

    if header.starts_with(COUNTRY_CODE) && compact.len() != IBAN_LENGTH {
        return Err(IbanError::WrongLength {
            country: COUNTRY_CODE.to_string(),
            expected: IBAN_LENGTH,
            found: compact.len(),
        });
    }

    let rotated = format!("{}{}", rest, header);
    match mod97(&transliterate(&rotated)) {
        1 => Ok(()),
        remainder => Err(IbanError::ChecksumMismatch(remainder)),
    }
}
