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

use crate::core::types::{
    AccountNumber, BankCode, CheckDigits, FormattedIban, BBAN_LENGTH, IBAN_LENGTH,
};

#[test]
fn test_layout_constants() {
    assert_eq!(BBAN_LENGTH, 20);
    assert_eq!(IBAN_LENGTH, 24);
}

#[test]
fn test_account_number_padding() {
    assert_eq!(AccountNumber::new_unchecked("0").padded(), "0000000000000000");
    assert_eq!(
        AccountNumber::new_unchecked("1234567890123456").padded(),
        "1234567890123456"
    );
}

#[test]
fn test_bank_code_shape() {
    assert!(BankCode::is_well_formed("HABB"));
    assert!(BankCode::is_well_formed("AB12"));
    assert!(!BankCode::is_well_formed("HAB"));
    assert!(!BankCode::is_well_formed("HABBB"));
    assert!(!BankCode::is_well_formed("Habb"));
    assert!(!BankCode::is_well_formed(""));
}

#[test]
fn test_check_digits_display() {
    assert_eq!(format!("{}", CheckDigits::new_unchecked(2)), "02");
    assert_eq!(format!("{}", CheckDigits::new_unchecked(29)), "29");
    assert_eq!(format!("{}", CheckDigits::new_unchecked(98)), "98");
}

#[test]
fn test_formatted_iban_compact() {
    let formatted = FormattedIban::new_unchecked("PK29 HABB 0001 2345 6789 0123".to_string());

    assert_eq!(formatted.compact(), "PK29HABB0001234567890123");
    assert_eq!(format!("{}", formatted), "PK29 HABB 0001 2345 6789 0123");
}
