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

use crate::core::checksum::{compute_check_digits, mod97, transliterate, validate_iban, IbanError};

#[test]
fn test_transliterate_letters() {
    assert_eq!(transliterate("A"), "10");
    assert_eq!(transliterate("Z"), "35");
    assert_eq!(transliterate("PK"), "2520");
    assert_eq!(transliterate("HABB"), "17101111");
}

#[test]
fn test_transliterate_digits_pass_through() {
    assert_eq!(transliterate("0123456789"), "0123456789");
    assert_eq!(transliterate("A1B2"), "101112");
}

#[test]
fn test_transliterate_lowercase() {
    assert_eq!(transliterate("pk"), transliterate("PK"));
}

#[test]
fn test_mod97_small_values() {
    assert_eq!(mod97("0"), 0);
    assert_eq!(mod97("96"), 96);
    assert_eq!(mod97("97"), 0);
    assert_eq!(mod97("98"), 1);
    assert_eq!(mod97("194"), 0);
}

#[test]
fn test_mod97_beyond_u64() {
    // 30 digits, far past u64::MAX (20 digits)
    let digits = "171011110001234567890123252000";
    assert!(digits.len() > 20);
    assert_eq!(mod97(digits), 69);
}

#[test]
fn test_check_digits_golden() {
    assert_eq!(compute_check_digits("HABB0001234567890123", "PK").to_string(), "29");
    assert_eq!(compute_check_digits("MEZN0000000000000000", "PK").to_string(), "50");
    assert_eq!(compute_check_digits("SCBL1234567890123456", "PK").to_string(), "39");
    assert_eq!(compute_check_digits("ALFH0000000123456789", "PK").to_string(), "91");
}

#[test]
fn test_check_digits_raw_zero_maps_to_97() {
    // HABB + "26" reduces to remainder 1, raw value (98 - 1) % 97 = 0
    let digits = compute_check_digits("HABB0000000000000026", "PK");
    assert_eq!(digits.value(), 97);
    assert_eq!(digits.to_string(), "97");
}

#[test]
fn test_check_digits_raw_one_maps_to_98() {
    // HABB + "8" reduces to remainder 0, raw value 98 % 97 = 1
    let digits = compute_check_digits("HABB0000000000000008", "PK");
    assert_eq!(digits.value(), 98);
    assert!(validate_iban(&format!("PK{}HABB0000000000000008", digits)).is_ok());
}

#[test]
fn test_check_digits_never_00_or_01() {
    for n in 0..2000u32 {
        let bban = format!("HABB{:016}", n);
        let digits = compute_check_digits(&bban, "PK");
        assert!(
            (2..=98).contains(&digits.value()),
            "check digits {} out of range for {}",
            digits,
            bban
        );
    }
}

#[test]
fn test_zero_padded_rendering() {
    // Find a BBAN whose check value is a single digit
    let single = (0..5000u32)
        .map(|n| format!("MEZN{:016}", n))
        .map(|bban| compute_check_digits(&bban, "PK"))
        .find(|digits| digits.value() < 10)
        .unwrap();

    let rendered = single.to_string();
    assert_eq!(rendered.len(), 2);
    assert!(rendered.starts_with('0'));
}

#[test]
fn test_validate_known_ibans() {
    assert!(validate_iban("PK29HABB0001234567890123").is_ok());
    assert!(validate_iban("PK29 HABB 0001 2345 6789 0123").is_ok());
    assert!(validate_iban("pk29habb0001234567890123").is_ok());
    // Checksum primitive is country-agnostic
    assert!(validate_iban("DE44500105175407324931").is_ok());
    assert!(validate_iban("GB82 WEST 1234 5698 7654 32").is_ok());
}

#[test]
fn test_validate_checksum_mismatch() {
    assert!(matches!(
        validate_iban("PK30HABB0001234567890123"),
        Err(IbanError::ChecksumMismatch(_))
    ));
    assert!(matches!(
        validate_iban("DE45500105175407324931"),
        Err(IbanError::ChecksumMismatch(_))
    ));
}

#[test]
fn test_validate_structural_errors() {
    assert_eq!(validate_iban("PK2"), Err(IbanError::TooShort(3)));
    assert_eq!(
        validate_iban("PK29-HABB-0001"),
        Err(IbanError::InvalidCharacter('-'))
    );
    assert!(matches!(
        validate_iban("1229HABB0001234567890123"),
        Err(IbanError::MalformedHeader(_))
    ));
    assert_eq!(
        validate_iban("PK29HABB000123456789012"),
        Err(IbanError::WrongLength {
            country: "PK".to_string(),
            expected: 24,
            found: 23,
        })
    );
}
