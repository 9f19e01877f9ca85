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

//! src/core/mod.rs
//!
//! Core IBAN logic
//!
//! This module contains the pure computation behind IBAN generation:
//! - Value types for account numbers, bank codes, BBANs and IBANs
//! - Input validation for account numbers and bank selection
//! - ISO 7064 MOD 97-10 check digits and ISO 13616 validation
//! - BBAN assembly and display formatting
//! - The bank registry the selection is checked against
//!
//! Nothing here touches files, clocks or terminals, so every function can
//! be unit tested directly.

pub mod builder;
pub mod checksum;
pub mod registry;
pub mod types;
pub mod validator;

pub use builder::{assemble_bban, format_iban, generate_iban};
pub use checksum::{compute_check_digits, validate_iban, IbanError};
pub use registry::{BankEntry, BankRegistry, RegistryError};
pub use types::*;
pub use validator::{validate_account_number, validate_bank_selection, ValidationError};

#[cfg(test)]
mod tests;
