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

//! Pakistan IBAN Generator
//!
//! Builds International Bank Account Numbers for Pakistani bank accounts
//! from a raw account number and a bank code.
//!
//! # Features
//!
//! - **Input Validation:** Empty, non-digit and over-long account numbers rejected
//! - **BBAN Assembly:** Bank code + account number zero-padded to 16 digits
//! - **ISO 7064 MOD 97-10:** Check digits via digit-by-digit reduction
//! - **ISO 13616 Validation:** Verify any IBAN's checksum
//! - **Bank Registry:** Built-in table or a registry file
//! - **Session Controller:** Form state machine for interactive front ends
//!
//! # Architecture
//!
//! - **`core`:** Pure computation (types, validation, checksum, formatting, registry)
//! - **`config`:** Loading bank registries from disk
//! - **`session`:** Interactive form state and clipboard seam
//!
//! # Examples
//!
//! ## Generating an IBAN
//!
//! ```
//! use pk_iban_generator::core::{generate_iban, BankRegistry};
//!
//! let registry = BankRegistry::builtin();
//! let iban = generate_iban("1234567890123", "HABB", &registry)?;
//! assert_eq!(iban.as_str(), "PK29 HABB 0001 2345 6789 0123");
//! # Ok::<(), pk_iban_generator::core::ValidationError>(())
//! ```
//!
//! ## Verifying an IBAN
//!
//! ```
//! use pk_iban_generator::core::validate_iban;
//!
//! assert!(validate_iban("PK29 HABB 0001 2345 6789 0123").is_ok());
//! assert!(validate_iban("PK30 HABB 0001 2345 6789 0123").is_err());
//! ```

pub mod config;
pub mod core;
pub mod session;

// Re-export commonly used types for convenience
pub use core::{generate_iban, BankRegistry, FormattedIban, ValidationError};
