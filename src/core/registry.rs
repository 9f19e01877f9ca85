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

//! src/core/registry.rs
//!
//! Bank registry
//!
//! An immutable table of supported banks. Each entry carries the display
//! name shown in bank pickers, the four-character code used in the BBAN and
//! the path of the logo asset.
//!
//! The registry is injected into generation rather than read from a global,
//! so tests can run against synthetic banks. [`BankRegistry::builtin`]
//! provides the production table; `config::load_registry` reads one from disk.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use thiserror::Error;

use crate::core::types::BankCode;

/// Errors building a registry from entries
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    /// No banks at all
    #[error("Bank registry is empty")]
    Empty,

    /// Bank code is not four uppercase letters or digits
    #[error("Invalid bank code '{0}': expected 4 uppercase letters or digits")]
    InvalidBankCode(String),

    /// Two entries share a code
    #[error("Duplicate bank code '{0}'")]
    DuplicateCode(String),
}

/// A single bank in the registry
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BankEntry {
    /// Name shown to the user (e.g. "Meezan Bank")
    pub display_name: String,

    /// Four-character identifier used in the BBAN
    pub code: BankCode,

    /// Path of the logo image, if any
    pub logo_asset_path: Option<String>,
}

impl BankEntry {
    /// Creates an entry after checking the code shape
    pub fn new(
        display_name: &str,
        code: &str,
        logo_asset_path: Option<&str>,
    ) -> Result<Self, RegistryError> {
        if !BankCode::is_well_formed(code) {
            return Err(RegistryError::InvalidBankCode(code.to_string()));
        }

        Ok(Self {
            display_name: display_name.to_string(),
            code: BankCode::new_unchecked(code),
            logo_asset_path: logo_asset_path.map(str::to_string),
        })
    }
}

/// Production table: (display name, code, logo)
const BUILTIN_BANKS: &[(&str, &str, &str)] = &[
    ("Meezan Bank", "MEZN", "assets/logos/meezan.png"),
    ("Habib Bank Limited (HBL)", "HABB", "assets/logos/hbl.png"),
    ("Standard Chartered Bank", "SCBL", "assets/logos/scb.png"),
    ("United Bank Limited (UBL)", "UBLB", "assets/logos/ubl.png"),
    ("National Bank of Pakistan (NBP)", "NBPK", "assets/logos/nbp.png"),
    ("Allied Bank Limited (ABL)", "ABPL", "assets/logos/abl.png"),
    ("Bank Alfalah", "ALFH", "assets/logos/alfalah.png"),
    ("MCB Bank Limited", "MUCB", "assets/logos/mcb.png"),
    ("Faysal Bank", "FAYS", "assets/logos/faysal.png"),
    ("Askari Bank", "ASCM", "assets/logos/askari.png"),
    ("Bank Al Habib", "BAHL", "assets/logos/bahl.png"),
    ("Soneri Bank", "SONE", "assets/logos/soneri.png"),
    ("Silkbank", "SAUD", "assets/logos/silkbank.png"),
    ("Summit Bank", "SUMB", "assets/logos/summit.png"),
    ("JS Bank", "JSBL", "assets/logos/js.png"),
];

/// Compares display names the way a user-facing list should sort
///
/// Case-insensitive first, so "bank X" and "Bank Y" interleave naturally,
/// with the raw byte order as a tie-break to keep the sort total.
pub fn compare_display_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Immutable, sorted table of supported banks
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BankRegistry {
    entries: Vec<BankEntry>,
}

impl BankRegistry {
    /// Builds a registry, sorting entries by display name
    ///
    /// # Errors
    ///
    /// * `RegistryError::Empty` - No entries given
    /// * `RegistryError::DuplicateCode` - Two entries share a code
    pub fn new(mut entries: Vec<BankEntry>) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.code.as_str()) {
                return Err(RegistryError::DuplicateCode(entry.code.to_string()));
            }
        }

        entries.sort_by(|a, b| compare_display_names(&a.display_name, &b.display_name));

        Ok(Self { entries })
    }

    /// The built-in table of Pakistani banks
    pub fn builtin() -> Self {
        let mut entries: Vec<BankEntry> = BUILTIN_BANKS
            .iter()
            .map(|(name, code, logo)| BankEntry {
                display_name: (*name).to_string(),
                code: BankCode::new_unchecked(code),
                logo_asset_path: Some((*logo).to_string()),
            })
            .collect();

        entries.sort_by(|a, b| compare_display_names(&a.display_name, &b.display_name));

        Self { entries }
    }

    /// Looks up a bank by its exact code
    pub fn find(&self, code: &str) -> Option<&BankEntry> {
        self.entries.iter().find(|entry| entry.code.as_str() == code)
    }

    /// Returns true if the code is in the registry
    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// All entries, sorted by display name
    pub fn entries(&self) -> &[BankEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BankRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
