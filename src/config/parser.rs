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

//! src/config/parser.rs
//!
//! Bank registry file parser
//!
//! One bank per line, logo optional:
//!
//! ```text
//! # Pakistani banks
//! Meezan Bank = MEZN, assets/logos/meezan.png
//! Habib Bank Limited (HBL) = HABB
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Errors carry the
//! 1-based line number.

use nom::{
    bytes::complete::{take_until, take_while1},
    character::complete::{char, space0},
    combinator::opt,
    sequence::preceded,
    IResult, Parser,
};

use crate::config::error::ConfigError;
use crate::core::{BankEntry, BankRegistry};

/// A bank line split into its fields, before any validation
#[derive(Debug, PartialEq)]
pub struct BankLine<'a> {
    pub display_name: &'a str,
    pub code: &'a str,
    pub logo: Option<&'a str>,
}

/// Parse a complete registry file
///
/// # Returns
///
/// A sorted registry, or the first error found
///
/// # Example
///
/// ```
/// use pk_iban_generator::config::parser::parse_registry;
///
/// let registry = parse_registry("Meezan Bank = MEZN\nJS Bank = JSBL, js.png\n")?;
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.entries()[0].display_name, "JS Bank");
/// # Ok::<(), pk_iban_generator::config::ConfigError>(())
/// ```
pub fn parse_registry(content: &str) -> Result<BankRegistry, ConfigError> {
    let mut entries = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1;

        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let parsed = match parse_bank_line(line_trimmed) {
            Ok(("", parsed)) => parsed,
            Ok((rest, _)) => {
                return Err(ConfigError::InvalidSyntax {
                    line: line_num,
                    message: format!("unexpected trailing input '{}'", rest),
                });
            }
            Err(e) => {
                return Err(ConfigError::InvalidSyntax {
                    line: line_num,
                    message: format!("{:?}", e),
                });
            }
        };

        if parsed.display_name.is_empty() {
            return Err(ConfigError::InvalidSyntax {
                line: line_num,
                message: "missing bank name".to_string(),
            });
        }

        let entry = BankEntry::new(parsed.display_name, parsed.code, parsed.logo).map_err(|_| {
            ConfigError::InvalidBankCode {
                line: line_num,
                code: parsed.code.to_string(),
            }
        })?;
        entries.push(entry);
    }

    Ok(BankRegistry::new(entries)?)
}

/// Parse a single bank line
///
/// Format: NAME = CODE[, LOGO]
pub fn parse_bank_line(input: &str) -> IResult<&str, BankLine<'_>> {
    let (input, display_name) = take_until("=")(input)?;
    let (input, _) = (char('='), space0).parse(input)?;
    let (input, code) = take_while1(|c: char| c.is_ascii_alphanumeric())(input)?;
    let (input, logo) = opt(preceded(
        (space0, char(','), space0),
        take_while1(|c: char| c != '\n'),
    ))
    .parse(input)?;
    let (input, _) = space0(input)?;

    Ok((
        input,
        BankLine {
            display_name: display_name.trim(),
            code,
            logo: logo.map(str::trim).filter(|s| !s.is_empty()),
        },
    ))
}
