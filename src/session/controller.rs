//! Session controller - owns the form state and runs IBAN generation
//!
//! # Responsibilities
//!
//! - Hold the raw account number and bank selection exactly as entered
//! - Re-validate the account number on every edit
//! - Run the generation state machine
//! - Copy results to a clipboard sink and track the "copied" indicator
//!
//! # State machine
//!
//! ```text
//! Idle --generate--> Validating --+--> Error(reason)
//!                                 +--> Ready(formatted IBAN)
//! Error | Ready --edit--> Idle
//! any --clear--> Idle (all fields empty)
//! ```
//!
//! The controller knows nothing about widgets. A front end reads its state
//! after each call and renders it.

use chrono::{DateTime, Duration, Local};
use tracing::{debug, trace, warn};

use crate::core::{
    generate_iban, validate_account_number, BankEntry, BankRegistry, FormattedIban,
    ValidationError,
};
use crate::session::clipboard::ClipboardSink;

/// How long the "copied" indicator stays on, in milliseconds
pub const COPIED_INDICATOR_MS: i64 = 2000;

/// Generation state
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// Nothing generated since the last edit
    #[default]
    Idle,
    /// Generation in progress
    Validating,
    /// Last generation failed
    Error(ValidationError),
    /// Last generation succeeded
    Ready(FormattedIban),
}

/// Interactive IBAN generation session
pub struct Controller {
    /// Banks the selection is checked against
    registry: BankRegistry,
    /// Account number exactly as typed
    account_number: String,
    /// Selected bank code, if any
    bank_code: Option<String>,
    /// Generation state
    state: SessionState,
    /// Live validation message for the account number field
    field_error: Option<ValidationError>,
    /// True while a generation request runs
    is_loading: bool,
    /// When the result was last copied
    copied_at: Option<DateTime<Local>>,
}

impl Controller {
    /// Creates an empty session over the given registry
    ///
    /// # Example
    ///
    /// ```
    /// use pk_iban_generator::core::BankRegistry;
    /// use pk_iban_generator::session::Controller;
    ///
    /// let mut controller = Controller::new(BankRegistry::builtin());
    /// controller.set_account_number("1234567890123");
    /// controller.select_bank("HABB");
    /// let iban = controller.generate()?;
    /// assert_eq!(iban.as_str(), "PK29 HABB 0001 2345 6789 0123");
    /// # Ok::<(), pk_iban_generator::core::ValidationError>(())
    /// ```
    pub fn new(registry: BankRegistry) -> Self {
        Self {
            registry,
            account_number: String::new(),
            bank_code: None,
            state: SessionState::Idle,
            field_error: None,
            is_loading: false,
            copied_at: None,
        }
    }

    /// Banks available for selection, sorted by display name
    pub fn banks(&self) -> &[BankEntry] {
        self.registry.entries()
    }

    pub fn registry(&self) -> &BankRegistry {
        &self.registry
    }

    /// Account number as typed
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn bank_code(&self) -> Option<&str> {
        self.bank_code.as_deref()
    }

    /// Registry entry for the selected bank (for name and logo display)
    pub fn selected_bank(&self) -> Option<&BankEntry> {
        self.bank_code
            .as_deref()
            .and_then(|code| self.registry.find(code))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Formatted IBAN from the last successful generation
    pub fn result(&self) -> Option<&FormattedIban> {
        match &self.state {
            SessionState::Ready(iban) => Some(iban),
            _ => None,
        }
    }

    /// Message to show the user
    ///
    /// A generation failure takes precedence over the live field message.
    pub fn error(&self) -> Option<&ValidationError> {
        match &self.state {
            SessionState::Error(e) => Some(e),
            _ => self.field_error.as_ref(),
        }
    }

    /// Updates the account number and re-runs live validation
    ///
    /// The value is stored as-is, even when invalid, so the front end can
    /// show exactly what was typed.
    pub fn set_account_number(&mut self, raw: &str) {
        self.account_number = raw.to_string();
        self.field_error = validate_account_number(raw).err();
        self.reset_result();

        trace!(len = raw.len(), error = ?self.field_error, "account number edited");
    }

    /// Updates the bank selection
    ///
    /// An empty code clears the selection. Live validation of the account
    /// number runs again, so an account error from a failed generation stays
    /// visible after the state drops back to `Idle`.
    pub fn select_bank(&mut self, code: &str) {
        self.bank_code = if code.is_empty() {
            None
        } else {
            Some(code.to_string())
        };
        self.field_error = validate_account_number(&self.account_number).err();
        self.reset_result();

        trace!(bank = ?self.bank_code, "bank selected");
    }

    /// Validates the current inputs and generates the IBAN
    ///
    /// Account number problems are reported before bank problems.
    ///
    /// # Returns
    ///
    /// * `Ok(FormattedIban)` - Session is now `Ready`
    /// * `Err(ValidationError)` - Session is now `Error`, previous result cleared
    pub fn generate(&mut self) -> Result<FormattedIban, ValidationError> {
        self.is_loading = true;
        self.copied_at = None;
        self.state = SessionState::Validating;

        let bank_code = self.bank_code.as_deref().unwrap_or("");
        let outcome = generate_iban(&self.account_number, bank_code, &self.registry);

        self.state = match &outcome {
            Ok(iban) => {
                debug!(iban = %iban, "session ready");
                SessionState::Ready(iban.clone())
            }
            Err(e) => {
                debug!(error = %e, "session generation failed");
                SessionState::Error(e.clone())
            }
        };
        self.is_loading = false;

        outcome
    }

    /// Returns every field to its initial empty state
    pub fn clear(&mut self) {
        self.account_number.clear();
        self.bank_code = None;
        self.state = SessionState::Idle;
        self.field_error = None;
        self.is_loading = false;
        self.copied_at = None;
    }

    /// Copies the current result (without spaces) to the clipboard
    ///
    /// Failures are logged and otherwise ignored; the indicator simply
    /// doesn't turn on.
    ///
    /// # Returns
    ///
    /// True if something was copied
    pub fn copy_result(&mut self, sink: &mut dyn ClipboardSink, now: DateTime<Local>) -> bool {
        let Some(iban) = self.result() else {
            return false;
        };
        let compact = iban.compact();

        match sink.write_text(&compact) {
            Ok(()) => {
                self.copied_at = Some(now);
                true
            }
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                false
            }
        }
    }

    /// Whether the "copied" indicator is on at `now`
    ///
    /// Turns off by itself `COPIED_INDICATOR_MS` after the copy.
    pub fn is_copied(&self, now: DateTime<Local>) -> bool {
        self.copied_at.is_some_and(|at| {
            let elapsed = now.signed_duration_since(at);
            elapsed >= Duration::zero() && elapsed < Duration::milliseconds(COPIED_INDICATOR_MS)
        })
    }

    fn reset_result(&mut self) {
        self.state = SessionState::Idle;
        self.copied_at = None;
    }
}
