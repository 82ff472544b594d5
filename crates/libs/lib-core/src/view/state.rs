use alloy_primitives::Address;

use crate::chain::TxReceipt;
use crate::error::SwapError;
use crate::model::{Leg, SwapMode, SwapRequest};
use crate::swap::SwapPhase;

/// Action-button label when nothing is happening.
pub const IDLE_LABEL: &str = "Swap";

/// Label shown while the success indicator is up.
pub const SUCCESS_LABEL: &str = "Success ✓";

/// Label on the action button while a swap is in flight.
pub const PROCESSING_LABEL: &str = "Processing...";

/// Flat fee used for the decorative receive estimate.
pub const ESTIMATE_FEE_FACTOR: f64 = 0.99;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark-theme",
            Theme::Light => "light-theme",
        }
    }

    /// Icon on the toggle: the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

/// Resting or in-flight status of the swap form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    InFlight(SwapPhase),
    Success,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Idle => IDLE_LABEL,
            Status::InFlight(phase) => phase.label(),
            Status::Success => SUCCESS_LABEL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A user-facing message shown above the form until dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// UI state of the swap page.
///
/// Invariants: `loading` is true exactly between [`ViewState::begin_submit`]
/// and [`ViewState::finish`]; the amount cannot be edited and a second submit
/// is refused while it is set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    theme: Theme,
    mode: SwapMode,
    amount: String,
    token_in: Option<String>,
    token_out: Option<String>,
    account: Option<Address>,
    status: Status,
    loading: bool,
    notice: Option<Notice>,
    success_ticket: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    // region:    --- Theme

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    // endregion: --- Theme

    // region:    --- Form

    pub fn mode(&self) -> SwapMode {
        self.mode
    }

    /// Switch direction. The amount and selections are kept.
    pub fn set_mode(&mut self, mode: SwapMode) {
        self.mode = mode;
    }

    /// Input and output legs for the current mode.
    pub fn legs(&self) -> (Leg, Leg) {
        (self.input_leg(), self.output_leg())
    }

    /// Which input control the "You Pay" row shows.
    pub fn input_leg(&self) -> Leg {
        self.mode.input_leg()
    }

    /// Which control the "You Receive" row shows.
    pub fn output_leg(&self) -> Leg {
        self.mode.output_leg()
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Returns `false` (and changes nothing) while a swap is in flight.
    pub fn set_amount(&mut self, amount: impl Into<String>) -> bool {
        if self.loading {
            return false;
        }
        self.amount = amount.into();
        true
    }

    pub fn token_in(&self) -> Option<&str> {
        self.token_in.as_deref()
    }

    pub fn token_out(&self) -> Option<&str> {
        self.token_out.as_deref()
    }

    pub fn select_input(&mut self, ticker: Option<String>) {
        self.token_in = ticker.filter(|t| !t.is_empty());
    }

    pub fn select_output(&mut self, ticker: Option<String>) {
        self.token_out = ticker.filter(|t| !t.is_empty());
    }

    /// Decorative receive estimate (flat 1% fee). Never used in a transaction.
    pub fn estimated_receive(&self) -> String {
        shared::format_estimate(&self.amount, ESTIMATE_FEE_FACTOR)
    }

    /// The form contents as a request.
    pub fn request(&self) -> SwapRequest {
        SwapRequest {
            mode: self.mode,
            input_token: self.token_in.clone(),
            output_token: self.token_out.clone(),
            amount: self.amount.clone(),
        }
    }

    // endregion: --- Form

    // region:    --- Session

    pub fn account(&self) -> Option<Address> {
        self.account
    }

    pub fn set_account(&mut self, account: Address) {
        self.account = Some(account);
    }

    /// "Connect Wallet", or `0x1234...abcd` once connected.
    pub fn connect_label(&self) -> String {
        match self.account {
            Some(account) => shared::truncate_address(&account.to_string()),
            None => "Connect Wallet".to_string(),
        }
    }

    // endregion: --- Session

    // region:    --- Status

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn action_label(&self) -> &'static str {
        if self.loading {
            PROCESSING_LABEL
        } else {
            self.status.label()
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.amount.trim().is_empty()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            message: message.into(),
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Enter the in-flight state and capture the request.
    ///
    /// Returns `None` when a swap is already in flight.
    pub fn begin_submit(&mut self) -> Option<SwapRequest> {
        if self.loading {
            return None;
        }
        self.loading = true;
        self.notice = None;
        self.status = Status::InFlight(SwapPhase::Validating);
        Some(self.request())
    }

    pub fn set_phase(&mut self, phase: SwapPhase) {
        if self.loading {
            self.status = Status::InFlight(phase);
        }
    }

    /// Leave the in-flight state.
    ///
    /// On success the form is cleared and the success label shown; the
    /// returned ticket must be passed to [`ViewState::revert_status`] after the
    /// reset delay. On failure the form is kept for a retry and the error
    /// message becomes the notice.
    pub fn finish(&mut self, outcome: &Result<TxReceipt, SwapError>) -> Option<u64> {
        self.loading = false;
        match outcome {
            Ok(_) => {
                self.amount.clear();
                self.token_in = None;
                self.token_out = None;
                self.status = Status::Success;
                self.success_ticket += 1;
                Some(self.success_ticket)
            }
            Err(err) => {
                self.status = Status::Idle;
                self.set_notice(NoticeKind::Error, err.user_message());
                None
            }
        }
    }

    /// Drop the success label, unless a newer swap has replaced it.
    pub fn revert_status(&mut self, ticket: u64) -> bool {
        if self.status == Status::Success && ticket == self.success_ticket {
            self.status = Status::Idle;
            true
        } else {
            false
        }
    }

    // endregion: --- Status
}
