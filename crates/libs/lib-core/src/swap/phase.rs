/// Workflow state while a swap is in flight.
///
/// `Idle`, `Success` and `Failed` are not phases: they are the view's resting
/// states, see [`crate::view::Status`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwapPhase {
    Validating,
    CheckingNetwork,
    CheckingAllowance,
    Approving,
    Swapping,
    Confirming,
}

impl SwapPhase {
    /// Status label shown on the action button's status line.
    pub fn label(self) -> &'static str {
        match self {
            SwapPhase::Validating | SwapPhase::CheckingNetwork => "Preparing...",
            SwapPhase::CheckingAllowance => "Checking allowance...",
            SwapPhase::Approving => "Approving token...",
            SwapPhase::Swapping => "Sending swap...",
            SwapPhase::Confirming => "Waiting for confirmation...",
        }
    }
}
