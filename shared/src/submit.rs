use std::cell::RefCell;

use crate::error::{ApiError, DraftError};
use crate::modal::TransactionForm;
use crate::Direction;
use crate::refresh::{DashboardApi, RefreshTarget};

/// Submit button text while a request is in flight
pub const PROCESSING_LABEL: &str = "Processing...";

/// Notice for transport or decoding failures on submit
pub const GENERIC_FAILURE: &str = "An error occurred while processing the transaction";

/// Notice for an accepted transaction when the server sends no message
pub const DEFAULT_SUCCESS: &str = "Transaction added successfully";

/// Busy state of the submit button.
///
/// An attempt claims the control with `try_begin` and releases it with
/// `finish`. While claimed, further attempts are refused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitControl {
    in_flight: bool,
}

impl SubmitControl {
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    pub fn label(&self, direction: Direction) -> &'static str {
        if self.in_flight {
            PROCESSING_LABEL
        } else {
            direction.submit_label()
        }
    }
}

/// How a single submission attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Rejected locally; no request was sent
    Invalid(DraftError),
    /// Server recorded the transaction
    Accepted { message: String },
    /// Server answered `success: false`
    Rejected { message: String },
    /// Transport, status or parse failure
    Failed(ApiError),
}

impl SubmitOutcome {
    /// Message to put in front of the user
    pub fn notice(&self) -> String {
        match self {
            SubmitOutcome::Invalid(e) => e.user_message().to_string(),
            SubmitOutcome::Accepted { message } if message.trim().is_empty() => DEFAULT_SUCCESS.to_string(),
            SubmitOutcome::Accepted { message } => message.clone(),
            SubmitOutcome::Rejected { message } => format!("Error: {}", message),
            SubmitOutcome::Failed(_) => GENERIC_FAILURE.to_string(),
        }
    }

    pub fn closes_dialog(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }

    /// Views to reload after this outcome, each exactly once
    pub fn refreshes(&self) -> &'static [RefreshTarget] {
        match self {
            SubmitOutcome::Accepted { .. } => &[RefreshTarget::Chart, RefreshTarget::Balance],
            _ => &[],
        }
    }
}

/// Validate the form and, if it holds up, post it
pub async fn submit_transaction<A: DashboardApi>(api: &A, form: &TransactionForm) -> SubmitOutcome {
    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(e) => return SubmitOutcome::Invalid(e),
    };

    match api.add_transaction(&draft).await {
        Ok(response) if response.success => SubmitOutcome::Accepted { message: response.message },
        Ok(response) => SubmitOutcome::Rejected { message: response.message },
        Err(e) => SubmitOutcome::Failed(e),
    }
}

/// Run an attempt that already holds `control`, then release it. The
/// release happens exactly once whichever way the attempt ends.
pub async fn submit_and_release<A: DashboardApi>(
    api: &A,
    form: &TransactionForm,
    control: &RefCell<SubmitControl>,
) -> SubmitOutcome {
    let outcome = submit_transaction(api, form).await;
    control.borrow_mut().finish();
    outcome
}
