use crate::error::DraftError;
use crate::{Direction, TransactionDraft};

/// Values of the transaction dialog's inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionForm {
    pub direction: Direction,
    pub amount: String,
    pub description: String,
    pub date: String,
}

impl TransactionForm {
    /// Validate the amount and build the payload to post
    pub fn to_draft(&self) -> Result<TransactionDraft, DraftError> {
        let amount = self.amount.trim();
        if amount.is_empty() {
            return Err(DraftError::MissingAmount);
        }
        match amount.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => {}
            _ => return Err(DraftError::InvalidAmount(amount.to_string())),
        }

        Ok(TransactionDraft {
            direction: self.direction,
            amount: amount.to_string(),
            description: self.description.clone(),
            date: self.date.clone(),
        })
    }
}

/// Open/closed state of the deposit/withdraw dialog plus its form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionModal {
    pub is_open: bool,
    pub form: TransactionForm,
}

impl TransactionModal {
    /// Reset the form, default the date to `today`, select the tab and show
    /// the dialog. The reset has to come before the date default.
    pub fn open(&mut self, direction: Direction, today: &str) {
        self.form = TransactionForm::default();
        self.form.date = today.to_string();
        self.switch_tab(direction);
        self.is_open = true;
    }

    /// Change direction without touching any field values
    pub fn switch_tab(&mut self, direction: Direction) {
        self.form.direction = direction;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn direction(&self) -> Direction {
        self.form.direction
    }

    /// CSS classes for the tab representing `tab`
    pub fn tab_class(&self, tab: Direction) -> &'static str {
        if tab == self.form.direction {
            "tab tab-active"
        } else {
            "tab"
        }
    }
}
