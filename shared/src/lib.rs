use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub mod chart;
pub mod error;
pub mod formatter;
pub mod modal;
pub mod refresh;
pub mod submit;

pub use chart::{ChartGeometry, ChartPlot, ChartView, ChartVisibility, ChartWidget, WidgetSlot};
pub use error::{ApiError, DraftError};
pub use modal::{TransactionForm, TransactionModal};
pub use refresh::{load_balance, load_chart, DashboardApi, RefreshSequence, RefreshTarget};
pub use submit::{submit_and_release, submit_transaction, SubmitControl, SubmitOutcome};

/// Point-in-time read of the account, returned by `GET /api/balance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    /// Current account balance in dollars
    pub balance: f64,
    /// Number of transactions recorded so far
    pub transaction_count: u64,
}

/// Historical balance series, returned by `GET /api/transactions/chart_data`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// ISO dates (YYYY-MM-DD), oldest first
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labels: Vec<String>,
    /// Balance at the end of each labelled day
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<f64>,
}

/// Absent and `null` lists both read as empty
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ChartSeries {
    /// An empty series is the "no data yet" state, not an error
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Reject series whose labels and values do not line up
    pub fn validated(self) -> Result<Self, ApiError> {
        if self.labels.len() != self.data.len() {
            return Err(ApiError::Decode(format!(
                "chart series has {} labels but {} values",
                self.labels.len(),
                self.data.len()
            )));
        }
        Ok(self)
    }
}

/// Which way money moves in a transaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Deposit,
    Withdraw,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Deposit => "deposit",
            Direction::Withdraw => "withdraw",
        }
    }

    /// Label of the submit button while this tab is selected
    pub fn submit_label(&self) -> &'static str {
        match self {
            Direction::Deposit => "Add Deposit",
            Direction::Withdraw => "Add Withdrawal",
        }
    }

    /// Button style variant for this tab
    pub fn button_class(&self) -> &'static str {
        match self {
            Direction::Deposit => "btn btn-success",
            Direction::Withdraw => "btn btn-warning",
        }
    }

    /// Tab caption
    pub fn tab_label(&self) -> &'static str {
        match self {
            Direction::Deposit => "Deposit",
            Direction::Withdraw => "Withdraw",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction payload built from the form, posted to `/add_transaction`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub direction: Direction,
    /// Amount exactly as typed (already sanitized), e.g. "12.50"
    pub amount: String,
    /// Free text, empty when the user left it blank
    pub description: String,
    /// Date of the transaction (YYYY-MM-DD)
    pub date: String,
}

/// Server acknowledgement of a submitted transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Display-ready values for the balance card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceDisplay {
    /// Balance with exactly two decimals, without currency sign
    pub amount: String,
    /// "1 transaction" / "N transactions"
    pub count_label: String,
}

impl From<&BalanceSnapshot> for BalanceDisplay {
    fn from(snapshot: &BalanceSnapshot) -> Self {
        Self {
            amount: formatter::format_balance(snapshot.balance),
            count_label: formatter::format_transaction_count(snapshot.transaction_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_wire_format() {
        assert_eq!(serde_json::to_string(&Direction::Deposit).unwrap(), "\"deposit\"");
        assert_eq!(serde_json::to_string(&Direction::Withdraw).unwrap(), "\"withdraw\"");
        let parsed: Direction = serde_json::from_str("\"withdraw\"").unwrap();
        assert_eq!(parsed, Direction::Withdraw);
    }

    #[test]
    fn test_direction_visuals() {
        assert_eq!(Direction::Deposit.submit_label(), "Add Deposit");
        assert_eq!(Direction::Withdraw.submit_label(), "Add Withdrawal");
        assert!(Direction::Deposit.button_class().contains("btn-success"));
        assert!(Direction::Withdraw.button_class().contains("btn-warning"));
    }

    #[test]
    fn test_draft_serializes_to_backend_shape() {
        let draft = TransactionDraft {
            direction: Direction::Deposit,
            amount: "12.50".to_string(),
            description: String::new(),
            date: "2024-01-05".to_string(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "direction": "deposit",
                "amount": "12.50",
                "description": "",
                "date": "2024-01-05"
            })
        );
    }

    #[test]
    fn test_chart_series_missing_fields_default_to_empty() {
        let series: ChartSeries = serde_json::from_str("{}").unwrap();
        assert!(series.is_empty());
        assert!(series.data.is_empty());
    }

    #[test]
    fn test_chart_series_null_fields_default_to_empty() {
        let series: ChartSeries = serde_json::from_str(r#"{"labels": null, "data": null}"#).unwrap();
        assert!(series.is_empty());
        assert!(series.data.is_empty());
    }

    #[test]
    fn test_chart_series_length_mismatch_is_malformed() {
        let series = ChartSeries {
            labels: vec!["2024-01-05".to_string(), "2024-01-06".to_string()],
            data: vec![1.0],
        };
        assert!(matches!(series.validated(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_balance_snapshot_rejects_negative_count() {
        let parsed = serde_json::from_str::<BalanceSnapshot>(r#"{"balance": 1.0, "transaction_count": -1}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_balance_display_from_snapshot() {
        let display = BalanceDisplay::from(&BalanceSnapshot { balance: 1234.5, transaction_count: 1 });
        assert_eq!(display.amount, "1234.50");
        assert_eq!(display.count_label, "1 transaction");

        let display = BalanceDisplay::from(&BalanceSnapshot { balance: 0.0, transaction_count: 0 });
        assert_eq!(display.amount, "0.00");
        assert_eq!(display.count_label, "0 transactions");
    }

    #[test]
    fn test_transaction_response_without_message() {
        let parsed: TransactionResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(parsed.success);
        assert!(parsed.message.is_empty());
    }
}
