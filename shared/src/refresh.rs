use crate::chart::ChartView;
use crate::error::ApiError;
use crate::{BalanceDisplay, BalanceSnapshot, ChartSeries, TransactionDraft, TransactionResponse};

/// The three backend calls the dashboard depends on.
///
/// The browser client implements this over `fetch`; tests use an in-memory
/// double. Futures are not `Send` since everything runs on the page's event
/// loop.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    /// `GET /api/balance`
    async fn fetch_balance(&self) -> Result<BalanceSnapshot, ApiError>;

    /// `GET /api/transactions/chart_data`
    async fn fetch_chart_series(&self) -> Result<ChartSeries, ApiError>;

    /// `POST /add_transaction`
    async fn add_transaction(&self, draft: &TransactionDraft) -> Result<TransactionResponse, ApiError>;
}

/// Which view a successful submission asks to reload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshTarget {
    Chart,
    Balance,
}

/// Fetch a fresh snapshot and format it for the balance card
pub async fn load_balance<A: DashboardApi>(api: &A) -> Result<BalanceDisplay, ApiError> {
    let snapshot = api.fetch_balance().await?;
    Ok(BalanceDisplay::from(&snapshot))
}

/// Fetch the series and settle the chart state machine. Never fails; errors
/// become `ChartView::Error`.
pub async fn load_chart<A: DashboardApi>(api: &A) -> ChartView {
    ChartView::from_fetch(api.fetch_chart_series().await)
}

/// Tickets for overlapping refreshes of the same view.
///
/// Each refresh takes a ticket before it suspends; only the holder of the
/// newest ticket may publish its result.
#[derive(Debug, Default)]
pub struct RefreshSequence {
    latest: u64,
}

impl RefreshSequence {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}
