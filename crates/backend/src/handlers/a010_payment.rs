use axum::extract::State;
use axum::Json;
use contracts::domain::a010_payment::PaymentMetrics;
use contracts::domain::a011_ledger::platform_earnings;
use contracts::domain::a012_payout::PayoutSummary;

use crate::shared::state::AppState;

/// GET /api/payments/metrics
pub async fn metrics(State(state): State<AppState>) -> Json<PaymentMetrics> {
    let earnings = state
        .ledger
        .read(|items| platform_earnings(items.iter().map(|s| &s.item)))
        .await;
    let pending_payouts = state
        .payouts
        .read(|items| PayoutSummary::compute(items.iter().map(|s| &s.item)).pending_total)
        .await;
    let metrics = state
        .payments
        .read(|items| PaymentMetrics::compute(items.iter().map(|s| &s.item), earnings, pending_payouts))
        .await;
    Json(metrics)
}
