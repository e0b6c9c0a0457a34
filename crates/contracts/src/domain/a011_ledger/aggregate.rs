use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::shared::actions::{NoAction, RowActions};
use crate::shared::aggregate::AdminAggregate;
use crate::shared::format::format_currency;
use crate::shared::listing::{cmp_f64, FilterSpec, ListRecord};
use crate::shared::status::StatusDisplay;
use crate::status_enum;

status_enum! {
    pub enum LedgerType {
        Payment => ("payment", "Payment", Primary),
        Refund => ("refund", "Refund", Info),
        Commission => ("commission", "Commission", Secondary),
        Payout => ("payout", "Payout", Warning),
    }
}

status_enum! {
    pub enum LedgerStatus {
        Completed => ("completed", "Completed", Success),
        Pending => ("pending", "Pending", Warning),
        Failed => ("failed", "Failed", Danger),
        Reversed => ("reversed", "Reversed", Secondary),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    pub transaction_id: String,
    #[serde(rename = "type")]
    pub entry_type: LedgerType,
    pub related_job_id: Option<String>,
    pub related_user_id: Option<String>,
    /// Customer or professional name
    pub related_user_label: String,
    pub amount: f64,
    pub fees: f64,
    pub taxes: f64,
    pub status: LedgerStatus,
    pub timestamp: String,
}

impl LedgerEntry {
    pub fn net(&self) -> f64 {
        self.amount - self.fees - self.taxes
    }

    pub fn net_display(&self) -> String {
        format_currency(self.net())
    }
}

/// Sum of completed commission entries, as a positive number
pub fn platform_earnings<'a>(entries: impl IntoIterator<Item = &'a LedgerEntry>) -> f64 {
    entries
        .into_iter()
        .filter(|e| e.entry_type == LedgerType::Commission && e.status == LedgerStatus::Completed)
        .map(|e| e.amount.abs())
        .sum()
}

impl RowActions for LedgerEntry {
    type Action = NoAction;

    fn available_actions(&self) -> Vec<NoAction> {
        Vec::new()
    }
}

impl AdminAggregate for LedgerEntry {
    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "ledger"
    }

    fn element_name() -> &'static str {
        "Ledger entry"
    }

    fn list_name() -> &'static str {
        "Transactions Ledger"
    }

    fn detail_param() -> &'static str {
        "txn"
    }

    fn detail_value(&self) -> &str {
        &self.transaction_id
    }
}

impl ListRecord for LedgerEntry {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.transaction_id.as_str(), self.related_user_label.as_str()];
        if let Some(job) = &self.related_job_id {
            fields.push(job.as_str());
        }
        fields
    }

    fn matches_filter(&self, field: &str, value: &str) -> bool {
        match field {
            "type" => self.entry_type.code() == value,
            "status" => self.status.code() == value,
            _ => true,
        }
    }

    fn record_date(&self) -> Option<&str> {
        Some(self.timestamp.as_str())
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "timestamp" => Some(self.timestamp.cmp(&other.timestamp)),
            "amount" => Some(cmp_f64(self.amount, other.amount)),
            "net" => Some(cmp_f64(self.net(), other.net())),
            _ => None,
        }
    }

    fn filter_specs() -> Vec<FilterSpec> {
        vec![
            FilterSpec::select("type", "All types", LedgerType::options()),
            FilterSpec::select("status", "All statuses", LedgerStatus::options()),
            FilterSpec::date_range("Date"),
        ]
    }

    fn search_placeholder() -> &'static str {
        "Search TXN ID, job, user..."
    }
}
