use contracts::domain::a011_ledger::{LedgerEntry, LedgerStatus, LedgerType};
use contracts::shared::actions::{ActionError, ActionParams, NoAction};
use contracts::shared::format::format_currency;
use contracts::shared::status::StatusDisplay;

use crate::shared::actions::ApplyAction;
use crate::shared::csv_export::CsvRow;

/// The ledger is append-only from the admin panel's point of view
impl ApplyAction for LedgerEntry {
    fn apply(&mut self, action: NoAction, _params: &ActionParams) -> Result<(), ActionError> {
        match action {}
    }
}

impl CsvRow for LedgerEntry {
    const HEADER: &'static [&'static str] = &[
        "Transaction ID",
        "Type",
        "Job",
        "User",
        "Amount",
        "Fees",
        "Taxes",
        "Net",
        "Status",
        "Timestamp",
    ];

    fn record(&self) -> Vec<String> {
        vec![
            self.transaction_id.clone(),
            self.entry_type.display_name().to_string(),
            self.related_job_id.clone().unwrap_or_default(),
            self.related_user_label.clone(),
            format_currency(self.amount),
            format_currency(self.fees),
            format_currency(self.taxes),
            self.net_display(),
            self.status.display_name().to_string(),
            self.timestamp.clone(),
        ]
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    transaction_id: &str,
    entry_type: LedgerType,
    job: Option<&str>,
    user: (&str, &str),
    amount: f64,
    fees: f64,
    status: LedgerStatus,
    timestamp: &str,
) -> LedgerEntry {
    LedgerEntry {
        id: id.into(),
        transaction_id: transaction_id.into(),
        entry_type,
        related_job_id: job.map(Into::into),
        related_user_id: Some(user.0.into()),
        related_user_label: user.1.into(),
        amount,
        fees,
        taxes: 0.0,
        status,
        timestamp: timestamp.into(),
    }
}

pub fn seed() -> Vec<LedgerEntry> {
    use LedgerStatus::*;
    use LedgerType::*;
    vec![
        entry("1", "TXN-8921", Payment, Some("J-2841"), ("u1", "Sarah Mitchell"), 120.0, 18.0, Completed, "2025-02-16 10:05"),
        entry("2", "TXN-8920", Commission, Some("J-2841"), ("p1", "Mike Johnson"), -18.0, 0.0, Completed, "2025-02-16 10:05"),
        entry("3", "TXN-8918", Refund, Some("J-2810"), ("u2", "Anna Bell"), -90.0, 0.0, Completed, "2025-02-12 09:22"),
        entry("4", "TXN-8915", Payout, None, ("p2", "Alex Rivera"), -456.0, 5.0, Completed, "2025-02-15 08:00"),
        entry("5", "TXN-8912", Payment, Some("J-2828"), ("u3", "Lisa Anderson"), 200.0, 30.0, Completed, "2025-02-15 16:02"),
        entry("6", "TXN-8910", Commission, Some("J-2828"), ("p3", "David Kim"), -30.0, 0.0, Completed, "2025-02-15 16:02"),
        entry("7", "TXN-8908", Payment, Some("J-2835"), ("u4", "Emma Wilson"), 150.0, 22.5, Pending, "2025-02-16 09:01"),
        entry("8", "TXN-8905", Payout, None, ("p4", "Chris Taylor"), -320.0, 4.0, Pending, "2025-02-16 07:00"),
        entry("9", "TXN-8900", Payment, Some("J-2825"), ("u5", "Robert Lee"), 75.0, 11.25, Failed, "2025-02-15 08:05"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::csv_export::to_csv;
    use contracts::domain::a011_ledger::platform_earnings;
    use contracts::shared::listing::{filter_sorted, ListQuery};

    #[test]
    fn test_platform_earnings_from_seed() {
        assert_eq!(platform_earnings(&seed()), 48.0);
    }

    #[test]
    fn test_export_includes_net_column() {
        let entries = seed();
        let mut query = ListQuery::default();
        query.set_filter("type", "payout");
        let rows = filter_sorted(&entries, &query);
        let text = String::from_utf8(to_csv(rows).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("Net,Status,Timestamp"));
        assert!(lines[1].starts_with("TXN-8915,Payout,,Alex Rivera,"));
        assert!(lines[1].contains("$461.00"));
        assert!(lines[1].ends_with(",Completed,2025-02-15 08:00"));
    }
}
