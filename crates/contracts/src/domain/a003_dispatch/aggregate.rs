use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::shared::actions::RowActions;
use crate::shared::aggregate::AdminAggregate;
use crate::shared::listing::{cmp_f64, FilterSpec, ListRecord};
use crate::shared::state_machine::StatusMachine;
use crate::shared::status::StatusDisplay;
use crate::{action_enum, status_enum};

status_enum! {
    pub enum DispatchPriority {
        Normal => ("normal", "Normal", Secondary),
        Priority => ("priority", "Priority", Info),
        Emergency => ("emergency", "Emergency", Danger),
        Vip => ("vip", "VIP", Warning),
    }
}

status_enum! {
    pub enum Availability {
        Available => ("available", "Available", Success),
        BusySoon => ("busy_soon", "Busy soon", Warning),
        Limited => ("limited", "Limited", Secondary),
    }
}

impl Availability {
    pub fn rank(self) -> u8 {
        match self {
            Availability::Available => 0,
            Availability::BusySoon => 1,
            Availability::Limited => 2,
        }
    }
}

status_enum! {
    pub enum DispatchStatus {
        Open => ("open", "Open", Warning),
        Offered => ("offered", "Offered", Info),
        Assigned => ("assigned", "Assigned", Success),
    }
}

impl StatusMachine for DispatchStatus {
    fn can_transition(from: Self, to: Self) -> bool {
        use DispatchStatus::*;
        matches!(
            (from, to),
            (Open, Offered) | (Open, Assigned) | (Offered, Assigned)
        )
    }
}

action_enum! {
    pub enum DispatchAction {
        SendOffer => ("send_offer", "Send offer", Normal, [required(Target, "Professional id")]),
        DirectAssign => ("direct_assign", "Direct assign", Normal, [required(Target, "Professional id")]),
        SetDeadline => ("set_deadline", "Set response deadline", Normal, [required(Value, "Deadline (YYYY-MM-DD HH:MM)")]),
        SaveNotes => ("save_notes", "Save internal notes", Normal, [required(Note, "Internal notes")]),
    }
}

/// A job waiting for manual assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchJob {
    pub id: String,
    pub job_id: String,
    pub customer_name: String,
    pub service_category: String,
    pub location: String,
    pub scheduled_time: String,
    pub priority: DispatchPriority,
    #[serde(default)]
    pub internal_notes: Option<String>,
    pub status: DispatchStatus,
    #[serde(default)]
    pub response_deadline: Option<String>,
    /// Professional ids an offer was sent to
    #[serde(default)]
    pub offered_to: Vec<String>,
    #[serde(default)]
    pub assigned_professional: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibleProfessional {
    pub id: String,
    pub name: String,
    /// Comma separated list, e.g. "Home Cleaning, HVAC"
    pub service_category: String,
    pub distance_km: f64,
    pub availability: Availability,
    pub rating: f64,
    pub current_workload: u32,
}

impl EligibleProfessional {
    pub fn serves(&self, category: &str) -> bool {
        self.service_category
            .split(',')
            .any(|c| c.trim().eq_ignore_ascii_case(category.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub professional: EligibleProfessional,
    pub category_match: bool,
    pub offered: bool,
}

/// Category match first, then availability, then distance ascending.
pub fn rank_candidates(job: &DispatchJob, pool: &[EligibleProfessional]) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = pool
        .iter()
        .map(|p| RankedCandidate {
            category_match: p.serves(&job.service_category),
            offered: job.offered_to.contains(&p.id),
            professional: p.clone(),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.category_match
            .cmp(&a.category_match)
            .then(a.professional.availability.rank().cmp(&b.professional.availability.rank()))
            .then(cmp_f64(a.professional.distance_km, b.professional.distance_km))
    });
    ranked
}

impl RowActions for DispatchJob {
    type Action = DispatchAction;

    fn available_actions(&self) -> Vec<DispatchAction> {
        if self.status == DispatchStatus::Assigned {
            return Vec::new();
        }
        vec![
            DispatchAction::SendOffer,
            DispatchAction::DirectAssign,
            DispatchAction::SetDeadline,
            DispatchAction::SaveNotes,
        ]
    }
}

impl AdminAggregate for DispatchJob {
    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "dispatch"
    }

    fn element_name() -> &'static str {
        "Dispatch job"
    }

    fn list_name() -> &'static str {
        "Dispatch / Manual Matching"
    }

    fn detail_param() -> &'static str {
        "job"
    }

    fn detail_value(&self) -> &str {
        &self.job_id
    }
}

impl ListRecord for DispatchJob {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.job_id.as_str(), self.customer_name.as_str()]
    }

    fn matches_filter(&self, field: &str, value: &str) -> bool {
        match field {
            "priority" => self.priority.code() == value,
            "status" => self.status.code() == value,
            _ => true,
        }
    }

    fn record_date(&self) -> Option<&str> {
        Some(self.scheduled_time.as_str())
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "scheduled_time" => Some(self.scheduled_time.cmp(&other.scheduled_time)),
            "job_id" => Some(self.job_id.cmp(&other.job_id)),
            _ => None,
        }
    }

    fn filter_specs() -> Vec<FilterSpec> {
        vec![
            FilterSpec::select("priority", "All priorities", DispatchPriority::options()),
            FilterSpec::select("status", "All statuses", DispatchStatus::options()),
        ]
    }

    fn search_placeholder() -> &'static str {
        "Search by Job ID or customer..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::state_machine::tests::assert_edges;
    use crate::shared::status::tests::assert_total;

    fn pro(id: &str, category: &str, km: f64, availability: Availability) -> EligibleProfessional {
        EligibleProfessional {
            id: id.into(),
            name: id.into(),
            service_category: category.into(),
            distance_km: km,
            availability,
            rating: 4.5,
            current_workload: 1,
        }
    }

    fn job(category: &str) -> DispatchJob {
        DispatchJob {
            id: "1".into(),
            job_id: "J-2841".into(),
            customer_name: "Sarah Mitchell".into(),
            service_category: category.into(),
            location: "Downtown".into(),
            scheduled_time: "2025-02-15 10:00".into(),
            priority: DispatchPriority::Normal,
            internal_notes: None,
            status: DispatchStatus::Open,
            response_deadline: None,
            offered_to: vec!["p3".into()],
            assigned_professional: None,
        }
    }

    #[test]
    fn test_lookups_and_machine() {
        assert_total::<DispatchPriority>();
        assert_total::<Availability>();
        assert_total::<DispatchStatus>();
        use DispatchStatus::*;
        assert_edges(&[(Open, Offered), (Open, Assigned), (Offered, Assigned)]);
        assert!(Assigned.is_terminal());
    }

    #[test]
    fn test_ranking_order() {
        let pool = vec![
            pro("p1", "Home Cleaning, HVAC", 2.1, Availability::Available),
            pro("p2", "Home Cleaning, Deep Clean", 4.5, Availability::Available),
            pro("p3", "Carpentry, Home Cleaning", 5.2, Availability::BusySoon),
            pro("p4", "Electrical, Smart Home", 1.0, Availability::Available),
        ];
        let ranked = rank_candidates(&job("Home Cleaning"), &pool);
        let ids: Vec<&str> = ranked.iter().map(|c| c.professional.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4"]);
        assert!(!ranked[3].category_match);
        assert!(ranked[2].offered);
    }

    #[test]
    fn test_assigned_job_has_no_actions() {
        let mut j = job("Plumbing");
        assert_eq!(j.available_actions().len(), 4);
        j.status = DispatchStatus::Assigned;
        assert!(j.available_actions().is_empty());
    }
}
