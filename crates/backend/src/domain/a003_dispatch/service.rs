use chrono::NaiveDateTime;
use contracts::domain::a003_dispatch::{
    rank_candidates, Availability, DispatchAction, DispatchJob, DispatchPriority, DispatchStatus,
    EligibleProfessional, RankedCandidate,
};
use contracts::shared::actions::{ActionError, ActionParams};
use contracts::shared::state_machine::StatusMachine;
use once_cell::sync::Lazy;

use crate::shared::actions::ApplyAction;

/// Professionals the dispatcher can offer jobs to
static CANDIDATE_POOL: Lazy<Vec<EligibleProfessional>> = Lazy::new(|| {
    use Availability::*;
    vec![
        candidate("p1", "Mike Johnson", "Home Cleaning, HVAC", 2.1, Available, 4.8, 2),
        candidate("p2", "Sarah Chen", "Home Cleaning, Deep Clean", 4.5, Available, 4.9, 1),
        candidate("p3", "David Kim", "Carpentry, Home Cleaning", 5.2, BusySoon, 4.5, 4),
        candidate("p4", "Alex Rivera", "Electrical, Smart Home", 3.0, Limited, 4.6, 3),
    ]
});

const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn candidate_pool() -> &'static [EligibleProfessional] {
    &CANDIDATE_POOL
}

/// GET /api/dispatch/:id/eligible
pub fn eligible_for(job: &DispatchJob) -> Vec<RankedCandidate> {
    rank_candidates(job, candidate_pool())
}

fn find_candidate(id: &str) -> Result<&'static EligibleProfessional, ActionError> {
    candidate_pool()
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ActionError::InvalidParam(format!("unknown professional '{}'", id)))
}

impl ApplyAction for DispatchJob {
    fn apply(&mut self, action: DispatchAction, params: &ActionParams) -> Result<(), ActionError> {
        match action {
            DispatchAction::SendOffer => {
                let pro = find_candidate(params.target()?)?;
                if self.offered_to.contains(&pro.id) {
                    return Err(ActionError::InvalidParam(format!(
                        "offer already sent to {}",
                        pro.name
                    )));
                }
                if self.status == DispatchStatus::Open {
                    self.status = self.status.transition(DispatchStatus::Offered)?;
                }
                self.offered_to.push(pro.id.clone());
                tracing::info!("Offer for {} sent to {}", self.job_id, pro.name);
            }
            DispatchAction::DirectAssign => {
                let pro = find_candidate(params.target()?)?;
                self.status = self.status.transition(DispatchStatus::Assigned)?;
                self.assigned_professional = Some(pro.name.clone());
            }
            DispatchAction::SetDeadline => {
                let value = params.value()?;
                NaiveDateTime::parse_from_str(value, DEADLINE_FORMAT).map_err(|_| {
                    ActionError::InvalidParam(format!(
                        "deadline '{}' must look like 2025-02-15 18:00",
                        value
                    ))
                })?;
                self.response_deadline = Some(value.to_string());
            }
            DispatchAction::SaveNotes => {
                self.internal_notes = params.note().map(str::to_string);
            }
        }
        Ok(())
    }
}

fn candidate(
    id: &str,
    name: &str,
    categories: &str,
    distance_km: f64,
    availability: Availability,
    rating: f64,
    current_workload: u32,
) -> EligibleProfessional {
    EligibleProfessional {
        id: id.into(),
        name: name.into(),
        service_category: categories.into(),
        distance_km,
        availability,
        rating,
        current_workload,
    }
}

#[allow(clippy::too_many_arguments)]
fn dispatch_job(
    id: &str,
    job_id: &str,
    customer: &str,
    category: &str,
    location: &str,
    scheduled: &str,
    priority: DispatchPriority,
    notes: Option<&str>,
) -> DispatchJob {
    DispatchJob {
        id: id.into(),
        job_id: job_id.into(),
        customer_name: customer.into(),
        service_category: category.into(),
        location: location.into(),
        scheduled_time: scheduled.into(),
        priority,
        internal_notes: notes.map(Into::into),
        status: DispatchStatus::Open,
        response_deadline: None,
        offered_to: Vec::new(),
        assigned_professional: None,
    }
}

pub fn seed() -> Vec<DispatchJob> {
    use DispatchPriority::*;
    vec![
        dispatch_job("1", "J-2841", "Sarah Mitchell", "Home Cleaning", "Downtown, North District", "2025-02-15 10:00", Normal, None),
        dispatch_job("2", "J-2835", "Emma Wilson", "Plumbing", "West, South", "2025-02-16 09:00", Emergency, Some("Customer requested same-day; payment confirmed.")),
        dispatch_job("3", "J-2820", "Maria Garcia", "Painting", "All areas", "2025-02-16 13:00", Vip, Some("VIP \u{2013} prefer high rating, flexible time.")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::actions::RowActions;

    fn target(id: &str) -> ActionParams {
        ActionParams {
            target: Some(id.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_eligible_ranking_for_cleaning_job() {
        let job = seed().remove(0);
        let names: Vec<String> = eligible_for(&job)
            .into_iter()
            .map(|c| c.professional.name)
            .collect();
        assert_eq!(names, vec!["Mike Johnson", "Sarah Chen", "David Kim", "Alex Rivera"]);
    }

    #[test]
    fn test_send_offer_twice_is_rejected() {
        let mut job = seed().remove(0);
        job.apply(DispatchAction::SendOffer, &target("p2")).unwrap();
        assert_eq!(job.status, DispatchStatus::Offered);
        assert_eq!(job.offered_to, vec!["p2".to_string()]);
        assert!(eligible_for(&job).iter().any(|c| c.offered));

        let err = job.apply(DispatchAction::SendOffer, &target("p2")).unwrap_err();
        assert!(matches!(err, ActionError::InvalidParam(_)));
        job.apply(DispatchAction::SendOffer, &target("p1")).unwrap();
        assert_eq!(job.offered_to.len(), 2);
    }

    #[test]
    fn test_direct_assign_closes_the_job() {
        let mut job = seed().remove(1);
        job.apply(DispatchAction::DirectAssign, &target("p4")).unwrap();
        assert_eq!(job.status, DispatchStatus::Assigned);
        assert_eq!(job.assigned_professional.as_deref(), Some("Alex Rivera"));
        assert!(job.available_actions().is_empty());
    }

    #[test]
    fn test_unknown_professional_and_bad_deadline() {
        let mut job = seed().remove(2);
        assert!(job.apply(DispatchAction::DirectAssign, &target("p9")).is_err());

        let bad = ActionParams {
            value: Some("tomorrow".into()),
            ..Default::default()
        };
        assert!(job.apply(DispatchAction::SetDeadline, &bad).is_err());
        let good = ActionParams {
            value: Some("2025-02-16 11:00".into()),
            ..Default::default()
        };
        job.apply(DispatchAction::SetDeadline, &good).unwrap();
        assert_eq!(job.response_deadline.as_deref(), Some("2025-02-16 11:00"));
    }
}
