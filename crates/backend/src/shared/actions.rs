use contracts::shared::actions::{ActionError, ActionParams, RowActions};

/// Server-side effect of a row action.
///
/// Gating, version checks and parameter presence are handled by
/// [`EntityStore::act`](super::store::EntityStore::act) before `apply` runs.
/// `apply` works on a copy, so an error leaves the stored record unchanged.
pub trait ApplyAction: RowActions {
    fn apply(&mut self, action: Self::Action, params: &ActionParams) -> Result<(), ActionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::state_machine::StatusMachine;
    use contracts::shared::status::StatusDisplay;
    use std::collections::HashSet;
    use std::fmt::Debug;
    use std::hash::Hash;

    use crate::domain::*;

    fn params(target: Option<&str>, value: Option<&str>) -> ActionParams {
        ActionParams {
            target: target.map(Into::into),
            value: value.map(Into::into),
            amount: Some(1.0),
            note: Some("Reviewed".into()),
        }
    }

    /// Puts every seed into every status, applies every offered action and
    /// fails on a legal edge that no action ever took.
    fn assert_every_edge_reached<R, S>(
        seeds: Vec<R>,
        statuses: impl Fn(&R) -> Vec<S>,
        set_status: impl Fn(&mut R, S),
        candidates: &[ActionParams],
    ) where
        R: ApplyAction + Clone,
        S: StatusMachine + Eq + Hash + Debug,
    {
        let mut reached = HashSet::new();
        for seed in &seeds {
            for &from in S::ALL {
                let mut record = seed.clone();
                set_status(&mut record, from);
                let before = statuses(&record);
                for action in record.available_actions() {
                    for params in candidates {
                        let mut next = record.clone();
                        if next.apply(action, params).is_ok() {
                            reached.extend(
                                before
                                    .iter()
                                    .copied()
                                    .zip(statuses(&next))
                                    .filter(|(a, b)| a != b),
                            );
                        }
                    }
                }
            }
        }

        for &from in S::ALL {
            for to in from.next_states() {
                assert!(
                    reached.contains(&(from, to)),
                    "no action moves {:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn test_queue_edges_reached() {
        assert_every_edge_reached(
            a002_queue_job::service::seed(),
            |j| vec![j.status],
            |j, s| j.status = s,
            &[params(Some("Jordan Blake"), None)],
        );
    }

    #[test]
    fn test_dispatch_edges_reached() {
        let candidates: Vec<_> = ["p1", "p2", "p3", "p4"]
            .into_iter()
            .map(|id| params(Some(id), None))
            .collect();
        assert_every_edge_reached(
            a003_dispatch::service::seed(),
            |j| vec![j.status],
            |j, s| j.status = s,
            &candidates,
        );
    }

    #[test]
    fn test_account_edges_reached() {
        assert_every_edge_reached(
            a004_professional::service::seed(),
            |p| vec![p.account_status],
            |p, s| p.account_status = s,
            &[params(None, None)],
        );
        assert_every_edge_reached(
            a005_company::service::seed(),
            |c| vec![c.account_status],
            |c, s| c.account_status = s,
            &[params(None, None)],
        );
        assert_every_edge_reached(
            a005_company::service::seed(),
            |c| vec![c.approval_status],
            |c, s| c.approval_status = s,
            &[params(None, None)],
        );
    }

    #[test]
    fn test_document_edges_reached() {
        assert_every_edge_reached(
            a006_verification::service::seed(),
            |v| v.documents.iter().map(|d| d.status).collect(),
            |v, s| {
                for d in &mut v.documents {
                    d.status = s;
                }
                v.overall_status = v.compute_overall();
            },
            &[params(None, None)],
        );
    }

    #[test]
    fn test_dispute_edges_reached() {
        assert_every_edge_reached(
            a008_dispute::service::seed(),
            |d| vec![d.status],
            |d, s| d.status = s,
            &[params(None, None)],
        );
    }

    #[test]
    fn test_payout_edges_reached() {
        assert_every_edge_reached(
            a012_payout::service::seed(),
            |p| vec![p.status],
            |p, s| p.status = s,
            &[params(None, Some("2025-03-01"))],
        );
    }

    #[test]
    fn test_ticket_edges_reached() {
        use contracts::domain::a013_support_ticket::TicketStatus;
        let candidates: Vec<_> = TicketStatus::ALL
            .iter()
            .map(|s| params(None, Some(s.code())))
            .collect();
        assert_every_edge_reached(
            a013_support_ticket::service::seed(),
            |t| vec![t.status],
            |t, s| t.status = s,
            &candidates,
        );
    }
}
