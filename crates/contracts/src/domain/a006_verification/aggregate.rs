use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::shared::actions::{ActionError, RowActions};
use crate::shared::aggregate::AdminAggregate;
use crate::shared::listing::{FilterSpec, ListRecord};
use crate::shared::state_machine::StatusMachine;
use crate::shared::status::StatusDisplay;
use crate::{action_enum, status_enum};

status_enum! {
    pub enum DocumentType {
        Id => ("id", "ID", Secondary),
        License => ("license", "License", Secondary),
        Insurance => ("insurance", "Insurance", Secondary),
        BackgroundCheck => ("background_check", "Background check", Secondary),
    }
}

status_enum! {
    pub enum DocumentStatus {
        Pending => ("pending", "Pending", Warning),
        Approved => ("approved", "Approved", Success),
        Rejected => ("rejected", "Rejected", Danger),
        AdditionalRequired => ("additional_required", "Additional required", Info),
    }
}

impl StatusMachine for DocumentStatus {
    fn can_transition(from: Self, to: Self) -> bool {
        use DocumentStatus::*;
        matches!(
            (from, to),
            (Pending, Approved)
                | (Pending, Rejected)
                | (Pending, AdditionalRequired)
                | (AdditionalRequired, Pending)
                | (AdditionalRequired, Approved)
                | (AdditionalRequired, Rejected)
                | (Rejected, Pending)
        )
    }
}

status_enum! {
    pub enum OverallStatus {
        Pending => ("pending", "Pending", Warning),
        Approved => ("approved", "Approved", Success),
        Rejected => ("rejected", "Rejected", Danger),
        Partial => ("partial", "Partial", Info),
    }
}

action_enum! {
    pub enum VerificationAction {
        Approve => ("approve", "Approve", Normal, [optional(Target, "Document id (empty for all)"), optional(Note, "Decision note")]),
        Reject => ("reject", "Reject (with note)", Danger, [optional(Target, "Document id (empty for all)"), required(Note, "Rejection note")]),
        RequestAdditional => ("request_additional", "Request additional documents", Normal, [optional(Target, "Document id (empty for all)"), required(Note, "What is missing")]),
        Reopen => ("reopen", "Reopen for review", Normal, [optional(Target, "Document id (empty for all)"), optional(Note, "Reason")]),
    }
}

impl VerificationAction {
    pub fn document_status(self) -> DocumentStatus {
        match self {
            VerificationAction::Approve => DocumentStatus::Approved,
            VerificationAction::Reject => DocumentStatus::Rejected,
            VerificationAction::RequestAdditional => DocumentStatus::AdditionalRequired,
            VerificationAction::Reopen => DocumentStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationDocument {
    pub id: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub label: String,
    pub status: DocumentStatus,
    pub submitted_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub id: String,
    pub professional_id: String,
    pub professional_name: String,
    pub professional_email: String,
    pub documents: Vec<VerificationDocument>,
    pub overall_status: OverallStatus,
    pub submitted_at: String,
}

impl Verification {
    /// Overall status derived from the documents
    pub fn compute_overall(&self) -> OverallStatus {
        let docs = &self.documents;
        if !docs.is_empty() && docs.iter().all(|d| d.status == DocumentStatus::Approved) {
            OverallStatus::Approved
        } else if docs.iter().any(|d| d.status == DocumentStatus::Rejected) {
            OverallStatus::Rejected
        } else if docs.iter().any(|d| d.status == DocumentStatus::AdditionalRequired) {
            OverallStatus::Partial
        } else {
            OverallStatus::Pending
        }
    }

    pub fn can_move_any(&self, to: DocumentStatus) -> bool {
        self.documents
            .iter()
            .any(|d| DocumentStatus::can_transition(d.status, to))
    }

    /// First note left by a reviewer, shown under the document list
    pub fn first_note(&self) -> Option<&str> {
        self.documents.iter().find_map(|d| d.admin_note.as_deref())
    }

    /// Moves the target document (or every document that can move) to `to`.
    ///
    /// Returns the number of documents changed; the overall status is
    /// recomputed.
    pub fn decide(
        &mut self,
        to: DocumentStatus,
        target: Option<&str>,
        note: Option<&str>,
    ) -> Result<usize, ActionError> {
        let changed = match target {
            Some(doc_id) => {
                let doc = self
                    .documents
                    .iter_mut()
                    .find(|d| d.id == doc_id)
                    .ok_or_else(|| ActionError::InvalidParam(format!("unknown document '{}'", doc_id)))?;
                doc.status = doc.status.transition(to)?;
                if let Some(note) = note {
                    doc.admin_note = Some(note.to_string());
                }
                1
            }
            None => {
                let mut changed = 0;
                for doc in self
                    .documents
                    .iter_mut()
                    .filter(|d| DocumentStatus::can_transition(d.status, to))
                {
                    doc.status = to;
                    if let Some(note) = note {
                        doc.admin_note = Some(note.to_string());
                    }
                    changed += 1;
                }
                changed
            }
        };

        self.overall_status = self.compute_overall();
        Ok(changed)
    }
}

impl RowActions for Verification {
    type Action = VerificationAction;

    fn available_actions(&self) -> Vec<VerificationAction> {
        [
            VerificationAction::Approve,
            VerificationAction::Reject,
            VerificationAction::RequestAdditional,
            VerificationAction::Reopen,
        ]
        .into_iter()
        .filter(|a| self.can_move_any(a.document_status()))
        .collect()
    }
}

impl AdminAggregate for Verification {
    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "verifications"
    }

    fn element_name() -> &'static str {
        "Verification"
    }

    fn list_name() -> &'static str {
        "Verifications"
    }

    fn detail_param() -> &'static str {
        "verification"
    }

    fn detail_value(&self) -> &str {
        &self.id
    }
}

impl ListRecord for Verification {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.professional_name.as_str(), self.professional_email.as_str()]
    }

    fn matches_filter(&self, field: &str, value: &str) -> bool {
        match field {
            "document_type" => self.documents.iter().any(|d| d.doc_type.code() == value),
            "overall_status" => self.overall_status.code() == value,
            _ => true,
        }
    }

    fn record_date(&self) -> Option<&str> {
        Some(self.submitted_at.as_str())
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "professional_name" => Some(self.professional_name.cmp(&other.professional_name)),
            "submitted_at" => Some(self.submitted_at.cmp(&other.submitted_at)),
            _ => None,
        }
    }

    fn filter_specs() -> Vec<FilterSpec> {
        vec![
            FilterSpec::select("document_type", "All document types", DocumentType::options()),
            FilterSpec::select("overall_status", "All statuses", OverallStatus::options()),
        ]
    }

    fn search_placeholder() -> &'static str {
        "Search by professional name or email..."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::actions::tests::codes;
    use crate::shared::state_machine::tests::assert_edges;
    use crate::shared::status::tests::assert_total;

    fn doc(id: &str, status: DocumentStatus) -> VerificationDocument {
        VerificationDocument {
            id: id.into(),
            doc_type: DocumentType::Id,
            label: "National ID".into(),
            status,
            submitted_at: "2025-02-14".into(),
            admin_note: None,
        }
    }

    fn verification(docs: Vec<VerificationDocument>) -> Verification {
        let mut v = Verification {
            id: "v2".into(),
            professional_id: "3".into(),
            professional_name: "Sarah Chen".into(),
            professional_email: "sarah.c@example.com".into(),
            documents: docs,
            overall_status: OverallStatus::Pending,
            submitted_at: "2025-02-15".into(),
        };
        v.overall_status = v.compute_overall();
        v
    }

    #[test]
    fn test_lookups_and_machine() {
        assert_total::<DocumentType>();
        assert_total::<DocumentStatus>();
        assert_total::<OverallStatus>();
        use DocumentStatus::*;
        assert_edges(&[
            (Pending, Approved),
            (Pending, Rejected),
            (Pending, AdditionalRequired),
            (AdditionalRequired, Pending),
            (AdditionalRequired, Approved),
            (AdditionalRequired, Rejected),
            (Rejected, Pending),
        ]);
        assert!(Approved.is_terminal());
    }

    #[test]
    fn test_overall_status_rules() {
        use DocumentStatus::*;
        assert_eq!(verification(vec![doc("a", Approved), doc("b", Approved)]).overall_status, OverallStatus::Approved);
        assert_eq!(verification(vec![doc("a", Rejected), doc("b", AdditionalRequired)]).overall_status, OverallStatus::Rejected);
        assert_eq!(verification(vec![doc("a", Approved), doc("b", AdditionalRequired)]).overall_status, OverallStatus::Partial);
        assert_eq!(verification(vec![doc("a", Approved), doc("b", Pending)]).overall_status, OverallStatus::Pending);
    }

    #[test]
    fn test_decide_without_target_moves_all_legal() {
        use DocumentStatus::*;
        let mut v = verification(vec![doc("d5", Approved), doc("d6", Pending), doc("d7", Pending)]);
        let changed = v.decide(Approved, None, Some("ok")).unwrap();
        assert_eq!(changed, 2);
        assert_eq!(v.overall_status, OverallStatus::Approved);
        assert_eq!(v.documents[1].admin_note.as_deref(), Some("ok"));
        assert_eq!(v.documents[0].admin_note, None);
        assert!(v.available_actions().is_empty());
    }

    #[test]
    fn test_decide_with_target() {
        use DocumentStatus::*;
        let mut v = verification(vec![doc("d5", Approved), doc("d6", Pending)]);
        assert!(matches!(
            v.decide(Rejected, Some("d5"), None),
            Err(ActionError::Transition(_))
        ));
        assert!(matches!(
            v.decide(Rejected, Some("nope"), None),
            Err(ActionError::InvalidParam(_))
        ));
        v.decide(AdditionalRequired, Some("d6"), Some("Expired")).unwrap();
        assert_eq!(v.overall_status, OverallStatus::Partial);
        assert_eq!(codes(&v.available_actions()), vec!["approve", "reject", "reopen"]);
    }

    #[test]
    fn test_reopen_returns_decided_documents_to_pending() {
        use DocumentStatus::*;
        let mut v = verification(vec![
            doc("d9", Rejected),
            doc("d10", AdditionalRequired),
            doc("d11", Approved),
        ]);
        assert!(v.is_available(VerificationAction::Reopen));
        let changed = v.decide(VerificationAction::Reopen.document_status(), None, None).unwrap();
        assert_eq!(changed, 2);
        assert_eq!(v.overall_status, OverallStatus::Pending);
        assert_eq!(v.documents[2].status, Approved);
        assert!(!v.is_available(VerificationAction::Reopen));
    }

    #[test]
    fn test_document_type_filter_matches_any() {
        let mut v = verification(vec![doc("a", DocumentStatus::Pending)]);
        v.documents.push(VerificationDocument {
            doc_type: DocumentType::Insurance,
            ..doc("b", DocumentStatus::Pending)
        });
        assert!(v.matches_filter("document_type", "insurance"));
        assert!(!v.matches_filter("document_type", "license"));
    }
}
