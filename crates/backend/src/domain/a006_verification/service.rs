use contracts::domain::a006_verification::{
    DocumentStatus, DocumentType, OverallStatus, Verification, VerificationAction,
    VerificationDocument,
};
use contracts::shared::actions::{ActionError, ActionParams};

use crate::shared::actions::ApplyAction;

impl ApplyAction for Verification {
    fn apply(&mut self, action: VerificationAction, params: &ActionParams) -> Result<(), ActionError> {
        let changed = self.decide(
            action.document_status(),
            params.optional_target(),
            params.note(),
        )?;
        tracing::info!(
            "Verification {} ({}): {} document(s) moved, overall {:?}",
            self.id,
            self.professional_name,
            changed,
            self.overall_status
        );
        Ok(())
    }
}

fn doc(
    id: &str,
    doc_type: DocumentType,
    label: &str,
    status: DocumentStatus,
    submitted_at: &str,
    note: Option<&str>,
) -> VerificationDocument {
    VerificationDocument {
        id: id.into(),
        doc_type,
        label: label.into(),
        status,
        submitted_at: submitted_at.into(),
        admin_note: note.map(Into::into),
    }
}

fn verification(
    id: &str,
    professional: (&str, &str, &str),
    documents: Vec<VerificationDocument>,
    overall: OverallStatus,
    submitted_at: &str,
) -> Verification {
    Verification {
        id: id.into(),
        professional_id: professional.0.into(),
        professional_name: professional.1.into(),
        professional_email: professional.2.into(),
        documents,
        overall_status: overall,
        submitted_at: submitted_at.into(),
    }
}

pub fn seed() -> Vec<Verification> {
    use DocumentStatus::{AdditionalRequired, Approved, Pending, Rejected};
    use DocumentType::*;
    vec![
        verification(
            "v1",
            ("1", "Mike Johnson", "mike.j@example.com"),
            vec![
                doc("d1", Id, "National ID", Approved, "2025-02-10", None),
                doc("d2", License, "HVAC License", Approved, "2025-02-10", None),
                doc("d3", Insurance, "Liability Insurance", Approved, "2025-02-11", None),
                doc("d4", BackgroundCheck, "Background Check", Approved, "2025-02-12", None),
            ],
            OverallStatus::Approved,
            "2025-02-12",
        ),
        verification(
            "v2",
            ("3", "Sarah Chen", "sarah.c@example.com"),
            vec![
                doc("d5", Id, "Passport", Approved, "2025-02-14", None),
                doc("d6", License, "Cleaning Cert", Pending, "2025-02-14", None),
                doc("d7", Insurance, "Insurance Certificate", Pending, "2025-02-14", None),
                doc("d8", BackgroundCheck, "Background Check", Pending, "2025-02-15", None),
            ],
            OverallStatus::Pending,
            "2025-02-15",
        ),
        verification(
            "v3",
            ("5", "Emma Wilson", "emma.w@example.com"),
            vec![
                doc("d9", Id, "Driver License", Rejected, "2025-02-08", Some("Image unclear; please re-upload a clearer copy.")),
                doc("d10", License, "Plumbing License", AdditionalRequired, "2025-02-08", Some("Expired. Submit renewed license.")),
                doc("d11", Insurance, "Insurance", Pending, "2025-02-09", None),
                doc("d12", BackgroundCheck, "Background Check", Pending, "2025-02-09", None),
            ],
            OverallStatus::Rejected,
            "2025-02-09",
        ),
        verification(
            "v4",
            ("7", "James Park", "james.p@example.com"),
            vec![
                doc("d13", Id, "National ID", Approved, "2025-02-13", None),
                doc("d14", License, "Electrical License", Approved, "2025-02-13", None),
                doc("d15", Insurance, "Insurance", AdditionalRequired, "2025-02-13", Some("Coverage amount below minimum. Please provide updated certificate.")),
                doc("d16", BackgroundCheck, "Background Check", Pending, "2025-02-14", None),
            ],
            OverallStatus::Partial,
            "2025-02-14",
        ),
        verification(
            "v5",
            ("8", "Lisa Anderson", "lisa.a@example.com"),
            vec![
                doc("d17", Id, "ID Card", Pending, "2025-02-16", None),
                doc("d18", License, "Carpentry License", Pending, "2025-02-16", None),
                doc("d19", Insurance, "Insurance", Pending, "2025-02-16", None),
                doc("d20", BackgroundCheck, "Background Check", Pending, "2025-02-16", None),
            ],
            OverallStatus::Pending,
            "2025-02-16",
        ),
    ]
}
