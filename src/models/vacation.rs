//! Vacation request model
//!
//! Requests are created by the intake form, never by this server; the server
//! only cycles the review status and edits the four workflow steps.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::workflow::VacationWorkflow;

use super::enums::{ApprovalState, EmailState, ReviewStatus, SignatureState};

/// Vacation request record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct VacationRequest {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub full_name: String,
    pub email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Availability while away, free text from the intake form
    pub status_while_away: Option<String>,
    pub manager_email: Option<String>,
    pub comments: Option<String>,
    /// Absent reads as unreviewed
    pub review_status: Option<ReviewStatus>,
    pub step1_auth_manager: Option<ApprovalState>,
    pub step2_auth_rh: Option<ApprovalState>,
    pub step3_contract_signature: Option<SignatureState>,
    pub step4_congratulations_email: Option<EmailState>,
}

impl VacationRequest {
    /// Workflow steps with missing values defaulted to pending
    pub fn workflow(&self) -> VacationWorkflow {
        VacationWorkflow::from_steps(
            self.step1_auth_manager,
            self.step2_auth_rh,
            self.step3_contract_signature,
            self.step4_congratulations_email,
        )
    }
}

/// Single workflow step update. The tagged representation means each step
/// only accepts values from its own enumeration; there is no ordering
/// dependency between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(tag = "step", content = "value", rename_all = "snake_case")]
pub enum WorkflowStepUpdate {
    Step1AuthManager(ApprovalState),
    Step2AuthRh(ApprovalState),
    Step3ContractSignature(SignatureState),
    Step4CongratulationsEmail(EmailState),
}

impl WorkflowStepUpdate {
    /// Column the update targets
    pub fn column(&self) -> &'static str {
        match self {
            WorkflowStepUpdate::Step1AuthManager(_) => "step1_auth_manager",
            WorkflowStepUpdate::Step2AuthRh(_) => "step2_auth_rh",
            WorkflowStepUpdate::Step3ContractSignature(_) => "step3_contract_signature",
            WorkflowStepUpdate::Step4CongratulationsEmail(_) => "step4_congratulations_email",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_update_wire_format() {
        let update: WorkflowStepUpdate =
            serde_json::from_str(r#"{"step": "step1_auth_manager", "value": "aprobado"}"#).unwrap();
        assert_eq!(
            update,
            WorkflowStepUpdate::Step1AuthManager(ApprovalState::Aprobado)
        );
        assert_eq!(update.column(), "step1_auth_manager");
    }

    #[test]
    fn step_update_rejects_foreign_values() {
        // "enviado" belongs to the signature step, not the approval steps
        let result: Result<WorkflowStepUpdate, _> =
            serde_json::from_str(r#"{"step": "step1_auth_manager", "value": "enviado"}"#);
        assert!(result.is_err());
    }
}
