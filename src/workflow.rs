//! Vacation workflow aggregation
//!
//! A vacation request carries four independently mutable step fields. The
//! aggregate view (completion, rejection, progress) is derived here and
//! never stored; re-deriving on a fresh snapshot is always safe.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::enums::{ApprovalState, EmailState, SignatureState};

/// Per-step contribution to the progress figures
trait StepProgress {
    fn progress(&self) -> f64;
    /// Whether the step counts toward the completed-steps figure.
    /// `enviado` contributes half a point of progress but does not count.
    fn is_completed(&self) -> bool;
}

impl StepProgress for ApprovalState {
    fn progress(&self) -> f64 {
        match self {
            ApprovalState::Aprobado => 1.0,
            ApprovalState::Rechazado | ApprovalState::Pendiente => 0.0,
        }
    }

    fn is_completed(&self) -> bool {
        matches!(self, ApprovalState::Aprobado)
    }
}

impl StepProgress for SignatureState {
    fn progress(&self) -> f64 {
        match self {
            SignatureState::Recibido => 1.0,
            SignatureState::Enviado => 0.5,
            SignatureState::Pendiente => 0.0,
        }
    }

    fn is_completed(&self) -> bool {
        matches!(self, SignatureState::Recibido)
    }
}

impl StepProgress for EmailState {
    fn progress(&self) -> f64 {
        match self {
            EmailState::Listo => 1.0,
            EmailState::Pendiente => 0.0,
        }
    }

    fn is_completed(&self) -> bool {
        matches!(self, EmailState::Listo)
    }
}

/// The four workflow steps of a vacation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VacationWorkflow {
    pub step1_auth_manager: ApprovalState,
    pub step2_auth_rh: ApprovalState,
    pub step3_contract_signature: SignatureState,
    pub step4_congratulations_email: EmailState,
}

/// Combined status label, in display precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    Rejected,
    Complete,
    InProgress,
}

/// Derived view of a vacation workflow
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WorkflowSummary {
    pub has_rejection: bool,
    pub is_complete: bool,
    /// Steps at a terminal value; `enviado` is excluded
    pub completed_steps: u32,
    /// Sum of per-step progress values, 0..=4
    pub total_progress: f64,
    /// 0..=100, fractional values allowed
    pub progress_percent: f64,
    pub status: WorkflowStatus,
    pub label: String,
}

impl VacationWorkflow {
    /// Missing steps read as their pending value
    pub fn from_steps(
        step1: Option<ApprovalState>,
        step2: Option<ApprovalState>,
        step3: Option<SignatureState>,
        step4: Option<EmailState>,
    ) -> Self {
        Self {
            step1_auth_manager: step1.unwrap_or_default(),
            step2_auth_rh: step2.unwrap_or_default(),
            step3_contract_signature: step3.unwrap_or_default(),
            step4_congratulations_email: step4.unwrap_or_default(),
        }
    }

    pub fn summarize(&self) -> WorkflowSummary {
        let steps: [&dyn StepProgress; 4] = [
            &self.step1_auth_manager,
            &self.step2_auth_rh,
            &self.step3_contract_signature,
            &self.step4_congratulations_email,
        ];

        let total_progress: f64 = steps.iter().map(|step| step.progress()).sum();
        let completed_steps = steps.iter().filter(|step| step.is_completed()).count() as u32;
        let progress_percent = total_progress / steps.len() as f64 * 100.0;

        // Only the two approval steps carry a rejected value
        let has_rejection = self.step1_auth_manager == ApprovalState::Rechazado
            || self.step2_auth_rh == ApprovalState::Rechazado;

        // Exact value match, not progress-based
        let is_complete = self.step1_auth_manager == ApprovalState::Aprobado
            && self.step2_auth_rh == ApprovalState::Aprobado
            && self.step3_contract_signature == SignatureState::Recibido
            && self.step4_congratulations_email == EmailState::Listo;

        // Rejection wins over completion, completion over progress
        let status = if has_rejection {
            WorkflowStatus::Rejected
        } else if is_complete {
            WorkflowStatus::Complete
        } else {
            WorkflowStatus::InProgress
        };

        let label = match status {
            WorkflowStatus::Rejected => "Rechazado".to_string(),
            WorkflowStatus::Complete => "Completado".to_string(),
            WorkflowStatus::InProgress => format!(
                "En progreso ({}/{} · {}%)",
                completed_steps,
                steps.len(),
                format_percent(progress_percent)
            ),
        };

        WorkflowSummary {
            has_rejection,
            is_complete,
            completed_steps,
            total_progress,
            progress_percent,
            status,
            label,
        }
    }
}

fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_pending_is_zero_progress() {
        let summary = VacationWorkflow::default().summarize();
        assert!(!summary.has_rejection);
        assert!(!summary.is_complete);
        assert_eq!(summary.completed_steps, 0);
        assert_eq!(summary.total_progress, 0.0);
        assert_eq!(summary.progress_percent, 0.0);
        assert_eq!(summary.status, WorkflowStatus::InProgress);
        assert_eq!(summary.label, "En progreso (0/4 · 0%)");
    }

    #[test]
    fn missing_steps_read_as_pending() {
        let workflow = VacationWorkflow::from_steps(None, None, None, None);
        assert_eq!(workflow, VacationWorkflow::default());
    }

    #[test]
    fn complete_workflow() {
        let workflow = VacationWorkflow {
            step1_auth_manager: ApprovalState::Aprobado,
            step2_auth_rh: ApprovalState::Aprobado,
            step3_contract_signature: SignatureState::Recibido,
            step4_congratulations_email: EmailState::Listo,
        };
        let summary = workflow.summarize();
        assert!(summary.is_complete);
        assert!(!summary.has_rejection);
        assert_eq!(summary.progress_percent, 100.0);
        assert_eq!(summary.completed_steps, 4);
        assert_eq!(summary.status, WorkflowStatus::Complete);
        assert_eq!(summary.label, "Completado");
    }

    #[test]
    fn enviado_counts_half_but_not_completed() {
        let workflow = VacationWorkflow {
            step3_contract_signature: SignatureState::Enviado,
            ..Default::default()
        };
        let summary = workflow.summarize();
        assert!(!summary.has_rejection);
        assert!(!summary.is_complete);
        assert_eq!(summary.total_progress, 0.5);
        assert_eq!(summary.progress_percent, 12.5);
        assert_eq!(summary.completed_steps, 0);
        assert_eq!(summary.label, "En progreso (0/4 · 12.5%)");
    }

    #[test]
    fn single_rejection_dominates() {
        let workflow = VacationWorkflow {
            step2_auth_rh: ApprovalState::Rechazado,
            ..Default::default()
        };
        let summary = workflow.summarize();
        assert!(summary.has_rejection);
        assert_eq!(summary.status, WorkflowStatus::Rejected);
        assert_eq!(summary.label, "Rechazado");
    }

    #[test]
    fn rejection_wins_even_when_every_other_step_is_terminal() {
        let workflow = VacationWorkflow {
            step1_auth_manager: ApprovalState::Rechazado,
            step2_auth_rh: ApprovalState::Aprobado,
            step3_contract_signature: SignatureState::Recibido,
            step4_congratulations_email: EmailState::Listo,
        };
        let summary = workflow.summarize();
        assert!(summary.has_rejection);
        assert!(!summary.is_complete);
        assert_eq!(summary.status, WorkflowStatus::Rejected);
        assert_eq!(summary.completed_steps, 3);
        assert_eq!(summary.total_progress, 3.0);
    }
}
