//! 侧边面板与删除状态机

use std::fmt;

use domain_console_api::Domain;
use thiserror::Error;

/// What the side panel was opened for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMode {
    Add,
    Edit(Domain),
}

impl PanelMode {
    /// Record being edited, if any.
    pub fn record(&self) -> Option<&Domain> {
        match self {
            Self::Add => None,
            Self::Edit(record) => Some(record),
        }
    }
}

/// Table interaction phase.
///
/// The panel and a delete are mutually exclusive: a delete cannot start while
/// the panel is open, and the panel cannot open while a delete is in flight.
/// Only one delete is in flight at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    PanelOpen(PanelMode),
    Deleting {
        id: String,
    },
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::PanelOpen(PanelMode::Add) => "adding",
            Self::PanelOpen(PanelMode::Edit(_)) => "editing",
            Self::Deleting { .. } => "deleting",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    OpenAdd,
    OpenEdit(Domain),
    Close,
    SubmitOk,
    SubmitFail,
    DeleteStart(String),
    DeleteDone,
}

impl PanelEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::OpenAdd => "open add panel",
            Self::OpenEdit(_) => "open edit panel",
            Self::Close => "close panel",
            Self::SubmitOk => "finish submit",
            Self::SubmitFail => "fail submit",
            Self::DeleteStart(_) => "start delete",
            Self::DeleteDone => "finish delete",
        }
    }
}

/// An event that is illegal in the current phase. The phase is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct TransitionError {
    pub phase: &'static str,
    pub event: &'static str,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot {} while {}", self.event, self.phase)
    }
}

/// Panel/delete state machine.
#[derive(Debug, Clone, Default)]
pub struct PanelMachine {
    phase: Phase,
}

impl PanelMachine {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Apply `event`, returning the new phase.
    pub fn handle(&mut self, event: PanelEvent) -> Result<&Phase, TransitionError> {
        let next = match (&self.phase, event) {
            (Phase::Idle, PanelEvent::OpenAdd) => Phase::PanelOpen(PanelMode::Add),
            (Phase::Idle, PanelEvent::OpenEdit(record)) => Phase::PanelOpen(PanelMode::Edit(record)),
            (Phase::Idle, PanelEvent::DeleteStart(id)) => Phase::Deleting { id },

            // 关闭面板是幂等的
            (Phase::Idle | Phase::Deleting { .. }, PanelEvent::Close) => self.phase.clone(),
            (Phase::PanelOpen(_), PanelEvent::Close | PanelEvent::SubmitOk) => Phase::Idle,
            (Phase::PanelOpen(mode), PanelEvent::SubmitFail) => Phase::PanelOpen(mode.clone()),

            (Phase::Deleting { .. }, PanelEvent::DeleteDone) => Phase::Idle,

            (phase, event) => {
                let err = TransitionError {
                    phase: phase.name(),
                    event: event.name(),
                };
                log::debug!("{err}");
                return Err(err);
            }
        };
        self.phase = next;
        Ok(&self.phase)
    }

    pub fn is_panel_open(&self) -> bool {
        matches!(self.phase, Phase::PanelOpen(_))
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self.phase, Phase::Deleting { .. })
    }

    /// Id of the record being deleted.
    pub fn deleting_id(&self) -> Option<&str> {
        match &self.phase {
            Phase::Deleting { id } => Some(id),
            _ => None,
        }
    }

    pub fn panel_mode(&self) -> Option<&PanelMode> {
        match &self.phase {
            Phase::PanelOpen(mode) => Some(mode),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_console_api::VerificationStatus;

    fn record() -> Domain {
        Domain {
            id: "1".into(),
            domain: "https://a.com".into(),
            is_active: true,
            status: VerificationStatus::Pending,
            created_date: 0,
        }
    }

    #[test]
    fn add_panel_lifecycle() {
        let mut m = PanelMachine::default();
        assert_eq!(
            m.handle(PanelEvent::OpenAdd),
            Ok(&Phase::PanelOpen(PanelMode::Add))
        );
        assert_eq!(
            m.handle(PanelEvent::SubmitFail),
            Ok(&Phase::PanelOpen(PanelMode::Add))
        );
        assert_eq!(m.handle(PanelEvent::SubmitOk), Ok(&Phase::Idle));
    }

    #[test]
    fn edit_panel_carries_record() {
        let mut m = PanelMachine::default();
        m.handle(PanelEvent::OpenEdit(record())).unwrap();
        assert_eq!(
            m.panel_mode().and_then(PanelMode::record).map(|r| r.id.as_str()),
            Some("1")
        );
        m.handle(PanelEvent::Close).unwrap();
        assert_eq!(m.phase(), &Phase::Idle);
    }

    #[test]
    fn delete_blocks_second_delete_and_panel() {
        let mut m = PanelMachine::default();
        m.handle(PanelEvent::DeleteStart("7".into())).unwrap();
        assert_eq!(m.deleting_id(), Some("7"));

        let err = m.handle(PanelEvent::DeleteStart("8".into())).unwrap_err();
        assert_eq!(err.to_string(), "Cannot start delete while deleting");
        assert!(m.handle(PanelEvent::OpenAdd).is_err());
        assert!(m.handle(PanelEvent::OpenEdit(record())).is_err());
        assert_eq!(m.deleting_id(), Some("7"));

        m.handle(PanelEvent::DeleteDone).unwrap();
        assert!(!m.is_deleting());
    }

    #[test]
    fn delete_rejected_while_panel_open() {
        let mut m = PanelMachine::default();
        m.handle(PanelEvent::OpenAdd).unwrap();
        assert!(m.handle(PanelEvent::DeleteStart("1".into())).is_err());
        assert!(m.is_panel_open());
    }

    #[test]
    fn submit_results_without_panel_are_rejected() {
        let mut m = PanelMachine::default();
        assert!(m.handle(PanelEvent::SubmitOk).is_err());
        assert!(m.handle(PanelEvent::DeleteDone).is_err());
        assert_eq!(m.handle(PanelEvent::Close), Ok(&Phase::Idle));
    }
}
