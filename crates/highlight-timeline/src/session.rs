//! View/Edit session state machine.

use tracing::debug;

use crate::error::{EditError, EditResult};
use crate::segment::Segment;
use crate::timeline::Timeline;

/// Interaction mode of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    View,
    Edit,
}

/// Transient edit state: mode, the pre-edit backup, and save progress.
///
/// The backup is an owned copy of the segment list, never shared with the
/// live timeline.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    mode: EditMode,
    backup: Option<Vec<Segment>>,
    /// Snapshot of the last successfully saved timeline.
    saved: Option<Vec<Segment>>,
    saving: bool,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Edit
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Snapshot taken when the current edit session started.
    pub fn backup(&self) -> Option<&[Segment]> {
        self.backup.as_deref()
    }

    /// Snapshot of the last saved timeline, if any save succeeded.
    pub fn last_saved(&self) -> Option<&[Segment]> {
        self.saved.as_deref()
    }

    /// VIEW -> EDIT. Returns `false` (no-op) when already editing.
    pub fn enter(&mut self, timeline: &Timeline) -> bool {
        if self.is_editing() {
            debug!("enter edit ignored: already editing");
            return false;
        }
        self.backup = Some(timeline.snapshot());
        self.mode = EditMode::Edit;
        true
    }

    /// EDIT -> VIEW, restoring the backup. Returns `false` when not editing
    /// or while a save is in flight.
    pub fn cancel(&mut self, timeline: &mut Timeline) -> bool {
        if !self.is_editing() || self.saving {
            debug!(saving = self.saving, "cancel ignored");
            return false;
        }
        if let Some(backup) = self.backup.take() {
            timeline.restore(backup);
        }
        self.mode = EditMode::View;
        true
    }

    /// Mark a save as in flight.
    pub fn begin_save(&mut self) -> EditResult<()> {
        if !self.is_editing() {
            return Err(EditError::NotEditing);
        }
        if self.saving {
            return Err(EditError::SaveInProgress);
        }
        self.saving = true;
        Ok(())
    }

    /// EDIT -> VIEW after the collaborator accepted the timeline.
    pub fn commit_save(&mut self, timeline: &Timeline) {
        self.saving = false;
        self.backup = None;
        self.saved = Some(timeline.snapshot());
        self.mode = EditMode::View;
    }

    /// Stay in EDIT after a failed save; the backup is kept for cancel.
    pub fn fail_save(&mut self) {
        self.saving = false;
    }

    /// Back to VIEW with no backup, e.g. when a new timeline is loaded.
    pub fn reset(&mut self) {
        self.mode = EditMode::View;
        self.backup = None;
        self.saving = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> Timeline {
        Timeline::from_segments(vec![Segment::new(0.0, 10.0, 0.7)], 60.0)
    }

    #[test]
    fn test_enter_is_not_nested() {
        let tl = timeline();
        let mut session = EditSession::new();
        assert!(session.enter(&tl));
        assert!(!session.enter(&tl));
        assert!(session.is_editing());
    }

    #[test]
    fn test_cancel_restores_backup() {
        let mut tl = timeline();
        let mut session = EditSession::new();
        session.enter(&tl);
        tl.insert(Segment::new(20.0, 25.0, 0.5));
        assert!(session.cancel(&mut tl));
        assert_eq!(tl.segments(), &[Segment::new(0.0, 10.0, 0.7)]);
        assert_eq!(session.mode(), EditMode::View);
        assert!(session.backup().is_none());
    }

    #[test]
    fn test_cancel_outside_edit_is_noop() {
        let mut tl = timeline();
        let mut session = EditSession::new();
        assert!(!session.cancel(&mut tl));
    }

    #[test]
    fn test_save_lifecycle() {
        let tl = timeline();
        let mut session = EditSession::new();
        assert_eq!(session.begin_save(), Err(EditError::NotEditing));

        session.enter(&tl);
        session.begin_save().unwrap();
        assert_eq!(session.begin_save(), Err(EditError::SaveInProgress));

        session.fail_save();
        assert!(session.is_editing());
        assert!(session.backup().is_some());

        session.begin_save().unwrap();
        session.commit_save(&tl);
        assert_eq!(session.mode(), EditMode::View);
        assert!(!session.is_saving());
        assert_eq!(session.last_saved().unwrap().len(), 1);
    }

    #[test]
    fn test_cancel_blocked_while_saving() {
        let mut tl = timeline();
        let mut session = EditSession::new();
        session.enter(&tl);
        session.begin_save().unwrap();
        assert!(!session.cancel(&mut tl));
        assert!(session.is_editing());
    }
}
