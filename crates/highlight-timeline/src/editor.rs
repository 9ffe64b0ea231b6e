//! The segment editor controller.
//!
//! [`HighlightEditor`] owns the timeline, the edit session and the active
//! pointer interaction, and reports every outcome through a [`Notifier`].
//! Front ends forward discrete pointer events to it and render
//! [`HighlightEditor::layout`] plus [`HighlightEditor::ghost`].

use highlight_core::{HighlightError, Interval};
use tracing::{debug, error, info, warn};

use crate::config::EditorConfig;
use crate::edit::{
    place_new_segment, resolve_move, resolve_resize, Interaction, MoveDrag, ResizeDrag,
    ResizeEdge,
};
use crate::error::{EditError, EditResult};
use crate::layout::{self, BarLayout};
use crate::notify::{Notice, Notifier, Severity};
use crate::segment::Segment;
use crate::serialization::SegmentsFile;
use crate::session::{EditMode, EditSession};
use crate::store::{SaveAck, SaveRequest, SegmentStore};
use crate::timeline::Timeline;
use crate::validation::validate_for_save;

/// Which source video is being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorContext {
    /// Identifier sent with every save, e.g. `talk.mp4`.
    pub file_name: String,
    /// Current playable highlight, if one was already rendered.
    pub media_url: Option<String>,
}

impl EditorContext {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            media_url: None,
        }
    }

    pub fn with_media_url(mut self, url: impl Into<String>) -> Self {
        self.media_url = Some(url.into());
        self
    }

    /// Locator the server renders the highlight to by convention.
    pub fn default_media_url(&self) -> String {
        format!("/clips/highlight_{}", self.file_name)
    }
}

// ── Builder ─────────────────────────────────────────────────────

/// Builder for [`HighlightEditor`].
#[derive(Default)]
pub struct HighlightEditorBuilder {
    context: Option<EditorContext>,
    config: EditorConfig,
    notifier: Option<Box<dyn Notifier>>,
}

impl HighlightEditorBuilder {
    pub fn context(mut self, context: EditorContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Build the editor. Declines with [`EditError::MissingContext`] when a
    /// collaborator is absent.
    pub fn build(self) -> EditResult<HighlightEditor> {
        let notifier = self.notifier.ok_or_else(|| {
            error!("Editor not activated: no notifier supplied");
            EditError::MissingContext("notifier")
        })?;
        let context = match self.context {
            Some(context) if !context.file_name.trim().is_empty() => context,
            _ => {
                let err = EditError::MissingContext("source file name");
                error!(error = %err, "Editor not activated");
                notifier.notify(Notice::new(err.to_string(), err.severity()));
                return Err(err);
            }
        };
        if let Err(e) = self.config.validate() {
            let err = EditError::MissingContext("valid editor configuration");
            error!(error = %e, "Editor not activated");
            notifier.notify(Notice::new(err.to_string(), err.severity()));
            return Err(err);
        }

        info!(file = %context.file_name, "Highlight editor ready");
        Ok(HighlightEditor {
            context,
            config: self.config,
            timeline: Timeline::default(),
            session: EditSession::new(),
            interaction: None,
            notifier,
            media_revision: 0,
        })
    }
}

// ── Editor ──────────────────────────────────────────────────────

/// Interactive segment editor.
pub struct HighlightEditor {
    context: EditorContext,
    config: EditorConfig,
    timeline: Timeline,
    session: EditSession,
    interaction: Option<Interaction>,
    notifier: Box<dyn Notifier>,
    media_revision: u64,
}

impl std::fmt::Debug for HighlightEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighlightEditor")
            .field("context", &self.context)
            .field("timeline", &self.timeline)
            .field("session", &self.session)
            .field("interaction", &self.interaction)
            .field("media_revision", &self.media_revision)
            .finish_non_exhaustive()
    }
}

impl HighlightEditor {
    pub fn builder() -> HighlightEditorBuilder {
        HighlightEditorBuilder::default()
    }

    // ── Loading ─────────────────────────────────────────────────

    /// Replace the timeline with a copy of `segments` over `duration`.
    ///
    /// Any edit session or drag in progress is abandoned.
    pub fn load(&mut self, segments: &[Segment], duration: f64) {
        self.abandon_interaction();
        self.session.reset();
        self.timeline.load(segments, duration);
        info!(
            file = %self.context.file_name,
            segments = self.timeline.len(),
            duration,
            "Loaded highlight segments"
        );
    }

    /// Load a pipeline result, using `fallback_duration` (usually the media
    /// duration) when the file does not record one.
    pub fn load_file(&mut self, file: &SegmentsFile, fallback_duration: f64) {
        let duration = file.duration_or(fallback_duration);
        self.load(&file.segments, duration);
    }

    /// Tear down: clear the timeline, the session and any drag.
    pub fn reset(&mut self) {
        self.abandon_interaction();
        self.session.reset();
        self.timeline.clear();
        debug!("Editor reset");
    }

    // ── Accessors ───────────────────────────────────────────────

    pub fn context(&self) -> &EditorContext {
        &self.context
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn segments(&self) -> &[Segment] {
        self.timeline.segments()
    }

    pub fn mode(&self) -> EditMode {
        self.session.mode()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_editing()
    }

    pub fn is_saving(&self) -> bool {
        self.session.is_saving()
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn interaction(&self) -> Option<&Interaction> {
        self.interaction.as_ref()
    }

    /// Interval to draw as drag feedback, if a drag is active.
    ///
    /// For a resize this is the live segment; for a move it is the proposed
    /// position, since the model is not touched until release.
    pub fn ghost(&self) -> Option<Interval> {
        match self.interaction.as_ref()? {
            Interaction::Resize(drag) => self.timeline.get(drag.index).map(Segment::interval),
            Interaction::Move(drag) => Some(drag.proposed()),
        }
    }

    /// Current bar geometry.
    pub fn layout(&self) -> BarLayout {
        layout::project(&self.timeline)
    }

    /// Playable highlight locator with a cache-busting revision.
    pub fn media_url(&self) -> Option<String> {
        let url = self.context.media_url.as_ref()?;
        if self.media_revision == 0 {
            return Some(url.clone());
        }
        let sep = if url.contains('?') { '&' } else { '?' };
        Some(format!("{}{}t={}", url, sep, self.media_revision))
    }

    /// Bumped on every successful save.
    pub fn media_revision(&self) -> u64 {
        self.media_revision
    }

    /// Length of the resulting highlight in seconds.
    pub fn total_selected(&self) -> f64 {
        self.timeline.total_selected()
    }

    // ── Session ─────────────────────────────────────────────────

    /// VIEW -> EDIT. No-op when already editing.
    pub fn enter_edit(&mut self) -> bool {
        if !self.session.enter(&self.timeline) {
            return false;
        }
        info!(segments = self.timeline.len(), "Entered edit mode");
        self.notify(
            "Edit mode enabled. Drag segments to adjust them.",
            Severity::Info,
        );
        true
    }

    /// EDIT -> VIEW, discarding every change since [`Self::enter_edit`].
    pub fn cancel_edit(&mut self) -> bool {
        if self.session.is_editing() && !self.session.is_saving() {
            self.abandon_interaction();
        }
        if !self.session.cancel(&mut self.timeline) {
            return false;
        }
        info!("Edit cancelled, changes discarded");
        self.notify("Edit mode disabled. Changes discarded.", Severity::Info);
        true
    }

    /// Enter edit mode, or cancel when already editing.
    pub fn toggle_edit(&mut self) -> bool {
        if self.session.is_editing() {
            self.cancel_edit()
        } else {
            self.enter_edit()
        }
    }

    // ── Mutations ───────────────────────────────────────────────

    /// Add a segment centered on `at` seconds. Returns its index.
    pub fn add_segment_at(&mut self, at: f64) -> EditResult<usize> {
        self.require_editing()?;
        let interval =
            place_new_segment(&self.timeline, at, &self.config).map_err(|e| self.report(e))?;

        let segment = Segment::from_interval(interval, self.config.default_score);
        let index = self.timeline.insert(segment);
        debug!(index, start = interval.start, end = interval.end, "Segment added");
        self.notify(
            "Segment added. Adjust its position or length.",
            Severity::Info,
        );
        Ok(index)
    }

    /// Remove the segment at `index`.
    pub fn delete_segment(&mut self, index: usize) -> EditResult<Segment> {
        self.require_editing()?;
        self.abandon_interaction();
        let len = self.timeline.len();
        let removed = self
            .timeline
            .remove(index)
            .ok_or_else(|| self.report(EditError::IndexOutOfRange { index, len }))?;
        debug!(index, start = removed.start, end = removed.end, "Segment removed");
        self.notify(format!("Segment {} removed.", removed.label()), Severity::Info);
        Ok(removed)
    }

    // ── Drag lifecycle ──────────────────────────────────────────

    /// Start dragging one edge of the segment at `index`.
    pub fn begin_resize(&mut self, index: usize, edge: ResizeEdge) -> EditResult<()> {
        self.require_editing()?;
        let initial = self.segment_interval(index)?;
        self.end_drag();
        self.interaction = Some(Interaction::Resize(ResizeDrag {
            index,
            edge,
            initial,
        }));
        debug!(index, ?edge, "Resize started");
        Ok(())
    }

    /// Start moving the whole segment at `index`.
    pub fn begin_move(&mut self, index: usize) -> EditResult<()> {
        self.require_editing()?;
        let initial = self.segment_interval(index)?;
        self.end_drag();
        self.interaction = Some(Interaction::Move(MoveDrag {
            index,
            initial_start: initial.start,
            duration: initial.duration(),
            proposed_start: initial.start,
        }));
        debug!(index, "Move started");
        Ok(())
    }

    /// Apply a pointer delta (seconds since the drag started).
    ///
    /// A resize writes the resolved edge into the timeline immediately; a
    /// move only updates the ghost. Returns the ghost interval.
    pub fn update_drag(&mut self, delta: f64) -> Option<Interval> {
        if !delta.is_finite() {
            return self.ghost();
        }
        match self.interaction.as_mut()? {
            Interaction::Resize(drag) => {
                let drag = *drag;
                let proposed = drag.proposed_edge(delta);
                match resolve_resize(&self.timeline, drag.index, drag.edge, proposed, &self.config)
                {
                    Ok(interval) => {
                        if let Some(segment) = self.timeline.get_mut(drag.index) {
                            segment.set_interval(interval);
                        }
                        Some(interval)
                    }
                    Err(e) => {
                        warn!(error = %e, "Resize target vanished, ending drag");
                        self.interaction = None;
                        None
                    }
                }
            }
            Interaction::Move(drag) => {
                let proposed = drag.initial_start + delta;
                drag.proposed_start =
                    resolve_move(&self.timeline, drag.index, drag.duration, proposed);
                Some(drag.proposed())
            }
        }
    }

    /// Finish the active drag. Runs at most once per drag; later calls are
    /// no-ops returning `None`.
    pub fn end_drag(&mut self) -> Option<Interaction> {
        let interaction = self.interaction.take()?;
        match interaction {
            Interaction::Resize(drag) => {
                self.timeline.resort();
                debug!(index = drag.index, "Resize finished");
            }
            Interaction::Move(drag) => {
                if let Some(segment) = self.timeline.get_mut(drag.index) {
                    segment.set_interval(drag.proposed());
                }
                self.timeline.resort();
                debug!(
                    index = drag.index,
                    start = drag.proposed_start,
                    "Move committed"
                );
            }
        }
        Some(interaction)
    }

    // ── Save ────────────────────────────────────────────────────

    /// Validate and mark a save as in flight. Returns the request to send.
    ///
    /// On a validation failure nothing is sent and the session stays in EDIT.
    pub fn begin_save(&mut self) -> EditResult<SaveRequest> {
        self.require_editing()?;
        if self.session.is_saving() {
            debug!("save ignored: already in flight");
            return Err(EditError::SaveInProgress);
        }
        self.end_drag();
        validate_for_save(&mut self.timeline).map_err(|e| self.report(e))?;
        self.session.begin_save()?;

        info!(
            file = %self.context.file_name,
            segments = self.timeline.len(),
            total_selected = self.timeline.total_selected(),
            "Saving highlight segments"
        );
        Ok(SaveRequest {
            filename: self.context.file_name.clone(),
            segments: self.timeline.snapshot(),
        })
    }

    /// Apply the collaborator's response to an in-flight save.
    pub fn complete_save(&mut self, result: highlight_core::Result<SaveAck>) -> EditResult<()> {
        if !self.session.is_saving() {
            warn!("Save response arrived with no save in flight");
            let outcome = if result.is_ok() { "was stored" } else { "failed" };
            self.notify(
                format!("A save for an earlier session {outcome}; check the loaded segments."),
                Severity::Warning,
            );
            return Err(EditError::NotEditing);
        }
        match result {
            Ok(ack) => {
                self.session.commit_save(&self.timeline);
                self.context.media_url = Some(
                    ack.media_url
                        .unwrap_or_else(|| self.context.default_media_url()),
                );
                self.media_revision += 1;
                info!(
                    file = %self.context.file_name,
                    revision = self.media_revision,
                    "Highlight segments saved"
                );
                let message = ack
                    .message
                    .unwrap_or_else(|| "Highlight changes saved.".to_string());
                self.notify(message, Severity::Success);
                Ok(())
            }
            Err(e) => {
                self.session.fail_save();
                let message = match e {
                    HighlightError::Persistence(message) => message,
                    other => other.to_string(),
                };
                Err(self.report(EditError::Persistence { message }))
            }
        }
    }

    /// Validate, send to `store`, and apply the response.
    pub async fn save<S: SegmentStore>(&mut self, store: &S) -> EditResult<()> {
        let request = self.begin_save()?;
        let result = store.update_highlights(&request).await;
        self.complete_save(result)
    }

    // ── Internals ───────────────────────────────────────────────

    fn require_editing(&self) -> EditResult<()> {
        if self.session.is_editing() {
            Ok(())
        } else {
            debug!("command ignored: not in edit mode");
            Err(EditError::NotEditing)
        }
    }

    fn segment_interval(&self, index: usize) -> EditResult<Interval> {
        self.timeline
            .get(index)
            .map(Segment::interval)
            .ok_or_else(|| {
                self.report(EditError::IndexOutOfRange {
                    index,
                    len: self.timeline.len(),
                })
            })
    }

    fn abandon_interaction(&mut self) {
        if let Some(interaction) = self.interaction.take() {
            debug!(index = interaction.index(), "Drag abandoned");
        }
    }

    fn notify(&self, message: impl Into<String>, severity: Severity) {
        self.notifier.notify(Notice::new(message, severity));
    }

    /// Log and surface an error, then hand it back for propagation.
    fn report(&self, err: EditError) -> EditError {
        match err.severity() {
            Severity::Error => error!(error = %err, "Editor command failed"),
            _ => warn!(error = %err, "Editor command rejected"),
        }
        self.notify(err.to_string(), err.severity());
        err
    }
}
