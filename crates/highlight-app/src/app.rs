//! Application shell: loads a result, hosts the editor and the bar, and
//! routes saves through the server bridge.

use std::path::{Path, PathBuf};

use eframe::egui;
use highlight_core::format_timestamp;
use highlight_timeline::{
    EditorConfig, EditorContext, HighlightEditor, Notice, NoticeQueue, Notifier, SegmentsFile,
    Severity,
};
use highlight_ui::{BarEvent, HighlightBar, Theme, Toasts};
use tracing::{error, info, warn};

use crate::bridge::{BridgeMessage, ServerBridge};
use crate::launch::{video_name_for, LaunchArgs};

pub struct HighlightApp {
    editor: Option<HighlightEditor>,
    config: EditorConfig,
    notices: NoticeQueue,
    toasts: Toasts,
    bar: HighlightBar,
    bridge: ServerBridge,
    /// Duration used when a result does not record one.
    fallback_duration: f64,
    fetching: Option<String>,
}

impl HighlightApp {
    pub fn new(cc: &eframe::CreationContext<'_>, bridge: ServerBridge, args: LaunchArgs) -> Self {
        Theme::apply(&cc.egui_ctx);

        let mut app = Self {
            editor: None,
            config: editor_config(),
            notices: NoticeQueue::new(),
            toasts: Toasts::new(),
            bar: HighlightBar::new(),
            bridge,
            fallback_duration: args.duration.unwrap_or(0.0),
            fetching: None,
        };

        match (args.segments_path.clone(), args.resolved_file_name()) {
            (Some(path), file_name) => app.open_local(&path, file_name),
            (None, Some(file_name)) => app.fetch(file_name, &cc.egui_ctx),
            (None, None) => info!("No result given, waiting for Open segments"),
        }
        app
    }

    // ── Loading ──────────────────────────────────────────────

    fn open_local(&mut self, path: &Path, file_name: Option<String>) {
        let Some(file_name) = file_name.or_else(|| video_name_for(path)) else {
            self.notify(
                format!("Cannot tell which video {} belongs to", path.display()),
                Severity::Error,
            );
            return;
        };
        match SegmentsFile::load_from_file(path) {
            Ok(file) => {
                info!(path = %path.display(), "Opened segments file");
                self.install(file_name, &file);
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to open segments file");
                self.notify(
                    format!("Failed to open {}: {}", path.display(), e),
                    Severity::Error,
                );
            }
        }
    }

    fn fetch(&mut self, file_name: String, ctx: &egui::Context) {
        info!(file = %file_name, "Fetching segments from server");
        self.fetching = Some(file_name.clone());
        self.bridge.fetch(file_name, ctx.clone());
    }

    /// Create (or reuse) the editor for `file_name` and load `file` into it.
    fn install(&mut self, file_name: String, file: &SegmentsFile) {
        if self.is_saving() {
            warn!(file = %file_name, "Not loading segments while a save is in flight");
            self.notify("Wait for the current save to finish.", Severity::Warning);
            return;
        }
        let reuse = self
            .editor
            .as_ref()
            .is_some_and(|e| e.context().file_name == file_name);
        if !reuse {
            if let Some(old) = self.editor.as_mut() {
                old.reset();
            }
            let context = EditorContext::new(file_name.clone());
            let media_url = context.default_media_url();
            let context = context.with_media_url(media_url);
            self.editor = HighlightEditor::builder()
                .context(context)
                .config(self.config.clone())
                .notifier(self.notices.clone())
                .build()
                .ok();
        }
        if let Some(editor) = self.editor.as_mut() {
            editor.load_file(file, self.fallback_duration);
            if editor.timeline().total_duration() <= 0.0 {
                warn!(file = %file_name, "Result has no duration, pass --duration");
                self.notices.notify(Notice::new(
                    "Source duration unknown; start with --duration SECS to edit.",
                    Severity::Warning,
                ));
            }
        }
    }

    fn notify(&self, message: impl Into<String>, severity: Severity) {
        self.notices.notify(Notice::new(message, severity));
    }

    fn is_saving(&self) -> bool {
        self.editor.as_ref().is_some_and(HighlightEditor::is_saving)
    }

    fn pick_file(&mut self) {
        let picked: Option<PathBuf> = rfd::FileDialog::new()
            .add_filter("Highlight segments", &["json"])
            .pick_file();
        if let Some(path) = picked {
            self.open_local(&path, None);
        }
    }

    // ── Background results ───────────────────────────────────

    fn drain_bridge(&mut self) {
        for message in self.bridge.poll() {
            match message {
                BridgeMessage::Saved(result) => {
                    if let Some(editor) = self.editor.as_mut() {
                        // Failures are already reported through the notifier
                        let _ = editor.complete_save(result);
                    }
                }
                BridgeMessage::Fetched { file_name, result } => {
                    self.fetching = None;
                    match result {
                        Ok(file) => self.install(file_name, &file),
                        Err(e) => {
                            error!(file = %file_name, error = %e, "Failed to fetch segments");
                            self.notify(format!("Failed to load segments: {e}"), Severity::Error);
                        }
                    }
                }
            }
        }
    }

    // ── Panels ───────────────────────────────────────────────

    fn toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            let Some(editor) = self.editor.as_mut() else {
                if self.fetching.is_some() {
                    ui.spinner();
                    ui.label("Loading segments...");
                } else if ui.button("Open segments...").clicked() {
                    self.pick_file();
                }
                return;
            };

            ui.strong(editor.context().file_name.clone());
            ui.separator();

            if editor.is_editing() {
                let saving = editor.is_saving();
                ui.add_enabled_ui(!saving, |ui| {
                    if ui.button("Save changes").clicked() {
                        if let Ok(request) = editor.begin_save() {
                            self.bridge.save(request, ctx.clone());
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        editor.cancel_edit();
                    }
                });
                if saving {
                    ui.spinner();
                    ui.label("Saving...");
                }
            } else {
                if ui.button("Edit highlight").clicked() {
                    editor.enter_edit();
                }
                if ui
                    .add_enabled(!editor.is_saving(), egui::Button::new("Open segments..."))
                    .clicked()
                {
                    self.pick_file();
                }
            }
        });
    }

    fn status_line(&self, ui: &mut egui::Ui) {
        let Some(editor) = self.editor.as_ref() else {
            return;
        };
        ui.horizontal(|ui| {
            let mode = if editor.is_editing() { "Editing" } else { "Viewing" };
            ui.label(egui::RichText::new(mode).color(Theme::t2()));
            ui.separator();
            ui.label(format!("{} segments", editor.segments().len()));
            ui.separator();
            ui.label(format!(
                "Highlight {} of {}",
                format_timestamp(editor.total_selected()),
                format_timestamp(editor.timeline().total_duration())
            ));
            if let Some(url) = editor.media_url() {
                ui.separator();
                ui.label(egui::RichText::new(url).color(Theme::t3()));
            }
        });
    }
}

impl eframe::App for HighlightApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_bridge();

        egui::TopBottomPanel::top("toolbar")
            .frame(Theme::panel_frame())
            .show(ctx, |ui| self.toolbar(ui, ctx));

        egui::TopBottomPanel::bottom("status")
            .frame(Theme::panel_frame())
            .show(ctx, |ui| self.status_line(ui));

        egui::CentralPanel::default()
            .frame(Theme::panel_frame())
            .show(ctx, |ui| {
                let Some(editor) = self.editor.as_mut() else {
                    ui.centered_and_justified(|ui| {
                        ui.label("No highlight loaded. Use Open segments to start.");
                    });
                    return;
                };
                ui.add_space(Theme::SPACE_MD);
                for event in self.bar.show(ui, editor) {
                    if let BarEvent::Deleted(segment) = event {
                        info!(start = segment.start, end = segment.end, "Segment deleted");
                    }
                }
            });

        let now = ctx.input(|i| i.time);
        self.toasts.extend(self.notices.drain(), now);
        self.toasts.show(ctx);
    }
}

/// Editor tunables, optionally overridden by `HIGHLIGHT_EDITOR_CONFIG`.
fn editor_config() -> EditorConfig {
    let Ok(path) = std::env::var("HIGHLIGHT_EDITOR_CONFIG") else {
        return EditorConfig::default();
    };
    match EditorConfig::load_from_file(Path::new(&path)) {
        Ok(config) => {
            info!(%path, "Loaded editor config");
            config
        }
        Err(e) => {
            warn!(%path, error = %e, "Ignoring editor config");
            EditorConfig::default()
        }
    }
}
