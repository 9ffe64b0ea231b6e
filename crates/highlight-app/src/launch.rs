//! Command line handling.
//!
//! `highlight-studio [VIDEO] [SEGMENTS.json] [--duration SECS]`

use std::path::{Path, PathBuf};

/// What to open at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchArgs {
    /// Source video identifier used for saves, e.g. `talk.mp4`.
    pub file_name: Option<String>,
    /// Local pipeline result to load instead of fetching from the server.
    pub segments_path: Option<PathBuf>,
    /// Duration used when the result does not record one.
    pub duration: Option<f64>,
}

impl LaunchArgs {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut parsed = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--duration" {
                parsed.duration = args.next().and_then(|v| v.parse().ok());
            } else if arg.ends_with(".json") {
                parsed.segments_path = Some(PathBuf::from(arg));
            } else if parsed.file_name.is_none() {
                parsed.file_name = Some(arg);
            }
        }
        parsed
    }

    /// Video name to save under: explicit, or derived from the result file.
    pub fn resolved_file_name(&self) -> Option<String> {
        self.file_name
            .clone()
            .or_else(|| self.segments_path.as_deref().and_then(video_name_for))
    }
}

/// `results/talk.json` -> `talk.mp4`.
pub fn video_name_for(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() {
        return None;
    }
    Some(format!("{stem}.mp4"))
}
