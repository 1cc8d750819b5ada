use std::path::{Path, PathBuf};

use corecast_core::{CoreMessage, ResultSet, Tone};
use thiserror::Error;
use tracing::info;

use crate::render::{heavy_rule, light_rule};

pub const DEFAULT_OUTPUT: &str = "content_output.txt";

#[derive(Debug, Error)]
#[error("write {}: {source}", path.display())]
pub struct TranscriptError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Render the human-readable output file.
pub fn render_transcript(core: &CoreMessage, tone: &Tone, results: &ResultSet) -> String {
    let mut out = String::new();
    out.push_str(&heavy_rule());
    out.push('\n');
    out.push_str("CONTENT GENERATION OUTPUT\n");
    out.push_str(&heavy_rule());
    out.push_str("\n\n");
    out.push_str(&format!("Core Message String: \"{core}\"\n"));
    out.push_str(&format!("Tone: {tone}\n"));
    out.push_str(&format!("Generated: {} platforms\n\n", results.len()));

    for (platform, content) in results.iter() {
        out.push('\n');
        out.push_str(&light_rule());
        out.push('\n');
        out.push_str(&format!("PLATFORM: {}\n", platform.as_str().to_uppercase()));
        out.push_str(&light_rule());
        out.push_str("\n\n");
        out.push_str(content);
        out.push_str("\n\n");
    }

    out
}

pub fn write_transcript(
    path: &Path,
    core: &CoreMessage,
    tone: &Tone,
    results: &ResultSet,
) -> Result<(), TranscriptError> {
    std::fs::write(path, render_transcript(core, tone, results)).map_err(|source| {
        TranscriptError {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!("wrote {} platforms to {}", results.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use corecast_core::Platform;

    fn sample() -> (CoreMessage, Tone, ResultSet) {
        let mut results = ResultSet::new();
        results.insert(
            Platform::Twitter,
            "Check this out! Try our new app today. #tech".into(),
        );
        results.insert(Platform::Blog, "Intro\n\nTry our new app\n\nOutro".into());
        (
            CoreMessage::new("Try our new app").unwrap(),
            Tone::default(),
            results,
        )
    }

    #[test]
    fn header_layout() {
        let (core, tone, results) = sample();
        let out = render_transcript(&core, &tone, &results);
        let expected_header = format!(
            "{eq}\nCONTENT GENERATION OUTPUT\n{eq}\n\n\
             Core Message String: \"Try our new app\"\n\
             Tone: professional\n\
             Generated: 2 platforms\n\n",
            eq = "=".repeat(70)
        );
        assert!(out.starts_with(&expected_header));
    }

    #[test]
    fn platform_sections_in_order() {
        let (core, tone, results) = sample();
        let out = render_transcript(&core, &tone, &results);
        let rule = "─".repeat(70);
        let twitter = format!(
            "\n{rule}\nPLATFORM: TWITTER\n{rule}\n\nCheck this out! Try our new app today. #tech\n\n"
        );
        let blog = format!("\n{rule}\nPLATFORM: BLOG\n{rule}\n\nIntro\n\nTry our new app\n\nOutro\n\n");
        let t = out.find(&twitter).expect("twitter section");
        let b = out.find(&blog).expect("blog section");
        assert!(t < b);
        assert!(out.ends_with(&blog));
    }

    #[test]
    fn empty_result_set_has_header_only() {
        let out = render_transcript(
            &CoreMessage::new("x").unwrap(),
            &Tone::parse("casual"),
            &ResultSet::new(),
        );
        assert!(out.ends_with("Tone: casual\nGenerated: 0 platforms\n\n"));
        assert!(!out.contains("PLATFORM:"));
    }

    #[test]
    fn write_transcript_to_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.txt");
        let (core, tone, results) = sample();
        write_transcript(&path, &core, &tone, &results).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_transcript(&core, &tone, &results));
    }

    #[test]
    fn write_transcript_reports_path_on_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing-dir").join("out.txt");
        let (core, tone, results) = sample();
        let err = write_transcript(&path, &core, &tone, &results).unwrap_err();
        assert_eq!(err.path, path);
        assert!(err.to_string().contains("missing-dir"));
    }
}
