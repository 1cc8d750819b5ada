//! Session controller: collect inputs, review each platform in order,
//! summarise, and offer to save.

use std::path::{Path, PathBuf};

use corecast_core::{parse_selection, CoreMessage, Platform, ResultSet, StyleGuide, Tone};
use corecast_service::GenerationService;
use tracing::{info, warn};

use crate::console::{ask, Console};
use crate::render;
use crate::review::{ReviewLoop, ReviewOutcome};
use crate::transcript::write_transcript;
use crate::SessionError;

/// Values supplied up front (from flags) instead of prompting.
#[derive(Debug, Clone, Default)]
pub struct Prefill {
    pub core: Option<CoreMessage>,
    pub platforms: Option<Vec<Platform>>,
    pub tone: Option<Tone>,
}

/// What a session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub core: CoreMessage,
    pub tone: Tone,
    pub platforms: Vec<Platform>,
    pub results: ResultSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every selected platform was accepted.
    Completed(SessionReport),
    /// The operator quit; `results` holds only platforms accepted before quitting.
    Quit(SessionReport),
}

pub struct Session<'a, S: GenerationService + ?Sized> {
    service: &'a S,
    guide: StyleGuide,
    prefill: Prefill,
}

impl<'a, S: GenerationService + ?Sized> Session<'a, S> {
    pub fn new(service: &'a S, guide: StyleGuide) -> Self {
        Self {
            service,
            guide,
            prefill: Prefill::default(),
        }
    }

    pub fn with_prefill(mut self, prefill: Prefill) -> Self {
        self.prefill = prefill;
        self
    }

    pub fn run<C: Console + ?Sized>(&self, console: &mut C) -> Result<SessionOutcome, SessionError> {
        render::banner(console, "🚀 corecast: one core message, every platform")?;
        console.write_line("")?;

        let core = self.collect_core(console)?;
        let platforms = self.collect_platforms(console)?;
        let tone = self.collect_tone(console)?;

        render::banner(console, "📝 Generating Content...")?;

        let mut results = ResultSet::new();
        let total = platforms.len();
        for (i, &platform) in platforms.iter().enumerate() {
            let mut review =
                ReviewLoop::new(platform, &core, &tone, &self.guide).at_position(i + 1, total);
            match review.run(self.service, console)? {
                ReviewOutcome::Accepted(content) => results.insert(platform, content),
                ReviewOutcome::Quit => {
                    info!(
                        "session quit during {platform}; discarding {} accepted",
                        results.len()
                    );
                    console.write_line("")?;
                    console.write_line(&format!(
                        "👋 Exiting... {} accepted platform(s) were not saved.",
                        results.len()
                    ))?;
                    return Ok(SessionOutcome::Quit(SessionReport {
                        core,
                        tone,
                        platforms,
                        results,
                    }));
                }
            }
        }

        console.write_line("")?;
        render::banner(console, "🎉 Content Generation Complete!")?;
        console.write_line("")?;
        console.write_line(&format!("Core Message: \"{core}\""))?;
        console.write_line(&format!("Platforms Generated: {}", results.len()))?;
        console.write_line("")?;

        Ok(SessionOutcome::Completed(SessionReport {
            core,
            tone,
            platforms,
            results,
        }))
    }

    fn collect_core<C: Console + ?Sized>(&self, console: &mut C) -> Result<CoreMessage, SessionError> {
        if let Some(ref core) = self.prefill.core {
            console.write_line(&format!("✓ Core Message Set: \"{core}\""))?;
            return Ok(core.clone());
        }

        console.write_line("Step 1: Enter your Core Message String")?;
        console.write_line("This exact message will appear verbatim in ALL generated content.")?;
        loop {
            let input = ask(console, "Core Message String: ")?;
            match CoreMessage::new(&input) {
                Ok(core) => {
                    console.write_line("")?;
                    console.write_line(&format!("✓ Core Message Set: \"{core}\""))?;
                    console.write_line("")?;
                    return Ok(core);
                }
                Err(e) => console.write_line(&format!("❌ Error: {e}. Please try again."))?,
            }
        }
    }

    fn collect_platforms<C: Console + ?Sized>(
        &self,
        console: &mut C,
    ) -> Result<Vec<Platform>, SessionError> {
        let platforms = match self.prefill.platforms {
            Some(ref platforms) => platforms.clone(),
            None => {
                console.write_line("Step 2: Select Target Platforms")?;
                console.write_line("Available platforms:")?;
                for (i, p) in Platform::ALL.iter().enumerate() {
                    console.write_line(&format!("  {}. {}", i + 1, p.display_name()))?;
                }
                console.write_line("")?;
                console.write_line("Enter platform numbers separated by commas (e.g., 1,2,5)")?;
                console.write_line(
                    "Or enter platform names separated by commas (e.g., twitter,linkedin)",
                )?;
                loop {
                    let input = ask(console, "Platforms: ")?;
                    match parse_selection(&input) {
                        Ok(platforms) => break platforms,
                        Err(e) => {
                            warn!("rejected platform selection {input:?}");
                            console.write_line(&format!("❌ Error: {e}. Please try again."))?;
                        }
                    }
                }
            }
        };

        let names: Vec<&str> = platforms.iter().map(|p| p.display_name()).collect();
        console.write_line("")?;
        console.write_line(&format!("✓ Selected Platforms: {}", names.join(", ")))?;
        console.write_line("")?;
        Ok(platforms)
    }

    fn collect_tone<C: Console + ?Sized>(&self, console: &mut C) -> Result<Tone, SessionError> {
        let tone = match self.prefill.tone {
            Some(ref tone) => tone.clone(),
            None => {
                console.write_line(
                    "Step 3: Select Tone (optional, press Enter for 'professional')",
                )?;
                console.write_line(
                    "Examples: professional, casual, enthusiastic, formal, friendly, humorous",
                )?;
                Tone::parse(&ask(console, "Tone: ")?)
            }
        };
        console.write_line("")?;
        console.write_line(&format!("✓ Tone Set: {tone}"))?;
        console.write_line("")?;
        Ok(tone)
    }
}

/// Ask whether to save, and where. Returns the path written, if any.
///
/// A failed write is reported and the filename is asked for again.
pub fn offer_save<C: Console + ?Sized>(
    console: &mut C,
    report: &SessionReport,
    default_path: &Path,
) -> Result<Option<PathBuf>, SessionError> {
    let answer = ask(console, "Would you like to save all content to a file? (y/n): ")?;
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(None);
    }

    loop {
        let input = ask(
            console,
            &format!("Enter filename (default: {}): ", default_path.display()),
        )?;
        let input = input.trim();
        let path = if input.is_empty() {
            default_path.to_path_buf()
        } else {
            PathBuf::from(input)
        };

        match write_transcript(&path, &report.core, &report.tone, &report.results) {
            Ok(()) => {
                console.write_line("")?;
                console.write_line(&format!("✅ Content saved to: {}", path.display()))?;
                return Ok(Some(path));
            }
            Err(e) => {
                warn!("{e}");
                console.write_line(&format!("❌ Could not save: {e}. Try another filename."))?;
            }
        }
    }
}
