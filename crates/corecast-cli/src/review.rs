//! Per-platform review loop.
//!
//! ```text
//! Generating ──> Display ──> AwaitingChoice ──┬─ [A] verified ──────> Accepted
//!     ^                          ^   │         ├─ [E] edit verifies ─> Accepted
//!     └──────── [R] ─────────────┼───┘         └─ [Q] ──────────────> Quit
//!                                └── [A] unverified / [E] fails / other input
//! ```
//!
//! Only text that passes verification is ever returned as accepted.

use corecast_core::{
    verify, AttemptContent, CoreMessage, GenerationAttempt, Platform, StyleGuide, Tone,
};
use corecast_prompts::{assemble_prompt, PromptContext};
use corecast_service::GenerationService;
use tracing::{info, warn};

use crate::console::{ask, read_block, Console};
use crate::render;
use crate::SessionError;

/// Line that terminates an edited block.
pub const EDIT_SENTINEL: &str = "END";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Accept,
    Retry,
    Edit,
    Quit,
}

impl Choice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Choice::Accept),
            "R" => Some(Choice::Retry),
            "E" => Some(Choice::Edit),
            "Q" => Some(Choice::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ReviewState {
    /// About to call the generation service.
    Generating,
    /// Showing an attempt and its verification result.
    Display(GenerationAttempt),
    /// Waiting for the operator's decision on the current attempt.
    AwaitingChoice(GenerationAttempt),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// Verified content to store for this platform.
    Accepted(String),
    /// Abort the whole session.
    Quit,
}

pub struct ReviewLoop<'a> {
    platform: Platform,
    core: &'a CoreMessage,
    tone: &'a Tone,
    guide: &'a StyleGuide,
    state: ReviewState,
    attempts: u32,
    /// 1-based position of this platform in the session, and the session total.
    position: (usize, usize),
}

impl<'a> ReviewLoop<'a> {
    pub fn new(
        platform: Platform,
        core: &'a CoreMessage,
        tone: &'a Tone,
        guide: &'a StyleGuide,
    ) -> Self {
        Self {
            platform,
            core,
            tone,
            guide,
            state: ReviewState::Generating,
            attempts: 0,
            position: (1, 1),
        }
    }

    /// Place this platform within the session's selection for the header.
    pub fn at_position(mut self, index: usize, total: usize) -> Self {
        self.position = (index, total);
        self
    }

    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    /// Generation calls made so far for this platform.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Drive the loop to a terminal outcome.
    pub fn run<S, C>(&mut self, service: &S, console: &mut C) -> Result<ReviewOutcome, SessionError>
    where
        S: GenerationService + ?Sized,
        C: Console + ?Sized,
    {
        loop {
            if let Some(outcome) = self.step(service, console)? {
                return Ok(outcome);
            }
        }
    }

    /// Perform one transition. Returns the outcome once a terminal state is reached.
    pub fn step<S, C>(
        &mut self,
        service: &S,
        console: &mut C,
    ) -> Result<Option<ReviewOutcome>, SessionError>
    where
        S: GenerationService + ?Sized,
        C: Console + ?Sized,
    {
        let state = std::mem::replace(&mut self.state, ReviewState::Generating);
        let (next, outcome) = match state {
            ReviewState::Generating => {
                let attempt = self.generate(service, console)?;
                (ReviewState::Display(attempt), None)
            }
            ReviewState::Display(attempt) => {
                self.display(&attempt, console)?;
                (ReviewState::AwaitingChoice(attempt), None)
            }
            ReviewState::AwaitingChoice(attempt) => self.await_choice(attempt, console)?,
        };
        self.state = next;
        Ok(outcome)
    }

    fn generate<S, C>(&mut self, service: &S, console: &mut C) -> Result<GenerationAttempt, SessionError>
    where
        S: GenerationService + ?Sized,
        C: Console + ?Sized,
    {
        self.attempts += 1;

        console.write_line("")?;
        console.write_line(&render::light_rule())?;
        console.write_line(&format!(
            "🎯 Platform: {} ({}/{}, attempt {})",
            self.platform.as_str().to_uppercase(),
            self.position.0,
            self.position.1,
            self.attempts
        ))?;
        console.write_line(&render::light_rule())?;
        console.write_line("")?;
        console.write_line("⏳ Generating content...")?;

        let ctx = PromptContext::new(self.core, self.platform, self.tone, self.guide);
        let prompt = assemble_prompt(&ctx);
        info!(
            "generating {} attempt {} via {} ({})",
            self.platform,
            self.attempts,
            service.name(),
            service.model()
        );

        let content = match service.generate(&prompt) {
            Ok(text) => AttemptContent::Generated(text),
            Err(e) => {
                warn!("generation failed for {}: {e}", self.platform);
                AttemptContent::Failed(e.to_string())
            }
        };

        Ok(GenerationAttempt::new(
            self.platform,
            self.core,
            self.attempts,
            content,
        ))
    }

    fn display<C: Console + ?Sized>(
        &self,
        attempt: &GenerationAttempt,
        console: &mut C,
    ) -> Result<(), SessionError> {
        console.write_line("")?;
        console.write_line("📄 Generated Content:")?;
        console.write_line("")?;
        for row in render::content_box(&attempt.display_text()) {
            console.write_line(&row)?;
        }
        console.write_line("")?;

        info!(
            "{} attempt {}: verified={}",
            attempt.platform, attempt.number, attempt.verified
        );
        if attempt.verified {
            console.write_line("✅ Core message verified: Present in content")?;
        } else if attempt.is_failure() {
            console.write_line("❌ Generation failed. Retry, edit, or quit.")?;
        } else {
            console.write_line("⚠️  WARNING: Core message not found verbatim in content!")?;
        }
        Ok(())
    }

    fn await_choice<C: Console + ?Sized>(
        &self,
        attempt: GenerationAttempt,
        console: &mut C,
    ) -> Result<(ReviewState, Option<ReviewOutcome>), SessionError> {
        console.write_line("")?;
        console.write_line("Options:")?;
        console.write_line("  [A] Accept and continue to next platform")?;
        console.write_line("  [R] Retry generation for this platform")?;
        console.write_line("  [E] Edit and accept")?;
        console.write_line("  [Q] Quit")?;
        let input = ask(console, "\nYour choice: ")?;

        match Choice::parse(&input) {
            Some(Choice::Accept) => {
                let accepted = attempt
                    .text()
                    .filter(|_| attempt.verified)
                    .map(str::to_string);
                match accepted {
                    Some(text) => {
                        self.saved(console)?;
                        Ok((ReviewState::Generating, Some(ReviewOutcome::Accepted(text))))
                    }
                    None => {
                        console.write_line(&format!(
                            "⚠️  Cannot accept: content does not contain the core message: \"{}\"",
                            self.core
                        ))?;
                        console.write_line("Retry, edit, or quit.")?;
                        Ok((ReviewState::AwaitingChoice(attempt), None))
                    }
                }
            }
            Some(Choice::Retry) => {
                console.write_line("")?;
                console.write_line("🔄 Regenerating content...")?;
                Ok((ReviewState::Generating, None))
            }
            Some(Choice::Edit) => {
                console.write_line("")?;
                console.write_line(&format!(
                    "✏️  Enter your edited content (type '{EDIT_SENTINEL}' on a new line when done):"
                ))?;
                let edited = read_block(console, EDIT_SENTINEL)?;
                if verify(&edited, self.core.as_str()) {
                    self.saved(console)?;
                    Ok((ReviewState::Generating, Some(ReviewOutcome::Accepted(edited))))
                } else {
                    console.write_line("")?;
                    console.write_line(&format!(
                        "⚠️  WARNING: Your edited content doesn't contain the core message: \"{}\"",
                        self.core
                    ))?;
                    console.write_line("Content NOT saved. Please try again.")?;
                    Ok((ReviewState::AwaitingChoice(attempt), None))
                }
            }
            Some(Choice::Quit) => Ok((ReviewState::AwaitingChoice(attempt), Some(ReviewOutcome::Quit))),
            None => {
                console.write_line("Invalid choice. Please try again.")?;
                Ok((ReviewState::AwaitingChoice(attempt), None))
            }
        }
    }

    fn saved<C: Console + ?Sized>(&self, console: &mut C) -> Result<(), SessionError> {
        info!("accepted content for {}", self.platform);
        console.write_line(&format!("✓ {} content saved!", self.platform.display_name()))?;
        Ok(())
    }
}
