use corecast_core::{CoreMessage, Platform, StyleGuide, Tone};

/// Everything the generation prompt embeds for one platform.
#[derive(Debug, Clone)]
pub struct PromptContext {
    pub core_message: String,
    pub platform: String,
    pub guideline: String,
    pub tone: String,
}

impl PromptContext {
    pub fn new(core: &CoreMessage, platform: Platform, tone: &Tone, guide: &StyleGuide) -> Self {
        Self {
            core_message: core.as_str().to_string(),
            platform: platform.as_str().to_string(),
            guideline: guide.guideline_for(platform).to_string(),
            tone: tone.as_str().to_string(),
        }
    }

    /// Role line and the hard verbatim requirement.
    pub fn append_preamble(&self, prompt: &mut String) {
        prompt.push_str(&format!(
            "You are a professional content creator. Generate a {} post/article \
             based on the following requirements:\n\n",
            self.platform
        ));
        prompt.push_str(
            "**STRICT REQUIREMENT**: You MUST include this exact Core Message String \
             verbatim (word-for-word) in your output:\n",
        );
        prompt.push_str(&format!("\"{}\"\n\n", self.core_message));
    }

    pub fn append_platform(&self, prompt: &mut String) {
        prompt.push_str(&format!("**Platform**: {}\n", self.platform));
        prompt.push_str(&format!("**Platform Guidelines**: {}\n", self.guideline));
        prompt.push_str(&format!("**Desired Tone**: {}\n\n", self.tone));
    }
}
