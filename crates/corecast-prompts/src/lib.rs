pub mod context;
pub mod instructions;

pub use context::PromptContext;

/// Assemble the full generation prompt. Same context, same prompt.
pub fn assemble_prompt(ctx: &PromptContext) -> String {
    let mut prompt = String::new();
    ctx.append_preamble(&mut prompt);
    ctx.append_platform(&mut prompt);
    instructions::append_instructions(ctx, &mut prompt);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use corecast_core::{CoreMessage, Platform, StyleGuide, Tone};

    fn ctx(platform: Platform) -> PromptContext {
        PromptContext::new(
            &CoreMessage::new("Try our new app").unwrap(),
            platform,
            &Tone::default(),
            &StyleGuide::standard(),
        )
    }

    #[test]
    fn prompt_embeds_every_input() {
        let guide = StyleGuide::standard();
        let prompt = assemble_prompt(&ctx(Platform::Linkedin));
        assert!(prompt.contains("\"Try our new app\""));
        assert!(prompt.contains("**Platform**: linkedin"));
        assert!(prompt.contains(guide.guideline_for(Platform::Linkedin)));
        assert!(prompt.contains("**Desired Tone**: professional"));
        assert!(prompt.contains("STRICT REQUIREMENT"));
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(
            assemble_prompt(&ctx(Platform::Blog)),
            assemble_prompt(&ctx(Platform::Blog))
        );
    }

    #[test]
    fn core_message_appears_in_requirement_and_instruction() {
        let prompt = assemble_prompt(&ctx(Platform::Twitter));
        assert_eq!(prompt.matches("Try our new app").count(), 2);
    }
}
