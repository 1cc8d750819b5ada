use crate::PromptContext;

/// Append the numbered instructions. The first one restates the verbatim rule.
pub fn append_instructions(ctx: &PromptContext, prompt: &mut String) {
    prompt.push_str("Instructions:\n");
    prompt.push_str(&format!(
        "1. The Core Message String \"{}\" must appear EXACTLY as written somewhere in your output\n",
        ctx.core_message
    ));
    prompt.push_str(
        "2. Build engaging content around this core message that fits the platform's style\n",
    );
    prompt.push_str(&format!(
        "3. Adapt the surrounding content to match the {} tone\n",
        ctx.tone
    ));
    prompt.push_str("4. Follow the platform's best practices and format conventions\n");
    prompt.push_str(
        "5. Make it natural and engaging while ensuring the core message is prominent\n\n",
    );
    prompt.push_str("Generate the content now:");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_restate_core_and_tone() {
        let ctx = PromptContext {
            core_message: "Ship it".into(),
            platform: "slack".into(),
            guideline: "brief".into(),
            tone: "casual".into(),
        };
        let mut out = String::new();
        append_instructions(&ctx, &mut out);
        assert!(out.starts_with("Instructions:\n1. The Core Message String \"Ship it\""));
        assert!(out.contains("match the casual tone"));
        assert!(out.ends_with("Generate the content now:"));
    }
}
