use std::cell::RefCell;
use std::collections::VecDeque;

use crate::{GenerationError, GenerationService};

/// A generation service for tests that replays scripted replies in order
/// and records every prompt it receives.
#[derive(Debug, Default)]
pub struct ScriptedService {
    replies: RefCell<VecDeque<Result<String, GenerationError>>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn reply(self, text: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(text.to_string()));
        self
    }

    /// Queue a failed call.
    pub fn fail(self, error: GenerationError) -> Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.borrow().len()
    }

    pub fn remaining(&self) -> usize {
        self.replies.borrow().len()
    }
}

impl GenerationService for ScriptedService {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::Transport("script exhausted".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_in_order() {
        let svc = ScriptedService::new()
            .reply("one")
            .fail(GenerationError::EmptyResponse)
            .reply("three");
        assert_eq!(svc.remaining(), 3);
        assert_eq!(svc.generate("a"), Ok("one".into()));
        assert_eq!(svc.generate("b"), Err(GenerationError::EmptyResponse));
        assert_eq!(svc.generate("c"), Ok("three".into()));
        assert_eq!(svc.prompts(), vec!["a", "b", "c"]);
    }

    #[test]
    fn exhausted_script_is_transport_error() {
        let svc = ScriptedService::new();
        assert!(matches!(
            svc.generate("x"),
            Err(GenerationError::Transport(_))
        ));
        assert_eq!(svc.calls(), 1);
    }

    #[test]
    fn works_through_a_reference() {
        let svc = ScriptedService::new().reply("ok");
        let by_ref: &dyn GenerationService = &svc;
        assert_eq!(by_ref.generate("p"), Ok("ok".into()));
        assert_eq!(by_ref.name(), "scripted");
    }
}
