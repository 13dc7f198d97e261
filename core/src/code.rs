use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome message of the most recent code submission.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CodeFeedback {
    Unlocked,
    Rejected,
}

impl CodeFeedback {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Unlocked => "Correct! The exit wall is open, go!",
            Self::Rejected => "Incorrect code, try again.",
        }
    }
}

/// Secret-code entry state: an input-active flag, a bounded buffer, and the last feedback.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeChallenge {
    active: bool,
    buffer: String,
    feedback: Option<CodeFeedback>,
}

impl CodeChallenge {
    pub const fn input_active(&self) -> bool {
        self.active
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub const fn feedback(&self) -> Option<CodeFeedback> {
        self.feedback
    }

    pub fn begin(&mut self) {
        self.active = true;
        self.buffer.clear();
        self.feedback = None;
    }

    /// Appends while input is active and the buffer is under `max_len` characters; silently
    /// ignored otherwise.
    pub fn push_char(&mut self, ch: char, max_len: usize) -> bool {
        if !self.active || self.buffer.chars().count() >= max_len {
            return false;
        }
        self.buffer.push(ch);
        true
    }

    pub fn pop_char(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    pub fn cancel(&mut self) -> bool {
        let had_state = self.active || !self.buffer.is_empty() || self.feedback.is_some();
        self.active = false;
        self.buffer.clear();
        self.feedback = None;
        had_state
    }

    /// Compares the trimmed, case-normalized buffer against `secret`. The buffer clears either
    /// way; input stays active after a rejection so the player can retry.
    pub fn submit(&mut self, secret: &str) -> SubmitOutcome {
        let correct = self.buffer.trim().to_uppercase() == secret;
        self.buffer.clear();

        if correct {
            self.active = false;
            self.feedback = Some(CodeFeedback::Unlocked);
            SubmitOutcome::Correct
        } else {
            self.feedback = Some(CodeFeedback::Rejected);
            SubmitOutcome::Incorrect
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_challenge(text: &str) -> CodeChallenge {
        let mut code = CodeChallenge::default();
        code.begin();
        for ch in text.chars() {
            code.push_char(ch, 12);
        }
        code
    }

    #[test]
    fn buffer_caps_at_max_len() {
        let mut code = CodeChallenge::default();
        code.begin();

        for ch in "abcdef".chars() {
            code.push_char(ch, 4);
        }

        assert_eq!(code.buffer(), "abcd");
    }

    #[test]
    fn push_is_ignored_while_inactive() {
        let mut code = CodeChallenge::default();

        assert!(!code.push_char('x', 12));
        assert_eq!(code.buffer(), "");
    }

    #[test]
    fn backspace_on_empty_buffer_is_a_no_op() {
        let mut code = CodeChallenge::default();
        code.begin();

        assert!(!code.pop_char());

        code.push_char('a', 12);
        assert!(code.pop_char());
        assert_eq!(code.buffer(), "");
    }

    #[test]
    fn cancel_clears_everything() {
        let mut code = active_challenge("abc");

        assert!(code.cancel());
        assert!(!code.input_active());
        assert_eq!(code.buffer(), "");
        assert_eq!(code.feedback(), None);
    }

    #[test]
    fn submit_normalizes_case_and_whitespace() {
        let mut code = active_challenge(" magic ");

        assert_eq!(code.submit("MAGIC"), SubmitOutcome::Correct);
        assert!(!code.input_active());
        assert_eq!(code.buffer(), "");
        assert_eq!(code.feedback(), Some(CodeFeedback::Unlocked));
    }

    #[test]
    fn rejection_clears_the_buffer_but_keeps_input_active() {
        let mut code = active_challenge("WRONG");

        assert_eq!(code.submit("MAGIC"), SubmitOutcome::Incorrect);
        assert!(code.input_active());
        assert_eq!(code.buffer(), "");
        assert_eq!(code.feedback(), Some(CodeFeedback::Rejected));
    }
}
