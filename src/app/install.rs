//! Install-prompt handshake.
//!
//! The platform signals that installation is available; the signal is
//! retained (its default UI suppressed) until the user explicitly asks to
//! install, at which point it is replayed once and consumed. There is no
//! timeout: a prompt held by a dropped context is silently dropped with it.

use crate::error::{ReframeError, Result};

/// Outcome of replaying the retained prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstallChoice {
    Accepted,
    Dismissed,
}

/// A retained platform install prompt, consumed when replayed.
pub trait InstallPrompt {
    fn show(self: Box<Self>) -> Result<InstallChoice>;
}

/// Holds at most one deferred prompt until the user acts.
#[derive(Default)]
pub struct InstallGate {
    deferred: Option<Box<dyn InstallPrompt>>,
}

impl InstallGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain a prompt signaled by the platform.
    pub fn offer(&mut self, prompt: Box<dyn InstallPrompt>) {
        self.deferred = Some(prompt);
    }

    pub fn available(&self) -> bool {
        self.deferred.is_some()
    }

    /// Replay the retained prompt and await the user's choice. The prompt
    /// is consumed either way; a second trigger needs a fresh signal.
    pub fn trigger(&mut self) -> Result<InstallChoice> {
        let prompt = self
            .deferred
            .take()
            .ok_or(ReframeError::InstallUnavailable)?;
        prompt.show()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubPrompt(InstallChoice);

    impl InstallPrompt for StubPrompt {
        fn show(self: Box<Self>) -> Result<InstallChoice> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_trigger_without_prompt() {
        let mut gate = InstallGate::new();
        assert!(!gate.available());
        assert!(matches!(
            gate.trigger(),
            Err(ReframeError::InstallUnavailable)
        ));
    }

    #[test]
    fn test_prompt_is_consumed_on_trigger() {
        let mut gate = InstallGate::new();
        gate.offer(Box::new(StubPrompt(InstallChoice::Accepted)));
        assert!(gate.available());

        assert_eq!(gate.trigger().unwrap(), InstallChoice::Accepted);
        assert!(!gate.available());
        assert!(gate.trigger().is_err());
    }

    #[test]
    fn test_dismissed_choice_still_consumes() {
        let mut gate = InstallGate::new();
        gate.offer(Box::new(StubPrompt(InstallChoice::Dismissed)));
        assert_eq!(gate.trigger().unwrap(), InstallChoice::Dismissed);
        assert!(!gate.available());
    }
}
