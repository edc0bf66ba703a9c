//! Application context and the intent/effect data flow.
//!
//! UI events become [`Intent`]s; applying an intent mutates the owned
//! state and returns [`Effect`]s for the UI layer to act on. No code path
//! reads UI widgets as authoritative state, and nothing here is globally
//! reachable: the [`AppContext`] is constructed once and passed by
//! reference.

pub mod clipboard;
pub mod install;
pub mod timer;

use crate::error::{ReframeError, Result};
use crate::export;
use crate::journal::JournalStore;
use crate::quotes::QuoteShelf;
use crate::storage::Storage;
use clipboard::ClipboardChain;
use install::{InstallChoice, InstallGate};
use timer::{PauseTimer, TimerEvent};

/// One UI event, mapped 1:1 onto a state mutation or action.
#[derive(Clone, Debug)]
pub enum Intent {
    // Step 1: pause
    SetFeel(String),
    SetPauseSeconds(u32),
    SetPauseNote(String),
    // Step 2: observe
    SetThought(String),
    SetBody(String),
    AddBodySensation(String),
    SetScore(u8),
    SetObserveNote(String),
    // Step 3: redirect
    SetOldReaction(String),
    SetNewReaction(String),
    SetTriedTenPercent(bool),
    SetRedirectNote(String),
    // Record lifecycle
    Save,
    Reset,
    ConfirmReset,
    ExportSummary,
    // Copying
    CopySummary,
    CopyQuote,
    CopyText(String),
    // Quotes
    NextQuote,
    RandomQuote,
    AddQuote(String),
    RemoveQuote(usize),
    SetQuotesEnabled(bool),
    // Pause timer
    StartTimer,
    StopTimer,
    ResetTimer,
    TimerTick,
    // Installation
    Install,
}

/// What the UI layer should do after an intent is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Re-render from the owned state.
    Render,
    /// Transient user-visible notice.
    Notice(String),
    /// Ask the user to confirm the irreversible reset.
    ConfirmReset,
    /// Offer `contents` as a download named `name`.
    Download { name: String, contents: String },
}

fn notice(text: &str) -> Vec<Effect> {
    vec![Effect::Notice(text.to_string())]
}

/// Explicitly owned application state: journal, quotes, clipboard chain,
/// retained install prompt, and the pause timer.
pub struct AppContext<S: Storage> {
    journal: JournalStore<S>,
    quotes: QuoteShelf<S>,
    clipboard: ClipboardChain,
    install: InstallGate,
    timer: PauseTimer,
}

impl<S: Storage> AppContext<S> {
    pub fn new(journal: JournalStore<S>, quotes: QuoteShelf<S>, clipboard: ClipboardChain) -> Self {
        Self {
            journal,
            quotes,
            clipboard,
            install: InstallGate::new(),
            timer: PauseTimer::new(),
        }
    }

    pub fn journal(&self) -> &JournalStore<S> {
        &self.journal
    }

    pub fn quotes(&self) -> &QuoteShelf<S> {
        &self.quotes
    }

    pub fn timer(&self) -> &PauseTimer {
        &self.timer
    }

    /// The platform's "install available" signal lands here.
    pub fn install_gate(&mut self) -> &mut InstallGate {
        &mut self.install
    }

    /// Apply one intent. Storage and cache errors propagate; user-level
    /// misses (empty input, nothing to copy, both clipboard paths failing)
    /// come back as transient notices with no state change.
    pub fn apply(&mut self, intent: Intent) -> Result<Vec<Effect>> {
        match intent {
            Intent::SetFeel(value) => {
                self.journal.set_feel(value)?;
                Ok(Vec::new())
            }
            Intent::SetPauseSeconds(value) => {
                self.journal.set_pause_seconds(value)?;
                Ok(Vec::new())
            }
            Intent::SetPauseNote(value) => {
                self.journal.set_pause_note(value)?;
                Ok(Vec::new())
            }
            Intent::SetThought(value) => {
                self.journal.set_thought(value)?;
                Ok(Vec::new())
            }
            Intent::SetBody(value) => {
                self.journal.set_body(value)?;
                Ok(Vec::new())
            }
            Intent::AddBodySensation(chip) => {
                self.journal.add_body_sensation(&chip)?;
                Ok(vec![Effect::Render])
            }
            Intent::SetScore(value) => {
                self.journal.set_score(value)?;
                Ok(Vec::new())
            }
            Intent::SetObserveNote(value) => {
                self.journal.set_observe_note(value)?;
                Ok(Vec::new())
            }
            Intent::SetOldReaction(value) => {
                self.journal.set_old_reaction(value)?;
                Ok(Vec::new())
            }
            Intent::SetNewReaction(value) => {
                self.journal.set_new_reaction(value)?;
                Ok(Vec::new())
            }
            Intent::SetTriedTenPercent(value) => {
                self.journal.set_tried_ten_percent(value)?;
                Ok(Vec::new())
            }
            Intent::SetRedirectNote(value) => {
                self.journal.set_redirect_note(value)?;
                Ok(Vec::new())
            }

            Intent::Save => {
                self.journal.save()?;
                Ok(notice("Saved."))
            }
            Intent::Reset => Ok(vec![Effect::ConfirmReset]),
            Intent::ConfirmReset => {
                self.journal.reset()?;
                Ok(vec![Effect::Render, Effect::Notice("Cleared.".to_string())])
            }
            Intent::ExportSummary => Ok(vec![
                Effect::Download {
                    name: export::export_file_name(),
                    contents: export::summary_text(self.journal.record()),
                },
                Effect::Notice("Exported.".to_string()),
            ]),

            Intent::CopySummary => {
                let text = export::summary_text(self.journal.record());
                Ok(self.copy(&text))
            }
            Intent::CopyQuote => {
                let current = self.quotes.quotes();
                if !current.enabled || current.last.is_empty() {
                    return Ok(notice("No quote right now."));
                }
                let text = current.last.clone();
                Ok(self.copy(&text))
            }
            Intent::CopyText(text) => {
                let text = text.trim().to_string();
                if text.is_empty() {
                    return Ok(notice("Nothing to copy."));
                }
                Ok(self.copy(&text))
            }

            Intent::NextQuote => {
                self.quotes.pick_next()?;
                Ok(vec![Effect::Render])
            }
            Intent::RandomQuote => {
                self.quotes.pick_random()?;
                Ok(vec![Effect::Render])
            }
            Intent::AddQuote(text) => match self.quotes.add(&text) {
                Ok(()) => Ok(vec![Effect::Render, Effect::Notice("Added.".to_string())]),
                Err(ReframeError::MissingInput(_)) => Ok(notice("Type a quote first.")),
                Err(err) => Err(err),
            },
            Intent::RemoveQuote(index) => {
                self.quotes.remove(index)?;
                Ok(vec![Effect::Render, Effect::Notice("Removed.".to_string())])
            }
            Intent::SetQuotesEnabled(enabled) => {
                self.quotes.set_enabled(enabled)?;
                let text = if enabled {
                    "Quotes on."
                } else {
                    "Quotes off."
                };
                Ok(vec![Effect::Render, Effect::Notice(text.to_string())])
            }

            Intent::StartTimer => {
                let seconds = self.journal.record().step1.seconds;
                self.timer.start(seconds);
                Ok(vec![Effect::Render])
            }
            Intent::StopTimer => {
                self.timer.stop();
                Ok(notice("Pause stopped. Start again when you need it."))
            }
            Intent::ResetTimer => {
                self.timer.reset();
                Ok(vec![Effect::Render, Effect::Notice("Reset.".to_string())])
            }
            Intent::TimerTick => match self.timer.tick() {
                TimerEvent::Idle => Ok(Vec::new()),
                TimerEvent::Running { .. } => Ok(vec![Effect::Render]),
                TimerEvent::Finished => Ok(vec![
                    Effect::Render,
                    Effect::Notice("Done. You gave the system a pause command.".to_string()),
                ]),
            },

            Intent::Install => {
                if !self.install.available() {
                    return Ok(notice("Install prompt not available right now."));
                }
                match self.install.trigger()? {
                    InstallChoice::Accepted => Ok(notice("Install request sent.")),
                    InstallChoice::Dismissed => Ok(notice("No problem. Install any time.")),
                }
            }
        }
    }

    fn copy(&mut self, text: &str) -> Vec<Effect> {
        match self.clipboard.copy(text) {
            Ok(()) => notice("Copied."),
            Err(_) => notice("Copy failed. Select the text manually."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn app() -> AppContext<MemoryStorage> {
        AppContext::new(
            JournalStore::open(MemoryStorage::new()),
            QuoteShelf::open(MemoryStorage::new()),
            ClipboardChain::buffered(),
        )
    }

    #[test]
    fn test_field_intent_mutates_owned_state() {
        let mut app = app();
        app.apply(Intent::SetFeel("restless".to_string())).unwrap();
        assert_eq!(app.journal().record().step1.feel, "restless");
    }

    #[test]
    fn test_reset_is_two_phase() {
        let mut app = app();
        app.apply(Intent::SetFeel("angry".to_string())).unwrap();

        let effects = app.apply(Intent::Reset).unwrap();
        assert_eq!(effects, vec![Effect::ConfirmReset]);
        assert_eq!(app.journal().record().step1.feel, "angry");

        let effects = app.apply(Intent::ConfirmReset).unwrap();
        assert!(effects.contains(&Effect::Render));
        assert_eq!(app.journal().record().step1.feel, "");
    }

    #[test]
    fn test_empty_quote_becomes_notice_not_error() {
        let mut app = app();
        let effects = app.apply(Intent::AddQuote("   ".to_string())).unwrap();
        assert_eq!(effects, vec![Effect::Notice("Type a quote first.".to_string())]);
    }

    #[test]
    fn test_export_offers_download() {
        let mut app = app();
        app.apply(Intent::SetThought("I always fail".to_string()))
            .unwrap();

        let effects = app.apply(Intent::ExportSummary).unwrap();
        let download = effects.iter().find_map(|e| match e {
            Effect::Download { name, contents } => Some((name, contents)),
            _ => None,
        });
        let (name, contents) = download.expect("download effect");
        assert!(name.starts_with("reframe-"));
        assert!(contents.contains("I always fail"));
    }

    #[test]
    fn test_install_without_prompt_is_a_notice() {
        let mut app = app();
        let effects = app.apply(Intent::Install).unwrap();
        assert!(matches!(effects.as_slice(), [Effect::Notice(_)]));
    }

    #[test]
    fn test_timer_flow() {
        let mut app = app();
        app.apply(Intent::SetPauseSeconds(2)).unwrap();
        app.apply(Intent::StartTimer).unwrap();
        assert!(app.timer().is_running());

        app.apply(Intent::TimerTick).unwrap();
        let effects = app.apply(Intent::TimerTick).unwrap();
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::Notice(text) if text.starts_with("Done."))));
        assert!(!app.timer().is_running());
    }
}
