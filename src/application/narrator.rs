use crate::domain::language::Language;
use crate::domain::numbers::small_number_word;
use crate::domain::ports::{SynthesizerRef, Utterance};
use std::sync::Mutex;
use tracing::debug;

/// Slightly slow for better pronunciation of unfamiliar names.
const SPEECH_RATE: f32 = 0.85;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Priority {
    High,
    Normal,
}

/// A transient scheduling unit; never persisted.
#[derive(Debug, PartialEq, Clone)]
pub struct NarrationRequest {
    pub text: String,
    pub priority: Priority,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum ChannelState {
    Idle,
    Speaking,
}

struct ChannelInner {
    enabled: bool,
    language: Language,
    state: ChannelState,
    /// At most one queued normal request; a newer one replaces it.
    pending: Option<String>,
}

/// Arbiter of the single speech output channel.
///
/// Every component that talks (flow machine, guided tour, receipt
/// read-aloud) shares one scheduler instance by reference; the priority
/// rule below is what keeps two utterances from ever overlapping audibly.
///
/// - `High` cancels the in-flight utterance, drops the pending slot, and
///   speaks immediately.
/// - `Normal` speaks only when the channel is idle; otherwise it waits in
///   the single pending slot and may be superseded before it starts.
pub struct NarrationScheduler {
    synthesizer: SynthesizerRef,
    inner: Mutex<ChannelInner>,
}

impl NarrationScheduler {
    pub fn new(synthesizer: SynthesizerRef) -> Self {
        Self {
            synthesizer,
            inner: Mutex::new(ChannelInner {
                enabled: true,
                language: Language::default(),
                state: ChannelState::Idle,
                pending: None,
            }),
        }
    }

    pub fn speak(&self, text: &str, priority: Priority) {
        if text.is_empty() {
            return;
        }
        let utterance = {
            let mut inner = self.lock();
            if !inner.enabled {
                return;
            }
            match priority {
                Priority::High => {
                    inner.pending = None;
                    if inner.state == ChannelState::Speaking {
                        self.synthesizer.cancel();
                    }
                    inner.state = ChannelState::Speaking;
                    Self::prepare(&inner, text)
                }
                Priority::Normal => {
                    if inner.state == ChannelState::Speaking {
                        debug!(text, "narration queued behind in-flight utterance");
                        inner.pending = Some(text.to_string());
                        return;
                    }
                    inner.state = ChannelState::Speaking;
                    Self::prepare(&inner, text)
                }
            }
        };
        self.synthesizer.utter(utterance);
    }

    /// Completion callback from the speech device. Starts the pending
    /// request, if one survived.
    pub fn utterance_finished(&self) {
        let next = {
            let mut inner = self.lock();
            inner.state = ChannelState::Idle;
            match inner.pending.take() {
                Some(text) if inner.enabled => {
                    inner.state = ChannelState::Speaking;
                    Some(Self::prepare(&inner, &text))
                }
                _ => None,
            }
        };
        if let Some(utterance) = next {
            self.synthesizer.utter(utterance);
        }
    }

    /// Disabling cancels the in-flight utterance and suppresses every
    /// request until re-enabled.
    pub fn set_enabled(&self, enabled: bool) {
        let cancel = {
            let mut inner = self.lock();
            inner.enabled = enabled;
            if enabled {
                false
            } else {
                inner.pending = None;
                let speaking = inner.state == ChannelState::Speaking;
                inner.state = ChannelState::Idle;
                speaking
            }
        };
        if cancel {
            self.synthesizer.cancel();
        }
    }

    /// Applies to subsequent utterances; an utterance already in flight
    /// keeps its voice.
    pub fn set_language(&self, language: Language) {
        self.lock().language = language;
    }

    pub fn language(&self) -> Language {
        self.lock().language
    }

    pub fn is_speaking(&self) -> bool {
        self.lock().state == ChannelState::Speaking
    }

    fn prepare(inner: &ChannelInner, text: &str) -> Utterance {
        Utterance {
            text: spell_out_small_numbers(text, inner.language),
            locale: inner.language.voice_locale(),
            rate: SPEECH_RATE,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ChannelInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Replaces standalone digit runs with value 0–10 by localized words, a
/// readability affordance for voice output. Longer runs (account numbers,
/// pre-formatted amounts) pass through unchanged.
fn spell_out_small_numbers(text: &str, language: Language) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        let standalone = (start == 0 || !chars[start - 1].is_alphanumeric())
            && (i == chars.len() || !chars[i].is_alphanumeric());
        let run: String = chars[start..i].iter().collect();
        let word = if standalone {
            run.parse::<u64>()
                .ok()
                .and_then(|n| small_number_word(n, language))
        } else {
            None
        };
        match word {
            Some(word) => out.push_str(&word),
            None => out.push_str(&run),
        }
    }
    out
}
