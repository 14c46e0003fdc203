use crate::domain::ports::{Navigate, SpeechSynthesizer, Utterance};

/// Terminal stand-in for the speech device: every utterance becomes a
/// stdout line, so scripted runs show exactly what would be spoken.
#[derive(Default, Clone, Copy)]
pub struct StdoutSynthesizer;

impl SpeechSynthesizer for StdoutSynthesizer {
    fn utter(&self, utterance: Utterance) {
        println!("[voice {}] {}", utterance.locale, utterance.text);
    }

    fn cancel(&self) {}
}

/// For runtimes with no speech capability: every request is a no-op and
/// the flow proceeds visually. Narration must never block a transaction.
#[derive(Default, Clone, Copy)]
pub struct SilentSynthesizer;

impl SpeechSynthesizer for SilentSynthesizer {
    fn utter(&self, _utterance: Utterance) {}

    fn cancel(&self) {}
}

/// Prints requested routes instead of routing; the demo binary's host
/// "page" is the terminal.
#[derive(Default, Clone, Copy)]
pub struct StdoutNavigator;

impl Navigate for StdoutNavigator {
    fn navigate_to(&self, route: &str) {
        println!("[navigate] {route}");
    }
}
