use crate::domain::draft::Recipient;
use crate::domain::ports::{Navigate, RecipientDirectory, SpeechSynthesizer, Utterance};
use std::sync::{Arc, Mutex};

/// Session-scoped recipient directory.
///
/// New entries go to the front of the list, the way recently added
/// contacts surface first in the picker.
#[derive(Default, Clone)]
pub struct InMemoryRecipientDirectory {
    recipients: Arc<Mutex<Vec<Recipient>>>,
}

impl InMemoryRecipientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipients(recipients: Vec<Recipient>) -> Self {
        Self {
            recipients: Arc::new(Mutex::new(recipients)),
        }
    }
}

impl RecipientDirectory for InMemoryRecipientDirectory {
    fn list(&self) -> Vec<Recipient> {
        self.recipients.lock().expect("directory lock").clone()
    }

    fn insert(&self, mut recipient: Recipient) -> Recipient {
        let mut recipients = self.recipients.lock().expect("directory lock");
        recipient.id = recipients.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        recipients.insert(0, recipient.clone());
        recipient
    }
}

/// What the capturing synthesizer observed, in order.
#[derive(Debug, PartialEq, Clone)]
pub enum SpeechEvent {
    Utter(Utterance),
    Cancel,
}

/// Speech device double that records every call; the narrator tests and
/// the flow scenarios assert against its event log.
#[derive(Default, Clone)]
pub struct CapturingSynthesizer {
    events: Arc<Mutex<Vec<SpeechEvent>>>,
}

impl CapturingSynthesizer {
    pub fn events(&self) -> Vec<SpeechEvent> {
        self.events.lock().expect("speech log lock").clone()
    }

    pub fn utterances(&self) -> Vec<Utterance> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SpeechEvent::Utter(utterance) => Some(utterance),
                SpeechEvent::Cancel => None,
            })
            .collect()
    }

    pub fn spoken_texts(&self) -> Vec<String> {
        self.utterances().into_iter().map(|u| u.text).collect()
    }
}

impl SpeechSynthesizer for CapturingSynthesizer {
    fn utter(&self, utterance: Utterance) {
        self.events
            .lock()
            .expect("speech log lock")
            .push(SpeechEvent::Utter(utterance));
    }

    fn cancel(&self) {
        self.events
            .lock()
            .expect("speech log lock")
            .push(SpeechEvent::Cancel);
    }
}

/// Navigation double that records requested routes.
#[derive(Default, Clone)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().expect("route log lock").clone()
    }
}

impl Navigate for RecordingNavigator {
    fn navigate_to(&self, route: &str) {
        self.routes
            .lock()
            .expect("route log lock")
            .push(route.to_string());
    }
}
