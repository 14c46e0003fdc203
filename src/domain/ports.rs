use super::draft::{Recipient, TransactionDraft};
use super::language::{Language, MessageKey};
use super::receipt::ReceiptStatus;
use crate::error::SettlementError;
use async_trait::async_trait;
use std::sync::Arc;

/// Localization collaborator: one canonical key namespace, graceful
/// fallback to the default language when a key or language is missing.
pub trait Localize: Send + Sync {
    fn localize(&self, key: MessageKey, language: Language) -> String;
}

/// Navigation collaborator. Fire-and-forget; the core calls it at most
/// once per completed flow, plus once on cancel.
pub trait Navigate: Send + Sync {
    fn navigate_to(&self, route: &str);
}

/// One utterance handed to the speech device.
#[derive(Debug, PartialEq, Clone)]
pub struct Utterance {
    pub text: String,
    /// BCP-47 locale the voice is picked by.
    pub locale: &'static str,
    /// Speech rate; narration runs slightly slow for clarity.
    pub rate: f32,
}

/// The raw speech output device behind the narration scheduler.
///
/// `utter` must not call back into the scheduler synchronously; completion
/// is reported through `NarrationScheduler::utterance_finished`.
pub trait SpeechSynthesizer: Send + Sync {
    fn utter(&self, utterance: Utterance);
    fn cancel(&self);
}

/// The transfer flow's candidate-list collaborator. `insert` assigns the
/// stored id and returns the stored recipient; it is only reached through
/// the flow's add-recipient validation.
pub trait RecipientDirectory: Send + Sync {
    fn list(&self) -> Vec<Recipient>;
    fn insert(&self, recipient: Recipient) -> Recipient;
}

/// Pluggable settlement step. The stub implementation always resolves to
/// `Success` after a fixed delay; a real backend can return `Pending`,
/// `Failed`, or an error without touching the flow's transition logic.
#[async_trait]
pub trait Settle: Send + Sync {
    async fn settle(&self, draft: &TransactionDraft) -> Result<ReceiptStatus, SettlementError>;
}

pub type LocalizeRef = Arc<dyn Localize>;
pub type NavigateRef = Arc<dyn Navigate>;
pub type SynthesizerRef = Arc<dyn SpeechSynthesizer>;
pub type DirectoryRef = Arc<dyn RecipientDirectory>;
pub type SettleRef = Arc<dyn Settle>;
