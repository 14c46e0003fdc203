use super::narrator::{NarrationScheduler, Priority};
use crate::domain::draft::{
    FlowKind, Network, Pin, Recipient, SavingsPlan, Target, TransactionDraft,
};
use crate::domain::language::{Language, MessageKey};
use crate::domain::money::Amount;
use crate::domain::ports::{DirectoryRef, LocalizeRef, NavigateRef, SettleRef};
use crate::domain::receipt::{Receipt, ReceiptDetails, ReceiptStatus, generate_receipt};
use crate::error::{FlowError, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const HOME_ROUTE: &str = "/home";

/// How long the success screen stays up before the flow sends the user
/// home. The armed timer is fire-and-forget; if the process ends first the
/// navigation is simply skipped.
const HOME_REDIRECT_DELAY: Duration = Duration::from_millis(3000);

/// The step pointer. Linear; the only exits are `back` and `cancel`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FlowStep {
    EntitySelection,
    AmountEntry,
    Confirmation,
    Authorization,
    Success,
}

impl FlowStep {
    pub fn index(self) -> usize {
        match self {
            FlowStep::EntitySelection => 0,
            FlowStep::AmountEntry => 1,
            FlowStep::Confirmation => 2,
            FlowStep::Authorization => 3,
            FlowStep::Success => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FlowStep::EntitySelection => "entity-selection",
            FlowStep::AmountEntry => "amount-entry",
            FlowStep::Confirmation => "confirmation",
            FlowStep::Authorization => "authorization",
            FlowStep::Success => "success",
        }
    }
}

/// The collaborators every flow needs, bundled so hosts wire them once.
#[derive(Clone)]
pub struct FlowContext {
    pub localizer: LocalizeRef,
    pub narrator: Arc<NarrationScheduler>,
    pub navigator: NavigateRef,
    pub settlement: SettleRef,
    pub language: Language,
}

/// One guided transaction attempt: entity selection, amount entry,
/// confirmation, authorization, success. Shared by the transfer, airtime,
/// and savings flows; only the identity of the selected target differs.
///
/// Transitions take `&mut self`, so a second `submit_pin` cannot race the
/// first; hosts additionally disable the triggering control while a
/// transition is in flight.
pub struct TransactionFlow {
    kind: FlowKind,
    step: FlowStep,
    candidates: Vec<Target>,
    directory: Option<DirectoryRef>,
    draft: TransactionDraft,
    receipt: Option<Receipt>,
    ctx: FlowContext,
}

impl TransactionFlow {
    /// Send-money flow. Candidates come from the recipient directory and
    /// can be extended at runtime through [`add_recipient`].
    ///
    /// [`add_recipient`]: TransactionFlow::add_recipient
    pub fn transfer(directory: DirectoryRef, ctx: FlowContext) -> Self {
        let candidates = directory.list().into_iter().map(Target::Recipient).collect();
        Self::new(FlowKind::Transfer, candidates, Some(directory), ctx)
    }

    /// Airtime purchase flow over a fixed network list.
    pub fn airtime(networks: Vec<Network>, ctx: FlowContext) -> Self {
        let candidates = networks.into_iter().map(Target::Network).collect();
        Self::new(FlowKind::Airtime, candidates, None, ctx)
    }

    /// Savings deposit flow over a fixed plan list.
    pub fn savings(plans: Vec<SavingsPlan>, ctx: FlowContext) -> Self {
        let candidates = plans.into_iter().map(Target::SavingsPlan).collect();
        Self::new(FlowKind::Savings, candidates, None, ctx)
    }

    fn new(
        kind: FlowKind,
        candidates: Vec<Target>,
        directory: Option<DirectoryRef>,
        ctx: FlowContext,
    ) -> Self {
        Self {
            kind,
            step: FlowStep::EntitySelection,
            candidates,
            directory,
            draft: TransactionDraft::new(kind),
            receipt: None,
            ctx,
        }
    }

    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    pub fn step(&self) -> FlowStep {
        self.step
    }

    pub fn candidates(&self) -> &[Target] {
        &self.candidates
    }

    pub fn draft(&self) -> &TransactionDraft {
        &self.draft
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    /// Selects the candidate at `index` and advances to amount entry.
    pub fn select(&mut self, index: usize) -> Result<()> {
        self.expect_step(FlowStep::EntitySelection, "select")?;
        let target = self.candidates.get(index).cloned().ok_or_else(|| {
            FlowError::validation("target", format!("no candidate at position {index}"))
        })?;
        match &target {
            Target::Network(network) => {
                let text = self
                    .localize(MessageKey::SelectedNetwork)
                    .replace("{name}", &network.name);
                self.ctx.narrator.speak(&text, Priority::Normal);
            }
            Target::SavingsPlan(_) => {
                self.narrate(MessageKey::SelectedSavingsPlan, Priority::Normal);
            }
            Target::Recipient(_) => {}
        }
        debug!(kind = %self.kind, target = target.label(), "target selected");
        self.draft.target = Some(target);
        self.step = FlowStep::AmountEntry;
        Ok(())
    }

    /// Selects a candidate by its display label (case-insensitive).
    pub fn select_named(&mut self, label: &str) -> Result<()> {
        let index = self
            .candidates
            .iter()
            .position(|t| t.label().eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| {
                FlowError::validation("target", format!("no candidate named {label:?}"))
            })?;
        self.select(index)
    }

    /// Validates and stores a new transfer recipient, then auto-selects it
    /// and advances. On a validation error nothing changes: the candidate
    /// list is untouched and the flow stays at entity selection.
    pub fn add_recipient(&mut self, name: &str, account: &str, bank: &str) -> Result<()> {
        self.expect_step(FlowStep::EntitySelection, "add-recipient")?;
        let directory = self
            .directory
            .clone()
            .ok_or_else(|| FlowError::validation("target", "this flow has no recipient directory"))?;

        let name = name.trim();
        let account = account.trim();
        let bank = bank.trim();
        if name.is_empty() {
            return Err(FlowError::validation("name", "recipient name is required"));
        }
        if account.len() != 10 || !account.chars().all(|c| c.is_ascii_digit()) {
            return Err(FlowError::validation(
                "account",
                "account number must be exactly 10 digits",
            ));
        }
        if bank.is_empty() {
            return Err(FlowError::validation("bank", "bank is required"));
        }

        let stored = directory.insert(Recipient {
            id: 0,
            name: name.to_string(),
            account: account.to_string(),
            bank: bank.to_string(),
        });
        debug!(name = %stored.name, "recipient added to directory");
        self.candidates.insert(0, Target::Recipient(stored.clone()));
        self.draft.target = Some(Target::Recipient(stored));
        self.step = FlowStep::AmountEntry;
        Ok(())
    }

    /// Optional note (or the savings goal name). Amount-entry step only.
    pub fn set_note(&mut self, note: &str) -> Result<()> {
        self.expect_step(FlowStep::AmountEntry, "note")?;
        let note = note.trim();
        self.draft.note = (!note.is_empty()).then(|| note.to_string());
        Ok(())
    }

    /// Phone number for airtime top-ups. Amount-entry step only.
    pub fn set_phone(&mut self, phone: &str) -> Result<()> {
        self.expect_step(FlowStep::AmountEntry, "phone")?;
        let phone = phone.trim();
        self.draft.phone = (!phone.is_empty()).then(|| phone.to_string());
        Ok(())
    }

    /// Parses the entered amount and advances to confirmation. Rejected
    /// without a state change unless the amount is strictly positive and
    /// the kind-specific details are complete.
    pub fn submit_amount(&mut self, input: &str) -> Result<()> {
        self.expect_step(FlowStep::AmountEntry, "continue")?;
        let amount = Amount::parse(input)?;
        match self.kind {
            FlowKind::Airtime if self.draft.phone.is_none() => {
                return Err(FlowError::validation("phone", "phone number is required"));
            }
            FlowKind::Savings if self.draft.note.is_none() => {
                return Err(FlowError::validation("note", "goal name is required"));
            }
            _ => {}
        }
        self.draft.amount = Some(amount);
        self.step = FlowStep::Confirmation;
        debug!(kind = %self.kind, amount = %amount, "amount accepted");
        self.narrate(MessageKey::ConfirmDetails, Priority::High);
        Ok(())
    }

    /// Review acknowledged; advances to authorization and prompts for the
    /// PIN. No data changes.
    pub fn proceed(&mut self) -> Result<()> {
        self.expect_step(FlowStep::Confirmation, "proceed")?;
        self.step = FlowStep::Authorization;
        self.narrate(MessageKey::EnterPin, Priority::High);
        Ok(())
    }

    /// Authorizes and settles the draft. On a `Success` outcome the flow
    /// emits the success narration and arms the one-shot home redirect;
    /// `Pending`/`Failed` outcomes still produce a receipt, silently. On a
    /// settlement error the flow stays at authorization with the PIN
    /// cleared.
    pub async fn submit_pin(&mut self, pin: &str) -> Result<&Receipt> {
        self.expect_step(FlowStep::Authorization, "submit")?;
        self.draft.pin = Some(Pin::parse(pin)?);

        let outcome = self.ctx.settlement.settle(&self.draft).await;
        self.draft.pin = None;
        let status = outcome?;

        let amount = self
            .draft
            .amount
            .ok_or_else(|| FlowError::validation("amount", "amount missing from draft"))?;
        let details = self.receipt_details()?;
        let receipt = generate_receipt(details, amount, self.draft.fee, status);
        debug!(kind = %self.kind, reference = %receipt.reference, status = ?status, "flow settled");

        self.step = FlowStep::Success;
        self.draft = TransactionDraft::new(self.kind);

        if status == ReceiptStatus::Success {
            self.narrate(self.success_key(), Priority::High);
            let navigator = Arc::clone(&self.ctx.navigator);
            tokio::spawn(async move {
                tokio::time::sleep(HOME_REDIRECT_DELAY).await;
                navigator.navigate_to(HOME_ROUTE);
            });
        }
        Ok(self.receipt.insert(receipt))
    }

    /// Returns to the previous step, clearing only the data captured in
    /// the step being left. Landing back on entity selection also clears
    /// the target, since the user is about to re-select.
    pub fn back(&mut self) -> Result<()> {
        match self.step {
            FlowStep::Authorization => {
                self.draft.pin = None;
                self.step = FlowStep::Confirmation;
            }
            FlowStep::Confirmation => {
                self.step = FlowStep::AmountEntry;
            }
            FlowStep::AmountEntry => {
                self.draft.amount = None;
                self.draft.note = None;
                self.draft.phone = None;
                self.draft.target = None;
                self.step = FlowStep::EntitySelection;
            }
            FlowStep::EntitySelection | FlowStep::Success => {
                return Err(FlowError::StepMismatch {
                    action: "back",
                    step: self.step.name(),
                });
            }
        }
        debug!(step = self.step.name(), "stepped back");
        Ok(())
    }

    /// Abandons the flow from entity selection: clears the draft and hands
    /// control back to the host page.
    pub fn cancel(&mut self) -> Result<()> {
        self.expect_step(FlowStep::EntitySelection, "cancel")?;
        self.draft = TransactionDraft::new(self.kind);
        self.narrate(MessageKey::Cancelled, Priority::High);
        self.ctx.navigator.navigate_to(HOME_ROUTE);
        Ok(())
    }

    fn receipt_details(&self) -> Result<ReceiptDetails> {
        match self.draft.target.clone() {
            Some(Target::Recipient(r)) => Ok(ReceiptDetails::Transfer {
                recipient: r.name,
                account: r.account,
                bank: r.bank,
                note: self.draft.note.clone(),
            }),
            Some(Target::Network(n)) => Ok(ReceiptDetails::Airtime {
                network: n.name,
                phone: self.draft.phone.clone().unwrap_or_default(),
            }),
            Some(Target::SavingsPlan(p)) => Ok(ReceiptDetails::Savings {
                plan: p.name,
                note: self.draft.note.clone(),
            }),
            None => Err(FlowError::validation("target", "no target selected")),
        }
    }

    fn success_key(&self) -> MessageKey {
        match self.kind {
            FlowKind::Transfer => MessageKey::TransferSuccess,
            FlowKind::Airtime => MessageKey::AirtimeSuccess,
            FlowKind::Savings => MessageKey::SavingsSuccess,
        }
    }

    fn localize(&self, key: MessageKey) -> String {
        self.ctx.localizer.localize(key, self.ctx.language)
    }

    fn narrate(&self, key: MessageKey, priority: Priority) {
        let text = self.localize(key);
        self.ctx.narrator.speak(&text, priority);
    }

    fn expect_step(&self, expected: FlowStep, action: &'static str) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(FlowError::StepMismatch {
                action,
                step: self.step.name(),
            })
        }
    }
}
