use super::money::{Amount, Fee};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three guided flows sharing one step sequence.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    Transfer,
    Airtime,
    Savings,
}

impl FlowKind {
    pub fn code(self) -> &'static str {
        match self {
            FlowKind::Transfer => "transfer",
            FlowKind::Airtime => "airtime",
            FlowKind::Savings => "savings",
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A saved transfer recipient. Directory inserts go through the flow's
/// add-recipient validation, so a stored account number is always 10 digits.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Recipient {
    pub id: u32,
    pub name: String,
    pub account: String,
    pub bank: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Network {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct SavingsPlan {
    pub name: String,
    pub description: String,
}

/// What step one of a flow selects: a transfer recipient, an airtime
/// network, or a savings plan.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub enum Target {
    Recipient(Recipient),
    Network(Network),
    SavingsPlan(SavingsPlan),
}

impl Target {
    /// The display label candidates are matched against.
    pub fn label(&self) -> &str {
        match self {
            Target::Recipient(r) => &r.name,
            Target::Network(n) => &n.name,
            Target::SavingsPlan(p) => &p.name,
        }
    }
}

/// A 4-digit transaction PIN.
///
/// The digits are masked in `Debug` output so the PIN cannot leak through
/// logs or error messages; there is no accessor returning the raw digits.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    pub fn parse(input: &str) -> Result<Self, crate::error::FlowError> {
        let trimmed = input.trim();
        if trimmed.len() == 4 && trimmed.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(crate::error::FlowError::validation(
                "pin",
                "PIN must be exactly 4 digits",
            ))
        }
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// The mutable in-progress data for one flow instance.
///
/// Created when the flow starts, converted into a `Receipt` on completion
/// or cleared on cancellation. The PIN is only reachable inside the crate
/// and is dropped as soon as the authorization step resolves.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: FlowKind,
    pub target: Option<Target>,
    pub amount: Option<Amount>,
    pub note: Option<String>,
    pub phone: Option<String>,
    pub fee: Fee,
    pub(crate) pin: Option<Pin>,
}

impl TransactionDraft {
    pub fn new(kind: FlowKind) -> Self {
        Self {
            kind,
            target: None,
            amount: None,
            note: None,
            phone: None,
            fee: Fee::ZERO,
            pin: None,
        }
    }
}
