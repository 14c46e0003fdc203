use crate::error::{FlowError, Result};
use serde::Deserialize;
use std::io::Read;

/// One scripted user action.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "kebab-case")]
pub enum FlowAction {
    /// Start a flow; value is `transfer`, `airtime`, or `savings`.
    Flow,
    /// Pick a candidate by display label.
    Select,
    /// Value is `name|account|bank`.
    AddRecipient,
    Note,
    Phone,
    /// Value is the amount string; advances to confirmation.
    Continue,
    Proceed,
    Pin,
    Back,
    Cancel,
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct FlowEvent {
    pub action: FlowAction,
    pub value: Option<String>,
}

impl FlowEvent {
    /// The event's value, or a field-level error naming the action.
    pub fn require_value(&self, action: &'static str) -> Result<&str> {
        self.value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| FlowError::validation(action, "this action needs a value"))
    }
}

/// Reads flow events from a CSV source with `action, value` columns.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record
/// lengths, and yields events lazily.
pub struct FlowEventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> FlowEventReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn events(self) -> impl Iterator<Item = Result<FlowEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(FlowError::from))
    }
}
