use crate::application::narrator::{NarrationScheduler, Priority};
use crate::domain::language::{Language, MessageKey};
use crate::domain::money::format_naira;
use crate::domain::numbers::number_to_words;
use crate::domain::ports::Localize;
use crate::domain::receipt::{Receipt, ReceiptDetails};
use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt::Write;

/// Localized plain-text rendering of a receipt, one `label: value` line
/// per field. Field labels come through the localization collaborator.
pub fn render_text(receipt: &Receipt, localizer: &dyn Localize, language: Language) -> String {
    let label = |key: MessageKey| localizer.localize(key, language);
    let mut out = String::new();
    let _ = writeln!(out, "{}", label(MessageKey::ReceiptTitle));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}: {}", label(MessageKey::LabelReference), receipt.reference);
    let _ = writeln!(
        out,
        "{}: {}",
        label(MessageKey::LabelDate),
        receipt.date.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(
        out,
        "{}: {}",
        label(MessageKey::LabelType),
        receipt.kind().code().to_ascii_uppercase()
    );
    let _ = writeln!(out, "{}: {}", label(MessageKey::LabelAmount), receipt.amount.naira());

    match &receipt.details {
        ReceiptDetails::Transfer {
            recipient,
            account,
            bank,
            note,
        } => {
            let _ = writeln!(out, "{}: {recipient}", label(MessageKey::LabelRecipient));
            let _ = writeln!(out, "{}: {account}", label(MessageKey::LabelAccount));
            let _ = writeln!(out, "{}: {bank}", label(MessageKey::LabelBank));
            if let Some(note) = note {
                let _ = writeln!(out, "{}: {note}", label(MessageKey::LabelNote));
            }
        }
        ReceiptDetails::Airtime { network, phone } => {
            let _ = writeln!(out, "{}: {network}", label(MessageKey::LabelNetwork));
            let _ = writeln!(out, "{}: {phone}", label(MessageKey::LabelPhone));
        }
        ReceiptDetails::Savings { plan, note } => {
            let _ = writeln!(out, "{}: {plan}", label(MessageKey::LabelPlan));
            if let Some(note) = note {
                let _ = writeln!(out, "{}: {note}", label(MessageKey::LabelNote));
            }
        }
    }

    let _ = writeln!(out, "{}: {}", label(MessageKey::LabelFee), receipt.fee.naira());
    let _ = writeln!(out, "{}: {}", label(MessageKey::LabelTotal), format_naira(receipt.total));
    let _ = writeln!(
        out,
        "{}: {}",
        label(MessageKey::LabelStatus),
        receipt.status.code().to_ascii_uppercase()
    );
    out
}

/// Currency for the ear: the grouped figure, followed by the amount in
/// localized words when it is below one million naira.
pub fn spoken_currency(value: Decimal, language: Language) -> String {
    let formatted = format_naira(value);
    match value.trunc().to_u64() {
        Some(whole) if whole < 1_000_000 => {
            format!("{formatted} ({})", number_to_words(whole, language))
        }
        _ => formatted,
    }
}

/// One flowing summary sentence for the read-aloud affordance.
pub fn spoken_summary(receipt: &Receipt, localizer: &dyn Localize, language: Language) -> String {
    let label = |key: MessageKey| localizer.localize(key, language);
    let subject = match &receipt.details {
        ReceiptDetails::Transfer { recipient, .. } => {
            format!("{}: {recipient}", label(MessageKey::LabelRecipient))
        }
        ReceiptDetails::Airtime { network, phone } => {
            format!("{}: {network}, {}: {phone}", label(MessageKey::LabelNetwork), label(MessageKey::LabelPhone))
        }
        ReceiptDetails::Savings { plan, .. } => {
            format!("{}: {plan}", label(MessageKey::LabelPlan))
        }
    };
    format!(
        "{}. {subject}. {}: {}. {}: {}.",
        label(MessageKey::ReceiptTitle),
        label(MessageKey::LabelTotal),
        spoken_currency(receipt.total, language),
        label(MessageKey::LabelStatus),
        receipt.status.code()
    )
}

/// Reads the receipt over the narration channel: a high-priority
/// announcement, then the summary queued behind it.
pub fn read_aloud(
    receipt: &Receipt,
    localizer: &dyn Localize,
    narrator: &NarrationScheduler,
    language: Language,
) {
    let announcement = localizer.localize(MessageKey::ReadingReceipt, language);
    narrator.speak(&announcement, Priority::High);
    narrator.speak(&spoken_summary(receipt, localizer, language), Priority::Normal);
}

/// Session-scoped export: the receipt's public fields as pretty JSON.
pub fn render_json(receipt: &Receipt) -> Result<String> {
    Ok(serde_json::to_string_pretty(receipt)?)
}
