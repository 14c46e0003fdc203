use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the assistant can display and speak.
///
/// Narration falls back to a regional English voice where no dedicated
/// synthesis voice exists for the language.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    /// Yoruba
    Yo,
    /// Igbo
    Ig,
    /// Hausa
    Ha,
    /// Swahili
    Sw,
    /// Nigerian Pidgin
    Pcm,
    /// Twi
    Tw,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::En,
        Language::Yo,
        Language::Ig,
        Language::Ha,
        Language::Sw,
        Language::Pcm,
        Language::Tw,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Yo => "yo",
            Language::Ig => "ig",
            Language::Ha => "ha",
            Language::Sw => "sw",
            Language::Pcm => "pcm",
            Language::Tw => "tw",
        }
    }

    /// BCP-47 locale used to pick a synthesis voice.
    pub fn voice_locale(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Yo | Language::Ig | Language::Ha | Language::Pcm => "en-NG",
            Language::Sw => "sw-KE",
            Language::Tw => "ak-GH",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "yo" => Ok(Language::Yo),
            "ig" => Ok(Language::Ig),
            "ha" => Ok(Language::Ha),
            "sw" => Ok(Language::Sw),
            "pcm" => Ok(Language::Pcm),
            "tw" => Ok(Language::Tw),
            other => Err(format!("unknown language code: {other:?}")),
        }
    }
}

/// Canonical namespace for every localized prompt and label the core asks
/// the localization collaborator for.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum MessageKey {
    SelectedNetwork,
    SelectedSavingsPlan,
    ConfirmDetails,
    EnterPin,
    TransferSuccess,
    AirtimeSuccess,
    SavingsSuccess,
    Cancelled,
    ReadingReceipt,
    ReceiptTitle,
    LabelReference,
    LabelDate,
    LabelType,
    LabelAmount,
    LabelRecipient,
    LabelAccount,
    LabelBank,
    LabelNetwork,
    LabelPhone,
    LabelPlan,
    LabelNote,
    LabelFee,
    LabelTotal,
    LabelStatus,
}

impl MessageKey {
    pub fn name(self) -> &'static str {
        match self {
            MessageKey::SelectedNetwork => "selected_network",
            MessageKey::SelectedSavingsPlan => "selected_savings_plan",
            MessageKey::ConfirmDetails => "confirm_details",
            MessageKey::EnterPin => "enter_pin",
            MessageKey::TransferSuccess => "transfer_success",
            MessageKey::AirtimeSuccess => "airtime_success",
            MessageKey::SavingsSuccess => "savings_success",
            MessageKey::Cancelled => "cancelled",
            MessageKey::ReadingReceipt => "reading_receipt",
            MessageKey::ReceiptTitle => "receipt_title",
            MessageKey::LabelReference => "label_reference",
            MessageKey::LabelDate => "label_date",
            MessageKey::LabelType => "label_type",
            MessageKey::LabelAmount => "label_amount",
            MessageKey::LabelRecipient => "label_recipient",
            MessageKey::LabelAccount => "label_account",
            MessageKey::LabelBank => "label_bank",
            MessageKey::LabelNetwork => "label_network",
            MessageKey::LabelPhone => "label_phone",
            MessageKey::LabelPlan => "label_plan",
            MessageKey::LabelNote => "label_note",
            MessageKey::LabelFee => "label_fee",
            MessageKey::LabelTotal => "label_total",
            MessageKey::LabelStatus => "label_status",
        }
    }
}
