use super::draft::FlowKind;
use super::money::{Amount, Fee};
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distributions::Alphanumeric;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    Success,
    Pending,
    Failed,
}

impl ReceiptStatus {
    pub fn code(self) -> &'static str {
        match self {
            ReceiptStatus::Success => "success",
            ReceiptStatus::Pending => "pending",
            ReceiptStatus::Failed => "failed",
        }
    }
}

/// Kind-specific receipt payload. Each variant's required fields are
/// statically known instead of being optionally present on one bag.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReceiptDetails {
    Transfer {
        recipient: String,
        account: String,
        bank: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Airtime {
        network: String,
        phone: String,
    },
    Savings {
        plan: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

impl ReceiptDetails {
    pub fn kind(&self) -> FlowKind {
        match self {
            ReceiptDetails::Transfer { .. } => FlowKind::Transfer,
            ReceiptDetails::Airtime { .. } => FlowKind::Airtime,
            ReceiptDetails::Savings { .. } => FlowKind::Savings,
        }
    }
}

/// The immutable record of a completed flow. Created exactly once, then
/// only read by the display, export, and read-aloud collaborators.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Receipt {
    pub id: String,
    pub reference: String,
    pub amount: Amount,
    pub fee: Fee,
    pub total: Decimal,
    pub status: ReceiptStatus,
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub details: ReceiptDetails,
}

impl Receipt {
    pub fn kind(&self) -> FlowKind {
        self.details.kind()
    }
}

/// Builds a receipt from the fields the flow validated.
///
/// Identifiers are time-derived with a random suffix: collision-resistant
/// for a session, not cryptographically unique. No validation happens here;
/// that is the flow machine's job before it calls in.
pub fn generate_receipt(
    details: ReceiptDetails,
    amount: Amount,
    fee: Fee,
    status: ReceiptStatus,
) -> Receipt {
    let date = Utc::now();
    let millis = date.timestamp_millis();
    Receipt {
        id: format!("RCP{millis}{}", random_suffix(9)),
        reference: format!("REF{millis}{}", random_suffix(6)),
        total: amount.value() + fee.value(),
        amount,
        fee,
        status,
        date,
        details,
    }
}

fn random_suffix(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect::<String>()
        .to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_details() -> ReceiptDetails {
        ReceiptDetails::Transfer {
            recipient: "Chioma Nwankwo".to_string(),
            account: "9876543210".to_string(),
            bank: "Access Bank".to_string(),
            note: None,
        }
    }

    #[test]
    fn test_total_is_amount_plus_fee() {
        let amount = Amount::new(dec!(5000)).unwrap();
        let fee = Fee::new(dec!(25.5)).unwrap();
        let receipt = generate_receipt(sample_details(), amount, fee, ReceiptStatus::Success);
        assert_eq!(receipt.total, dec!(5025.5));

        let zero_fee = generate_receipt(sample_details(), amount, Fee::ZERO, ReceiptStatus::Success);
        assert_eq!(zero_fee.total, dec!(5000));
    }

    #[test]
    fn test_identifier_shape() {
        let amount = Amount::new(dec!(100)).unwrap();
        let receipt = generate_receipt(sample_details(), amount, Fee::ZERO, ReceiptStatus::Success);
        assert!(receipt.id.starts_with("RCP"));
        assert!(receipt.reference.starts_with("REF"));
        assert!(receipt.id.len() > receipt.reference.len());
    }

    #[test]
    fn test_references_differ_within_session() {
        let amount = Amount::new(dec!(1)).unwrap();
        let a = generate_receipt(sample_details(), amount, Fee::ZERO, ReceiptStatus::Success);
        let b = generate_receipt(sample_details(), amount, Fee::ZERO, ReceiptStatus::Success);
        assert_ne!(a.reference, b.reference);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialized_receipt_is_tagged_and_pin_free() {
        let amount = Amount::new(dec!(100)).unwrap();
        let receipt = generate_receipt(
            ReceiptDetails::Airtime {
                network: "MTN".to_string(),
                phone: "08031234567".to_string(),
            },
            amount,
            Fee::ZERO,
            ReceiptStatus::Success,
        );
        let json = serde_json::to_string(&receipt).unwrap();
        assert!(json.contains("\"type\":\"airtime\""));
        assert!(json.contains("\"network\":\"MTN\""));
        assert!(!json.contains("pin"));
    }
}
