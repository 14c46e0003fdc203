use crate::domain::draft::TransactionDraft;
use crate::domain::ports::Settle;
use crate::domain::receipt::ReceiptStatus;
use crate::error::SettlementError;
use async_trait::async_trait;
use std::time::Duration;

/// Simulated settlement: resolves to `Success` after a fixed processing
/// pause. Swapping in a real backend is a matter of implementing `Settle`;
/// the flow machine's transitions don't change.
pub struct FixedDelaySettlement {
    delay: Duration,
}

impl FixedDelaySettlement {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No processing pause; handy in tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl Settle for FixedDelaySettlement {
    async fn settle(&self, _draft: &TransactionDraft) -> Result<ReceiptStatus, SettlementError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(ReceiptStatus::Success)
    }
}
