use rust_decimal_macros::dec;
use sautipay::application::flow::{FlowContext, FlowStep, TransactionFlow};
use sautipay::application::narrator::NarrationScheduler;
use sautipay::domain::draft::{Network, Recipient};
use sautipay::domain::language::Language;
use sautipay::domain::receipt::{ReceiptDetails, ReceiptStatus};
use sautipay::infrastructure::in_memory::{
    CapturingSynthesizer, InMemoryRecipientDirectory, RecordingNavigator,
};
use sautipay::infrastructure::localizer::StaticLocalizer;
use sautipay::infrastructure::settlement::FixedDelaySettlement;
use sautipay::interfaces::receipt::render::{read_aloud, render_json};
use std::sync::Arc;

struct Harness {
    synth: CapturingSynthesizer,
    navigator: RecordingNavigator,
    narrator: Arc<NarrationScheduler>,
    ctx: FlowContext,
}

fn harness(language: Language) -> Harness {
    let synth = CapturingSynthesizer::default();
    let navigator = RecordingNavigator::default();
    let narrator = Arc::new(NarrationScheduler::new(Arc::new(synth.clone())));
    narrator.set_language(language);
    let ctx = FlowContext {
        localizer: Arc::new(StaticLocalizer::from_embedded().unwrap()),
        narrator: Arc::clone(&narrator),
        navigator: Arc::new(navigator.clone()),
        settlement: Arc::new(FixedDelaySettlement::instant()),
        language,
    };
    Harness {
        synth,
        navigator,
        narrator,
        ctx,
    }
}

fn seeded_directory() -> Arc<InMemoryRecipientDirectory> {
    Arc::new(InMemoryRecipientDirectory::with_recipients(vec![
        Recipient {
            id: 1,
            name: "Adebayo Okon".to_string(),
            account: "0123456789".to_string(),
            bank: "GTBank".to_string(),
        },
        Recipient {
            id: 2,
            name: "Chioma Nwankwo".to_string(),
            account: "9876543210".to_string(),
            bank: "Access Bank".to_string(),
        },
    ]))
}

#[tokio::test]
async fn test_full_transfer_flow_produces_one_success_receipt() {
    let h = harness(Language::En);
    let mut flow = TransactionFlow::transfer(seeded_directory(), h.ctx);

    flow.select_named("Chioma Nwankwo").unwrap();
    flow.set_note("School fees").unwrap();
    flow.submit_amount("5000").unwrap();
    flow.proceed().unwrap();
    let receipt = flow.submit_pin("1234").await.unwrap().clone();

    assert_eq!(flow.step(), FlowStep::Success);
    assert_eq!(receipt.status, ReceiptStatus::Success);
    assert_eq!(receipt.amount.value(), dec!(5000));
    assert_eq!(receipt.fee.value(), dec!(0));
    assert_eq!(receipt.total, dec!(5000));
    match &receipt.details {
        ReceiptDetails::Transfer {
            recipient,
            account,
            bank,
            note,
        } => {
            assert_eq!(recipient, "Chioma Nwankwo");
            assert_eq!(account, "9876543210");
            assert_eq!(bank, "Access Bank");
            assert_eq!(note.as_deref(), Some("School fees"));
        }
        other => panic!("expected a transfer receipt, got {other:?}"),
    }

    // Confirm, PIN prompt, and success were all narrated, in order.
    let spoken = h.synth.spoken_texts();
    assert!(spoken[0].starts_with("Confirm details"));
    assert!(spoken[1].contains("PIN"));
    assert!(spoken[2].starts_with("Transfer successful"));
}

#[tokio::test]
async fn test_airtime_flow_checks_length_not_secret() {
    // The core validates PIN shape only; "9999" matches no stored secret
    // and still authorizes.
    let h = harness(Language::En);
    let networks = vec![
        Network {
            name: "MTN".to_string(),
        },
        Network {
            name: "Airtel".to_string(),
        },
    ];
    let mut flow = TransactionFlow::airtime(networks, h.ctx);

    flow.select_named("MTN").unwrap();
    flow.set_phone("08031234567").unwrap();
    flow.submit_amount("100").unwrap();
    flow.proceed().unwrap();
    let receipt = flow.submit_pin("9999").await.unwrap().clone();

    assert_eq!(receipt.total, dec!(100));
    match &receipt.details {
        ReceiptDetails::Airtime { network, phone } => {
            assert_eq!(network, "MTN");
            assert_eq!(phone, "08031234567");
        }
        other => panic!("expected an airtime receipt, got {other:?}"),
    }
    assert!(
        h.synth
            .spoken_texts()
            .iter()
            .any(|t| t == "You selected MTN network")
    );
}

#[tokio::test]
async fn test_pin_is_unreachable_after_completion() {
    let h = harness(Language::En);
    let mut flow = TransactionFlow::transfer(seeded_directory(), h.ctx);
    flow.select_named("Chioma Nwankwo").unwrap();
    flow.submit_amount("5000").unwrap();
    flow.proceed().unwrap();
    let receipt = flow.submit_pin("1234").await.unwrap().clone();

    let json = render_json(&receipt).unwrap();
    assert!(!json.contains("1234"));
    assert!(!format!("{:?}", flow.draft()).contains("1234"));

    // Narration never spoke the digits either.
    assert!(h.synth.spoken_texts().iter().all(|t| !t.contains("1234")));
}

#[tokio::test]
async fn test_yoruba_narration_uses_localized_prompts_and_voice() {
    let h = harness(Language::Yo);
    let mut flow = TransactionFlow::transfer(seeded_directory(), h.ctx);
    flow.select_named("Adebayo Okon").unwrap();
    flow.submit_amount("1000").unwrap();

    let utterances = h.synth.utterances();
    assert_eq!(utterances[0].locale, "en-NG");
    assert!(utterances[0].text.starts_with("Jẹ́ kó dájú"));
}

#[tokio::test]
async fn test_read_aloud_queues_summary_behind_announcement() {
    let h = harness(Language::En);
    let mut flow = TransactionFlow::transfer(seeded_directory(), h.ctx.clone());
    flow.select_named("Chioma Nwankwo").unwrap();
    flow.submit_amount("5000").unwrap();
    flow.proceed().unwrap();
    let receipt = flow.submit_pin("1234").await.unwrap().clone();

    read_aloud(
        &receipt,
        h.ctx.localizer.as_ref(),
        &h.narrator,
        Language::En,
    );
    let before = h.synth.spoken_texts();
    assert_eq!(before.last().unwrap(), "Reading your receipt aloud");

    // The summary waits in the pending slot until the announcement ends.
    h.narrator.utterance_finished();
    let after = h.synth.spoken_texts();
    assert!(after.last().unwrap().contains("five thousand"));
}

#[tokio::test]
async fn test_cancel_hands_control_back_to_the_host() {
    let h = harness(Language::En);
    let mut flow = TransactionFlow::transfer(seeded_directory(), h.ctx);
    flow.cancel().unwrap();
    assert_eq!(h.navigator.routes(), vec!["/home".to_string()]);
    assert_eq!(h.synth.spoken_texts(), vec!["Transaction cancelled"]);
}
