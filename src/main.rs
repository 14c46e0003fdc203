use clap::Parser;
use miette::{IntoDiagnostic, Result, miette};
use sautipay::application::flow::{FlowContext, TransactionFlow};
use sautipay::application::narrator::NarrationScheduler;
use sautipay::domain::draft::{Network, Recipient, SavingsPlan};
use sautipay::domain::language::Language;
use sautipay::domain::ports::{DirectoryRef, SynthesizerRef};
use sautipay::error::FlowError;
use sautipay::infrastructure::console::{SilentSynthesizer, StdoutNavigator, StdoutSynthesizer};
use sautipay::infrastructure::in_memory::InMemoryRecipientDirectory;
use sautipay::infrastructure::localizer::StaticLocalizer;
use sautipay::infrastructure::settlement::FixedDelaySettlement;
use sautipay::interfaces::receipt::render::{render_json, render_text};
use sautipay::interfaces::script::event_reader::{FlowAction, FlowEvent, FlowEventReader};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Drive a voice-guided transaction flow from an event script")]
struct Cli {
    /// Flow-event CSV script with `action, value` columns
    script: PathBuf,

    /// Interface and narration language (en, yo, ig, ha, sw, pcm, tw)
    #[arg(long, default_value = "en")]
    language: String,

    /// Mute narration output
    #[arg(long)]
    quiet: bool,

    /// Print the receipt as JSON instead of localized text
    #[arg(long)]
    json: bool,

    /// Settlement processing pause in milliseconds
    #[arg(long, default_value_t = 800)]
    settle_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let language: Language = cli.language.parse().map_err(|e: String| miette!(e))?;

    let synthesizer: SynthesizerRef = if cli.quiet {
        Arc::new(SilentSynthesizer)
    } else {
        Arc::new(StdoutSynthesizer)
    };
    let narrator = Arc::new(NarrationScheduler::new(synthesizer));
    narrator.set_language(language);

    let ctx = FlowContext {
        localizer: Arc::new(StaticLocalizer::from_embedded().into_diagnostic()?),
        narrator: Arc::clone(&narrator),
        navigator: Arc::new(StdoutNavigator),
        settlement: Arc::new(FixedDelaySettlement::new(Duration::from_millis(cli.settle_ms))),
        language,
    };

    let file = File::open(&cli.script).into_diagnostic()?;
    let reader = FlowEventReader::new(file);
    let mut flow: Option<TransactionFlow> = None;
    for event in reader.events() {
        let event = event.into_diagnostic()?;
        if let Err(e) = apply(&mut flow, event, &ctx).await {
            eprintln!("flow error: {e}");
        }
        // Terminal "speech" finishes as soon as it is printed; let any
        // queued request start before the next user action.
        narrator.utterance_finished();
    }

    if let Some(receipt) = flow.as_ref().and_then(|f| f.receipt()) {
        if cli.json {
            println!("{}", render_json(receipt).into_diagnostic()?);
        } else {
            print!("{}", render_text(receipt, ctx.localizer.as_ref(), language));
        }
    }

    Ok(())
}

async fn apply(
    slot: &mut Option<TransactionFlow>,
    event: FlowEvent,
    ctx: &FlowContext,
) -> sautipay::error::Result<()> {
    if event.action == FlowAction::Flow {
        *slot = Some(start_flow(event.require_value("flow")?, ctx.clone())?);
        return Ok(());
    }
    let flow = slot
        .as_mut()
        .ok_or_else(|| FlowError::validation("flow", "start a flow before other actions"))?;
    match event.action {
        FlowAction::Flow => Ok(()),
        FlowAction::Select => flow.select_named(event.require_value("select")?),
        FlowAction::AddRecipient => {
            let value = event.require_value("add-recipient")?;
            let mut parts = value.splitn(3, '|').map(str::trim);
            let name = parts.next().unwrap_or_default();
            let account = parts.next().unwrap_or_default();
            let bank = parts.next().unwrap_or_default();
            flow.add_recipient(name, account, bank)
        }
        FlowAction::Note => flow.set_note(event.require_value("note")?),
        FlowAction::Phone => flow.set_phone(event.require_value("phone")?),
        FlowAction::Continue => flow.submit_amount(event.require_value("continue")?),
        FlowAction::Proceed => flow.proceed(),
        FlowAction::Pin => flow.submit_pin(event.require_value("pin")?).await.map(|_| ()),
        FlowAction::Back => flow.back(),
        FlowAction::Cancel => flow.cancel(),
    }
}

fn start_flow(kind: &str, ctx: FlowContext) -> sautipay::error::Result<TransactionFlow> {
    match kind {
        "transfer" => Ok(TransactionFlow::transfer(sample_directory(), ctx)),
        "airtime" => Ok(TransactionFlow::airtime(sample_networks(), ctx)),
        "savings" => Ok(TransactionFlow::savings(sample_plans(), ctx)),
        other => Err(FlowError::validation(
            "flow",
            format!("unknown flow kind {other:?}"),
        )),
    }
}

fn sample_directory() -> DirectoryRef {
    Arc::new(InMemoryRecipientDirectory::with_recipients(vec![
        contact(1, "Adebayo Okon", "0123456789", "GTBank"),
        contact(2, "Chioma Nwankwo", "9876543210", "Access Bank"),
        contact(3, "Emeka Okafor", "5555555555", "Zenith Bank"),
        contact(4, "Fatima Bello", "1111222233", "First Bank"),
    ]))
}

fn contact(id: u32, name: &str, account: &str, bank: &str) -> Recipient {
    Recipient {
        id,
        name: name.to_string(),
        account: account.to_string(),
        bank: bank.to_string(),
    }
}

fn sample_networks() -> Vec<Network> {
    ["MTN", "Airtel", "Glo", "9mobile"]
        .into_iter()
        .map(|name| Network {
            name: name.to_string(),
        })
        .collect()
}

fn sample_plans() -> Vec<SavingsPlan> {
    [
        ("Target Savings", "Save towards a specific goal"),
        ("Fixed Savings", "Lock funds for better returns"),
        ("Flexible Savings", "Save and withdraw anytime"),
    ]
    .into_iter()
    .map(|(name, description)| SavingsPlan {
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}
