use anyhow::Result;
use clap::Parser;
use quip_core::PromptRunner;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: quip [--debug] [--completion | --notification | PROMPT...]";

#[derive(Parser, Debug)]
#[command(
    name = "quip",
    version,
    about = "Short persona flavor messages for task completion and notification hooks"
)]
struct Cli {
    /// Print diagnostic detail on stderr
    #[arg(long)]
    debug: bool,

    /// Generate a task-completion flavor message
    #[arg(long, conflicts_with = "notification")]
    completion: bool,

    /// Generate a needs-attention flavor message
    #[arg(long, conflicts_with = "completion")]
    notification: bool,

    /// Free-text prompt sent verbatim to the model
    #[arg(value_name = "PROMPT")]
    prompt: Vec<String>,
}

/// Failures are reported as printed lines on stdout and the process exits 0
/// either way; hook harnesses treat any nonzero exit as a hard error.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let runner = PromptRunner::from_env(cli.debug);

    if cli.completion {
        match runner.generate_completion_message().await {
            Ok(message) => println!("{message}"),
            Err(err) => {
                debug!(error = %err, "completion message failed");
                println!("Could not generate a completion message.");
            }
        }
    } else if cli.notification {
        match runner.generate_notification_message().await {
            Ok(message) => println!("{message}"),
            Err(err) => {
                debug!(error = %err, "notification message failed");
                println!(
                    "Could not generate a notification message. Check credentials with --debug."
                );
            }
        }
    } else if !cli.prompt.is_empty() {
        let text = cli.prompt.join(" ");
        match runner.send_prompt(&text).await {
            Ok(reply) => println!("{reply}"),
            Err(err) => {
                debug!(error = %err, "prompt failed");
                println!("No response from the model.");
            }
        }
    } else {
        println!("{USAGE}");
    }

    Ok(())
}

/// Diagnostics go to stderr only; stdout carries nothing but the message or
/// the fixed failure line.
fn init_tracing(debug: bool) {
    let filter = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
