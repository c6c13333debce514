use clap::Parser;

#[derive(Parser)]
#[command(name = "fbhub", about = "Feedback Hub — track feedback given and received")]
struct Cli {
    /// Write debug logs to /tmp/fbhub-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Start with an empty store instead of the demonstration records.
    #[arg(long)]
    empty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/fbhub-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("fbhub debug log started — tail -f /tmp/fbhub-debug.log");
    }

    fbhub_tui::run(cli.empty)
}
