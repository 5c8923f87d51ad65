use anyhow::Result;
use clap::Parser;
use ollama_cli::settings::CloudCredential;
use ollama_cli::{OllamaCli, OllamaCliArgs, Settings};
use tracing::info;
use tracing_log::AsTrace;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    use tracing_chrome::ChromeLayerBuilder;
    use tracing_subscriber::prelude::*;

    let start = std::time::Instant::now();

    let args = OllamaCliArgs::parse();
    let settings = Settings::new()?;
    // flag wins over the settings-file verbosity
    let log_level_filter = args.verbose.log_level_filter();

    let _guard = if args.tracing {
        let (chrome_layer, guard) = ChromeLayerBuilder::new().build();
        tracing_subscriber::registry().with(chrome_layer).init();
        Some(guard)
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level_filter.as_trace())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");
        None
    };
    info!(
        "Initialized args, settings, and logging in {:?}",
        start.elapsed()
    );

    // resolved once; absence disables the cloud path for the whole run
    let credential = CloudCredential::resolve(&settings);

    let cli = OllamaCli::new(settings, args, credential, Some(start));
    cli.exec()
}
