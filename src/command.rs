use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::LogLevel;
use indicatif::ProgressBar;
use tracing::info;

use crate::dispatch::Dispatcher;
use crate::settings::{CloudCredential, Settings};

#[derive(Debug)]
pub struct ConfigLogLevel {}

impl LogLevel for ConfigLogLevel {
    fn default() -> Option<clap_verbosity_flag::Level> {
        // default log level comes from the settings file
        let configured = Settings::new().ok().and_then(|settings| settings.verbosity);
        match configured.as_deref() {
            Some("error") => Some(clap_verbosity_flag::Level::Error),
            Some("warn") => Some(clap_verbosity_flag::Level::Warn),
            Some("debug") => Some(clap_verbosity_flag::Level::Debug),
            Some("trace") => Some(clap_verbosity_flag::Level::Trace),
            _ => Some(clap_verbosity_flag::Level::Info),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct OllamaCliArgs {
    /// Enable tracing (generates a trace-timestamp.json file).
    #[arg(long)]
    pub tracing: bool,

    /// Prompt text sent to the selected model.
    #[arg(long)]
    pub prompt: Option<String>,

    /// Model selector. Names containing "-cloud" are served by Ollama Cloud,
    /// everything else by the local instance.
    #[arg(long)]
    pub model: Option<String>,

    /// Copy the generated text to the clipboard.
    #[cfg(feature = "clipboard")]
    #[arg(long)]
    pub copy: bool,

    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity<ConfigLogLevel>,
}

/// CLI shell around the dispatcher: resolves the prompt and model, shows a
/// busy spinner for the duration of the call, prints whatever comes back.
pub struct OllamaCli {
    settings: Settings,
    args: OllamaCliArgs,
    credential: Option<CloudCredential>,
    start: Instant,
}

impl OllamaCli {
    pub fn new(
        settings: Settings,
        args: OllamaCliArgs,
        credential: Option<CloudCredential>,
        start: Option<Instant>,
    ) -> Self {
        Self {
            settings,
            args,
            credential,
            start: start.unwrap_or_else(Instant::now),
        }
    }

    pub fn exec(self) -> Result<()> {
        let model = self
            .args
            .model
            .clone()
            .unwrap_or_else(|| self.settings.default_model.clone());
        let prompt = self.args.prompt.clone().unwrap_or_default();
        info!("dispatching to model {model}");

        let dispatcher = Dispatcher::new(&self.settings, self.credential.clone());

        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Generating...");
        spinner.enable_steady_tick(Duration::from_millis(120));
        let output = dispatcher.dispatch(&prompt, &model);
        spinner.finish_and_clear();
        info!("generated the output in {:?}", self.start.elapsed());

        println!("{output}");

        #[cfg(feature = "clipboard")]
        if self.args.copy {
            match arboard::Clipboard::new()
                .and_then(|mut clipboard| clipboard.set_text(output.clone()))
            {
                Ok(()) => info!("copied output to clipboard"),
                Err(e) => tracing::warn!("clipboard copy failed: {e}"),
            }
        }

        Ok(())
    }
}
