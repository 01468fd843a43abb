use anyhow::Context;
use clap::Parser;
use pigcare_core::clock::SystemClock;
use pigcare_core::provider::{DataProvider, FixtureProvider, MockProvider};
use pigcare_core::{Session, ShellConfig};
use script::Script;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use walkthrough::Runner;

mod render;
mod script;
mod walkthrough;

#[derive(Parser)]
#[command(author, version, about = "Headless walkthrough of the pig-farm monitoring shell")]
struct Args {
    /// Load shell settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Serve farm data from a JSON snapshot instead of the built-in seed
    #[arg(long)]
    fixture: Option<PathBuf>,
    /// Walkthrough script (YAML); defaults to a tour of every screen
    #[arg(long)]
    script: Option<PathBuf>,
    /// Append the transcript to this file
    #[arg(long)]
    transcript: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ShellConfig::load(path)?,
        None => ShellConfig::default(),
    };
    let provider: Arc<dyn DataProvider> = match &args.fixture {
        Some(path) => Arc::new(FixtureProvider::load(path)?),
        None => Arc::new(MockProvider::new()),
    };
    let script = match &args.script {
        Some(path) => Script::load(path)?,
        None => Script::tour(),
    };

    let runtime = TokioBuilder::new_multi_thread()
        .enable_all()
        .build()
        .context("creating runtime for the walkthrough")?;
    let transcript = runtime.block_on(async {
        let (session, effects) = Session::launch(config, provider, Arc::new(SystemClock))?;
        let mut runner = Runner::new(session).echo(true);
        runner.start(effects)?;
        tokio::select! {
            result = runner.run(&script) => result?,
            interrupted = signal::ctrl_c() => {
                interrupted.context("awaiting Ctrl+C")?;
                log::warn!("walkthrough interrupted");
            }
        }
        log::info!("walkthrough ended on {}", runner.session().route().name());
        Ok::<_, anyhow::Error>(runner.finish())
    })?;

    if let Some(path) = args.transcript {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening transcript {}", path.display()))?;
        file.write_all(transcript.join("\n").as_bytes())?;
        file.write_all(b"\n")?;
    }

    Ok(())
}
