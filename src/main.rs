use anyhow::Context;
use fs_explorer::config::{Args, Config};
use fs_explorer::env::Environment;
use fs_explorer::{EditorInput, LineInput, OsFilesystem, ReaderInput, Session};
use std::io::{self, IsTerminal};
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args: Args = argh::from_env();
    let config = Config::from_args(args, io::stdin().is_terminal());

    let env = Environment::new(Box::new(OsFilesystem), &config.start)
        .with_context(|| format!("can't start in {}", config.start.display()))?;

    let mut input: Box<dyn LineInput> = if config.interactive {
        Box::new(EditorInput::new(config.history).context("can't set up line editor")?)
    } else {
        Box::new(ReaderInput::new(io::stdin().lock()))
    };

    let mut session = Session::new(env);
    let ending = session.run(input.as_mut(), &mut io::stdout().lock())?;
    info!(?ending, location = %session.location().display(), "session over");
    Ok(())
}
