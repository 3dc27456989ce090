use clap::Parser;
use color_eyre::eyre;
use git_uri::cli::CliArgs;

mod log;

fn main() -> eyre::Result<()> {
    let args = CliArgs::parse();

    if std::env::var("NO_COLOR").is_err() {
        color_eyre::install()?;
    } else {
        color_eyre::config::HookBuilder::new()
            .theme(color_eyre::config::Theme::new())
            .install()?;
    }

    log::init()?;
    tracing::debug!("Cli args: {args:?}");

    git_uri::app::run(args)?;

    Ok(())
}
