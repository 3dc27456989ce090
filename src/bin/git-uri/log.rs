use std::env::{self, VarError};
use std::io;

use tracing_subscriber::{FmtSubscriber, filter::EnvFilter};

const LOG_ENV: &str = "GIT_URI_LOG";

/// Configuration of logging, only active when `GIT_URI_LOG` is set.
///
/// A filter that does not parse is an error rather than silence.
pub(crate) fn init() -> io::Result<()> {
    let directives = match env::var(LOG_ENV) {
        Ok(directives) => directives,
        Err(VarError::NotPresent) => return Ok(()),
        Err(err @ VarError::NotUnicode(_)) => {
            return Err(io::Error::other(format!("Invalid {LOG_ENV}: {err}")));
        }
    };
    let env_filter = EnvFilter::try_new(&directives).map_err(|err| {
        io::Error::other(format!("Invalid {LOG_ENV} filter '{directives}': {err}"))
    })?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(env::var_os("NO_COLOR").is_none())
        .with_line_number(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(io::Error::other)
}
