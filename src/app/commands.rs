use crate::cli::{OutputFormat, UrlKind};
use crate::config::Defaults;
use crate::error::GitUriError;
use crate::source::Source;

pub type Result<T> = std::result::Result<T, CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    GitUri(#[from] GitUriError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Parse every input and render them in the requested format.
///
/// Fails on the first input that does not parse.
pub fn parse(inputs: &[String], format: &OutputFormat, defaults: &Defaults) -> Result<String> {
    let sources = inputs
        .iter()
        .map(|input| Source::parse_with(input, defaults))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let rendered = match format {
        OutputFormat::Simple => render_simple(&sources),
        OutputFormat::Detailed => render_detailed(&sources),
        OutputFormat::Json => serde_json::to_string(&sources)?,
        OutputFormat::Raw => format!("{:#?}", sources),
    };
    Ok(rendered)
}

/// Render the url of a single input.
pub fn url(input: &str, kind: &UrlKind, defaults: &Defaults) -> Result<String> {
    let source = Source::parse_with(input, defaults)?;
    let url = match kind {
        UrlKind::Web => source.web_url(),
        UrlKind::Tarball => source.tarball_url(),
    };
    Ok(url)
}

fn render_simple(sources: &[Source]) -> String {
    sources
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_detailed(sources: &[Source]) -> String {
    let mut buf = String::new();
    for source in sources {
        if !buf.is_empty() {
            buf.push('\n');
        }
        buf.push_str(&format!("· {} - {}", source.uri.repo(), source.provider));
        let indent = " ".repeat(5);
        buf.push_str(&format!("\n{indent}subdir => {}", source.uri.subdir()));
        buf.push_str(&format!("\n{indent}ref => {}", source.uri.reference()));
    }
    buf
}
