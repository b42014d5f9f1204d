//! `utilcli shlink ...`

use std::io::Write;

use anyhow::Result;
use utilcli_provider::{ShlinkProvider, ShortenRequest};

use super::{Outcome, Output};
use crate::cli::ShlinkCommand;

/// `default_alt_domain` applies to `create-shorturl` when no alt domain is given.
pub async fn run<W: Write>(
    command: ShlinkCommand,
    provider: &ShlinkProvider,
    default_alt_domain: Option<&str>,
    out: &mut Output<W>,
) -> Result<Outcome> {
    match command {
        ShlinkCommand::CreateShorturl {
            url,
            slug,
            alt_domain,
        } => {
            let request = ShortenRequest {
                url,
                slug,
                alt_domain: alt_domain.or_else(|| default_alt_domain.map(str::to_string)),
            };
            let Some(short) = out.envelope(provider.shorten(&request).await?)? else {
                return Ok(Outcome::Failed);
            };
            out.say(&short.short_url)?;
            out.copy(&short.short_url);
        }

        ShlinkCommand::EditShorturl {
            identifier,
            new_url,
        } => {
            let edited = provider.edit_short_url(&identifier, &new_url).await?;
            if out.envelope(edited)?.is_none() {
                return Ok(Outcome::Failed);
            }
            out.say("URL successfully updated")?;
        }

        ShlinkCommand::DeleteShorturl { identifier } => {
            if out
                .envelope(provider.delete_short_url(&identifier).await?)?
                .is_none()
            {
                return Ok(Outcome::Failed);
            }
            out.say("URL successfully deleted")?;
        }

        ShlinkCommand::ListShorturl { domain } => {
            let listed = provider.list_short_urls(domain.as_deref()).await?;
            let Some(urls) = out.envelope(listed)? else {
                return Ok(Outcome::Failed);
            };
            if urls.is_empty() {
                out.say("No short URLs")?;
            }
            for url in &urls {
                out.say(format_args!(
                    "{} -> {} ({} visits)",
                    url.short_url,
                    url.long_url,
                    url.visits.unwrap_or_default()
                ))?;
            }
        }

        ShlinkCommand::Domains => {
            let Some(domains) = out.envelope(provider.get_available_domains().await?)? else {
                return Ok(Outcome::Failed);
            };
            for domain in &domains {
                let marker = if domain == provider.domain() { " (default)" } else { "" };
                out.say(format_args!("{domain}{marker}"))?;
            }
        }
    }

    Ok(Outcome::Done)
}
