//! `utilcli lyrics <keyword> [sources]`

use std::io::Write;

use anyhow::Result;
use utilcli_provider::LyricsProvider;

use super::{Outcome, Output};
use crate::cli::LyricsArgs;
use crate::util::Chooser;

/// Search, let the user pick a result, then print its lyrics.
///
/// In JSON mode only the search envelope is printed; there is no menu.
pub async fn run<W: Write>(
    args: LyricsArgs,
    provider: &LyricsProvider,
    out: &mut Output<W>,
    chooser: &mut dyn Chooser,
) -> Result<Outcome> {
    let sources = (!args.providers.is_empty()).then_some(args.providers.as_slice());
    let Some(results) = out.envelope(provider.search_lyrics(&args.keyword, sources).await?)?
    else {
        return Ok(Outcome::Failed);
    };
    if out.is_json() {
        return Ok(Outcome::Done);
    }
    if results.is_empty() {
        out.say(format_args!("No lyrics found for \"{}\"", args.keyword))?;
        return Ok(Outcome::Done);
    }

    let menu: Vec<String> = results
        .iter()
        .map(|r| format!("{} {}", r.artist, r.title))
        .collect();
    let Some(picked) = chooser.choose(&menu)? else {
        return Ok(Outcome::Done);
    };
    let Some(result) = results.get(picked) else {
        anyhow::bail!("No result #{}", picked + 1);
    };

    tracing::info!(
        "Fetching lyrics #{} ({}) from {}",
        result.body.index(),
        result.title,
        result.provider_name
    );
    let Some(lyrics) = out.envelope(result.body.fetch().await?)? else {
        return Ok(Outcome::Failed);
    };
    out.say(lyrics)?;
    Ok(Outcome::Done)
}
