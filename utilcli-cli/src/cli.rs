//! Command line definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "utilcli",
    version,
    about = "Porkbun DNS records, Shlink short URLs and lyrics from the terminal",
    long_about = None
)]
pub struct Cli {
    /// Config file (default: <config dir>/utilcli/config.json)
    #[arg(long, env = "UTILCLI_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "UTILCLI_LOG_LEVEL", global = true)]
    pub log_level: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Do not copy results to the clipboard
    #[arg(long, global = true)]
    pub no_copy: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage DNS records on Porkbun
    #[command(subcommand)]
    Porkbun(PorkbunCommand),
    /// Manage short URLs on Shlink
    #[command(subcommand)]
    Shlink(ShlinkCommand),
    /// Search lyrics and print the one you pick
    Lyrics(LyricsArgs),
}

#[derive(Debug, Subcommand)]
pub enum PorkbunCommand {
    /// Create a record and copy its host name
    CreateRecord {
        /// Subdomain label, or `@` for the zone apex
        host: String,
        /// Record content (default: SERVER_IP from the config)
        #[arg(long)]
        ip: Option<String>,
        #[arg(long = "type", default_value = "A")]
        record_type: String,
        #[arg(long, default_value = "300")]
        ttl: String,
    },
    /// List records of one type
    ListRecord {
        #[arg(long = "type", default_value = "A")]
        record_type: String,
        /// List records of every type
        #[arg(long, conflicts_with = "record_type")]
        all: bool,
    },
    /// Delete exactly one record
    DeleteRecord {
        /// Label (`www`) or full host name (`www.example.com`)
        #[arg(required_unless_present = "id")]
        hostname: Option<String>,
        /// Delete by record id instead
        #[arg(long, conflicts_with = "hostname")]
        id: Option<String>,
        /// Only consider records of this type
        #[arg(long = "type")]
        record_type: Option<String>,
    },
    /// Check the API keys
    Ping,
}

#[derive(Debug, Subcommand)]
pub enum ShlinkCommand {
    /// Shorten a URL and copy the short URL
    CreateShorturl {
        url: String,
        /// Custom short code
        slug: Option<String>,
        /// Short domain to use (default: ALT_DOMAIN from the config)
        alt_domain: Option<String>,
    },
    /// Point a short URL somewhere else
    EditShorturl {
        /// Code, `domain/code` or full short URL
        identifier: String,
        new_url: String,
    },
    /// Delete a short URL
    DeleteShorturl {
        /// Code, `domain/code` or full short URL
        identifier: String,
    },
    /// List short URLs
    ListShorturl {
        #[arg(long)]
        domain: Option<String>,
    },
    /// List the domains on the account
    Domains,
}

#[derive(Debug, Args)]
pub struct LyricsArgs {
    pub keyword: String,
    /// Comma separated sources, e.g. `ln,genius`
    #[arg(value_delimiter = ',')]
    pub providers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("utilcli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn create_record_defaults() {
        let cli = parse(&["porkbun", "create-record", "www"]);
        let Commands::Porkbun(PorkbunCommand::CreateRecord {
            host,
            ip,
            record_type,
            ttl,
        }) = cli.command
        else {
            panic!("wrong command");
        };
        assert_eq!(host, "www");
        assert_eq!(ip, None);
        assert_eq!(record_type, "A");
        assert_eq!(ttl, "300");
        assert!(!cli.json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["shlink", "domains", "--json", "--no-copy"]);
        assert!(cli.json);
        assert!(cli.no_copy);
        assert!(matches!(cli.command, Commands::Shlink(ShlinkCommand::Domains)));
    }

    #[test]
    fn delete_record_needs_host_or_id() {
        assert!(Cli::try_parse_from(["utilcli", "porkbun", "delete-record"]).is_err());
        assert!(
            Cli::try_parse_from(["utilcli", "porkbun", "delete-record", "www", "--id", "1"])
                .is_err()
        );
        let cli = parse(&["porkbun", "delete-record", "--id", "106926652"]);
        assert!(matches!(
            cli.command,
            Commands::Porkbun(PorkbunCommand::DeleteRecord { id: Some(_), hostname: None, .. })
        ));
    }

    #[test]
    fn list_record_all_conflicts_with_type() {
        assert!(
            Cli::try_parse_from(["utilcli", "porkbun", "list-record", "--all", "--type", "MX"])
                .is_err()
        );
        let cli = parse(&["porkbun", "list-record", "--all"]);
        assert!(matches!(
            cli.command,
            Commands::Porkbun(PorkbunCommand::ListRecord { all: true, .. })
        ));
    }

    #[test]
    fn shorturl_optional_positionals() {
        let cli = parse(&["shlink", "create-shorturl", "https://example.com", "ex", "go.example.org"]);
        let Commands::Shlink(ShlinkCommand::CreateShorturl {
            slug, alt_domain, ..
        }) = cli.command
        else {
            panic!("wrong command");
        };
        assert_eq!(slug.as_deref(), Some("ex"));
        assert_eq!(alt_domain.as_deref(), Some("go.example.org"));
    }

    #[test]
    fn lyrics_sources_split_on_comma() {
        let cli = parse(&["lyrics", "yesterday", "ln,genius"]);
        let Commands::Lyrics(args) = cli.command else {
            panic!("wrong command");
        };
        assert_eq!(args.keyword, "yesterday");
        assert_eq!(args.providers, ["ln", "genius"]);

        let cli = parse(&["lyrics", "yesterday"]);
        let Commands::Lyrics(args) = cli.command else {
            panic!("wrong command");
        };
        assert!(args.providers.is_empty());
    }
}
