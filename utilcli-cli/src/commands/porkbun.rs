//! `utilcli porkbun ...`

use std::io::Write;

use anyhow::Result;
use utilcli_provider::{CreateRecordRequest, PorkbunProvider, RecordTarget};

use super::{Outcome, Output};
use crate::cli::PorkbunCommand;

pub async fn run<W: Write>(
    command: PorkbunCommand,
    provider: &PorkbunProvider,
    out: &mut Output<W>,
) -> Result<Outcome> {
    match command {
        PorkbunCommand::CreateRecord {
            host,
            ip,
            record_type,
            ttl,
        } => {
            let request = CreateRecordRequest {
                host,
                ip,
                record_type,
                ttl,
            };
            let Some(record) = out.envelope(provider.create_record(&request).await?)? else {
                return Ok(Outcome::Failed);
            };
            out.say(format_args!("Record successfully created ({})", record.host))?;
            out.copy(&record.host);
        }

        PorkbunCommand::ListRecord { record_type, all } => {
            let filter = (!all).then_some(record_type.as_str());
            let Some(records) = out.envelope(provider.list_records(filter).await?)? else {
                return Ok(Outcome::Failed);
            };
            if records.is_empty() {
                out.say(format_args!("No records in {}", provider.zone()))?;
            }
            for record in &records {
                out.say(format_args!("{record}\n"))?;
            }
        }

        PorkbunCommand::DeleteRecord {
            hostname,
            id,
            record_type,
        } => {
            let target = match (id, hostname) {
                (Some(id), _) => RecordTarget::Id(id),
                (None, Some(hostname)) => RecordTarget::from_input(&hostname),
                (None, None) => anyhow::bail!("Provide a hostname or --id"),
            };
            let deleted = provider
                .delete_record(&target, record_type.as_deref())
                .await?;
            let Some(record) = out.envelope(deleted)? else {
                return Ok(Outcome::Failed);
            };
            out.say(format_args!("Record successfully deleted ({})", record.host))?;
        }

        PorkbunCommand::Ping => {
            let Some(ip) = out.envelope(provider.ping().await?)? else {
                return Ok(Outcome::Failed);
            };
            out.say(format_args!("API keys OK, your IP is {ip}"))?;
        }
    }

    Ok(Outcome::Done)
}
