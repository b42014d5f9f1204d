//! Porkbun record operations

use serde::de::IgnoredAny;
use serde_json::{Map, Value, json};

use crate::error::{ProviderError, Result};
use crate::providers::common::{
    parse_ip_address, parse_record_type, parse_ttl, relative_to_full_name,
};
use crate::traits::{ProviderErrorMapper, RawApiError};
use crate::types::{CreateRecordRequest, DnsRecord, DnsRecordType, Envelope, RecordTarget};

use super::http::Remote;
use super::{
    CreatedRecord, PORKBUN_PROVIDER, PingResult, PorkbunProvider, PorkbunRecord, RetrievedRecords,
};

impl ProviderErrorMapper for PorkbunProvider {
    fn provider_name(&self) -> &'static str {
        PORKBUN_PROVIDER
    }
}

/// Build a JSON object from `json!` output.
fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

impl PorkbunProvider {
    /// 将 Porkbun 记录转换为 `DnsRecord`
    pub(crate) fn porkbun_record_to_dns_record(&self, record: PorkbunRecord) -> Result<DnsRecord> {
        let record_type = parse_record_type(&record.record_type, self.provider_name())?;

        Ok(DnsRecord {
            id: record.id,
            host: record.name,
            record_type,
            value: record.content,
            ttl: record.ttl,
            notes: record.notes,
        })
    }

    /// Map a retrieve response, skipping records whose type is outside the supported set.
    fn map_records(&self, records: Vec<PorkbunRecord>) -> Vec<DnsRecord> {
        records
            .into_iter()
            .filter_map(|r| {
                let (id, name) = (r.id.clone(), r.name.clone());
                self.porkbun_record_to_dns_record(r)
                    .inspect_err(|e| log::warn!("Skipping record {id} ({name}): {e}"))
                    .ok()
            })
            .collect()
    }

    /// 获取记录（全部，或按 id）
    async fn fetch_records(&self, id: Option<&str>) -> Result<Remote<Vec<DnsRecord>>> {
        let endpoint = match id {
            Some(id) => format!("/dns/retrieve/{}/{}", self.zone, urlencoding::encode(id)),
            None => format!("/dns/retrieve/{}", self.zone),
        };
        let retrieved: Remote<RetrievedRecords> = self.post(&endpoint, Map::new()).await?;
        Ok(retrieved.map(|r| self.map_records(r.records)))
    }

    /// Check the API key pair; the envelope carries the caller's public IP.
    pub async fn ping(&self) -> Result<Envelope<String>> {
        let result: Remote<PingResult> = self.post("/ping", Map::new()).await?;
        Ok(match result {
            Ok(ping) => Envelope::success(ping.your_ip),
            Err(raw) => self.map_failure(raw),
        })
    }

    /// Create a record in the zone.
    ///
    /// Type, IP (or the configured default) and TTL are all validated before the
    /// request is sent. On success the record's host is fully qualified.
    pub async fn create_record(&self, req: &CreateRecordRequest) -> Result<Envelope<DnsRecord>> {
        let record_type = parse_record_type(&req.record_type, self.provider_name())?;
        let ip = req.ip.as_deref().unwrap_or(&self.default_ip);
        let ip = parse_ip_address(ip, self.provider_name())?;
        let ttl = parse_ttl(&req.ttl, self.provider_name())?;

        let host = req.host.trim();
        let full_name = relative_to_full_name(host, &self.zone);
        let name = if host == "@" { "" } else { host };

        let body = fields(json!({
            "name": name,
            "type": record_type.as_str(),
            "content": ip.to_string(),
            "ttl": ttl,
        }));

        let created: Remote<CreatedRecord> = self
            .post(&format!("/dns/create/{}", self.zone), body)
            .await?;

        Ok(match created {
            Ok(created) => {
                log::info!("Created {record_type} record {full_name} ({})", created.id);
                Envelope::success(DnsRecord {
                    id: created.id,
                    host: full_name,
                    record_type,
                    value: ip.to_string(),
                    ttl,
                    notes: None,
                })
            }
            Err(raw) => self.map_failure(RawApiError::new(format!("{} ({full_name})", raw.message))),
        })
    }

    /// List every record in the zone, optionally only those of one type.
    ///
    /// The type filter is applied locally after a single retrieve call.
    pub async fn list_records(&self, record_type: Option<&str>) -> Result<Envelope<Vec<DnsRecord>>> {
        let filter = record_type
            .map(|t| parse_record_type(t, self.provider_name()))
            .transpose()?;

        Ok(match self.fetch_records(None).await? {
            Ok(records) => Envelope::success(filter_by_type(records, filter)),
            Err(raw) => self.map_failure(raw),
        })
    }

    /// Fetch a single record by its provider id.
    pub async fn get_record(&self, id: &str) -> Result<Envelope<DnsRecord>> {
        match self.fetch_records(Some(id)).await? {
            Ok(records) => records
                .into_iter()
                .next()
                .map(Envelope::success)
                .ok_or_else(|| ProviderError::RecordNotFound {
                    provider: self.provider_name().to_string(),
                    record_id: id.to_string(),
                }),
            Err(raw) => Ok(self.map_failure(raw)),
        }
    }

    /// Delete the single record selected by `target`.
    ///
    /// Labels and hostnames are matched against a fresh listing; `record_type`
    /// narrows the match, and an id whose record has another type matches nothing. Exactly one record must match, otherwise
    /// [`ProviderError::AmbiguousOrMissingHost`]. The envelope carries the deleted record.
    pub async fn delete_record(
        &self,
        target: &RecordTarget,
        record_type: Option<&str>,
    ) -> Result<Envelope<DnsRecord>> {
        if target.as_str().is_empty() {
            return Err(self.invalid_parameter("host", "provide a host, hostname or id"));
        }
        let filter = record_type
            .map(|t| parse_record_type(t, self.provider_name()))
            .transpose()?;

        let record = match target {
            RecordTarget::Id(id) => {
                let found = self.get_record(id).await?;
                if !found.is_ok() {
                    return Ok(found);
                }
                let record = match found.into_data() {
                    Some(record) => record,
                    None => {
                        return Err(ProviderError::RecordNotFound {
                            provider: self.provider_name().to_string(),
                            record_id: id.clone(),
                        });
                    }
                };
                if filter.is_some_and(|t| t != record.record_type) {
                    return Err(ProviderError::AmbiguousOrMissingHost {
                        provider: self.provider_name().to_string(),
                        host: id.clone(),
                        matches: 0,
                    });
                }
                record
            }
            RecordTarget::Label(_) | RecordTarget::Hostname(_) => {
                let records = match self.fetch_records(None).await? {
                    Ok(records) => records,
                    Err(raw) => return Ok(self.map_failure(raw)),
                };
                let mut matched: Vec<DnsRecord> = filter_by_type(records, filter)
                    .into_iter()
                    .filter(|r| target.matches(r))
                    .collect();
                if matched.len() != 1 {
                    return Err(ProviderError::AmbiguousOrMissingHost {
                        provider: self.provider_name().to_string(),
                        host: target.as_str().to_string(),
                        matches: matched.len(),
                    });
                }
                matched.remove(0)
            }
        };

        let endpoint = format!(
            "/dns/delete/{}/{}",
            self.zone,
            urlencoding::encode(&record.id)
        );
        let deleted: Remote<IgnoredAny> = self.post(&endpoint, Map::new()).await?;

        Ok(match deleted {
            Ok(_) => {
                log::info!("Deleted {} record {} ({})", record.record_type, record.host, record.id);
                Envelope::success(record)
            }
            Err(raw) => self.map_failure(raw),
        })
    }
}

fn filter_by_type(records: Vec<DnsRecord>, filter: Option<DnsRecordType>) -> Vec<DnsRecord> {
    match filter {
        Some(t) => records.into_iter().filter(|r| r.record_type == t).collect(),
        None => records,
    }
}
