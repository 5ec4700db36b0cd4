use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{anyhow, Context};
use folio_models::contact_log::ContactLogRecord;
use folio_persistence_contracts::ContactLogRepository;
use tokio::{fs::OpenOptions, io::AsyncWriteExt, sync::Mutex};
use tracing::info;

pub const HEADER: [&str; 7] = [
    "Timestamp",
    "IP Address",
    "Name",
    "Email",
    "Subject",
    "Message Preview",
    "Status",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Contact log stored as a CSV file. The file is created with a header row on
/// the first append and only ever appended to afterwards.
#[derive(Debug, Clone)]
pub struct CsvContactLogRepository {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl CsvContactLogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Default::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn encode(record: &ContactLogRecord, with_header: bool) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    if with_header {
        writer.write_record(HEADER)?;
    }

    let message = &record.message;
    writer.write_record([
        record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        record
            .client_ip
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "unknown".into()),
        message.author.name.clone().into_inner(),
        message.author.email.to_string(),
        message.subject.clone().into_inner(),
        record.message_preview(),
        record.status.as_str().into(),
    ])?;

    writer
        .into_inner()
        .map_err(|err| anyhow!("Failed to encode contact log record: {}", err.error()))
}

impl ContactLogRepository for CsvContactLogRepository {
    async fn append(&self, record: &ContactLogRecord) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;

        let exists = tokio::fs::try_exists(&*self.path)
            .await
            .with_context(|| format!("Failed to access {}", self.path.display()))?;
        if !exists {
            info!(path = %self.path.display(), "creating contact log");
        }

        let data = encode(record, !exists)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&*self.path)
            .await
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        file.write_all(&data).await?;
        file.flush().await?;

        Ok(())
    }
}
