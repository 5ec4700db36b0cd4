use std::future::Future;

use folio_models::contact_log::ContactLogRecord;

/// Append-only storage for contact form submissions.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactLogRepository: Send + Sync + 'static {
    fn append(&self, record: &ContactLogRecord)
        -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// `None` disables the log.
impl<T: ContactLogRepository> ContactLogRepository for Option<T> {
    async fn append(&self, record: &ContactLogRecord) -> anyhow::Result<()> {
        match self {
            Some(repo) => repo.append(record).await,
            None => Ok(()),
        }
    }
}

#[cfg(feature = "mock")]
impl MockContactLogRepository {
    pub fn with_append(mut self, record: ContactLogRecord) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }
}
