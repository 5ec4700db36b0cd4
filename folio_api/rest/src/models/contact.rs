use folio_models::contact::ContactSubmission;
use serde::{Deserialize, Serialize};

/// The fields of the contact form. Fields missing from the request are empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiContactResponse {
    pub success: bool,
    /// Shown to the visitor as is. May contain `<br>` line breaks.
    pub message: String,
}
