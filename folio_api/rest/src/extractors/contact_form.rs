use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use tracing::debug;

use crate::models::contact::ApiContactSubmission;

/// The contact form fields, read from either a `multipart/form-data` or an
/// `application/x-www-form-urlencoded` body. A body that cannot be read is
/// treated as an empty form.
#[derive(Debug)]
pub struct ContactFormBody(pub ApiContactSubmission);

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for ContactFormBody {
    type Rejection = Infallible;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let result = if is_multipart(&request) {
            from_multipart(request, state).await
        } else {
            Form::<ApiContactSubmission>::from_request(request, state)
                .await
                .map(|Form(submission)| submission)
                .map_err(Into::into)
        };

        Ok(Self(result.unwrap_or_else(|err| {
            debug!("failed to parse contact form: {err:#}");
            ApiContactSubmission::default()
        })))
    }
}

fn is_multipart(request: &Request) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}

async fn from_multipart<S: Send + Sync>(
    request: Request,
    state: &S,
) -> anyhow::Result<ApiContactSubmission> {
    let mut multipart = Multipart::from_request(request, state).await?;
    let mut submission = ApiContactSubmission::default();

    while let Some(field) = multipart.next_field().await? {
        let target = match field.name() {
            Some("name") => &mut submission.name,
            Some("email") => &mut submission.email,
            Some("subject") => &mut submission.subject,
            Some("message") => &mut submission.message,
            _ => continue,
        };
        *target = field.text().await?;
    }

    Ok(submission)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use pretty_assertions::assert_eq;

    use super::*;

    fn multipart_body(fields: &[(&str, &str)]) -> String {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--X\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str("--X--\r\n");
        body
    }

    async fn extract(content_type: &str, body: String) -> ApiContactSubmission {
        let request = axum::http::Request::post("/contact")
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();
        ContactFormBody::from_request(request, &()).await.unwrap().0
    }

    #[tokio::test]
    async fn multipart() {
        // Arrange
        let body = multipart_body(&[
            ("name", "Jo"),
            ("email", "jo@x.com"),
            ("subject", "Hi!"),
            ("message", "Line one\r\nLine two"),
            ("website", "ignored"),
        ]);

        // Act
        let result = extract("multipart/form-data; boundary=X", body).await;

        // Assert
        assert_eq!(result.name, "Jo");
        assert_eq!(result.email, "jo@x.com");
        assert_eq!(result.subject, "Hi!");
        assert_eq!(result.message, "Line one\r\nLine two");
    }

    #[tokio::test]
    async fn multipart_missing_fields_are_empty() {
        // Act
        let result = extract(
            "multipart/form-data; boundary=X",
            multipart_body(&[("name", "Jo")]),
        )
        .await;

        // Assert
        assert_eq!(result.name, "Jo");
        assert_eq!(result.email, "");
        assert_eq!(result.message, "");
    }

    #[tokio::test]
    async fn urlencoded() {
        // Act
        let result = extract(
            "application/x-www-form-urlencoded",
            "name=Jo&email=jo%40x.com&message=Hello".into(),
        )
        .await;

        // Assert
        assert_eq!(result.name, "Jo");
        assert_eq!(result.email, "jo@x.com");
        assert_eq!(result.subject, "");
        assert_eq!(result.message, "Hello");
    }

    #[tokio::test]
    async fn unreadable_body_is_empty() {
        // Act
        let result = extract("multipart/form-data; boundary=X", "garbage".into()).await;

        // Assert
        assert_eq!(result.name, "");
        assert_eq!(result.email, "");
    }
}
