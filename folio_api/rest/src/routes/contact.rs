use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    routing, Extension, Router,
};
use folio_core_contact_contracts::{ContactService, ContactSubmitError};
use folio_models::{contact::ContactValidationErrors, email_address::EmailAddress};
use tracing::error;

use super::outcome;
use crate::{extractors::contact_form::ContactFormBody, middlewares::client_ip::ClientIp};

pub const SUCCESS_MESSAGE: &str =
    "✅ Thank you for your message! I have received it and will get back to you within 24 hours.";

#[derive(Debug)]
pub struct ContactRouteConfig {
    pub home_url: Arc<str>,
    pub contact_email: EmailAddress,
}

type ContactState<Contact> = (Arc<Contact>, Arc<ContactRouteConfig>);

pub fn router<Contact: ContactService>(
    service: Arc<Contact>,
    config: Arc<ContactRouteConfig>,
) -> Router<()> {
    let method_router = routing::post(submit::<Contact>).fallback(redirect_home::<Contact>);

    Router::new()
        .route("/contact", method_router.clone())
        .route("/contact.php", method_router)
        .with_state((service, config))
}

async fn submit<Contact: ContactService>(
    State((service, config)): State<ContactState<Contact>>,
    client_ip: Option<Extension<ClientIp>>,
    ContactFormBody(submission): ContactFormBody,
) -> Response {
    let client_ip = client_ip.map(|Extension(ClientIp(ip))| ip);

    match service.submit(submission.into(), client_ip).await {
        Ok(()) => outcome(StatusCode::OK, true, SUCCESS_MESSAGE.into()),
        Err(ContactSubmitError::Invalid(errors)) => outcome(
            StatusCode::UNPROCESSABLE_ENTITY,
            false,
            invalid_message(&errors),
        ),
        Err(ContactSubmitError::Send) => outcome(
            StatusCode::INTERNAL_SERVER_ERROR,
            false,
            fallback_message(&config.contact_email),
        ),
        Err(ContactSubmitError::Other(err)) => {
            error!("Failed to process contact form submission: {err:#}");
            outcome(
                StatusCode::INTERNAL_SERVER_ERROR,
                false,
                fallback_message(&config.contact_email),
            )
        }
    }
}

async fn redirect_home<Contact: ContactService>(
    State((_, config)): State<ContactState<Contact>>,
) -> Response {
    (StatusCode::FOUND, [(LOCATION, config.home_url.as_ref())]).into_response()
}

fn invalid_message(errors: &ContactValidationErrors) -> String {
    format!(
        "❌ Please fix the following errors:<br>{}",
        errors.messages().collect::<Vec<_>>().join("<br>")
    )
}

fn fallback_message(contact_email: &EmailAddress) -> String {
    format!(
        "❌ Sorry, there was an error sending your message. Please try again later or contact me directly at {contact_email}"
    )
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request},
    };
    use folio_core_contact_contracts::MockContactService;
    use folio_core_health_contracts::MockHealthService;
    use folio_demo::{CLIENT_IP, INVALID_SUBMISSION, VALID_SUBMISSION};
    use folio_models::contact::ContactSubmission;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{
        tests::{body_json, call, config},
        RestServerConfig, RestServerRealIpConfig,
    };

    const VALID_FORM: &str =
        "name=Jo&email=jo%40x.com&subject=Hi%21&message=This+is+a+test+message.";

    const FALLBACK_MESSAGE: &str = "❌ Sorry, there was an error sending your message. Please try again later or contact me directly at owner@example.com";

    fn post(uri: &str, body: &'static str) -> Request<Body> {
        Request::post(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn call_contact(contact: MockContactService, request: Request<Body>) -> Response {
        call(MockHealthService::new(), contact, config(), request).await
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let contact = MockContactService::new().with_submit(
            VALID_SUBMISSION.clone(),
            Some(CLIENT_IP),
            Ok(()),
        );

        // Act
        let response = call_contact(contact, post("/contact", VALID_FORM)).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"success": true, "message": SUCCESS_MESSAGE})
        );
    }

    #[tokio::test]
    async fn ok_legacy_path() {
        // Arrange
        let contact = MockContactService::new().with_submit(
            VALID_SUBMISSION.clone(),
            Some(CLIENT_IP),
            Ok(()),
        );

        // Act
        let response = call_contact(contact, post("/contact.php", VALID_FORM)).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn ok_multipart() {
        // Arrange
        let contact = MockContactService::new().with_submit(
            VALID_SUBMISSION.clone(),
            Some(CLIENT_IP),
            Ok(()),
        );
        let body = [
            ("name", "Jo"),
            ("email", "jo@x.com"),
            ("subject", "Hi!"),
            ("message", "This is a test message."),
        ]
        .iter()
        .map(|(name, value)| {
            format!("--X\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
        })
        .chain(["--X--\r\n".to_owned()])
        .collect::<String>();
        let request = Request::post("/contact.php")
            .header(CONTENT_TYPE, "multipart/form-data; boundary=X")
            .body(Body::from(body))
            .unwrap();

        // Act
        let response = call_contact(contact, request).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"success": true, "message": SUCCESS_MESSAGE})
        );
    }

    #[tokio::test]
    async fn invalid() {
        // Arrange
        let errors = INVALID_SUBMISSION.validate().unwrap_err();
        let contact = MockContactService::new().with_submit(
            INVALID_SUBMISSION.clone(),
            Some(CLIENT_IP),
            Err(ContactSubmitError::Invalid(errors)),
        );

        // Act
        let response = call_contact(
            contact,
            post("/contact", "name=J&email=bad&subject=&message=short"),
        )
        .await;

        // Assert
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({
                "success": false,
                "message": "❌ Please fix the following errors:<br>\
                    Name must be at least 2 characters.<br>\
                    Please enter a valid email address.<br>\
                    Please enter a subject.<br>\
                    Message must be at least 10 characters.",
            })
        );
    }

    #[tokio::test]
    async fn missing_fields_are_empty() {
        // Arrange
        let submission = ContactSubmission {
            name: "Jo".into(),
            ..Default::default()
        };
        let errors = submission.validate().unwrap_err();
        let contact = MockContactService::new().with_submit(
            submission,
            Some(CLIENT_IP),
            Err(ContactSubmitError::Invalid(errors)),
        );

        // Act
        let response = call_contact(contact, post("/contact", "name=Jo")).await;

        // Assert
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn not_a_form() {
        // Arrange
        let submission = ContactSubmission::default();
        let errors = submission.validate().unwrap_err();
        let contact = MockContactService::new().with_submit(
            submission,
            Some(CLIENT_IP),
            Err(ContactSubmitError::Invalid(errors)),
        );
        let request = Request::post("/contact")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Jo"}"#))
            .unwrap();

        // Act
        let response = call_contact(contact, request).await;

        // Assert
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn send_failed() {
        // Arrange
        let contact = MockContactService::new().with_submit(
            VALID_SUBMISSION.clone(),
            Some(CLIENT_IP),
            Err(ContactSubmitError::Send),
        );

        // Act
        let response = call_contact(contact, post("/contact", VALID_FORM)).await;

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "message": FALLBACK_MESSAGE})
        );
    }

    #[tokio::test]
    async fn internal_error() {
        // Arrange
        let contact = MockContactService::new().with_submit(
            VALID_SUBMISSION.clone(),
            Some(CLIENT_IP),
            Err(anyhow::anyhow!("template error").into()),
        );

        // Act
        let response = call_contact(contact, post("/contact", VALID_FORM)).await;

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"success": false, "message": FALLBACK_MESSAGE})
        );
    }

    #[tokio::test]
    async fn other_methods_redirect_home() {
        for method in ["GET", "PUT", "DELETE"] {
            // Arrange
            let request = Request::builder()
                .method(method)
                .uri("/contact")
                .body(Body::empty())
                .unwrap();

            // Act
            let response = call_contact(MockContactService::new(), request).await;

            // Assert
            assert_eq!(response.status(), StatusCode::FOUND);
            assert_eq!(response.headers()[LOCATION], "index.html");
            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert!(body.is_empty());
        }
    }

    #[tokio::test]
    async fn client_ip_from_proxy() {
        // Arrange
        let real_ip: std::net::IpAddr = [198, 51, 100, 23].into();
        let contact =
            MockContactService::new().with_submit(VALID_SUBMISSION.clone(), Some(real_ip), Ok(()));

        let config = RestServerConfig {
            real_ip_config: Some(Arc::new(RestServerRealIpConfig {
                header: "X-Real-Ip".into(),
                set_from: CLIENT_IP,
            })),
            ..config()
        };

        let request = Request::post("/contact")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("X-Real-Ip", "198.51.100.23")
            .body(Body::from(VALID_FORM))
            .unwrap();

        // Act
        let response = call(MockHealthService::new(), contact, config, request).await;

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
    }
}
