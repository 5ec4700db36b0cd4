use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_core_health_impl::HealthFeatureServiceImpl;
use folio_email_impl::{template::TemplateEmailServiceImpl, EmailServiceImpl};
use folio_persistence_csv::CsvContactLogRepository;
use folio_shared_impl::time::TimeServiceImpl;
use folio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<HealthFeature, ContactFeature>;

// Persistence
pub type ContactLog = Option<CsvContactLogRepository>;

// Email
pub type Email = EmailServiceImpl;
pub type TemplateEmail = TemplateEmailServiceImpl<Email, Template>;

// Templates
pub type Template = TemplateServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Time, TemplateEmail, ContactLog>;
pub type HealthFeature = HealthFeatureServiceImpl<Time, Email>;
