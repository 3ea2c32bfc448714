#![forbid(unsafe_code)]

pub mod api;
pub mod error;
pub mod form_service;
pub mod login_service;
pub mod result_service;

pub use wellcheck_core::Clock;

pub use api::{ApiClient, ApiConfig, Endpoint, ResponseEnvelope, Transport};
pub use error::{ApiError, FormError, LoginError, ResultError};
pub use form_service::FormService;
pub use login_service::LoginService;
pub use result_service::{ResultService, SurveyApi, TestResult};
