use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use wellcheck_core::Clock;
use wellcheck_core::model::{TestAnswers, UserForm, UserId};

use crate::api::{ApiClient, Endpoint};
use crate::error::FormError;

/// Retrieves per-user form definitions and submits completed answers.
///
/// Owns the time source so submissions carry a stamp the caller cannot
/// forget; callers never pass timestamps in.
#[derive(Clone)]
pub struct FormService {
    api: Arc<ApiClient>,
    clock: Clock,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormSubmission<'a> {
    submitted_at: DateTime<Utc>,
    answers: &'a TestAnswers,
}

impl FormService {
    #[must_use]
    pub fn new(api: Arc<ApiClient>, clock: Clock) -> Self {
        Self { api, clock }
    }

    /// Fetches the form assigned to `user`.
    ///
    /// The user id rides on the path, `{base}/{path}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `FormError::Api` on gateway failures.
    pub async fn user_form(&self, user: UserId) -> Result<UserForm, FormError> {
        let form = self
            .api
            .get_with_param(Endpoint::UserForm, &format!("/{user}"))
            .await?;
        Ok(form)
    }

    /// Submits a completed answer set as the user's form results.
    ///
    /// # Errors
    ///
    /// Returns `FormError::Api` on gateway failures or error statuses.
    pub async fn submit(&self, user: UserId, answers: &TestAnswers) -> Result<(), FormError> {
        let submission = FormSubmission {
            submitted_at: self.clock.now(),
            answers,
        };

        let envelope = self
            .api
            .post_with_param(Endpoint::FormResults, &format!("/{user}"), &submission)
            .await?;
        debug!(status = %envelope.status, "form results accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellcheck_core::model::Answer;
    use wellcheck_core::time::fixed_now;

    #[test]
    fn submission_serializes_camel_case_with_stamp() {
        let answers = TestAnswers::new(vec![vec![Answer::affirmative(), Answer::negative()]]);
        let submission = FormSubmission {
            submitted_at: fixed_now(),
            answers: &answers,
        };

        let value = serde_json::to_value(&submission).unwrap();

        assert_eq!(value["submittedAt"], "2024-05-06T12:53:20Z");
        assert_eq!(value["answers"]["answers"][0][0]["Bool"], 1);
        assert_eq!(value["answers"]["answers"][0][1]["Bool"], 0);
    }
}
