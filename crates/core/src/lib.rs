#![forbid(unsafe_code)]

pub mod model;
pub mod scoring;
pub mod time;

pub use model::{
    Answer, Category, Credentials, CredentialsError, FormId, Question, QuestionType, ResultRecord,
    TestAnswers, UserForm, UserId, UserSession,
};
pub use scoring::{ScoreReport, ScoredCategory, min_score_index, score_test};
pub use time::Clock;
