mod answer;
mod category;
mod form;
mod ids;
mod question;
mod result;
mod user;

pub use answer::{Answer, TestAnswers};
pub use category::Category;
pub use form::UserForm;
pub use ids::{FormId, ParseIdError, UserId};
pub use question::{Question, QuestionType};
pub use result::ResultRecord;
pub use user::{Credentials, CredentialsError, UserSession};
