pub mod submission;
pub mod template;

pub use submission::{SubmissionRecord, SurveySubmission};
pub use template::{SurveyTemplate, TemplateSummary};
