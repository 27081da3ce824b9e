//! Resource lifecycle service layer for the survey domain.
//! - One generic `ResourceService` drives all four resources.
//! - `projection` holds the per-entity view mapping rules.
//! - Absence is a value (`None`, empty `Vec`); failures are `ServiceError`.

pub mod errors;
#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;
pub mod projection;
pub mod resource;
pub mod resource_service;
#[cfg(test)]
pub mod test_support;
pub mod views;

pub use projection::{Answers, Options, Questions, SurveyUsers};
pub use resource::Resource;
pub use resource_service::ResourceService;

pub type QuestionService = ResourceService<Questions>;
pub type OptionService = ResourceService<Options>;
pub type AnswerService = ResourceService<Answers>;
pub type SurveyUserService = ResourceService<SurveyUsers>;
