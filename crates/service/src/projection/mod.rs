//! Field-level mapping rules between storage entities and views, one
//! `Resource` implementation per entity.

mod answer;
mod option;
mod question;
mod survey_user;

pub use answer::Answers;
pub use option::Options;
pub use question::Questions;
pub use survey_user::SurveyUsers;
