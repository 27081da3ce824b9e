//! Storage entities for the survey domain plus the connection factory.
//!
//! Foreign keys (`option.question_id`, `answer.user_id`, `answer.option_id`)
//! are modelled as SeaORM relations only; the schema does not enforce them.

pub mod errors;
pub mod db;
pub mod question;
pub mod option;
pub mod answer;
pub mod survey_user;

#[cfg(test)]
mod tests;
