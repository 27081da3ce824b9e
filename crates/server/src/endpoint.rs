//! HTTP binding of each survey resource.

use serde::Serialize;
use service::views::{AnswerBase, OptionBase, QuestionBase, SurveyUserBase};
use service::{Answers, Options, Questions, Resource, SurveyUsers};

/// Route segment under `/api` and the body returned by a successful POST.
pub trait Endpoint: Resource {
    const PATH: &'static str;

    type Created: Serialize + Send + 'static;

    fn created_body(base: Self::Base) -> Self::Created;
}

impl Endpoint for Questions {
    const PATH: &'static str = "Questions";
    type Created = i32;

    fn created_body(base: QuestionBase) -> i32 { base.id }
}

impl Endpoint for Options {
    const PATH: &'static str = "Options";
    type Created = i32;

    fn created_body(base: OptionBase) -> i32 { base.id }
}

impl Endpoint for Answers {
    const PATH: &'static str = "Answers";
    type Created = AnswerBase;

    fn created_body(base: AnswerBase) -> AnswerBase { base }
}

impl Endpoint for SurveyUsers {
    const PATH: &'static str = "SurveyUser";
    type Created = SurveyUserBase;

    fn created_body(base: SurveyUserBase) -> SurveyUserBase { base }
}

pub fn collection_path<R: Endpoint>() -> String { format!("/api/{}", R::PATH) }

pub fn item_path<R: Endpoint>(id: i32) -> String { format!("/api/{}/{}", R::PATH, id) }
