//! API-facing view shapes.
//!
//! Per resource: `*Create` and `*Update` are input-only, `*Base` carries the
//! primitive fields and `*Extended` adds read-only related data.

pub mod answer;
pub mod option;
pub mod question;
pub mod survey_user;

pub use answer::{AnswerBase, AnswerCreate, AnswerExtended, AnswerUpdate};
pub use option::{OptionBase, OptionCreate, OptionExtended, OptionUpdate};
pub use question::{QuestionBase, QuestionCreate, QuestionExtended, QuestionUpdate};
pub use survey_user::{SurveyUserBase, SurveyUserCreate, SurveyUserExtended, SurveyUserUpdate};

use crate::errors::ServiceError;

/// Views that carry the identifier of their entity.
pub trait Keyed {
    fn id(&self) -> i32;
}

/// Update views take their identifier from the request path.
pub trait UpdateView: Keyed {
    fn set_id(&mut self, id: i32);
}

/// Request-shape checks run before the service is invoked.
pub trait Validate {
    fn validate(&self) -> Result<(), ServiceError>;
}

macro_rules! keyed {
    ($($view:ty),+ $(,)?) => {
        $(impl Keyed for $view {
            fn id(&self) -> i32 { self.id }
        })+
    };
}

macro_rules! update_view {
    ($($view:ty),+ $(,)?) => {
        $(impl UpdateView for $view {
            fn set_id(&mut self, id: i32) { self.id = id; }
        })+
    };
}

keyed!(
    QuestionUpdate, QuestionBase, QuestionExtended,
    OptionUpdate, OptionBase, OptionExtended,
    AnswerUpdate, AnswerBase, AnswerExtended,
    SurveyUserUpdate, SurveyUserBase, SurveyUserExtended,
);

update_view!(QuestionUpdate, OptionUpdate, AnswerUpdate, SurveyUserUpdate);

#[cfg(test)]
mod tests {
    use chrono::{Days, Utc};
    use models::survey_user::Gender;
    use serde_json::json;

    use super::*;

    #[test]
    fn views_use_camel_case_on_the_wire() {
        let view: OptionCreate = serde_json::from_value(json!({ "text": "Yes", "order": 2, "questionId": 5 })).unwrap();
        assert_eq!(view, OptionCreate { text: "Yes".into(), order: 2, question_id: 5 });

        let out = serde_json::to_value(OptionExtended {
            id: 1,
            text: "Yes".into(),
            order: 2,
            question_id: 5,
            question_description: None,
        })
        .unwrap();
        assert_eq!(out["questionId"], 5);
        assert!(out["questionDescription"].is_null());
    }

    #[test]
    fn update_id_may_be_omitted_from_body() {
        let mut view: QuestionUpdate = serde_json::from_value(json!({ "description": "X" })).unwrap();
        assert_eq!(view.id, 0);
        assert!(view.validate().is_ok());
        view.set_id(3);
        assert_eq!(view.id(), 3);
    }

    #[test]
    fn path_id_replaces_body_id() {
        let mut view: OptionUpdate =
            serde_json::from_value(json!({ "id": 9, "text": "Yes", "questionId": 1 })).unwrap();
        view.set_id(-3);
        assert_eq!(view.id(), -3);
        assert!(view.validate().is_ok());
    }

    #[test]
    fn blank_description_is_rejected() {
        let view = QuestionCreate { text: String::new(), description: "   ".into() };
        let err = view.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("description required"));
    }

    #[test]
    fn overlong_option_text_is_rejected() {
        let view = OptionCreate { text: "x".repeat(256), order: 0, question_id: 1 };
        assert!(view.validate().unwrap_err().is_validation());
    }

    #[test]
    fn answer_refs_must_be_positive() {
        assert!(AnswerCreate { user_id: 1, option_id: 1 }.validate().is_ok());
        assert!(AnswerCreate { user_id: 0, option_id: 1 }.validate().is_err());
        assert!(AnswerUpdate { id: 1, user_id: 1, option_id: -2 }.validate().is_err());
    }

    #[test]
    fn survey_user_born_tomorrow_is_rejected() {
        let tomorrow = Utc::now().date_naive().checked_add_days(Days::new(1)).unwrap();
        let view = SurveyUserCreate {
            first_name: "Ana".into(),
            last_name: "Petrova".into(),
            date_of_birth: tomorrow,
            gender: Gender::Other,
            country: "BG".into(),
        };
        assert!(view.validate().unwrap_err().is_validation());
    }

    #[test]
    fn gender_and_date_serialize_plainly() {
        let view: SurveyUserCreate = serde_json::from_value(json!({
            "firstName": "Leo",
            "lastName": "Konstantinovski",
            "dateOfBirth": "1995-03-14",
            "gender": "Male",
            "country": "MK"
        }))
        .unwrap();
        assert_eq!(view.gender, Gender::Male);
        assert!(view.validate().is_ok());
    }
}
