//! OpenAPI document served at `/api-docs/openapi.json`.
//!
//! The CRUD handlers are generic, so their operations are assembled here from
//! the view schemas instead of per-handler `#[utoipa::path]` attributes.

use models::survey_user::Gender;
use service::views::*;
use utoipa::openapi::path::{
    Operation, OperationBuilder, ParameterBuilder, ParameterIn, PathItem, PathItemBuilder, PathItemType,
};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::{
    ArrayBuilder, Content, KnownFormat, ObjectBuilder, OpenApi as OpenApiDoc, Ref, RefOr, Required,
    ResponseBuilder, Schema, SchemaFormat, SchemaType,
};
use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::health),
    components(schemas(
        HealthResponse,
        Gender,
        QuestionCreate, QuestionUpdate, QuestionBase, QuestionExtended,
        OptionCreate, OptionUpdate, OptionBase, OptionExtended,
        AnswerCreate, AnswerUpdate, AnswerBase, AnswerExtended,
        SurveyUserCreate, SurveyUserUpdate, SurveyUserBase, SurveyUserExtended,
    )),
    tags((name = "health"), (name = "Questions"), (name = "Options"), (name = "Answers"), (name = "SurveyUser"))
)]
pub struct ApiDoc;

const JSON: &str = "application/json";

fn schema_ref<'s, T: ToSchema<'s>>() -> RefOr<Schema> { RefOr::Ref(Ref::from_schema_name(T::schema().0)) }

fn array_of(items: RefOr<Schema>) -> RefOr<Schema> {
    RefOr::T(Schema::Array(ArrayBuilder::new().items(items).build()))
}

fn primitive(kind: SchemaType, format: Option<KnownFormat>) -> RefOr<Schema> {
    RefOr::T(Schema::Object(
        ObjectBuilder::new().schema_type(kind).format(format.map(SchemaFormat::KnownFormat)).build(),
    ))
}

fn id_param() -> utoipa::openapi::path::Parameter {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .schema(Some(primitive(SchemaType::Integer, Some(KnownFormat::Int32))))
        .build()
}

struct Op {
    builder: OperationBuilder,
}

impl Op {
    fn new(tag: &str, id: String, summary: &str) -> Self {
        Self {
            builder: OperationBuilder::new()
                .tags(Some([tag.to_string()]))
                .operation_id(Some(id))
                .summary(Some(summary)),
        }
    }

    fn with_id(mut self) -> Self {
        self.builder = self.builder.parameter(id_param());
        self
    }

    fn body(mut self, schema: RefOr<Schema>) -> Self {
        let body = RequestBodyBuilder::new().content(JSON, Content::new(schema)).required(Some(Required::True));
        self.builder = self.builder.request_body(Some(body.build()));
        self
    }

    fn returns(mut self, status: &str, description: &str, schema: Option<RefOr<Schema>>) -> Self {
        let mut response = ResponseBuilder::new().description(description);
        if let Some(schema) = schema {
            response = response.content(JSON, Content::new(schema));
        }
        self.builder = self.builder.response(status, response.build());
        self
    }

    fn bad_request(self) -> Self { self.returns("400", "Unparsable body or failed validation", None) }

    fn build(self) -> Operation { self.builder.build() }
}

/// Collection and item paths for one resource.
fn resource_paths<'s, C, U, B, E>(tag: &str, created: RefOr<Schema>) -> [(String, PathItem); 2]
where
    C: ToSchema<'s>,
    U: ToSchema<'s>,
    B: ToSchema<'s>,
    E: ToSchema<'s>,
{
    let list = Op::new(tag, format!("list{tag}"), "List all")
        .returns("200", "Base views", Some(array_of(schema_ref::<B>())))
        .returns("204", "No rows", None)
        .build();
    let create = Op::new(tag, format!("create{tag}"), "Create")
        .body(schema_ref::<C>())
        .returns("201", "Created; Location header points at the new row", Some(created))
        .bad_request()
        .returns("409", "Row was not persisted", None)
        .build();
    let get = Op::new(tag, format!("get{tag}ById"), "Get by id")
        .with_id()
        .returns("200", "Extended view", Some(schema_ref::<E>()))
        .returns("204", "No row with this id", None)
        .build();
    let update = Op::new(tag, format!("update{tag}"), "Update; the path id overrides the body id")
        .with_id()
        .body(schema_ref::<U>())
        .returns("200", "Updated Base view", Some(schema_ref::<B>()))
        .returns("204", "No row with this id", None)
        .bad_request()
        .build();
    let delete = Op::new(tag, format!("delete{tag}"), "Delete")
        .with_id()
        .returns("200", "Whether a row was removed", Some(primitive(SchemaType::Boolean, None)))
        .build();

    [
        (
            format!("/api/{tag}"),
            PathItemBuilder::new().operation(PathItemType::Get, list).operation(PathItemType::Post, create).build(),
        ),
        (
            format!("/api/{tag}/{{id}}"),
            PathItemBuilder::new()
                .operation(PathItemType::Get, get)
                .operation(PathItemType::Put, update)
                .operation(PathItemType::Delete, delete)
                .build(),
        ),
    ]
}

fn lookup_path<'s, E: ToSchema<'s>>(tag: &str, path: &str, id: &str, summary: &str) -> (String, PathItem) {
    let op = Op::new(tag, id.to_string(), summary)
        .with_id()
        .returns("200", "Extended views, possibly empty", Some(array_of(schema_ref::<E>())))
        .build();
    (path.to_string(), PathItemBuilder::new().operation(PathItemType::Get, op).build())
}

pub fn api_doc() -> OpenApiDoc {
    let mut doc = ApiDoc::openapi();
    let id_body = || primitive(SchemaType::Integer, Some(KnownFormat::Int32));

    let paths = resource_paths::<QuestionCreate, QuestionUpdate, QuestionBase, QuestionExtended>("Questions", id_body())
        .into_iter()
        .chain(resource_paths::<OptionCreate, OptionUpdate, OptionBase, OptionExtended>("Options", id_body()))
        .chain(resource_paths::<AnswerCreate, AnswerUpdate, AnswerBase, AnswerExtended>(
            "Answers",
            schema_ref::<AnswerBase>(),
        ))
        .chain(resource_paths::<SurveyUserCreate, SurveyUserUpdate, SurveyUserBase, SurveyUserExtended>(
            "SurveyUser",
            schema_ref::<SurveyUserBase>(),
        ))
        .chain([
            lookup_path::<OptionExtended>("Options", "/api/Options/question/{id}", "getOptionsByQuestionId", "Options of one question"),
            lookup_path::<AnswerExtended>("Answers", "/api/Answers/user/{id}", "getAnswersByUserId", "Answers of one survey user"),
        ]);
    doc.paths.paths.extend(paths);
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = api_doc();
        for path in [
            "/health",
            "/api/Questions",
            "/api/Questions/{id}",
            "/api/Options",
            "/api/Options/{id}",
            "/api/Options/question/{id}",
            "/api/Answers",
            "/api/Answers/{id}",
            "/api/Answers/user/{id}",
            "/api/SurveyUser",
            "/api/SurveyUser/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn view_schemas_are_registered() {
        let doc = api_doc();
        let schemas = doc.components.map(|c| c.schemas).unwrap_or_default();
        assert!(schemas.contains_key("QuestionExtended"));
        assert!(schemas.contains_key("SurveyUserBase"));
        assert!(schemas.contains_key("Gender"));
    }
}
