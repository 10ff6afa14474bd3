use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct CustomerDoc {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
    /// `MALE` or `FEMALE`
    pub gender: String,
}

#[derive(ToSchema)]
pub struct CustomerRegistrationDoc {
    pub name: String,
    pub email: String,
    pub age: i32,
    /// `MALE` or `FEMALE`
    pub gender: String,
}

#[derive(ToSchema)]
pub struct CustomerUpdateDoc {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::register,
        crate::routes::customers::update,
        crate::routes::customers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerDoc,
            CustomerRegistrationDoc,
            CustomerUpdateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers")
    )
)]
pub struct ApiDoc;
