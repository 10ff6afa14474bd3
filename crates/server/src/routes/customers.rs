use std::sync::Arc;

use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::info;

use models::customer::{validate_age, validate_email, validate_name};
use service::customer::{Customer, CustomerRegistration, CustomerRepository, CustomerService, CustomerUpdate};

use crate::errors::JsonApiError;

#[derive(Clone)]
pub struct ServerState {
    pub customers: CustomerService<dyn CustomerRepository>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customers: CustomerService::new(repo) }
    }
}

#[utoipa::path(
    get, path = "/api/v1/customers", tag = "customers",
    responses(
        (status = 200, description = "All customers", body = [crate::openapi::CustomerDoc]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Customer>>, JsonApiError> {
    let customers = state.customers.get_all_customers().await?;
    info!(count = customers.len(), "list customers");
    Ok(Json(customers))
}

#[utoipa::path(
    get, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer found", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Customer>, JsonApiError> {
    Ok(Json(state.customers.get_customer(id).await?))
}

#[utoipa::path(
    post, path = "/api/v1/customers", tag = "customers",
    request_body = crate::openapi::CustomerRegistrationDoc,
    responses(
        (status = 201, description = "Registered"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Email already taken")
    )
)]
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<CustomerRegistration>,
) -> Result<StatusCode, JsonApiError> {
    validate_name(&input.name)?;
    validate_email(&input.email)?;
    validate_age(input.age)?;

    state.customers.add_customer(input).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    put, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = crate::openapi::CustomerUpdateDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "No data changes found"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Email already taken")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<CustomerUpdate>,
) -> Result<StatusCode, JsonApiError> {
    if let Some(name) = input.name.as_deref() { validate_name(name)?; }
    if let Some(email) = input.email.as_deref() { validate_email(email)?; }
    if let Some(age) = input.age { validate_age(age)?; }

    state.customers.update_customer(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.customers.delete_customer_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
