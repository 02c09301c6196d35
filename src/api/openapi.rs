// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! OpenAPI document assembled from the handler annotations.

use axum::Router;
use utoipa::OpenApi;

use super::{company, employee};
use crate::{
    dto::{
        CompanyPayload, CompanyResponse, EditEmployeePayload, EmployeePayload, EmployeeResponse
    },
    error::{ErrorEnvelope, ErrorMessage, FieldMessage}
};

/// Path of the served OpenAPI JSON document.
pub const OPENAPI_JSON: &str = "/api/doc.json";

/// OpenAPI document of the company registry API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Company registry",
        version = "1.0.0",
        description = "CRUD API for companies and their employees"
    ),
    paths(
        company::list_companies,
        company::show_company,
        company::create_company,
        company::update_company,
        company::delete_company,
        employee::list_employees,
        employee::show_employee,
        employee::create_employee,
        employee::update_employee,
        employee::delete_employee
    ),
    components(schemas(
        CompanyPayload,
        CompanyResponse,
        EmployeePayload,
        EditEmployeePayload,
        EmployeeResponse,
        ErrorEnvelope,
        ErrorMessage,
        FieldMessage
    )),
    tags(
        (name = "Companies", description = "Company management"),
        (name = "Employees", description = "Employees of registered companies")
    )
)]
pub struct ApiDoc;

/// Routes serving the document, and Swagger UI when enabled.
#[cfg(feature = "swagger-ui")]
pub(super) fn docs_router<T>() -> Router<T>
where
    T: Clone + Send + Sync + 'static
{
    utoipa_swagger_ui::SwaggerUi::new("/api/doc")
        .url(OPENAPI_JSON, ApiDoc::openapi())
        .into()
}

/// Routes serving the document, and Swagger UI when enabled.
#[cfg(not(feature = "swagger-ui"))]
pub(super) fn docs_router<T>() -> Router<T>
where
    T: Clone + Send + Sync + 'static
{
    use axum::{Json, routing::get};

    Router::new().route(OPENAPI_JSON, get(|| async { Json(ApiDoc::openapi()) }))
}
