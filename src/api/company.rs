// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Company endpoints.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode
};

use super::parse_id;
use crate::{
    dto::{CompanyPayload, CompanyResponse},
    entity::Company,
    error::{ApiError, ApiResult, ErrorEnvelope, Resource},
    repository::Store,
    resolver::resolve_company
};

/// List all companies.
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = "Companies",
    responses(
        (status = 200, description = "All companies in id order", body = Vec<CompanyResponse>),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
pub async fn list_companies<S>(State(store): State<Arc<S>>) -> ApiResult<Json<Vec<CompanyResponse>>>
where
    S: Store
{
    let companies = store.list_companies().await.map_err(ApiError::store)?;
    Ok(Json(companies.into_iter().map(CompanyResponse::from).collect()))
}

/// Get a company by id.
#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    tag = "Companies",
    params(("id" = i64, Path, description = "Company id")),
    responses(
        (status = 200, description = "Company found", body = CompanyResponse),
        (status = 404, description = "Company not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
pub async fn show_company<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>
) -> ApiResult<Json<CompanyResponse>>
where
    S: Store
{
    let company = find(&*store, &id).await?;
    Ok(Json(CompanyResponse::from(company)))
}

/// Create a company.
///
/// Required fields are checked one by one and the first missing one is
/// reported alone. Once all are present, every constraint violation is
/// reported together.
#[utoipa::path(
    post,
    path = "/api/companies",
    tag = "Companies",
    request_body(content = CompanyPayload, description = "Company to create"),
    responses(
        (status = 201, description = "Company created", body = CompanyResponse),
        (status = 400, description = "Empty, malformed or invalid payload", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
pub async fn create_company<S>(
    State(store): State<Arc<S>>,
    body: Bytes
) -> ApiResult<(StatusCode, Json<CompanyResponse>)>
where
    S: Store
{
    let dto = resolve_company(&body)
        .inspect_err(|err| tracing::debug!("Rejected company payload: {err}"))?;
    let company = store
        .insert_company(Company::create(dto))
        .await
        .map_err(ApiError::store)?;
    tracing::info!("Company {} created", company.id);
    Ok((StatusCode::CREATED, Json(CompanyResponse::from(company))))
}

/// Replace a company's details.
#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    tag = "Companies",
    params(("id" = i64, Path, description = "Company id")),
    request_body(content = CompanyPayload, description = "New company details"),
    responses(
        (status = 200, description = "Company updated", body = CompanyResponse),
        (status = 400, description = "Empty, malformed or invalid payload", body = ErrorEnvelope),
        (status = 404, description = "Company not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
pub async fn update_company<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    body: Bytes
) -> ApiResult<Json<CompanyResponse>>
where
    S: Store
{
    let mut company = find(&*store, &id).await?;
    let dto = resolve_company(&body)
        .inspect_err(|err| tracing::debug!("Rejected company payload: {err}"))?;
    company.update(dto);

    let company = store
        .update_company(&company)
        .await
        .map_err(ApiError::store)?
        .ok_or(ApiError::NotFound(Resource::Company))?;
    tracing::info!("Company {} updated", company.id);
    Ok(Json(CompanyResponse::from(company)))
}

/// Delete a company together with its employees.
#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    tag = "Companies",
    params(("id" = i64, Path, description = "Company id")),
    responses(
        (status = 204, description = "Company and its employees deleted"),
        (status = 404, description = "Company not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
pub async fn delete_company<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>
) -> ApiResult<StatusCode>
where
    S: Store
{
    let id = parse_id(&id, Resource::Company)?;
    if store.delete_company(id).await.map_err(ApiError::store)? {
        tracing::info!("Company {id} deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(Resource::Company))
    }
}

async fn find<S>(store: &S, raw_id: &str) -> ApiResult<Company>
where
    S: Store
{
    let id = parse_id(raw_id, Resource::Company)?;
    store
        .find_company(id)
        .await
        .map_err(ApiError::store)?
        .ok_or(ApiError::NotFound(Resource::Company))
}
