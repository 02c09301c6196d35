// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Employee endpoints.
//!
//! Every employee is answered with its owning company embedded. An employee
//! whose company cannot be read back was removed by a concurrent company
//! delete and is treated as gone.

use std::{collections::HashMap, sync::Arc};

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode
};

use super::parse_id;
use crate::{
    dto::{EditEmployeePayload, EmployeePayload, EmployeeResponse},
    entity::{Employee, EmployeeId},
    error::{ApiError, ApiResult, ErrorEnvelope, Resource},
    repository::Store,
    resolver::{resolve_edit_employee, resolve_employee}
};

/// List all employees.
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "All employees in id order", body = Vec<EmployeeResponse>),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
pub async fn list_employees<S>(State(store): State<Arc<S>>) -> ApiResult<Json<Vec<EmployeeResponse>>>
where
    S: Store
{
    let employees = store.list_employees().await.map_err(ApiError::store)?;
    let companies: HashMap<_, _> = store
        .list_companies()
        .await
        .map_err(ApiError::store)?
        .into_iter()
        .map(|company| (company.id, company))
        .collect();

    Ok(Json(
        employees
            .into_iter()
            .filter_map(|employee| {
                let company = companies.get(&employee.company_id)?;
                Some(EmployeeResponse::new(employee, company))
            })
            .collect()
    ))
}

/// Get an employee by id.
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 404, description = "Employee not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
pub async fn show_employee<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>
) -> ApiResult<Json<EmployeeResponse>>
where
    S: Store
{
    let employee = find(&*store, &id).await?;
    respond(&*store, employee).await.map(Json)
}

/// Create an employee of an existing company.
///
/// All violations, including an unknown `company`, are reported together.
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "Employees",
    request_body(content = EmployeePayload, description = "Employee to create"),
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Empty, malformed or invalid payload", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
pub async fn create_employee<S>(
    State(store): State<Arc<S>>,
    body: Bytes
) -> ApiResult<(StatusCode, Json<EmployeeResponse>)>
where
    S: Store
{
    let (company, details) = resolve_employee(&*store, &body)
        .await
        .inspect_err(|err| tracing::debug!("Rejected employee payload: {err}"))?;
    let employee = store
        .insert_employee(Employee::create(&company, details))
        .await
        .map_err(ApiError::store)?;
    tracing::info!("Employee {} of company {} created", employee.id, company.id);
    Ok((StatusCode::CREATED, Json(EmployeeResponse::new(employee, &company))))
}

/// Replace an employee's personal details.
///
/// The owning company cannot be changed here.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(("id" = i64, Path, description = "Employee id")),
    request_body(content = EditEmployeePayload, description = "New employee details"),
    responses(
        (status = 200, description = "Employee updated", body = EmployeeResponse),
        (status = 400, description = "Empty, malformed or invalid payload", body = ErrorEnvelope),
        (status = 404, description = "Employee not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
pub async fn update_employee<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    body: Bytes
) -> ApiResult<Json<EmployeeResponse>>
where
    S: Store
{
    let mut employee = find(&*store, &id).await?;
    let details = resolve_edit_employee(&body)
        .inspect_err(|err| tracing::debug!("Rejected employee payload: {err}"))?;
    employee.update(details);

    let employee = store
        .update_employee(&employee)
        .await
        .map_err(ApiError::store)?
        .ok_or(ApiError::NotFound(Resource::Employee))?;
    tracing::info!("Employee {} updated", employee.id);
    respond(&*store, employee).await.map(Json)
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(("id" = i64, Path, description = "Employee id")),
    responses(
        (status = 204, description = "Employee deleted"),
        (status = 404, description = "Employee not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    )
)]
pub async fn delete_employee<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>
) -> ApiResult<StatusCode>
where
    S: Store
{
    let id: EmployeeId = parse_id(&id, Resource::Employee)?;
    if store.delete_employee(id).await.map_err(ApiError::store)? {
        tracing::info!("Employee {id} deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(Resource::Employee))
    }
}

async fn find<S>(store: &S, raw_id: &str) -> ApiResult<Employee>
where
    S: Store
{
    let id = parse_id(raw_id, Resource::Employee)?;
    store
        .find_employee(id)
        .await
        .map_err(ApiError::store)?
        .ok_or(ApiError::NotFound(Resource::Employee))
}

async fn respond<S>(store: &S, employee: Employee) -> ApiResult<EmployeeResponse>
where
    S: Store
{
    let company = store
        .find_company(employee.company_id)
        .await
        .map_err(ApiError::store)?
        .ok_or(ApiError::NotFound(Resource::Employee))?;
    Ok(EmployeeResponse::new(employee, &company))
}
