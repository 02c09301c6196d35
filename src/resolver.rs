// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Request resolvers.
//!
//! Turn a raw request body into validated domain input, or fail with the
//! [`ApiError`] the handler returns unchanged.
//!
//! ```text
//! body ──> parse_payload ──> presence tier ──> Validate ──> domain input
//!   │            │           (company only)       │
//!   └ empty      └ malformed        └ first miss  └ all violations
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::{
    dto::{
        CompanyDto, CompanyPayload, EditEmployeeDto, EditEmployeePayload, EmployeeDto,
        EmployeePayload
    },
    entity::{Company, EmployeeDetails},
    error::{ApiError, ApiResult},
    repository::CompanyRepository
};

/// Decode a JSON object body into `T`.
///
/// # Errors
///
/// - [`ApiError::EmptyPayload`] for a zero-length body
/// - [`ApiError::MalformedPayload`] for invalid JSON, a non-object document,
///   or a field of the wrong type
pub fn parse_payload<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    if body.is_empty() {
        return Err(ApiError::EmptyPayload);
    }
    let document: Value = serde_json::from_slice(body).map_err(|_| ApiError::MalformedPayload)?;
    if !document.is_object() {
        return Err(ApiError::MalformedPayload);
    }
    serde_json::from_value(document).map_err(|_| ApiError::MalformedPayload)
}

/// Resolve a company create or update body.
///
/// Presence is checked first and stops at the first missing field; the
/// declarative constraints then report every violation at once.
pub fn resolve_company(body: &[u8]) -> ApiResult<CompanyDto> {
    let dto = parse_payload::<CompanyPayload>(body)?.require_present()?;
    dto.validate()
        .map_err(|errors| ApiError::validation(&errors, CompanyDto::FIELDS))?;
    Ok(dto)
}

/// Resolve an employee create body, looking up the referenced company.
///
/// An absent, malformed or unknown company id is reported as a violation on
/// the `company` field alongside any other violations.
pub async fn resolve_employee<R>(
    companies: &R,
    body: &[u8]
) -> ApiResult<(Company, EmployeeDetails)>
where
    R: CompanyRepository + ?Sized
{
    let payload = parse_payload::<EmployeePayload>(body)?;
    let company = match payload.company_id() {
        Some(id) => companies.find_company(id).await.map_err(ApiError::store)?,
        None => None
    };
    payload
        .into_dto(company)
        .into_validated()
        .map_err(|errors| ApiError::validation(&errors, EmployeeDto::FIELDS))
}

/// Resolve an employee edit body. A `company` member, if sent, is ignored.
pub fn resolve_edit_employee(body: &[u8]) -> ApiResult<EmployeeDetails> {
    let payload = parse_payload::<EditEmployeePayload>(body)?;
    EditEmployeeDto::from(payload)
        .into_validated()
        .map_err(|errors| ApiError::validation(&errors, EditEmployeeDto::FIELDS))
}
