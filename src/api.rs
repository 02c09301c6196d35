// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! HTTP surface.
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/api/companies` | [`company::list_companies`] |
//! | `POST` | `/api/companies` | [`company::create_company`] |
//! | `GET` | `/api/companies/{id}` | [`company::show_company`] |
//! | `PUT` | `/api/companies/{id}` | [`company::update_company`] |
//! | `DELETE` | `/api/companies/{id}` | [`company::delete_company`] |
//! | `GET` | `/api/employees` | [`employee::list_employees`] |
//! | `POST` | `/api/employees` | [`employee::create_employee`] |
//! | `GET` | `/api/employees/{id}` | [`employee::show_employee`] |
//! | `PUT` | `/api/employees/{id}` | [`employee::update_employee`] |
//! | `DELETE` | `/api/employees/{id}` | [`employee::delete_employee`] |
//! | `GET` | `/api/doc.json` | OpenAPI document |
//!
//! With the `swagger-ui` feature the document is also browsable at
//! `/api/doc`.
//!
//! Handlers are generic over the [`Store`] and receive it as
//! `State<Arc<S>>`. Request bodies are taken as raw bytes so that empty and
//! malformed payloads produce the regular error envelope instead of axum's
//! plain-text rejections.

pub mod company;
pub mod employee;
mod openapi;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub use self::openapi::ApiDoc;
use crate::{
    error::{ApiError, ApiResult, Resource},
    repository::Store
};

/// Build the application router over `store`.
pub fn router<S>(store: Arc<S>) -> Router
where
    S: Store
{
    Router::new()
        .route(
            "/api/companies",
            get(company::list_companies::<S>).post(company::create_company::<S>)
        )
        .route(
            "/api/companies/{id}",
            get(company::show_company::<S>)
                .put(company::update_company::<S>)
                .delete(company::delete_company::<S>)
        )
        .route(
            "/api/employees",
            get(employee::list_employees::<S>).post(employee::create_employee::<S>)
        )
        .route(
            "/api/employees/{id}",
            get(employee::show_employee::<S>)
                .put(employee::update_employee::<S>)
                .delete(employee::delete_employee::<S>)
        )
        .merge(openapi::docs_router())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Parse a path id. Anything that is not an integer addresses nothing.
fn parse_id(raw: &str, resource: Resource) -> ApiResult<i64> {
    raw.parse().map_err(|_| ApiError::NotFound(resource))
}
