// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # company-registry
//!
//! CRUD REST API for companies and their employees.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use company_registry::{api, repository::MemoryStore};
//!
//! let app = api::router(Arc::new(MemoryStore::new()));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! ## Layers
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`entity`] | `Company` and `Employee` with their lifecycle methods |
//! | [`dto`] | Request payloads, validated DTOs, response bodies |
//! | [`validation`] | Field constraints and violation flattening |
//! | [`resolver`] | Body → validated input, or an [`error::ApiError`] |
//! | [`repository`] | Storage traits, PostgreSQL and in-memory backends |
//! | [`api`] | axum handlers, router, OpenAPI document |
//! | [`error`] | Error type and the uniform JSON envelope |
//! | [`config`] | Layered configuration |

pub mod api;
pub mod config;
pub mod dto;
pub mod entity;
pub mod error;
pub mod repository;
pub mod resolver;
pub mod validation;

/// Embedded PostgreSQL migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
