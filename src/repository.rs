// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistence seams for companies and employees.
//!
//! Handlers never talk to a database directly. They are generic over a
//! [`Store`], which is any type implementing both repository traits:
//!
//! | Backend | Type | Used by |
//! |---------|------|---------|
//! | PostgreSQL | [`sqlx::PgPool`] | the server when a database URL is configured |
//! | In-memory | [`MemoryStore`] | the server without a database, and the tests |
//!
//! Both backends assign identifiers, keep rows in id order, reject
//! employees of unknown companies and remove a company's employees together
//! with the company.

mod memory;
mod postgres;

use async_trait::async_trait;
use thiserror::Error;

pub use self::memory::MemoryStore;
use crate::entity::{Company, CompanyId, Employee, EmployeeId};

/// Failure reported by a repository backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database rejected or failed the query.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An employee referenced a company that is not stored.
    #[error("company {0} does not exist")]
    MissingCompany(CompanyId)
}

/// Company persistence.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    type Error: std::error::Error + Send + Sync;

    /// All companies in id order.
    async fn list_companies(&self) -> Result<Vec<Company>, Self::Error>;

    async fn find_company(&self, id: CompanyId) -> Result<Option<Company>, Self::Error>;

    /// Persist a new company and return it with its assigned id.
    async fn insert_company(&self, company: Company) -> Result<Company, Self::Error>;

    /// Write back a persisted company. `None` if it no longer exists.
    async fn update_company(&self, company: &Company) -> Result<Option<Company>, Self::Error>;

    /// Remove a company and all of its employees.
    ///
    /// Returns `false` if there was nothing to remove.
    async fn delete_company(&self, id: CompanyId) -> Result<bool, Self::Error>;
}

/// Employee persistence.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    type Error: std::error::Error + Send + Sync;

    /// All employees in id order.
    async fn list_employees(&self) -> Result<Vec<Employee>, Self::Error>;

    async fn find_employee(&self, id: EmployeeId) -> Result<Option<Employee>, Self::Error>;

    /// Employees of one company, in id order.
    async fn list_company_employees(
        &self,
        company_id: CompanyId
    ) -> Result<Vec<Employee>, Self::Error>;

    /// Persist a new employee and return it with its assigned id.
    async fn insert_employee(&self, employee: Employee) -> Result<Employee, Self::Error>;

    /// Write back a persisted employee. `None` if it no longer exists.
    async fn update_employee(&self, employee: &Employee) -> Result<Option<Employee>, Self::Error>;

    /// Returns `false` if there was nothing to remove.
    async fn delete_employee(&self, id: EmployeeId) -> Result<bool, Self::Error>;
}

/// Backend serving both resources, as required by the HTTP layer.
pub trait Store: CompanyRepository + EmployeeRepository + 'static {}

impl<T> Store for T where T: CompanyRepository + EmployeeRepository + 'static {}
