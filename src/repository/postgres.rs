// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! PostgreSQL repositories implemented directly on [`PgPool`].
//!
//! Tables are created by the migrations under `migrations/`. The
//! `employee.company_id` foreign key is declared `ON DELETE CASCADE`, so
//! deleting a company is a single statement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::{CompanyRepository, EmployeeRepository, StoreError};
use crate::entity::{Company, CompanyId, Employee, EmployeeId};

const COMPANY_COLUMNS: &str = "id, name, nip, address, city, zip_code, created_at, updated_at";

const EMPLOYEE_COLUMNS: &str =
    "id, company_id, first_name, last_name, email, phone_number, created_at, updated_at";

/// Database row of the `company` table.
#[derive(Debug, sqlx::FromRow)]
struct CompanyRow {
    id:         i64,
    name:       String,
    nip:        String,
    address:    String,
    city:       String,
    zip_code:   String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Self {
            id:         row.id,
            name:       row.name,
            nip:        row.nip,
            address:    row.address,
            city:       row.city,
            zip_code:   row.zip_code,
            created_at: row.created_at,
            updated_at: row.updated_at
        }
    }
}

/// Database row of the `employee` table.
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id:           i64,
    company_id:   i64,
    first_name:   String,
    last_name:    String,
    email:        String,
    phone_number: Option<String>,
    created_at:   DateTime<Utc>,
    updated_at:   DateTime<Utc>
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id:           row.id,
            company_id:   row.company_id,
            first_name:   row.first_name,
            last_name:    row.last_name,
            email:        row.email,
            phone_number: row.phone_number,
            created_at:   row.created_at,
            updated_at:   row.updated_at
        }
    }
}

#[async_trait]
impl CompanyRepository for PgPool {
    type Error = StoreError;

    async fn list_companies(&self) -> Result<Vec<Company>, Self::Error> {
        let rows: Vec<CompanyRow> =
            sqlx::query_as(&format!("SELECT {COMPANY_COLUMNS} FROM company ORDER BY id"))
                .fetch_all(self)
                .await?;
        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn find_company(&self, id: CompanyId) -> Result<Option<Company>, Self::Error> {
        let row: Option<CompanyRow> =
            sqlx::query_as(&format!("SELECT {COMPANY_COLUMNS} FROM company WHERE id = $1"))
                .bind(id)
                .fetch_optional(self)
                .await?;
        Ok(row.map(Company::from))
    }

    async fn insert_company(&self, company: Company) -> Result<Company, Self::Error> {
        let row: CompanyRow = sqlx::query_as(&format!(
            "INSERT INTO company (name, nip, address, city, zip_code, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {COMPANY_COLUMNS}"
        ))
        .bind(&company.name)
        .bind(&company.nip)
        .bind(&company.address)
        .bind(&company.city)
        .bind(&company.zip_code)
        .bind(company.created_at)
        .bind(company.updated_at)
        .fetch_one(self)
        .await?;
        Ok(Company::from(row))
    }

    async fn update_company(&self, company: &Company) -> Result<Option<Company>, Self::Error> {
        debug_assert!(company.is_persisted(), "update of an unsaved company");
        let row: Option<CompanyRow> = sqlx::query_as(&format!(
            "UPDATE company SET name = $1, nip = $2, address = $3, city = $4, zip_code = $5, \
             updated_at = $6 WHERE id = $7 RETURNING {COMPANY_COLUMNS}"
        ))
        .bind(&company.name)
        .bind(&company.nip)
        .bind(&company.address)
        .bind(&company.city)
        .bind(&company.zip_code)
        .bind(company.updated_at)
        .bind(company.id)
        .fetch_optional(self)
        .await?;
        Ok(row.map(Company::from))
    }

    async fn delete_company(&self, id: CompanyId) -> Result<bool, Self::Error> {
        let result = sqlx::query("DELETE FROM company WHERE id = $1")
            .bind(id)
            .execute(self)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl EmployeeRepository for PgPool {
    type Error = StoreError;

    async fn list_employees(&self) -> Result<Vec<Employee>, Self::Error> {
        let rows: Vec<EmployeeRow> =
            sqlx::query_as(&format!("SELECT {EMPLOYEE_COLUMNS} FROM employee ORDER BY id"))
                .fetch_all(self)
                .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_employee(&self, id: EmployeeId) -> Result<Option<Employee>, Self::Error> {
        let row: Option<EmployeeRow> =
            sqlx::query_as(&format!("SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE id = $1"))
                .bind(id)
                .fetch_optional(self)
                .await?;
        Ok(row.map(Employee::from))
    }

    async fn list_company_employees(
        &self,
        company_id: CompanyId
    ) -> Result<Vec<Employee>, Self::Error> {
        let rows: Vec<EmployeeRow> = sqlx::query_as(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employee WHERE company_id = $1 ORDER BY id"
        ))
        .bind(company_id)
        .fetch_all(self)
        .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn insert_employee(&self, employee: Employee) -> Result<Employee, Self::Error> {
        let row: EmployeeRow = sqlx::query_as(&format!(
            "INSERT INTO employee \
             (company_id, first_name, last_name, email, phone_number, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {EMPLOYEE_COLUMNS}"
        ))
        .bind(employee.company_id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.phone_number)
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .fetch_one(self)
        .await?;
        Ok(Employee::from(row))
    }

    async fn update_employee(&self, employee: &Employee) -> Result<Option<Employee>, Self::Error> {
        debug_assert!(employee.is_persisted(), "update of an unsaved employee");
        let row: Option<EmployeeRow> = sqlx::query_as(&format!(
            "UPDATE employee SET company_id = $1, first_name = $2, last_name = $3, email = $4, \
             phone_number = $5, updated_at = $6 WHERE id = $7 RETURNING {EMPLOYEE_COLUMNS}"
        ))
        .bind(employee.company_id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.phone_number)
        .bind(employee.updated_at)
        .bind(employee.id)
        .fetch_optional(self)
        .await?;
        Ok(row.map(Employee::from))
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<bool, Self::Error> {
        let result = sqlx::query("DELETE FROM employee WHERE id = $1")
            .bind(id)
            .execute(self)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
