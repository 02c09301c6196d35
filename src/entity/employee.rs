// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Employee entity.

use chrono::{DateTime, Utc};

use super::company::{Company, CompanyId};

/// Store-assigned employee identifier.
pub type EmployeeId = i64;

/// Validated personal details shared by employee creation and editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetails {
    pub first_name:   String,
    pub last_name:    String,
    pub email:        String,
    pub phone_number: Option<String>
}

/// An employee of exactly one company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Identifier, `0` until the employee is persisted.
    pub id: EmployeeId,

    /// Owning company. Must reference an existing row.
    pub company_id: CompanyId,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    /// Polish phone number in `+48 ddd ddd ddd` format, if known.
    pub phone_number: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>
}

impl Employee {
    /// Build a new, not yet persisted employee of `company`.
    pub fn create(company: &Company, details: EmployeeDetails) -> Self {
        let now = Utc::now();
        Self {
            id:           0,
            company_id:   company.id,
            first_name:   details.first_name,
            last_name:    details.last_name,
            email:        details.email,
            phone_number: details.phone_number,
            created_at:   now,
            updated_at:   now
        }
    }

    /// Replace the personal details and refresh `updated_at`.
    ///
    /// The owning company is left untouched.
    pub fn update(&mut self, details: EmployeeDetails) {
        self.first_name = details.first_name;
        self.last_name = details.last_name;
        self.email = details.email;
        self.phone_number = details.phone_number;
        self.updated_at = Utc::now();
    }

    /// Move the employee to another company.
    pub fn assign_to(&mut self, company: &Company) {
        self.company_id = company.id;
        self.updated_at = Utc::now();
    }

    /// Whether the store has assigned an identifier yet.
    pub const fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
