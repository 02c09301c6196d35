// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Company entity.

use chrono::{DateTime, Utc};

use crate::dto::CompanyDto;

/// Store-assigned company identifier.
pub type CompanyId = i64;

/// A registered company.
///
/// The employees of a company are not owned by this struct. They are looked
/// up by foreign key through
/// [`EmployeeRepository`](crate::repository::EmployeeRepository).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Identifier, `0` until the company is persisted.
    pub id: CompanyId,

    /// Company name, 3 to 255 characters.
    pub name: String,

    /// Tax identification number, exactly ten digits.
    pub nip: String,

    /// Street address, 3 to 255 characters.
    pub address: String,

    /// City name, 2 to 64 characters.
    pub city: String,

    /// Postal code in `XX-XXX` format.
    pub zip_code: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>
}

impl Company {
    /// Build a new, not yet persisted company from validated details.
    pub fn create(details: CompanyDto) -> Self {
        let now = Utc::now();
        Self {
            id:         0,
            name:       details.name,
            nip:        details.nip,
            address:    details.address,
            city:       details.city,
            zip_code:   details.zip_code,
            created_at: now,
            updated_at: now
        }
    }

    /// Replace every editable field and refresh `updated_at`.
    pub fn update(&mut self, details: CompanyDto) {
        self.name = details.name;
        self.nip = details.nip;
        self.address = details.address;
        self.city = details.city;
        self.zip_code = details.zip_code;
        self.updated_at = Utc::now();
    }

    /// Whether the store has assigned an identifier yet.
    pub const fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
