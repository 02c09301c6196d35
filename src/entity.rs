// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Domain entities backed by the `company` and `employee` tables.
//!
//! Entities are created through a static factory that stamps both
//! timestamps, and mutated through an explicit `update` that refreshes
//! `updated_at`. Identifiers are assigned by the store on insert.
//!
//! | Entity | Table | Relation |
//! |--------|-------|----------|
//! | [`Company`] | `company` | has many employees (cascade delete) |
//! | [`Employee`] | `employee` | belongs to one company via `company_id` |

mod company;
mod employee;

pub use self::{
    company::{Company, CompanyId},
    employee::{Employee, EmployeeDetails, EmployeeId}
};
