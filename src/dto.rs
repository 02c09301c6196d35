// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Request and response DTOs.
//!
//! Every write endpoint goes through three types:
//!
//! | Type | Purpose | Direction |
//! |------|---------|-----------|
//! | `*Payload` | Raw JSON body, every field optional | Request body |
//! | `*Dto` | Transient object checked by [`validator::Validate`] | Internal |
//! | `*Response` | Serialized entity | Response body |

mod company;
mod employee;

pub use self::{
    company::{CompanyDto, CompanyPayload, CompanyResponse},
    employee::{EditEmployeeDto, EditEmployeePayload, EmployeeDto, EmployeePayload, EmployeeResponse}
};
