// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Company DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::{
    entity::{Company, CompanyId},
    error::ApiError,
    validation::{self, LengthMessages}
};

/// Request body of `POST /api/companies` and `PUT /api/companies/{id}`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPayload {
    /// Name must contain at least three, and maximum of 255 characters.
    #[schema(example = "Miller and Johnson")]
    pub name: Option<String>,

    /// Nip must consist of ten digits without dashes in between.
    #[schema(example = "9876543210")]
    pub nip: Option<String>,

    /// Address must contain at least three, and maximum of 255 characters.
    #[schema(example = "Drzewna 7a")]
    pub address: Option<String>,

    /// City name must contain at least two, and maximum of 64 characters.
    #[schema(example = "Biała Podlaska")]
    pub city: Option<String>,

    /// Zip code must be in XX-XXX format.
    #[schema(example = "53-733")]
    pub zip_code: Option<String>
}

impl CompanyPayload {
    /// Presence check performed before any declarative validation.
    ///
    /// Stops at the first absent or empty field, in the order name, nip,
    /// address, city, zip code.
    pub fn require_present(self) -> Result<CompanyDto, ApiError> {
        fn present(
            value: Option<String>,
            field: &'static str,
            message: &'static str
        ) -> Result<String, ApiError> {
            value.filter(|v| !v.is_empty()).ok_or(ApiError::MissingField {
                field,
                message
            })
        }

        Ok(CompanyDto {
            name:     present(self.name, "name", "Name cannot be null or empty")?,
            nip:      present(self.nip, "nip", "Nip cannot be null or empty")?,
            address:  present(self.address, "address", "Address cannot be null or empty")?,
            city:     present(self.city, "city", "City cannot be null or empty")?,
            zip_code: present(self.zip_code, "zipCode", "Zip code cannot be null or empty")?
        })
    }
}

/// Company details awaiting declarative validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDto {
    pub name:     String,
    pub nip:      String,
    pub address:  String,
    pub city:     String,
    pub zip_code: String
}

impl CompanyDto {
    /// Order in which violations are reported.
    pub const FIELDS: &'static [&'static str] = &["name", "nip", "address", "city", "zipCode"];
}

impl Validate for CompanyDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        validation::not_blank(&mut errors, "name", Some(&self.name), "Company name cannot be empty.");
        validation::length(&mut errors, "name", &self.name, 3, 255, LengthMessages::Labelled("Name"));

        validation::not_blank(&mut errors, "nip", Some(&self.nip), "Nip cannot be empty.");
        validation::pattern(
            &mut errors,
            "nip",
            &self.nip,
            &validation::NIP,
            "Nip must consist of exactly ten digits."
        );

        validation::not_blank(&mut errors, "address", Some(&self.address), "Address cannot be empty.");
        validation::length(
            &mut errors,
            "address",
            &self.address,
            3,
            255,
            LengthMessages::Labelled("Address")
        );

        validation::not_blank(&mut errors, "city", Some(&self.city), "City name cannot be empty.");
        validation::length(
            &mut errors,
            "city",
            &self.city,
            2,
            64,
            LengthMessages::Labelled("City name")
        );

        validation::not_blank(&mut errors, "zipCode", Some(&self.zip_code), "Zip code cannot be empty.");
        validation::pattern(
            &mut errors,
            "zipCode",
            &self.zip_code,
            &validation::ZIP_CODE,
            "Zip code must be in XX-XXX format."
        );

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Company JSON representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id:       CompanyId,
    pub name:     String,
    pub nip:      String,
    pub address:  String,
    pub city:     String,
    pub zip_code: String
}

impl From<&Company> for CompanyResponse {
    fn from(company: &Company) -> Self {
        Self {
            id:       company.id,
            name:     company.name.clone(),
            nip:      company.nip.clone(),
            address:  company.address.clone(),
            city:     company.city.clone(),
            zip_code: company.zip_code.clone()
        }
    }
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id:       company.id,
            name:     company.name,
            nip:      company.nip,
            address:  company.address,
            city:     company.city,
            zip_code: company.zip_code
        }
    }
}
