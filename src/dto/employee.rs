// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Employee DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::company::CompanyResponse;
use crate::{
    entity::{Company, CompanyId, Employee, EmployeeDetails, EmployeeId},
    validation::{self, LengthMessages, NOT_BLANK}
};

/// Reported when `company` is absent, empty, or names an unknown company.
pub const COMPANY_MISSING: &str =
    "This value should not be blank. If you provided company id, then such company does not exist.";

/// Reported when `phoneNumber` is sent as an empty string.
pub const PHONE_NUMBER_BLANK: &str = "Phone number cannot be blank if provided.";

/// Reported when `phoneNumber` does not follow `+48 ddd ddd ddd`.
pub const PHONE_NUMBER_FORMAT: &str =
    "Phone number must be a valid Polish number in the format \"+48 123 456 789\".";

/// Request body of `POST /api/employees`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    /// Id of an existing company.
    #[schema(value_type = Option<i64>, example = 1)]
    pub company: Option<Value>,

    /// First name must contain at least three, and maximum of 86 characters.
    #[schema(example = "Miller")]
    pub first_name: Option<String>,

    /// Last name must contain at least three, and maximum of 86 characters.
    #[schema(example = "Douglas")]
    pub last_name: Option<String>,

    #[schema(example = "miller.douglas@gmail.com")]
    pub email: Option<String>,

    /// Phone number must be a valid Polish number in the format "+48 123 456 789".
    #[schema(example = "+48 675 888 906")]
    pub phone_number: Option<String>
}

impl EmployeePayload {
    /// Company id carried by the payload, as an integer or numeric string.
    pub fn company_id(&self) -> Option<CompanyId> {
        match self.company.as_ref()? {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None
        }
    }

    /// Pair the payload with the company its id resolved to, if any.
    pub fn into_dto(self, company: Option<Company>) -> EmployeeDto {
        EmployeeDto {
            company,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number
        }
    }
}

/// Request body of `PUT /api/employees/{id}`.
///
/// The owning company cannot be changed through this payload.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditEmployeePayload {
    #[schema(example = "Miller")]
    pub first_name: Option<String>,

    #[schema(example = "Douglas")]
    pub last_name: Option<String>,

    #[schema(example = "miller.douglas@gmail.com")]
    pub email: Option<String>,

    #[schema(example = "+48 675 888 906")]
    pub phone_number: Option<String>
}

impl From<EditEmployeePayload> for EditEmployeeDto {
    fn from(payload: EditEmployeePayload) -> Self {
        Self {
            first_name:   payload.first_name,
            last_name:    payload.last_name,
            email:        payload.email,
            phone_number: payload.phone_number
        }
    }
}

/// New employee awaiting declarative validation.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDto {
    pub company:      Option<Company>,
    pub first_name:   Option<String>,
    pub last_name:    Option<String>,
    pub email:        Option<String>,
    pub phone_number: Option<String>
}

impl EmployeeDto {
    /// Order in which violations are reported.
    pub const FIELDS: &'static [&'static str] =
        &["company", "firstName", "lastName", "email", "phoneNumber"];

    /// Validate and split into the owning company and the personal details.
    pub fn into_validated(self) -> Result<(Company, EmployeeDetails), ValidationErrors> {
        self.validate()?;
        match (self.company, self.first_name, self.last_name, self.email) {
            (Some(company), Some(first_name), Some(last_name), Some(email)) => Ok((
                company,
                EmployeeDetails {
                    first_name,
                    last_name,
                    email,
                    phone_number: self.phone_number
                }
            )),
            // validate() already reported every absent field
            _ => Err(ValidationErrors::new())
        }
    }
}

impl Validate for EmployeeDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.company.is_none() {
            errors.add("company", validation::violation("not_blank", COMPANY_MISSING));
        }
        check_person(
            &mut errors,
            self.first_name.as_ref(),
            self.last_name.as_ref(),
            self.email.as_ref(),
            self.phone_number.as_ref()
        );
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Edited employee details awaiting declarative validation.
#[derive(Debug, Clone, Default)]
pub struct EditEmployeeDto {
    pub first_name:   Option<String>,
    pub last_name:    Option<String>,
    pub email:        Option<String>,
    pub phone_number: Option<String>
}

impl EditEmployeeDto {
    /// Order in which violations are reported.
    pub const FIELDS: &'static [&'static str] = &["firstName", "lastName", "email", "phoneNumber"];

    /// Validate and convert into entity details.
    pub fn into_validated(self) -> Result<EmployeeDetails, ValidationErrors> {
        self.validate()?;
        match (self.first_name, self.last_name, self.email) {
            (Some(first_name), Some(last_name), Some(email)) => Ok(EmployeeDetails {
                first_name,
                last_name,
                email,
                phone_number: self.phone_number
            }),
            // validate() already reported every absent field
            _ => Err(ValidationErrors::new())
        }
    }
}

impl Validate for EditEmployeeDto {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_person(
            &mut errors,
            self.first_name.as_ref(),
            self.last_name.as_ref(),
            self.email.as_ref(),
            self.phone_number.as_ref()
        );
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn check_person(
    errors: &mut ValidationErrors,
    first_name: Option<&String>,
    last_name: Option<&String>,
    email: Option<&String>,
    phone_number: Option<&String>
) {
    for (field, value) in [("firstName", first_name), ("lastName", last_name)] {
        validation::not_blank(errors, field, value, NOT_BLANK);
        if let Some(value) = value {
            validation::length(errors, field, value, 3, 86, LengthMessages::Generic);
        }
    }

    validation::not_blank(errors, "email", email, NOT_BLANK);
    if let Some(email) = email {
        validation::length(errors, "email", email, 0, 255, LengthMessages::Generic);
        validation::email(errors, "email", email);
    }

    match phone_number {
        None => {}
        Some(phone) if phone.is_empty() => {
            errors.add("phoneNumber", validation::violation("not_blank", PHONE_NUMBER_BLANK));
        }
        Some(phone) => validation::pattern(
            errors,
            "phoneNumber",
            phone,
            &validation::PHONE_NUMBER,
            PHONE_NUMBER_FORMAT
        )
    }
}

/// Employee JSON representation with the owning company embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id:           EmployeeId,
    pub first_name:   String,
    pub last_name:    String,
    pub email:        String,
    pub phone_number: Option<String>,
    pub company:      CompanyResponse
}

impl EmployeeResponse {
    /// Serialize `employee` together with its owning `company`.
    pub fn new(employee: Employee, company: &Company) -> Self {
        Self {
            id:           employee.id,
            first_name:   employee.first_name,
            last_name:    employee.last_name,
            email:        employee.email,
            phone_number: employee.phone_number,
            company:      CompanyResponse::from(company)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{dto::CompanyDto, error::FieldMessage, validation::flatten};

    fn company() -> Company {
        let mut company = Company::create(CompanyDto {
            name:     "Mercedes".to_string(),
            nip:      "9876543210".to_string(),
            address:  "Parkowa 7a".to_string(),
            city:     "Warszawa".to_string(),
            zip_code: "10-733".to_string()
        });
        company.id = 1;
        company
    }

    fn text(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn violations(dto: &EmployeeDto) -> Vec<FieldMessage> {
        dto.validate()
            .err()
            .map(|errors| flatten(&errors, EmployeeDto::FIELDS))
            .unwrap_or_default()
    }

    #[test]
    fn company_id_accepts_numbers_and_numeric_strings() {
        let mut payload = EmployeePayload {
            company: Some(serde_json::json!(5)),
            ..EmployeePayload::default()
        };
        assert_eq!(payload.company_id(), Some(5));

        payload.company = Some(serde_json::json!("7"));
        assert_eq!(payload.company_id(), Some(7));

        payload.company = Some(serde_json::json!(""));
        assert_eq!(payload.company_id(), None);

        payload.company = Some(serde_json::json!({ "id": 1 }));
        assert_eq!(payload.company_id(), None);
    }

    #[test]
    fn empty_fields_collect_every_violation() {
        let dto = EmployeeDto {
            company:      None,
            first_name:   text(""),
            last_name:    text(""),
            email:        text(""),
            phone_number: None
        };

        let short = "This value is too short. It should have 3 characters or more.";
        assert_eq!(
            violations(&dto),
            vec![
                FieldMessage::new("company", COMPANY_MISSING),
                FieldMessage::new("firstName", NOT_BLANK),
                FieldMessage::new("firstName", short),
                FieldMessage::new("lastName", NOT_BLANK),
                FieldMessage::new("lastName", short),
                FieldMessage::new("email", NOT_BLANK),
            ]
        );
    }

    #[test]
    fn absent_names_are_blank_but_not_short() {
        let dto = EmployeeDto {
            company: Some(company()),
            email: text("john.doe@gmail.com"),
            ..EmployeeDto::default()
        };

        assert_eq!(
            violations(&dto),
            vec![
                FieldMessage::new("firstName", NOT_BLANK),
                FieldMessage::new("lastName", NOT_BLANK),
            ]
        );
    }

    #[test]
    fn phone_number_blank_and_format() {
        let mut dto = EmployeeDto {
            company:      Some(company()),
            first_name:   text("John"),
            last_name:    text("Doe"),
            email:        text("wrong.email@"),
            phone_number: text("")
        };
        assert_eq!(
            violations(&dto),
            vec![
                FieldMessage::new("email", validation::INVALID_EMAIL),
                FieldMessage::new("phoneNumber", PHONE_NUMBER_BLANK),
            ]
        );

        dto.email = text("john.doe@gmail.com");
        dto.phone_number = text("+48 33 33 444");
        assert_eq!(
            violations(&dto),
            vec![FieldMessage::new("phoneNumber", PHONE_NUMBER_FORMAT)]
        );

        dto.phone_number = None;
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn email_is_limited_to_column_width() {
        let domain = format!("{}.{}.{}.pl", "a".repeat(60), "b".repeat(60), "c".repeat(60));
        let mut dto = EmployeeDto {
            company:      Some(company()),
            first_name:   text("John"),
            last_name:    text("Doe"),
            email:        Some(format!("{}@{domain}", "u".repeat(60))),
            phone_number: None
        };
        assert_eq!(dto.email.as_ref().map(String::len), Some(246));
        assert!(dto.validate().is_ok());

        dto.email = Some(format!("{}@{}.{domain}", "u".repeat(60), "d".repeat(9)));
        assert_eq!(dto.email.as_ref().map(String::len), Some(256));
        assert_eq!(
            violations(&dto),
            vec![FieldMessage::new(
                "email",
                "This value is too long. It should have 255 characters or less."
            )]
        );
    }

    #[test]
    fn into_validated_splits_company_and_details() {
        let dto = EmployeeDto {
            company:      Some(company()),
            first_name:   text("Miller"),
            last_name:    text("Douglas"),
            email:        text("miller.douglas@gmail.com"),
            phone_number: text("+48 675 888 906")
        };

        let (company, details) = dto.into_validated().unwrap();
        assert_eq!(company.id, 1);
        assert_eq!(details.first_name, "Miller");
        assert_eq!(details.phone_number.as_deref(), Some("+48 675 888 906"));
    }

    #[test]
    fn edit_dto_ignores_company() {
        let dto = EditEmployeeDto {
            first_name:   text("Jo"),
            last_name:    text("Doe"),
            email:        text("john.doe@gmail.com"),
            phone_number: None
        };

        let errors = dto.into_validated().unwrap_err();
        assert_eq!(
            flatten(&errors, EditEmployeeDto::FIELDS),
            vec![FieldMessage::new(
                "firstName",
                "This value is too short. It should have 3 characters or more."
            )]
        );
    }

    #[test]
    fn response_embeds_company_and_null_phone() {
        let mut employee = Employee::create(
            &company(),
            EmployeeDetails {
                first_name:   "Mike".to_string(),
                last_name:    "Watson".to_string(),
                email:        "mike.watson@example.com".to_string(),
                phone_number: None
            }
        );
        employee.id = 4;

        let json = serde_json::to_value(EmployeeResponse::new(employee, &company())).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["phoneNumber"], Value::Null);
        assert_eq!(json["company"]["zipCode"], "10-733");
    }
}
