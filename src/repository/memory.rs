// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory repositories.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CompanyRepository, EmployeeRepository, StoreError};
use crate::entity::{Company, CompanyId, Employee, EmployeeId};

/// Process-local store with the same semantics as the database schema.
///
/// Ids start at `1` and are never reused. Rows are kept in ordered maps so
/// listings come out in id order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>
}

#[derive(Debug, Default)]
struct Tables {
    companies:        BTreeMap<CompanyId, Company>,
    employees:        BTreeMap<EmployeeId, Employee>,
    last_company_id:  CompanyId,
    last_employee_id: EmployeeId
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyRepository for MemoryStore {
    type Error = StoreError;

    async fn list_companies(&self) -> Result<Vec<Company>, Self::Error> {
        Ok(self.tables.read().await.companies.values().cloned().collect())
    }

    async fn find_company(&self, id: CompanyId) -> Result<Option<Company>, Self::Error> {
        Ok(self.tables.read().await.companies.get(&id).cloned())
    }

    async fn insert_company(&self, mut company: Company) -> Result<Company, Self::Error> {
        let mut tables = self.tables.write().await;
        tables.last_company_id += 1;
        company.id = tables.last_company_id;
        tables.companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn update_company(&self, company: &Company) -> Result<Option<Company>, Self::Error> {
        debug_assert!(company.is_persisted(), "update of an unsaved company");
        let mut tables = self.tables.write().await;
        Ok(tables.companies.get_mut(&company.id).map(|stored| {
            *stored = company.clone();
            stored.clone()
        }))
    }

    async fn delete_company(&self, id: CompanyId) -> Result<bool, Self::Error> {
        let mut tables = self.tables.write().await;
        if tables.companies.remove(&id).is_none() {
            return Ok(false);
        }
        tables.employees.retain(|_, employee| employee.company_id != id);
        Ok(true)
    }
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    type Error = StoreError;

    async fn list_employees(&self) -> Result<Vec<Employee>, Self::Error> {
        Ok(self.tables.read().await.employees.values().cloned().collect())
    }

    async fn find_employee(&self, id: EmployeeId) -> Result<Option<Employee>, Self::Error> {
        Ok(self.tables.read().await.employees.get(&id).cloned())
    }

    async fn list_company_employees(
        &self,
        company_id: CompanyId
    ) -> Result<Vec<Employee>, Self::Error> {
        Ok(self
            .tables
            .read()
            .await
            .employees
            .values()
            .filter(|employee| employee.company_id == company_id)
            .cloned()
            .collect())
    }

    async fn insert_employee(&self, mut employee: Employee) -> Result<Employee, Self::Error> {
        let mut tables = self.tables.write().await;
        if !tables.companies.contains_key(&employee.company_id) {
            return Err(StoreError::MissingCompany(employee.company_id));
        }
        tables.last_employee_id += 1;
        employee.id = tables.last_employee_id;
        tables.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update_employee(&self, employee: &Employee) -> Result<Option<Employee>, Self::Error> {
        debug_assert!(employee.is_persisted(), "update of an unsaved employee");
        let mut tables = self.tables.write().await;
        let Tables {
            companies,
            employees,
            ..
        } = &mut *tables;
        let Some(stored) = employees.get_mut(&employee.id) else {
            return Ok(None);
        };
        if !companies.contains_key(&employee.company_id) {
            return Err(StoreError::MissingCompany(employee.company_id));
        }
        *stored = employee.clone();
        Ok(Some(stored.clone()))
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<bool, Self::Error> {
        Ok(self.tables.write().await.employees.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dto::CompanyDto, entity::EmployeeDetails};

    fn company(name: &str) -> Company {
        Company::create(CompanyDto {
            name:     name.to_string(),
            nip:      "1234567890".to_string(),
            address:  "Lisi Ogon".to_string(),
            city:     "Lublin".to_string(),
            zip_code: "25-555".to_string()
        })
    }

    fn details(first_name: &str) -> EmployeeDetails {
        EmployeeDetails {
            first_name:   first_name.to_string(),
            last_name:    "Doe".to_string(),
            email:        "john.doe@gmail.com".to_string(),
            phone_number: None
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_in_order() {
        let store = MemoryStore::new();
        let first = store.insert_company(company("Temu")).await.unwrap();
        let second = store.insert_company(company("Mercedes")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        assert!(store.delete_company(second.id).await.unwrap());
        let third = store.insert_company(company("Tesla")).await.unwrap();
        assert_eq!(third.id, 3);

        let names: Vec<_> = store
            .list_companies()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Temu", "Tesla"]);
    }

    #[tokio::test]
    async fn deleting_company_cascades_to_employees() {
        let store = MemoryStore::new();
        let temu = store.insert_company(company("Temu")).await.unwrap();
        let tesla = store.insert_company(company("Tesla")).await.unwrap();
        store.insert_employee(Employee::create(&temu, details("John"))).await.unwrap();
        store.insert_employee(Employee::create(&temu, details("Jane"))).await.unwrap();
        let kept = store.insert_employee(Employee::create(&tesla, details("Mike"))).await.unwrap();

        assert!(store.delete_company(temu.id).await.unwrap());
        assert!(!store.delete_company(temu.id).await.unwrap());

        let remaining = store.list_employees().await.unwrap();
        assert_eq!(remaining, vec![kept]);
        assert!(store.list_company_employees(temu.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn employee_requires_existing_company() {
        let store = MemoryStore::new();
        let mut ghost = company("Ghost");
        ghost.id = 42;

        let err = store
            .insert_employee(Employee::create(&ghost, details("John")))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::MissingCompany(42)));
    }

    #[tokio::test]
    async fn update_reports_vanished_rows() {
        let store = MemoryStore::new();
        let mut temu = store.insert_company(company("Temu")).await.unwrap();
        temu.update(CompanyDto {
            name:     "Temu Polska".to_string(),
            nip:      temu.nip.clone(),
            address:  temu.address.clone(),
            city:     temu.city.clone(),
            zip_code: temu.zip_code.clone()
        });

        let stored = store.update_company(&temu).await.unwrap().unwrap();
        assert_eq!(stored.name, "Temu Polska");

        store.delete_company(temu.id).await.unwrap();
        assert!(store.update_company(&temu).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_of_cascaded_employee_reports_missing_row() {
        let store = MemoryStore::new();
        let temu = store.insert_company(company("Temu")).await.unwrap();
        let mut john = store
            .insert_employee(Employee::create(&temu, details("John")))
            .await
            .unwrap();

        store.delete_company(temu.id).await.unwrap();
        john.update(details("Johnny"));
        assert!(store.update_employee(&john).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_to_unknown_company_is_rejected() {
        let store = MemoryStore::new();
        let temu = store.insert_company(company("Temu")).await.unwrap();
        let mut john = store
            .insert_employee(Employee::create(&temu, details("John")))
            .await
            .unwrap();

        john.company_id = 42;
        let err = store.update_employee(&john).await.unwrap_err();
        assert!(matches!(err, StoreError::MissingCompany(42)));
    }

    #[tokio::test]
    async fn employee_can_move_between_companies() {
        let store = MemoryStore::new();
        let temu = store.insert_company(company("Temu")).await.unwrap();
        let tesla = store.insert_company(company("Tesla")).await.unwrap();
        let mut john = store
            .insert_employee(Employee::create(&temu, details("John")))
            .await
            .unwrap();

        john.assign_to(&tesla);
        store.update_employee(&john).await.unwrap();

        assert!(store.list_company_employees(temu.id).await.unwrap().is_empty());
        assert_eq!(store.list_company_employees(tesla.id).await.unwrap().len(), 1);
    }
}
