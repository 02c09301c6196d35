// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Router harness shared by the API tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header}
};
use company_registry::{api, repository::MemoryStore};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const MORE_INFO: &str = "Please look into api/doc for more information.";

pub const COMPANY_MISSING: &str =
    "This value should not be blank. If you provided company id, then such company does not exist.";

/// Full application over a fresh in-memory store.
pub struct TestApp {
    router: Router
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            router: api::router(Arc::new(MemoryStore::new()))
        }
    }

    /// Send a request with an optional raw body. Empty responses decode to
    /// `Value::Null`.
    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if body.is_some() {
            request = request.header(header::CONTENT_TYPE, "application/json");
        }
        let request = request
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(&body.to_string())).await
    }

    pub async fn put(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(&body.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Create a company and return its id.
    pub async fn create_company(&self, body: &Value) -> i64 {
        let (status, json) = self.post("/api/companies", body).await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json["id"].as_i64().unwrap()
    }

    /// Create an employee and return its id.
    pub async fn create_employee(&self, body: &Value) -> i64 {
        let (status, json) = self.post("/api/employees", body).await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json["id"].as_i64().unwrap()
    }
}

pub fn company_payload() -> Value {
    json!({
        "name": "Temu",
        "nip": "1234567890",
        "address": "Lisi Ogon",
        "city": "Lublin",
        "zipCode": "25-555"
    })
}

pub fn employee_payload(company: i64) -> Value {
    json!({
        "company": company,
        "firstName": "Miller",
        "lastName": "Douglas",
        "email": "miller.douglas@gmail.com",
        "phoneNumber": "+48 675 888 906"
    })
}

/// Expected body of a 400 response.
pub fn bad_request(violations: Value) -> Value {
    json!({
        "developerMessage": violations,
        "userMessage": violations,
        "errorCode": 400,
        "moreInfo": MORE_INFO
    })
}

/// Expected body of a 404 response.
pub fn not_found(message: &str) -> Value {
    json!({
        "developerMessage": message,
        "userMessage": message,
        "errorCode": 404,
        "moreInfo": MORE_INFO
    })
}
