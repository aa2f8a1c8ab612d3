//! Department request/response shapes

use helpdesk_core::{required_fields, EntityId};
use serde::{Deserialize, Serialize};

use super::employee::EmployeeSummary;

/// Payload for creating or renaming a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRequest {
    pub name: String,
}

required_fields!(DepartmentRequest {
    name,
});

/// A department with the employees that belong to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub id: EntityId,
    pub name: String,
    pub employees: Vec<EmployeeSummary>,
}

/// Minimal department reference embedded in other responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub id: EntityId,
    pub name: String,
}
