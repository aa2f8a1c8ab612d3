//! Employee request/response shapes

use helpdesk_core::{required_fields, EntityId};
use serde::{Deserialize, Serialize};

use super::department::DepartmentSummary;

/// Payload for creating or updating an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub name: String,
    pub email: String,
    pub department_id: EntityId,
}

required_fields!(EmployeeRequest {
    name => "Employee name is required.",
    email => "Employee email is required.",
});

/// An employee with their department attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub department: Option<DepartmentSummary>,
}

/// Minimal employee reference embedded in other responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub id: EntityId,
    pub name: String,
    pub email: String,
}
