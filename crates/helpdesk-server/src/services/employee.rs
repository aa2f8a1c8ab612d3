//! CRUD operations for employees

use std::sync::Arc;

use tracing::info;

use helpdesk_core::settings::{check_email, check_name};
use helpdesk_core::{Employee, EntityId, Result};
use helpdesk_store::{NewEmployee, Store};

use super::guard::{ensure_valid, ensure_valid_id, ensure_valid_with_id};
use crate::dto::department::DepartmentSummary;
use crate::dto::employee::{EmployeeRequest, EmployeeResponse};

#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<Store>,
}

impl EmployeeService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: EmployeeRequest) -> Result<EmployeeResponse> {
        ensure_valid(&request)?;
        let name = request.name.trim().to_string();
        let email = request.email.trim().to_string();
        check_name("name", &name)?;
        check_email("email", &email)?;
        let employee = self.store.insert_employee(NewEmployee {
            name,
            email,
            department_id: request.department_id,
        })?;
        info!(id = employee.id, "employee created");
        Ok(self.to_response(employee))
    }

    pub fn get(&self, id: EntityId) -> Result<EmployeeResponse> {
        ensure_valid_id(id)?;
        let employee = self.store.employee(id)?;
        Ok(self.to_response(employee))
    }

    pub fn get_all(&self) -> Vec<EmployeeResponse> {
        self.store
            .employees()
            .into_iter()
            .map(|employee| self.to_response(employee))
            .collect()
    }

    pub fn update(&self, id: EntityId, request: EmployeeRequest) -> Result<EmployeeResponse> {
        ensure_valid_with_id(&request, id)?;
        let name = request.name.trim().to_string();
        let email = request.email.trim().to_string();
        check_name("name", &name)?;
        check_email("email", &email)?;
        let employee = self.store.update_employee(id, name, email)?;
        Ok(self.to_response(employee))
    }

    pub fn delete(&self, id: EntityId) -> Result<String> {
        ensure_valid_id(id)?;
        self.store.delete_employee(id)?;
        info!(id, "employee deleted");
        Ok(format!("Employee with ID {id} deleted successfully."))
    }

    fn to_response(&self, employee: Employee) -> EmployeeResponse {
        let department = self
            .store
            .department(employee.department_id)
            .ok()
            .map(|department| DepartmentSummary {
                id: department.id,
                name: department.name,
            });
        EmployeeResponse {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            department,
        }
    }
}
