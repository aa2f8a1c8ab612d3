//! CRUD operations for departments

use std::sync::Arc;

use tracing::info;

use helpdesk_core::settings::check_name;
use helpdesk_core::{Department, EntityId, Result};
use helpdesk_store::{NewDepartment, Store};

use super::guard::{ensure_valid, ensure_valid_id, ensure_valid_with_id};
use crate::dto::department::{DepartmentRequest, DepartmentResponse};
use crate::dto::employee::EmployeeSummary;

#[derive(Clone)]
pub struct DepartmentService {
    store: Arc<Store>,
}

impl DepartmentService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn create(&self, request: DepartmentRequest) -> Result<DepartmentResponse> {
        ensure_valid(&request)?;
        let name = request.name.trim().to_string();
        check_name("name", &name)?;
        let department = self.store.insert_department(NewDepartment { name });
        info!(id = department.id, "department created");
        Ok(self.to_response(department))
    }

    pub fn get(&self, id: EntityId) -> Result<DepartmentResponse> {
        ensure_valid_id(id)?;
        let department = self.store.department(id)?;
        Ok(self.to_response(department))
    }

    pub fn get_all(&self) -> Vec<DepartmentResponse> {
        self.store
            .departments()
            .into_iter()
            .map(|department| self.to_response(department))
            .collect()
    }

    pub fn update(&self, id: EntityId, request: DepartmentRequest) -> Result<DepartmentResponse> {
        ensure_valid_with_id(&request, id)?;
        let name = request.name.trim().to_string();
        check_name("name", &name)?;
        let department = self.store.update_department(id, name)?;
        Ok(self.to_response(department))
    }

    pub fn delete(&self, id: EntityId) -> Result<String> {
        ensure_valid_id(id)?;
        self.store.delete_department(id)?;
        info!(id, "department deleted");
        Ok(format!("Department with ID {id} deleted successfully."))
    }

    fn to_response(&self, department: Department) -> DepartmentResponse {
        let employees = self
            .store
            .employees_in_department(department.id)
            .into_iter()
            .map(|employee| EmployeeSummary {
                id: employee.id,
                name: employee.name,
                email: employee.email,
            })
            .collect();
        DepartmentResponse {
            id: department.id,
            name: department.name,
            employees,
        }
    }
}
