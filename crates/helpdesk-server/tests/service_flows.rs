//! End-to-end CRUD flows through the service layer over a fresh store
//!
//! These tests exercise the same paths the HTTP handlers use: validation
//! first, then the store with its referential policy.

use std::sync::Arc;

use helpdesk_core::{Error, EntityKind};
use helpdesk_server::dto::department::DepartmentRequest;
use helpdesk_server::dto::employee::EmployeeRequest;
use helpdesk_server::dto::support_agent::SupportAgentRequest;
use helpdesk_server::dto::ticket::{TicketCommentInline, TicketCreateRequest, TicketUpdateRequest};
use helpdesk_server::dto::ticket_category::TicketCategoryRequest;
use helpdesk_server::dto::ticket_comment::TicketCommentRequest;
use helpdesk_server::dto::ticket_history::TicketHistoryCreateRequest;
use helpdesk_server::dto::ticket_priority::TicketPriorityRequest;
use helpdesk_server::dto::ticket_status::TicketStatusRequest;
use helpdesk_server::state::AppState;
use helpdesk_store::Store;

fn fresh_state() -> AppState {
    AppState::new(Arc::new(Store::new()))
}

/// Seed one row in every lookup table plus a department and an employee.
fn seeded_state() -> AppState {
    let state = fresh_state();
    state
        .departments
        .create(DepartmentRequest {
            name: "Operations".to_string(),
        })
        .unwrap();
    state
        .employees
        .create(EmployeeRequest {
            name: "Iva Maron".to_string(),
            email: "iva.maron@example.com".to_string(),
            department_id: 1,
        })
        .unwrap();
    state
        .support_agents
        .create(SupportAgentRequest {
            name: "Pavel Rinn".to_string(),
            specialization: "Printers".to_string(),
        })
        .unwrap();
    state
        .ticket_statuses
        .create(TicketStatusRequest {
            name: "Open".to_string(),
        })
        .unwrap();
    state
        .ticket_priorities
        .create(TicketPriorityRequest {
            name: "Medium".to_string(),
        })
        .unwrap();
    state
        .ticket_categories
        .create(TicketCategoryRequest {
            name: "Hardware".to_string(),
        })
        .unwrap();
    state
}

fn submit_ticket(state: &AppState) -> helpdesk_core::EntityId {
    state
        .tickets
        .create(TicketCreateRequest {
            title: "Printer jams daily".to_string(),
            description: "Tray two keeps jamming".to_string(),
            employee_id: 1,
            support_agent_id: Some(1),
            ticket_category_id: 1,
            ticket_status_id: 1,
            ticket_priority_id: 1,
            comments: vec![TicketCommentInline {
                content: "Happens mostly in the morning".to_string(),
                author_name: Some("Iva Maron".to_string()),
            }],
        })
        .unwrap()
        .id
}

#[test]
fn department_crud_round_trip() {
    let state = fresh_state();
    let created = state
        .departments
        .create(DepartmentRequest {
            name: "  Finance  ".to_string(),
        })
        .unwrap();
    assert_eq!(created.id, 1);
    // names are trimmed before entity construction
    assert_eq!(created.name, "Finance");

    let fetched = state.departments.get(created.id).unwrap();
    assert_eq!(fetched.name, "Finance");
    assert!(fetched.employees.is_empty());

    let updated = state
        .departments
        .update(
            created.id,
            DepartmentRequest {
                name: "Accounting".to_string(),
            },
        )
        .unwrap();
    assert_eq!(updated.name, "Accounting");

    let message = state.departments.delete(created.id).unwrap();
    assert_eq!(message, "Department with ID 1 deleted successfully.");
    assert!(matches!(
        state.departments.get(created.id),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn empty_department_name_is_rejected_by_the_engine() {
    let state = fresh_state();
    let err = state
        .departments
        .create(DepartmentRequest {
            name: String::new(),
        })
        .unwrap_err();
    assert!(err
        .to_string()
        .contains("name is required in DepartmentRequest."));
}

#[test]
fn employee_custom_messages_surface_verbatim() {
    let state = seeded_state();
    let err = state
        .employees
        .create(EmployeeRequest {
            name: "   ".to_string(),
            email: "x@example.com".to_string(),
            department_id: 1,
        })
        .unwrap_err();
    assert!(err.to_string().contains("Employee name is required."));

    let err = state
        .employees
        .create(EmployeeRequest {
            name: "Rado Vesel".to_string(),
            email: " ".to_string(),
            department_id: 1,
        })
        .unwrap_err();
    assert!(err.to_string().contains("Employee email is required."));
}

#[test]
fn malformed_email_is_a_constraint_violation() {
    let state = seeded_state();
    let err = state
        .employees
        .create(EmployeeRequest {
            name: "Rado Vesel".to_string(),
            email: "not-an-address".to_string(),
            department_id: 1,
        })
        .unwrap_err();
    assert!(matches!(err, Error::Constraint { .. }));
}

#[test]
fn name_length_bounds_apply_to_named_entities() {
    let state = fresh_state();
    assert!(matches!(
        state.departments.create(DepartmentRequest {
            name: "IT".to_string(),
        }),
        Err(Error::Constraint { .. })
    ));
    assert!(matches!(
        state.ticket_categories.create(TicketCategoryRequest {
            name: "x".repeat(31),
        }),
        Err(Error::Constraint { .. })
    ));
}

#[test]
fn update_with_non_positive_id_fails_before_anything_else() {
    let state = fresh_state();
    for id in [0, -5] {
        let err = state
            .departments
            .update(
                id,
                DepartmentRequest {
                    name: "Operations".to_string(),
                },
            )
            .unwrap_err();
        assert!(err.to_string().contains("Id must be greater than zero."));
    }
}

#[test]
fn failed_update_payload_reports_the_route_id() {
    let state = seeded_state();
    let ticket_id = submit_ticket(&state);
    let err = state
        .tickets
        .update(
            ticket_id,
            TicketUpdateRequest {
                title: String::new(),
                description: "still broken".to_string(),
            },
        )
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Title is required."));
    assert!(message.ends_with(&format!("(Id: {ticket_id})")));
}

#[test]
fn ticket_create_joins_everything_into_the_detail_response() {
    let state = seeded_state();
    let ticket_id = submit_ticket(&state);
    state
        .ticket_history
        .create(TicketHistoryCreateRequest {
            change_description: "Ticket opened".to_string(),
            timestamp: None,
            ticket_id,
        })
        .unwrap();

    let detail = state.tickets.get(ticket_id).unwrap();
    assert_eq!(detail.title, "Printer jams daily");
    assert_eq!(detail.employee.as_ref().unwrap().name, "Iva Maron");
    assert_eq!(
        detail
            .employee
            .as_ref()
            .unwrap()
            .department
            .as_ref()
            .unwrap()
            .name,
        "Operations"
    );
    assert_eq!(detail.support_agent.as_ref().unwrap().name, "Pavel Rinn");
    assert_eq!(detail.status.as_ref().unwrap().name, "Open");
    assert_eq!(detail.priority.as_ref().unwrap().name, "Medium");
    assert_eq!(detail.category.as_ref().unwrap().name, "Hardware");
    assert_eq!(detail.history.len(), 1);

    // the inline comment landed on the ticket
    let comments = state.ticket_comments.get_all();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].ticket_name.as_deref(), Some("Printer jams daily"));
}

#[test]
fn ticket_create_with_missing_category_fails_validation_first() {
    let state = seeded_state();
    let err = state
        .tickets
        .create(TicketCreateRequest {
            title: "No category".to_string(),
            description: "missing lookup".to_string(),
            employee_id: 1,
            support_agent_id: None,
            ticket_category_id: 0,
            ticket_status_id: 1,
            ticket_priority_id: 1,
            comments: Vec::new(),
        })
        .unwrap_err();
    assert!(err
        .to_string()
        .contains("ticket_category_id is required in TicketCreateRequest."));
}

#[test]
fn ticket_create_with_dangling_employee_reports_not_found() {
    let state = seeded_state();
    let err = state
        .tickets
        .create(TicketCreateRequest {
            title: "Ghost reporter".to_string(),
            description: "employee does not exist".to_string(),
            employee_id: 42,
            support_agent_id: None,
            ticket_category_id: 1,
            ticket_status_id: 1,
            ticket_priority_id: 1,
            comments: Vec::new(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        Error::NotFound {
            entity: EntityKind::Employee,
            id: 42
        }
    ));
}

#[test]
fn department_with_employees_cannot_be_deleted() {
    let state = seeded_state();
    let err = state.departments.delete(1).unwrap_err();
    assert!(matches!(
        err,
        Error::ReferentialConflict {
            parent: EntityKind::Department,
            child: EntityKind::Employee,
            ..
        }
    ));
    // both rows intact
    assert!(state.departments.get(1).is_ok());
    assert!(state.employees.get(1).is_ok());

    // once the employee moves out, the delete goes through
    state.employees.delete(1).unwrap();
    assert!(state.departments.delete(1).is_ok());
}

#[test]
fn deleting_an_assigned_agent_detaches_their_tickets() {
    let state = seeded_state();
    let ticket_id = submit_ticket(&state);
    assert!(state.tickets.get(ticket_id).unwrap().support_agent.is_some());

    let message = state.support_agents.delete(1).unwrap();
    assert_eq!(message, "Support Agent with ID 1 deleted successfully.");

    let detail = state.tickets.get(ticket_id).unwrap();
    assert!(detail.support_agent.is_none());
}

#[test]
fn lookup_rows_are_blocked_while_tickets_reference_them() {
    let state = seeded_state();
    submit_ticket(&state);
    assert!(matches!(
        state.ticket_statuses.delete(1),
        Err(Error::ReferentialConflict { .. })
    ));
    assert!(matches!(
        state.ticket_priorities.delete(1),
        Err(Error::ReferentialConflict { .. })
    ));
    assert!(matches!(
        state.ticket_categories.delete(1),
        Err(Error::ReferentialConflict { .. })
    ));
    assert!(matches!(
        state.employees.delete(1),
        Err(Error::ReferentialConflict { .. })
    ));
}

#[test]
fn deleting_a_ticket_takes_its_comments_and_history_along() {
    let state = seeded_state();
    let ticket_id = submit_ticket(&state);
    state
        .ticket_history
        .create(TicketHistoryCreateRequest {
            change_description: "Assigned to Pavel".to_string(),
            timestamp: None,
            ticket_id,
        })
        .unwrap();

    state.tickets.delete(ticket_id).unwrap();

    assert!(state.ticket_comments.get_all().is_empty());
    assert!(state.ticket_history.get_all().is_empty());
    // parents survive the cascade
    assert!(state.employees.get(1).is_ok());
    assert!(state.ticket_statuses.get(1).is_ok());
}

#[test]
fn status_update_reports_old_and_new_versions() {
    let state = seeded_state();
    let response = state
        .ticket_statuses
        .update(
            1,
            TicketStatusRequest {
                name: "Resolved".to_string(),
            },
        )
        .unwrap();
    assert_eq!(response.old_version.name, "Open");
    assert_eq!(response.new_version.name, "Resolved");
    assert_eq!(response.old_version.id, response.new_version.id);
}

#[test]
fn comment_crud_and_overlong_content() {
    let state = seeded_state();
    let ticket_id = submit_ticket(&state);

    let err = state
        .ticket_comments
        .create(TicketCommentRequest {
            ticket_id,
            content: "x".repeat(301),
            author_name: None,
        })
        .unwrap_err();
    assert!(matches!(err, Error::Constraint { .. }));

    let comment = state
        .ticket_comments
        .create(TicketCommentRequest {
            ticket_id,
            content: "Swapped the tray".to_string(),
            author_name: Some("Pavel Rinn".to_string()),
        })
        .unwrap();
    assert_eq!(comment.ticket_name.as_deref(), Some("Printer jams daily"));

    let message = state.ticket_comments.delete(comment.id).unwrap();
    assert!(message.contains("deleted successfully"));
}

#[test]
fn history_timestamp_is_stamped_or_preserved() {
    let state = seeded_state();
    let ticket_id = submit_ticket(&state);

    let stamped = state
        .ticket_history
        .create(TicketHistoryCreateRequest {
            change_description: "Opened".to_string(),
            timestamp: None,
            ticket_id,
        })
        .unwrap();
    assert_ne!(stamped.timestamp, chrono::DateTime::<chrono::Utc>::default());

    let supplied = chrono::DateTime::parse_from_rfc3339("2024-07-01T10:00:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);
    let kept = state
        .ticket_history
        .create(TicketHistoryCreateRequest {
            change_description: "Backfilled".to_string(),
            timestamp: Some(supplied),
            ticket_id,
        })
        .unwrap();
    assert_eq!(kept.timestamp, supplied);
}

#[test]
fn sparse_support_agent_requests_pass_the_engine_but_not_the_schema() {
    let state = fresh_state();
    // no required markers on the agent request, so the engine passes and the
    // schema's name bound is what rejects it
    let err = state
        .support_agents
        .create(SupportAgentRequest {
            name: String::new(),
            specialization: String::new(),
        })
        .unwrap_err();
    assert!(matches!(err, Error::Constraint { .. }));
}
