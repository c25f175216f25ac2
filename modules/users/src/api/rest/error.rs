use http_problem::{Problem, ValidationViolation};

use crate::domain::error::DomainError;

/// Map a domain error to an RFC 9457 Problem.
///
/// Validation maps to 422, domain rejections (shift blocked, data
/// conflicts) to 409, credential failures to 401, and store failures
/// to 500 with the detail withheld from the client.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let problem = match e {
        DomainError::NotFound { .. } => http_problem::not_found("User not found"),
        DomainError::UserDoesNotExist => http_problem::unauthorized(e.to_string()),
        DomainError::InvalidCredentials => http_problem::unauthorized(e.to_string()),
        DomainError::EmailAlreadyExists { .. } => http_problem::conflict(e.to_string()),
        DomainError::Validation { field, message } => {
            http_problem::unprocessable(message.clone()).with_errors(vec![ValidationViolation {
                field: field.clone(),
                message: message.clone(),
            }])
        }
        DomainError::ShiftBlocked { reason } => http_problem::conflict(reason.clone()),
        DomainError::Conflict => http_problem::conflict(e.to_string()),
        DomainError::Database { .. } => {
            tracing::error!(error = %e, "store failure");
            http_problem::internal_error("An internal error occurred")
        }
        DomainError::Internal { .. } => {
            tracing::error!(error = %e, "internal error");
            http_problem::internal_error("An internal error occurred")
        }
    };

    let problem = problem.with_instance(instance);
    match trace_id {
        Some(id) => problem.with_trace_id(id),
        None => problem,
    }
}

/// Implement `From<DomainError>` for Problem so `?` works in handlers.
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/users")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn validation_maps_to_422_with_violation() {
        let p = domain_error_to_problem(
            &DomainError::validation("shiftHours", "Shift Hours must be one of [0-8, 8-16, 16-24]"),
            "/users/period/start-shift",
        );
        assert_eq!(p.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(p.errors.as_ref().map(Vec::len), Some(1));
        assert_eq!(p.instance, "/users/period/start-shift");
    }

    #[test]
    fn shift_rejection_maps_to_409_with_reason() {
        let p = domain_error_to_problem(
            &DomainError::shift_blocked("Shift for today is within 16-24 hours"),
            "/users/period/start-shift",
        );
        assert_eq!(p.status, StatusCode::CONFLICT);
        assert_eq!(p.detail, "Shift for today is within 16-24 hours");
    }

    #[test]
    fn store_failure_hides_detail() {
        let p = domain_error_to_problem(&DomainError::database("connection refused"), "/users");
        assert_eq!(p.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!p.detail.contains("connection refused"));
    }

    #[test]
    fn credential_failures_map_to_401() {
        let p = domain_error_to_problem(&DomainError::InvalidCredentials, "/users/login");
        assert_eq!(p.status, StatusCode::UNAUTHORIZED);
        let p = domain_error_to_problem(&DomainError::UserDoesNotExist, "/users/login");
        assert_eq!(p.status, StatusCode::UNAUTHORIZED);
    }
}
