use http_problem::{Problem, ValidationViolation};

use crate::domain::error::DomainError;

/// Map a domain error to an RFC 9457 Problem.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string());

    let problem = match e {
        DomainError::NotFound { .. } => http_problem::not_found("Sample not found"),
        DomainError::Validation { field, message } => {
            http_problem::unprocessable(message.clone()).with_errors(vec![ValidationViolation {
                field: field.clone(),
                message: message.clone(),
            }])
        }
        DomainError::Database { .. } => {
            tracing::error!(error = %e, "store failure");
            http_problem::internal_error("An internal error occurred")
        }
    };

    let problem = problem.with_instance(instance);
    match trace_id {
        Some(id) => problem.with_trace_id(id),
        None => problem,
    }
}

impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/samples")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn not_found_maps_to_404() {
        let p = domain_error_to_problem(&DomainError::not_found(9), "/samples/9");
        assert_eq!(p.status, StatusCode::NOT_FOUND);
        assert_eq!(p.instance, "/samples/9");
    }

    #[test]
    fn empty_update_maps_to_422() {
        let p = domain_error_to_problem(
            &DomainError::validation("body", "Update requires a field."),
            "/samples/9",
        );
        assert_eq!(p.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(p.detail, "Update requires a field.");
    }

    #[test]
    fn store_failure_hides_detail() {
        let p = domain_error_to_problem(&DomainError::database("connection refused"), "/samples");
        assert_eq!(p.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!p.detail.contains("connection refused"));
    }
}
