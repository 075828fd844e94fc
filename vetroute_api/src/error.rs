use aide::OperationOutput;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use vetroute_planner::planner::planning_session::PlanningError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
}

impl From<PlanningError> for ApiError {
    fn from(error: PlanningError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
        }
    }
}

impl OperationOutput for ApiError {
    type Inner = String;
}

#[cfg(test)]
mod tests {
    use vetroute_planner::planner::planning_session::PlanningState;

    use super::*;

    #[test]
    fn test_planning_error_is_bad_request() {
        let error = ApiError::from(PlanningError::InvalidTransition {
            state: PlanningState::Requesting,
            action: "plan",
        });

        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_clinic_is_bad_request() {
        let error = ApiError::from(PlanningError::MissingClinic);

        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
