use crate::plot::PlotError;
use crate::weather::WeatherError;
use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<PlotError> for AppError {
    fn from(err: PlotError) -> Self {
        Self::internal(err)
    }
}

impl From<WeatherError> for AppError {
    fn from(err: WeatherError) -> Self {
        match err {
            WeatherError::MissingApiKey => Self {
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: "Weather API key is not configured".to_string(),
            },
            WeatherError::Api { .. } => Self::not_found("City not found"),
            WeatherError::Transport(_) | WeatherError::Malformed(_) => Self {
                status: StatusCode::BAD_GATEWAY,
                message: "Weather service unavailable".to_string(),
            },
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
