pub mod admin;
pub mod search;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use t9suggest::{keypad::KeypadError, models::ApiConfig, SuggestionEngine};

/// Application context passed to all handlers. The engine is read-only once
/// built, so it's shared across requests without locking.
pub struct Ctx {
    pub engine: Arc<SuggestionEngine>,
    pub consts: Consts,
}

/// Application constants.
#[derive(Clone, Serialize)]
pub struct Consts {
    pub version: String,
    pub limits: ApiConfig,
}

/// API response wrapper.
#[derive(Serialize)]
pub struct ApiResp<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T: Serialize> IntoResponse for ApiResp<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub fn json<T: Serialize>(data: T) -> ApiResp<T> {
    ApiResp {
        data: Some(data),
        message: None,
    }
}

/// API error type.
#[derive(Debug)]
pub struct ApiErr {
    pub message: String,
    pub status: StatusCode,
}

impl ApiErr {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

/// Words that can't be keypad encoded are client errors.
impl From<KeypadError> for ApiErr {
    fn from(e: KeypadError) -> Self {
        Self::new(e.to_string(), StatusCode::BAD_REQUEST)
    }
}

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        let json = Json(ApiResp::<()> {
            data: None,
            message: Some(self.message),
        });
        (self.status, json).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiErr>;

#[cfg(test)]
pub(crate) fn test_ctx(corpus: &[&str], limits: ApiConfig) -> Arc<Ctx> {
    use t9suggest::DictionaryIndex;

    Arc::new(Ctx {
        engine: Arc::new(SuggestionEngine::new(DictionaryIndex::build(corpus))),
        consts: Consts {
            version: "test".to_string(),
            limits,
        },
    })
}
