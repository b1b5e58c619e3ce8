use serde::Serialize;

/// Success envelope: `{"status":"success","data":...}`.
#[derive(Debug, Serialize)]
pub struct ApiData<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> ApiData<T> {
    pub fn new(data: T) -> Self {
        Self { status: "success", data }
    }
}

/// Success envelope without a data payload: `{"status":"success","message":...}`.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub status: &'static str,
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self { status: "success", message: message.into() }
    }
}
