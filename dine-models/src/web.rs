use actix_web::body::EitherBody;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder};
use serde::Deserialize;
use serde::Serialize;

/// Response code
pub enum ResponseCode {
    /// Success
    Success = 0,
}

/// Standard response structure for all REST API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct WebResponse<T> {
    /// Response code
    pub code: u16,
    /// Human-readable message describing the result
    pub message: String,
    /// Payload data
    pub data: Option<T>,
}

impl<T> WebResponse<T> {
    /// Create a success response with data
    pub fn ok(data: T) -> Self {
        Self {
            code: ResponseCode::Success as u16,
            message: "success".into(),
            data: Some(data),
        }
    }
}

/// Implement Responder for WebResponse<T> so it can be returned from actix-web handlers
impl<T> Responder for WebResponse<T>
where
    T: Serialize,
{
    type Body = EitherBody<String>;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse<EitherBody<String>> {
        match serde_json::to_string(&self) {
            Ok(body) => match HttpResponse::Ok()
                .content_type(ContentType::json())
                .message_body(body)
            {
                Ok(res) => res.map_into_left_body(),
                Err(e) => HttpResponse::from_error(e).map_into_right_body(),
            },
            Err(e) => HttpResponse::from_error(actix_web::error::JsonPayloadError::Serialize(e))
                .map_into_right_body(),
        }
    }
}
