// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;
use serde_json::json;

/// Serialize `value` as the JSON body of a `status` response.
/// Every Data API response may be read cross-origin.
pub fn json_response<T: Serialize + ?Sized>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|_| ServerError::InternalError)?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// `{error: string}` body for a failed API call. Database details stay in the log.
pub fn json_error_response(err: &ServerError) -> Response {
    let message = match err {
        ServerError::NotFound => "Not found".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::DbError(_) | ServerError::InternalError => {
            "Internal server error".to_string()
        }
    };

    json_response(err.status(), &json!({ "error": message }))
        .unwrap_or_else(|_| Response::new(Body::from(r#"{"error":"Internal server error"}"#)))
}
