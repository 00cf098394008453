use rocket::response::{Responder, Response};
use rocket::{
    http::{ContentType, Status},
    response,
    serde::json::Json,
    Request,
};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ApiError {
    err: String,
}

#[derive(Debug)]
pub(crate) struct ErrorResponse {
    json: Json<ApiError>,
    status: Status,
}

impl ErrorResponse {
    pub(crate) fn new(status: Status, err: String) -> ErrorResponse {
        ErrorResponse {
            json: Json(ApiError { err }),
            status,
        }
    }
}

impl<'r> Responder<'r, 'r> for ErrorResponse {
    fn respond_to(self, req: &'r Request) -> response::Result<'r> {
        Response::build_from(self.json.respond_to(req)?)
            .status(self.status)
            .header(ContentType::JSON)
            .ok()
    }
}
