use actix_web::{error::ResponseError, HttpResponse};
use failure::Fail;

#[derive(Fail, Debug)]
pub enum Error {
    #[fail(display = "Unsupported QR code type: {}", _0)]
    UnsupportedType(String),

    #[fail(display = "File name cannot be empty")]
    EmptyFileName,

    #[fail(display = "Please enter data for the QR code: {}", _0)]
    MissingInput(String),

    #[fail(display = "Invalid entity {}", _0)]
    InvalidEntity(String),

    #[fail(display = "Cannot encode image: {}", _0)]
    Encode(String),

    #[fail(display = "Template error")]
    Template(String),

    #[fail(display = "General error: {}", _0)]
    General(String),

    #[fail(display = "Internal error {}", _0)]
    Internal(String),
}

impl Error {
    /// User errors are rendered back into the page; everything else
    /// bubbles up as a plain HTTP error response.
    pub fn is_user_facing(&self) -> bool {
        match self {
            Error::UnsupportedType(_)
            | Error::EmptyFileName
            | Error::MissingInput(_)
            | Error::InvalidEntity(_) => true,
            _ => false,
        }
    }
}

impl From<askama::Error> for Error {
    fn from(error: askama::Error) -> Self {
        Error::Template(format!("{:?}", error))
    }
}

impl From<serde_json::error::Error> for Error {
    fn from(error: serde_json::error::Error) -> Self {
        Error::General(format!("{:?}", error))
    }
}

// impl ResponseError trait allows to convert our errors into http responses with appropriate data
impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        match *self {
            Error::UnsupportedType(ref message)
            | Error::MissingInput(ref message)
            | Error::InvalidEntity(ref message) => HttpResponse::BadRequest().json(message),
            Error::EmptyFileName => HttpResponse::BadRequest().json(s!(self)),
            Error::Encode(ref message) | Error::Template(ref message) => {
                HttpResponse::InternalServerError().json(message)
            }
            _ => HttpResponse::InternalServerError().json("general error".to_owned()),
        }
    }
}
