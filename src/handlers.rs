use crate::errors::*;
use crate::extractor::SimpleJson;
use crate::generator;
use crate::models::{QrRequest, Warning};
use actix_web::{FutureResponse, HttpResponse};
use askama::Template;
use futures::future::ok;
use mime_guess::get_mime_type;

pub mod webui;

/// JSON entry point: the same stateless pipeline the form drives, for
/// programmatic callers. Returns the image bytes ready for download;
/// warnings are carried in a response header so the body stays raw.
pub fn generate_qrcode(request: SimpleJson<QrRequest>) -> Result<HttpResponse, Error> {
    let request = request.into_inner();
    let generated = generator::generate(&request)?;
    let mut builder = HttpResponse::Ok();
    builder.content_type(generated.image.mime_type()).header(
        "content-disposition",
        format!(
            "attachment; filename=\"{}\"",
            generated.image.file_name(&request.output.file_name)
        ),
    );
    for warning in &generated.warnings {
        builder.header("x-qrforge-warning", s!(warning));
    }
    Ok(builder.body(generated.image.bytes))
}

pub trait TemplateIntoResponse {
    fn into_response(&self) -> Result<HttpResponse, Error>;
    fn into_future(&self) -> FutureResponse<HttpResponse, Error>;
}

impl<T: Template> TemplateIntoResponse for T {
    fn into_response(&self) -> Result<HttpResponse, Error> {
        let rsp = self.render().map_err(|e| Error::Template(s!(e)))?;
        let ctype = get_mime_type(T::extension().unwrap_or("txt")).to_string();
        Ok(HttpResponse::Ok().content_type(ctype.as_str()).body(rsp))
    }
    fn into_future(&self) -> FutureResponse<HttpResponse, Error> {
        Box::new(ok(self.into_response().into()))
    }
}

pub trait AlertColor {
    fn color(&self) -> &'static str;
}

impl AlertColor for Warning {
    fn color(&self) -> &'static str {
        match self {
            Warning::EncryptionUnset | Warning::LogoDiscarded(_) => "warning",
        }
    }
}

impl AlertColor for Error {
    fn color(&self) -> &'static str {
        match self {
            Error::MissingInput(_) => "warning",
            _ => "danger",
        }
    }
}
