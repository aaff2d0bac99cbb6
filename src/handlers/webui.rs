use crate::app::AppState;
use crate::defaults::Defaults;
use crate::errors::*;
use crate::filters;
use crate::generator;
use crate::handlers::{AlertColor, TemplateIntoResponse};
use crate::models::{
    ErrorCorrection, LogoOptions, OutputFormat, OutputOptions, QrPayload, QrRequest, QrType,
    StyleOptions, WifiSecurity,
};
use actix_web::{Form, HttpRequest, HttpResponse};
use askama::Template;
use data_encoding::BASE64;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    defaults: &'a Defaults,
}

pub fn index(req: HttpRequest<AppState>) -> Result<HttpResponse, Error> {
    IndexTemplate {
        defaults: &req.state().defaults,
    }
    .into_response()
}

/// The raw form submission. Checkboxes arrive as "on" or not at all,
/// every text input arrives even when its section is collapsed, and the
/// logo travels as a base64 data URL filled in by the page script.
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    pub qr_type: String,
    #[serde(default)]
    pub text_url: String,
    #[serde(default)]
    pub ssid: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_wifi_type")]
    pub wifi_type: String,
    #[serde(default)]
    pub hidden_network: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub sms_body: String,
    pub color: String,
    pub bg_color: String,
    pub box_size: u32,
    pub border: u32,
    pub version: u8,
    #[serde(default)]
    pub fit: Option<String>,
    pub error_correction: String,
    #[serde(default)]
    pub file_name: String,
    pub file_type: String,
    #[serde(default)]
    pub include_logo: Option<String>,
    #[serde(default)]
    pub logo_data: String,
    #[serde(default = "default_logo_size")]
    pub logo_size_percentage: u32,
    #[serde(default = "default_logo_transparency")]
    pub logo_transparency: u32,
}

fn default_wifi_type() -> String {
    s!("None")
}

fn default_logo_size() -> u32 {
    20
}

fn default_logo_transparency() -> u32 {
    100
}

impl GenerateForm {
    pub fn to_request(&self) -> Result<QrRequest, Error> {
        let payload = match QrType::parse(&self.qr_type)? {
            QrType::Text => QrPayload::Text {
                content: self.text_url.clone(),
            },
            QrType::Wifi => QrPayload::Wifi {
                ssid: self.ssid.clone(),
                password: self.password.clone(),
                security: WifiSecurity::from_str(&self.wifi_type)
                    .map_err(|_| Error::InvalidEntity(format!("wifi type {}", self.wifi_type)))?,
                hidden: self.hidden_network.is_some(),
            },
            QrType::Email => QrPayload::Email {
                address: self.email.clone(),
                subject: self.subject.clone(),
                body: self.body.clone(),
            },
            QrType::Sms => QrPayload::Sms {
                phone_number: self.phone_number.clone(),
                body: self.sms_body.clone(),
            },
        };
        let style = StyleOptions {
            foreground: self.color.parse()?,
            background: self.bg_color.parse()?,
            box_size: self.box_size,
            border: self.border,
            version: self.version,
            fit: self.fit.is_some(),
            error_correction: ErrorCorrection::from_str(&self.error_correction).map_err(|_| {
                Error::InvalidEntity(format!("error correction {}", self.error_correction))
            })?,
        };
        let logo = if self.include_logo.is_some() {
            decode_logo(&self.logo_data).map(|image| LogoOptions {
                image,
                size_percentage: self.logo_size_percentage,
                transparency_percentage: self.logo_transparency,
            })
        } else {
            None
        };
        Ok(QrRequest {
            payload,
            style,
            logo,
            output: OutputOptions {
                file_name: self.file_name.clone(),
                format: OutputFormat::parse(&self.file_type)?,
            },
        })
    }
}

/// No upload means no logo and no warning. Anything else is handed to
/// the compositor, which turns undecodable bytes into a warning.
fn decode_logo(data: &str) -> Option<Vec<u8>> {
    let data = data.trim();
    if data.is_empty() {
        return None;
    }
    let encoded = data.rsplit(',').next().unwrap_or(data);
    match BASE64.decode(encoded.as_bytes()) {
        Ok(bytes) => Some(bytes),
        Err(_) => Some(data.as_bytes().to_vec()),
    }
}

pub struct Alert {
    pub color: &'static str,
    pub message: String,
}

pub struct Hidden {
    pub name: &'static str,
    pub value: String,
}

impl Hidden {
    fn new(name: &'static str, value: String) -> Self {
        Hidden { name, value }
    }
}

fn hidden_fields(form: &GenerateForm) -> Vec<Hidden> {
    let mut fields = vec![
        Hidden::new("qr_type", form.qr_type.clone()),
        Hidden::new("text_url", form.text_url.clone()),
        Hidden::new("ssid", form.ssid.clone()),
        Hidden::new("password", form.password.clone()),
        Hidden::new("wifi_type", form.wifi_type.clone()),
        Hidden::new("email", form.email.clone()),
        Hidden::new("subject", form.subject.clone()),
        Hidden::new("body", form.body.clone()),
        Hidden::new("phone_number", form.phone_number.clone()),
        Hidden::new("sms_body", form.sms_body.clone()),
        Hidden::new("color", form.color.clone()),
        Hidden::new("bg_color", form.bg_color.clone()),
        Hidden::new("box_size", s!(form.box_size)),
        Hidden::new("border", s!(form.border)),
        Hidden::new("version", s!(form.version)),
        Hidden::new("error_correction", form.error_correction.clone()),
        Hidden::new("file_name", form.file_name.clone()),
        Hidden::new("file_type", form.file_type.clone()),
        Hidden::new("logo_data", form.logo_data.clone()),
        Hidden::new("logo_size_percentage", s!(form.logo_size_percentage)),
        Hidden::new("logo_transparency", s!(form.logo_transparency)),
    ];
    if form.hidden_network.is_some() {
        fields.push(Hidden::new("hidden_network", s!("on")));
    }
    if form.fit.is_some() {
        fields.push(Hidden::new("fit", s!("on")));
    }
    if form.include_logo.is_some() {
        fields.push(Hidden::new("include_logo", s!("on")));
    }
    fields
}

#[derive(Template)]
#[template(path = "result.html")]
struct ResultTemplate<'a> {
    alerts: &'a [Alert],
    preview: &'a str,
    download_name: &'a str,
    fields: &'a [Hidden],
}

pub fn generate(form: Form<GenerateForm>) -> Result<HttpResponse, Error> {
    let form = form.into_inner();
    let mut alerts = Vec::new();
    let mut preview = String::new();
    let mut download_name = String::new();

    let outcome = form
        .to_request()
        .and_then(|request| generator::generate(&request).map(|g| (request, g)));
    match outcome {
        Ok((request, generated)) => {
            for warning in &generated.warnings {
                alerts.push(Alert {
                    color: warning.color(),
                    message: s!(warning),
                });
            }
            download_name = generated.image.file_name(&request.output.file_name);
            preview = format!(
                "data:{};base64,{}",
                generated.image.mime_type(),
                BASE64.encode(&generated.image.bytes)
            );
        }
        Err(e) => {
            if !e.is_user_facing() {
                return Err(e);
            }
            alerts.push(Alert {
                color: e.color(),
                message: s!(e),
            });
        }
    }

    ResultTemplate {
        alerts: &alerts,
        preview: &preview,
        download_name: &download_name,
        fields: &hidden_fields(&form),
    }
    .into_response()
}

pub fn download(form: Form<GenerateForm>) -> Result<HttpResponse, Error> {
    let form = form.into_inner();
    let request = form.to_request()?;
    let generated = generator::generate(&request)?;
    Ok(HttpResponse::Ok()
        .content_type(generated.image.mime_type())
        .header(
            "content-disposition",
            format!(
                "attachment; filename=\"{}\"",
                generated.image.file_name(&request.output.file_name)
            ),
        )
        .body(generated.image.bytes))
}
