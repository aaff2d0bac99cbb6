use crate::errors::Error;
use serde::Deserialize;
use std::fs;

/// Pre-selections and placeholders for every form field, read once at
/// startup from a flat JSON document and never written back. Keys the
/// file does not carry fall back to the built-in values below.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub qr_type: String,
    pub text_url: String,
    pub text_url_placeholder: String,
    pub ssid: String,
    pub ssid_placeholder: String,
    pub password: String,
    pub password_placeholder: String,
    pub wifi_type: String,
    pub hidden_network: bool,
    pub email: String,
    pub email_placeholder: String,
    pub subject: String,
    pub subject_placeholder: String,
    pub body: String,
    pub body_placeholder: String,
    pub phone_number: String,
    pub phone_number_placeholder: String,
    pub sms_body: String,
    pub sms_body_placeholder: String,
    pub color: String,
    pub bg_color: String,
    pub box_size: u32,
    pub border: u32,
    pub version: u8,
    pub fit: bool,
    pub error_correction: String,
    pub file_name: String,
    pub file_name_placeholder: String,
    pub file_type: String,
    pub include_logo: bool,
    pub logo_size_percentage: u32,
    pub logo_transparency: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            qr_type: s!("Text"),
            text_url: String::new(),
            text_url_placeholder: s!("https://example.com"),
            ssid: String::new(),
            ssid_placeholder: s!("Network name"),
            password: String::new(),
            password_placeholder: s!("Network password"),
            wifi_type: s!("WPA2"),
            hidden_network: false,
            email: String::new(),
            email_placeholder: s!("someone@example.com"),
            subject: String::new(),
            subject_placeholder: s!("Subject"),
            body: String::new(),
            body_placeholder: s!("Message"),
            phone_number: String::new(),
            phone_number_placeholder: s!("+15551234567"),
            sms_body: String::new(),
            sms_body_placeholder: s!("Message"),
            color: s!("#000000"),
            bg_color: s!("#ffffff"),
            box_size: 10,
            border: 4,
            version: 1,
            fit: true,
            error_correction: s!("H"),
            file_name: s!("qr_code"),
            file_name_placeholder: s!("File name without extension"),
            file_type: s!("PNG"),
            include_logo: false,
            logo_size_percentage: 20,
            logo_transparency: 100,
        }
    }
}

impl Defaults {
    pub fn load(path: &str) -> Result<Defaults, Error> {
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::General(format!("Cannot read defaults file '{}': {}", path, e)))?;
        Ok(serde_json::from_str(&raw)?)
    }
}
