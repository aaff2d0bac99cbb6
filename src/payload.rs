use crate::errors::Error;
use crate::models::{QrPayload, Warning, WifiSecurity};

impl QrPayload {
    /// The one field a scanner cannot act without. Optional fields
    /// default to the empty string and are rendered as-is.
    pub fn validate(&self) -> Result<(), Error> {
        let missing = match self {
            QrPayload::Text { content } if content.is_empty() => Some("text or URL"),
            QrPayload::Wifi { ssid, .. } if ssid.is_empty() => Some("SSID"),
            QrPayload::Email { address, .. } if address.is_empty() => Some("email address"),
            QrPayload::Sms { phone_number, .. } if phone_number.is_empty() => {
                Some("phone number")
            }
            _ => None,
        };
        match missing {
            Some(field) => Err(Error::MissingInput(s!(field))),
            None => Ok(()),
        }
    }

    /// Renders the literal string a QR scanner expects for this payload.
    ///
    /// Reserved characters are inserted verbatim; mailto:/smsto: bodies
    /// are not URL-encoded, matching what the deployed scanners were fed
    /// before.
    pub fn scan_string(&self) -> (String, Vec<Warning>) {
        let mut warnings = Vec::new();
        let data = match self {
            QrPayload::Text { content } => content.clone(),
            QrPayload::Wifi {
                ssid,
                password,
                security,
                hidden,
            } => {
                let hidden = if *hidden { "TRUE" } else { "FALSE" };
                if *security == WifiSecurity::None {
                    warnings.push(Warning::EncryptionUnset);
                    format!("WIFI:S:{};P:{};H:{};;", ssid, password, hidden)
                } else {
                    format!(
                        "WIFI:T:{};S:{};P:{};H:{};;",
                        security, ssid, password, hidden
                    )
                }
            }
            QrPayload::Email {
                address,
                subject,
                body,
            } => format!("mailto:{}?subject={}&body={}", address, subject, body),
            QrPayload::Sms { phone_number, body } => {
                format!("smsto:{}?body={}", phone_number, body)
            }
        };
        (data, warnings)
    }
}
