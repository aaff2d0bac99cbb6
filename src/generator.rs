use crate::encode;
use crate::errors::Error;
use crate::logo;
use crate::models::{EncodedImage, QrRequest, Warning};
use crate::qrcode;

#[derive(Debug)]
pub struct Generated {
    pub image: EncodedImage,
    pub warnings: Vec<Warning>,
}

/// Runs one submission through the whole pipeline. Pure function of the
/// request: nothing is shared between calls and nothing is retried.
///
/// Fatal checks run before any pixel work; a bad logo only costs a
/// warning and the code ships without it.
pub fn generate(request: &QrRequest) -> Result<Generated, Error> {
    if request.output.file_name.trim().is_empty() {
        return Err(Error::EmptyFileName);
    }
    request.payload.validate()?;
    request.style.validate()?;

    let (data, mut warnings) = request.payload.scan_string();
    let mut raster = qrcode::render(&data, &request.style)?;
    if let Some(opts) = &request.logo {
        if let Err(e) = logo::overlay(&mut raster, opts) {
            warnings.push(Warning::LogoDiscarded(s!(e)));
        }
    }
    let image = encode::encode(raster, request.output.format)?;
    Ok(Generated { image, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        LogoOptions, OutputFormat, OutputOptions, QrPayload, StyleOptions, WifiSecurity,
    };
    use image::GenericImageView;

    fn request(payload: QrPayload) -> QrRequest {
        QrRequest {
            payload,
            style: StyleOptions::default(),
            logo: None,
            output: OutputOptions {
                file_name: s!("qr_code"),
                format: OutputFormat::Png,
            },
        }
    }

    fn text_request() -> QrRequest {
        request(QrPayload::Text {
            content: s!("https://example.com"),
        })
    }

    #[test]
    fn produces_a_png_for_plain_text() {
        let generated = generate(&text_request()).unwrap();
        assert!(generated.warnings.is_empty());
        assert_eq!(generated.image.mime_type(), "image/png");
        let decoded = image::load_from_memory(&generated.image.bytes).unwrap();
        let (w, h) = decoded.dimensions();
        assert_eq!(w, h);
        assert!(w >= 21);
    }

    #[test]
    fn empty_file_name_aborts_regardless_of_other_inputs() {
        let mut req = text_request();
        req.output.file_name = s!("");
        match generate(&req) {
            Err(Error::EmptyFileName) => {}
            other => panic!("expected EmptyFileName, got {:?}", other),
        }
        // whitespace-only counts as empty too
        req.output.file_name = s!("   ");
        assert!(generate(&req).is_err());
    }

    #[test]
    fn missing_input_aborts_before_rendering() {
        let req = request(QrPayload::Text {
            content: String::new(),
        });
        match generate(&req) {
            Err(Error::MissingInput(_)) => {}
            other => panic!("expected MissingInput, got {:?}", other),
        }
    }

    #[test]
    fn out_of_range_style_is_rejected() {
        let mut req = text_request();
        req.style.border = 99;
        match generate(&req) {
            Err(Error::InvalidEntity(_)) => {}
            other => panic!("expected InvalidEntity, got {:?}", other),
        }
    }

    #[test]
    fn wifi_without_encryption_degrades_with_a_warning() {
        let req = request(QrPayload::Wifi {
            ssid: s!("home"),
            password: s!("pw"),
            security: WifiSecurity::None,
            hidden: false,
        });
        let generated = generate(&req).unwrap();
        assert_eq!(generated.warnings, vec![Warning::EncryptionUnset]);
        assert!(!generated.image.bytes.is_empty());
    }

    #[test]
    fn bad_logo_is_a_warning_not_an_abort() {
        let mut req = text_request();
        req.logo = Some(LogoOptions {
            image: vec![1, 2, 3],
            size_percentage: 20,
            transparency_percentage: 100,
        });
        let generated = generate(&req).unwrap();
        assert_eq!(generated.warnings.len(), 1);
        match &generated.warnings[0] {
            Warning::LogoDiscarded(_) => {}
            other => panic!("expected LogoDiscarded, got {:?}", other),
        }
        assert!(!generated.image.bytes.is_empty());
    }
}
