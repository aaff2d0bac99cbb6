use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

pub const MIN_BOX_SIZE: u32 = 1;
pub const MAX_BOX_SIZE: u32 = 100;
pub const MAX_BORDER: u32 = 10;
pub const MIN_VERSION: u8 = 1;
pub const MAX_VERSION: u8 = 40;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, EnumString, Display)]
pub enum QrType {
    Text,
    Wifi,
    Email,
    Sms,
}

impl QrType {
    /// Parses a form-submitted type name. Anything outside the four
    /// supported kinds aborts the request before an image is produced.
    pub fn parse(name: &str) -> Result<Self, Error> {
        QrType::from_str(name).map_err(|_| Error::UnsupportedType(s!(name)))
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, EnumString, Display)]
pub enum WifiSecurity {
    None,
    #[strum(to_string = "WEP")]
    Wep,
    #[strum(to_string = "WPA")]
    Wpa,
    #[strum(to_string = "WPA2")]
    Wpa2,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, EnumString, Display)]
pub enum ErrorCorrection {
    L,
    M,
    Q,
    H,
}

impl ErrorCorrection {
    pub fn ec_level(self) -> qrcode::EcLevel {
        match self {
            ErrorCorrection::L => qrcode::EcLevel::L,
            ErrorCorrection::M => qrcode::EcLevel::M,
            ErrorCorrection::Q => qrcode::EcLevel::Q,
            ErrorCorrection::H => qrcode::EcLevel::H,
        }
    }
}

/// Output formats offered for download. The form offers both "JPEG" and
/// "JPG" labels; they are the same encoding.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, EnumString, Display)]
pub enum OutputFormat {
    #[strum(to_string = "PNG")]
    Png,
    #[strum(to_string = "JPEG", serialize = "JPG")]
    Jpeg,
    #[strum(to_string = "WEBP")]
    Webp,
    #[strum(to_string = "GIF")]
    Gif,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Result<Self, Error> {
        OutputFormat::from_str(name)
            .map_err(|_| Error::InvalidEntity(format!("file type {}", name)))
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Webp => "image/webp",
            OutputFormat::Gif => "image/gif",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Webp => "webp",
            OutputFormat::Gif => "gif",
        }
    }
}

/// 24-bit RGB color in the `#rrggbb` notation posted by HTML color inputs.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub [u8; 3]);

pub const BLACK: Color = Color([0, 0, 0]);
pub const WHITE: Color = Color([255, 255, 255]);

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidEntity(format!("color '{}'", s)));
        }
        let mut rgb = [0u8; 3];
        for (i, channel) in rgb.iter_mut().enumerate() {
            *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|e| Error::InvalidEntity(s!(e)))?;
        }
        Ok(Color(rgb))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        format!("#{:02x}{:02x}{:02x}", color.0[0], color.0[1], color.0[2])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            self.0[0], self.0[1], self.0[2]
        )
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct StyleOptions {
    pub foreground: Color,
    pub background: Color,
    pub box_size: u32,
    pub border: u32,
    pub version: u8,
    #[serde(default = "default_fit")]
    pub fit: bool,
    pub error_correction: ErrorCorrection,
}

fn default_fit() -> bool {
    true
}

impl StyleOptions {
    pub fn validate(&self) -> Result<(), Error> {
        if self.box_size < MIN_BOX_SIZE || self.box_size > MAX_BOX_SIZE {
            return Err(Error::InvalidEntity(format!(
                "box size {} is out of range {}-{}",
                self.box_size, MIN_BOX_SIZE, MAX_BOX_SIZE
            )));
        }
        if self.border > MAX_BORDER {
            return Err(Error::InvalidEntity(format!(
                "border {} is out of range 0-{}",
                self.border, MAX_BORDER
            )));
        }
        if self.version < MIN_VERSION || self.version > MAX_VERSION {
            return Err(Error::InvalidEntity(format!(
                "version {} is out of range {}-{}",
                self.version, MIN_VERSION, MAX_VERSION
            )));
        }
        Ok(())
    }
}

impl Default for StyleOptions {
    fn default() -> Self {
        StyleOptions {
            foreground: BLACK,
            background: WHITE,
            box_size: 10,
            border: 4,
            version: 1,
            fit: true,
            error_correction: ErrorCorrection::H,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LogoOptions {
    #[serde(with = "crate::ser::base64_bytes")]
    pub image: Vec<u8>,
    pub size_percentage: u32,
    pub transparency_percentage: u32,
}

/// One variant per supported QR kind, with the fields a scanner expects.
/// Optional fields default to the empty string, never null.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum QrPayload {
    Text {
        content: String,
    },
    Wifi {
        ssid: String,
        #[serde(default)]
        password: String,
        security: WifiSecurity,
        #[serde(default)]
        hidden: bool,
    },
    Email {
        address: String,
        #[serde(default)]
        subject: String,
        #[serde(default)]
        body: String,
    },
    Sms {
        phone_number: String,
        #[serde(default)]
        body: String,
    },
}

impl QrPayload {
    pub fn qr_type(&self) -> QrType {
        match *self {
            QrPayload::Text { .. } => QrType::Text,
            QrPayload::Wifi { .. } => QrType::Wifi,
            QrPayload::Email { .. } => QrType::Email,
            QrPayload::Sms { .. } => QrType::Sms,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct OutputOptions {
    pub file_name: String,
    pub format: OutputFormat,
}

/// One immutable request per form submission. The UI layer owns all
/// mutable state; everything below it is a pure function of this value.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct QrRequest {
    pub payload: QrPayload,
    pub style: StyleOptions,
    #[serde(default)]
    pub logo: Option<LogoOptions>,
    pub output: OutputOptions,
}

/// Immutable raster result of a successful generation.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub format: OutputFormat,
}

impl EncodedImage {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem.trim().to_lowercase(), self.format.extension())
    }
}

/// Non-fatal degradations surfaced to the submitting user.
#[derive(Debug, PartialEq, Clone)]
pub enum Warning {
    EncryptionUnset,
    LogoDiscarded(String),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Warning::EncryptionUnset => write!(
                f,
                "WiFi type is set to 'None', the encryption type was left out of the code"
            ),
            Warning::LogoDiscarded(reason) => write!(f, "Error adding logo: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_supported_types() {
        assert_eq!(QrType::parse("Text").unwrap(), QrType::Text);
        assert_eq!(QrType::parse("Wifi").unwrap(), QrType::Wifi);
        assert_eq!(QrType::parse("Email").unwrap(), QrType::Email);
        assert_eq!(QrType::parse("Sms").unwrap(), QrType::Sms);
    }

    #[test]
    fn parse_unsupported_type_fails() {
        match QrType::parse("Barcode") {
            Err(Error::UnsupportedType(name)) => assert_eq!(name, "Barcode"),
            other => panic!("expected UnsupportedType, got {:?}", other),
        }
    }

    #[test]
    fn color_from_hex() {
        assert_eq!("#000000".parse::<Color>().unwrap(), BLACK);
        assert_eq!("#ffffff".parse::<Color>().unwrap(), WHITE);
        assert_eq!("#1A2b3C".parse::<Color>().unwrap(), Color([26, 43, 60]));
        assert!("#fff".parse::<Color>().is_err());
        assert!("red".parse::<Color>().is_err());
    }

    #[test]
    fn color_round_trips_to_string() {
        let color: Color = "#a0b1c2".parse().unwrap();
        assert_eq!(s!(color), "#a0b1c2");
    }

    #[test]
    fn jpg_and_jpeg_are_the_same_format() {
        assert_eq!(OutputFormat::parse("JPG").unwrap(), OutputFormat::Jpeg);
        assert_eq!(OutputFormat::parse("JPEG").unwrap(), OutputFormat::Jpeg);
    }

    #[test]
    fn mime_types_match_the_download_table() {
        assert_eq!(OutputFormat::Png.mime_type(), "image/png");
        assert_eq!(OutputFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(OutputFormat::Webp.mime_type(), "image/webp");
        assert_eq!(OutputFormat::Gif.mime_type(), "image/gif");
    }

    #[test]
    fn style_ranges_are_enforced() {
        let mut style = StyleOptions::default();
        assert!(style.validate().is_ok());
        style.box_size = 0;
        assert!(style.validate().is_err());
        style.box_size = 101;
        assert!(style.validate().is_err());
        style = StyleOptions::default();
        style.border = 11;
        assert!(style.validate().is_err());
        style = StyleOptions::default();
        style.version = 0;
        assert!(style.validate().is_err());
        style.version = 41;
        assert!(style.validate().is_err());
    }

    #[test]
    fn payload_reports_its_type() {
        let payload = QrPayload::Sms {
            phone_number: s!("123"),
            body: String::new(),
        };
        assert_eq!(payload.qr_type(), QrType::Sms);
    }

    #[test]
    fn encoded_image_download_name_is_lowercased() {
        let image = EncodedImage {
            bytes: vec![],
            format: OutputFormat::Png,
        };
        assert_eq!(image.file_name("My Code "), "my code.png");
    }
}
