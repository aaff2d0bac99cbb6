use crate::errors::Error;
use crate::models::{Color, StyleOptions};
use image::{ImageBuffer, Rgba, RgbaImage};
use qrcode::{QrCode, Version};

/// Encodes the scan payload into a module matrix. With `fit` set the
/// encoder picks the minimal version that holds the payload and the
/// requested version is ignored; otherwise the version is used as-is
/// and oversized payloads fail.
pub fn encode_matrix(data: &str, style: &StyleOptions) -> Result<QrCode, Error> {
    let ec = style.error_correction.ec_level();
    let code = if style.fit {
        QrCode::with_error_correction_level(data, ec)
    } else {
        QrCode::with_version(data, Version::Normal(i16::from(style.version)), ec)
    };
    code.map_err(|e| Error::Encode(s!(e)))
}

/// Paints the matrix into an RGBA raster: box_size pixels per module,
/// a border-module quiet zone, dark modules in the foreground color.
pub fn render(data: &str, style: &StyleOptions) -> Result<RgbaImage, Error> {
    let code = encode_matrix(data, style)?;
    let fg = pixel(style.foreground);
    let bg = pixel(style.background);
    let modules = code.width() as u32;
    let colors = code.into_colors();
    let edge = (modules + 2 * style.border) * style.box_size;
    let mut img: RgbaImage = ImageBuffer::from_pixel(edge, edge, bg);
    for y in 0..modules {
        for x in 0..modules {
            if colors[(y * modules + x) as usize] == qrcode::Color::Dark {
                let left = (style.border + x) * style.box_size;
                let top = (style.border + y) * style.box_size;
                for dy in 0..style.box_size {
                    for dx in 0..style.box_size {
                        img.put_pixel(left + dx, top + dy, fg);
                    }
                }
            }
        }
    }
    Ok(img)
}

fn pixel(color: Color) -> Rgba<u8> {
    Rgba([color.0[0], color.0[1], color.0[2], 255])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StyleOptions;

    #[test]
    fn fit_picks_the_minimal_version() {
        let style = StyleOptions {
            version: 40,
            fit: true,
            ..StyleOptions::default()
        };
        let code = encode_matrix("A", &style).unwrap();
        assert_eq!(code.version(), Version::Normal(1));
    }

    #[test]
    fn fixed_version_is_honored() {
        let style = StyleOptions {
            version: 5,
            fit: false,
            ..StyleOptions::default()
        };
        let code = encode_matrix("A", &style).unwrap();
        assert_eq!(code.version(), Version::Normal(5));
        // version 5 is a 37x37 module grid
        assert_eq!(code.width(), 37);
    }

    #[test]
    fn oversized_payload_fails_without_fit() {
        let style = StyleOptions {
            version: 1,
            fit: false,
            ..StyleOptions::default()
        };
        let data = "x".repeat(200);
        match encode_matrix(&data, &style) {
            Err(Error::Encode(_)) => {}
            Err(other) => panic!("expected Encode error, got {:?}", other),
            Ok(_) => panic!("expected Encode error, got Ok(_)"),
        }
    }

    #[test]
    fn raster_geometry_follows_box_size_and_border() {
        let style = StyleOptions {
            box_size: 10,
            border: 4,
            ..StyleOptions::default()
        };
        let img = render("HELLO", &style).unwrap();
        // version 1 is 21 modules; (21 + 2*4) * 10 pixels per edge
        assert_eq!(img.dimensions(), (290, 290));
    }

    #[test]
    fn quiet_zone_uses_the_background_color() {
        let style = StyleOptions {
            foreground: "#ff0000".parse().unwrap(),
            background: "#0000ff".parse().unwrap(),
            box_size: 2,
            border: 3,
            ..StyleOptions::default()
        };
        let img = render("HELLO", &style).unwrap();
        // top-left corner is quiet zone; the finder pattern starts after it
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(6, 6).0, [255, 0, 0, 255]);
    }

    #[test]
    fn zero_border_starts_at_the_finder_pattern() {
        let style = StyleOptions {
            box_size: 1,
            border: 0,
            ..StyleOptions::default()
        };
        let img = render("HELLO", &style).unwrap();
        assert_eq!(img.dimensions(), (21, 21));
        // module (0,0) is the dark corner of the finder pattern
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }
}
