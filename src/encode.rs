use crate::errors::Error;
use crate::models::{EncodedImage, OutputFormat};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;

/// Serializes the composited raster into the requested download format.
/// JPEG carries no alpha channel, so the raster is flattened to RGB
/// first; the other formats keep it.
pub fn encode(raster: RgbaImage, format: OutputFormat) -> Result<EncodedImage, Error> {
    let image = match format {
        OutputFormat::Jpeg => DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(raster).to_rgb8()),
        _ => DynamicImage::ImageRgba8(raster),
    };
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image_format(format))
        .map_err(|e| Error::Encode(s!(e)))?;
    Ok(EncodedImage { bytes, format })
}

fn image_format(format: OutputFormat) -> ImageFormat {
    match format {
        OutputFormat::Png => ImageFormat::Png,
        OutputFormat::Jpeg => ImageFormat::Jpeg,
        OutputFormat::Webp => ImageFormat::WebP,
        OutputFormat::Gif => ImageFormat::Gif,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageBuffer, Rgba};

    fn raster() -> RgbaImage {
        ImageBuffer::from_pixel(32, 32, Rgba([0, 0, 0, 255]))
    }

    #[test]
    fn every_format_round_trips_through_the_codec() {
        for (format, expected) in &[
            (OutputFormat::Png, ImageFormat::Png),
            (OutputFormat::Jpeg, ImageFormat::Jpeg),
            (OutputFormat::Webp, ImageFormat::WebP),
            (OutputFormat::Gif, ImageFormat::Gif),
        ] {
            let encoded = encode(raster(), *format).unwrap();
            assert!(!encoded.bytes.is_empty());
            assert_eq!(image::guess_format(&encoded.bytes).unwrap(), *expected);
            let decoded = image::load_from_memory(&encoded.bytes).unwrap();
            assert_eq!(decoded.dimensions(), (32, 32));
        }
    }

    #[test]
    fn jpeg_is_flattened_to_rgb() {
        let encoded = encode(raster(), OutputFormat::Jpeg).unwrap();
        let decoded = image::load_from_memory(&encoded.bytes).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn encoded_image_reports_its_mime_type() {
        let encoded = encode(raster(), OutputFormat::Webp).unwrap();
        assert_eq!(encoded.mime_type(), "image/webp");
        assert_eq!(encoded.file_name("Badge"), "badge.webp");
    }
}
