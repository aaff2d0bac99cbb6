use crate::errors::Error;
use crate::models::LogoOptions;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::cmp;

/// Resizes the uploaded logo to a centered square footprint and
/// alpha-composites it over the QR raster. The square side is
/// `floor(min(edge) * size_percentage / 100)`; aspect ratio is not
/// preserved. The logo's own alpha channel is scaled by
/// `transparency_percentage / 100` before compositing.
///
/// Errors here are the caller's cue to drop the logo and continue, so
/// this function never touches `base` until the logo has decoded.
pub fn overlay(base: &mut RgbaImage, logo: &LogoOptions) -> Result<(), Error> {
    let decoded = image::load_from_memory(&logo.image).map_err(|e| Error::InvalidEntity(s!(e)))?;
    let (qr_w, qr_h) = base.dimensions();
    let side = cmp::min(qr_w, qr_h) * logo.size_percentage / 100;
    if side == 0 {
        return Err(Error::InvalidEntity(s!("logo would be resized to nothing")));
    }
    let mut stamp = decoded
        .resize_exact(side, side, FilterType::Triangle)
        .to_rgba8();
    for pixel in stamp.pixels_mut() {
        let scaled = u32::from(pixel[3]) * logo.transparency_percentage / 100;
        pixel[3] = cmp::min(scaled, 255) as u8;
    }
    let left = (qr_w - side) / 2;
    let top = (qr_h - side) / 2;
    imageops::overlay(base, &stamp, i64::from(left), i64::from(top));
    Ok(())
}
