use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use std::error::Error;
use std::io::Cursor;

/// Pixel width of one module in the rendered image.
pub const MODULE_PIXELS: u32 = 10;

/// Encodes `payload` as a QR symbol and rasterizes it to an in-memory PNG.
///
/// The symbol uses the smallest version that fits the payload at error
/// correction level L, drawn black on white at `MODULE_PIXELS` pixels per
/// module with a four-module quiet zone.
pub fn generate_qr_png(payload: &str) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)?;

    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .quiet_zone(true)
        .build();

    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;

    Ok(buffer.into_inner())
}
