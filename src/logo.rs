//! Engine logo handling
//!
//! Logos travel inside the configuration record as strings: either the
//! default sentinel or an inline `data:image/png;base64,` reference built
//! from a user-picked file. Decoding produces an RGBA image for egui.

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::io::Cursor;
use std::path::Path;

use crate::engines::DEFAULT_LOGO;

const DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Bundled fallback logo, also shown for the default sentinel
const DEFAULT_LOGO_BYTES: &[u8] = include_bytes!("../assets/default-logo.png");

/// Read a PNG file and wrap it as an inline data reference for the config
/// record. The host never stores logo files; the image rides along inside
/// the configuration itself.
pub fn file_to_data_url(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read logo file {}", path.display()))?;

    // Cheap signature check before accepting the attachment
    if !bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        return Err(anyhow!("{} is not a PNG file", path.display()));
    }

    Ok(format!("{DATA_URL_PREFIX}{}", STANDARD.encode(&bytes)))
}

/// Decode a logo string to an RGBA image. Accepts the default sentinel and
/// inline data references; anything else is an error so the caller can fall
/// back to the default.
pub fn decode(logo: &str) -> Result<egui::ColorImage> {
    if logo == DEFAULT_LOGO || logo.is_empty() {
        return decode_png(DEFAULT_LOGO_BYTES);
    }

    let encoded = logo
        .strip_prefix(DATA_URL_PREFIX)
        .ok_or_else(|| anyhow!("Logo is neither the default sentinel nor an inline PNG"))?;
    let bytes = STANDARD
        .decode(encoded)
        .context("Failed to decode base64 logo payload")?;
    decode_png(&bytes)
}

/// Decoded default logo for fallback rendering
pub fn default_image() -> egui::ColorImage {
    decode_png(DEFAULT_LOGO_BYTES).expect("bundled default logo must decode")
}

fn decode_png(bytes: &[u8]) -> Result<egui::ColorImage> {
    let decoder = png::Decoder::new(Cursor::new(bytes));
    let mut reader = decoder.read_info().context("Failed to read PNG header")?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .context("Failed to decode PNG frame")?;
    let data = &buf[..info.buffer_size()];

    let rgba = match info.color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => {
            // Expand RGB to RGBA with full alpha
            let mut rgba = Vec::with_capacity(data.len() / 3 * 4);
            for chunk in data.chunks_exact(3) {
                rgba.extend_from_slice(chunk);
                rgba.push(0xFF);
            }
            rgba
        }
        other => {
            return Err(anyhow!(
                "Unsupported logo color type {:?} (expected RGB or RGBA)",
                other
            ))
        }
    };

    Ok(egui::ColorImage::from_rgba_unmultiplied(
        [info.width as usize, info.height as usize],
        &rgba,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encode a tiny PNG in-memory with the png crate
    fn tiny_png(color_type: png::ColorType) -> Vec<u8> {
        let (w, h) = (2u32, 2u32);
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, w, h);
            encoder.set_color(color_type);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            let data = match color_type {
                png::ColorType::Rgba => vec![255u8; (w * h * 4) as usize],
                png::ColorType::Rgb => vec![128u8; (w * h * 3) as usize],
                _ => unreachable!(),
            };
            writer.write_image_data(&data).unwrap();
        }
        out
    }

    #[test]
    fn test_data_url_round_trip() {
        let png_bytes = tiny_png(png::ColorType::Rgba);
        let data_url = format!("{DATA_URL_PREFIX}{}", STANDARD.encode(&png_bytes));

        let image = decode(&data_url).unwrap();
        assert_eq!(image.size, [2, 2]);
        assert_eq!(image.pixels[0], egui::Color32::from_rgba_unmultiplied(255, 255, 255, 255));
    }

    #[test]
    fn test_rgb_png_expands_to_rgba() {
        let png_bytes = tiny_png(png::ColorType::Rgb);
        let data_url = format!("{DATA_URL_PREFIX}{}", STANDARD.encode(&png_bytes));

        let image = decode(&data_url).unwrap();
        assert_eq!(image.size, [2, 2]);
        assert_eq!(image.pixels[3], egui::Color32::from_rgba_unmultiplied(128, 128, 128, 255));
    }

    #[test]
    fn test_default_sentinel_decodes_bundled_logo() {
        let image = decode(DEFAULT_LOGO).unwrap();
        assert_eq!(image.size, [16, 16]);
    }

    #[test]
    fn test_rejects_non_data_url_strings() {
        assert!(decode("https://example.com/logo.png").is_err());
        assert!(decode("data:image/png;base64,@@not-base64@@").is_err());
    }

    #[test]
    fn test_file_to_data_url_requires_png() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("askbar-logo-test-{}.png", std::process::id()));
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(file_to_data_url(&path).is_err());

        std::fs::write(&path, tiny_png(png::ColorType::Rgba)).unwrap();
        let data_url = file_to_data_url(&path).unwrap();
        assert!(data_url.starts_with(DATA_URL_PREFIX));
        assert_eq!(decode(&data_url).unwrap().size, [2, 2]);

        let _ = std::fs::remove_file(&path);
    }
}
