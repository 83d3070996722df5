//! Raster image header sniffing
//!
//! Only the container header is decoded: enough to identify the format and
//! the pixel dimensions. Pixel data is kept as the original encoded bytes.

use crate::error::{LayoutError, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use nom::branch::alt;
use nom::bytes::complete::{tag, take, take_while1};
use nom::error::{make_error, ErrorKind as NomErrorKind};
use nom::number::complete::{be_u16, be_u32, be_u8, le_u16};
use nom::IResult;
use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::Path;

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SOI: &[u8] = &[0xFF, 0xD8];

/// Supported raster formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
}

impl ImageFormat {
    /// Conventional file extension
    pub const fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Gif => "gif",
        }
    }

    /// Format conventionally stored under a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" | "jpe" => Some(ImageFormat::Jpeg),
            "bmp" | "dib" => Some(ImageFormat::Bmp),
            "gif" => Some(ImageFormat::Gif),
            _ => None,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Bmp => "BMP",
            ImageFormat::Gif => "GIF",
        })
    }
}

/// Format and pixel size read from an image header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

fn png_size(input: &[u8]) -> IResult<&[u8], (u32, u32)> {
    let (input, _) = tag(PNG_SIGNATURE)(input)?;
    let (input, _chunk_len) = be_u32(input)?;
    let (input, _) = tag(&b"IHDR"[..])(input)?;
    let (input, width) = be_u32(input)?;
    let (input, height) = be_u32(input)?;
    Ok((input, (width, height)))
}

fn gif_size(input: &[u8]) -> IResult<&[u8], (u32, u32)> {
    let (input, _) = alt((tag(&b"GIF87a"[..]), tag(&b"GIF89a"[..])))(input)?;
    let (input, width) = le_u16(input)?;
    let (input, height) = le_u16(input)?;
    Ok((input, (width as u32, height as u32)))
}

fn is_jpeg_sof(marker: u8) -> bool {
    (0xC0..=0xCF).contains(&marker) && !matches!(marker, 0xC4 | 0xC8 | 0xCC)
}

fn jpeg_size(input: &[u8]) -> IResult<&[u8], (u32, u32)> {
    let (mut input, _) = tag(JPEG_SOI)(input)?;
    loop {
        // markers may be preceded by any number of 0xFF fill bytes
        let (rest, _) = take_while1(|b| b == 0xFF)(input)?;
        let (rest, marker) = be_u8(rest)?;
        match marker {
            0x01 | 0xD0..=0xD7 => input = rest,
            // end of image or start of scan before any frame header
            0xD9 | 0xDA => {
                return Err(nom::Err::Error(make_error(rest, NomErrorKind::Eof)));
            }
            m if is_jpeg_sof(m) => {
                let (rest, _len) = be_u16(rest)?;
                let (rest, _precision) = be_u8(rest)?;
                let (rest, height) = be_u16(rest)?;
                let (rest, width) = be_u16(rest)?;
                return Ok((rest, (width as u32, height as u32)));
            }
            _ => {
                let (rest, len) = be_u16(rest)?;
                let (rest, _) = take(len.saturating_sub(2) as usize)(rest)?;
                input = rest;
            }
        }
    }
}

fn bmp_size(bytes: &[u8]) -> Option<(u32, u32)> {
    if bytes.len() < 26 || &bytes[..2] != b"BM" {
        return None;
    }
    let mut cursor = Cursor::new(&bytes[18..26]);
    let width = cursor.read_i32::<LittleEndian>().ok()?;
    // negative height marks a top-down bitmap
    let height = cursor.read_i32::<LittleEndian>().ok()?;
    Some((width.unsigned_abs(), height.unsigned_abs()))
}

/// Identify an encoded image and read its pixel size
pub fn sniff(bytes: &[u8]) -> Result<ImageHeader> {
    let (format, size) = if bytes.starts_with(PNG_SIGNATURE) {
        (ImageFormat::Png, png_size(bytes).ok().map(|(_, s)| s))
    } else if bytes.starts_with(JPEG_SOI) {
        (ImageFormat::Jpeg, jpeg_size(bytes).ok().map(|(_, s)| s))
    } else if bytes.starts_with(b"GIF8") {
        (ImageFormat::Gif, gif_size(bytes).ok().map(|(_, s)| s))
    } else if bytes.starts_with(b"BM") {
        (ImageFormat::Bmp, bmp_size(bytes))
    } else {
        return Err(LayoutError::Serialization(
            "unrecognized image format".to_string(),
        ));
    };

    match size {
        Some((width, height)) if width > 0 && height > 0 => Ok(ImageHeader {
            format,
            width,
            height,
        }),
        Some(_) => Err(LayoutError::Serialization(format!(
            "{} header declares an empty image",
            format
        ))),
        None => Err(LayoutError::Serialization(format!(
            "truncated or malformed {} header",
            format
        ))),
    }
}

/// Read an image file, refusing files larger than `max_bytes`
pub fn read_image_file(path: &Path, max_bytes: usize) -> Result<(Vec<u8>, ImageHeader)> {
    let len = fs::metadata(path)?.len();
    if len > max_bytes as u64 {
        return Err(LayoutError::Serialization(format!(
            "{} is {} bytes, limit is {}",
            path.display(),
            len,
            max_bytes
        )));
    }
    let bytes = fs::read(path)?;
    let header = sniff(&bytes)?;
    Ok((bytes, header))
}
