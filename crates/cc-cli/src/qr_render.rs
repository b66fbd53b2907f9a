//! Render a customer's QR payload for a terminal or as an SVG document.

use std::panic::Location;

use error_location::ErrorLocation;
use qrcode::QrCode;
use qrcode::render::{svg, unicode};
use thiserror::Error;

const SVG_MIN_DIMENSION: u32 = 256;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("QR generation failed: {message} {location}")]
    Encode {
        message: String,
        location: ErrorLocation,
    },
}

impl RenderError {
    #[track_caller]
    fn encode(err: qrcode::types::QrError) -> Self {
        Self::Encode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QrFormat {
    /// Half-height block characters, readable by a phone camera from the screen.
    #[default]
    Unicode,
    Svg,
}

pub fn render(payload: &str, format: QrFormat) -> Result<String, RenderError> {
    let code = QrCode::new(payload.as_bytes()).map_err(RenderError::encode)?;

    let rendered = match format {
        QrFormat::Unicode => code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .quiet_zone(true)
            .build(),
        QrFormat::Svg => code
            .render::<svg::Color>()
            .min_dimensions(SVG_MIN_DIMENSION, SVG_MIN_DIMENSION)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#FFFFFF"))
            .build(),
    };

    Ok(rendered)
}
