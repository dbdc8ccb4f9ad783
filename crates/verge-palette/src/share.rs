//! Share codes — a palette's brand colors and name packed into a single
//! base64 token suitable for a `?palette=` query parameter.
//!
//! The token is standard base64 of a compact JSON object:
//! `{"primary":"#rrggbb","secondary":"#rrggbb","accent":"#rrggbb","name":"…"}`.
//! Neutrals are not carried; a decoded palette gets the default baseline.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use verge_color::{Color, ColorError};

use crate::palette::{ColorPalette, Neutrals, ThemeType};

/// Query parameter that carries a share code in a URL.
pub const SHARE_PARAM: &str = "palette";

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("share code is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("share code does not contain a palette: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("failed to encode share code: {0}")]
    Encode(serde_json::Error),
}

/// The decoded content of a share code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub name: String,
}

impl SharePayload {
    #[must_use]
    pub fn from_palette(palette: &ColorPalette) -> Self {
        Self {
            primary: palette.primary.hex().to_owned(),
            secondary: palette.secondary.hex().to_owned(),
            accent: palette.accent.hex().to_owned(),
            name: palette.name.clone(),
        }
    }

    /// Rebuild a palette with a fresh id and the default neutrals.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorInput`] if any carried color does
    /// not parse.
    pub fn to_palette(&self) -> Result<ColorPalette, ColorError> {
        Ok(ColorPalette::new(
            self.name.clone(),
            Color::parse(&self.primary)?,
            Color::parse(&self.secondary)?,
            Color::parse(&self.accent)?,
            Neutrals::default(),
            Some(ThemeType::Custom),
        ))
    }
}

/// Encode `palette` as a share code.
///
/// # Errors
///
/// Returns [`ShareError::Encode`] if the payload fails to serialize.
pub fn encode_share(palette: &ColorPalette) -> Result<String, ShareError> {
    let json = serde_json::to_vec(&SharePayload::from_palette(palette)).map_err(ShareError::Encode)?;
    Ok(STANDARD.encode(json))
}

/// Decode a share code. A full URL or query string is accepted too; the
/// code is then taken from its `palette` parameter.
///
/// # Errors
///
/// Returns [`ShareError::Base64`] for a malformed token and
/// [`ShareError::Payload`] when the token does not hold a share payload.
pub fn decode_share(code: &str) -> Result<SharePayload, ShareError> {
    let token = extract_param(code.trim()).unwrap_or_else(|| code.trim());
    let bytes = STANDARD.decode(token)?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn extract_param(input: &str) -> Option<&str> {
    let (_, query) = input.split_once('?').unwrap_or(("", input));
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find_map(|(key, value)| (key == SHARE_PARAM).then_some(value))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmony::HarmonyKind;
    use crate::palette::generate_color_palette;
    use pretty_assertions::assert_eq;

    fn palette() -> ColorPalette {
        generate_color_palette(&Color::from_u32(0x006156), HarmonyKind::Triadic)
    }

    #[test]
    fn code_roundtrips_brand_colors() {
        let p = palette();
        let code = encode_share(&p).unwrap();
        let payload = decode_share(&code).unwrap();
        assert_eq!(payload, SharePayload::from_palette(&p));

        let rebuilt = payload.to_palette().unwrap();
        assert_eq!(rebuilt.primary, p.primary);
        assert_eq!(rebuilt.secondary, p.secondary);
        assert_eq!(rebuilt.accent, p.accent);
        assert_eq!(rebuilt.name, p.name);
        assert_eq!(rebuilt.background, p.background);
        assert_ne!(rebuilt.id, p.id);
    }

    #[test]
    fn code_is_base64_of_compact_json() {
        let p = palette();
        let code = encode_share(&p).unwrap();
        let json = String::from_utf8(STANDARD.decode(&code).unwrap()).unwrap();
        assert_eq!(
            json,
            format!(
                r##"{{"primary":"{}","secondary":"{}","accent":"{}","name":"Generated Palette"}}"##,
                p.primary, p.secondary, p.accent
            )
        );
    }

    #[test]
    fn decodes_from_url() {
        let code = encode_share(&palette()).unwrap();
        let url = format!("https://example.com/app?theme=dark&palette={code}");
        assert_eq!(decode_share(&url).unwrap(), decode_share(&code).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(decode_share("%%%"), Err(ShareError::Base64(_))));
        let not_a_palette = STANDARD.encode(r#"{"hello":1}"#);
        assert!(matches!(decode_share(&not_a_palette), Err(ShareError::Payload(_))));
    }

    #[test]
    fn bad_color_in_payload_fails_rebuild() {
        let payload = SharePayload {
            primary: "#zzzzzz".into(),
            secondary: "#000000".into(),
            accent: "#ffffff".into(),
            name: "Broken".into(),
        };
        assert_eq!(
            payload.to_palette().unwrap_err(),
            ColorError::InvalidColorInput("#zzzzzz".into())
        );
    }
}
