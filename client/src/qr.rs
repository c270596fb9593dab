//! Pre-fill QR codes: classifying the input and building the encoded URL.

use std::fmt::Write as _;
use thiserror::Error;

pub const EMPTY_INPUT_ALERT: &str = "Please enter data to encode in the QR code.";
pub const RENDER_FAILED_TEXT: &str = "Could not generate QR code.";

/// Longest text still treated as a project number.
const MAX_PROJECT_NUMBER_LEN: usize = 20;

pub const QR_SIZE: u32 = 128;
pub const COLOR_DARK: &str = "#000000";
pub const COLOR_LIGHT: &str = "#ffffff";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QrError {
    #[error("Please enter data to encode in the QR code.")]
    EmptyInput,
    #[error("QR code rendering failed: {0}")]
    Render(String),
}

/// Form field a pre-fill URL targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefillParam {
    ProjectNumber,
    WorkerName,
}

impl PrefillParam {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProjectNumber => "project_number",
            Self::WorkerName => "worker_name",
        }
    }

    /// Guesses the field from the text's shape: anything outside
    /// `[A-Za-z0-9-]`, or longer than 20 characters, is a worker name.
    pub fn classify(text: &str) -> Self {
        let looks_like_name = text.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '-'))
            || text.chars().count() > MAX_PROJECT_NUMBER_LEN;
        if looks_like_name {
            Self::WorkerName
        } else {
            Self::ProjectNumber
        }
    }
}

/// Error correction levels, numbered the way qrcodejs numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectLevel {
    L,
    M,
    Q,
    H,
}

impl CorrectLevel {
    pub fn code(self) -> u8 {
        match self {
            Self::L => 1,
            Self::M => 0,
            Self::Q => 3,
            Self::H => 2,
        }
    }
}

/// A validated QR request: the page URL carrying one pre-fill parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefillUrl {
    pub param: PrefillParam,
    pub url: String,
}

impl PrefillUrl {
    /// Builds `origin + pathname + ?param=value` from the trimmed input.
    pub fn build(origin: &str, pathname: &str, input: &str) -> Result<Self, QrError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(QrError::EmptyInput);
        }
        let param = PrefillParam::classify(text);
        let url = format!(
            "{origin}{pathname}?{}={}",
            param.as_str(),
            encode_uri_component(text)
        );
        Ok(Self { param, url })
    }
}

/// Percent-encodes everything except the characters `encodeURIComponent`
/// leaves alone.
pub fn encode_uri_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            encoded.push(char::from(byte));
        } else {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    encoded
}
