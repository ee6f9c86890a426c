// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    Encode(EncodeError),
    Render(String),
}

/// Specific error types for QR symbol encoding issues.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Input does not fit into any QR version at the requested
    /// error correction level.
    DataTooLong,

    /// Input contains data the encoder cannot represent.
    InvalidData(String),
}

impl EncodeError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            EncodeError::DataTooLong => "error-encode-data-too-long",
            EncodeError::InvalidData(_) => "error-encode-invalid-data",
        }
    }
}

impl From<qrcode::types::QrError> for EncodeError {
    fn from(err: qrcode::types::QrError) -> Self {
        match err {
            qrcode::types::QrError::DataTooLong => EncodeError::DataTooLong,
            other => EncodeError::InvalidData(other.to_string()),
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::DataTooLong => write!(f, "Input is too long for a QR symbol"),
            EncodeError::InvalidData(msg) => write!(f, "Cannot encode input: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Encode(e) => write!(f, "Encode Error: {}", e),
            Error::Render(e) => write!(f, "Render Error: {}", e),
        }
    }
}

impl From<EncodeError> for Error {
    fn from(err: EncodeError) -> Self {
        Error::Encode(err)
    }
}

impl From<qrcode::types::QrError> for Error {
    fn from(err: qrcode::types::QrError) -> Self {
        Error::Encode(err.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn encode_error_from_qr_error() {
        let err: EncodeError = qrcode::types::QrError::DataTooLong.into();
        assert_eq!(err, EncodeError::DataTooLong);
    }

    #[test]
    fn encode_error_i18n_keys() {
        assert_eq!(
            EncodeError::DataTooLong.i18n_key(),
            "error-encode-data-too-long"
        );
        assert_eq!(
            EncodeError::InvalidData("x".into()).i18n_key(),
            "error-encode-invalid-data"
        );
    }

    #[test]
    fn encode_error_display() {
        let err = EncodeError::InvalidData("bad byte".to_string());
        assert!(format!("{}", err).contains("bad byte"));
    }

    #[test]
    fn error_wraps_encode_error() {
        let err: Error = qrcode::types::QrError::DataTooLong.into();
        assert!(matches!(err, Error::Encode(EncodeError::DataTooLong)));
    }
}
