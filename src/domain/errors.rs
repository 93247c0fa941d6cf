//! Dispatch error taxonomy.
//!
//! Every dispatch failure is one of four kinds, so callers can distinguish
//! outcomes programmatically as well as by message text. None of them is
//! fatal: the HTTP boundary converts each into a normal response.
//!
//! # Reply mapping
//!
//! | Error | REST reply | Webhook reply |
//! |-------|-----------|---------------|
//! | ConnectionFailure | "Device not connected" | "No se pudo conectar con el dispositivo." |
//! | Validation(MissingColor) | — | "No entendí el color que deseas." |
//! | Validation(InvalidIntensity) | — | "No entendí la intensidad que deseas." |
//! | UnrecognizedIntent | — | "No entendí el comando." |
//! | Internal | "Internal error" | "Hubo un error interno." |

use std::fmt;

/// Reason a caller-supplied parameter was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// No color name was supplied with a set-color request.
    MissingColor,
    /// The intensity value could not be read as an integer.
    InvalidIntensity,
}

/// Errors produced by command dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Authentication with the vendor platform did not succeed.
    ConnectionFailure,

    /// A caller-supplied parameter could not be interpreted.
    Validation(ValidationKind),

    /// The requested action name is not in the known set.
    UnrecognizedIntent,

    /// Any other fault: malformed request body, failed command delivery.
    Internal(String),
}

impl DispatchError {
    pub fn missing_color() -> Self {
        DispatchError::Validation(ValidationKind::MissingColor)
    }

    pub fn invalid_intensity() -> Self {
        DispatchError::Validation(ValidationKind::InvalidIntensity)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DispatchError::Internal(message.into())
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::ConnectionFailure => {
                write!(f, "could not authenticate with the device platform")
            }
            DispatchError::Validation(ValidationKind::MissingColor) => {
                write!(f, "no color name supplied")
            }
            DispatchError::Validation(ValidationKind::InvalidIntensity) => {
                write!(f, "intensity is not an integer")
            }
            DispatchError::UnrecognizedIntent => write!(f, "unrecognized intent"),
            DispatchError::Internal(message) => write!(f, "internal error: {}", message),
        }
    }
}

impl std::error::Error for DispatchError {}
