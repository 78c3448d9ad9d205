use thiserror::Error;

/// What went wrong while decoding a field.
///
/// # Examples
/// ```
/// use usergroup_core::DecodeErrorKind;
///
/// let kind = DecodeErrorKind::InvalidEnumValue {
///     type_name: "bool",
///     value: 2,
/// };
/// assert_eq!(kind.to_string(), "invalid bool value: 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    #[error("truncated input: need {needed} bytes, have {available}")]
    TruncatedInput { needed: usize, available: usize },
    #[error("invalid {type_name} value: {value}")]
    InvalidEnumValue { type_name: &'static str, value: u8 },
    #[error("invalid UTF-8 after {valid_up_to} valid bytes")]
    InvalidUtf8 { valid_up_to: usize },
    #[error("discriminator mismatch: expected {expected:02x?}, got {actual:02x?}")]
    DiscriminatorMismatch { expected: [u8; 8], actual: [u8; 8] },
}

/// A decoding failure, located by field path and absolute byte offset.
///
/// The field path is filled in from the innermost decoder outwards, so a
/// truncated admin key reads `admins[3]` and a bad withdraw amount reads
/// `type.amount`.
///
/// # Examples
/// ```
/// use usergroup_core::{DecodeError, DecodeErrorKind};
///
/// let err = DecodeError::truncated(40, 32, 7).with_field("sponsor");
/// assert!(matches!(err.kind, DecodeErrorKind::TruncatedInput { needed: 32, .. }));
/// assert_eq!(err.field, "sponsor");
/// assert!(err.to_string().contains("at offset 40"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}{}", describe_field(.field))]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    pub field: String,
    pub offset: usize,
}

impl DecodeError {
    pub fn new(kind: DecodeErrorKind, offset: usize) -> Self {
        Self {
            kind,
            field: String::new(),
            offset,
        }
    }

    pub fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        Self::new(DecodeErrorKind::TruncatedInput { needed, available }, offset)
    }

    pub fn invalid_enum(offset: usize, type_name: &'static str, value: u8) -> Self {
        Self::new(DecodeErrorKind::InvalidEnumValue { type_name, value }, offset)
    }

    /// Prefix the field path with `name`.
    pub fn with_field(mut self, name: &str) -> Self {
        self.field = if self.field.is_empty() {
            name.to_string()
        } else if self.field.starts_with('[') {
            format!("{name}{}", self.field)
        } else {
            format!("{name}.{}", self.field)
        };
        self
    }

    /// Prefix the field path with an element index.
    pub fn with_index(self, index: usize) -> Self {
        self.with_field(&format!("[{index}]"))
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::TruncatedInput { .. })
    }
}

fn describe_field(field: &str) -> String {
    if field.is_empty() {
        String::new()
    } else {
        format!(" (field `{field}`)")
    }
}
