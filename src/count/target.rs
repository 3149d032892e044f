use thiserror::Error;

/// Why a target byte specification was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetByteError {
    #[error("empty byte specification")]
    Empty,
    #[error("'{0}' is not a single byte")]
    NotSingleByte(String),
    #[error("unknown escape sequence '{0}'")]
    UnknownEscape(String),
    #[error("invalid hex byte '{0}'")]
    InvalidHex(String),
}

/// Parse the byte to count.
///
/// Accepted forms:
/// - a single one-byte character: `,` `;` `|`
/// - a backslash escape: `\n` `\t` `\r` `\0` `\\`
/// - a hex literal: `0x2c` / `0X2C`
pub fn parse_target_byte(spec: &str) -> Result<u8, TargetByteError> {
    let bytes = spec.as_bytes();
    match bytes {
        [] => Err(TargetByteError::Empty),
        [b] => Ok(*b),
        [b'\\', esc] => match *esc {
            b'n' => Ok(b'\n'),
            b't' => Ok(b'\t'),
            b'r' => Ok(b'\r'),
            b'0' => Ok(0),
            b'\\' => Ok(b'\\'),
            _ => Err(TargetByteError::UnknownEscape(spec.to_string())),
        },
        [b'0', b'x' | b'X', hex @ ..] => {
            if hex.is_empty() || hex.len() > 2 || !hex.iter().all(u8::is_ascii_hexdigit) {
                return Err(TargetByteError::InvalidHex(spec.to_string()));
            }
            u8::from_str_radix(&spec[2..], 16)
                .map_err(|_| TargetByteError::InvalidHex(spec.to_string()))
        }
        _ => Err(TargetByteError::NotSingleByte(spec.to_string())),
    }
}
