//! Input checks applied before a text is handed to the tree builder.
//!
//! Construction itself never validates: it is total over any byte slice, but
//! the "one leaf per suffix" guarantee only holds when the text ends with a
//! sentinel byte that occurs nowhere else. Callers that cannot vouch for their
//! input run it through [`validate`] or [`prepare`] first.

use std::borrow::Cow;

/// Terminal sentinel used when no other byte is configured.
pub const DEFAULT_SENTINEL: u8 = b'$';

/// Errors raised while checking a text at the construction boundary.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("text is empty")]
    Empty,
    #[error("text does not end with the sentinel {:?}", char::from(*.sentinel))]
    MissingSentinel { sentinel: u8, last: Option<u8> },
    #[error("sentinel {:?} also occurs at position {position}", char::from(*.sentinel))]
    SentinelNotUnique { sentinel: u8, position: usize },
}

/// Options that govern how a raw text is turned into a buildable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextConfig {
    /// Byte that terminates the text and occurs nowhere else.
    pub sentinel: u8,
    /// Append the sentinel when the raw text does not already end with it.
    pub append_sentinel: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL,
            append_sentinel: false,
        }
    }
}

/// Check that `text` is non-empty and that its last byte is the only
/// occurrence of the configured sentinel.
pub fn validate(text: &[u8], config: &TextConfig) -> Result<(), TextError> {
    let (&last, body) = text.split_last().ok_or(TextError::Empty)?;
    if last != config.sentinel {
        return Err(TextError::MissingSentinel {
            sentinel: config.sentinel,
            last: Some(last),
        });
    }
    if let Some(position) = body.iter().position(|&b| b == config.sentinel) {
        return Err(TextError::SentinelNotUnique {
            sentinel: config.sentinel,
            position,
        });
    }
    Ok(())
}

/// Apply `config` to a raw text, appending the sentinel if requested, and
/// validate the result.
///
/// The raw text is borrowed unchanged whenever no sentinel has to be added.
pub fn prepare<'a>(raw: &'a [u8], config: &TextConfig) -> Result<Cow<'a, [u8]>, TextError> {
    let text = if config.append_sentinel && raw.last() != Some(&config.sentinel) {
        let mut owned = Vec::with_capacity(raw.len() + 1);
        owned.extend_from_slice(raw);
        owned.push(config.sentinel);
        Cow::Owned(owned)
    } else {
        Cow::Borrowed(raw)
    };
    validate(&text, config)?;
    Ok(text)
}
