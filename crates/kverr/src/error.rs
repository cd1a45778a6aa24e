//! The structured error type: construction, wrapping, and query operations.

use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use crate::DynError;
use crate::attr::{self, AttrValue};
use crate::render;
use crate::site::{CallSite, FUNCTION_KEY, LOCATION_KEY};

/// An error carrying one wrapped cause plus a flat ordered list of key/value
/// attributes for structured logging.
///
/// Construction is monotonic: wrapping never touches the cause, it only
/// appends attributes. The attribute list always holds an even number of
/// cells; odd input is repaired by [`attr::normalize`] before storage.
pub struct Error {
    cause: DynError,
    attrs: Vec<AttrValue>,
}

impl Error {
    /// Wrap a cause with no attributes and no call-site capture.
    pub fn new(cause: impl Into<DynError>) -> Self {
        Self {
            cause: cause.into(),
            attrs: Vec::new(),
        }
    }

    /// Wrap an optional cause, substituting a placeholder when it is `None`.
    ///
    /// Constructing an error around nothing is a misuse, but the result must
    /// stay usable for diagnostics, so the misuse itself becomes the cause
    /// and a warning is emitted with the caller's location.
    #[track_caller]
    pub fn from_cause(cause: Option<DynError>) -> Self {
        match cause {
            Some(cause) => Self::new(cause),
            None => {
                let site = CallSite::here();
                warn!(
                    location = site.location(),
                    "structured error created without a cause"
                );
                Self::new("structured error created without a cause")
            }
        }
    }

    /// Wrap an existing error, carrying forward any structured attributes.
    ///
    /// If `err` is already a structured [`Error`], its cause and attribute
    /// list survive unchanged and new attributes append after them. Any other
    /// error becomes the cause of a fresh instance.
    pub fn wrap(err: impl Into<DynError>) -> Self {
        match err.into().downcast::<Error>() {
            Ok(se) => *se,
            Err(cause) => Self {
                cause,
                attrs: Vec::new(),
            },
        }
    }

    /// Normalize `fields` and append them to the attribute list.
    pub fn with_attrs(mut self, fields: Vec<AttrValue>) -> Self {
        self.append_attrs(fields);
        self
    }

    /// Append the call site as `location` and `function` attributes.
    pub fn with_site(mut self, site: CallSite) -> Self {
        self.attrs.push(AttrValue::from(LOCATION_KEY));
        self.attrs.push(AttrValue::from(site.location()));
        self.attrs.push(AttrValue::from(FUNCTION_KEY));
        self.attrs.push(AttrValue::from(site.function()));
        self
    }

    /// Normalize `fields` and append them in place.
    ///
    /// One of the two designated mutating accessors. Concurrent use on a
    /// shared instance needs external synchronization; wrapping into a new
    /// value is the thread-safe pattern.
    pub fn append_attrs(&mut self, fields: Vec<AttrValue>) {
        self.attrs.extend(attr::normalize(fields));
    }

    /// The cause's message text.
    pub fn message(&self) -> String {
        self.cause.to_string()
    }

    /// The originally wrapped error, unchanged across all wraps.
    pub fn cause(&self) -> &(dyn std::error::Error + 'static) {
        self.cause.as_ref()
    }

    /// The flat attribute sequence with every value coerced to display form.
    pub fn attrs(&self) -> Vec<String> {
        self.attrs.iter().map(ToString::to_string).collect()
    }

    /// The flat attribute sequence with its typed values.
    pub fn raw_attrs(&self) -> &[AttrValue] {
        &self.attrs
    }

    /// Deduplicated map view of the attributes.
    pub fn attrs_map(&self) -> HashMap<String, String> {
        attr::to_map(&self.attrs)
    }

    /// The raw value for `key` from the deduplicated view.
    ///
    /// A unique key returns its typed value; a repeated key returns the
    /// newest-first concatenated string; `None` when absent.
    pub fn attr(&self, key: &str) -> Option<AttrValue> {
        attr::dedup_map(&self.attrs).remove(key)
    }

    pub(crate) fn latest_attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs
            .chunks_exact(2)
            .rev()
            .find(|pair| pair[0].to_string() == key)
            .map(|pair| &pair[1])
    }

    /// Full display form: cause message plus the rendered attribute map.
    ///
    /// The layout is `"<message> [error_attrs] => key->value; key->value"`;
    /// entry order follows map iteration order.
    pub fn display_string(&self) -> String {
        format!(
            "{} [error_attrs] => {}",
            self.message(),
            self.render_attrs("->", "; ")
        )
    }

    /// Attribute map rendered with a caller-chosen pair joiner and entry
    /// delimiter, over the same deduplicated view as [`attrs_map`](Self::attrs_map).
    pub fn render_attrs(&self, pair_joiner: &str, entry_delim: &str) -> String {
        render::render_pairs(&self.attrs_map(), pair_joiner, entry_delim)
    }
}

/// Wrap an optional error, treating `None` as a no-op.
///
/// Wrapping "nothing" is a misuse at the call site rather than an error, so
/// it is reported with the given site's location and `None` is returned.
pub fn wrap_opt<E>(err: Option<E>, fields: Vec<AttrValue>, site: CallSite) -> Option<Error>
where
    E: Into<DynError>,
{
    match err {
        Some(err) => Some(Error::wrap(err).with_attrs(fields).with_site(site)),
        None => {
            warn!(location = site.location(), "wrap called without an error");
            None
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cause, f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.cause)?;
        if !self.attrs.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Attributes:")?;
            for pair in self.attrs.chunks(2) {
                match pair {
                    [key, value] => writeln!(f, "        {key}: {value}")?,
                    [key] => writeln!(f, "        {key}: <no value>")?,
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::new(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::new(msg.to_string())
    }
}

/// Construct a structured error from a message or cause, capturing the call
/// site.
#[macro_export]
macro_rules! err {
    ($cause:expr $(, $field:expr)* $(,)?) => {
        $crate::Error::new($cause)
            .with_attrs($crate::attrs![$($field),*])
            .with_site($crate::callsite!())
    };
}

/// Construct a structured error from a formatted message, capturing the call
/// site.
#[macro_export]
macro_rules! errf {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::Error::new(::std::format!($fmt $(, $arg)*))
            .with_site($crate::callsite!())
    };
}

/// Wrap an error with additional attributes, capturing the call site.
///
/// A single attribute is stored under the `msg` key; an odd list promotes
/// its first element the same way.
#[macro_export]
macro_rules! wrap {
    ($err:expr $(, $field:expr)* $(,)?) => {
        $crate::Error::wrap($err)
            .with_attrs($crate::attrs![$($field),*])
            .with_site($crate::callsite!())
    };
}

/// Wrap an error with a formatted message attribute, capturing the call site.
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::Error::wrap($err)
            .with_attrs($crate::attrs![::std::format!($fmt $(, $arg)*)])
            .with_site($crate::callsite!())
    };
}

/// Wrap an optional error; `None` stays `None` and is reported as a misuse.
#[macro_export]
macro_rules! wrap_opt {
    ($err:expr $(, $field:expr)* $(,)?) => {
        $crate::wrap_opt($err, $crate::attrs![$($field),*], $crate::callsite!())
    };
}

/// Formatted variant of [`wrap_opt!`](macro@crate::wrap_opt).
#[macro_export]
macro_rules! wrapf_opt {
    ($err:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::wrap_opt(
            $err,
            $crate::attrs![::std::format!($fmt $(, $arg)*)],
            $crate::callsite!(),
        )
    };
}
