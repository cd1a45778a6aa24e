//! The end-user message and severity attributes.
//!
//! Two reserved keys carry an optional message meant for display to the
//! application's user, distinct from the internal diagnostic attributes. The
//! key spellings are fixed; logging pipelines match on them verbatim.

use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::attr::AttrValue;
use crate::error::Error;

/// Attribute key carrying the end-user message.
pub const USER_MSG_KEY: &str = "userMsgKey";

/// Attribute key carrying the end-user severity tag.
pub const USER_MSG_SEVERITY_KEY: &str = "userMsgSeverityKey";

/// Severity vocabulary for end-user messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// The operation succeeded; the message is informational good news.
    Success,
    /// The operation failed and the user should know.
    Error,
    /// Something is off but the operation went through.
    Warn,
    /// Neutral information.
    Info,
}

impl Severity {
    /// Returns the severity as a static string.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

impl Error {
    /// Append the reserved user-message attributes.
    ///
    /// Prior user-message attributes are kept in the list; the latest pair
    /// wins on read. The second of the two designated mutating accessors;
    /// concurrent use on a shared instance needs external synchronization.
    pub fn set_user_message(&mut self, msg: impl Into<String>, severity: Severity) {
        self.append_attrs(vec![
            AttrValue::from(USER_MSG_KEY),
            AttrValue::Str(msg.into()),
            AttrValue::from(USER_MSG_SEVERITY_KEY),
            AttrValue::from(severity.as_str()),
        ]);
    }

    /// The latest user message and severity, if one was set.
    ///
    /// Returns `None` when no user message is present or it is empty. A
    /// missing or unrecognized severity tag falls back to [`Severity::Info`].
    pub fn user_message(&self) -> Option<(String, Severity)> {
        let text = self.latest_attr(USER_MSG_KEY)?.to_string();
        if text.is_empty() {
            return None;
        }
        let severity = self
            .latest_attr(USER_MSG_SEVERITY_KEY)
            .and_then(|v| v.to_string().parse().ok())
            .unwrap_or(Severity::Info);
        Some((text, severity))
    }
}

/// The user message of a structured error, or `fallback` when it has none.
///
/// A `None` error yields the empty string; the fallback applies only when a
/// real error lacks a usable user message.
pub fn user_message_or(err: Option<&(dyn std::error::Error + 'static)>, fallback: &str) -> String {
    let Some(err) = err else {
        return String::new();
    };
    match err.downcast_ref::<Error>().and_then(Error::user_message) {
        Some((msg, _)) => msg,
        None => fallback.to_string(),
    }
}

/// The enriched display string of a structured error, the plain message of
/// any other error, or the empty string for `None`.
pub fn string_from_err(err: Option<&(dyn std::error::Error + 'static)>) -> String {
    let Some(err) = err else {
        return String::new();
    };
    match err.downcast_ref::<Error>() {
        Some(se) => se.display_string(),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_display_is_lowercase() {
        assert_eq!(Severity::Warn.to_string(), "warn");
        assert_eq!(Severity::Success.as_str(), "success");
    }

    #[test]
    fn severity_parses_from_its_string_form() {
        assert_eq!("error".parse::<Severity>().ok(), Some(Severity::Error));
        assert_eq!("info".parse::<Severity>().ok(), Some(Severity::Info));
        assert!("loud".parse::<Severity>().is_err());
    }
}
