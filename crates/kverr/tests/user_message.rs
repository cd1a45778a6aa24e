use std::io;

use kverr::{Error, Severity, err, wrap};

#[test]
fn set_then_read_user_message() {
    let mut se = wrap!(io::Error::other("This is a test err"), "This is my message");
    assert_eq!(se.raw_attrs().len(), 6);

    se.set_user_message("Your app needs to be updated", Severity::Warn);
    let (msg, severity) = se.user_message().expect("user message should be set");
    assert_eq!(msg, "Your app needs to be updated");
    assert_eq!(severity, Severity::Warn);
}

#[test]
fn latest_user_message_wins() {
    let mut se = err!("base");
    se.set_user_message("first", Severity::Info);
    se.set_user_message("second", Severity::Error);

    let (msg, severity) = se.user_message().expect("user message");
    assert_eq!(msg, "second");
    assert_eq!(severity, Severity::Error);
}

#[test]
fn warn_severity_reads_back() {
    let mut se = err!("balance check failed");
    se.set_user_message("Low balance", Severity::Warn);
    assert_eq!(
        se.user_message(),
        Some(("Low balance".to_string(), Severity::Warn))
    );
}

#[test]
fn fallback_rules() {
    let cases = [
        ("", "", ""),
        ("User message", "", "User message"),
        ("", "Alt message", "Alt message"),
        ("Some user message", "", "Some user message"),
    ];

    for (usr_msg, alt, expected) in cases {
        let mut se = Error::wrap(io::Error::other("Error message"));
        se.set_user_message(usr_msg, Severity::Info);
        let got = kverr::user_message_or(Some(&se), alt);
        assert_eq!(got, expected, "usr_msg={usr_msg:?} alt={alt:?}");
    }

    assert_eq!(kverr::user_message_or(None, "Alt"), "");

    let plain = io::Error::other("no structure here");
    assert_eq!(kverr::user_message_or(Some(&plain), "Alt"), "Alt");
}
