use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

const REDACTED_TOKEN: &str = "[REDACTED_TOKEN]";

// SAFETY (unwrap): vetted literals, exercised by the tests below.
#[allow(clippy::unwrap_used)]
static BEARER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[Bb]earer\s+\S+").unwrap());

/// Compact JWS: base64url header starting with `{"` (`eyJ`), payload, signature.
#[allow(clippy::unwrap_used)]
static JWT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\beyJ[A-Za-z0-9_-]*\.[A-Za-z0-9_-]*\.[A-Za-z0-9_-]*").unwrap());

#[allow(clippy::unwrap_used)]
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap());

/// Long opaque runs (secrets, session ids).
#[allow(clippy::unwrap_used)]
static OPAQUE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Za-z0-9+/_-]{24,}").unwrap());

/// Mask credentials and emails in free text before it reaches the logs.
///
/// Bearer values and JWTs become `[REDACTED_TOKEN]`; emails keep the first
/// character of the local part and the full domain.
pub fn redact(input: &str) -> String {
    let out = BEARER_REGEX.replace_all(input, format!("Bearer {REDACTED_TOKEN}").as_str());
    let out = JWT_REGEX.replace_all(&out, REDACTED_TOKEN);
    let out = EMAIL_REGEX.replace_all(&out, |caps: &regex::Captures| {
        let full = &caps[0];
        match full.split_once('@') {
            Some((local, domain)) if !local.is_empty() => {
                format!("{}***@{domain}", &local[..1])
            }
            _ => full.to_string(),
        }
    });
    OPAQUE_REGEX.replace_all(&out, REDACTED_TOKEN).into_owned()
}

/// Keep the first character of a username, mask the rest.
pub fn mask_username(username: &str) -> String {
    match username.chars().next() {
        Some(first) => format!("{first}***"),
        None => String::new(),
    }
}

/// Display wrapper that applies [`redact`].
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
