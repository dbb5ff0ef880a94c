//! Input validation and sanitization
//!
//! Pure checks for sign-up form input plus the sanitizer applied to every
//! notification message before it reaches the screen. All functions are
//! deterministic and never fail; malformed input yields a negative verdict,
//! not an error.

/// Checks that a string has the rough shape of an email address
///
/// Permissive syntactic check: exactly one `@`, a non-empty local part, a
/// domain containing at least one `.` with non-empty segments around the
/// last dot, and no whitespace anywhere.
///
/// # Arguments
/// - `input` - The candidate email address
///
/// # Returns
/// `true` if the string looks like `localpart@domain.tld`
///
/// # Limitations
/// This is a sanity check for form feedback, not RFC 5322 validation.
/// Plenty of technically valid addresses are rejected and some invalid
/// ones accepted.
pub fn validate_email(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Result of checking a password against the composition rules
///
/// Each rule is reported independently so the UI can show a checklist.
/// Computed fresh on every call, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordAssessment {
    /// At least 8 characters
    pub has_length: bool,
    /// At least one ASCII uppercase letter
    pub has_upper: bool,
    /// At least one ASCII lowercase letter
    pub has_lower: bool,
    /// At least one ASCII digit
    pub has_number: bool,
}

impl PasswordAssessment {
    /// True only when every rule is satisfied
    pub fn is_valid(&self) -> bool {
        self.has_length && self.has_upper && self.has_lower && self.has_number
    }

    /// Names of the rules that are not yet satisfied, for display
    pub fn failed_rules(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if !self.has_length {
            failed.push("at least 8 characters");
        }
        if !self.has_upper {
            failed.push("an uppercase letter");
        }
        if !self.has_lower {
            failed.push("a lowercase letter");
        }
        if !self.has_number {
            failed.push("a digit");
        }
        failed
    }
}

/// Assesses a password against the four composition rules
///
/// Rules are ASCII-based and locale-insensitive: length is counted in
/// characters, and letter/digit classes are the ASCII ones.
///
/// # Arguments
/// - `input` - The candidate password
///
/// # Returns
/// A `PasswordAssessment` with one flag per rule
pub fn validate_password(input: &str) -> PasswordAssessment {
    PasswordAssessment {
        has_length: input.chars().count() >= 8,
        has_upper: input.chars().any(|c| c.is_ascii_uppercase()),
        has_lower: input.chars().any(|c| c.is_ascii_lowercase()),
        has_number: input.chars().any(|c| c.is_ascii_digit()),
    }
}

/// Sanitizes untrusted text before it is shown in a notification
///
/// Replaces every control character (including ESC) with a space. Raw
/// control bytes are the terminal's injection vector: an embedded escape
/// sequence could restyle or clobber the screen the same way unescaped
/// markup would in a browser.
///
/// # Arguments
/// - `input` - Untrusted message text
///
/// # Returns
/// The message with all control characters replaced by spaces
pub fn sanitize_message(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
