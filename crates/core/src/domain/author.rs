/// Display name used when an author cannot be resolved at all.
pub const UNKNOWN_USER: &str = "Unknown User";

/// Author record carried inline on a comment, for either account kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorProfile {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image: Option<String>,
}

impl AuthorProfile {
    pub fn display_name(&self) -> String {
        format_display_name(
            self.first_name.as_deref(),
            self.middle_name.as_deref(),
            self.last_name.as_deref(),
        )
    }
}

/// A comment author is either a client or a job-seeker account. Both carry
/// the same profile fields; the distinction matters to the backend, not to
/// display resolution.
#[derive(Debug, Clone)]
pub enum AuthorRef {
    Client(AuthorProfile),
    JobSeeker(AuthorProfile),
}

impl AuthorRef {
    pub fn profile(&self) -> &AuthorProfile {
        match self {
            AuthorRef::Client(profile) | AuthorRef::JobSeeker(profile) => profile,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.profile().id.as_deref()
    }
}

/// Identity record returned by the batched username lookup, keyed externally
/// by author id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorIdentity {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image: Option<String>,
}

impl AuthorIdentity {
    pub fn display_name(&self) -> String {
        format_display_name(
            self.first_name.as_deref(),
            self.middle_name.as_deref(),
            self.last_name.as_deref(),
        )
    }
}

/// Composes `"First M. Last"`, omitting the middle segment entirely when no
/// middle name exists. Missing name parts fall back to `"Unknown"` / `"User"`.
pub fn format_display_name(
    first_name: Option<&str>,
    middle_name: Option<&str>,
    last_name: Option<&str>,
) -> String {
    let first = non_blank(first_name).unwrap_or("Unknown");
    let last = non_blank(last_name).unwrap_or("User");
    match non_blank(middle_name).and_then(|middle| middle.chars().next()) {
        Some(initial) => format!("{first} {initial}. {last}"),
        None => format!("{first} {last}"),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{AuthorProfile, AuthorRef, format_display_name};

    #[test]
    fn format_display_name_with_middle_initial() {
        assert_eq!(
            format_display_name(Some("Jane"), Some("Ann"), Some("Cruz")),
            "Jane A. Cruz"
        );
    }

    #[test]
    fn format_display_name_without_middle_has_single_space() {
        assert_eq!(format_display_name(Some("Jane"), None, Some("Cruz")), "Jane Cruz");
        assert_eq!(format_display_name(Some("Jane"), Some("  "), Some("Cruz")), "Jane Cruz");
    }

    #[test]
    fn format_display_name_defaults_missing_parts() {
        assert_eq!(format_display_name(None, None, None), "Unknown User");
        assert_eq!(format_display_name(Some("Jane"), None, None), "Jane User");
        assert_eq!(format_display_name(None, None, Some("Cruz")), "Unknown Cruz");
    }

    #[test]
    fn author_ref_exposes_profile_for_both_kinds() {
        let profile = AuthorProfile {
            id: Some("u1".to_string()),
            first_name: Some("Jane".to_string()),
            ..AuthorProfile::default()
        };
        assert_eq!(AuthorRef::Client(profile.clone()).user_id(), Some("u1"));
        assert_eq!(AuthorRef::JobSeeker(profile).user_id(), Some("u1"));
    }
}
