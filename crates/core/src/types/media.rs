use crate::error::CoreError;

/// Base URL of the media host used to resolve stored relative image paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaHost(String);

impl MediaHost {
    pub fn new(base: &str) -> Result<Self, CoreError> {
        let trimmed = base.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(CoreError::InvalidMediaHost("empty base url".to_string()));
        }
        Ok(MediaHost(trimmed.to_string()))
    }

    pub fn base(&self) -> &str {
        &self.0
    }

    /// Joins a stored media path onto the host base. A missing or blank path
    /// yields `None`, never an empty-string URL; an already-absolute path
    /// passes through unchanged.
    pub fn resolve(&self, path: Option<&str>) -> Option<String> {
        let path = path.map(str::trim).filter(|value| !value.is_empty())?;
        if path.starts_with("http://") || path.starts_with("https://") {
            return Some(path.to_string());
        }
        Some(format!("{}/{}", self.0, path.trim_start_matches('/')))
    }
}

#[cfg(test)]
mod tests {
    use super::MediaHost;

    #[test]
    fn new_trims_trailing_slash() {
        let host = MediaHost::new("https://media.example.com/").unwrap();
        assert_eq!(host.base(), "https://media.example.com");
    }

    #[test]
    fn new_rejects_blank_base() {
        assert!(MediaHost::new("   ").is_err());
    }

    #[test]
    fn resolve_joins_relative_path() {
        let host = MediaHost::new("https://media.example.com").unwrap();
        assert_eq!(
            host.resolve(Some("/uploads/avatar.png")),
            Some("https://media.example.com/uploads/avatar.png".to_string())
        );
        assert_eq!(
            host.resolve(Some("uploads/avatar.png")),
            Some("https://media.example.com/uploads/avatar.png".to_string())
        );
    }

    #[test]
    fn resolve_missing_path_is_none() {
        let host = MediaHost::new("https://media.example.com").unwrap();
        assert_eq!(host.resolve(None), None);
        assert_eq!(host.resolve(Some("")), None);
        assert_eq!(host.resolve(Some("   ")), None);
    }

    #[test]
    fn resolve_passes_absolute_url_through() {
        let host = MediaHost::new("https://media.example.com").unwrap();
        assert_eq!(
            host.resolve(Some("https://cdn.example.com/a.png")),
            Some("https://cdn.example.com/a.png".to_string())
        );
    }
}
