//! Application name configuration for storage paths

use std::path::PathBuf;

/// Application identifier used to determine storage location
///
/// The file backend follows the [XDG Base Directory Specification](https://specifications.freedesktop.org/basedir-spec/basedir-spec-latest.html)
/// on Linux and similar conventions on other platforms.
///
/// # Example
///
/// ```
/// use shopping_list_storage::AppName;
///
/// let app_name = AppName::new("com", "example", "myapp");
/// if let Some(dir) = app_name.storage_dir() {
///     assert!(dir.ends_with("store"));
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppName {
    pub qualifier: String,
    pub organization: String,
    pub application: String,
}

impl AppName {
    /// Create a new application name
    ///
    /// # Arguments
    ///
    /// * `qualifier` - Typically a reverse domain name (e.g., "com", "org")
    /// * `organization` - Your organization or username (e.g., "mycompany")
    /// * `application` - The application name (e.g., "myapp")
    pub fn new(
        qualifier: impl Into<String>,
        organization: impl Into<String>,
        application: impl Into<String>,
    ) -> Self {
        Self {
            qualifier: qualifier.into(),
            organization: organization.into(),
            application: application.into(),
        }
    }

    /// Directory holding this application's slot files
    ///
    /// - Linux: `$XDG_CONFIG_HOME/<app>/store` or `~/.config/<app>/store`
    /// - macOS: `~/Library/Application Support/<qualifier>.<org>.<app>/store`
    /// - Windows: `%LOCALAPPDATA%\<org>\<app>\config\store`
    ///
    /// Returns `None` when no home directory can be resolved.
    pub fn storage_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from(&self.qualifier, &self.organization, &self.application)
            .map(|dirs| dirs.config_local_dir().join("store"))
    }
}
