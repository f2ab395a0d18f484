//! Build options

/// Options controlling how a project is built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Treat record and reference errors as fatal
    pub strict: bool,

    /// Select a named project variant, or rename the project
    pub project_name: Option<String>,

    /// Glob patterns, relative to the scanned folder, of files to skip
    pub exclude: Vec<String>,
}

impl BuildOptions {
    pub fn new(strict: bool) -> Self {
        Self {
            strict,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    /// The project name override, ignoring blank values
    pub fn project_name(&self) -> Option<&str> {
        self.project_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let options = BuildOptions::default();
        assert!(!options.strict);
        assert!(options.project_name().is_none());
        assert!(options.exclude.is_empty());
    }

    #[test]
    fn test_blank_project_name_is_ignored() {
        let options = BuildOptions::new(false).with_project_name("  ");
        assert!(options.project_name().is_none());
    }

    #[test]
    fn test_builder_methods() {
        let options = BuildOptions::new(true)
            .with_project_name("P")
            .with_exclude("drafts/**");
        assert!(options.strict);
        assert_eq!(options.project_name(), Some("P"));
        assert_eq!(options.exclude, vec!["drafts/**"]);
    }
}
