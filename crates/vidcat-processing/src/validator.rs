use vidcat_core::constants::MEDIA_EXTENSION;
use vidcat_storage::{safe_file_name, MediaCandidate};

/// Reasons an upload is not acceptable media
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty file: {0}")]
    EmptyFile(String),

    #[error("Missing file extension (filename: {0})")]
    MissingExtension(String),

    #[error("Invalid file extension: {extension} (allowed: {allowed:?})")]
    InvalidExtension {
        extension: String,
        allowed: Vec<String>,
    },
}

/// Media file validator
///
/// Judges an upload by its client-declared name and its length only. The content is
/// never sniffed, so a renamed file passes as long as the extension matches.
#[derive(Debug, Clone)]
pub struct MediaValidator {
    allowed_extensions: Vec<String>,
}

impl Default for MediaValidator {
    fn default() -> Self {
        Self::new(vec![MEDIA_EXTENSION.to_string()])
    }
}

impl MediaValidator {
    pub fn new(allowed_extensions: Vec<String>) -> Self {
        Self {
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Pure predicate: `false` for an absent candidate, an empty payload or a name
    /// without a recognized extension.
    pub fn is_valid(&self, candidate: Option<&dyn MediaCandidate>) -> bool {
        match candidate {
            Some(candidate) => self.validate(candidate).is_ok(),
            None => false,
        }
    }

    /// Same checks as [`is_valid`](Self::is_valid), reporting the first failure.
    pub fn validate(&self, candidate: &dyn MediaCandidate) -> Result<(), ValidationError> {
        let file_name = candidate.file_name();

        if candidate.is_empty() {
            return Err(ValidationError::EmptyFile(file_name.to_string()));
        }

        self.validate_extension(file_name)
    }

    /// Validate the extension of the name's final path component (case-insensitive).
    pub fn validate_extension(&self, file_name: &str) -> Result<(), ValidationError> {
        let base = safe_file_name(file_name)
            .map_err(|_| ValidationError::MissingExtension(file_name.to_string()))?;

        let extension = base
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .ok_or_else(|| ValidationError::MissingExtension(file_name.to_string()))?;

        if !self
            .allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
        {
            tracing::debug!(file_name = %file_name, extension = %extension, "Rejected extension");
            return Err(ValidationError::InvalidExtension {
                extension: extension.to_lowercase(),
                allowed: self.allowed_extensions.clone(),
            });
        }

        Ok(())
    }
}
