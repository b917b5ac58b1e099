use thiserror::Error;

/// Errors that can occur while loading and parsing ZFS statistics
#[derive(Debug, Error)]
pub enum ZfsError {
    /// Command execution failed
    #[error("Command failed: {command} {args:?}")]
    CommandError {
        command: String,
        args: Vec<String>,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// File system operation failed
    #[error("Filesystem {operation} failed for path: {path}")]
    FilesystemError {
        path: String,
        operation: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A value that must be an unsigned 64-bit number is not one
    #[error("Failed to parse {data_source}: {reason} (got '{data}')")]
    ParseError {
        data_source: String,
        data: String,
        reason: String,
    },

    /// Invalid or unexpected data format
    #[error("Invalid format in {context}: expected {expected}, received '{received}'")]
    InvalidFormat {
        expected: String,
        received: String,
        context: String,
    },

    /// A statistic the report depends on is absent from its section
    #[error("Statistic '{name}' missing from {section} statistics")]
    MissingStatistic { section: String, name: String },

    /// Required ZFS subsystem not available
    #[error("{subsystem} subsystem unavailable: {reason}")]
    SubsystemUnavailable { subsystem: String, reason: String },

    /// Section name outside the registry
    #[error("Unknown section '{0}' (expected one of arc, dmu, l2arc, tunables, vdev, xuio, zfetch, zil)")]
    UnknownSection(String),

    /// Timeout occurred during operation
    #[error("{operation} timed out after {timeout:?}")]
    TimeoutError {
        operation: String,
        timeout: std::time::Duration,
    },
}

impl ZfsError {
    /// Create a command error
    pub fn command_error(command: &str, args: &[&str], message: &str) -> Self {
        ZfsError::CommandError {
            command: command.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            source: message.to_string().into(),
        }
    }

    /// Create a filesystem error
    pub fn filesystem_error(path: &str, operation: &str, message: &str) -> Self {
        ZfsError::FilesystemError {
            path: path.to_string(),
            operation: operation.to_string(),
            source: message.to_string().into(),
        }
    }

    /// Create a parse error
    pub fn parse_error(data_source: &str, data: &str, reason: &str) -> Self {
        ZfsError::ParseError {
            data_source: data_source.to_string(),
            data: data.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid format error
    pub fn invalid_format(expected: &str, received: &str, context: &str) -> Self {
        ZfsError::InvalidFormat {
            expected: expected.to_string(),
            received: received.to_string(),
            context: context.to_string(),
        }
    }

    pub fn missing_statistic(section: &str, name: &str) -> Self {
        ZfsError::MissingStatistic {
            section: section.to_string(),
            name: name.to_string(),
        }
    }

    /// Create a subsystem unavailable error
    pub fn subsystem_unavailable(subsystem: &str, reason: &str) -> Self {
        ZfsError::SubsystemUnavailable {
            subsystem: subsystem.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a timeout error
    pub fn timeout_error(operation: &str, timeout: std::time::Duration) -> Self {
        ZfsError::TimeoutError {
            operation: operation.to_string(),
            timeout,
        }
    }
}

/// Result type alias for ZFS operations
pub type ZfsResult<T> = Result<T, ZfsError>;
