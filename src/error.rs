/// Failures that end a run.
///
/// Configuration problems are classified so the workflow log says what to fix;
/// every other API failure is passed through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No configuration file specified")]
    ConfigurationMissing,

    #[error("Missing configuration file ({path})")]
    ConfigurationNotFound { path: String },

    #[error("Empty configuration file ({path})")]
    ConfigurationEmpty { path: String },

    #[error("Invalid configuration file ({path})")]
    ConfigurationInvalid { path: String },

    #[error("{}", transport_message(.0))]
    Transport(octocrab::Error),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Error::Transport(err)
    }
}

/// GitHub's own message for API errors, otherwise the chain of underlying
/// causes. octocrab's `Display` appends a backtrace, which does not belong in
/// a workflow annotation.
fn transport_message(err: &octocrab::Error) -> String {
    if let octocrab::Error::GitHub { source, .. } = err {
        return source.message.clone();
    }

    let mut causes = Vec::new();
    let mut cause = std::error::Error::source(err);
    while let Some(err) = cause {
        causes.push(err.to_string());
        cause = err.source();
    }
    if causes.is_empty() {
        err.to_string()
    } else {
        causes.join(": ")
    }
}

impl Error {
    pub(crate) fn invalid(path: &str) -> Self {
        Error::ConfigurationInvalid {
            path: path.to_string(),
        }
    }
}
