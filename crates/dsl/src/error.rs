use thiserror::Error;

/// Errors raised while constructing vocabulary nodes.
#[derive(Debug, Error)]
pub enum DslError {
    /// A URL-typed attribute received input that is neither a valid absolute
    /// URL nor a relative reference.
    #[error("invalid URL `{input}`: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

/// Accepts valid absolute URLs and any relative reference; rejects inputs
/// that fail to parse for some other reason (bad port, invalid IPv6 literal,
/// forbidden characters in the host).
pub(crate) fn validate_url(input: &str) -> Result<(), DslError> {
    match url::Url::parse(input) {
        Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => Ok(()),
        Err(source) => Err(DslError::InvalidUrl {
            input: input.to_string(),
            source,
        }),
    }
}
