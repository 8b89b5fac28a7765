use thiserror::Error;

/// Failure modes of a Tropy API call.
///
/// The caller must still check the result, but the three cases stay
/// distinguishable: the request never completed, the server answered with
/// something other than 200, or a 200 body did not decode.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response body not read.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status other than HTTP 200. The response
    /// body is discarded.
    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    /// A 200 response whose body did not decode into the expected shape.
    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_names_the_code() {
        let err = ApiError::Status { status: 404 };
        assert_eq!(err.to_string(), "server returned HTTP 404");
    }
}
