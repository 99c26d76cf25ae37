use std::collections::TryReserveError;
use std::net::Ipv4Addr;
use thiserror::Error;

/// Per-line failure. The line is skipped and ingestion continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing or malformed SRC= address")]
    BadSourceAddress,

    #[error("missing or malformed DST= address")]
    BadDestinationAddress,
}

/// Unrecoverable failure. Stops ingestion for the owning direction.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("failed to grow storage for {address}: {source}")]
    AppendFailure {
        address: Ipv4Addr,
        #[source]
        source: TryReserveError,
    },
}

impl FatalError {
    pub fn append_failure(address: Ipv4Addr, source: TryReserveError) -> Self {
        Self::AppendFailure { address, source }
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Fatal(#[from] FatalError),
}

impl IngestError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, IngestError::Fatal(_))
    }
}
