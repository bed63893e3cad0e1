use {
    std::{io, path::PathBuf},
    thiserror::Error,
};

/// a failure to sample one of the host's metrics.
///
/// once a tick fails with one of these, the dashboard stops sampling. its display text is shown
/// verbatim in the error view.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SampleError {
    #[error("no cpus reported by the system")]
    NoCpus,
    #[error("total memory reported as zero")]
    NoMemory,
    #[error("no filesystem mounted at {}", .0.display())]
    NoFilesystem(PathBuf),
    #[error("filesystem mounted at {} reports zero capacity", .0.display())]
    EmptyFilesystem(PathBuf),
    #[error("process enumeration is not supported on this platform")]
    Unsupported,
    /// a failure reported by some other metrics source.
    #[error("{0}")]
    Source(String),
}

/// a failure to look up the name of a single process.
///
/// these never escalate; the process is left out of the listing.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LookupError {
    #[error("process {pid} has a name that is not valid utf-8")]
    NotUtf8 { pid: u32 },
}

/// a failure of the terminal surface.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// the terminal could not be prepared for drawing.
    #[error("failed to initialize the terminal: {0}")]
    Init(#[source] io::Error),
    /// drawing a frame, or reading input, failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}
