use skillswap_core::PreconditionViolation;

/// Errors specific to skillswap-tui.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TUI channel closed")]
    ChannelClosed,

    #[error("carousel setup failed: {0}")]
    Carousel(#[from] PreconditionViolation),
}
