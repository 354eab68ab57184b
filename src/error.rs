use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{path}: read failed: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),
    #[error("formatting failed")]
    Format(#[from] std::fmt::Error),
    #[error("bad config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("skip of {skip} bytes exceeds file size {size}")]
    SkipOutOfRange { skip: usize, size: usize },
    #[error("len of {len} bytes exceeds remaining {remaining} bytes after skip")]
    LenOutOfRange { len: usize, remaining: usize },
}
