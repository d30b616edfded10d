//! # keep-token-alive
//!
//! Obtain or renew a session token against an HTTP API.
//!
//! Without an existing token the credentials are exchanged for a fresh one at
//! the login endpoint. With an existing token the refresh endpoint is pinged
//! first; when it answers `success: false` the credentials are used to log in
//! again. On a successful refresh the existing token is kept as is.
//!
//! The resulting token is the only thing written to stdout, logs go to stderr.

pub mod cli;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
