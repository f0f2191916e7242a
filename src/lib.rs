//! # Kasbuku (Mini Accounting Backend)
//!
//! `kasbuku` is the authentication backend of the mini accounting product.
//! It registers users, verifies their credentials and issues an opaque
//! bearer token that gates the `/dashboard` endpoint.
//!
//! ## Persistence
//!
//! Users live in a single pretty-printed JSON file. Every operation loads
//! the whole collection into memory and every mutation rewrites the whole
//! file (last write wins). Registration runs under a store-scoped mutex so
//! two concurrent requests cannot both claim the same email.
//!
//! ## Security model
//!
//! There is intentionally **none**: passwords are stored and compared in
//! clear text and the session token is a reversible base64 encoding with
//! no signature. Both weaknesses come from the product contract and are
//! documented where they live ([`auth::token`], [`auth::store`]) instead
//! of being silently hardened.

pub mod api;
pub mod auth;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
