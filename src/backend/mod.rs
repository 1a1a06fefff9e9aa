//! Backend module.
//!
//! The backend is the only part of the client talking to the
//! server. The [`Backend`] trait is the seam between the view layer
//! and the transport: [`HttpBackend`] talks to the REST API, tests
//! plug in-memory implementations.

pub mod config;
pub mod error;
pub mod http;

use async_trait::async_trait;

use crate::{
    email::{Draft, Email, EmailId, EmailUpdate, Envelope},
    mailbox::Mailbox,
};

#[doc(inline)]
pub use self::{
    config::ServerConfig,
    error::{Error, Result},
    http::HttpBackend,
};

#[async_trait]
pub trait Backend: Send + Sync {
    /// List the emails of the given mailbox, in server order.
    async fn list_envelopes(&self, mailbox: Mailbox) -> Result<Vec<Envelope>>;

    /// Get the full record of the given email.
    async fn get_email(&self, id: EmailId) -> Result<Email>;

    /// Apply a partial update to the flags of the given email.
    async fn update_email(&self, id: EmailId, update: EmailUpdate) -> Result<()>;

    /// Send the given draft.
    async fn send_email(&self, draft: &Draft) -> Result<()>;
}
