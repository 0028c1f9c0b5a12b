//! # Client Library
//!
//! Browser-independent logic behind the site's two scripts:
//!
//! - **[`star`]**: the falling-star spawner (random star parameters, one tick,
//!   start/stop lifecycle) written against [`star::StarCanvas`] and
//!   [`star::Scheduler`].
//! - **[`submission`]**: the contact form state machine (trim, validate, POST,
//!   report) written against [`submission::FormView`] and
//!   [`submission::ContactTransport`].
//! - **[`config`]**: where the form posts to.
//!
//! `site-web` implements the traits with `web-sys`, `gloo-timers` and
//! `gloo-net`; tests implement them with plain Rust fakes.

pub mod config;
pub mod star;
pub mod submission;

#[cfg(feature = "reqwest")]
pub mod transport;

pub use config::{resolve_endpoint, DEFAULT_CONTACT_ENDPOINT};
pub use star::{Scheduler, Star, StarCanvas, StarSpawner};
pub use submission::{
    ContactSubmitter, ContactTransport, FormFields, FormView, JsonRequest, StatusMessage,
    StatusTone, SubmitError, TransportError, TransportResponse, ValidationError,
};
