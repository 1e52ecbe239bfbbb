//! # Contact
//!
//! The contact form: local validation, a single best-effort delivery to an
//! external endpoint, and the submission status shown under the button.

pub mod form;
pub mod inflight;
pub mod session;
pub mod transport;

pub use form::{is_valid_email, validate, ContactForm, Field, FieldErrors};
pub use inflight::{InFlight, InFlightClaim};
pub use session::{ContactSession, SubmitOutcome, SubmitStatus};
pub use transport::{ContactTransport, HttpContactTransport};
