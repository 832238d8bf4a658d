//! Outbound email notification for new contact-form submissions.
//!
//! - [`Notifier`]: the seam the HTTP layer calls once per stored submission.
//! - [`SmtpMailer`]: SMTP implementation built on `lettre`.
//! - [`DisabledNotifier`]: stand-in used when no mail credentials are set.

pub mod email;

pub use email::{DisabledNotifier, MailConfig, MailError, Notifier, SmtpMailer};
