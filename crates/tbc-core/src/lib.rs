//! Transport core for the Telegram Bot API client.
//!
//! Builds one HTTP request per operation (JSON or multipart), runs it through
//! an injectable [`transport::HttpTransport`], and classifies the reply
//! envelope into a typed result or a typed error. Data shapes and the
//! operation catalog live in `tbc-api`.

pub mod config;
pub mod envelope;
pub mod errors;
pub mod logging;
pub mod multipart;
pub mod transport;

pub use config::ClientConfig;
pub use envelope::ResponseParameters;
pub use errors::{ApiError, Error, Result};
pub use multipart::{Attachment, InputFile};
pub use transport::{Dispatcher, HttpRequest, HttpResponse, HttpTransport, RequestBody};
