//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core expects from infrastructure and
//! from the host application. They contain no implementation details and
//! use only domain types.

pub mod config_store;
pub mod handoff_store;
pub mod http;
pub mod share;
pub mod status;

pub use config_store::ConfigStore;
pub use handoff_store::{HandoffStore, SHARED_URL_KEY};
pub use http::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError, TransportResult,
};
pub use share::{SharePort, SubmitError, SubmitResult};
pub use status::{ClearError, FetchError, StatusPort};
