pub mod aggregate;
pub mod service;
pub mod vulners;

pub use aggregate::{OutputError, build_response};
pub use service::{CoreError, VulnService};
pub use vulners::{ParseError, VulnersElement, parse_vulners_element};
pub use tokio_util::sync::CancellationToken;
