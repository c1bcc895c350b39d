pub mod invocation;
pub mod nmap;
pub mod traits;
pub mod xml;

pub use invocation::{InvocationError, ScanInvocation, locate_nmap};
pub use nmap::NmapEngine;
pub use traits::{EngineError, EngineReport, ScanEngine};
pub use xml::parse_run_xml;
pub use tokio_util::sync::CancellationToken;
