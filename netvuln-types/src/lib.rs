pub mod host;
pub mod port;
pub mod response;
pub mod run;
pub mod script;
pub mod service;

pub use host::{Address, HostRecord, HostState, Hostname};
pub use port::{PortRecord, PortState};
pub use response::{CheckVulnRequest, CheckVulnResponse, Service, TargetResult, Vulnerability};
pub use run::{Finished, NmapRun, RunStats};
pub use script::{ScriptElement, ScriptOutput, ScriptTable, VULNERS_SCRIPT_ID};
pub use service::ServiceDescriptor;
