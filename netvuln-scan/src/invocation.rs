use std::path::{Path, PathBuf};

use netvuln_types::VULNERS_SCRIPT_ID;

/// Errors raised while preparing a scan engine invocation.
#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    #[error("scan engine binary not found: {0}")]
    BinaryNotFound(String),
    #[error("no targets specified")]
    NoTargets,
    #[error("invalid target: {0:?}")]
    InvalidTarget(String),
    #[error("invalid port: {0} (ports must be 1-65535)")]
    InvalidPort(i32),
}

/// Resolve the nmap binary once at startup.
///
/// An explicit path must point to an executable file; otherwise `nmap` is
/// looked up on `PATH`.
pub fn locate_nmap(explicit: Option<&Path>) -> Result<PathBuf, InvocationError> {
    let wanted = explicit.unwrap_or_else(|| Path::new("nmap"));
    which::which(wanted)
        .map_err(|e| InvocationError::BinaryNotFound(format!("{}: {e}", wanted.display())))
}

/// A fully validated, immutable description of one scan engine run:
/// service/version detection plus the `vulners` script against the given
/// targets and ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanInvocation {
    binary: PathBuf,
    targets: Vec<String>,
    ports: Vec<String>,
    service_detection: bool,
    script: &'static str,
}

impl ScanInvocation {
    /// Build the invocation for a vulnerability check.
    ///
    /// Targets are kept in order. Ports are rendered in decimal, in order,
    /// without deduplication; an empty list leaves port selection to nmap.
    pub fn vulners(
        binary: impl Into<PathBuf>,
        targets: &[String],
        tcp_ports: &[i32],
    ) -> Result<Self, InvocationError> {
        if targets.is_empty() {
            return Err(InvocationError::NoTargets);
        }
        for target in targets {
            validate_target(target)?;
        }

        let ports = tcp_ports
            .iter()
            .map(|&port| {
                if (1..=i32::from(u16::MAX)).contains(&port) {
                    Ok(port.to_string())
                } else {
                    Err(InvocationError::InvalidPort(port))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            binary: binary.into(),
            targets: targets.to_vec(),
            ports,
            service_detection: true,
            script: VULNERS_SCRIPT_ID,
        })
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn ports(&self) -> &[String] {
        &self.ports
    }

    pub fn service_detection(&self) -> bool {
        self.service_detection
    }

    pub fn script(&self) -> &str {
        self.script
    }

    /// Command-line arguments for nmap. XML goes to stdout (`-oX -`).
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.targets.len() + 7);
        if self.service_detection {
            args.push("-sV".to_string());
        }
        args.push("--script".to_string());
        args.push(self.script.to_string());
        if !self.ports.is_empty() {
            args.push("-p".to_string());
            args.push(self.ports.join(","));
        }
        args.push("-oX".to_string());
        args.push("-".to_string());
        args.extend(self.targets.iter().cloned());
        args
    }
}

/// Targets go straight onto the nmap command line, so anything that would
/// be parsed as an option or split into several arguments is rejected.
fn validate_target(target: &str) -> Result<(), InvocationError> {
    if target.is_empty() || target.starts_with('-') || target.chars().any(char::is_whitespace) {
        return Err(InvocationError::InvalidTarget(target.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn builds_vulners_invocation() {
        let inv = ScanInvocation::vulners(
            "/usr/bin/nmap",
            &targets(&["scanme.nmap.org"]),
            &[53, 80],
        )
        .unwrap();
        assert_eq!(inv.binary(), Path::new("/usr/bin/nmap"));
        assert_eq!(inv.targets(), ["scanme.nmap.org"]);
        assert_eq!(inv.ports(), ["53", "80"]);
        assert!(inv.service_detection());
        assert_eq!(inv.script(), "vulners");
    }

    #[test]
    fn ports_keep_order_and_duplicates() {
        let inv =
            ScanInvocation::vulners("nmap", &targets(&["10.0.0.1"]), &[443, 22, 443]).unwrap();
        assert_eq!(inv.ports(), ["443", "22", "443"]);
    }

    #[test]
    fn args_with_ports() {
        let inv = ScanInvocation::vulners(
            "nmap",
            &targets(&["scanme.nmap.org", "10.0.0.0/30"]),
            &[53, 80],
        )
        .unwrap();
        assert_eq!(
            inv.to_args(),
            vec![
                "-sV",
                "--script",
                "vulners",
                "-p",
                "53,80",
                "-oX",
                "-",
                "scanme.nmap.org",
                "10.0.0.0/30"
            ]
        );
    }

    #[test]
    fn args_without_ports_use_engine_defaults() {
        let inv = ScanInvocation::vulners("nmap", &targets(&["10.0.0.1"]), &[]).unwrap();
        let args = inv.to_args();
        assert!(!args.contains(&"-p".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("10.0.0.1"));
    }

    #[test]
    fn rejects_empty_targets() {
        let err = ScanInvocation::vulners("nmap", &[], &[80]).unwrap_err();
        assert!(matches!(err, InvocationError::NoTargets));
    }

    #[test]
    fn rejects_option_like_targets() {
        for bad in ["-iL", "--script=all", "", "a b", "host\n"] {
            let err = ScanInvocation::vulners("nmap", &targets(&[bad]), &[]).unwrap_err();
            assert!(
                matches!(err, InvocationError::InvalidTarget(_)),
                "target {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_ports() {
        for bad in [0, -1, 65536, i32::MAX] {
            let err = ScanInvocation::vulners("nmap", &targets(&["10.0.0.1"]), &[80, bad])
                .unwrap_err();
            assert!(matches!(err, InvocationError::InvalidPort(p) if p == bad));
        }
        assert!(ScanInvocation::vulners("nmap", &targets(&["10.0.0.1"]), &[1, 65535]).is_ok());
    }

    #[test]
    fn locate_missing_binary_fails() {
        let err = locate_nmap(Some(Path::new("/nonexistent/dir/nmap"))).unwrap_err();
        assert!(matches!(err, InvocationError::BinaryNotFound(_)));
        assert!(err.to_string().contains("/nonexistent/dir/nmap"));
    }
}
