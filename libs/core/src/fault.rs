use derive_more::Display;

/// An opaque token naming a monitored failure condition, e.g. `lidar_fail`.
///
/// Identifiers keep the case they arrived with; they are only lower-cased
/// for comparison inside [`CodeTable::lookup`](crate::CodeTable::lookup).
/// Nothing validates them against the code table at ingestion time; an
/// unknown identifier simply renders the fallback code later.
///
/// # Examples
///
/// ```
/// use faultseg_core::FaultId;
///
/// let fault = FaultId::new("GPS_fail");
/// assert_eq!("GPS_fail", fault.as_str());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct FaultId(String);

impl FaultId {
    /// Creates an identifier from the given name.
    pub fn new<S: Into<String>>(name: S) -> Self {
        FaultId(name.into())
    }

    /// Returns the identifier's text as received from the fault source.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FaultId {
    fn from(name: &str) -> Self {
        FaultId::new(name)
    }
}

impl From<String> for FaultId {
    fn from(name: String) -> Self {
        FaultId::new(name)
    }
}

/// Parses a fault-source payload into the identifiers it names.
///
/// The payload is a comma-separated list: tokens are trimmed, empty tokens
/// are dropped, and order, case, and duplicates are all preserved exactly as
/// the producer sent them. A payload that parses to nothing means "no
/// faults"; there is no malformed-payload error.
///
/// # Examples
///
/// ```
/// use faultseg_core::{parse_fault_list, FaultId};
///
/// let faults = parse_fault_list(" lidar_fail, gps_fail ,,");
/// assert_eq!(vec![FaultId::new("lidar_fail"), FaultId::new("gps_fail")], faults);
///
/// assert!(parse_fault_list("").is_empty());
/// ```
pub fn parse_fault_list(payload: &str) -> Vec<FaultId> {
    payload
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(FaultId::new)
        .collect()
}
