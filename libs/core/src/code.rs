use std::collections::HashMap;

use derive_more::Display;
use lazy_static::lazy_static;

use crate::frame::right_justify;

/// Number of characters in a fault code.
const CODE_WIDTH: usize = 3;

/// Code shown for identifiers missing from the table.
const FALLBACK_CODE: &str = "999";

/// The 3-digit numeric code shown on the display for one fault.
///
/// Codes are normalized on construction: left-padded with `'0'` to three
/// characters, keeping the last three characters of anything longer.
///
/// # Examples
///
/// ```
/// use faultseg_core::FaultCode;
///
/// assert_eq!("001", FaultCode::new("1").as_str());
/// assert_eq!("234", FaultCode::new("1234").as_str());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct FaultCode(String);

impl FaultCode {
    /// Creates a code from raw text, normalizing it to [`CODE_WIDTH`]
    /// characters.
    pub fn new(raw: &str) -> Self {
        FaultCode(right_justify(raw, CODE_WIDTH, '0'))
    }

    /// The reserved code shown for identifiers with no table entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultseg_core::FaultCode;
    ///
    /// assert_eq!("999", FaultCode::fallback().as_str());
    /// ```
    pub fn fallback() -> Self {
        FaultCode(FALLBACK_CODE.to_owned())
    }

    /// Returns the code's text, always exactly three characters.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

lazy_static! {
    static ref BUILTIN: CodeTable = CodeTable::new([
        ("lidar_com", "101"),
        ("lidar_fail", "201"),
        ("emi_com", "102"),
        ("emi_fail", "202"),
        ("imu_com", "103"),
        ("imu_fail", "203"),
        ("raspberry_com", "104"),
        ("raspberry_fail", "204"),
        ("camera_com", "105"),
        ("camera_fail", "205"),
        ("ip_mesh_com", "106"),
        ("ip_mesh_fail", "206"),
        ("gps_com", "107"),
        ("gps_fail", "207"),
        ("general_fail", "999"),
    ]);
}

/// An immutable mapping from fault identifiers to their display codes.
///
/// Lookup is case-insensitive, and identifiers without an entry resolve to
/// [`FaultCode::fallback`] rather than an error, so the display always has
/// something to show. The table is built once at startup and never changes.
///
/// # Examples
///
/// ```
/// use faultseg_core::CodeTable;
///
/// let table = CodeTable::builtin();
/// assert_eq!("201", table.lookup("LIDAR_FAIL").as_str());
/// assert_eq!("999", table.lookup("unknown_x").as_str());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<String, FaultCode>,
}

impl CodeTable {
    /// Creates a table from `(identifier, code)` pairs.
    ///
    /// Identifiers are stored lower-cased and codes are normalized through
    /// [`FaultCode::new`]; a repeated identifier keeps its last entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultseg_core::CodeTable;
    ///
    /// let table = CodeTable::new([("motor_fail", "301"), ("motor_com", "1")]);
    /// assert_eq!("301", table.lookup("motor_fail").as_str());
    /// assert_eq!("001", table.lookup("motor_com").as_str());
    /// ```
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let codes = entries
            .into_iter()
            .map(|(ident, code)| (ident.as_ref().to_lowercase(), FaultCode::new(code.as_ref())))
            .collect();
        CodeTable { codes }
    }

    /// Returns the table used by the stock deployment.
    ///
    /// # Examples
    ///
    /// ```
    /// use faultseg_core::CodeTable;
    ///
    /// assert_eq!("107", CodeTable::builtin().lookup("gps_com").as_str());
    /// ```
    pub fn builtin() -> &'static CodeTable {
        &BUILTIN
    }

    /// Resolves an identifier to its code, falling back to
    /// [`FaultCode::fallback`] when the identifier has no entry.
    ///
    /// Comparison is case-insensitive; the identifier's stored case is never
    /// consulted.
    pub fn lookup(&self, ident: &str) -> FaultCode {
        self.codes
            .get(&ident.to_lowercase())
            .cloned()
            .unwrap_or_else(FaultCode::fallback)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("1", "001" ; "short pads left")]
    #[test_case("42", "042" ; "two digits pad once")]
    #[test_case("207", "207" ; "exact width unchanged")]
    #[test_case("1234", "234" ; "long keeps last three")]
    fn code_normalization(raw: &str, expected: &str) {
        assert_eq!(expected, FaultCode::new(raw).as_str());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = CodeTable::builtin();
        assert_eq!("201", table.lookup("lidar_fail").as_str());
        assert_eq!("201", table.lookup("LIDAR_FAIL").as_str());
        assert_eq!("201", table.lookup("Lidar_Fail").as_str());
    }

    #[test]
    fn lookup_falls_back_for_unmapped() {
        let table = CodeTable::builtin();
        assert_eq!(FaultCode::fallback(), table.lookup("unknown_x"));
        assert_eq!(FaultCode::fallback(), table.lookup(""));
    }

    #[test]
    fn custom_table_normalizes_entries() {
        let table = CodeTable::new([("Pump_Fail", "7")]);
        assert_eq!("007", table.lookup("pump_fail").as_str());
        assert_eq!("007", table.lookup("PUMP_FAIL").as_str());
    }

    #[test]
    fn repeated_identifier_keeps_last_entry() {
        let table = CodeTable::new([("pump_fail", "7"), ("pump_fail", "8")]);
        assert_eq!("008", table.lookup("pump_fail").as_str());
    }
}
