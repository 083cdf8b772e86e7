use std::fmt;

/// Error codes for all generation diagnostics.
///
/// Format: E#### where the first digit indicates the stage:
/// - E0xxx: Declaration front-end errors
/// - E1xxx: Projection errors
/// - E2xxx: Emission errors
/// - E9xxx: Internal errors
/// - W1xxx: Projection warnings
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Front-end Errors (E0xxx)
    /// Generator attached to something other than an enum
    E0001,
    /// Source file is not valid Rust
    E0002,
    /// Invalid generator argument
    E0003,
    /// Requested catalog not found
    E0004,

    // Projection Errors (E1xxx)
    /// Duplicate variant name
    E1001,

    // Emission Errors (E2xxx)
    /// Name is not a usable identifier
    E2001,
    /// Variant mixes labeled and unlabeled fields
    E2002,
    /// Field type text is not a type
    E2003,

    // Internal Errors (E9xxx)
    /// Internal error
    E9001,

    // Projection Warnings (W1xxx)
    /// Variant unreachable: an earlier variant matches the same name ignoring case
    W1001,
}

impl ErrorCode {
    /// Every code, in numeric order. New codes go here and in `as_str`.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E1001,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E9001,
        ErrorCode::W1001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            // Front-end
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            // Projection
            ErrorCode::E1001 => "E1001",
            // Emission
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            // Internal
            ErrorCode::E9001 => "E9001",
            // Warnings
            ErrorCode::W1001 => "W1001",
        }
    }

    /// Stage digit and kind letter, e.g. `('E', '2')` for emission errors.
    fn range(self) -> (char, char) {
        let mut chars = self.as_str().chars();
        (chars.next().unwrap_or('E'), chars.next().unwrap_or('9'))
    }

    pub fn is_frontend_error(&self) -> bool {
        self.range() == ('E', '0')
    }

    pub fn is_projection_error(&self) -> bool {
        self.range() == ('E', '1')
    }

    pub fn is_emission_error(&self) -> bool {
        self.range() == ('E', '2')
    }

    pub fn is_internal_error(&self) -> bool {
        self.range() == ('E', '9')
    }

    pub fn is_warning(&self) -> bool {
        self.range().0 == 'W'
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"` or `"w1001"`.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
