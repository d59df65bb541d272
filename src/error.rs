/// Driver error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Console byte that does not select a benchmark.
    UnknownCommand(u8),
    /// CTRL value outside the stop/start/reset sentinels.
    InvalidControl(u32),
}

impl Error {
    pub fn as_str(&self) -> &'static str {
        match self {
            Error::UnknownCommand(_) => "unknown command",
            Error::InvalidControl(_) => "invalid control value",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UnknownCommand(c) => write!(f, "{} {:#04x}", self.as_str(), c),
            Error::InvalidControl(v) => write!(f, "{} {}", self.as_str(), v),
        }
    }
}
