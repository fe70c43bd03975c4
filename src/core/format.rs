use std::fmt;
use std::str::FromStr;

/// The output format a caller asks for.
///
/// `Object` is not a wire format: the payload is fetched as JSON and decoded into a
/// [`serde_json::Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    Csv,
    Json,
    Xml,
    #[default]
    Object,
}

/// The format actually requested from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireFormat {
    Csv,
    Json,
    Xml,
}

impl Format {
    /// Maps this format onto the wire format to request.
    ///
    /// `omit_csv` is set for endpoints that reject CSV (search); CSV then falls back to JSON.
    #[must_use]
    pub const fn wire(self, omit_csv: bool) -> WireFormat {
        match self {
            Self::Object => WireFormat::Json,
            Self::Csv if omit_csv => WireFormat::Json,
            Self::Csv => WireFormat::Csv,
            Self::Json => WireFormat::Json,
            Self::Xml => WireFormat::Xml,
        }
    }
}

impl WireFormat {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            "object" => Ok(Self::Object),
            other => Err(format!("unknown format: {other}")),
        }
    }
}
