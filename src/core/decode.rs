use crate::core::{Format, Payload, QuandlError};

/// Turns a fetched body into the payload the caller asked for.
///
/// An empty body is absence, not a document: it yields `Ok(None)` without touching the JSON
/// parser, whatever the format.
pub(crate) fn decode(raw: String, format: Format) -> Result<Option<Payload>, QuandlError> {
    if raw.is_empty() {
        return Ok(None);
    }
    match format {
        Format::Object => Ok(Some(Payload::Object(serde_json::from_str(&raw)?))),
        Format::Csv | Format::Json | Format::Xml => Ok(Some(Payload::Text(raw))),
    }
}
