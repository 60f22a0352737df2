use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{FlareupError, Result};
use crate::store::Slot;

/// Schema version written into every persisted slot
pub const SCHEMA_VERSION: u32 = 1;

/// Stored form of a slot:
/// ```json
/// {"version": 1, "data": { ... }}
/// ```
#[derive(Debug, Serialize)]
struct Envelope<'a, T> {
    version: u32,
    data: &'a T,
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    version: u32,
    data: serde_json::Value,
}

pub(crate) fn encode<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(&Envelope {
        version: SCHEMA_VERSION,
        data: value,
    })?)
}

pub(crate) fn decode<T: DeserializeOwned>(slot: Slot, raw: &str) -> Result<T> {
    let envelope: RawEnvelope = serde_json::from_str(raw)?;
    if envelope.version != SCHEMA_VERSION {
        return Err(FlareupError::UnsupportedSchema {
            slot: slot.key().to_string(),
            found: envelope.version,
        });
    }
    Ok(serde_json::from_value(envelope.data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_shape() {
        let raw = encode(&vec![1, 2, 3]).unwrap();
        assert_eq!(raw, r#"{"version":1,"data":[1,2,3]}"#);
    }

    #[test]
    fn test_rejects_unknown_version() {
        let err = decode::<Vec<u8>>(Slot::Leaderboard, r#"{"version":9,"data":[]}"#).unwrap_err();
        assert!(matches!(err, FlareupError::UnsupportedSchema { found: 9, .. }));
    }

    #[test]
    fn test_rejects_bare_payload() {
        assert!(decode::<Vec<u8>>(Slot::Leaderboard, "[1,2]").is_err());
    }
}
