use serde::{Deserialize, Serialize};

/// Opaque entity identifier. Issued by the owning service; this layer only
/// passes it around and compares it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Id(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Id(id.to_string())
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_transparently() {
        let id = Id::new("application-000042");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"application-000042\"");

        let back: Id = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
