//! Boundary contract types
//!
//! Serde shapes mirroring the external service contract. Everything before
//! these types is internal and may change; these are the public contract
//! exposed to JSON consumers.

use serde::{Deserialize, Serialize};

/// Input to anchor generation: one keyword and the client's domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorRequest {
    pub keyword: String,
    pub domain: String,
}

/// Output of anchor generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorResponse {
    /// The normalized keyword, verbatim.
    pub exact_match: String,
    /// Ordered, deduplicated anchor candidates; the first entry always
    /// equals `exact_match` when non-empty.
    pub topic_anchors: Vec<String>,
    /// Brand spelling variants. Set-semantics output, sorted here so the
    /// serialized form is deterministic.
    pub brand: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes() {
        let json = r#"{ "keyword": "best italian restaurant", "domain": "tastybites.com" }"#;
        let request: AnchorRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.keyword, "best italian restaurant");
        assert_eq!(request.domain, "tastybites.com");
    }

    #[test]
    fn test_response_shape() {
        let response = AnchorResponse {
            exact_match: "dental implants".to_string(),
            topic_anchors: vec!["dental implants".to_string(), "implants".to_string()],
            brand: vec!["tastybites".to_string()],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["exact_match"], "dental implants");
        assert_eq!(value["topic_anchors"][1], "implants");
        assert_eq!(value["brand"][0], "tastybites");
    }
}
