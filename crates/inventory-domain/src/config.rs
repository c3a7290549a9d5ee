//! UI Configuration

/// Where the inventory server lives
///
/// An empty base keeps every call same-origin (`/generate_qr`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiConfig {
    pub api_base: String,
}

impl UiConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim().to_string(),
        }
    }

    /// Join the base and an endpoint path with exactly one `/`
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_default() {
        assert_eq!(UiConfig::default().endpoint("/generate_qr"), "/generate_qr");
    }

    #[test]
    fn test_joins_with_single_slash() {
        let config = UiConfig::new("https://inventory.local/");
        assert_eq!(
            config.endpoint("/generate_qr"),
            "https://inventory.local/generate_qr"
        );

        let config = UiConfig::new(" /app ");
        assert_eq!(config.endpoint("generate_batch"), "/app/generate_batch");
    }
}
