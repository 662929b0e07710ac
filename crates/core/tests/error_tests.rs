// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use crypto_dashboard_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn storage() {
        let err = CoreError::Storage("quota exceeded".into());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("key must be a string".into());
        assert_eq!(err.to_string(), "Serialization error: key must be a string");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            provider: "CoinGecko".into(),
            message: "HTTP 429 Too Many Requests".into(),
        };
        assert_eq!(err.to_string(), "API error (CoinGecko): HTTP 429 Too Many Requests");
    }

    #[test]
    fn network() {
        let err = CoreError::Network("timed out".into());
        assert_eq!(err.to_string(), "Network error: timed out");
    }

    #[test]
    fn invalid_sort_key() {
        let err = CoreError::InvalidSortKey("volume".into());
        assert_eq!(err.to_string(), "Unrecognized sort key: 'volume'");
    }

    #[test]
    fn invalid_theme() {
        let err = CoreError::InvalidTheme("sepia".into());
        assert_eq!(err.to_string(), "Unrecognized theme: 'sepia'");
    }
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no access");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::FileIO(ref m) if m.contains("no access")));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<Vec<String>>("[1,").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn question_mark_propagates() {
        fn parse(raw: &str) -> Result<Vec<String>, CoreError> {
            Ok(serde_json::from_str(raw)?)
        }
        assert!(parse(r#"["a"]"#).is_ok());
        assert!(matches!(parse("nope"), Err(CoreError::Deserialization(_))));
    }
}

// ── Trait implementations ───────────────────────────────────────────

mod traits {
    use super::*;

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CoreError::Network("x".into()));
        assert_eq!(err.to_string(), "Network error: x");
    }

    #[test]
    fn debug_names_variant() {
        let debug = format!("{:?}", CoreError::InvalidSortKey("x".into()));
        assert!(debug.contains("InvalidSortKey"));
    }
}
