#[cfg(test)]
mod tests {
    use super::super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_original_server() {
        let config = Config::default();
        assert_eq!(config.server.port, 5025);
        assert_eq!(config.server.addr().to_string(), "0.0.0.0:5025");
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::from_toml_str(
            r#"
            [server]
            port = 8080
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, default_host());
        assert_eq!(config.cors, CorsConfig::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = Config::from_toml_str("[server]\nport = \"nope\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_with(env(&[
                ("HOST", "127.0.0.1"),
                ("PORT", "9000"),
                ("JOTTER_CORS_ORIGINS", "http://a.test, http://b.test,"),
                ("JOTTER_STATIC_DIR", "/srv/jotter"),
                ("JOTTER_LOG", "debug"),
            ]))
            .unwrap();
        assert_eq!(config.server.addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.cors.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.server.static_dir, PathBuf::from("/srv/jotter"));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_invalid_port_env_is_rejected() {
        let mut config = Config::default();
        let err = config.apply_env_with(env(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { key: "PORT", .. }));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from("/definitely/not/here/jotter.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jotter.toml");
        std::fs::write(&path, "[logging]\nfilter = \"jotter_web=trace\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.logging.filter, "jotter_web=trace");
        assert_eq!(config.server, ServerConfig::default());
    }
}
