//! Tests for configuration

#[cfg(test)]
mod tests {
    use super::super::config::*;
    use rust_decimal_macros::dec;
    use std::path::PathBuf;

    #[test]
    fn test_store_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.max_legs, 10);
    }

    #[test]
    fn test_evaluator_config_default() {
        let config = EvaluatorConfig::default();
        assert_eq!(config.low_risk_floor, dec!(0.40));
        assert_eq!(config.medium_risk_floor, dec!(0.20));
        assert_eq!(config.high_risk_floor, dec!(0.05));
        assert_eq!(config.strong_buy_ev_ratio, dec!(0.20));
        assert_eq!(config.strong_buy_min_probability, dec!(0.15));
        assert_eq!(config.buy_ev_ratio, dec!(0.05));
        assert_eq!(config.buy_min_probability, dec!(0.10));
        assert_eq!(config.hold_ev_ratio, dec!(-0.10));
    }

    #[test]
    fn test_supply_config_default() {
        let config = SupplyConfig::default();
        assert_eq!(config.gamma_url, "https://gamma-api.polymarket.com");
        assert_eq!(config.platform, "polymarket");
        assert_eq!(config.refresh_interval_secs, 60);
        assert_eq!(config.max_markets, 50);
    }

    #[test]
    fn test_placement_config_default() {
        let config = PlacementConfig::default();
        assert_eq!(config.min_legs, 2);
        assert_eq!(config.audit_file, PathBuf::from("parlay_tickets.jsonl"));
    }

    #[test]
    fn test_store_config_empty_toml_uses_defaults() {
        let config: StoreConfig = toml::from_str("").unwrap();
        assert_eq!(config.max_legs, 10);
    }

    #[test]
    fn test_evaluator_config_partial_toml() {
        let toml_str = r#"
low_risk_floor = 0.50
"#;
        let config: EvaluatorConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.low_risk_floor, dec!(0.50));
        // Untouched thresholds keep their defaults
        assert_eq!(config.medium_risk_floor, dec!(0.20));
        assert_eq!(config.hold_ev_ratio, dec!(-0.10));
    }

    #[test]
    fn test_supply_config_deserialize() {
        let toml_str = r#"
gamma_url = "https://gamma.example.com"
platform = "example"
refresh_interval_secs = 30
max_markets = 25
"#;
        let config: SupplyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gamma_url, "https://gamma.example.com");
        assert_eq!(config.platform, "example");
        assert_eq!(config.refresh_interval_secs, 30);
        assert_eq!(config.max_markets, 25);
    }

    #[test]
    fn test_fallback_market_into_market_is_tagged_demo() {
        let fallback = FallbackMarket {
            id: "demo-1".to_string(),
            question: "Will it rain?".to_string(),
            yes_price: dec!(0.40),
            no_price: dec!(0.60),
        };
        let market = fallback.into_market();
        assert_eq!(market.platform, "demo");
        assert_eq!(market.yes_price, dec!(0.40));
        assert!(market.end_date.is_none());
    }

    #[test]
    fn test_default_config_carries_demo_markets() {
        let config = Config::default();
        assert!(!config.fallback_markets.is_empty());
        for market in &config.fallback_markets {
            assert!(market.id.starts_with("demo-"));
        }
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/parlay-config").unwrap();
        assert_eq!(config.store.max_legs, 10);
        assert_eq!(config.placement.min_legs, 2);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[store]
max_legs = 5

[placement]
min_legs = 3
audit_file = "tickets.jsonl"
"#,
        )
        .unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.store.max_legs, 5);
        assert_eq!(config.placement.min_legs, 3);
        assert_eq!(config.placement.audit_file, PathBuf::from("tickets.jsonl"));
        // Sections absent from the file keep their defaults
        assert_eq!(config.evaluator.low_risk_floor, dec!(0.40));
    }
}
