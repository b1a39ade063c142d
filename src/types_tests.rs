//! Tests for core types

#[cfg(test)]
mod tests {
    use super::super::types::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_outcome_side_serialization() {
        assert_eq!(serde_json::to_string(&OutcomeSide::Yes).unwrap(), "\"yes\"");
        assert_eq!(serde_json::to_string(&OutcomeSide::No).unwrap(), "\"no\"");
    }

    #[test]
    fn test_outcome_side_parsing() {
        assert_eq!("yes".parse::<OutcomeSide>().unwrap(), OutcomeSide::Yes);
        assert_eq!("No".parse::<OutcomeSide>().unwrap(), OutcomeSide::No);
        assert!("maybe".parse::<OutcomeSide>().is_err());
    }

    #[test]
    fn test_market_price_by_side() {
        let market = Market {
            id: "m1".to_string(),
            question: "Will it rain tomorrow?".to_string(),
            yes_price: dec!(0.65),
            no_price: dec!(0.35),
            platform: "polymarket".to_string(),
            end_date: None,
        };
        assert_eq!(market.price(OutcomeSide::Yes), dec!(0.65));
        assert_eq!(market.price(OutcomeSide::No), dec!(0.35));
    }

    #[test]
    fn test_implied_odds_finite() {
        let odds = ImpliedOdds::Finite(dec!(4));
        assert_eq!(odds.as_finite(), Some(dec!(4)));
        assert!(!odds.is_unbounded());
        assert_eq!(format!("{}", odds), "4.00");
    }

    #[test]
    fn test_implied_odds_unbounded() {
        let odds = ImpliedOdds::Unbounded;
        assert_eq!(odds.as_finite(), None);
        assert!(odds.is_unbounded());
        assert_eq!(format!("{}", odds), "∞");
    }

    #[test]
    fn test_implied_odds_serialization() {
        let finite = serde_json::to_string(&ImpliedOdds::Finite(dec!(5))).unwrap();
        assert!(finite.contains("\"kind\":\"finite\""));
        assert_eq!(
            serde_json::to_string(&ImpliedOdds::Unbounded).unwrap(),
            "{\"kind\":\"unbounded\"}"
        );
    }

    #[test]
    fn test_risk_level_serialization() {
        assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"low\"");
        assert_eq!(
            serde_json::to_string(&RiskLevel::Extreme).unwrap(),
            "\"extreme\""
        );
    }

    #[test]
    fn test_risk_level_ordering() {
        // Tier ordering backs the monotonicity guarantee of the evaluator.
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Extreme);
    }

    #[test]
    fn test_recommendation_serialization() {
        assert_eq!(
            serde_json::to_string(&Recommendation::StrongBuy).unwrap(),
            "\"strong_buy\""
        );
        assert_eq!(
            serde_json::to_string(&Recommendation::Hold).unwrap(),
            "\"hold\""
        );
    }

    #[test]
    fn test_empty_result() {
        let result = ParlayResult::empty();
        assert_eq!(result.combined_probability, Decimal::ZERO);
        assert_eq!(result.implied_odds, ImpliedOdds::Finite(Decimal::ZERO));
        assert_eq!(result.potential_payout, Some(Decimal::ZERO));
        assert_eq!(result.expected_value, Decimal::ZERO);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.recommendation, Recommendation::Hold);
    }
}
