//! Tests for the valuation calculator and service.

#[cfg(test)]
mod tests {
    use crate::assets::{Asset, AssetType, Instrument, PhysicalDetails, WeightUnit};
    use crate::errors::{Error, ValidationError};
    use crate::valuation::{
        effective_price, physical_valuation, tradable_valuation, ValuationService,
    };
    use rust_decimal_macros::dec;

    fn tradable_asset(id: &str, quantity: rust_decimal::Decimal) -> Asset {
        Asset {
            id: id.to_string(),
            name: "Apple Inc.".to_string(),
            asset_type: AssetType::Stock,
            quantity,
            instrument: Some(Instrument {
                symbol: "AAPL".to_string(),
                exchange: Some("NASDAQ".to_string()),
                currency: "USD".to_string(),
                average_purchase_price: dec!(150),
                current_price: Some(dec!(160)),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn physical_asset(id: &str, market_price: Option<rust_decimal::Decimal>) -> Asset {
        Asset {
            id: id.to_string(),
            name: "Gold bars".to_string(),
            asset_type: AssetType::Gold,
            quantity: dec!(100),
            holding_details: Some(PhysicalDetails {
                unit: WeightUnit::Grams,
                purchase_price: dec!(50),
                current_market_price: market_price,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_tradable_valuation_consistency() {
        let v = tradable_valuation(dec!(10), dec!(150), dec!(160));
        assert_eq!(v.current_value, dec!(1600));
        assert_eq!(v.gain_loss, dec!(100));
        // 100 / 1500 * 100
        assert_eq!(v.gain_loss_percent.round_dp(4), dec!(6.6667));
    }

    #[test]
    fn test_physical_valuation_without_override_gains_nothing() {
        let v = physical_valuation(dec!(100), dec!(50), None);
        assert_eq!(v.current_value, dec!(5000));
        assert_eq!(v.gain_loss, dec!(0));
        assert_eq!(v.gain_loss_percent, dec!(0));
    }

    #[test]
    fn test_physical_valuation_with_override() {
        let v = physical_valuation(dec!(100), dec!(50), Some(dec!(55)));
        assert_eq!(v.current_value, dec!(5500));
        assert_eq!(v.gain_loss, dec!(500));
        assert_eq!(v.gain_loss_percent, dec!(10));
    }

    #[test]
    fn test_effective_price_fallback_rule() {
        assert_eq!(effective_price(dec!(50), None), dec!(50));
        assert_eq!(effective_price(dec!(50), Some(dec!(55))), dec!(55));
    }

    #[test]
    fn test_zero_cost_basis_yields_zero_percent() {
        let v = tradable_valuation(dec!(10), dec!(0), dec!(160));
        assert_eq!(v.gain_loss, dec!(1600));
        assert_eq!(v.gain_loss_percent, dec!(0));

        let v = physical_valuation(dec!(100), dec!(0), Some(dec!(55)));
        assert_eq!(v.gain_loss, dec!(5500));
        assert_eq!(v.gain_loss_percent, dec!(0));
    }

    #[test]
    fn test_zero_quantity_is_harmless() {
        let v = tradable_valuation(dec!(0), dec!(150), dec!(160));
        assert_eq!(v.current_value, dec!(0));
        assert_eq!(v.gain_loss, dec!(0));
        assert_eq!(v.gain_loss_percent, dec!(0));
    }

    #[test]
    fn test_loss_is_negative_not_clamped() {
        let v = tradable_valuation(dec!(10), dec!(150), dec!(120));
        assert_eq!(v.current_value, dec!(1200));
        assert_eq!(v.gain_loss, dec!(-300));
        assert_eq!(v.gain_loss_percent, dec!(-20));
    }

    #[test]
    fn test_negative_quantity_propagates_unclamped() {
        // Upstream validation owns rejecting this; the calculator reports it as-is.
        let v = tradable_valuation(dec!(-10), dec!(150), dec!(160));
        assert_eq!(v.current_value, dec!(-1600));
        assert_eq!(v.gain_loss, dec!(-100));
    }

    #[test]
    fn test_valuate_writes_derived_fields() {
        let service = ValuationService::new();
        let mut assets = vec![tradable_asset("EQ:a1b2c3d4", dec!(10))];
        service.valuate(&mut assets).unwrap();
        assert_eq!(assets[0].total_value, dec!(1600));
        assert_eq!(assets[0].total_gain_loss, dec!(100));
        assert_eq!(assets[0].total_gain_loss_percent, dec!(6.666667));
    }

    #[test]
    fn test_valuate_missing_current_price_fails_fast() {
        let service = ValuationService::new();
        let mut asset = tradable_asset("EQ:a1b2c3d4", dec!(10));
        asset.instrument.as_mut().unwrap().current_price = None;
        let err = service.valuate_asset(&mut asset).unwrap_err();
        match err {
            Error::Validation(ValidationError::MissingField(field)) => {
                assert!(field.contains("currentPrice"));
            }
            other => panic!("Expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_valuate_missing_instrument_fails_fast() {
        let service = ValuationService::new();
        let mut asset = tradable_asset("EQ:a1b2c3d4", dec!(10));
        asset.instrument = None;
        let err = service.valuate_asset(&mut asset).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn test_valuate_generic_zeroes_derived_fields() {
        let service = ValuationService::new();
        let mut asset = Asset {
            id: "ALT:efgh5678".to_string(),
            name: "Mystery holding".to_string(),
            asset_type: AssetType::Other,
            quantity: dec!(3),
            total_value: dec!(999),
            ..Default::default()
        };
        service.valuate_asset(&mut asset).unwrap();
        assert_eq!(asset.total_value, dec!(0));
        assert_eq!(asset.total_gain_loss, dec!(0));
        assert_eq!(asset.total_gain_loss_percent, dec!(0));
    }

    #[test]
    fn test_gain_loss_percent_consistent_with_cost_basis() {
        // totalGainLossPercent must stay derivable from totalGainLoss and
        // the implied cost basis for every asset shown.
        let service = ValuationService::new();
        let mut assets = vec![
            tradable_asset("EQ:a1b2c3d4", dec!(10)),
            physical_asset("PREC:u0v1w2x3", Some(dec!(55))),
        ];
        service.valuate(&mut assets).unwrap();
        for asset in &assets {
            let cost_basis = asset.total_value - asset.total_gain_loss;
            let expected = if cost_basis.is_zero() {
                dec!(0)
            } else {
                (asset.total_gain_loss / cost_basis * dec!(100)).round_dp(6)
            };
            assert_eq!(asset.total_gain_loss_percent, expected);
        }
    }

    #[test]
    fn test_apply_manual_price_recomputes_and_flags() {
        let service = ValuationService::new();
        let mut asset = physical_asset("PREC:u0v1w2x3", None);
        let before = asset.last_updated;

        service.apply_manual_price(&mut asset, dec!(55)).unwrap();

        let details = asset.holding_details.as_ref().unwrap();
        assert_eq!(details.current_market_price, Some(dec!(55)));
        assert!(details.manual_price_override);
        assert_eq!(asset.total_value, dec!(5500));
        assert_eq!(asset.total_gain_loss, dec!(500));
        assert_eq!(asset.total_gain_loss_percent, dec!(10));
        assert!(asset.last_updated >= before);
    }

    #[test]
    fn test_apply_manual_price_rejects_tradable_target() {
        let service = ValuationService::new();
        let mut asset = tradable_asset("EQ:a1b2c3d4", dec!(10));
        let err = service.apply_manual_price(&mut asset, dec!(55)).unwrap_err();
        assert!(matches!(err, Error::Asset(_)));
    }
}
