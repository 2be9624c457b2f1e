//! Tests for the render dispatcher.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::assets::{Asset, AssetType, Instrument, PhysicalDetails, PricePoint, WeightUnit};
    use crate::dispatch::{CardInteractionHandler, ChartData, RenderDispatcher, RenderedCard};
    use crate::errors::{Error, ValidationError};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    /// Records which callbacks fired and with which asset ids.
    #[derive(Default)]
    struct MockHandler {
        insights: Arc<Mutex<Vec<String>>>,
        manage: Arc<Mutex<Vec<String>>>,
        value_updates: Arc<Mutex<Vec<String>>>,
    }

    impl CardInteractionHandler for MockHandler {
        fn open_insights(&self, asset: &Asset) {
            self.insights.lock().unwrap().push(asset.id.clone());
        }

        fn open_manage(&self, asset: &Asset) {
            self.manage.lock().unwrap().push(asset.id.clone());
        }

        fn request_value_update(&self, asset: &Asset) {
            self.value_updates.lock().unwrap().push(asset.id.clone());
        }
    }

    fn stock(id: &str) -> Asset {
        Asset {
            id: id.to_string(),
            name: "Apple Inc.".to_string(),
            asset_type: AssetType::Stock,
            quantity: dec!(10),
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

    fn gold(id: &str) -> Asset {
        Asset {
            id: id.to_string(),
            name: "Gold bars".to_string(),
            asset_type: AssetType::Gold,
            quantity: dec!(100),
            holding_details: Some(PhysicalDetails {
                unit: WeightUnit::Grams,
                purchase_price: dec!(50),
                current_market_price: Some(dec!(55)),
                manual_price_override: true,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_dispatch_tradable_builds_card_with_valuation() {
        let handler = Arc::new(MockHandler::default());
        let dispatcher = RenderDispatcher::new(handler);

        let card = dispatcher.dispatch(&stock("EQ:a1b2c3d4")).unwrap();
        match card {
            RenderedCard::Tradable { props, .. } => {
                assert_eq!(props.symbol, "AAPL");
                assert_eq!(props.valuation.current_value, dec!(1600));
                assert_eq!(props.valuation.gain_loss, dec!(100));
                assert_eq!(props.chart, ChartData::Unavailable);
            }
            other => panic!("Expected tradable card, got {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_physical_builds_card_with_value_update_handle() {
        let handler = Arc::new(MockHandler::default());
        let updates = Arc::clone(&handler.value_updates);
        let dispatcher = RenderDispatcher::new(handler);

        let card = dispatcher.dispatch(&gold("PREC:u0v1w2x3")).unwrap();
        match card {
            RenderedCard::Physical {
                props,
                value_update,
                ..
            } => {
                assert_eq!(props.valuation.current_value, dec!(5500));
                assert_eq!(props.effective_price, dec!(55));
                assert!(props.manual_price_override);

                value_update.request();
                assert_eq!(updates.lock().unwrap().as_slice(), ["PREC:u0v1w2x3"]);
            }
            other => panic!("Expected physical card, got {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_generic_keeps_minimal_fields() {
        let handler = Arc::new(MockHandler::default());
        let dispatcher = RenderDispatcher::new(handler);

        let asset = Asset {
            id: "ALT:efgh5678".to_string(),
            name: "Unknown thing".to_string(),
            asset_type: AssetType::from_tag("collectible"),
            quantity: dec!(1),
            ..Default::default()
        };
        let card = dispatcher.dispatch(&asset).unwrap();
        match card {
            RenderedCard::Generic { props, .. } => {
                assert_eq!(props.asset_type, AssetType::Other);
                assert_eq!(props.valuation.current_value, dec!(0));
            }
            other => panic!("Expected generic card, got {other:?}"),
        }
    }

    #[test]
    fn test_every_variant_exposes_insights_and_manage() {
        let handler = Arc::new(MockHandler::default());
        let insights = Arc::clone(&handler.insights);
        let manage = Arc::clone(&handler.manage);
        let dispatcher = RenderDispatcher::new(handler);

        for asset in [
            stock("EQ:a1b2c3d4"),
            gold("PREC:u0v1w2x3"),
            Asset {
                id: "ALT:efgh5678".to_string(),
                name: "Unknown".to_string(),
                ..Default::default()
            },
        ] {
            let card = dispatcher.dispatch(&asset).unwrap();
            card.actions().open_insights();
            card.actions().open_manage();
        }

        assert_eq!(insights.lock().unwrap().len(), 3);
        assert_eq!(manage.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_dispatch_tradable_missing_price_surfaces_contract_violation() {
        let handler = Arc::new(MockHandler::default());
        let dispatcher = RenderDispatcher::new(handler);

        let mut asset = stock("EQ:a1b2c3d4");
        asset.instrument.as_mut().unwrap().current_price = None;
        let err = dispatcher.dispatch(&asset).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn test_chart_data_from_history() {
        let handler = Arc::new(MockHandler::default());
        let dispatcher = RenderDispatcher::new(handler);

        let mut asset = stock("EQ:a1b2c3d4");
        asset.instrument.as_mut().unwrap().price_history = Some(vec![PricePoint {
            timestamp: Utc::now(),
            price: dec!(158),
        }]);
        let card = dispatcher.dispatch(&asset).unwrap();
        match card {
            RenderedCard::Tradable { props, .. } => match props.chart {
                ChartData::Points { points } => assert_eq!(points.len(), 1),
                ChartData::Unavailable => panic!("Expected chart points"),
            },
            other => panic!("Expected tradable card, got {other:?}"),
        }

        // An empty history is not a chart.
        let mut asset = stock("EQ:a1b2c3d4");
        asset.instrument.as_mut().unwrap().price_history = Some(Vec::new());
        let card = dispatcher.dispatch(&asset).unwrap();
        match card {
            RenderedCard::Tradable { props, .. } => {
                assert_eq!(props.chart, ChartData::Unavailable);
            }
            other => panic!("Expected tradable card, got {other:?}"),
        }
    }
}
