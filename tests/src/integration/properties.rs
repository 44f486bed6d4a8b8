//! Cross-cutting invariants exercised with randomized inputs.

#[cfg(test)]
mod tests {
    use blend_engine::adapters::{FixedRateMarket, InMemoryAssetRegistry, RecordingDispatcher};
    use blend_engine::domain::entities::BlendConfig;
    use blend_engine::domain::services::estimate_resource_units;
    use blend_engine::events::payloads::{AssetTransferNotification, TokenTransferNotification};
    use blend_engine::events::BlendHandler;
    use blend_engine::ports::inbound::BlendApi;
    use blend_types::{AccountName, AssetId, TemplateId, TemplateInfo, TokenAmount};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    type Handler = BlendHandler<InMemoryAssetRegistry, FixedRateMarket, RecordingDispatcher>;

    const TARGET: TemplateId = TemplateId(1001);

    fn account(name: &str) -> AccountName {
        name.parse().unwrap()
    }

    /// Recipe requires two of template 2001 and one of 2002; six instances
    /// exist so any three-asset subset can be supplied.
    fn create_handler(rate: f64) -> Handler {
        let config = BlendConfig::for_testing();
        let coll = account("sample1");

        let mut registry = InMemoryAssetRegistry::new();
        registry.add_collection(
            coll.clone(),
            vec![account("alice"), config.operating_account.clone()],
        );
        registry.add_template(
            &coll,
            TARGET,
            TemplateInfo {
                schema: account("items"),
                max_supply: 0,
                issued_supply: 0,
            },
        );
        for input in [TemplateId(2001), TemplateId(2002)] {
            registry.add_template(
                &coll,
                input,
                TemplateInfo {
                    schema: account("items"),
                    max_supply: 0,
                    issued_supply: 0,
                },
            );
        }
        registry.add_asset(AssetId(1), TemplateId(2001));
        registry.add_asset(AssetId(2), TemplateId(2001));
        registry.add_asset(AssetId(3), TemplateId(2002));

        let mut handler = BlendHandler::new(
            config,
            registry,
            FixedRateMarket::with_rate(rate),
            RecordingDispatcher::new(),
        );
        handler
            .register_recipe(
                account("alice"),
                coll,
                TARGET,
                vec![TemplateId(2001), TemplateId(2001), TemplateId(2002)],
            )
            .unwrap();
        handler
    }

    fn blend(handler: &mut Handler, assets: Vec<AssetId>) -> Result<(), String> {
        handler
            .on_asset_transfer(AssetTransferNotification {
                from: account("alice"),
                to: account("blender"),
                assets,
                memo: TARGET.to_string(),
            })
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    #[test]
    fn test_deposit_credit_matches_floor_formula() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let amount = rng.gen_range(1..=10_000_000i64);
            let rate = rng.gen_range(0.01..100.0f64);
            let mut handler = create_handler(rate);
            let before = handler.ledger().available(&account("sample1"));

            handler
                .on_token_transfer(TokenTransferNotification {
                    from: account("alice"),
                    to: account("blender"),
                    amount: TokenAmount(amount),
                    memo: "sample1".to_string(),
                })
                .unwrap();

            let expected = estimate_resource_units(TokenAmount(amount), 0.995, rate);
            assert_eq!(
                handler.ledger().available(&account("sample1")),
                before + expected,
                "amount={amount} rate={rate}"
            );
        }
    }

    #[test]
    fn test_blend_succeeds_for_every_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let mut assets = vec![AssetId(1), AssetId(2), AssetId(3)];
            assets.shuffle(&mut rng);

            let mut handler = create_handler(1.0);
            handler.ledger_mut().credit(&account("sample1"), 500);

            blend(&mut handler, assets.clone())
                .unwrap_or_else(|e| panic!("permutation {assets:?} failed: {e}"));
            assert_eq!(handler.ledger().available(&account("sample1")), 349);
        }
    }

    #[test]
    fn test_wrong_multiset_always_rejected() {
        // Two of 2002 and one of 2001 inverts the required counts.
        let mut handler = create_handler(1.0);
        handler.ledger_mut().credit(&account("sample1"), 500);

        let mut registry_assets = vec![AssetId(1), AssetId(3), AssetId(3)];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..6 {
            registry_assets.shuffle(&mut rng);
            let err = blend(&mut handler, registry_assets.clone()).unwrap_err();
            assert!(err.contains("do not match"), "got: {err}");
        }
        // Nothing leaked out of the failed attempts.
        assert_eq!(handler.ledger().available(&account("sample1")), 500);
        assert!(handler.dispatcher().is_empty());
    }

    #[test]
    fn test_failed_blend_dispatches_nothing() {
        for balance in [0u64, 50, 151] {
            let mut handler = create_handler(1.0);
            if balance > 0 {
                handler.ledger_mut().credit(&account("sample1"), balance);
            }

            let result = blend(&mut handler, vec![AssetId(1), AssetId(2), AssetId(3)]);
            assert!(result.is_err(), "balance {balance} should be insufficient");
            assert!(handler.dispatcher().is_empty());
            assert_eq!(handler.ledger().available(&account("sample1")), balance);
        }
    }

    #[test]
    fn test_successful_blend_dispatches_mint_then_burns() {
        let mut handler = create_handler(1.0);
        handler.ledger_mut().credit(&account("sample1"), 500);
        blend(&mut handler, vec![AssetId(2), AssetId(3), AssetId(1)]).unwrap();

        let actions = handler.dispatcher().actions();
        assert_eq!(actions.len(), 4, "one mint and three burns");
        assert!(matches!(
            actions[0],
            blend_engine::ports::outbound::Action::MintAsset { .. }
        ));
        for action in &actions[1..] {
            assert!(matches!(
                action,
                blend_engine::ports::outbound::Action::BurnAsset { .. }
            ));
        }
    }
}
