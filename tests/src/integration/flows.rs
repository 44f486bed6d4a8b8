//! # Integration Test Flows
//!
//! End-to-end lifecycle of the blend subsystem across blend-types and
//! blend-engine: fund a collection, register a recipe, execute blends,
//! withdraw the remaining resource, and settle the sale proceeds.
//!
//! Every external effect is observed through the recorded fire-and-forget
//! action stream; the real dispatch mechanism offers no other window.

#[cfg(test)]
mod tests {
    use blend_engine::adapters::{FixedRateMarket, InMemoryAssetRegistry, RecordingDispatcher};
    use blend_engine::domain::entities::BlendConfig;
    use blend_engine::domain::errors::BlendError;
    use blend_engine::events::payloads::{
        AssetTransferNotification, AssetTransferOutcome, TokenTransferNotification,
        TokenTransferOutcome,
    };
    use blend_engine::events::BlendHandler;
    use blend_engine::ports::inbound::BlendApi;
    use blend_engine::ports::outbound::Action;
    use blend_types::{AccountName, AssetId, TemplateId, TemplateInfo, TokenAmount};

    type Handler = BlendHandler<InMemoryAssetRegistry, FixedRateMarket, RecordingDispatcher>;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    const TARGET: TemplateId = TemplateId(1001);
    const INPUT_A: TemplateId = TemplateId(2001);
    const INPUT_B: TemplateId = TemplateId(2002);

    fn account(name: &str) -> AccountName {
        name.parse().unwrap()
    }

    fn template(max_supply: u32, issued_supply: u32) -> TemplateInfo {
        TemplateInfo {
            schema: account("items"),
            max_supply,
            issued_supply,
        }
    }

    /// Collection "sample1" with alice and the engine authorized, the blend
    /// target plus two input templates, and two instances of each input.
    fn create_handler(rate: f64) -> Handler {
        let config = BlendConfig::for_testing();
        let coll = account("sample1");

        let mut registry = InMemoryAssetRegistry::new();
        registry.add_collection(
            coll.clone(),
            vec![account("alice"), config.operating_account.clone()],
        );
        registry.add_template(&coll, TARGET, template(10, 0));
        registry.add_template(&coll, INPUT_A, template(0, 50));
        registry.add_template(&coll, INPUT_B, template(0, 50));
        registry.add_asset(AssetId(10), INPUT_A);
        registry.add_asset(AssetId(11), INPUT_B);
        registry.add_asset(AssetId(12), INPUT_A);
        registry.add_asset(AssetId(13), INPUT_B);

        BlendHandler::new(
            config,
            registry,
            FixedRateMarket::with_rate(rate),
            RecordingDispatcher::new(),
        )
    }

    fn deposit(handler: &mut Handler, amount: i64, memo: &str) -> TokenTransferOutcome {
        handler
            .on_token_transfer(TokenTransferNotification {
                from: account("alice"),
                to: account("blender"),
                amount: TokenAmount(amount),
                memo: memo.to_string(),
            })
            .unwrap()
    }

    fn blend(handler: &mut Handler, assets: Vec<AssetId>) -> Result<AssetTransferOutcome, BlendError> {
        handler.on_asset_transfer(AssetTransferNotification {
            from: account("alice"),
            to: account("blender"),
            assets,
            memo: TARGET.to_string(),
        })
    }

    // =========================================================================
    // FULL LIFECYCLE
    // =========================================================================

    #[test]
    fn test_full_blend_lifecycle() {
        let mut handler = create_handler(3.0);
        let coll = account("sample1");

        // 1. Fund the collection: 3000 * 0.995 / 3.0 = 995 bytes.
        let outcome = deposit(&mut handler, 3000, "sample1");
        assert_eq!(
            outcome,
            TokenTransferOutcome::Deposited {
                collection: coll.clone(),
                credited_bytes: 995,
            }
        );

        // 2. Register the recipe.
        handler
            .register_recipe(account("alice"), coll.clone(), TARGET, vec![INPUT_A, INPUT_B])
            .unwrap();

        // 3. Blend twice, instance order shuffled each time.
        blend(&mut handler, vec![AssetId(11), AssetId(10)]).unwrap();
        blend(&mut handler, vec![AssetId(12), AssetId(13)]).unwrap();
        assert_eq!(handler.ledger().available(&coll), 995 - 2 * 151);

        // 4. Withdraw most of the remainder.
        handler
            .withdraw_resource(account("alice"), coll.clone(), 600)
            .unwrap();
        assert_eq!(handler.ledger().available(&coll), 93);
        assert!(!handler.withdrawal().is_empty());

        // 5. Sale proceeds arrive from the marketplace settlement account.
        let outcome = handler
            .on_token_transfer(TokenTransferNotification {
                from: account("market.ram"),
                to: account("blender"),
                amount: TokenAmount(1800),
                memo: String::new(),
            })
            .unwrap();
        assert_eq!(
            outcome,
            TokenTransferOutcome::ProceedsForwarded {
                to: account("alice"),
                amount: TokenAmount(1791),
            }
        );
        assert!(handler.withdrawal().is_empty());

        // 6. The complete outbound action stream, in issue order.
        assert_eq!(
            handler.dispatcher().actions(),
            &[
                Action::BuyResource {
                    payer: account("blender"),
                    amount: TokenAmount(3000),
                },
                Action::MintAsset {
                    collection: coll.clone(),
                    schema: account("items"),
                    template: TARGET,
                    to: account("alice"),
                },
                Action::BurnAsset { asset: AssetId(11) },
                Action::BurnAsset { asset: AssetId(10) },
                Action::MintAsset {
                    collection: coll.clone(),
                    schema: account("items"),
                    template: TARGET,
                    to: account("alice"),
                },
                Action::BurnAsset { asset: AssetId(12) },
                Action::BurnAsset { asset: AssetId(13) },
                Action::SellResource { bytes: 600 },
                Action::TransferTokens {
                    to: account("alice"),
                    amount: TokenAmount(1791),
                    memo: "Resource refund".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_withdraw_settle_withdraw_again() {
        let mut handler = create_handler(1.0);
        let coll = account("sample1");
        deposit(&mut handler, 1000, "sample1"); // 995 bytes

        handler
            .withdraw_resource(account("alice"), coll.clone(), 500)
            .unwrap();

        // A second request is refused while the first is unsettled.
        let err = handler
            .withdraw_resource(account("alice"), coll.clone(), 100)
            .unwrap_err();
        assert!(matches!(err, BlendError::WithdrawalAlreadyPending { .. }));

        // Settlement drains the slot; the next request goes through.
        handler
            .on_token_transfer(TokenTransferNotification {
                from: account("market.ram"),
                to: account("blender"),
                amount: TokenAmount(500),
                memo: String::new(),
            })
            .unwrap();
        handler
            .withdraw_resource(account("alice"), coll.clone(), 100)
            .unwrap();
        assert_eq!(handler.ledger().available(&coll), 395);
    }

    #[test]
    fn test_recipe_lifecycle_register_update_delete() {
        let mut handler = create_handler(1.0);
        let coll = account("sample1");

        handler
            .register_recipe(account("alice"), coll.clone(), TARGET, vec![INPUT_A])
            .unwrap();
        handler
            .register_recipe(account("alice"), coll.clone(), TARGET, vec![INPUT_A, INPUT_B])
            .unwrap();
        assert_eq!(
            handler.recipes().lookup(TARGET).unwrap().inputs,
            vec![INPUT_A, INPUT_B]
        );

        handler.delete_recipe(account("alice"), TARGET).unwrap();
        deposit(&mut handler, 1000, "sample1");
        let err = blend(&mut handler, vec![AssetId(10), AssetId(11)]).unwrap_err();
        assert_eq!(err, BlendError::RecipeNotFound(TARGET));
    }

    #[test]
    fn test_notifications_parse_from_wire_json() {
        // Payloads arrive as serialized events from the subscription glue.
        let json = r#"{
            "from": "alice",
            "to": "blender",
            "assets": [10, 11],
            "memo": "1001"
        }"#;
        let note: AssetTransferNotification = serde_json::from_str(json).unwrap();

        let mut handler = create_handler(3.0);
        deposit(&mut handler, 3000, "sample1");
        handler
            .register_recipe(
                account("alice"),
                account("sample1"),
                TARGET,
                vec![INPUT_A, INPUT_B],
            )
            .unwrap();

        let outcome = handler.on_asset_transfer(note).unwrap();
        assert!(matches!(outcome, AssetTransferOutcome::Blended { .. }));
    }
}
