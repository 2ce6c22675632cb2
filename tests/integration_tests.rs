use approx::assert_relative_eq;
use treasury_workbench::formulas::financing::{interest_savings, political_risk_insurance};
use treasury_workbench::formulas::fx::{convert_currency, simulate_exchange_rate_impact};
use treasury_workbench::formulas::hedging::hedged_revenue;
use treasury_workbench::formulas::valuation::npv;
use treasury_workbench::session::document::SessionDocument;
use treasury_workbench::session::field::FieldKey;
use treasury_workbench::session::store::Session;
use treasury_workbench::simulation::shock::{rate_shock_sweep, ShockGrid};

/// Full workflow: enter fields → persist → reload → calculate every scenario.
#[test]
fn full_workbench_scenario() {
    let mut session = Session::new();
    session.set(FieldKey::RevenueCny, "6500000");
    session.set(FieldKey::InitialRate, "7.1");
    session.set(FieldKey::NewRate, "7.3");
    session.set(FieldKey::HedgedPercentage, "0.6");
    session.set(FieldKey::ForwardRate, "7.0");
    session.set(FieldKey::DiscountRate, "0.1");
    session.set(FieldKey::CashFlows, "100, 100, 100");
    session.set(FieldKey::Investment, "1000");
    session.set(FieldKey::PremiumRate, "0.05");
    session.set(FieldKey::CapitalAmount, "100000");
    session.set(FieldKey::DomesticRate, "0.08");
    session.set(FieldKey::EurobondRate, "0.05");

    // Persist and reload into a fresh session.
    let json = session.snapshot().to_json_string().unwrap();
    let mut reloaded = Session::new();
    reloaded.restore(&SessionDocument::from_json_str(&json).unwrap());
    assert_eq!(reloaded, session);

    // Exchange-rate impact.
    let impact = simulate_exchange_rate_impact(
        reloaded.number(FieldKey::RevenueCny).unwrap(),
        reloaded.number(FieldKey::InitialRate).unwrap(),
        reloaded.number(FieldKey::NewRate).unwrap(),
    )
    .unwrap();
    assert_relative_eq!(
        impact.impact,
        6_500_000.0 / 7.3 - 6_500_000.0 / 7.1,
        max_relative = 1e-12
    );

    // Hedged revenue.
    let hedge = hedged_revenue(
        reloaded.number(FieldKey::RevenueCny).unwrap(),
        reloaded.number(FieldKey::HedgedPercentage).unwrap(),
        reloaded.number(FieldKey::ForwardRate).unwrap(),
        reloaded.number(FieldKey::InitialRate).unwrap(),
    )
    .unwrap();
    assert_relative_eq!(
        hedge.total_usd,
        6_500_000.0 * 0.6 / 7.0 + 6_500_000.0 * 0.4 / 7.1,
        max_relative = 1e-12
    );

    // NPV, against the hand-computed value.
    let flows = reloaded.cash_flows(FieldKey::CashFlows).unwrap();
    let value = npv(reloaded.number(FieldKey::DiscountRate).unwrap(), &flows).unwrap();
    assert_relative_eq!(value, 100.0 + 100.0 / 1.1 + 100.0 / 1.21, max_relative = 1e-12);

    // Insurance and funding comparison.
    let quote = political_risk_insurance(
        reloaded.number(FieldKey::Investment).unwrap(),
        reloaded.number(FieldKey::PremiumRate).unwrap(),
    );
    assert_eq!(quote.coverage, 900.0);
    assert_eq!(quote.annual_premium, 50.0);

    let funding = interest_savings(
        reloaded.number(FieldKey::CapitalAmount).unwrap(),
        reloaded.number(FieldKey::DomesticRate).unwrap(),
        reloaded.number(FieldKey::EurobondRate).unwrap(),
    );
    assert_eq!(funding.savings, 3000.0);

    // Currency conversion uses the same revenue and spot fields.
    let converted = convert_currency(
        reloaded.number(FieldKey::RevenueCny).unwrap(),
        reloaded.number(FieldKey::InitialRate).unwrap(),
    )
    .unwrap();
    assert_relative_eq!(converted, 6_500_000.0 / 7.1, max_relative = 1e-12);
}

/// A document missing whole groups updates only what it carries.
#[test]
fn partial_document_merges_without_clearing() {
    let mut session = Session::new();
    session.set(FieldKey::Investment, "2500");
    session.set(FieldKey::PremiumRate, "0.03");
    session.set(FieldKey::DiscountRate, "0.08");

    let doc = SessionDocument::from_json_str(
        r#"{
            "exchange_rate": { "revenue_cny": "9000000" },
            "npv": { "discount_rate": "0.12" }
        }"#,
    )
    .unwrap();
    session.restore(&doc);

    // Present keys updated...
    assert_eq!(session.get(FieldKey::RevenueCny), "9000000");
    assert_eq!(session.get(FieldKey::DiscountRate), "0.12");
    // ...absent insurance group untouched...
    assert_eq!(session.get(FieldKey::Investment), "2500");
    assert_eq!(session.get(FieldKey::PremiumRate), "0.03");
    // ...and keys absent from a present group untouched too.
    assert_eq!(session.get(FieldKey::InitialRate), "");
}

/// The persisted JSON uses the documented group/field names.
#[test]
fn snapshot_json_shape() {
    let mut session = Session::new();
    session.set(FieldKey::CashFlows, "1,2,3");

    let json = session.snapshot().to_json_string().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["npv"]["cash_flows"], "1,2,3");
    for group in ["exchange_rate", "hedging", "npv", "insurance", "interest_savings"] {
        assert!(parsed.get(group).is_some(), "missing group {}", group);
        assert!(parsed[group].is_object());
    }
    // Untouched fields persist as empty text, ready to round-trip.
    assert_eq!(parsed["insurance"]["investment"], "");
}

/// Saved text survives a round trip byte for byte, quirks included.
#[test]
fn round_trip_preserves_entry_quirks() {
    let mut session = Session::new();
    session.set(FieldKey::InitialRate, "07.10");
    session.set(FieldKey::CashFlows, " 100 ,200,  -3.50");

    let json = session.snapshot().to_json_string().unwrap();
    let mut reloaded = Session::new();
    reloaded.restore(&SessionDocument::from_json_str(&json).unwrap());

    assert_eq!(reloaded.get(FieldKey::InitialRate), "07.10");
    assert_eq!(reloaded.get(FieldKey::CashFlows), " 100 ,200,  -3.50");
    // The quirky text still parses to the intended numbers.
    assert_eq!(reloaded.number(FieldKey::InitialRate).unwrap(), 7.1);
    assert_eq!(
        reloaded.cash_flows(FieldKey::CashFlows).unwrap(),
        vec![100.0, 200.0, -3.5]
    );
}

/// Malformed persisted data is rejected before the session is touched.
#[test]
fn malformed_document_rejected() {
    for bad in [
        "",
        "[]",
        "42",
        r#"{"exchange_rate": ["revenue_cny"]}"#,
        r#"{"hedging": {"forward_rate": 7.0}}"#,
    ] {
        assert!(
            SessionDocument::from_json_str(bad).is_err(),
            "accepted malformed document: {}",
            bad
        );
    }
}

/// Result records serialize with their documented field names.
#[test]
fn results_serialize_for_json_output() {
    let impact = simulate_exchange_rate_impact(7000.0, 7.0, 7.5).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&impact).unwrap()).unwrap();
    assert!(parsed.get("initial_usd").is_some());
    assert!(parsed.get("new_usd").is_some());
    assert!(parsed.get("impact").is_some());

    let quote = political_risk_insurance(1000.0, 0.05);
    let parsed: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&quote).unwrap()).unwrap();
    assert_eq!(parsed["coverage"], 900.0);
    assert_eq!(parsed["annual_premium"], 50.0);
}

/// The sweep's zero-shock row matches the plain impact calculation.
#[test]
fn sweep_center_matches_single_impact() {
    let grid = ShockGrid::default();
    let rows = rate_shock_sweep(6_500_000.0, 7.1, 7.3, &grid).unwrap();
    assert_eq!(rows.len(), 2 * grid.steps + 1);

    let center = &rows[grid.steps];
    let single = simulate_exchange_rate_impact(6_500_000.0, 7.1, 7.3).unwrap();
    assert_eq!(center.impact, single);
}
