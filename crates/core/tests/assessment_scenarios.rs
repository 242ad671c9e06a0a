use hunter_core::{
    parse_activity_batch, run, ActivityRecord, CartRecord, DiscountHunterPipeline, DomainError,
    OrderRecord, ScoringConfig,
};

fn assess_json(raw: &str) -> hunter_core::HunterAssessment {
    let records = parse_activity_batch(raw).expect("fixture parses");
    run(&records)
}

#[test]
fn black_friday_shopper_is_flagged() {
    let raw = r#"[
        {"order_id":"o-1","customer_id":"c-9","discount_applied":12.5,"order_date":"2024-11-29T10:00:00Z",
         "sale_period":{"start":"2024-11-29T00:00:00Z","end":"2024-12-02T23:59:59Z"},
         "cart_id":"k-1","cart_status":"abandoned","discount_viewed":true},
        {"order_id":"o-2","customer_id":"c-9","discount_applied":true,"order_date":"2024-12-02T23:59:59Z",
         "sale_period":{"start":"2024-11-29T00:00:00Z","end":"2024-12-02T23:59:59Z"},
         "cart_id":"k-2","cart_status":"abandoned","discount_viewed":true}
    ]"#;

    let assessment = assess_json(raw);

    assert_eq!(assessment.duf, 1.0);
    assert_eq!(assessment.pfds, 1.0);
    assert_eq!(assessment.dscaf, 1.0);
    assert!((assessment.score - 1.0).abs() < 1e-9);
    assert!(assessment.is_discount_hunter);
}

#[test]
fn full_price_buyer_is_not_flagged() {
    let raw = "{\"order_id\":\"o-1\",\"discount_applied\":0,\"sale_period\":false}\n\
               {\"order_id\":\"o-2\",\"discount_applied\":0,\"sale_period\":false}\n\
               {\"order_id\":\"o-3\",\"discount_applied\":0,\"sale_period\":false}\n\
               {\"order_id\":\"o-4\",\"discount_applied\":5,\"sale_period\":false}\n";

    let assessment = assess_json(raw);

    assert!((assessment.duf - 0.25).abs() < 1e-12);
    assert!((assessment.discount_proportion - 0.25).abs() < 1e-12);
    assert_eq!(assessment.pfds, 0.0);
    assert_eq!(assessment.dscaf, 0.0);
    assert!((assessment.score - 0.25).abs() < 1e-9);
    assert!(!assessment.is_discount_hunter);
}

#[test]
fn separate_order_and_cart_tables_can_be_unioned() {
    let orders: Vec<OrderRecord> = serde_json::from_str(
        r#"[
            {"order_id":"o-1","customer_id":"c-1","discount_applied":true,"sale_period":true},
            {"order_id":"o-2","customer_id":"c-1","discount_applied":3}
        ]"#,
    )
    .expect("orders parse");
    let carts: Vec<CartRecord> = serde_json::from_str(
        r#"[
            {"cart_id":"k-1","customer_id":"c-1","cart_status":"abandoned","discount_viewed":true},
            {"cart_id":"k-2","customer_id":"c-1","discount_viewed":true}
        ]"#,
    )
    .expect("carts parse");

    let records: Vec<ActivityRecord> = orders
        .into_iter()
        .map(ActivityRecord::from)
        .chain(carts.into_iter().map(ActivityRecord::from))
        .collect();
    let assessment = run(&records);

    // Cart rows carry no discount, so they dilute the order shares.
    assert!((assessment.duf - 0.5).abs() < 1e-12);
    assert!((assessment.pfds - 0.25).abs() < 1e-12);
    assert!((assessment.dscaf - 0.5).abs() < 1e-12);
}

#[test]
fn malformed_rows_fail_fast_with_position() {
    let raw = r#"[{"discount_applied":1},{"sale_period":"sometimes"}]"#;

    let error = parse_activity_batch(raw).unwrap_err();

    assert!(matches!(error, DomainError::MalformedRecord { position: 2, .. }));
}

#[test]
fn configured_pipeline_shares_metrics_with_default_run() {
    let records = parse_activity_batch(r#"[{"discount_applied":true},{"discount_applied":false}]"#)
        .expect("fixture parses");
    let pipeline = DiscountHunterPipeline::from_config(&ScoringConfig {
        threshold: 0.1,
        ..ScoringConfig::default()
    })
    .expect("valid config");

    let configured = pipeline.assess(&records);
    let default = run(&records);

    assert_eq!(configured.metrics(), default.metrics());
    assert_eq!(configured.score, default.score);
    assert!(configured.is_discount_hunter);
    assert!(!default.is_discount_hunter);
}
