use parcel_rules::classification::{
    Catalog, ClassificationEngine, ClassifyOptions, Destination, Measurement, ProgramId,
    RawMeasurement, SilentAdvisor, UnitSystem,
};

fn parcel(length: f64, width: f64, height: f64, weight: f64) -> Measurement {
    Measurement::new(length, width, height, weight).expect("valid measurement")
}

#[test]
fn us_ground_parcel_reports_every_channel_and_a_recommendation() {
    let engine = ClassificationEngine::standard();

    let response = engine
        .classify(
            ProgramId::UsFbm,
            &parcel(40.0, 20.0, 10.0, 10.0),
            &ClassifyOptions::default(),
        )
        .expect("US-FBM is registered");

    assert_eq!(response.units, UnitSystem::Imperial);
    assert_eq!(response.band.as_deref(), Some("ground"));
    assert_eq!(response.results.len(), 6);

    let fedex = response.result_for("FEDEX-Ground").expect("FedEx evaluated");
    assert_eq!(fedex.tier, "standard");
    assert!((fedex.dimensional_weight - 32.0).abs() < 1e-9);
    assert!((fedex.chargeable_weight - 32.0).abs() < 1e-9);

    assert_eq!(response.recommended.as_deref(), Some("YUN-Ground"));
}

#[test]
fn overweight_parcel_is_rejected_before_any_channel_runs() {
    let engine = ClassificationEngine::standard();

    let response = engine
        .classify(
            ProgramId::UsFbm,
            &parcel(40.0, 20.0, 10.0, 160.0),
            &ClassifyOptions::default(),
        )
        .expect("US-FBM is registered");

    assert_eq!(
        response.rejected.as_deref(),
        Some("weight 160.00 lb exceeds the program maximum of 150 lb")
    );
    assert!(response.results.is_empty());
    assert!(response.advisories.is_empty());
    assert!(response.recommended.is_none());
}

#[test]
fn near_boundary_parcel_gets_advice_without_changing_results() {
    let catalog = Catalog::standard();
    let advised = ClassificationEngine::new(catalog.clone(), Default::default());
    let silent = ClassificationEngine::with_advisor(catalog, SilentAdvisor);
    let near_boundary = parcel(118.5, 20.0, 10.0, 5.0);

    let with_advice = advised
        .classify(ProgramId::DeFbm, &near_boundary, &ClassifyOptions::default())
        .expect("DE-FBM is registered");
    let without = silent
        .classify(ProgramId::DeFbm, &near_boundary, &ClassifyOptions::default())
        .expect("DE-FBM is registered");

    assert!(with_advice
        .advisories
        .iter()
        .any(|message| message.contains("of the 120 cm boundary")));
    assert!(without.advisories.is_empty());
    assert_eq!(with_advice.results, without.results);
    assert_eq!(with_advice.recommended, without.recommended);
}

#[test]
fn canada_fba_lists_triggered_surcharges() {
    let engine = ClassificationEngine::standard();

    let response = engine
        .classify(
            ProgramId::CaFba,
            &parcel(40.0, 25.0, 25.0, 75.0),
            &ClassifyOptions::default(),
        )
        .expect("CA-FBA is registered");

    let result = &response.results[0];
    assert!(result.eligible);
    assert_eq!(result.reason, "triggered: H,K; surcharge total USD 77.00");
    assert_eq!(response.recommended.as_deref(), Some("CA-FBA"));
}

#[test]
fn raw_operator_input_is_normalized_into_program_units() {
    let engine = ClassificationEngine::standard();
    let raw = RawMeasurement::new("39.37 in", "20cm", "10 cm", "4.4 lb");

    let response = engine
        .classify_raw(
            "de-fbm",
            &raw,
            &ClassifyOptions {
                destination: Destination::Austria,
            },
        )
        .expect("valid request");

    assert_eq!(response.program, ProgramId::DeFbm);
    assert!((response.measurement.length - 99.9998).abs() < 1e-3);
    assert!((response.measurement.weight - 1.99580643).abs() < 1e-6);
    assert_eq!(response.band.as_deref(), Some("dhl-dpd"));
    assert!(response.recommended.is_some());
}
