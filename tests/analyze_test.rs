use descstats::{
    analyze, analyze_with, AnalysisConfig, DataKind, Error, ModeResult, Observation, Summarizable,
    Summary,
};

#[test]
fn test_auto_numeric() {
    let data: Vec<Observation> = vec![10.into(), 20.into(), 30.into(), 40.into(), 50.into()];
    let analysis = analyze(&data, "auto").unwrap();
    assert_eq!(analysis.kind(), DataKind::Quantitative);
    assert_eq!(analysis.as_quantitative().unwrap().mean(), 30.0);
}

#[test]
fn test_auto_categorical() {
    let data: Vec<Observation> = ["A", "B", "A", "C", "B", "A"]
        .iter()
        .map(|&s| s.into())
        .collect();
    let analysis = analyze(&data, "auto").unwrap();
    assert_eq!(analysis.kind(), DataKind::Categorical);
    assert_eq!(
        analysis.as_categorical().unwrap().mode(),
        ModeResult::Unique("A".to_string())
    );
}

#[test]
fn test_numeric_strings_are_quantitative() {
    let data: Vec<Observation> = vec!["1.5".into(), " 2.5".into(), true.into()];
    let analysis = analyze_with(&data, DataKind::Auto).unwrap();
    assert_eq!(analysis.kind(), DataKind::Quantitative);
    assert_eq!(analysis.as_quantitative().unwrap().max(), 2.5);
}

#[test]
fn test_unknown_hint() {
    let data: Vec<Observation> = vec![1.into(), 2.into()];
    match analyze(&data, "ordinal") {
        Err(Error::InvalidParameter(msg)) => assert!(msg.contains("ordinal")),
        other => panic!("expected InvalidParameter, got {:?}", other),
    }
}

#[test]
fn test_summary_with_config() {
    let data: Vec<Observation> = vec![1.into(), 2.into(), 4.into()];
    let analysis = analyze(&data, "quantitative").unwrap();
    let config = AnalysisConfig::builder().precision(2).cv_precision(0).build().unwrap();

    match analysis.summary_with(&config) {
        Summary::Quantitative(summary) => {
            assert_eq!(summary.mean, 2.33);
            assert_eq!(summary.coefficient_of_variation, Some(65.0));
        }
        Summary::Categorical(_) => panic!("expected a quantitative summary"),
    }
}

#[test]
fn test_config_from_toml() {
    let config = AnalysisConfig::from_toml_str("precision = 1\ncv_precision = 1\n").unwrap();
    let data: Vec<Observation> = vec!["x".into(), "y".into(), "y".into()];
    let analysis = analyze(&data, "auto").unwrap();

    match analysis.summary_with(&config) {
        Summary::Categorical(summary) => {
            assert_eq!(summary.simpson_index, 0.4);
            assert_eq!(summary.frequency_table[0].relative, 0.7);
        }
        Summary::Quantitative(_) => panic!("expected a categorical summary"),
    }
}
