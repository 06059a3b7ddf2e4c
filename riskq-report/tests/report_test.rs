use riskq_aggregation::AggregationEngine;
use riskq_core::config::ReportConfig;
use riskq_core::errors::{ErrorCode, ExportError};
use riskq_core::models::AnalysisData;
use riskq_core::traits::IAggregator;
use riskq_report::builder::UNAVAILABLE_MESSAGE;
use riskq_report::{Block, ChartSeries, Report, ReportBuilder};
use test_fixtures::{flooding_panel, risk_file};

fn flooding_report(config: ReportConfig) -> Report {
    let panel = flooding_panel();
    let data = AggregationEngine::default().aggregate(&panel.risk_file, &panel.direct, &panel.cascades);
    ReportBuilder::new(config).build(&panel.risk_file, &data).unwrap()
}

#[test]
fn full_report_is_paginated() {
    let report = flooding_report(ReportConfig::default());

    assert_eq!(report.title, "Risk analysis: Riverine flooding");
    assert_eq!(report.risk_file_id, "rf-flood");
    assert_eq!(report.blocks().count(), 20);
    assert_eq!(report.page_count(), 2);
    assert_eq!(report.pages[0].blocks.len(), 12);
    assert_eq!(report.pages[1].number, 2);
    assert!(report.verify());

    assert!(matches!(
        &report.pages[0].blocks[0],
        Block::Heading { level: 1, text } if text == "Riverine flooding"
    ));
    assert!(!report.blocks().any(|b| matches!(b, Block::Unavailable { .. })));
}

#[test]
fn small_pages_keep_block_order() {
    let report = flooding_report(ReportConfig {
        blocks_per_page: 3,
        ..ReportConfig::default()
    });
    assert_eq!(report.page_count(), 7);
    for (i, page) in report.pages.iter().enumerate() {
        assert_eq!(page.number, i + 1);
        assert!(!page.blocks.is_empty() && page.blocks.len() <= 3);
    }
    let last = report.blocks().last().unwrap();
    assert!(matches!(last, Block::Chart { series: ChartSeries::Bars(points), .. } if points.len() == 2));
}

#[test]
fn coded_estimates_are_described() {
    let report = flooding_report(ReportConfig::default());
    let rows: Vec<_> = report
        .blocks()
        .filter_map(|b| match b {
            Block::KeyValue { rows } => Some(rows),
            _ => None,
        })
        .flatten()
        .collect();

    assert!(rows
        .iter()
        .any(|r| r.key == "Human impact" && r.value == "HA2: 10 to 100 persons affected"));
    assert!(rows.iter().any(|r| r.key == "Category" && r.value == "Nature"));
}

#[test]
fn unavailable_aggregate_renders_placeholder() {
    let rf = risk_file("rf-1");
    let report = ReportBuilder::default()
        .build(&rf, &AnalysisData::unavailable("rf-1"))
        .unwrap();

    assert_eq!(report.page_count(), 1);
    assert!(report
        .blocks()
        .any(|b| matches!(b, Block::Unavailable { message } if message == UNAVAILABLE_MESSAGE)));
    assert!(!report.blocks().any(|b| matches!(b, Block::Chart { .. })));

    // Codes that were never set show the default label.
    assert!(report.blocks().any(|b| match b {
        Block::KeyValue { rows } => rows.iter().any(|r| r.value == "Unknown"),
        _ => false,
    }));
}

#[test]
fn aggregate_of_another_risk_file_is_refused() {
    let err = ReportBuilder::default()
        .build(&risk_file("rf-1"), &AnalysisData::unavailable("rf-2"))
        .unwrap_err();
    assert!(matches!(err, ExportError::Render { .. }));
    assert_eq!(err.error_code(), "EXPORT_ERROR");
}

#[test]
fn serialized_report_reads_back_intact() {
    let report = flooding_report(ReportConfig::default());
    let bytes = report.to_bytes().unwrap();

    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(text.contains("\"kind\": \"heading\""));

    let back = Report::from_bytes(&bytes).unwrap();
    assert_eq!(back, report);
    assert!(back.verify());

    assert!(Report::from_bytes(b"[]").is_err());
}

#[test]
fn averaged_values_survive_export_and_verify() {
    let panel = flooding_panel();
    let mut data =
        AggregationEngine::default().aggregate(&panel.risk_file, &panel.direct, &panel.cascades);
    let builder = ReportBuilder::default();

    for n in 1..=300u32 {
        data.scenarios[0].human.value = f64::from(n) / 3.0 / 7.0;
        data.scenarios[0].total_impact = f64::from(n) / 11.0;
        let report = builder.build(&panel.risk_file, &data).unwrap();
        let back = Report::from_bytes(&report.to_bytes().unwrap()).unwrap();
        assert!(back.verify(), "checksum mismatch for n = {n}");
        assert_eq!(back.checksum, report.checksum);
    }
}

#[test]
fn tampered_report_fails_verification() {
    let mut report = flooding_report(ReportConfig::default());
    report.pages[0].blocks.push(Block::Paragraph {
        text: "inserted".to_string(),
    });
    assert!(!report.verify());
}
