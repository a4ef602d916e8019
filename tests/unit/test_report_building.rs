use gender_tally::models::{format_percentage, CardKind, Category, ReportSource};
use gender_tally::{classify_default, TallyReport};

#[test]
fn report_from_sample_roster() {
    let counts = classify_default("Nữ\nNữ\nNữ\nNam\nNam\nNữ\nNữ\nNữ\nNữ\nNam\nNữ");
    let report = TallyReport::local(counts, "sample");

    assert_eq!(report.source, ReportSource::Local);
    assert_eq!(report.card(CardKind::Male).unwrap().percentage_label(), "27.3");
    assert_eq!(report.card(CardKind::Female).unwrap().percentage_label(), "72.7");
    assert_eq!(report.card(CardKind::Unknown).unwrap().percentage_label(), "0.0");
    assert_eq!(report.card(CardKind::Total).unwrap().count, 11);

    let slices: Vec<_> = report.chart.iter().map(|s| s.category).collect();
    assert_eq!(slices, vec![Category::Male, Category::Female]);
}

#[test]
fn chart_shares_sum_to_hundred() {
    let report = TallyReport::local(classify_default("nam\nnu\nx\nx"), "stdin");
    let sum: f64 = report.chart.iter().map(|s| s.share).sum();

    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn zero_total_formats_as_zero() {
    assert_eq!(format_percentage(0, 0), "0.0");
    let report = TallyReport::local(classify_default(""), "stdin");
    assert!(report.chart.is_empty());
}
