use crate::common::{date, point, series};
use stockview::timeseries::chart::{EMPTY_CHART_MESSAGE, format_tooltip_value};
use stockview::{ChartData, TimeSeries};

fn close_to(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn points_come_out_in_date_order_whatever_the_input_order() {
    let s = series(&[
        ("2024-01-03", "103"),
        ("2024-01-01", "101"),
        ("2024-01-02", "102"),
    ]);

    let chart = ChartData::from_series("AAPL", &s);

    let dates: Vec<_> = chart.points.iter().map(|p| p.date).collect();
    assert_eq!(
        dates,
        vec![date("2024-01-01"), date("2024-01-02"), date("2024-01-03")]
    );
    let closes: Vec<_> = chart.points.iter().map(|p| p.close).collect();
    assert_eq!(closes, vec![101.0, 102.0, 103.0]);
    assert_eq!(chart.title, "AAPL price chart");
}

#[test]
fn y_domain_pads_the_close_range() {
    let s = series(&[("2024-01-02", "181.18"), ("2024-01-01", "184.25")]);

    let (lo, hi) = ChartData::from_series("AAPL", &s).y_domain().unwrap();

    assert!(close_to(lo, 176.18), "lo = {lo}");
    assert!(close_to(hi, 189.25), "hi = {hi}");
}

#[test]
fn empty_series_has_no_domain() {
    let chart = ChartData::from_series("AAPL", &TimeSeries::new("", Vec::new()));

    assert!(chart.is_empty());
    assert_eq!(chart.y_domain(), None);
    assert_eq!(EMPTY_CHART_MESSAGE, "No chart data available");
}

#[test]
fn labels_and_tooltips_are_formatted() {
    let s = TimeSeries::new("2024-01-05", vec![point("2024-01-05", "181.1")]);
    let chart = ChartData::from_series("AAPL", &s);
    let p = &chart.points[0];

    assert_eq!(p.tick_label(), "Jan 5");
    assert_eq!(p.tooltip_label(), "2024/1/5");
    assert_eq!(format_tooltip_value(p.close), "181.10");
}
