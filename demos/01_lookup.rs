//! Look up a ticker, fetch its series and export it as CSV.
//!
//! ```text
//! STOCKVIEW_BASE_URL=http://localhost:8000/ cargo run --example 01_lookup -- aapl 3m
//! ```

use std::time::Duration;

use stockview::{Action, App, DirectorySink, Period, StockClientBuilder};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| "AAPL".to_string());
    let period: Period = args.next().as_deref().unwrap_or("30d").parse()?;

    let client = StockClientBuilder::from_env()?
        .timeout(Duration::from_secs(10))
        .build()?;
    println!("backend healthy: {}", client.health().await.unwrap_or(false));

    let mut app = App::new(client, DirectorySink::new("downloads"));

    app.dispatch(Action::Search(symbol)).await;
    let view = app.state().view();
    if let Some(err) = view.error_banner {
        println!("error: {err}");
        return Ok(());
    }
    if let Some(card) = view.quote_card {
        println!("--- {} ---", card.symbol);
        println!("price:  {} ({} / {})", card.price, card.change, card.change_percent);
        println!("open:   {}  high: {}  low: {}", card.open, card.high, card.low);
        println!("volume: {}  day: {}", card.volume, card.trading_day);
    }

    app.dispatch(Action::SelectPeriod(period)).await;
    app.dispatch(Action::FetchSeries).await;
    let series = app.state().view().series;
    if let Some(err) = series.fetch_error {
        println!("series error: {err}");
        return Ok(());
    }
    if let (Some(chart), Some(info)) = (series.chart, series.info) {
        println!(
            "{}: {} points, last refreshed {}",
            chart.title, info.point_count, info.last_refreshed
        );
        if let Some((lo, hi)) = chart.y_domain() {
            println!("y-axis: {lo:.2} .. {hi:.2}");
        }
        for p in chart.points.iter().rev().take(5).rev() {
            println!("  {:>8}  close {}", p.tick_label(), stockview::timeseries::chart::format_tooltip_value(p.close));
        }
    }

    app.dispatch(Action::ExportCsv).await;
    let state = app.state();
    match (state.view().series.export_error, state.series().last_download()) {
        (Some(err), _) => println!("export error: {err}"),
        (None, Some(path)) => println!("saved {}", path.display()),
        (None, None) => {}
    }

    Ok(())
}
