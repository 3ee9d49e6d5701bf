use crate::common::{quote, series};
use stockview::app::view::LOADING_MESSAGE;
use stockview::app::{Direction, QuoteCard};
use stockview::{Action, AppState, Effect, Period, Quote};

fn found(state: &mut AppState, q: Quote) {
    let token = match state.reduce(Action::Search(q.symbol.clone())).as_slice() {
        [Effect::FetchQuote(req)] => req.token,
        other => panic!("expected quote lookup, got {other:?}"),
    };
    state.reduce(Action::QuoteResolved {
        token,
        result: Ok(q),
    });
}

#[test]
fn quote_card_formats_a_falling_quote() {
    let card = QuoteCard::from(&quote("AAPL", "181.18", "-0.73"));

    assert_eq!(card.symbol, "AAPL");
    assert_eq!(card.price, "$181.18");
    assert_eq!(card.change, "$-0.73");
    assert_eq!(card.direction, Direction::Down);
    assert_eq!(card.volume, "1.5M");
    assert_eq!(card.trading_day, "2024-01-05");
}

#[test]
fn quote_card_formats_a_rising_or_flat_quote() {
    let up = QuoteCard::from(&quote("MSFT", "1234.5", "2.1"));
    assert_eq!(up.direction, Direction::Up);
    assert_eq!(up.change, "+$2.10");
    assert_eq!(up.price, "$1,234.50");

    let flat = QuoteCard::from(&quote("MSFT", "10", "0"));
    assert_eq!(flat.direction, Direction::Up);
    assert_eq!(flat.change, "+$0.00");
}

#[test]
fn loading_hides_the_previous_card() {
    let mut state = AppState::new();
    found(&mut state, quote("AAPL", "181.18", "-0.73"));
    assert!(state.view().quote_card.is_some());

    state.reduce(Action::Search("MSFT".into()));
    let view = state.view();

    assert!(view.loading);
    assert!(view.quote_card.is_none());
    assert_eq!(LOADING_MESSAGE, "Fetching data...");
}

#[test]
fn error_banner_mirrors_state_error() {
    let mut state = AppState::new();
    state.reduce(Action::Search(String::new()));

    let view = state.view();

    assert_eq!(view.error_banner.as_deref(), Some("Please enter a ticker code"));
    assert!(view.quote_card.is_none());
}

#[test]
fn series_controls_follow_symbol_and_loading() {
    let mut state = AppState::new();
    let view = state.view().series;
    assert!(!view.fetch_enabled);
    assert!(!view.export_enabled);
    assert_eq!(view.period, Period::D30);

    found(&mut state, quote("AAPL", "181.18", "-0.73"));
    let view = state.view().series;
    assert!(view.fetch_enabled);
    assert!(!view.export_enabled);
    assert_eq!(view.fetch_label, "Fetch time series");

    let req = match state.reduce(Action::FetchSeries).as_slice() {
        [Effect::FetchSeries(req)] => req.clone(),
        other => panic!("expected series fetch, got {other:?}"),
    };
    let view = state.view().series;
    assert!(view.loading);
    assert!(!view.fetch_enabled);
    assert_eq!(view.fetch_label, "Fetching...");
    assert!(view.chart.is_none());

    state.reduce(Action::SeriesResolved {
        request: req,
        result: Ok(series(&[("2024-01-04", "181.91"), ("2024-01-03", "184.25")])),
    });
    let view = state.view().series;
    assert!(view.fetch_enabled);
    assert!(view.export_enabled);

    let chart = view.chart.expect("chart after load");
    assert_eq!(chart.title, "AAPL price chart");
    assert_eq!(chart.points.len(), 2);
    let info = view.info.expect("info after load");
    assert_eq!(info.last_refreshed, "2024-01-05");
    assert_eq!(info.point_count, 2);
}

#[test]
fn series_errors_surface_in_their_own_panel() {
    let mut state = AppState::new();
    state.reduce(Action::FetchSeries);
    state.reduce(Action::ExportCsv);

    let view = state.view();

    assert_eq!(view.error_banner, None);
    assert_eq!(
        view.series.fetch_error.as_deref(),
        Some("Please look up a ticker code first")
    );
    assert_eq!(
        view.series.export_error.as_deref(),
        Some("Please look up a ticker code first")
    );
    assert!(view.series.chart.is_none());
    assert!(view.series.info.is_none());
}

#[test]
fn export_button_is_disabled_while_exporting() {
    let mut state = AppState::new();
    found(&mut state, quote("AAPL", "181.18", "-0.73"));
    let req = match state.reduce(Action::FetchSeries).as_slice() {
        [Effect::FetchSeries(req)] => req.clone(),
        other => panic!("expected series fetch, got {other:?}"),
    };
    state.reduce(Action::SeriesResolved {
        request: req,
        result: Ok(series(&[("2024-01-03", "184.25")])),
    });

    state.reduce(Action::ExportCsv);
    let view = state.view().series;

    assert!(view.exporting);
    assert!(!view.export_enabled);
}

#[test]
fn chart_is_hidden_once_another_symbol_is_current() {
    let mut state = AppState::new();
    found(&mut state, quote("AAPL", "181.18", "-0.73"));
    let req = match state.reduce(Action::FetchSeries).as_slice() {
        [Effect::FetchSeries(req)] => req.clone(),
        other => panic!("expected series fetch, got {other:?}"),
    };
    state.reduce(Action::SeriesResolved {
        request: req,
        result: Ok(series(&[("2024-01-03", "184.25")])),
    });
    assert!(state.view().series.chart.is_some());

    found(&mut state, quote("MSFT", "367.75", "2.5"));
    let view = state.view().series;

    assert!(view.chart.is_none());
    assert!(view.info.is_none());
    assert!(!view.export_enabled);
    assert!(view.fetch_enabled);
}
