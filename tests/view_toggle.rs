use activity_charts::chart::LegendAction;
use activity_charts::models::{DashboardInput, SeriesMap, SeriesPoint};
use activity_charts::view::{ViewState, transition};
use activity_charts::{ChartError, ChartRenderer, Dashboard, RenderOptions, ViewController};

fn points(v: f64) -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("2020-11-01 7:00:00.000", v),
        SeriesPoint::new("2020-11-01 8:00:00.000", v + 1.0),
    ]
}

/// Three locations, but station data only for the first two.
fn dashboard() -> (Dashboard, RenderOptions) {
    let mut location_data = SeriesMap::new();
    for name in ["Gym", "Library", "Union"] {
        location_data.insert(name.into(), points(3.0));
    }
    let station_data = vec![
        SeriesMap::from_iter([
            ("Gym East".to_string(), points(1.0)),
            ("Gym West".to_string(), points(2.0)),
        ]),
        SeriesMap::from_iter([("Library Lobby".to_string(), points(3.0))]),
    ];
    let input = DashboardInput {
        location_data,
        station_data,
        weekday_totals: vec![0.0; 7],
    };
    let options = RenderOptions {
        seed: Some(42),
        ..RenderOptions::default()
    };
    let dashboard = ChartRenderer::new(options.clone()).render(&input).unwrap();
    (dashboard, options)
}

#[test]
fn valid_click_swaps_in_station_data() {
    let (d, options) = dashboard();
    let mut view = ViewController::from_dashboard(&d, options);

    let cfg = view.toggle(1).unwrap().clone();
    assert_eq!(cfg.data, d.station_data[1]);
    assert_eq!(cfg.options.legend.on_click, Some(LegendAction::ShowLocations));
    assert_eq!(view.title(), "Station Activity @ Library");
    assert_eq!(view.state(), ViewState::StationView(1));
    assert_eq!(view.revision(), 1);
}

#[test]
fn station_then_location_restores_original() {
    let (d, options) = dashboard();
    let mut view = ViewController::from_dashboard(&d, options);
    let original = view.chart().clone();

    view.to_station_view(0).unwrap();
    assert_ne!(view.chart(), &original);
    view.to_location_view();

    assert_eq!(view.chart(), &original);
    assert_eq!(view.title(), "Location Activity");
    assert_eq!(view.state(), ViewState::LocationView);
    assert_eq!(view.revision(), 2);
}

#[test]
fn toggle_ping_pongs() {
    let (d, options) = dashboard();
    let mut view = ViewController::from_dashboard(&d, options);
    view.toggle(0).unwrap();
    // Index is ignored in the station view.
    view.toggle(7).unwrap();
    assert_eq!(view.state(), ViewState::LocationView);
    assert_eq!(view.chart().data, d.location_data);
    view.toggle(0).unwrap();
    assert_eq!(view.title(), "Station Activity @ Gym");
}

#[test]
fn click_past_station_views_is_rejected() {
    let (d, options) = dashboard();
    let mut view = ViewController::from_dashboard(&d, options);
    let before = view.chart().clone();

    let err = view.toggle(2).unwrap_err();
    assert!(matches!(
        err,
        ChartError::InvalidSeriesIndex {
            index: 2,
            available: 2
        }
    ));
    assert_eq!(view.chart(), &before);
    assert_eq!(view.state(), ViewState::LocationView);
    assert_eq!(view.title(), "Location Activity");
    assert_eq!(view.revision(), 0);

    assert!(matches!(
        view.to_station_view(99),
        Err(ChartError::InvalidSeriesIndex { index: 99, .. })
    ));
}

#[test]
fn rejected_station_jump_keeps_current_station_view() {
    let (d, options) = dashboard();
    let mut view = ViewController::from_dashboard(&d, options);
    view.to_station_view(0).unwrap();
    let shown = view.chart().clone();
    let title = view.title().to_string();

    assert!(view.to_station_view(5).is_err());
    assert_eq!(view.state(), ViewState::StationView(0));
    assert_eq!(view.chart(), &shown);
    assert_eq!(view.title(), title);
    assert_eq!(view.revision(), 1);
}

#[test]
fn transition_is_pure() {
    let (d, options) = dashboard();
    let a = transition(ViewState::LocationView, 0, &d.location_data, 2, &options).unwrap();
    let b = transition(ViewState::LocationView, 0, &d.location_data, 2, &options).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.state, ViewState::StationView(0));
    assert_eq!(a.title, "Station Activity @ Gym");
}

#[test]
fn custom_titles_flow_through() {
    let (d, _) = dashboard();
    let options = RenderOptions {
        location_title: "All sites".into(),
        station_title_prefix: "Site: ".into(),
        ..RenderOptions::default()
    };
    let mut view = ViewController::from_dashboard(&d, options);
    assert_eq!(view.title(), "All sites");
    view.toggle(0).unwrap();
    assert_eq!(view.title(), "Site: Gym");
}
