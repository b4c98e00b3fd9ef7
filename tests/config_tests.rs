use plotsync::api::{PlotConfiguration, SeriesKind};
use plotsync::core::Color;

#[test]
fn configuration_round_trips_through_json() {
    let input = r##"{
        "plots": [
            {
                "plot_id": "0",
                "plot_name": "Price",
                "height": 600,
                "data": [
                    {"data_id": 1, "kind": "ohlc", "name": "candles", "source": "feed://price"},
                    {"data_id": 2, "kind": "line", "name": "ema", "source": "feed://ema", "color": "#FF8800"}
                ]
            },
            {
                "plot_id": "volume",
                "plot_name": "Volume",
                "data": [
                    {"data_id": 1, "kind": "volume", "name": "volume", "source": "feed://volume"}
                ]
            }
        ]
    }"##;

    let config = PlotConfiguration::from_json(input).expect("valid document");
    assert_eq!(config.plots.len(), 2);
    assert_eq!(config.plots[0].height, Some(600));
    assert_eq!(config.plots[0].data[0].kind, SeriesKind::Ohlc);
    assert_eq!(config.plots[1].height, None);
    assert_eq!(config.plots[1].data[0].kind, SeriesKind::Volume);

    let encoded = config.to_json().expect("encode");
    let decoded = PlotConfiguration::from_json(&encoded).expect("decode");
    assert_eq!(decoded, config);
}

#[test]
fn malformed_documents_fail_with_an_error() {
    assert!(PlotConfiguration::from_json("{").is_err());
    assert!(PlotConfiguration::from_json(r#"{"plots": [{"plot_id": "0"}]}"#).is_err());
}

#[test]
fn hex_colors_parse_with_and_without_alpha() {
    let opaque = Color::from_hex("#FF8800").expect("opaque");
    assert_eq!(opaque.red, 1.0);
    assert_eq!(opaque.alpha, 1.0);

    let translucent = Color::from_hex("00FF0080").expect("translucent");
    assert_eq!(translucent.green, 1.0);
    assert!((translucent.alpha - 128.0 / 255.0).abs() < 1e-12);

    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#GGGGGG").is_err());
}
