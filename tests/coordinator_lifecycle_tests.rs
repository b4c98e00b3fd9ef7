use plotsync::api::{
    DataDefinition, LayoutMode, LifecycleCommand, LoadedSeries, MemoryStatus, PlotConfiguration,
    PlotDefinition, SeriesKind, SeriesLoader, SyncPolicies, ViewportSet, PRIMARY_VIEWPORT_ID,
};
use plotsync::core::{all_data, LineSeries, RenderStrategy};
use plotsync::error::{PlotError, PlotResult};
use plotsync::render::NullRedraw;

fn empty_set() -> ViewportSet<NullRedraw, MemoryStatus> {
    ViewportSet::new(NullRedraw::new(), MemoryStatus::new(), SyncPolicies::default())
}

#[test]
fn primary_viewport_exists_from_the_start() {
    let set = empty_set();
    assert_eq!(set.len(), 1);
    assert!(set.contains(PRIMARY_VIEWPORT_ID));
}

#[test]
fn duplicate_viewport_id_fails_creation() {
    let mut set = empty_set();
    assert!(set.add_viewport("1"));
    assert!(!set.add_viewport("1"));
    assert!(!set.add_viewport(PRIMARY_VIEWPORT_ID));
    assert_eq!(set.len(), 2);
}

#[test]
fn primary_viewport_cannot_be_closed() {
    let mut set = empty_set();
    assert!(!set.close_viewport(PRIMARY_VIEWPORT_ID));
    assert!(set.contains(PRIMARY_VIEWPORT_ID));
}

#[test]
fn closing_an_unknown_viewport_is_reported() {
    let mut set = empty_set();
    assert!(!set.close_viewport("missing"));
}

#[test]
fn closing_the_last_secondary_expands_the_primary() {
    let mut set = empty_set();
    set.add_viewport("1");
    assert!(set.close_viewport("1"));

    let primary = set.get(PRIMARY_VIEWPORT_ID).expect("primary");
    assert_eq!(primary.layout, LayoutMode::FillParent);
    assert!(primary.visible);
}

#[test]
fn maximize_hides_the_other_secondaries_and_toggle_restores_them() {
    let mut set = empty_set();
    set.add_viewport("1");
    set.add_viewport("2");
    set.get_mut("2").expect("viewport").visible = false;

    assert!(set.toggle_maximize("1"));
    assert_eq!(set.maximized(), Some("1"));
    // The primary is never hidden by a maximize.
    assert!(set.get(PRIMARY_VIEWPORT_ID).expect("primary").visible);
    assert!(set.get("1").expect("viewport").visible);
    assert!(!set.get("2").expect("viewport").visible);

    assert!(set.toggle_maximize("1"));
    assert_eq!(set.maximized(), None);
    assert!(set.get(PRIMARY_VIEWPORT_ID).expect("primary").visible);
    // Prior visibility is remembered, not reset.
    assert!(!set.get("2").expect("viewport").visible);
}

#[test]
fn maximizing_a_second_viewport_restores_the_first() {
    let mut set = empty_set();
    set.add_viewport("1");
    set.add_viewport("2");

    set.toggle_maximize("1");
    set.toggle_maximize("2");

    assert_eq!(set.maximized(), Some("2"));
    assert!(set.get("2").expect("viewport").visible);
    assert!(!set.get("1").expect("viewport").visible);
}

#[test]
fn closing_the_maximized_viewport_restores_the_layout() {
    let mut set = empty_set();
    set.add_viewport("1");
    set.add_viewport("2");
    set.toggle_maximize("1");

    assert!(set.close_viewport("1"));
    assert_eq!(set.maximized(), None);
    assert!(set.get(PRIMARY_VIEWPORT_ID).expect("primary").visible);
    assert!(set.get("2").expect("viewport").visible);
}

#[test]
fn hide_and_show_all_secondary_leave_the_primary_alone() {
    let mut set = empty_set();
    set.add_viewport("1");
    set.add_viewport("2");

    set.hide_all_secondary();
    assert!(set.get(PRIMARY_VIEWPORT_ID).expect("primary").visible);
    assert!(!set.get("1").expect("viewport").visible);

    set.show_all_secondary();
    assert!(set.get("1").expect("viewport").visible);
}

#[test]
fn delete_all_secondary_keeps_only_the_primary() {
    let mut set = empty_set();
    set.add_viewport("1");
    set.add_viewport("2");
    set.toggle_maximize("2");

    set.delete_all_secondary();
    assert_eq!(set.len(), 1);
    assert!(set.contains(PRIMARY_VIEWPORT_ID));
    assert_eq!(set.maximized(), None);
    assert_eq!(
        set.get(PRIMARY_VIEWPORT_ID).expect("primary").layout,
        LayoutMode::FillParent
    );
}

#[test]
fn load_shared_selects_a_strategy_and_notifies() {
    let mut set = empty_set();
    set.add_viewport("1");
    let x: Vec<f64> = (0..500).map(|i| i as f64).collect();
    let y = x.clone();

    set.load_shared(&all_data(&x, &y));

    for id in [PRIMARY_VIEWPORT_ID, "1"] {
        let viewport = set.get(id).expect("viewport");
        assert_eq!(viewport.strategy(), Some(RenderStrategy::HighFidelity));
        assert_eq!(viewport.series.line(0).expect("base series").len(), 500);
    }
    let messages = set.status_sink().messages();
    assert!(messages.iter().any(|m| m.contains("500")));
}

#[test]
fn clear_data_empties_the_series_stores() {
    let mut set = empty_set();
    set.add_viewport("1");
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    set.load_shared(&all_data(&x, &x));

    assert!(set.clear_viewport_data("1"));
    assert!(set.get("1").expect("viewport").series.is_empty());
    assert!(!set.get("0").expect("primary").series.is_empty());
    assert!(!set.clear_viewport_data("missing"));

    set.clear_all_data();
    assert!(set.get("0").expect("primary").series.is_empty());
}

#[test]
fn lifecycle_commands_reach_the_status_sink() {
    let mut set = empty_set();
    set.lifecycle(LifecycleCommand::Init);
    set.lifecycle(LifecycleCommand::Start);
    set.lifecycle(LifecycleCommand::Stop);

    assert_eq!(
        set.status_sink().messages(),
        ["Initialized", "Started", "Stopped"]
    );
}

struct StubLoader;

impl SeriesLoader for StubLoader {
    fn load(&mut self, definition: &DataDefinition) -> PlotResult<LoadedSeries> {
        if definition.source == "broken" {
            return Err(PlotError::InvalidData("source unavailable".to_owned()));
        }
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| v + definition.data_id as f64).collect();
        Ok(LoadedSeries::Line(LineSeries::new(x, y, None, None)?))
    }
}

fn line_definition(data_id: usize, name: &str, source: &str) -> DataDefinition {
    DataDefinition {
        data_id,
        kind: SeriesKind::Line,
        name: name.to_owned(),
        source: source.to_owned(),
        color: None,
    }
}

#[test]
fn apply_config_creates_viewports_and_loads_in_id_order() {
    let mut set = empty_set();
    let config = PlotConfiguration {
        plots: vec![
            PlotDefinition {
                plot_id: "0".to_owned(),
                plot_name: "Price".to_owned(),
                height: Some(700),
                data: vec![
                    line_definition(2, "slow", "ok"),
                    line_definition(1, "fast", "ok"),
                ],
            },
            PlotDefinition {
                plot_id: "rsi".to_owned(),
                plot_name: "RSI".to_owned(),
                height: None,
                data: vec![line_definition(1, "rsi", "ok")],
            },
        ],
    };

    set.apply_config(&config, &mut StubLoader);

    assert_eq!(set.len(), 2);
    let primary = set.get("0").expect("primary");
    assert_eq!(primary.layout, LayoutMode::FixedHeight(700));
    assert_eq!(primary.series.line_count(), 2);
    assert!(primary.series.line(1).is_some());
    assert!(primary.series.line(2).is_some());
    assert!(set.get("rsi").expect("created").series.line(1).is_some());
}

#[test]
fn apply_config_skips_failing_series_and_continues() {
    let mut set = empty_set();
    let config = PlotConfiguration {
        plots: vec![PlotDefinition {
            plot_id: "0".to_owned(),
            plot_name: "Price".to_owned(),
            height: None,
            data: vec![
                line_definition(1, "bad", "broken"),
                line_definition(2, "good", "ok"),
            ],
        }],
    };

    set.apply_config(&config, &mut StubLoader);

    let primary = set.get("0").expect("primary");
    assert!(primary.series.line(1).is_none());
    assert!(primary.series.line(2).is_some());
}
