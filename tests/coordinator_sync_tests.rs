use approx::assert_relative_eq;

use plotsync::api::{MemoryStatus, MouseButton, SyncPolicies, ViewportSet, WheelAxisMode};
use plotsync::core::{all_data, Axis, CrosshairMode};
use plotsync::render::NullRedraw;

fn sample_data() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..100).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|v| v * 3.0).collect();
    (x, y)
}

fn two_viewport_set(policies: SyncPolicies) -> ViewportSet<NullRedraw, MemoryStatus> {
    let mut set = ViewportSet::new(NullRedraw::new(), MemoryStatus::new(), policies);
    assert!(set.add_viewport("1"));
    let (x, y) = sample_data();
    set.load_shared(&all_data(&x, &y));
    set
}

#[test]
fn zoom_sync_copies_limits_exactly() {
    let mut policies = SyncPolicies::default();
    policies.sync_zoom = true;
    let mut set = two_viewport_set(policies);

    set.button_zoom("0", Axis::X, true);

    let a = set.get("0").expect("primary");
    let b = set.get("1").expect("secondary");
    assert_eq!(a.x_limits, b.x_limits);
    assert_eq!(a.y_limits, b.y_limits);
}

#[test]
fn pan_sync_preserves_target_span_and_recenter() {
    let mut policies = SyncPolicies::default();
    policies.sync_pan = true;
    let mut set = two_viewport_set(policies);

    // Give the target a narrower window than the source.
    set.get_mut("1").expect("secondary").set_limits(Axis::X, 10.0, 30.0);
    let width_before = set.get("1").expect("secondary").x_limits.span();

    set.pan_step("0", Axis::X, 0.2);

    let a = set.get("0").expect("primary");
    let b = set.get("1").expect("secondary");
    assert_relative_eq!(b.x_limits.span(), width_before, epsilon = 1e-9);
    assert_relative_eq!(b.x_limits.center(), a.x_limits.center(), epsilon = 1e-9);
}

#[test]
fn exact_copy_wins_when_pan_and_zoom_sync_are_both_on() {
    let mut policies = SyncPolicies::default();
    policies.sync_pan = true;
    policies.sync_zoom = true;
    let mut set = two_viewport_set(policies);
    set.get_mut("1").expect("secondary").set_limits(Axis::X, 10.0, 30.0);

    set.button_zoom("0", Axis::X, true);

    let a = set.get("0").expect("primary");
    let b = set.get("1").expect("secondary");
    assert_eq!(a.x_limits, b.x_limits);
}

#[test]
fn wheel_sync_mirrors_both_axes_despite_axis_restriction() {
    let mut policies = SyncPolicies::default();
    policies.sync_wheel = true;
    policies.wheel_axis = WheelAxisMode::XOnly;
    let mut set = two_viewport_set(policies);
    set.get_mut("1").expect("secondary").set_limits(Axis::Y, -5.0, 5.0);

    set.wheel_zoom("0", true, 50.0, 150.0);

    let a = set.get("0").expect("primary");
    let b = set.get("1").expect("secondary");
    assert_eq!(a.x_limits, b.x_limits);
    assert_eq!(a.y_limits, b.y_limits);
}

#[test]
fn wheel_axis_none_leaves_the_source_unchanged() {
    let mut policies = SyncPolicies::default();
    policies.wheel_axis = WheelAxisMode::None;
    let mut set = two_viewport_set(policies);
    let before = set.get("0").expect("primary").x_limits;

    set.wheel_zoom("0", true, 50.0, 150.0);
    assert_eq!(set.get("0").expect("primary").x_limits, before);
}

#[test]
fn left_drag_follows_the_pan_rule() {
    let mut policies = SyncPolicies::default();
    policies.sync_pan = true;
    let mut set = two_viewport_set(policies);
    set.get_mut("1").expect("secondary").set_limits(Axis::X, 10.0, 30.0);
    let width_before = set.get("1").expect("secondary").x_limits.span();

    set.get_mut("0").expect("primary").pan(Axis::X, 0.3);
    set.drag_update("0", MouseButton::Left);

    let a = set.get("0").expect("primary");
    let b = set.get("1").expect("secondary");
    assert_relative_eq!(b.x_limits.span(), width_before, epsilon = 1e-9);
    assert_relative_eq!(b.x_limits.center(), a.x_limits.center(), epsilon = 1e-9);
}

#[test]
fn left_drag_mirrors_under_pan_policy_alone() {
    let mut policies = SyncPolicies::default();
    policies.sync_pan = true;
    policies.sync_drag = false;
    let mut set = two_viewport_set(policies);
    set.get_mut("1").expect("secondary").set_limits(Axis::X, 0.0, 10.0);

    set.get_mut("0").expect("primary").set_limits(Axis::X, 5.0, 15.0);
    set.drag_update("0", MouseButton::Left);

    let a = set.get("0").expect("primary");
    let b = set.get("1").expect("secondary");
    assert_relative_eq!(b.x_limits.center(), a.x_limits.center(), epsilon = 1e-9);
    assert_relative_eq!(b.x_limits.span(), 10.0, epsilon = 1e-9);
}

#[test]
fn left_drag_ignores_the_drag_policy() {
    let mut policies = SyncPolicies::default();
    policies.sync_drag = true;
    let mut set = two_viewport_set(policies);
    set.get_mut("1").expect("secondary").set_limits(Axis::X, 0.0, 10.0);
    let before = set.get("1").expect("secondary").x_limits;

    set.get_mut("0").expect("primary").pan(Axis::X, 0.3);
    set.drag_update("0", MouseButton::Left);

    assert_eq!(set.get("1").expect("secondary").x_limits, before);
}

#[test]
fn right_drag_requires_the_drag_policy() {
    let mut policies = SyncPolicies::default();
    policies.sync_pan = true;
    let mut set = two_viewport_set(policies);
    set.get_mut("1").expect("secondary").set_limits(Axis::X, 0.0, 10.0);
    let before = set.get("1").expect("secondary").x_limits;

    set.get_mut("0").expect("primary").zoom(Axis::X, 0.5);
    set.drag_update("0", MouseButton::Right);

    assert_eq!(set.get("1").expect("secondary").x_limits, before);
}

#[test]
fn right_drag_copies_limits_exactly() {
    let mut policies = SyncPolicies::default();
    policies.sync_drag = true;
    let mut set = two_viewport_set(policies);
    set.get_mut("1").expect("secondary").set_limits(Axis::X, 10.0, 30.0);

    set.get_mut("0").expect("primary").zoom(Axis::X, 0.5);
    set.drag_update("0", MouseButton::Right);

    let a = set.get("0").expect("primary");
    let b = set.get("1").expect("secondary");
    assert_eq!(a.x_limits, b.x_limits);
    assert_eq!(a.y_limits, b.y_limits);
}

#[test]
fn drag_redraws_each_affected_viewport_once() {
    let mut policies = SyncPolicies::default();
    policies.sync_drag = true;
    let mut set = two_viewport_set(policies);
    assert!(set.add_viewport("2"));

    let baseline = set.redraw_handler().requests().len();
    set.drag_update("0", MouseButton::Right);

    let requests = &set.redraw_handler().requests()[baseline..];
    assert_eq!(requests.len(), 3);
    for id in ["0", "1", "2"] {
        assert_eq!(requests.iter().filter(|r| r.as_str() == id).count(), 1);
    }
}

#[test]
fn crosshair_mirrors_only_between_visible_crosshairs() {
    let mut policies = SyncPolicies::default();
    policies.sync_crosshair = true;
    let mut set = two_viewport_set(policies);
    assert!(set.add_viewport("2"));

    set.set_crosshair_visible_all(true);
    set.get_mut("2").expect("third").set_crosshair_visible(false);

    set.crosshair_moved("0", 42.0, 7.0);

    let mirrored = set.get("1").expect("secondary").crosshair;
    assert_eq!(mirrored.x, 42.0);
    assert_eq!(mirrored.y, 7.0);

    let gated = set.get("2").expect("third").crosshair;
    assert_ne!(gated.x, 42.0);
}

#[test]
fn visible_crosshairs_mirror_under_default_policies() {
    let mut set = two_viewport_set(SyncPolicies::default());
    set.set_crosshair_visible_all(true);

    set.crosshair_moved("0", 42.0, 7.0);

    let mirrored = set.get("1").expect("secondary").crosshair;
    assert_eq!(mirrored.x, 42.0);
    assert_eq!(mirrored.y, 7.0);
}

#[test]
fn hidden_source_crosshair_does_not_mirror() {
    let mut policies = SyncPolicies::default();
    policies.sync_crosshair = true;
    let mut set = two_viewport_set(policies);
    set.get_mut("1").expect("secondary").set_crosshair_visible(true);

    // Source crosshair stays hidden.
    set.crosshair_moved("0", 42.0, 7.0);
    assert_ne!(set.get("1").expect("secondary").crosshair.x, 42.0);
}

#[test]
fn magnet_mode_snaps_to_the_nearest_sample() {
    let mut policies = SyncPolicies::default();
    policies.sync_crosshair = true;
    let mut set = two_viewport_set(policies);
    set.set_crosshair_mode_all(CrosshairMode::Magnet);
    set.set_crosshair_visible_all(true);

    set.crosshair_moved("0", 41.7, 7.0);
    assert_eq!(set.get("0").expect("primary").crosshair.x, 42.0);
}

#[test]
fn reset_sync_resets_each_viewport_to_its_own_bounds() {
    let mut policies = SyncPolicies::default();
    policies.sync_reset = true;
    let mut set = two_viewport_set(policies);
    set.get_mut("1").expect("secondary").set_limits(Axis::X, 10.0, 30.0);

    set.reset_viewport("0");

    let b = set.get("1").expect("secondary");
    assert_relative_eq!(b.x_limits.min(), 0.0);
    assert_relative_eq!(b.x_limits.max(), 99.0);
}

#[test]
fn copy_limits_to_all_mirrors_the_source() {
    let mut set = two_viewport_set(SyncPolicies::default());
    set.get_mut("0").expect("primary").set_limits(Axis::X, 5.0, 15.0);

    set.copy_limits_to_all("0");

    let a = set.get("0").expect("primary");
    let b = set.get("1").expect("secondary");
    assert_eq!(a.x_limits, b.x_limits);
}

#[test]
fn scroll_sync_clamps_each_viewport_to_its_own_track() {
    let mut policies = SyncPolicies::all_on();
    let mut set = ViewportSet::new(NullRedraw::new(), MemoryStatus::new(), policies);
    assert!(set.add_viewport("1"));
    policies.sync_zoom = false;
    set.set_policies(policies);

    let (x, y) = sample_data();
    set.load_shared(&plotsync::core::last_n_data(&x, &y, 10));

    set.scroll_x("0", 50);

    let a = set.get("0").expect("primary");
    let b = set.get("1").expect("secondary");
    assert_relative_eq!(a.x_limits.min(), 50.0);
    assert_relative_eq!(a.x_limits.max(), 59.0);
    assert_eq!(a.x_limits, b.x_limits);
}

#[test]
fn scroll_with_sync_off_moves_only_the_source() {
    let mut set = two_viewport_set(SyncPolicies::default());
    let (x, y) = sample_data();
    set.load_shared(&plotsync::core::last_n_data(&x, &y, 10));
    let before = set.get("1").expect("secondary").x_limits;

    set.scroll_x("0", 20);

    assert_relative_eq!(set.get("0").expect("primary").x_limits.min(), 20.0);
    assert_eq!(set.get("1").expect("secondary").x_limits, before);
}

#[test]
fn unknown_viewport_ids_are_absorbed() {
    let mut set = two_viewport_set(SyncPolicies::all_on());
    let before = set.get("0").expect("primary").x_limits;

    set.button_zoom("missing", Axis::X, true);
    set.drag_update("missing", MouseButton::Left);
    set.crosshair_moved("missing", 1.0, 2.0);
    set.scroll_x("missing", 5);

    assert_eq!(set.get("0").expect("primary").x_limits, before);
}
