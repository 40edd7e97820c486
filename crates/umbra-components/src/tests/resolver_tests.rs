use super::{resolve_content_size, ContentSizePolicy};
use umbra_ui_layout::{LayoutConstraints, Size, MAX_DIMENSION};

fn envelope(min_w: f32, min_h: f32, max_w: f32, max_h: f32) -> LayoutConstraints {
    LayoutConstraints::new(Size::new(min_w, min_h), Size::new(max_w, max_h))
}

#[test]
fn output_stays_inside_bounded_envelopes() {
    // Grid over well-formed bounded constraints and measured combinations;
    // with a bounded maximum no exemption applies and the envelope holds.
    let bounds = [(0.0, 50.0), (0.0, 120.0), (10.0, 120.0), (50.0, 400.0)];
    let measured_values = [-1.0, 0.0, 30.0, 75.0, 500.0];
    let policy = ContentSizePolicy::new(48.0, 300.0);

    for &(min_w, max_w) in &bounds {
        for &(min_h, max_h) in &bounds {
            let constraints = envelope(min_w, min_h, max_w, max_h);
            for &mw in &measured_values {
                for &mh in &measured_values {
                    let result =
                        resolve_content_size(&constraints, Size::new(mw, mh), &policy);
                    assert!(
                        result.width >= min_w && result.width <= max_w,
                        "width {} escaped [{min_w}, {max_w}] for measured {mw}x{mh}",
                        result.width
                    );
                    assert!(
                        result.height >= min_h && result.height <= max_h,
                        "height {} escaped [{min_h}, {max_h}] for measured {mw}x{mh}",
                        result.height
                    );
                }
            }
        }
    }
}

#[test]
fn identical_inputs_give_identical_output() {
    let constraints = envelope(0.0, 0.0, 250.0, 90.0);
    let policy = ContentSizePolicy::new(44.0, 0.0);
    let first = resolve_content_size(&constraints, Size::new(0.0, 0.0), &policy);
    let second = resolve_content_size(&constraints, Size::new(0.0, 0.0), &policy);
    assert_eq!(first, second);
}

#[test]
fn measured_size_passes_through_within_bounds() {
    let constraints = envelope(0.0, 0.0, 400.0, 400.0);
    let policy = ContentSizePolicy::new(48.0, 300.0);
    let result = resolve_content_size(&constraints, Size::new(350.0, 380.0), &policy);
    assert_eq!(result, Size::new(350.0, 380.0));
}

#[test]
fn unset_width_takes_bounded_maximum() {
    let constraints = envelope(0.0, 0.0, 200.0, 100.0);
    let policy = ContentSizePolicy::new(48.0, 300.0);
    let result = resolve_content_size(&constraints, Size::ZERO, &policy);
    assert_eq!(result, Size::new(200.0, 48.0));
}

#[test]
fn unset_width_takes_default_under_unbounded_maximum() {
    let policy = ContentSizePolicy::new(48.0, 300.0);
    let infinite = LayoutConstraints::unbounded();
    assert_eq!(
        resolve_content_size(&infinite, Size::ZERO, &policy).width,
        300.0
    );

    // The host's huge finite sentinel counts as unbounded too.
    let sentinel = envelope(0.0, 0.0, MAX_DIMENSION, MAX_DIMENSION);
    assert_eq!(
        resolve_content_size(&sentinel, Size::ZERO, &policy).width,
        300.0
    );
}

#[test]
fn fallback_height_survives_unbounded_maximum() {
    let policy = ContentSizePolicy::new(48.0, 0.0);
    let result = resolve_content_size(&LayoutConstraints::unbounded(), Size::ZERO, &policy);
    assert_eq!(result.height, 48.0);
}

#[test]
fn fallback_height_still_respects_the_minimum() {
    let policy = ContentSizePolicy::new(48.0, 0.0);
    let constraints = envelope(0.0, 60.0, f32::INFINITY, f32::INFINITY);
    let result = resolve_content_size(&constraints, Size::ZERO, &policy);
    assert_eq!(result.height, 60.0);
}

#[test]
fn fallback_height_is_capped_by_a_bounded_maximum() {
    // The exemption only covers the unbounded sentinel; a real cap wins.
    let policy = ContentSizePolicy::new(48.0, 0.0);
    let constraints = envelope(0.0, 0.0, 100.0, 20.0);
    let result = resolve_content_size(&constraints, Size::ZERO, &policy);
    assert_eq!(result.height, 20.0);
}

#[test]
fn real_measurement_is_capped_by_a_bounded_maximum() {
    let policy = ContentSizePolicy::new(48.0, 0.0);
    let constraints = envelope(0.0, 0.0, 300.0, 100.0);
    let result = resolve_content_size(&constraints, Size::new(250.0, 500.0), &policy);
    assert_eq!(result, Size::new(250.0, 100.0));
}

#[test]
fn collapsed_policy_resolves_to_clamped_zero() {
    let policy = ContentSizePolicy::collapsed();
    let loose = envelope(0.0, 0.0, 400.0, 400.0);
    assert_eq!(
        resolve_content_size(&loose, Size::new(120.0, 48.0), &policy),
        Size::ZERO
    );

    let floored = envelope(10.0, 8.0, 400.0, 400.0);
    assert_eq!(
        resolve_content_size(&floored, Size::ZERO, &policy),
        Size::new(10.0, 8.0)
    );
}

#[test]
fn inverted_bounds_do_not_panic_and_the_minimum_wins() {
    let policy = ContentSizePolicy::new(48.0, 300.0);
    let constraints = envelope(100.0, 100.0, 50.0, 50.0);
    let result = resolve_content_size(&constraints, Size::new(75.0, 75.0), &policy);
    assert_eq!(result, Size::new(100.0, 100.0));
}
