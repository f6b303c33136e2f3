// Integration tests for the scroll-synchronized timeline helpers.

use trazapp_core::*;

#[test]
fn trigger_points_are_segment_centers() {
    let expected = [0.1, 0.3, 0.5, 0.7, 0.9];
    for (i, e) in expected.iter().enumerate() {
        assert!((trigger_point(i, 5) - e).abs() < 1e-6);
    }
    assert!((trigger_point(0, 1) - 0.5).abs() < 1e-6);
    // degenerate stage count does not divide by zero
    assert!(trigger_point(0, 0).is_finite());
}

#[test]
fn highlight_peaks_at_trigger_and_vanishes_outside_window() {
    for n in [1usize, 2, 3, 5, 8] {
        for i in 0..n {
            let t = trigger_point(i, n);
            assert_eq!(highlight_intensity(t, i, n), 1.0, "stage {i}/{n}");
            for outside in [t - 0.1001, t + 0.1001, t - 0.5, t + 0.5, -1.0, 2.0] {
                assert_eq!(highlight_intensity(outside, i, n), 0.0, "stage {i}/{n} at {outside}");
            }
            let half = highlight_intensity(t + 0.05, i, n);
            assert!((half - 0.5).abs() < 1e-4, "stage {i}/{n}: {half}");
            let quarter = highlight_intensity(t - 0.075, i, n);
            assert!((quarter - 0.25).abs() < 1e-4);
        }
    }
}

#[test]
fn highlight_stays_in_unit_range_over_full_scroll() {
    for step in 0..=1000 {
        let progress = step as f32 / 1000.0;
        for i in 0..STAGES.len() {
            let v = highlight_intensity(progress, i, STAGES.len());
            assert!((0.0..=1.0).contains(&v));
        }
    }
}

#[test]
fn highlight_scale_maps_to_card_growth() {
    assert_eq!(highlight_scale(0.0), 1.0);
    assert!((highlight_scale(1.0) - 1.1).abs() < 1e-6);
    assert!((highlight_scale(3.0) - 1.1).abs() < 1e-6);
}

#[test]
fn scroll_progress_tracks_section_through_viewport() {
    // section 2000px tall, viewport 800px
    assert_eq!(scroll_progress(800.0, 2000.0, 800.0), 0.0);
    assert_eq!(scroll_progress(1500.0, 2000.0, 800.0), 0.0);
    assert_eq!(scroll_progress(-2000.0, 2000.0, 800.0), 1.0);
    assert_eq!(scroll_progress(-5000.0, 2000.0, 800.0), 1.0);
    assert!((scroll_progress(-600.0, 2000.0, 800.0) - 0.5).abs() < 1e-6);
    assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
}

#[test]
fn parallax_offset_spans_twenty_percent() {
    assert_eq!(parallax_offset_percent(0.0), 0.0);
    assert!((parallax_offset_percent(0.5) - 10.0).abs() < 1e-6);
    assert_eq!(parallax_offset_percent(1.5), 20.0);
}

#[test]
fn selection_starts_on_first_stage_and_toggles_exclusively() {
    let mut sel = StageSelection::default();
    assert_eq!(sel.active(), Some(0));

    sel.toggle(2);
    assert_eq!(sel.active(), Some(2));
    assert!(!sel.is_active(0));

    sel.toggle(2);
    assert_eq!(sel.active(), None);

    sel.toggle(4);
    sel.toggle(1);
    assert_eq!(sel.active(), Some(1));
    assert!(StageSelection::none().active().is_none());
}

#[test]
fn stage_catalog_is_well_formed() {
    for (i, stage) in STAGES.iter().enumerate() {
        assert_eq!(stage.id as usize, i + 1);
        assert!(Rgba::from_hex(stage.color).is_some());
        assert_eq!(stage.details.len(), 3);
    }
}

#[test]
fn navbar_compacts_after_fifty_pixels() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(50.5));
    assert!(is_scrolled(2000.0));
}

#[test]
fn stage_ids_map_to_catalog_positions() {
    for (i, stage) in STAGES.iter().enumerate() {
        assert_eq!(stage_position(stage.id), Some(i));
        assert_eq!(find_stage(stage.id).map(|s| s.title), Some(stage.title));
    }
    // ids are 1-based; 0 and anything past the catalog are unknown
    assert_eq!(stage_position(0), None);
    assert_eq!(stage_position(STAGES.len() as u8 + 1), None);
    // the last id still triggers inside the scroll range
    let last = stage_position(5).unwrap();
    assert!(trigger_point(last, STAGES.len()) < 1.0);
}
