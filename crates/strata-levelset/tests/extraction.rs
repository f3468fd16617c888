use proptest::prelude::*;
use strata_core::{GridIndex, GridRegion, GridSize, ScalarField};
use strata_levelset::{ExtractorConfig, LevelSetNode, NeighborhoodExtractor, NodeContainer};
use strata_range::RegionIndexRange;
use strata_test_utils::fixtures::{checkerboard, constant, ramp, sphere};
use strata_test_utils::{assert_disjoint, assert_partition, MockField, RecordingProgress};

fn indices<const D: usize>(c: &NodeContainer<D>) -> impl Iterator<Item = GridIndex<D>> + '_ {
    c.iter().map(|n| n.index)
}

#[test]
fn checkerboard_full_scan_partitions_the_region() {
    let field = checkerboard([5, 4, 3]);
    let mut ex = NeighborhoodExtractor::default();
    ex.set_input_level_set(&field);
    ex.locate().unwrap();

    let domain = RegionIndexRange::from_region(&field.buffered_region());
    assert_partition(
        indices(ex.inside_points()),
        indices(ex.outside_points()),
        domain.iter(),
    );
    assert_eq!(ex.inside_points().len() + ex.outside_points().len(), 60);
}

#[test]
fn full_scan_outputs_are_in_raster_order() {
    let field = sphere([9, 9], [1.0, 1.0], [4.0, 4.0], 2.5);
    let mut ex = NeighborhoodExtractor::default();
    ex.set_input_level_set(&field);
    ex.locate().unwrap();
    for out in [ex.inside_points(), ex.outside_points()] {
        let order: Vec<_> = indices(out).collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn sphere_distances_approximate_true_distance() {
    let field = sphere([21, 21], [0.5, 0.5], [5.0, 5.0], 3.0);
    let mut ex = NeighborhoodExtractor::default();
    ex.set_input_level_set(&field);
    ex.locate().unwrap();

    assert!(!ex.inside_points().is_empty());
    assert!(!ex.outside_points().is_empty());
    for node in ex.inside_points().iter().chain(ex.outside_points()) {
        let exact = f64::from(field.get(&node.index).unwrap()).abs();
        // linear interpolation of a curved surface stays within a cell
        assert!(
            (node.value - exact).abs() < 0.5,
            "{}: {} vs {}",
            node.index,
            node.value,
            exact
        );
    }
    for node in ex.inside_points() {
        assert!(field.pixel(&node.index) <= 0.0);
    }
    for node in ex.outside_points() {
        assert!(field.pixel(&node.index) > 0.0);
    }
}

#[test]
fn ramp_records_only_the_two_columns_beside_the_crossing() {
    let field = ramp([6, 3], 2.5, 1.0);
    let mut ex = NeighborhoodExtractor::default();
    ex.set_input_level_set(&field);
    ex.locate().unwrap();
    assert!(ex.inside_points().iter().all(|n| n.index[0] == 2 && n.value == 0.5));
    assert!(ex.outside_points().iter().all(|n| n.index[0] == 3 && n.value == 0.5));
    assert_eq!(ex.inside_points().len(), 3);
    assert_eq!(ex.outside_points().len(), 3);
}

#[test]
fn constant_field_yields_nothing() {
    let field = constant([4, 4], 2.0);
    let mut ex = NeighborhoodExtractor::default();
    ex.set_input_level_set(&field);
    ex.locate().unwrap();
    assert!(ex.inside_points().is_empty());
    assert!(ex.outside_points().is_empty());
}

#[test]
fn narrow_band_from_signed_band_reproduces_full_scan() {
    let field = sphere([12, 12], [1.0, 1.0], [6.0, 5.5], 3.2);
    let mut full = NeighborhoodExtractor::default();
    full.set_input_level_set(&field);
    full.locate().unwrap();
    let band = full.signed_band();

    let mut banded = NeighborhoodExtractor::new(ExtractorConfig {
        narrow_banding: true,
        narrow_bandwidth: 4.0,
        ..ExtractorConfig::default()
    });
    banded.set_input_level_set(&field);
    banded.set_input_narrow_band(&band);
    banded.locate().unwrap();

    assert_eq!(banded.inside_points(), full.inside_points());
    assert_eq!(banded.outside_points(), full.outside_points());
}

#[test]
fn narrow_band_only_reads_around_candidates() {
    let region = GridRegion::from_size(GridSize::new([50, 50]));
    let field = MockField::new(region, [1.0, 1.0], |i: &GridIndex<2>| i[0] as f64 - 24.5);
    let band: NodeContainer<2> = (0..50)
        .map(|y| LevelSetNode::new(GridIndex::new([24, y]), -0.5))
        .collect();

    let mut ex = NeighborhoodExtractor::default();
    ex.set_narrow_banding(true);
    ex.set_input_level_set(&field);
    ex.set_input_narrow_band(&band);
    ex.locate().unwrap();

    assert_eq!(ex.inside_points().len(), 50);
    assert!(ex.outside_points().is_empty());
    // centre plus at most four neighbours per candidate
    assert!(field.reads() <= 50 * 5);
}

#[test]
fn full_scan_reports_progress_ten_times() {
    let field = checkerboard([10, 10]);
    let mut progress = RecordingProgress::new();
    let mut ex = NeighborhoodExtractor::default();
    ex.set_input_level_set(&field);
    ex.locate_with_progress(&mut progress).unwrap();
    assert_eq!(progress.fractions.len(), 10);
    assert_eq!(progress.fractions[0], 0.0);
    progress.assert_monotonic();
}

#[test]
fn empty_region_scan_is_a_no_op() {
    let region = GridRegion::from_size(GridSize::new([0, 4]));
    let field = MockField::new(region, [1.0, 1.0], |_: &GridIndex<2>| 1.0);
    let mut progress = RecordingProgress::new();
    let mut ex = NeighborhoodExtractor::default();
    ex.set_input_level_set(&field);
    ex.locate_with_progress(&mut progress).unwrap();
    assert!(progress.fractions.is_empty());
    assert_eq!(field.reads(), 0);
}

proptest! {
    #[test]
    fn outputs_are_disjoint_and_non_negative(
        values in prop::collection::vec(-3.0f32..3.0, 24),
        level in -1.0f64..1.0,
    ) {
        let region = GridRegion::from_size(GridSize::new([4, 3, 2]));
        let field = strata_image::Image::from_vec(region, [1.0, 0.5, 2.0], values).unwrap();
        let mut ex = NeighborhoodExtractor::default();
        ex.set_level_set_value(level);
        ex.set_input_level_set(&field);
        ex.locate().unwrap();

        assert_disjoint(indices(ex.inside_points()), indices(ex.outside_points()));
        for node in ex.inside_points().iter().chain(ex.outside_points()) {
            prop_assert!(node.value >= 0.0);
            prop_assert!(node.value.is_finite());
        }
        for node in ex.inside_points() {
            prop_assert!(field.pixel(&node.index) - level <= 0.0);
        }
        for node in ex.outside_points() {
            prop_assert!(field.pixel(&node.index) - level > 0.0);
        }
    }

    #[test]
    fn one_dimensional_distances_stay_within_a_cell(
        values in prop::collection::vec(-3.0f32..3.0, 2..12),
    ) {
        let n = values.len();
        let field = strata_image::Image::from_vec(
            GridRegion::from_size(GridSize::new([n])),
            [1.0],
            values,
        ).unwrap();
        let mut ex = NeighborhoodExtractor::default();
        ex.set_input_level_set(&field);
        ex.locate().unwrap();
        // a single axis crossing is a fraction of one cell
        for node in ex.inside_points().iter().chain(ex.outside_points()) {
            prop_assert!(node.value <= 1.0);
        }
    }
}
