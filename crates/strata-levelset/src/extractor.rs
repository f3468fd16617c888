//! The [`NeighborhoodExtractor`].

use log::{debug, warn};
use strata_core::{GridIndex, GridRegion, NoProgress, ProgressSink, ScalarField};
use strata_range::RegionIndexRange;

use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::node::{LevelSetNode, NodeContainer};
use crate::progress::ProgressCadence;

/// Locates the grid points adjacent to a level set.
///
/// The extractor borrows its inputs (the field and, in narrow-band mode,
/// the candidate list) and owns its two output containers. Each call to
/// [`locate`](Self::locate) clears and refills both outputs; a call that
/// fails leaves them as they were.
///
/// A point exactly on the level set is recorded inside with distance 0.
/// A point with no sign change towards any face neighbour yields
/// [`large_value`](ExtractorConfig::large_value) and is not recorded.
pub struct NeighborhoodExtractor<'a, F: ?Sized, const D: usize> {
    config: ExtractorConfig,
    level_set: Option<&'a F>,
    narrow_band: Option<&'a NodeContainer<D>>,
    region: GridRegion<D>,
    inside: NodeContainer<D>,
    outside: NodeContainer<D>,
    last_point_is_inside: bool,
}

impl<'a, F: ?Sized, const D: usize> NeighborhoodExtractor<'a, F, D> {
    /// An extractor with no inputs and empty outputs.
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            level_set: None,
            narrow_band: None,
            region: GridRegion::default(),
            inside: NodeContainer::new(),
            outside: NodeContainer::new(),
            last_point_is_inside: false,
        }
    }

    // ── Inputs ─────────────────────────────────────────────────────

    /// Field to extract from.
    pub fn set_input_level_set(&mut self, field: &'a F) {
        self.level_set = Some(field);
    }

    /// The current input field.
    pub fn level_set(&self) -> Option<&'a F> {
        self.level_set
    }

    /// Candidate list for narrow-band passes.
    pub fn set_input_narrow_band(&mut self, band: &'a NodeContainer<D>) {
        self.narrow_band = Some(band);
    }

    /// The current candidate list.
    pub fn narrow_band(&self) -> Option<&'a NodeContainer<D>> {
        self.narrow_band
    }

    /// Forget the candidate list.
    pub fn clear_narrow_band(&mut self) {
        self.narrow_band = None;
    }

    // ── Configuration ──────────────────────────────────────────────

    /// The full configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Replace the configuration wholesale.
    pub fn set_config(&mut self, config: ExtractorConfig) {
        self.config = config;
    }

    /// Iso-value of the level set.
    pub fn level_set_value(&self) -> f64 {
        self.config.level_set_value
    }

    /// Set the iso-value.
    pub fn set_level_set_value(&mut self, value: f64) {
        self.config.level_set_value = value;
    }

    /// Whether passes are restricted to the narrow band.
    pub fn narrow_banding(&self) -> bool {
        self.config.narrow_banding
    }

    /// Switch narrow-band mode.
    pub fn set_narrow_banding(&mut self, on: bool) {
        self.config.narrow_banding = on;
    }

    /// Width of the narrow band.
    pub fn narrow_bandwidth(&self) -> f64 {
        self.config.narrow_bandwidth
    }

    /// Set the width of the narrow band.
    pub fn set_narrow_bandwidth(&mut self, width: f64) {
        self.config.narrow_bandwidth = width;
    }

    /// The "no crossing" sentinel.
    pub fn large_value(&self) -> f64 {
        self.config.large_value
    }

    /// Set the "no crossing" sentinel.
    pub fn set_large_value(&mut self, value: f64) {
        self.config.large_value = value;
    }

    // ── Outputs ────────────────────────────────────────────────────

    /// Points at or below the level set, in visit order.
    pub fn inside_points(&self) -> &NodeContainer<D> {
        &self.inside
    }

    /// Points above the level set, in visit order.
    pub fn outside_points(&self) -> &NodeContainer<D> {
        &self.outside
    }

    /// Whether the most recent distance computation recorded an inside point.
    pub fn last_point_is_inside(&self) -> bool {
        self.last_point_is_inside
    }

    /// Both outputs as one signed sequence: inside nodes negated, then
    /// outside nodes. Suitable as the candidate list of a later
    /// narrow-band pass.
    pub fn signed_band(&self) -> NodeContainer<D> {
        let mut band = NodeContainer::with_capacity(self.inside.len() + self.outside.len());
        band.extend(
            self.inside
                .iter()
                .map(|node| LevelSetNode::new(node.index, -node.value)),
        );
        band.extend(self.outside.iter().copied());
        band
    }
}

impl<F: ?Sized, const D: usize> Default for NeighborhoodExtractor<'_, F, D> {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl<'a, F: ScalarField<D> + ?Sized, const D: usize> NeighborhoodExtractor<'a, F, D> {
    /// Run a pass without progress reporting.
    pub fn locate(&mut self) -> Result<(), ExtractError> {
        self.locate_with_progress(&mut NoProgress)
    }

    /// Run a pass, reporting the visited fraction to `progress` about
    /// ten times.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration, a missing field, or narrow-band
    /// mode without a candidate list. The outputs are untouched on error.
    pub fn locate_with_progress(
        &mut self,
        progress: &mut dyn ProgressSink,
    ) -> Result<(), ExtractError> {
        let (field, band) = self.check_inputs().inspect_err(|e| {
            warn!("locate refused: {e}");
        })?;

        self.inside.clear();
        self.outside.clear();
        self.last_point_is_inside = false;
        self.region = field.buffered_region();

        match band {
            Some(band) => self.scan_narrow_band(field, band, progress),
            None => self.scan_full(field, progress),
        }

        debug!(
            "locate finished: {} inside, {} outside",
            self.inside.len(),
            self.outside.len()
        );
        Ok(())
    }

    /// Distance from `index` to the level set, recorded into the matching
    /// output.
    ///
    /// Appends to the current outputs without clearing them. Returns
    /// [`large_value`](Self::large_value) and records nothing when no
    /// crossing is found or `index` lies outside the field's buffered
    /// region.
    pub fn calculate_distance(&mut self, index: &GridIndex<D>) -> Result<f64, ExtractError> {
        let field = self.level_set.ok_or(ExtractError::MissingLevelSet)?;
        self.region = field.buffered_region();
        Ok(self.distance_at(field, index))
    }

    fn check_inputs(&self) -> Result<(&'a F, Option<&'a NodeContainer<D>>), ExtractError> {
        self.config.validate()?;
        let field = self.level_set.ok_or(ExtractError::MissingLevelSet)?;
        let band = if self.config.narrow_banding {
            Some(self.narrow_band.ok_or(ExtractError::MissingNarrowBand)?)
        } else {
            None
        };
        Ok((field, band))
    }

    fn scan_full(&mut self, field: &F, progress: &mut dyn ProgressSink) {
        let range = RegionIndexRange::from_region(&self.region);
        debug!("locate: full scan over {} indices", range.len());
        let cadence = ProgressCadence::new(range.len());
        for (i, index) in range.iter().enumerate() {
            cadence.tick(i, progress);
            self.distance_at(field, &index);
        }
    }

    fn scan_narrow_band(
        &mut self,
        field: &F,
        band: &NodeContainer<D>,
        progress: &mut dyn ProgressSink,
    ) {
        debug!("locate: narrow band over {} candidates", band.len());
        let half_width = self.config.band_half_width();
        let cadence = ProgressCadence::new(band.len());
        for (i, node) in band.iter().enumerate() {
            cadence.tick(i, progress);
            if node.value.abs() <= half_width {
                self.distance_at(field, &node.index);
            }
        }
    }

    fn distance_at(&mut self, field: &F, index: &GridIndex<D>) -> f64 {
        self.last_point_is_inside = false;
        let large = self.config.large_value;
        if !self.region.is_inside(index) {
            return large;
        }

        let level = self.config.level_set_value;
        let center = field.pixel(index) - level;
        if center == 0.0 {
            self.inside.push(LevelSetNode::new(*index, 0.0));
            self.last_point_is_inside = true;
            return 0.0;
        }
        let inside = center <= 0.0;

        // Nearest interpolated crossing per axis.
        let mut crossings = [large; D];
        for neighbour in self.region.face_neighbours(index) {
            let value = field.pixel(&neighbour.index) - level;
            let crosses = if inside { value > 0.0 } else { value < 0.0 };
            if !crosses {
                continue;
            }
            let distance = center / (center - value) * field.spacing(neighbour.axis);
            let slot = &mut crossings[neighbour.axis];
            if distance < *slot {
                *slot = distance;
            }
        }

        crossings.sort_unstable_by(f64::total_cmp);
        let mut sum = 0.0;
        for &d in &crossings {
            if d >= large {
                break;
            }
            sum += 1.0 / (d * d);
        }
        if sum == 0.0 {
            return large;
        }

        let distance = (1.0 / sum).sqrt();
        let node = LevelSetNode::new(*index, distance);
        if inside {
            self.inside.push(node);
            self.last_point_is_inside = true;
        } else {
            self.outside.push(node);
        }
        distance
    }
}
