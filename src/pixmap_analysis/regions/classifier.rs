//! Single-pass region classification.
//!
//! Both modes reuse the shared scan iterator: row-band classification
//! routes each pixel into every band containing its row, predicate
//! filtering collects matching pixels in scan order. Bounding boxes grow
//! by min/max updates as matches are found.

use tracing::debug;

use crate::pixmap_analysis::decoder::types::{PixmapImage, Rgb};
use crate::pixmap_analysis::regions::types::{
    BoundingBox, ChannelFilter, MatchSet, RegionReport, RowBand,
};

/// Classifies every pixel into the row bands containing it, skipping
/// pixels that exactly match `exclude`. Bands may overlap, in which case
/// a pixel is counted in each overlapping band; disjointness is the
/// caller's choice, not enforced here.
pub fn classify_bands(
    image: &PixmapImage,
    bands: &[RowBand],
    exclude: Option<Rgb>,
) -> Vec<RegionReport> {
    let mut reports: Vec<RegionReport> = bands
        .iter()
        .map(|band| RegionReport::empty(band.name.clone()))
        .collect();

    for record in image.scan() {
        if Some(record.color) == exclude {
            continue;
        }
        for (band, report) in bands.iter().zip(reports.iter_mut()) {
            if band.contains(record.y) {
                report.histogram.record(record.color);
                grow(&mut report.bounds, record.x, record.y);
            }
        }
    }

    for report in &reports {
        debug!(
            "Region '{}': {} pixels, {} distinct colors",
            report.name,
            report.matched_pixels(),
            report.histogram.distinct_colors()
        );
    }
    reports
}

/// Collects every pixel whose color satisfies the predicate, in row-major
/// scan order, together with the bounding box of the matched set.
pub fn find_matches_with<F>(image: &PixmapImage, predicate: F) -> MatchSet
where
    F: Fn(Rgb) -> bool,
{
    let mut matches = MatchSet::default();
    for record in image.scan().filter(|r| predicate(r.color)) {
        grow(&mut matches.bounds, record.x, record.y);
        matches.records.push(record);
    }
    debug!("Predicate scan matched {} pixels", matches.len());
    matches
}

/// Collects every pixel inside the per-channel ranges of `filter`.
pub fn find_matches(image: &PixmapImage, filter: &ChannelFilter) -> MatchSet {
    find_matches_with(image, |color| filter.matches(color))
}

fn grow(bounds: &mut Option<BoundingBox>, x: u32, y: u32) {
    match bounds {
        Some(bbox) => bbox.include(x, y),
        None => *bounds = Some(BoundingBox::at(x, y)),
    }
}
