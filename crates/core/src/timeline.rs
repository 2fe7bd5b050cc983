//! Timeline layout: axis positions, clustering, and marker heights.
//!
//! Pure, deterministic pass over a user's events. The API layer loads the
//! events, finds the origin ("birth") event, and hands everything here;
//! nothing in this module touches the database or the clock beyond the
//! `today` argument, which keeps the whole pass unit testable.

use crate::types::EventDate;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Events closer together than this many days join the same cluster.
pub const CLUSTER_WINDOW_DAYS: i64 = 30;

/// Marker height (px) for singleton clusters and the first cluster member.
pub const DEFAULT_HEIGHT: i32 = 120;

/// Additional height (px) per subsequent member of a cluster.
pub const HEIGHT_STEP: i32 = 40;

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// A dated event as seen by the layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelinePoint {
    /// Caller-side identifier, echoed back in [`PlacedPoint`].
    pub id: i64,
    pub date: EventDate,
}

/// Layout result for a single event.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PlacedPoint {
    pub id: i64,
    /// Normalized axis position in `[0, 100]`: elapsed days since the
    /// origin as a percentage of the origin-to-today span.
    pub position: f64,
    /// Index of the cluster this event belongs to, in date order.
    pub cluster: usize,
    /// Marker height in pixels, staggered within a cluster.
    pub height: i32,
    /// True when the raw position fell outside `[0, 100]` (the event is
    /// dated before the origin or after `today`) and was clamped.
    pub clamped: bool,
}

// ---------------------------------------------------------------------------
// Layout pass
// ---------------------------------------------------------------------------

/// Compute axis positions and marker heights for a set of events.
///
/// Events dated before `origin` clamp to position 0 and events after
/// `today` clamp to 100; both are flagged so the client can render them
/// distinctly. A zero-day span (origin is today) places everything at 0
/// rather than dividing by zero.
///
/// The returned vector is sorted by date (ties broken by id), which is
/// also the order clustering runs in: an event within
/// [`CLUSTER_WINDOW_DAYS`] of the previous cluster member joins that
/// cluster, otherwise it starts a new one. Member `i` of a cluster gets
/// height `DEFAULT_HEIGHT + i * HEIGHT_STEP`, so markers inside a cluster
/// never share a height tier.
pub fn layout(points: &[TimelinePoint], origin: EventDate, today: EventDate) -> Vec<PlacedPoint> {
    let span_days = (today - origin).num_days();

    let mut sorted: Vec<TimelinePoint> = points.to_vec();
    sorted.sort_by_key(|p| (p.date, p.id));

    let mut placed = Vec::with_capacity(sorted.len());
    let mut cluster = 0usize;
    let mut cluster_len = 0usize;
    let mut prev_date: Option<EventDate> = None;

    for point in sorted {
        let (position, clamped) = position_for(point.date, origin, span_days);

        let chained = prev_date
            .is_some_and(|prev| (point.date - prev).num_days() <= CLUSTER_WINDOW_DAYS);
        if chained {
            cluster_len += 1;
        } else {
            if prev_date.is_some() {
                cluster += 1;
            }
            cluster_len = 0;
        }
        prev_date = Some(point.date);

        placed.push(PlacedPoint {
            id: point.id,
            position,
            cluster,
            height: height_for(cluster_len),
            clamped,
        });
    }

    placed
}

/// Normalized position for a single date, with the clamp flag.
fn position_for(date: EventDate, origin: EventDate, span_days: i64) -> (f64, bool) {
    let elapsed = (date - origin).num_days();

    if elapsed < 0 {
        return (0.0, true);
    }
    if span_days <= 0 {
        // Origin is today (or in the future): no axis to spread over.
        return (0.0, elapsed > 0);
    }
    if elapsed > span_days {
        return (100.0, true);
    }

    (elapsed as f64 / span_days as f64 * 100.0, false)
}

/// Marker height for the `index`-th member of a cluster.
pub fn height_for(index: usize) -> i32 {
    DEFAULT_HEIGHT + index as i32 * HEIGHT_STEP
}
