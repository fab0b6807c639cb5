use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A line segment emitted by a draw instruction.
///
/// This is the geometry handed to whatever renders the figure. Segments are produced
/// in traversal order, not spatial order. Serialized as a flat
/// `{x0, y0, x1, y1}` record, plus `{length, heading, depth}` when `info` is set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "SegmentRecord", from = "SegmentRecord")]
pub struct Segment {
    /// Pen position before the draw.
    pub start: DVec2,

    /// Pen position after the draw.
    pub end: DVec2,

    /// Turtle context at emission time; only present when extra info was requested.
    pub info: Option<SegmentInfo>,
}

/// Turtle context recorded alongside a segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentInfo {
    /// Step length in effect for this draw.
    pub length: f64,
    /// Heading in radians, in `[0, 2π)`.
    pub heading: f64,
    /// Number of open saves (branch nesting) when drawn.
    pub depth: usize,
}

/// Wire shape of a [`Segment`].
#[derive(Serialize, Deserialize)]
struct SegmentRecord {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    heading: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    depth: Option<usize>,
}

impl From<Segment> for SegmentRecord {
    fn from(s: Segment) -> Self {
        Self {
            x0: s.start.x,
            y0: s.start.y,
            x1: s.end.x,
            y1: s.end.y,
            length: s.info.map(|i| i.length),
            heading: s.info.map(|i| i.heading),
            depth: s.info.map(|i| i.depth),
        }
    }
}

impl From<SegmentRecord> for Segment {
    fn from(r: SegmentRecord) -> Self {
        let info = match (r.length, r.heading, r.depth) {
            (Some(length), Some(heading), Some(depth)) => Some(SegmentInfo {
                length,
                heading,
                depth,
            }),
            _ => None,
        };
        Self {
            start: DVec2::new(r.x0, r.y0),
            end: DVec2::new(r.x1, r.y1),
            info,
        }
    }
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self {
            start,
            end,
            info: None,
        }
    }

    pub fn with_info(mut self, info: SegmentInfo) -> Self {
        self.info = Some(info);
        self
    }

    pub fn x0(&self) -> f64 {
        self.start.x
    }

    pub fn y0(&self) -> f64 {
        self.start.y
    }

    pub fn x1(&self) -> f64 {
        self.end.x
    }

    pub fn y1(&self) -> f64 {
        self.end.y
    }

    /// Euclidean length between the endpoints.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Exact-equality key covering every field.
    fn key(&self) -> SegmentKey {
        let bits = |v: f64| (v + 0.0).to_bits();
        let (length, heading, depth) = match self.info {
            Some(info) => (bits(info.length), bits(info.heading), Some(info.depth)),
            None => (0, 0, None),
        };
        SegmentKey {
            coords: [
                bits(self.start.x),
                bits(self.start.y),
                bits(self.end.x),
                bits(self.end.y),
            ],
            has_info: self.info.is_some(),
            length,
            heading,
            depth,
        }
    }
}

// `-0.0 + 0.0` is `+0.0`, so the key agrees with `==` on signed zeros.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct SegmentKey {
    coords: [u64; 4],
    has_info: bool,
    length: u64,
    heading: u64,
    depth: Option<usize>,
}

/// Drops every segment that is field-for-field identical to an earlier one.
///
/// First occurrences keep their relative order. Endpoints are compared as given:
/// `A→B` and `B→A` are distinct records and both survive.
pub fn dedup_segments(segments: Vec<Segment>) -> Vec<Segment> {
    let mut seen = HashSet::with_capacity(segments.len());
    segments
        .into_iter()
        .filter(|segment| seen.insert(segment.key()))
        .collect()
}

/// Axis-aligned bounding box `(min, max)` of all endpoints, or `None` for no segments.
pub fn bounds(segments: &[Segment]) -> Option<(DVec2, DVec2)> {
    let first = segments.first()?;
    let init = (first.start.min(first.end), first.start.max(first.end));
    Some(segments.iter().fold(init, |(lo, hi), s| {
        (lo.min(s.start).min(s.end), hi.max(s.start).max(s.end))
    }))
}
