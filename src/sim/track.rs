//! Procedural track generation
//!
//! The track is an ordered run of floating platform segments that scrolls
//! left every tick. Segments enter only by being appended on the right and
//! leave only by being evicted from the left once fully off screen.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyParams;
use super::rect::Rect;
use super::rng::RandomSource;
use crate::config::RunnerConfig;
use crate::consts::MIN_SEGMENTS;

/// One platform of the track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Creation order, never reused within a run
    pub id: u32,
    pub rect: Rect,
}

/// Fixed geometry shared by every segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackLayout {
    /// Rightward coverage the track must always reach
    pub view_width: f32,
    /// Top edge of every segment
    pub floor_y: f32,
    pub segment_height: f32,
    pub starter_width: f32,
}

impl TrackLayout {
    pub fn from_config(config: &RunnerConfig) -> Self {
        Self {
            view_width: config.screen_width,
            floor_y: config.floor_y(),
            segment_height: config.segment_height,
            starter_width: config.starter_width,
        }
    }
}

/// The scrolling sequence of segments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    layout: TrackLayout,
    segments: VecDeque<Segment>,
    next_id: u32,
}

impl Track {
    /// Empty track; call [`Track::reset`] before use
    pub fn new(layout: TrackLayout) -> Self {
        Self {
            layout,
            segments: VecDeque::with_capacity(MIN_SEGMENTS + 2),
            next_id: 1,
        }
    }

    /// Rebuild as the starter segment at x = 0 followed by a random fill
    pub fn reset(&mut self, params: &DifficultyParams, rng: &mut impl RandomSource) {
        self.segments.clear();
        self.next_id = 1;
        let id = self.next_segment_id();
        self.segments.push_back(Segment {
            id,
            rect: Rect::new(
                0.0,
                self.layout.floor_y,
                self.layout.starter_width,
                self.layout.segment_height,
            ),
        });
        self.fill(params, rng);
    }

    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// Segments left to right
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Segment> + '_ {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn first(&self) -> Option<&Segment> {
        self.segments.front()
    }

    pub fn last(&self) -> Option<&Segment> {
        self.segments.back()
    }

    fn next_segment_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append one segment a random gap after the current last one
    pub fn add_random_segment(&mut self, params: &DifficultyParams, rng: &mut impl RandomSource) {
        let x = match self.segments.back() {
            Some(last) => last.rect.max_x() + rng.draw(params.gap_range) as f32,
            None => 0.0,
        };
        let width = rng.draw(params.width_range) as f32;
        let id = self.next_segment_id();
        log::trace!("Spawn segment {} at x={:.1} width={}", id, x, width);
        self.segments.push_back(Segment {
            id,
            rect: Rect::new(x, self.layout.floor_y, width, self.layout.segment_height),
        });
    }

    /// Scroll every segment left by the current speed, then evict and refill
    pub fn advance(&mut self, params: &DifficultyParams, rng: &mut impl RandomSource) {
        for segment in &mut self.segments {
            segment.rect.x -= params.scroll_speed;
        }
        self.fill(params, rng);
    }

    /// Restore the count and coverage invariants without scrolling
    fn fill(&mut self, params: &DifficultyParams, rng: &mut impl RandomSource) {
        while self.segments.len() < MIN_SEGMENTS {
            self.add_random_segment(params, rng);
        }

        while self
            .segments
            .front()
            .is_some_and(|s| s.rect.max_x() < 0.0)
        {
            if let Some(evicted) = self.segments.pop_front() {
                log::trace!("Evict segment {}", evicted.id);
            }
        }

        while self.segments.len() < MIN_SEGMENTS
            || self
                .segments
                .back()
                .is_none_or(|s| s.rect.max_x() < self.layout.view_width)
        {
            self.add_random_segment(params, rng);
        }

        debug_assert!(self.invariants_hold(), "track invariants broken: {:?}", self.segments);
    }

    /// Count, coverage, ordering and non-overlap all hold
    pub fn invariants_hold(&self) -> bool {
        // Gaps of zero may jitter by float error after many subtractions
        const EPS: f32 = 1e-3;

        let coverage = self
            .segments
            .back()
            .is_some_and(|s| s.rect.max_x() >= self.layout.view_width);
        let ordered = self
            .segments
            .iter()
            .zip(self.segments.iter().skip(1))
            .all(|(a, b)| b.rect.x + EPS >= a.rect.max_x());
        let sized = self.segments.iter().all(|s| s.rect.width > 0.0);

        self.segments.len() >= MIN_SEGMENTS && coverage && ordered && sized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{MidpointSource, SpawnRange, seeded};
    use proptest::prelude::*;

    fn layout() -> TrackLayout {
        TrackLayout::from_config(&RunnerConfig::default())
    }

    fn params(speed: f32) -> DifficultyParams {
        DifficultyParams {
            scroll_speed: speed,
            gap_range: SpawnRange::new(20, 120),
            width_range: SpawnRange::new(100, 200),
        }
    }

    #[test]
    fn test_reset_layout_with_midpoints() {
        let mut track = Track::new(layout());
        track.reset(&params(2.0), &mut MidpointSource);

        let rects: Vec<Rect> = track.segments().map(|s| s.rect).collect();
        assert_eq!(rects[0], Rect::new(0.0, 450.0, 250.0, 30.0));
        // 250 + gap 70 = 320, width 150
        assert_eq!(rects[1], Rect::new(320.0, 450.0, 150.0, 30.0));
        assert_eq!(rects[2], Rect::new(540.0, 450.0, 150.0, 30.0));
        assert_eq!(track.len(), 5);
        assert!(track.invariants_hold());
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut track = Track::new(layout());
        let mut rng = seeded(3);
        track.reset(&params(2.0), &mut rng);
        for _ in 0..2_000 {
            track.advance(&params(2.0), &mut rng);
            let ids: Vec<u32> = track.segments().map(|s| s.id).collect();
            assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_eviction_only_when_fully_off_screen() {
        let mut track = Track::new(layout());
        track.reset(&params(2.0), &mut MidpointSource);
        let starter_id = track.first().map(|s| s.id);

        // Starter is 250 wide; after 124 ticks its max_x is 2
        for _ in 0..124 {
            track.advance(&params(2.0), &mut MidpointSource);
        }
        assert_eq!(track.first().map(|s| s.id), starter_id);
        assert_eq!(track.first().map(|s| s.rect.max_x()), Some(2.0));

        // max_x == 0 is not yet < 0
        track.advance(&params(2.0), &mut MidpointSource);
        assert_eq!(track.first().map(|s| s.id), starter_id);

        track.advance(&params(2.0), &mut MidpointSource);
        assert_ne!(track.first().map(|s| s.id), starter_id);
    }

    #[test]
    fn test_eviction_only_from_front() {
        let mut track = Track::new(layout());
        let mut rng = seeded(11);
        track.reset(&params(3.0), &mut rng);
        for _ in 0..1_000 {
            let before: Vec<u32> = track.segments().map(|s| s.id).collect();
            track.advance(&params(3.0), &mut rng);
            let after: Vec<u32> = track.segments().map(|s| s.id).collect();
            // Survivors are a prefix-trimmed run of the old list
            let survivors: Vec<u32> =
                after.iter().copied().filter(|id| before.contains(id)).collect();
            assert_eq!(survivors[..], before[before.len() - survivors.len()..]);
        }
    }

    #[test]
    fn test_recovers_from_huge_scroll() {
        let mut track = Track::new(layout());
        track.reset(&params(2.0), &mut MidpointSource);
        track.advance(&params(100_000.0), &mut MidpointSource);
        assert!(track.invariants_hold());
        assert_eq!(track.first().map(|s| s.rect.x), Some(0.0));
    }

    #[test]
    fn test_zero_speed_keeps_track_still() {
        let mut track = Track::new(layout());
        track.reset(&params(0.0), &mut MidpointSource);
        let before: Vec<Segment> = track.segments().copied().collect();
        track.advance(&params(0.0), &mut MidpointSource);
        let after: Vec<Segment> = track.segments().copied().collect();
        assert_eq!(before, after);
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_every_tick(
            seed in any::<u64>(),
            speed in 0.0f32..25.0,
            ticks in 1usize..600,
        ) {
            let mut track = Track::new(layout());
            let mut rng = seeded(seed);
            let mut p = params(speed);
            track.reset(&p, &mut rng);
            for t in 0..ticks {
                track.advance(&p, &mut rng);
                prop_assert!(track.len() >= MIN_SEGMENTS);
                prop_assert!(track.last().map(|s| s.rect.max_x()).unwrap_or(0.0) >= 640.0);
                let segs: Vec<Segment> = track.segments().copied().collect();
                for pair in segs.windows(2) {
                    prop_assert!(pair[0].rect.x <= pair[1].rect.x);
                    prop_assert!(!pair[0].rect.intersects(&pair[1].rect));
                }
                if t % 60 == 59 {
                    p.gap_range = p.gap_range.shifted(3);
                    p.width_range = p.width_range.shifted(3);
                }
            }
        }
    }
}
