//! Player versus track collision
//!
//! A linear scan over the live segments; the track never holds more than a
//! handful at once.

use super::rect::Rect;
use super::track::Track;

/// True if any segment overlaps the given body rectangle
pub fn is_grounded(track: &Track, body: &Rect) -> bool {
    track.segments().any(|segment| segment.rect.intersects(body))
}
