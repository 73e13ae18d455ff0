/// Share of the displayed confidence taken from the model's own estimate.
pub const AI_WEIGHT_PERCENT: f64 = 70.0;
/// Share taken from the community like-percentage.
pub const COMMUNITY_WEIGHT_PERCENT: f64 = 30.0;

/// Blend a claim's raw adjudication confidence with its feedback
/// like-percentage into the confidence shown to readers.
///
/// Both inputs are clamped to 0..=100; the result is truncated toward zero.
/// Pure and uncached: call it on every read so it tracks current feedback.
pub fn blend_confidence(raw_confidence: i32, like_percent: f64) -> i32 {
    let raw = raw_confidence.clamp(0, 100) as f64;
    let community = if like_percent.is_finite() {
        like_percent.clamp(0.0, 100.0)
    } else {
        0.0
    };

    let blended = (raw * AI_WEIGHT_PERCENT + community * COMMUNITY_WEIGHT_PERCENT) / 100.0;
    blended.trunc() as i32
}
