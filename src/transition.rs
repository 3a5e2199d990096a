use crate::series::Series;
use serde::Serialize;
use std::time::{Duration, Instant};

pub const TRANSITION_DURATION: Duration = Duration::from_millis(700);

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

#[derive(Debug, Clone)]
struct Transition {
    from: Series,
    to: Series,
    // Pinned on the first frame, not when the transition is requested.
    started: Option<Instant>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub series: Series,
    pub progress: f64,
    pub done: bool,
}

/// Owns the committed series and at most one in-flight transition.
#[derive(Debug, Clone)]
pub struct Renderer {
    committed: Series,
    displayed: Series,
    transition: Option<Transition>,
    duration: Duration,
}

impl Renderer {
    pub fn new(initial: Series) -> Self {
        Self::with_duration(initial, TRANSITION_DURATION)
    }

    pub fn with_duration(initial: Series, duration: Duration) -> Self {
        Self {
            committed: initial,
            displayed: initial,
            transition: None,
            duration,
        }
    }

    pub fn committed(&self) -> Series {
        self.committed
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Starts a transition towards `target`, replacing any in-flight one.
    /// A cancelled transition rebases on the last frame handed out, so the
    /// next animation starts where the chart visibly stopped.
    pub fn begin(&mut self, target: Series) {
        if self.transition.take().is_some() {
            self.committed = self.displayed;
        }
        self.transition = Some(Transition {
            from: self.committed,
            to: target,
            started: None,
        });
    }

    pub fn frame(&mut self, now: Instant) -> Frame {
        let Some(transition) = self.transition.as_mut() else {
            self.displayed = self.committed;
            return Frame {
                series: self.committed,
                progress: 1.0,
                done: true,
            };
        };

        let started = *transition.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };

        if progress >= 1.0 {
            let target = transition.to;
            self.transition = None;
            self.committed = target;
            self.displayed = target;
            return Frame {
                series: target,
                progress: 1.0,
                done: true,
            };
        }

        let series = transition.from.lerp(&transition.to, ease_out_cubic(progress));
        self.displayed = series;
        Frame {
            series,
            progress,
            done: false,
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Series::INITIAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn ease_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn first_frame_is_previous_series() {
        let mut renderer = Renderer::default();
        renderer.begin(Series::from_score(55));
        let frame = renderer.frame(Instant::now());
        assert_eq!(frame.series, Series::INITIAL);
        assert_eq!(frame.progress, 0.0);
        assert!(!frame.done);
    }

    #[test]
    fn start_is_pinned_to_first_frame() {
        let mut renderer = Renderer::default();
        renderer.begin(Series::from_score(55));
        let late = Instant::now() + ms(5_000);
        let frame = renderer.frame(late);
        assert_eq!(frame.progress, 0.0);
        assert!(renderer.is_animating());
    }

    #[test]
    fn converges_exactly_to_target() {
        let target = Series::from_score(55);
        let mut renderer = Renderer::default();
        renderer.begin(target);
        let t0 = Instant::now();
        renderer.frame(t0);
        renderer.frame(t0 + ms(350));
        let last = renderer.frame(t0 + TRANSITION_DURATION);
        assert!(last.done);
        assert_eq!(last.series, target);
        assert_eq!(last.series.0, [40.0, 50.0, 55.0, 63.0, 70.0, 45.0, 55.0]);
        assert_eq!(renderer.committed(), target);
        assert!(!renderer.is_animating());
    }

    #[test]
    fn progress_is_monotonic_and_clamped() {
        let mut renderer = Renderer::default();
        renderer.begin(Series::from_score(90));
        let t0 = Instant::now();
        let mut last = -1.0;
        for step in 0..20u64 {
            let frame = renderer.frame(t0 + ms(step * 50));
            assert!(frame.progress >= last);
            assert!(frame.progress <= 1.0);
            last = frame.progress;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn overshoot_clamps_to_one() {
        let mut renderer = Renderer::default();
        renderer.begin(Series::from_score(10));
        let t0 = Instant::now();
        renderer.frame(t0);
        let frame = renderer.frame(t0 + ms(10_000));
        assert_eq!(frame.progress, 1.0);
        assert!(frame.done);
    }

    #[test]
    fn idle_renderer_reports_committed_series() {
        let mut renderer = Renderer::default();
        let frame = renderer.frame(Instant::now());
        assert!(frame.done);
        assert_eq!(frame.series, Series::INITIAL);
    }

    #[test]
    fn cancelling_rebases_on_displayed_frame() {
        let mut renderer = Renderer::default();
        renderer.begin(Series::from_score(100));
        let t0 = Instant::now();
        renderer.frame(t0);
        let mid = renderer.frame(t0 + ms(350));
        assert!(!mid.done);

        renderer.begin(Series::from_score(0));
        assert_eq!(renderer.committed(), mid.series);
        let first = renderer.frame(t0 + ms(400));
        assert_eq!(first.series, mid.series);
    }

    #[test]
    fn cancel_before_any_frame_keeps_committed_series() {
        let mut renderer = Renderer::default();
        renderer.begin(Series::from_score(100));
        renderer.begin(Series::from_score(0));
        assert_eq!(renderer.committed(), Series::INITIAL);
    }
}
