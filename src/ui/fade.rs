use iced::time::Instant;
use std::time::Duration;

/// Linear opacity animation for the main image.
///
/// The viewer only decides the target (visible or hidden); this type
/// moves the rendered opacity towards it on every animation tick.
#[derive(Debug, Clone)]
pub struct Fade {
    duration: Duration,
    from: f32,
    to: f32,
    current: f32,
    started: Option<Instant>,
}

impl Fade {
    pub fn new(duration: Duration, initial: f32) -> Self {
        Self {
            duration,
            from: initial,
            to: initial,
            current: initial,
            started: None,
        }
    }

    /// Start animating from the current opacity towards `to`
    pub fn animate_to(&mut self, to: f32, now: Instant) {
        if (to - self.to).abs() < f32::EPSILON && (to - self.current).abs() < f32::EPSILON {
            return;
        }

        self.from = self.current;
        self.to = to;

        if self.duration.is_zero() {
            self.current = to;
            self.started = None;
        } else {
            self.started = Some(now);
        }
    }

    /// Advance the animation to `now` and return the opacity to render
    pub fn tick(&mut self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return self.current;
        };

        let elapsed = now.saturating_duration_since(started);
        let progress = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);

        self.current = self.from + (self.to - self.from) * progress;

        if progress >= 1.0 {
            self.current = self.to;
            self.started = None;
        }

        self.current
    }

    pub fn opacity(&self) -> f32 {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.started.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_300: Duration = Duration::from_millis(300);

    #[test]
    fn test_fades_out_linearly() {
        let start = Instant::now();
        let mut fade = Fade::new(MS_300, 1.0);

        fade.animate_to(0.0, start);
        assert!(fade.is_animating());

        let half = fade.tick(start + Duration::from_millis(150));
        assert!((half - 0.5).abs() < 0.01);

        assert_eq!(fade.tick(start + Duration::from_millis(400)), 0.0);
        assert!(!fade.is_animating());
    }

    #[test]
    fn test_reversal_starts_from_current_opacity() {
        let start = Instant::now();
        let mut fade = Fade::new(MS_300, 1.0);

        fade.animate_to(0.0, start);
        fade.tick(start + Duration::from_millis(150));

        let turn = start + Duration::from_millis(150);
        fade.animate_to(1.0, turn);
        let value = fade.tick(turn);
        assert!((value - 0.5).abs() < 0.01);

        assert_eq!(fade.tick(turn + MS_300), 1.0);
    }

    #[test]
    fn test_same_target_is_noop() {
        let mut fade = Fade::new(MS_300, 1.0);
        fade.animate_to(1.0, Instant::now());
        assert!(!fade.is_animating());
        assert_eq!(fade.opacity(), 1.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut fade = Fade::new(Duration::ZERO, 0.0);
        fade.animate_to(1.0, Instant::now());
        assert!(!fade.is_animating());
        assert_eq!(fade.opacity(), 1.0);
    }
}
