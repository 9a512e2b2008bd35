// Copyright 2026 the Slidekit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable constants for a [`Carousel`](crate::carousel::Carousel).
//!
//! The two page layouts that ship with the site behave identically apart from
//! the vertical swipe tolerance and the cooldown length, so both are exposed
//! as presets over one [`CarouselConfig`] rather than as separate components.

use core::time::Duration;

use crate::viewport::COMPACT_MAX_WIDTH;

/// Swipe recognition thresholds, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Minimum horizontal travel before a touch counts as a swipe.
    pub threshold: f64,
    /// Vertical travel at or beyond which the gesture is treated as a scroll.
    pub vertical_limit: f64,
}

impl SwipeConfig {
    /// Strict variant: vertical travel must stay under the swipe threshold.
    pub const STRICT: Self = Self {
        threshold: 50.0,
        vertical_limit: 50.0,
    };

    /// Lenient variant: tolerates up to 100px of vertical drift.
    pub const LENIENT: Self = Self {
        threshold: 50.0,
        vertical_limit: 100.0,
    };
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::STRICT
    }
}

/// Configuration for a [`Carousel`](crate::carousel::Carousel).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Widest viewport (inclusive) that still uses the compact presentation.
    pub compact_max_width: f64,
    /// Swipe recognition thresholds.
    pub swipe: SwipeConfig,
    /// How long an accepted command blocks further commands. Should match
    /// the CSS transition on the sliding container.
    pub cooldown: Duration,
    /// Auto-advance interval. `None` disables auto-play.
    pub autoplay: Option<Duration>,
    /// Opacity applied to a navigation button at either end of the sequence.
    pub dimmed_opacity: f32,
}

impl CarouselConfig {
    /// Preset for the stills grid: strict swipes, 350ms cooldown.
    #[must_use]
    pub const fn stills() -> Self {
        Self {
            compact_max_width: COMPACT_MAX_WIDTH,
            swipe: SwipeConfig::STRICT,
            cooldown: Duration::from_millis(350),
            autoplay: None,
            dimmed_opacity: 0.6,
        }
    }

    /// Preset for the gallery page: lenient swipes, 400ms cooldown.
    #[must_use]
    pub const fn gallery() -> Self {
        Self {
            compact_max_width: COMPACT_MAX_WIDTH,
            swipe: SwipeConfig::LENIENT,
            cooldown: Duration::from_millis(400),
            autoplay: None,
            dimmed_opacity: 0.6,
        }
    }

    /// Enables auto-play with the given interval.
    #[must_use]
    pub const fn with_autoplay(mut self, interval: Duration) -> Self {
        self.autoplay = Some(interval);
        self
    }

    /// Replaces the cooldown duration.
    #[must_use]
    pub const fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Replaces the swipe thresholds.
    #[must_use]
    pub const fn with_swipe(mut self, swipe: SwipeConfig) -> Self {
        self.swipe = swipe;
        self
    }

    /// Replaces the compact-mode breakpoint.
    #[must_use]
    pub const fn with_compact_max_width(mut self, width: f64) -> Self {
        self.compact_max_width = width;
        self
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::stills()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_only_in_swipe_and_cooldown() {
        let stills = CarouselConfig::stills();
        let gallery = CarouselConfig::gallery();
        assert_eq!(stills.compact_max_width, gallery.compact_max_width);
        assert_eq!(stills.dimmed_opacity, gallery.dimmed_opacity);
        assert_eq!(stills.swipe.vertical_limit, 50.0);
        assert_eq!(gallery.swipe.vertical_limit, 100.0);
        assert_eq!(stills.cooldown, Duration::from_millis(350));
        assert_eq!(gallery.cooldown, Duration::from_millis(400));
    }

    #[test]
    fn builders_override_fields() {
        let cfg = CarouselConfig::default()
            .with_autoplay(Duration::from_secs(5))
            .with_cooldown(Duration::from_millis(200))
            .with_compact_max_width(600.0);
        assert_eq!(cfg.autoplay, Some(Duration::from_secs(5)));
        assert_eq!(cfg.cooldown, Duration::from_millis(200));
        assert_eq!(cfg.compact_max_width, 600.0);
        assert_eq!(cfg.swipe, SwipeConfig::STRICT);
    }
}
