//! Frame scheduling and animation rendering

use crate::core_types::{frame_count, ParameterSet, Seconds, ValidationError, MAX_FRAMES};
use crate::grid::{linspace, LayeredSurface};
use crate::solver::{FourierLayerSynthesizer, SynthesisStrategy};
use rayon::prelude::*;
use tracing::{debug, info};

/// Evenly spaced frame times covering `[0, duration]`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSchedule {
    times: Vec<Seconds>,
}

impl FrameSchedule {
    /// ⌊fps·duration⌋ frames from 0 to `duration`, both ends included
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooManyFrames`] past [`MAX_FRAMES`].
    pub fn new(fps: u32, duration: Seconds) -> Result<Self, ValidationError> {
        Ok(Self::with_count(frame_count(fps, duration)?, duration))
    }

    /// Schedule for the animation settings of `params`
    #[must_use]
    pub fn from_parameters(params: &ParameterSet) -> Self {
        let animation = params.animation();
        // A validated set never exceeds the cap
        let count = frame_count(animation.fps, animation.duration).unwrap_or(MAX_FRAMES);
        Self::with_count(count, animation.duration)
    }

    fn with_count(count: usize, duration: Seconds) -> Self {
        let times = linspace(0.0, *duration, count)
            .into_iter()
            .map(Seconds::new)
            .collect();
        Self { times }
    }

    /// Number of frames
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True when no frames are scheduled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Frame times in order
    #[must_use]
    pub fn times(&self) -> &[Seconds] {
        &self.times
    }
}

/// One rendered animation frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Position in the schedule
    pub index: usize,
    /// Time sample
    pub time: Seconds,
    /// Synthesized surface at `time`
    pub surface: LayeredSurface,
}

/// Synthesize every scheduled frame
///
/// Frames are independent and rendered in parallel; the result is ordered by
/// frame index.
#[must_use]
pub fn render_animation<S: SynthesisStrategy>(
    synthesizer: &FourierLayerSynthesizer<S>,
    params: &ParameterSet,
    schedule: &FrameSchedule,
) -> Vec<Frame> {
    info!(
        "Rendering {} frames with '{}' strategy",
        schedule.len(),
        synthesizer.strategy().name()
    );

    schedule
        .times()
        .par_iter()
        .enumerate()
        .map(|(index, &time)| {
            debug!("Frame {} at t={:.3}s", index, *time);
            Frame {
                index,
                time,
                surface: synthesizer.synthesize(params, time),
            }
        })
        .collect()
}
