// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! System volume control surface.
//!
//! The host application deals in a normalized volume level between 0.0 and
//! 1.0; the platform mixer deals in discrete steps up to a device-specific
//! maximum. [`VolumeControl`] converts between the two with plain linear
//! scaling. The mixer itself is an injected [`Mixer`] capability so the
//! platform backend can be swapped for a fake in tests.

/// The platform mixer capability: stepped volume levels on the music
/// stream.
pub(crate) trait Mixer {
    /// Current volume of the music stream, in mixer steps.
    fn stream_volume(&self) -> u32;

    /// Maximum volume of the music stream, in mixer steps.
    fn max_volume(&self) -> u32;

    /// Sets the music stream volume, in mixer steps.
    fn set_stream_volume(&mut self, steps: u32);
}

/// Normalized get/set over an injected mixer.
pub(crate) struct VolumeControl<M> {
    mixer: M,
}

impl<M: Mixer> VolumeControl<M> {
    pub(crate) fn new(mixer: M) -> Self {
        Self { mixer }
    }

    /// Current volume normalized to 0.0 - 1.0.
    ///
    /// A mixer reporting a zero maximum reads as silent.
    pub(crate) fn current(&self) -> f64 {
        let max = self.mixer.max_volume();
        if max == 0 {
            return 0.0;
        }
        f64::from(self.mixer.stream_volume()) / f64::from(max)
    }

    /// Sets the volume from a normalized level, clamped to 0.0 - 1.0 and
    /// scaled to mixer steps (truncating, so a level just below a step
    /// boundary lands on the step below it).
    pub(crate) fn set(&mut self, level: f64) {
        let clamped = level.clamp(0.0, 1.0);
        let steps = (clamped * f64::from(self.mixer.max_volume())) as u32;
        self.mixer.set_stream_volume(steps);
    }
}

/// In-process mixer used when no platform backend is injected.
///
/// Fifteen steps, matching the stream granularity of the mobile platforms
/// this bridge fronts.
pub(crate) struct SoftMixer {
    steps: u32,
    max: u32,
}

impl SoftMixer {
    const DEFAULT_MAX: u32 = 15;

    pub(crate) fn new() -> Self {
        Self {
            steps: Self::DEFAULT_MAX,
            max: Self::DEFAULT_MAX,
        }
    }
}

impl Mixer for SoftMixer {
    fn stream_volume(&self) -> u32 {
        self.steps
    }

    fn max_volume(&self) -> u32 {
        self.max
    }

    fn set_stream_volume(&mut self, steps: u32) {
        self.steps = steps.min(self.max);
    }
}
