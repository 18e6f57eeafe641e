use tracing::{debug, trace};

use crate::{
    config::{InterpolationSettings, ProgressStep},
    geometry::{lerp, slerp, Quaternion, RotationMatrix, Transform, Vec3},
};

pub const DEFAULT_SPEED: f32 = 1.0;

/// Anything whose pose can be read and replaced by an interpolator.
pub trait Transformable {
    fn transform(&self) -> Transform;
    fn set_transform(&mut self, transform: Transform);
}

impl Transformable for Transform {
    fn transform(&self) -> Transform {
        *self
    }

    fn set_transform(&mut self, transform: Transform) {
        *self = transform;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Progress {
    Idle,
    Active(f32),
}

#[derive(Clone, Copy, Debug)]
struct Episode {
    rot_start: Quaternion,
    rot_end: Quaternion,
    start: Vec3,
    end: Vec3,
    speed: f32,
}

/// Blends a pose between two keyframes, one step per tick.
///
/// Position is interpolated linearly and orientation with [`slerp`]. Only the translation
/// of the controlled transform is written; the interpolated orientation is exposed through
/// [`PoseInterpolator::rotation_matrix`].
pub struct PoseInterpolator {
    progress: Progress,
    episode: Episode,
    rotation: Quaternion,
    rotation_matrix: RotationMatrix,
    step: ProgressStep,
    normalize_rotation: bool,
    listener: Option<Box<dyn FnMut()>>,
}

impl Default for PoseInterpolator {
    fn default() -> Self {
        Self::new()
    }
}

impl PoseInterpolator {
    pub fn new() -> Self {
        Self::with_settings(&InterpolationSettings::default())
    }

    pub fn with_settings(settings: &InterpolationSettings) -> Self {
        Self {
            progress: Progress::Idle,
            episode: Episode {
                rot_start: Quaternion::IDENTITY,
                rot_end: Quaternion::IDENTITY,
                start: Vec3::ZERO,
                end: Vec3::ZERO,
                speed: DEFAULT_SPEED,
            },
            rotation: Quaternion::IDENTITY,
            rotation_matrix: RotationMatrix::IDENTITY,
            step: settings.step,
            normalize_rotation: settings.normalize_rotation,
            listener: None,
        }
    }

    /// Starts a new episode, silently abandoning any episode in progress.
    pub fn interpolate(
        &mut self,
        rot_start: Quaternion,
        rot_end: Quaternion,
        start: Vec3,
        end: Vec3,
        speed: f32,
    ) {
        if let Progress::Active(t) = self.progress {
            debug!(progress = t, "restarting interpolation before completion");
        }
        self.episode = Episode {
            rot_start,
            rot_end,
            start,
            end,
            speed,
        };
        self.rotation = rot_start;
        self.rotation_matrix = RotationMatrix::IDENTITY;
        self.progress = Progress::Active(0.0);
        debug!(?start, ?end, speed, "interpolation started");
    }

    /// Advances the active episode and writes the interpolated translation into `target`.
    /// Does nothing while idle.
    pub fn tick<T>(&mut self, delta_time: f32, target: &mut T)
    where
        T: Transformable + ?Sized,
    {
        let Progress::Active(t) = self.progress else {
            return;
        };
        let episode = self.episode;
        let t = (t + self.step.advance(delta_time, episode.speed)).clamp(0.0, 1.0);

        let translation = lerp(episode.start, episode.end, t);
        let rotation = slerp(episode.rot_start, episode.rot_end, t);
        self.rotation = if self.normalize_rotation {
            rotation.normalize()
        } else {
            rotation
        };
        self.rotation_matrix = RotationMatrix::from(self.rotation);

        let mut transform = target.transform();
        transform.translation = translation;
        target.set_transform(transform);
        trace!(progress = t, ?translation, "interpolation tick");

        if t == 1.0 {
            self.progress = Progress::Idle;
            debug!(?translation, "interpolation finished");
            if let Some(listener) = self.listener.as_mut() {
                listener();
            }
        } else {
            self.progress = Progress::Active(t);
        }
    }

    pub fn is_lerping(&self) -> bool {
        self.progress != Progress::Idle
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Replaces the completion listener. Only one listener is held at a time.
    pub fn set_completion_listener(&mut self, listener: impl FnMut() + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_completion_listener(&mut self) {
        self.listener = None;
    }

    /// Orientation computed by the latest tick, identity until the first tick of an episode.
    pub fn rotation_matrix(&self) -> RotationMatrix {
        self.rotation_matrix
    }

    pub fn rotation(&self) -> Quaternion {
        self.rotation
    }
}
