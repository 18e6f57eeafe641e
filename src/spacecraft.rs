use std::{cell::Cell, rc::Rc};

use tracing::{info, warn};

use crate::{
    actor::Actor,
    config::{ControlSettings, Playback, Settings},
    geometry::{EulerAngles, Quaternion, RotationMatrix, Transform, Vec3},
    input::{Control, Input},
    interpolator::{PoseInterpolator, Transformable},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub position: Vec3,
    pub angles: EulerAngles,
}

/// Player controlled object. Two captures record a pair of keyframes and replay the
/// motion between them through a [`PoseInterpolator`].
pub struct Spacecraft {
    transform: Transform,
    interpolator: PoseInterpolator,
    euler_angles: EulerAngles,
    controls: Vec<Control>,
    first_keyframe: Option<Keyframe>,
    destination: EulerAngles,
    landed: Rc<Cell<bool>>,
    settings: ControlSettings,
    speed: f32,
}

impl Spacecraft {
    pub fn new(transform: Transform, settings: &Settings) -> Self {
        let mut interpolator = PoseInterpolator::with_settings(&settings.interpolation);
        let landed = Rc::new(Cell::new(false));
        let flag = landed.clone();
        interpolator.set_completion_listener(move || flag.set(true));
        Self {
            transform,
            interpolator,
            euler_angles: EulerAngles::default(),
            controls: Vec::new(),
            first_keyframe: None,
            destination: EulerAngles::default(),
            landed,
            settings: settings.controls,
            speed: settings.interpolation.speed,
        }
    }

    pub fn euler_angles(&self) -> EulerAngles {
        self.euler_angles
    }

    pub fn set_euler_angles(&mut self, angles: EulerAngles) {
        self.euler_angles = angles;
    }

    pub fn is_interpolating(&self) -> bool {
        self.interpolator.is_lerping()
    }

    pub fn interpolator(&self) -> &PoseInterpolator {
        &self.interpolator
    }

    /// True once the first keyframe is recorded and the second is still expected.
    pub fn awaiting_second_keyframe(&self) -> bool {
        self.first_keyframe.is_some()
    }

    /// Takes the controls of this frame. A capture is handled right away, held controls
    /// are applied on the next idle tick.
    pub fn handle_input(&mut self, input: &Input) {
        self.controls = input.active_controls();
        if self.controls.contains(&Control::Capture) {
            self.capture_keyframe();
        }
    }

    pub fn capture_keyframe(&mut self) {
        if self.interpolator.is_lerping() {
            warn!("keyframe capture ignored while interpolating");
            return;
        }
        let current = Keyframe {
            position: self.transform.translation,
            angles: self.euler_angles,
        };
        let Some(first) = self.first_keyframe.take() else {
            info!(position = ?current.position, angles = ?current.angles, "first keyframe captured");
            self.first_keyframe = Some(current);
            return;
        };
        info!(position = ?current.position, angles = ?current.angles, "second keyframe captured");
        let (from, to) = match self.settings.playback {
            Playback::Rewind => (current, first),
            Playback::Forward => (first, current),
        };
        self.destination = to.angles;
        self.interpolator.interpolate(
            Quaternion::from(from.angles),
            Quaternion::from(to.angles),
            from.position,
            to.position,
            self.speed,
        );
    }

    /// Orientation handed to the render step: the interpolated one during an episode,
    /// the Euler angles otherwise.
    pub fn orientation_matrix(&self) -> RotationMatrix {
        if self.interpolator.is_lerping() {
            self.interpolator.rotation_matrix()
        } else {
            self.euler_angles.to_quaternion().rotation_matrix()
        }
    }

    pub fn model_matrix(&self) -> [[f32; 4]; 4] {
        self.transform.model_matrix(&self.orientation_matrix())
    }

    pub fn hud_lines(&self) -> [String; 3] {
        let EulerAngles { alpha, beta, gamma } = self.euler_angles;
        [
            format!("alpha: {alpha:.6}"),
            format!("beta:  {beta:.6}"),
            format!("gamma: {gamma:.6}"),
        ]
    }

    fn apply_controls(&mut self) {
        let angle_step = self.settings.angle_step;
        let controls = std::mem::take(&mut self.controls);
        for &control in &controls {
            let forward = self
                .euler_angles
                .to_quaternion()
                .rotation_matrix()
                .transform_vector(Vec3::new(0.0, 0.0, 1.0))
                * self.settings.move_step;
            match control {
                Control::Forward => self.transform.translation += forward,
                Control::Backward => self.transform.translation -= forward,
                Control::RollUp => self.turn(EulerAngles::new(angle_step, 0.0, 0.0)),
                Control::RollDown => self.turn(EulerAngles::new(-angle_step, 0.0, 0.0)),
                Control::YawUp => self.turn(EulerAngles::new(0.0, angle_step, 0.0)),
                Control::YawDown => self.turn(EulerAngles::new(0.0, -angle_step, 0.0)),
                Control::PitchUp => self.turn(EulerAngles::new(0.0, 0.0, angle_step)),
                Control::PitchDown => self.turn(EulerAngles::new(0.0, 0.0, -angle_step)),
                Control::Capture => {}
            }
        }
        self.controls = controls;
    }

    fn turn(&mut self, delta: EulerAngles) {
        self.euler_angles = self.euler_angles.wrapped_add(delta);
    }
}

impl Transformable for Spacecraft {
    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }
}

impl Actor for Spacecraft {
    fn tick(&mut self, delta_time: f32) {
        self.interpolator.tick(delta_time, &mut self.transform);
        if self.landed.replace(false) {
            self.euler_angles = self.destination;
            info!(angles = ?self.euler_angles, "spacecraft reached keyframe");
        }
        if !self.interpolator.is_lerping() {
            self.apply_controls();
        }
    }
}
