use crate::interpolator::Transformable;

/// An object of the scene, ticked once per frame by whoever owns the scene.
pub trait Actor: Transformable {
    fn tick(&mut self, delta_time: f32);
}
