use glam::{Vec3, Vec4};

/// Radiance accumulated along a light path.
///
/// When light passes are disabled, only the combined emission is tracked and
/// `passes` stays `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathRadiance {
    pub emission: Vec3,
    pub passes: Option<LightPasses>,
}

impl PathRadiance {
    pub fn new(use_light_pass: bool) -> Self {
        let mut this = Self::default();

        this.reset(use_light_pass);
        this
    }

    pub fn reset(&mut self, use_light_pass: bool) {
        self.emission = Vec3::ZERO;

        self.passes = if use_light_pass {
            Some(LightPasses::default())
        } else {
            None
        };
    }

    pub fn uses_light_pass(&self) -> bool {
        self.passes.is_some()
    }

    pub fn is_zero(&self) -> bool {
        self.emission == Vec3::ZERO
            && self.passes.map_or(true, |passes| passes.is_zero())
    }
}

/// Per-component breakdown of the radiance, written into separate film
/// passes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LightPasses {
    pub background: Vec3,
    pub ao: Vec3,
    pub direct_emission: Vec3,
    pub indirect: Vec3,
    pub color: BsdfChannels,
    pub direct: BsdfChannels,
    pub indirect_channels: BsdfChannels,
    pub path: BsdfChannels,
    pub shadow: Vec4,
    pub mist: f32,
}

impl LightPasses {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BsdfChannels {
    pub diffuse: Vec3,
    pub glossy: Vec3,
    pub transmission: Vec3,
    pub subsurface: Vec3,
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn reset() {
        let mut target = PathRadiance::new(true);

        target.emission = vec3(1.0, 2.0, 3.0);

        if let Some(passes) = &mut target.passes {
            passes.direct.diffuse = Vec3::ONE;
            passes.mist = 0.5;
        }

        assert!(!target.is_zero());

        target.reset(true);

        assert!(target.is_zero());
        assert!(target.uses_light_pass());

        target.emission = Vec3::ONE;
        target.reset(false);

        assert!(target.is_zero());
        assert!(!target.uses_light_pass());
    }
}
