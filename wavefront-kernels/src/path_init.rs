//! First kernel of the split pipeline: gives each idle slot a new path.
//!
//! Slots that find no work left become [`RayState::Inactive`], slots whose
//! primary ray turns out to be degenerate write a zero contribution and
//! become [`RayState::ToRegenerate`]; everything else ends up
//! [`RayState::Active`], ready to be traced.

use wavefront_gpu::prelude::*;

#[allow(clippy::too_many_arguments)]
pub fn main(
    ray_index: u32,
    params: &PathInitPassParams,
    tile: &WorkTile,
    seeder: &impl PathSeeder,
    work_pools: WorkPoolsView,
    rng_state: &[u32],
    film: FilmView,
    slot: &mut RaySlot,
) {
    // Whatever this slot held before is stale at this point, so there's no
    // transition to validate
    slot.state = RayState::Active;

    let Some(work_index) = work_pools.claim(ray_index, params.total_work_size)
    else {
        slot.state = RayState::Inactive;
        return;
    };

    let work = tile.work_item(work_index);
    let pixel_idx = tile.pixel_idx(work.x, work.y);
    let buffer_offset = pixel_idx * params.pass_stride;

    slot.work = work;
    slot.buffer_offset = buffer_offset;

    let sample = PrimarySample::seed(
        seeder,
        rng_state[pixel_idx as usize],
        work.sample,
        work.x,
        work.y,
    );

    match sample {
        PrimarySample::Valid { rng_hash, ray } => {
            slot.ray = ray;
            slot.throughput = Vec3::ONE;
            slot.radiance.reset(params.use_light_pass());

            slot.path =
                PathState::new(rng_hash, work.sample, params.num_samples, &ray);

            if let Some(subsurface) = &mut slot.subsurface {
                subsurface.reset();
            }
        }

        PrimarySample::Degenerate { ray } => {
            slot.ray = ray;
            film.write_pass_float4(buffer_offset, Vec4::ZERO);
            slot.state = RayState::ToRegenerate;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicU32;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    /// Seeder that returns degenerate rays for chosen pixels.
    struct TestSeeder {
        degenerate_x: Option<u32>,
    }

    impl PathSeeder for TestSeeder {
        fn seed(
            &self,
            rng_state: u32,
            sample: u32,
            x: u32,
            y: u32,
        ) -> (u32, Ray) {
            let rng_hash = hash_uint2(x, y) ^ rng_state;
            let origin = vec3(x as f32, y as f32, sample as f32);

            let ray = if Some(x) == self.degenerate_x {
                Ray::degenerate(origin)
            } else {
                Ray::new(origin, Vec3::Z, 100.0)
            };

            (rng_hash, ray)
        }
    }

    struct Harness {
        tile: WorkTile,
        params: PathInitPassParams,
        pools: Vec<AtomicU32>,
        pool_size: u32,
        rng_state: Vec<u32>,
        film: Vec<AtomicU32>,
        slots: Vec<RaySlot>,
    }

    impl Harness {
        fn new(tile: WorkTile, pass_stride: u32, slots: u32) -> Self {
            let pixels = (tile.pixel_idx(tile.x, tile.y)
                + tile.stride * tile.h) as usize;

            Self {
                tile,
                params: PathInitPassParams {
                    seed: 0,
                    total_work_size: tile.total_work_size(),
                    num_samples: tile.num_samples,
                    pass_stride,
                    use_light_pass: 0,
                },
                pools: (0..slots).map(|_| AtomicU32::new(0)).collect(),
                pool_size: 1,
                rng_state: (0..pixels as u32).collect(),
                film: (0..pixels * pass_stride as usize)
                    .map(|_| AtomicU32::new(0))
                    .collect(),
                slots: vec![RaySlot::new(false); slots as usize],
            }
        }

        fn run(&mut self, seeder: &impl PathSeeder) {
            let work_pools = WorkPoolsView::new(
                &self.pools,
                self.pool_size,
                self.slots.len() as u32,
            );

            for (ray_index, slot) in self.slots.iter_mut().enumerate() {
                main(
                    ray_index as u32,
                    &self.params,
                    &self.tile,
                    seeder,
                    work_pools,
                    &self.rng_state,
                    FilmView::new(&self.film),
                    slot,
                );
            }
        }

        fn film(&self) -> FilmView<'_> {
            FilmView::new(&self.film)
        }
    }

    fn tile(w: u32, h: u32, num_samples: u32) -> WorkTile {
        WorkTile {
            w,
            h,
            num_samples,
            stride: w,
            ..Default::default()
        }
    }

    #[test]
    fn two_pixels_three_slots() {
        let mut target = Harness::new(tile(2, 1, 1), 4, 3);

        target.run(&TestSeeder { degenerate_x: None });

        let [a, b, c] = &target.slots[..] else {
            unreachable!();
        };

        assert_eq!(RayState::Active, a.state);
        assert_eq!((0, 0, 0), (a.work.x, a.work.y, a.work.sample));
        assert_eq!(0, a.buffer_offset);

        assert_eq!(RayState::Active, b.state);
        assert_eq!((1, 0, 0), (b.work.x, b.work.y, b.work.sample));
        assert_eq!(4, b.buffer_offset);

        assert_eq!(RayState::Inactive, c.state);
    }

    #[test]
    fn valid_ray() {
        let mut target = Harness::new(tile(2, 2, 1), 4, 4);

        // Dirty the slots, as if they were used before
        for slot in &mut target.slots {
            slot.throughput = vec3(0.1, 0.2, 0.3);
            slot.radiance.emission = Vec3::ONE;
            slot.path.bounce = 7;
        }

        target.run(&TestSeeder { degenerate_x: None });

        for slot in &target.slots {
            assert_eq!(RayState::Active, slot.state);
            assert_eq!(Vec3::ONE, slot.throughput);
            assert!(slot.radiance.is_zero());
            assert!(!slot.radiance.uses_light_pass());
            assert_eq!(0, slot.path.bounce);
            assert!(slot.path.flags.is_empty());
            assert_eq!(slot.work.sample, slot.path.sample);
            assert_eq!(1, slot.path.num_samples);

            assert_eq!(
                hash_uint2(slot.work.x, slot.work.y)
                    ^ target.tile.pixel_idx(slot.work.x, slot.work.y),
                slot.path.rng_hash,
            );

            assert_eq!(
                vec3(slot.work.x as f32, slot.work.y as f32, 0.0),
                slot.ray.origin()
            );
        }
    }

    #[test]
    fn degenerate_ray() {
        let mut target = Harness::new(tile(2, 2, 1), 4, 4);

        target.run(&TestSeeder {
            degenerate_x: Some(1),
        });

        for slot in &target.slots {
            if slot.work.x == 1 {
                assert_eq!(RayState::ToRegenerate, slot.state);
                assert!(slot.ray.is_degenerate());
            } else {
                assert_eq!(RayState::Active, slot.state);
                assert_eq!(Vec3::ONE, slot.throughput);
            }

            assert_eq!(
                Vec4::ZERO,
                target.film().get_float4(slot.buffer_offset)
            );
        }
    }

    #[test]
    fn degenerate_ray_accumulates_zero() {
        let mut target = Harness::new(tile(1, 1, 1), 4, 1);

        target.film().write_pass_float4(0, vec4(1.0, 2.0, 3.0, 4.0));
        target.run(&TestSeeder {
            degenerate_x: Some(0),
        });

        assert_eq!(RayState::ToRegenerate, target.slots[0].state);
        assert_eq!(vec4(1.0, 2.0, 3.0, 4.0), target.film().get_float4(0));
    }

    #[test]
    fn light_pass() {
        let mut target = Harness::new(tile(2, 1, 1), 4, 2);

        target.params.use_light_pass = 1;
        target.run(&TestSeeder { degenerate_x: None });

        for slot in &target.slots {
            assert!(slot.radiance.uses_light_pass());
            assert!(slot.radiance.is_zero());
        }
    }

    #[test]
    fn subsurface() {
        let mut target = Harness::new(tile(2, 1, 1), 4, 3);

        for slot in &mut target.slots {
            *slot = RaySlot::new(true);

            if let Some(subsurface) = &mut slot.subsurface {
                subsurface.push(Ray::default(), Vec3::ONE);
            }
        }

        target.run(&TestSeeder { degenerate_x: None });

        assert!(target.slots[0].subsurface.is_some_and(|ss| ss.is_empty()));
        assert!(target.slots[1].subsurface.is_some_and(|ss| ss.is_empty()));

        // Inactive slots aren't touched
        assert!(target.slots[2].subsurface.is_some_and(|ss| ss.len() == 1));
    }

    #[test]
    fn buffer_offsets() {
        let mut rng = StdRng::seed_from_u64(4321);

        for _ in 0..16 {
            let w = rng.gen_range(1..8);
            let h = rng.gen_range(1..8);
            let num_samples = rng.gen_range(1..4);
            let pass_stride = rng.gen_range(4..12);

            let tile = WorkTile {
                x: rng.gen_range(0..32),
                y: rng.gen_range(0..32),
                w,
                h,
                start_sample: 0,
                num_samples,
                offset: 0,
                stride: w + rng.gen_range(0..4),
            };

            // Place the tile at the beginning of the buffers
            let tile = WorkTile {
                offset: -((tile.x + tile.y * tile.stride) as i32),
                ..tile
            };

            let slots = w * h * num_samples + 3;
            let mut target = Harness::new(tile, pass_stride, slots);

            target.run(&TestSeeder { degenerate_x: None });

            let mut seen = Vec::new();

            for slot in &target.slots[..(slots - 3) as usize] {
                let expected = (tile.offset
                    + slot.work.x as i32
                    + (slot.work.y * tile.stride) as i32)
                    as u32
                    * pass_stride;

                assert_eq!(RayState::Active, slot.state);
                assert_eq!(expected, slot.buffer_offset);

                seen.push((slot.work.x, slot.work.y, slot.work.sample));
            }

            for slot in &target.slots[(slots - 3) as usize..] {
                assert_eq!(RayState::Inactive, slot.state);
            }

            seen.sort();
            seen.dedup();

            assert_eq!((w * h * num_samples) as usize, seen.len());
        }
    }
}
