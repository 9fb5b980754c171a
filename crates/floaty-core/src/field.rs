use glam::Vec2;
use rand::prelude::*;

use crate::config::{FloatyItem, ViewportClass};
use crate::constants::{
    DRIFT_MAX, HOVER_COLOR_CHANNEL_MIN, HOVER_OPACITY, HOVER_SCALE_TARGET, IDLE_OPACITY,
    IDLE_ROTATION_EASE_RATE, OPACITY_EASE_RATE, POINTER_AWAY, REDUCED_MOTION_SCALE,
    ROTATION_DRIFT_MAX, SCALE_EASE_RATE, SPAWN_ATTEMPTS, SPAWN_MARGIN, UPRIGHT_EASE_RATE,
};
use crate::floaty::{Floaty, HoverSession};

#[inline]
fn ease_toward(value: f32, target: f32, rate: f32) -> f32 {
    value + (target - value) * rate
}

// Uniform draw within [lo, hi); midpoint when the span is degenerate
// (entity larger than the viewport on that axis).
#[inline]
fn rand_span(rng: &mut StdRng, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        (lo + hi) * 0.5
    }
}

#[inline]
fn clamp_span(value: f32, lo: f32, hi: f32) -> f32 {
    if hi < lo {
        (lo + hi) * 0.5
    } else {
        value.clamp(lo, hi)
    }
}

fn random_hover_color(rng: &mut StdRng) -> [u8; 3] {
    let mut channel = || rng.gen_range(HOVER_COLOR_CHANNEL_MIN..=u8::MAX);
    [channel(), channel(), channel()]
}

/// Process-owned store of all floaties plus the inputs the simulation reads:
/// viewport size, pointer position, and the seeded random source every spawn,
/// velocity, and color draw goes through.
///
/// All entity mutation happens inside [`FloatyField::tick`],
/// [`FloatyField::resize`], and [`FloatyField::spawn`]; render and input
/// adapters only read. Both `tick` and `resize` are total over the state.
pub struct FloatyField {
    pub floaties: Vec<Floaty>,
    width: f32,
    height: f32,
    pointer: Vec2,
    rng: StdRng,
    reduced_motion: bool,
}

impl FloatyField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            floaties: Vec::new(),
            width,
            height,
            pointer: POINTER_AWAY,
            rng: StdRng::seed_from_u64(seed),
            reduced_motion: false,
        }
    }

    pub fn len(&self) -> usize {
        self.floaties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floaties.is_empty()
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer = position;
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = POINTER_AWAY;
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    pub fn any_hovered(&self) -> bool {
        self.floaties.iter().any(Floaty::is_hovered)
    }

    /// Url of the first entity whose hit box contains `point`, if any.
    /// Activation requests navigation; it never mutates entity state, and
    /// actually opening the link is the host's capability.
    pub fn activate_at(&self, point: Vec2) -> Option<&str> {
        self.floaties
            .iter()
            .find(|f| f.contains(point))
            .map(|f| f.url.as_str())
    }

    /// Place a new entity for `item` and return its index in the store.
    ///
    /// Nominal width is drawn from the viewport-class range; the center is
    /// rejection-sampled so the bounding box lies inside the viewport and the
    /// center keeps `SPAWN_MARGIN` clearance beyond touching from everything
    /// already placed. After `SPAWN_ATTEMPTS` failures the last candidate is
    /// accepted, overlap and all.
    pub fn spawn(&mut self, item: FloatyItem, natural_width: f32, natural_height: f32) -> usize {
        let (size_min, size_max) = ViewportClass::of(self.width).size_range();
        let size = self.rng.gen_range(size_min..size_max);
        let aspect = if natural_width > 0.0 {
            natural_height / natural_width
        } else {
            1.0
        };
        let position = self.place(size, size * 0.5, size * aspect * 0.5);
        let velocity = Vec2::new(
            self.rng.gen_range(-DRIFT_MAX..DRIFT_MAX),
            self.rng.gen_range(-DRIFT_MAX..DRIFT_MAX),
        );
        let rotation = self.rng.gen_range(0.0..std::f32::consts::TAU);
        let rotation_drift = self.rng.gen_range(-ROTATION_DRIFT_MAX..ROTATION_DRIFT_MAX);
        self.floaties.push(Floaty {
            position,
            velocity,
            size,
            aspect,
            rotation,
            target_rotation: rotation,
            rotation_drift,
            hover_scale: 1.0,
            opacity: IDLE_OPACITY,
            hover: None,
            url: item.url,
            hover_text: item.hover_text,
        });
        self.floaties.len() - 1
    }

    fn place(&mut self, size: f32, half_w: f32, half_h: f32) -> Vec2 {
        let mut candidate = Vec2::new(self.width * 0.5, self.height * 0.5);
        for _ in 0..SPAWN_ATTEMPTS {
            candidate = Vec2::new(
                rand_span(&mut self.rng, half_w, self.width - half_w),
                rand_span(&mut self.rng, half_h, self.height - half_h),
            );
            if self.clear_of_existing(candidate, size) {
                return candidate;
            }
        }
        log::debug!("[spawn] no clear spot after {SPAWN_ATTEMPTS} attempts, accepting overlap");
        candidate
    }

    fn clear_of_existing(&self, center: Vec2, size: f32) -> bool {
        self.floaties.iter().all(|other| {
            center.distance(other.position) >= size * 0.5 + other.size * 0.5 + SPAWN_MARGIN
        })
    }

    /// Advance the simulation one frame. The step order is load-bearing:
    /// hover easing may zero a velocity the separation pass then swaps, and
    /// the bounce check reads positions written by integration.
    pub fn tick(&mut self) {
        if self.floaties.is_empty() {
            return;
        }
        self.update_hover();
        self.separate_pairs();
        self.integrate();
        self.bounce();
    }

    fn update_hover(&mut self) {
        let pointer = self.pointer;
        let rng = &mut self.rng;
        for f in &mut self.floaties {
            if f.contains(pointer) {
                if f.hover.is_none() {
                    f.hover = Some(HoverSession {
                        captured_velocity: f.velocity,
                        color: random_hover_color(rng),
                    });
                    f.velocity = Vec2::ZERO;
                }
                f.hover_scale = ease_toward(f.hover_scale, HOVER_SCALE_TARGET, SCALE_EASE_RATE);
                f.opacity = ease_toward(f.opacity, HOVER_OPACITY, OPACITY_EASE_RATE);
                f.rotation = ease_toward(f.rotation, 0.0, UPRIGHT_EASE_RATE);
            } else {
                if let Some(session) = f.hover.take() {
                    f.velocity = session.captured_velocity;
                }
                f.hover_scale = ease_toward(f.hover_scale, 1.0, SCALE_EASE_RATE);
                f.opacity = ease_toward(f.opacity, IDLE_OPACITY, OPACITY_EASE_RATE);
                f.rotation = ease_toward(f.rotation, f.target_rotation, IDLE_ROTATION_EASE_RATE);
                f.target_rotation += f.rotation_drift;
            }
        }
    }

    // Overlapping pairs are pushed apart along the connecting normal by half
    // the overlap each and exchange velocity vectors. The swap is the
    // behavior, not an approximation of impulse physics.
    fn separate_pairs(&mut self) {
        let n = self.floaties.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (head, tail) = self.floaties.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];
                let delta = b.position - a.position;
                let dist = delta.length();
                let min_dist = a.size * 0.5 + b.size * 0.5;
                // coincident centers have no separation normal; skip
                if dist <= 0.0 || dist >= min_dist {
                    continue;
                }
                let push = delta / dist * ((min_dist - dist) * 0.5);
                a.position -= push;
                b.position += push;
                std::mem::swap(&mut a.velocity, &mut b.velocity);
            }
        }
    }

    fn integrate(&mut self) {
        let speed_scale = if self.reduced_motion {
            REDUCED_MOTION_SCALE
        } else {
            1.0
        };
        for f in &mut self.floaties {
            f.position += f.velocity * speed_scale;
        }
    }

    // No same-tick position clamp: the flipped velocity re-enters naturally,
    // since entity size dwarfs per-tick displacement.
    fn bounce(&mut self) {
        for f in &mut self.floaties {
            let (half_w, half_h) = (f.half_width(), f.half_height());
            if f.position.x - half_w < 0.0 || f.position.x + half_w > self.width {
                f.velocity.x = -f.velocity.x;
            }
            if f.position.y - half_h < 0.0 || f.position.y + half_h > self.height {
                f.velocity.y = -f.velocity.y;
            }
        }
    }

    /// Adopt a new viewport size: shrink entities past the class budget and
    /// clamp every center back into bounds. Total and idempotent; a repeat
    /// call with the same dimensions changes nothing.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.width = width;
        self.height = height;
        let (_, size_max) = ViewportClass::of(width).size_range();
        for f in &mut self.floaties {
            f.size = f.size.min(size_max);
            f.position.x = clamp_span(f.position.x, f.half_width(), width - f.half_width());
            f.position.y = clamp_span(f.position.y, f.half_height(), height - f.half_height());
        }
    }
}
