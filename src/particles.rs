//! Drifting particle field drawn behind the panels.
//!
//! Purely decorative: the field never looks at ledger data. Each tick moves
//! every particle by its velocity; a particle that leaves the field is
//! re-seeded somewhere inside it with fresh attributes.

/// Number of particles in the default field.
pub const PARTICLE_COUNT: usize = 60;

/// One particle, in terminal-cell coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// In `[1, 3)`.
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    /// In `[0, 0.5)`.
    pub alpha: f64,
}

impl Particle {
    fn seeded(rng: &mut XorShift, width: f64, height: f64) -> Self {
        Self {
            x: rng.next_f64() * width,
            y: rng.next_f64() * height,
            size: rng.next_f64() * 2.0 + 1.0,
            speed_x: (rng.next_f64() - 0.5) * 0.3,
            speed_y: (rng.next_f64() - 0.5) * 0.3,
            alpha: rng.next_f64() * 0.5,
        }
    }

    fn is_outside(&self, width: f64, height: f64) -> bool {
        self.x < 0.0 || self.x > width || self.y < 0.0 || self.y > height
    }
}

/// A self-resetting field of particles.
#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    rng: XorShift,
}

impl ParticleField {
    /// Creates `count` particles spread over a `width` × `height` field.
    #[must_use]
    pub fn new(count: usize, width: f64, height: f64, seed: u64) -> Self {
        let mut rng = XorShift::new(seed);
        let (width, height) = (width.max(0.0), height.max(0.0));
        let particles = (0..count)
            .map(|_| Particle::seeded(&mut rng, width, height))
            .collect();

        Self {
            width,
            height,
            particles,
            rng,
        }
    }

    /// Adopts new bounds. Particles now outside are re-seeded on the next tick.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Advances every particle by one frame.
    pub fn tick(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.x += particle.speed_x;
            particle.y += particle.speed_y;
            if particle.is_outside(width, height) {
                *particle = Particle::seeded(&mut self.rng, width, height);
            }
        }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

// ============================================================================
// RNG
// ============================================================================

/// xorshift64* generator; plenty for decoration and reproducible in tests.
#[derive(Debug, Clone)]
struct XorShift(u64);

impl XorShift {
    fn new(seed: u64) -> Self {
        // zero is a fixed point of xorshift
        Self(if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed })
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

// ============================================================================
// Tests
// ============================================================================
