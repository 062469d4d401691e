mod roller;

pub use roller::Roller;

/// A roller seeded from the operating system.
pub fn default_roller() -> rand::rngs::ThreadRng {
    rand::thread_rng()
}
