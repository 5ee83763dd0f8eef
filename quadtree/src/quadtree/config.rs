pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;
/// `eps = factor * diagonal`, compared against squared distances.
pub const DEFAULT_COINCIDENCE_FACTOR: f32 = 1e-6;
pub const DEFAULT_SOFTENING: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct Config {
    /// Node slots allocated up front, root included.
    pub initial_capacity: usize,
    /// Scales the coincidence threshold with the root box diagonal.
    pub coincidence_factor: f32,
    /// Added to every squared separation during force evaluation.
    pub softening: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            coincidence_factor: DEFAULT_COINCIDENCE_FACTOR,
            softening: DEFAULT_SOFTENING,
        }
    }
}
