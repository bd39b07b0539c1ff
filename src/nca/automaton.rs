use super::network::{UpdateNetwork, WeightsError};
use super::perception::perceive_cell;
use super::CellGrid;
use crate::config::SimulationConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Independent ChaCha streams per concern, so resetting the grid does not
// depend on how many numbers the network initialisation consumed.
const GRID_STREAM: u64 = 0;
const NETWORK_STREAM: u64 = 1;
const MASK_STREAM: u64 = 2;

fn seeded(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

/// A running neural cellular automaton: grid state, update network and the
/// random stream driving the stochastic update mask.
pub struct Automaton {
    config: SimulationConfig,
    grid: CellGrid,
    next: CellGrid,
    network: UpdateNetwork,
    rng: ChaCha8Rng,
    steps: u64,
    perception: Vec<f32>,
    hidden: Vec<f32>,
    delta: Vec<f32>,
}

impl Automaton {
    /// Seed a grid and draw a fresh update network, both from `config.seed`.
    pub fn new(config: SimulationConfig) -> Self {
        let network = UpdateNetwork::random(
            3 * config.channels,
            config.hidden_channels,
            config.channels.saturating_sub(config.input_channels),
            config.init_std,
            &mut seeded(config.seed, NETWORK_STREAM),
        );
        Self::with_network(config, network)
    }

    fn with_network(config: SimulationConfig, network: UpdateNetwork) -> Self {
        let grid = seed_grid(&config, &mut seeded(config.seed, GRID_STREAM));
        Self {
            next: grid.clone(),
            grid,
            perception: vec![0.0; network.perception_channels],
            hidden: vec![0.0; network.hidden_channels],
            delta: vec![0.0; network.output_channels],
            network,
            rng: seeded(config.seed, MASK_STREAM),
            steps: 0,
            config,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn network(&self) -> &UpdateNetwork {
        &self.network
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Re-seed the grid from the configured seed, keeping the network.
    pub fn reset(&mut self) {
        self.grid = seed_grid(&self.config, &mut seeded(self.config.seed, GRID_STREAM));
        self.rng = seeded(self.config.seed, MASK_STREAM);
        self.next = self.grid.clone();
        self.steps = 0;
    }

    /// Switch to a new seed: new grid and new random network.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(SimulationConfig { seed, ..self.config });
    }

    /// Replace the update network (e.g. trained weights) and restart the grid.
    pub fn load_network(&mut self, network: UpdateNetwork) -> Result<(), WeightsError> {
        network.check_compatible(self.config.channels, self.config.input_channels)?;
        *self = Self::with_network(self.config, network);
        Ok(())
    }

    /// Advance one step.
    ///
    /// Every cell perceives the current grid; a cell fires with probability
    /// `fire_rate` and adds its update to the non-input channels. Input
    /// channels never change. Afterwards cells with no alive neighbour
    /// (3x3 alpha max below `alive_threshold`) lose their state.
    pub fn step(&mut self) {
        let size = self.grid.size();
        let input = self.config.input_channels;
        let channels = self.config.channels;

        for y in 0..size {
            for x in 0..size {
                let fire = self.rng.gen::<f32>() < self.config.fire_rate;
                if !fire {
                    for c in input..channels {
                        self.next.set(c, x, y, self.grid.get(c, x, y));
                    }
                    continue;
                }
                perceive_cell(&self.grid, x, y, &mut self.perception);
                self.network
                    .forward(&self.perception, &mut self.hidden, &mut self.delta);
                for c in input..channels {
                    let v = self.grid.get(c, x, y) + self.delta[c - input];
                    self.next.set(c, x, y, v);
                }
            }
        }

        std::mem::swap(&mut self.grid, &mut self.next);
        self.apply_alive_mask();
        self.steps += 1;
    }

    fn apply_alive_mask(&mut self) {
        let threshold = self.config.alive_threshold;
        if threshold <= 0.0 {
            return;
        }
        let size = self.grid.size();
        let alpha = self.config.alpha_channel();
        let dead: Vec<(usize, usize)> = (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .filter(|&(x, y)| self.grid.neighbourhood_max(alpha, x, y) < threshold)
            .collect();
        for (x, y) in dead {
            self.grid.clear_cell_from(self.config.input_channels, x, y);
        }
    }

    pub fn rgba(&self) -> Vec<u8> {
        self.grid
            .to_rgba(self.config.input_channels, Some(self.config.alpha_channel()))
    }

    pub fn alive_cells(&self) -> usize {
        self.grid
            .plane(self.config.alpha_channel())
            .iter()
            .filter(|&&a| a > 0.0 && a >= self.config.alive_threshold)
            .count()
    }
}

/// Procedural input image (a few soft coloured discs) plus a single alive
/// cell in the centre.
pub fn seed_grid<R: Rng>(config: &SimulationConfig, rng: &mut R) -> CellGrid {
    let size = config.grid_size;
    let mut grid = CellGrid::new(size, config.channels);
    let discs = rng.gen_range(3..=5);
    for _ in 0..discs {
        let cx = rng.gen_range(0.0..size as f32);
        let cy = rng.gen_range(0.0..size as f32);
        let radius = rng.gen_range(size as f32 / 8.0..size as f32 / 4.0);
        let colour: [f32; 3] = [rng.gen(), rng.gen(), rng.gen()];
        for y in 0..size {
            for x in 0..size {
                let d = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt() / radius;
                if d >= 1.0 {
                    continue;
                }
                let falloff = 1.0 - d * d;
                for c in 0..config.input_channels {
                    let v = colour[c] * falloff;
                    if v > grid.get(c, x, y) {
                        grid.set(c, x, y, v);
                    }
                }
            }
        }
    }
    let mid = size / 2;
    grid.set(config.alpha_channel(), mid, mid, 1.0);
    grid
}
