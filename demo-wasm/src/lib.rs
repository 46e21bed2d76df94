use weft::{ClothGrid, FixedStepper, GridConfig, PinPattern, Ray, SimulationConfig, Vec3};
use wasm_bindgen::prelude::*;

const PHYSICS_STEP: f32 = 1.0 / 60.0;
// Pointer delta in pixels to newtons on each hit node.
const DRAG_SCALE: f32 = 0.001;

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    cloth: ClothGrid<Vec3<f32>>,
    stepper: FixedStepper<f32>,
    buffer: Vec<f32>,
}

#[wasm_bindgen]
impl ClothDemo {
    /// A unit sheet of `resolution x resolution` nodes, hanging in a light
    /// breeze from every fourth top node.
    #[wasm_bindgen(constructor)]
    pub fn new(resolution: usize) -> Result<ClothDemo, JsError> {
        let grid_config = GridConfig {
            cols: resolution,
            rows: resolution,
            pins: PinPattern::TopEvery(4),
            ..GridConfig::default()
        };
        let sim_config = SimulationConfig::new()
            .with_gravity(Vec3::new(0.0, -9.81, -10.0))
            .with_node_radius(0.5 / resolution.max(1) as f32);

        let cloth = ClothGrid::build(&grid_config, sim_config)?;
        let stepper = FixedStepper::new(PHYSICS_STEP)?;
        Ok(ClothDemo { cloth, stepper, buffer: Vec::new() })
    }

    /// Spend one frame's worth of seconds on fixed physics steps.
    pub fn update(&mut self, frame_dt: f32) -> Result<usize, JsError> {
        let advance = self.stepper.advance(self.cloth.simulation_mut(), frame_dt)?;
        Ok(advance.steps)
    }

    /// Returns flat [x0, y0, z0, x1, y1, z1, ...] in row-major order
    pub fn positions(&mut self) -> Vec<f32> {
        self.cloth.simulation().write_position_buffer(&mut self.buffer);
        self.buffer.clone()
    }

    /// Push every node under the pointer ray by the pointer's screen delta.
    /// Returns how many nodes were pushed.
    #[allow(clippy::too_many_arguments)]
    pub fn drag(
        &mut self,
        origin_x: f32,
        origin_y: f32,
        origin_z: f32,
        dir_x: f32,
        dir_y: f32,
        dir_z: f32,
        dx: f32,
        dy: f32,
    ) -> usize {
        let ray = Ray::new(
            Vec3::new(origin_x, origin_y, origin_z),
            Vec3::new(dir_x, dir_y, dir_z),
        );
        // Screen y grows downward.
        let impulse = Vec3::new(dx * DRAG_SCALE, -dy * DRAG_SCALE, 0.0);
        self.cloth.simulation_mut().drag(&ray, impulse)
    }

    pub fn node_count(&self) -> usize {
        self.cloth.simulation().node_count()
    }

    pub fn cols(&self) -> usize {
        self.cloth.cols()
    }
    pub fn rows(&self) -> usize {
        self.cloth.rows()
    }
}
