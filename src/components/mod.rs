mod nav_bar;
mod simulation_canvas;
mod simulation_controls;
mod weights_panel;

pub use nav_bar::NavBar;
pub use simulation_canvas::SimulationCanvas;
pub use simulation_controls::SimulationControls;
pub use weights_panel::WeightsPanel;
