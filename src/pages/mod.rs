mod keeping_up;
mod landing;
mod nca_intro;
mod nca_research;
mod not_found;
mod simulator_home;

pub use keeping_up::UpdatesPage;
pub use landing::LandingPage;
pub use nca_intro::IntroPage;
pub use nca_research::ResearchPage;
pub use not_found::NotFoundPage;
pub use simulator_home::SimulatorPage;
