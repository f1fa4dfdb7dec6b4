pub mod features;
pub mod home;
pub mod problem;
pub mod solution;

pub use features::Features;
pub use home::Home;
pub use problem::Problem;
pub use solution::Solution;
