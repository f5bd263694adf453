pub mod chat;
pub mod image;
pub mod trip_planner;


pub use chat::chat;
pub use image::{generate_image, image_form};
pub use trip_planner::plan_trip;
