pub use db::*;
pub use projects::*;
pub use services::*;
pub use sessions::*;
pub use testimonials::*;
pub use users::*;

mod db;
mod projects;
mod services;
mod sessions;
mod testimonials;
mod users;
