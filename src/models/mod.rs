pub use project::*;
pub use service::*;
pub use service_icon::*;
pub use session::*;
pub use testimonial::*;
pub use user::*;

mod project;
mod service;
mod service_icon;
mod session;
mod testimonial;
mod user;
