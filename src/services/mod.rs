pub use auth::*;
pub use media::*;
pub use password::*;

mod auth;
mod media;
mod password;
