pub mod constants;
pub mod counter;
pub mod error;
pub mod navbar;
pub mod particles;
pub mod pricing;
pub mod registration;
pub mod routes;
pub mod surface;
pub mod tilt;
pub mod timeline;

pub use counter::*;
pub use error::SiteError;
pub use navbar::*;
pub use particles::*;
pub use pricing::*;
pub use registration::*;
pub use routes::*;
pub use surface::*;
pub use tilt::*;
pub use timeline::*;
