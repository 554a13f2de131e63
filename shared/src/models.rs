pub mod language;
pub mod model;
pub mod request;
pub mod settings;

pub use language::*;
pub use model::*;
pub use request::*;
pub use settings::*;
