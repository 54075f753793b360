pub mod analytics;
pub mod fleet;
pub mod maintenance;
pub mod sensor;
pub mod supply;

pub use analytics::*;
pub use fleet::*;
pub use maintenance::*;
pub use sensor::*;
pub use supply::*;
