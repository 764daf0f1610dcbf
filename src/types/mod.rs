pub mod analysis;
pub mod indicators;
pub mod price;
pub mod signals;

pub use analysis::*;
pub use indicators::*;
pub use price::*;
pub use signals::*;
