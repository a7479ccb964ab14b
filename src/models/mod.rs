pub mod crop;
pub mod fertilizer;
pub mod market;
pub mod pest;
pub mod soil;
pub mod weather;

pub use crop::*;
pub use fertilizer::*;
pub use market::*;
pub use pest::*;
pub use soil::*;
pub use weather::*;
