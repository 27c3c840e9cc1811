pub mod ratio;
pub mod social;
pub mod trader;
pub mod wallet;

pub use ratio::*;
pub use social::*;
pub use trader::*;
pub use wallet::*;
