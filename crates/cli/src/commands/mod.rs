pub mod calc;
pub mod materials;
pub mod products;
pub mod shell;
pub mod util;
pub mod workspace;

pub use calc::*;
pub use materials::*;
pub use products::*;
pub use shell::*;
pub use util::*;
pub use workspace::*;
