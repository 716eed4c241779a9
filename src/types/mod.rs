pub mod bar;
pub mod report;
pub mod signals;

pub use bar::*;
pub use report::*;
pub use signals::*;
