pub mod data_point;
pub mod period;
pub mod region;

pub use data_point::*;
pub use period::*;
pub use region::*;
