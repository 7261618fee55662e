pub mod process;
pub mod traits;
