mod controller_tests;
pub mod utils;
