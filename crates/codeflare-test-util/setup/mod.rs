pub mod environment;

pub use environment::TestEnvironment;
