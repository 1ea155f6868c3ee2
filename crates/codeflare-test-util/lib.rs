pub mod setup;
pub mod test_meta;

mod error;

pub use error::EnvironmentError;
pub use setup::environment::{
    ClusterType, EnvLookup, FixedEnv, OcmSecret, OsEnv, SecretString, StorageBucket,
    TestEnvironment,
};
pub use test_meta::context::{FailureReporter, Logger, RecordingContext, TracingContext};
pub use test_meta::summary::EnvironmentSummary;
