use serde::Serialize;

use super::SecretString;

/// S3 compatible bucket the tests read datasets from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageBucket {
    pub endpoint: String,
    pub region: Option<String>,
    pub access_key_id: String,
    pub secret_key: SecretString,
    pub name: String,
    /// prefix of the MNIST files inside the bucket
    pub mnist_dir: Option<String>,
}

impl StorageBucket {
    /// `s3://<bucket>/<mnist dir>` when the MNIST dir is known
    pub fn mnist_location(&self) -> Option<String> {
        self.mnist_dir
            .as_ref()
            .map(|dir| format!("s3://{}/{}", self.name, dir.trim_start_matches('/')))
    }
}
