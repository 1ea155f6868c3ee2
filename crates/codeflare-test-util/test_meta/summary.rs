use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use comfy_table::{Cell, Row, Table};
use serde::Serialize;

use crate::setup::environment::{ClusterType, StorageBucket};

/// Every setting a test run resolved, secrets redacted
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentSummary {
    pub ray_version: String,
    pub ray_image: String,
    pub pytorch_image: String,
    pub cluster_type: ClusterType,
    pub cluster_hostname: Option<String>,
    pub cluster_id: Option<String>,
    /// raw value, may be malformed
    pub instascale_ocm_secret: String,
    pub output_dir: Option<PathBuf>,
    pub mnist_dataset_url: String,
    pub pip_index_url: String,
    pub pip_trusted_host: String,
    pub storage_bucket: Option<StorageBucket>,
}

fn or_unset(value: Option<&str>) -> String {
    value.unwrap_or("<unset>").to_string()
}

impl Display for EnvironmentSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_header(vec!["Setting", "Value"]);

        let output_dir = self
            .output_dir
            .as_ref()
            .map(|dir| dir.display().to_string());
        let bucket = self
            .storage_bucket
            .as_ref()
            .map(|bucket| format!("{} @ {}", bucket.name, bucket.endpoint));

        let rows = [
            ("Ray version", self.ray_version.clone()),
            ("Ray image", self.ray_image.clone()),
            ("PyTorch image", self.pytorch_image.clone()),
            ("Cluster type", self.cluster_type.to_string()),
            ("Cluster hostname", or_unset(self.cluster_hostname.as_deref())),
            ("Cluster ID", or_unset(self.cluster_id.as_deref())),
            ("InstaScale OCM secret", self.instascale_ocm_secret.clone()),
            ("Output dir", or_unset(output_dir.as_deref())),
            ("MNIST dataset URL", self.mnist_dataset_url.clone()),
            ("Pip index URL", self.pip_index_url.clone()),
            ("Pip trusted host", self.pip_trusted_host.clone()),
            ("Storage bucket", or_unset(bucket.as_deref())),
        ];
        for (name, value) in rows {
            table.add_row(Row::from(vec![Cell::new(name), Cell::new(value)]));
        }

        write!(f, "{table}")
    }
}
