//! Names of the environment variables read by the test suites.
//!
//! The first group selects the components used for testing; the rest
//! describe the cluster and the external services the tests talk to.

pub const CODEFLARE_TEST_RAY_VERSION: &str = "CODEFLARE_TEST_RAY_VERSION";
pub const CODEFLARE_TEST_RAY_IMAGE: &str = "CODEFLARE_TEST_RAY_IMAGE";
pub const CODEFLARE_TEST_PYTORCH_IMAGE: &str = "CODEFLARE_TEST_PYTORCH_IMAGE";

/// Directory the tests write their output files into
pub const CODEFLARE_TEST_OUTPUT_DIR: &str = "CODEFLARE_TEST_OUTPUT_DIR";

/// `<namespace>/<name>` of the secret holding the InstaScale OCM token
pub const INSTASCALE_OCM_SECRET: &str = "INSTASCALE_OCM_SECRET";

/// ID of the OSD cluster, used by InstaScale tests
pub const CLUSTER_ID: &str = "CLUSTERID";

/// Kind of cluster the tests run on
pub const CLUSTER_TYPE: &str = "CLUSTER_TYPE";

/// Hostname of the Kubernetes cluster
pub const CLUSTER_HOSTNAME: &str = "CLUSTER_HOSTNAME";

pub const MNIST_DATASET_URL: &str = "MNIST_DATASET_URL";

// package index holding every Python package the tests install
pub const PIP_INDEX_URL: &str = "PIP_INDEX_URL";
pub const PIP_TRUSTED_HOST: &str = "PIP_TRUSTED_HOST";

// storage bucket credentials
pub const STORAGE_DEFAULT_ENDPOINT: &str = "AWS_DEFAULT_ENDPOINT";
pub const STORAGE_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
pub const STORAGE_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const STORAGE_SECRET_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const STORAGE_BUCKET_NAME: &str = "AWS_STORAGE_BUCKET";
pub const STORAGE_BUCKET_MNIST_DIR: &str = "AWS_STORAGE_BUCKET_MNIST_DIR";
