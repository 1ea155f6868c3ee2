pub mod defaults;
pub mod keys;

mod cluster;
mod lookup;
mod secret;
mod storage;

pub use cluster::ClusterType;
pub use lookup::{EnvLookup, FixedEnv, OsEnv};
pub use secret::{OcmSecret, SecretString};
pub use storage::StorageBucket;

pub use common::*;

mod common {
    use std::path::PathBuf;

    use tracing::debug;

    use crate::EnvironmentError;
    use crate::test_meta::context::{FailureReporter, Logger};
    use crate::test_meta::summary::EnvironmentSummary;

    use super::{
        ClusterType, EnvLookup, OcmSecret, OsEnv, SecretString, StorageBucket, defaults, keys,
    };

    /// Resolves the test settings from environment variables.
    ///
    /// Nothing is cached: each accessor reads the environment again,
    /// so two calls can disagree if the environment changed in between.
    #[derive(Debug, Default, Clone)]
    pub struct TestEnvironment<E = OsEnv> {
        env: E,
    }

    impl TestEnvironment<OsEnv> {
        /// Environment of the current process
        pub fn os() -> Self {
            Self { env: OsEnv }
        }
    }

    impl<E: EnvLookup> TestEnvironment<E> {
        pub fn new(env: E) -> Self {
            Self { env }
        }

        pub fn lookup(&self) -> &E {
            &self.env
        }

        fn var(&self, key: &'static str) -> Option<String> {
            let value = self.env.lookup(key);
            debug!(key, present = value.is_some(), "environment lookup");
            value
        }

        fn var_or(&self, key: &'static str, default: &str) -> String {
            self.var(key).unwrap_or_else(|| default.to_string())
        }

        pub fn ray_version(&self) -> String {
            self.var_or(keys::CODEFLARE_TEST_RAY_VERSION, defaults::RAY_VERSION)
        }

        pub fn ray_image(&self) -> String {
            self.var_or(keys::CODEFLARE_TEST_RAY_IMAGE, defaults::RAY_IMAGE)
        }

        // the image variants share the ray image override
        pub fn ray_rocm_image(&self) -> String {
            self.var_or(keys::CODEFLARE_TEST_RAY_IMAGE, defaults::RAY_ROCM_IMAGE)
        }

        pub fn ray_torch_cuda_image(&self) -> String {
            self.var_or(keys::CODEFLARE_TEST_RAY_IMAGE, defaults::RAY_TORCH_CUDA_IMAGE)
        }

        pub fn ray_torch_rocm_image(&self) -> String {
            self.var_or(keys::CODEFLARE_TEST_RAY_IMAGE, defaults::RAY_TORCH_ROCM_IMAGE)
        }

        pub fn pytorch_image(&self) -> String {
            self.var_or(keys::CODEFLARE_TEST_PYTORCH_IMAGE, defaults::PYTORCH_IMAGE)
        }

        pub fn mnist_dataset_url(&self) -> String {
            self.var_or(keys::MNIST_DATASET_URL, defaults::MNIST_DATASET_URL)
        }

        pub fn pip_index_url(&self) -> String {
            self.var_or(keys::PIP_INDEX_URL, defaults::PIP_INDEX_URL)
        }

        pub fn pip_trusted_host(&self) -> String {
            self.var_or(keys::PIP_TRUSTED_HOST, defaults::PIP_TRUSTED_HOST)
        }

        /// Namespace and name of the InstaScale OCM token secret.
        ///
        /// Fails when the value is not `<namespace>/<name>`.
        pub fn instascale_ocm_secret(&self) -> Result<OcmSecret, EnvironmentError> {
            self.var_or(keys::INSTASCALE_OCM_SECRET, defaults::INSTASCALE_OCM_SECRET)
                .parse()
        }

        pub fn cluster_id(&self) -> Option<String> {
            self.var(keys::CLUSTER_ID)
        }

        /// Reports through `log` when the variable is unset or not recognized,
        /// returning `ClusterType::Undefined` in both cases.
        pub fn cluster_type<L: Logger + ?Sized>(&self, log: &L) -> ClusterType {
            let Some(value) = self.var(keys::CLUSTER_TYPE) else {
                log.log(format_args!(
                    "Environment variable {} is unset.",
                    keys::CLUSTER_TYPE
                ));
                return ClusterType::Undefined;
            };

            match value.parse() {
                Ok(cluster_type) => cluster_type,
                Err(_) => {
                    log.warn(format_args!(
                        "Environment variable {} is unset or contains an incorrect value: '{}'",
                        keys::CLUSTER_TYPE,
                        value
                    ));
                    ClusterType::Undefined
                }
            }
        }

        /// Hostname of the cluster. Missing hostname is fatal for the test.
        pub fn cluster_hostname<R: FailureReporter + ?Sized>(&self, reporter: &R) -> String {
            match self.var(keys::CLUSTER_HOSTNAME) {
                Some(hostname) => hostname,
                None => reporter.fatal(format_args!(
                    "Expected environment variable {} not found, please define cluster hostname.",
                    keys::CLUSTER_HOSTNAME
                )),
            }
        }

        pub fn try_cluster_hostname(&self) -> Result<String, EnvironmentError> {
            self.var(keys::CLUSTER_HOSTNAME)
                .ok_or(EnvironmentError::MissingVariable(keys::CLUSTER_HOSTNAME))
        }

        pub fn output_dir(&self) -> Option<PathBuf> {
            self.var(keys::CODEFLARE_TEST_OUTPUT_DIR).map(PathBuf::from)
        }

        pub fn storage_bucket_default_endpoint(&self) -> Option<String> {
            self.var(keys::STORAGE_DEFAULT_ENDPOINT)
        }

        pub fn storage_bucket_default_region(&self) -> Option<String> {
            self.var(keys::STORAGE_DEFAULT_REGION)
        }

        pub fn storage_bucket_access_key_id(&self) -> Option<String> {
            self.var(keys::STORAGE_ACCESS_KEY_ID)
        }

        pub fn storage_bucket_secret_key(&self) -> Option<SecretString> {
            self.var(keys::STORAGE_SECRET_KEY).map(SecretString::from)
        }

        pub fn storage_bucket_name(&self) -> Option<String> {
            self.var(keys::STORAGE_BUCKET_NAME)
        }

        pub fn storage_bucket_mnist_dir(&self) -> Option<String> {
            self.var(keys::STORAGE_BUCKET_MNIST_DIR)
        }

        /// Complete bucket settings, `None` unless endpoint, credentials
        /// and bucket name are all set
        pub fn storage_bucket(&self) -> Option<StorageBucket> {
            Some(StorageBucket {
                endpoint: self.storage_bucket_default_endpoint()?,
                access_key_id: self.storage_bucket_access_key_id()?,
                secret_key: self.storage_bucket_secret_key()?,
                name: self.storage_bucket_name()?,
                region: self.storage_bucket_default_region(),
                mnist_dir: self.storage_bucket_mnist_dir(),
            })
        }

        /// Snapshot of every resolved setting. Does not log.
        pub fn summary(&self) -> EnvironmentSummary {
            EnvironmentSummary {
                ray_version: self.ray_version(),
                ray_image: self.ray_image(),
                pytorch_image: self.pytorch_image(),
                cluster_type: self
                    .var(keys::CLUSTER_TYPE)
                    .map(|value| ClusterType::parse_or_undefined(&value))
                    .unwrap_or_default(),
                cluster_hostname: self.var(keys::CLUSTER_HOSTNAME),
                cluster_id: self.cluster_id(),
                instascale_ocm_secret: self
                    .var_or(keys::INSTASCALE_OCM_SECRET, defaults::INSTASCALE_OCM_SECRET),
                output_dir: self.output_dir(),
                mnist_dataset_url: self.mnist_dataset_url(),
                pip_index_url: self.pip_index_url(),
                pip_trusted_host: self.pip_trusted_host(),
                storage_bucket: self.storage_bucket(),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::path::PathBuf;

    use crate::EnvironmentError;
    use crate::test_meta::context::{LogLevel, RecordingContext};

    use super::*;

    fn env_with(vars: &[(&str, &str)]) -> TestEnvironment<FixedEnv> {
        TestEnvironment::new(vars.iter().copied().collect())
    }

    type Getter = fn(&TestEnvironment<FixedEnv>) -> String;

    fn defaulting_getters() -> [(&'static str, Getter, &'static str); 9] {
        [
            (
                keys::CODEFLARE_TEST_RAY_VERSION,
                TestEnvironment::ray_version,
                defaults::RAY_VERSION,
            ),
            (
                keys::CODEFLARE_TEST_RAY_IMAGE,
                TestEnvironment::ray_image,
                defaults::RAY_IMAGE,
            ),
            (
                keys::CODEFLARE_TEST_RAY_IMAGE,
                TestEnvironment::ray_rocm_image,
                defaults::RAY_ROCM_IMAGE,
            ),
            (
                keys::CODEFLARE_TEST_RAY_IMAGE,
                TestEnvironment::ray_torch_cuda_image,
                defaults::RAY_TORCH_CUDA_IMAGE,
            ),
            (
                keys::CODEFLARE_TEST_RAY_IMAGE,
                TestEnvironment::ray_torch_rocm_image,
                defaults::RAY_TORCH_ROCM_IMAGE,
            ),
            (
                keys::CODEFLARE_TEST_PYTORCH_IMAGE,
                TestEnvironment::pytorch_image,
                defaults::PYTORCH_IMAGE,
            ),
            (
                keys::MNIST_DATASET_URL,
                TestEnvironment::mnist_dataset_url,
                defaults::MNIST_DATASET_URL,
            ),
            (
                keys::PIP_INDEX_URL,
                TestEnvironment::pip_index_url,
                defaults::PIP_INDEX_URL,
            ),
            (
                keys::PIP_TRUSTED_HOST,
                TestEnvironment::pip_trusted_host,
                defaults::PIP_TRUSTED_HOST,
            ),
        ]
    }

    #[test]
    fn test_defaulting_getters_fall_back_when_unset() {
        let env = env_with(&[]);
        for (key, getter, default) in defaulting_getters() {
            assert_eq!(getter(&env), default, "key: {key}");
        }
        assert_eq!(env.pip_trusted_host(), "");
    }

    #[test]
    fn test_defaulting_getters_return_set_value() {
        for (key, getter, _) in defaulting_getters() {
            let env = env_with(&[(key, "quay.io/custom:1")]);
            assert_eq!(getter(&env), "quay.io/custom:1", "key: {key}");

            // empty still counts as set
            let env = env_with(&[(key, "")]);
            assert_eq!(getter(&env), "", "key: {key}");
        }
    }

    #[test]
    fn test_presence_getters() {
        let env = env_with(&[
            (keys::CLUSTER_ID, "abc123"),
            (keys::STORAGE_DEFAULT_ENDPOINT, "https://s3.example.com"),
            (keys::STORAGE_DEFAULT_REGION, ""),
            (keys::STORAGE_ACCESS_KEY_ID, "AKIA"),
            (keys::STORAGE_SECRET_KEY, "s3cr3t"),
            (keys::STORAGE_BUCKET_NAME, "datasets"),
            (keys::STORAGE_BUCKET_MNIST_DIR, "mnist"),
        ]);

        assert_eq!(env.cluster_id().as_deref(), Some("abc123"));
        assert_eq!(
            env.storage_bucket_default_endpoint().as_deref(),
            Some("https://s3.example.com")
        );
        assert_eq!(env.storage_bucket_default_region().as_deref(), Some(""));
        assert_eq!(env.storage_bucket_access_key_id().as_deref(), Some("AKIA"));
        assert_eq!(
            env.storage_bucket_secret_key().as_deref(),
            Some("s3cr3t")
        );
        assert_eq!(env.storage_bucket_name().as_deref(), Some("datasets"));
        assert_eq!(env.storage_bucket_mnist_dir().as_deref(), Some("mnist"));

        let empty = env_with(&[]);
        assert_eq!(empty.cluster_id(), None);
        assert_eq!(empty.storage_bucket_default_endpoint(), None);
        assert_eq!(empty.storage_bucket_default_region(), None);
        assert_eq!(empty.storage_bucket_access_key_id(), None);
        assert!(empty.storage_bucket_secret_key().is_none());
        assert_eq!(empty.storage_bucket_name(), None);
        assert_eq!(empty.storage_bucket_mnist_dir(), None);
    }

    #[test]
    fn test_instascale_ocm_secret() {
        let secret = env_with(&[]).instascale_ocm_secret().expect("default");
        assert_eq!(
            secret.into_parts(),
            ("default".to_string(), "instascale-ocm-secret".to_string())
        );

        let secret = env_with(&[(keys::INSTASCALE_OCM_SECRET, "ns1/secretname")])
            .instascale_ocm_secret()
            .expect("valid");
        assert_eq!(secret.namespace, "ns1");
        assert_eq!(secret.name, "secretname");

        let secret = env_with(&[(keys::INSTASCALE_OCM_SECRET, "ns1/")])
            .instascale_ocm_secret()
            .expect("empty name is still two parts");
        assert_eq!(secret.into_parts(), ("ns1".to_string(), String::new()));

        let err = env_with(&[(keys::INSTASCALE_OCM_SECRET, "novalue")])
            .instascale_ocm_secret()
            .expect_err("no separator");
        assert_eq!(
            err,
            EnvironmentError::MalformedOcmSecret {
                key: keys::INSTASCALE_OCM_SECRET,
                value: "novalue".to_string(),
            }
        );
    }

    #[test]
    fn test_cluster_type_recognized_values() {
        for (raw, expected) in [
            ("OSD", ClusterType::Osd),
            ("OCP", ClusterType::Ocp),
            ("HYPERSHIFT", ClusterType::Hypershift),
            ("KIND", ClusterType::Kind),
        ] {
            let ctx = RecordingContext::new();
            let env = env_with(&[(keys::CLUSTER_TYPE, raw)]);
            assert_eq!(env.cluster_type(&ctx), expected);
            assert!(ctx.lines().is_empty());
        }
    }

    #[test]
    fn test_cluster_type_unset_is_logged() {
        let ctx = RecordingContext::new();
        assert_eq!(env_with(&[]).cluster_type(&ctx), ClusterType::Undefined);

        let lines = ctx.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, LogLevel::Info);
        assert_eq!(lines[0].message, "Environment variable CLUSTER_TYPE is unset.");
    }

    #[test]
    fn test_cluster_type_unrecognized_is_warned() {
        for raw in ["osd", "BOGUS", ""] {
            let ctx = RecordingContext::new();
            let env = env_with(&[(keys::CLUSTER_TYPE, raw)]);
            assert_eq!(env.cluster_type(&ctx), ClusterType::Undefined);

            let lines = ctx.lines();
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].level, LogLevel::Warn);
            assert_eq!(
                lines[0].message,
                format!(
                    "Environment variable CLUSTER_TYPE is unset or contains an incorrect value: '{raw}'"
                )
            );
        }
    }

    #[test]
    fn test_cluster_hostname() {
        let ctx = RecordingContext::new();
        let env = env_with(&[(keys::CLUSTER_HOSTNAME, "cluster.example.com")]);
        assert_eq!(env.cluster_hostname(&ctx), "cluster.example.com");
        assert_eq!(
            env.try_cluster_hostname().as_deref(),
            Ok("cluster.example.com")
        );
        assert!(ctx.lines().is_empty());
    }

    #[test]
    fn test_missing_cluster_hostname_is_fatal() {
        let ctx = RecordingContext::new();
        let env = env_with(&[]);

        let result: std::thread::Result<String> =
            catch_unwind(AssertUnwindSafe(|| env.cluster_hostname(&ctx)));

        assert!(result.is_err());
        assert_eq!(
            ctx.fatal_message().as_deref(),
            Some(
                "Expected environment variable CLUSTER_HOSTNAME not found, please define cluster hostname."
            )
        );
        assert_eq!(
            env.try_cluster_hostname(),
            Err(EnvironmentError::MissingVariable(keys::CLUSTER_HOSTNAME))
        );
    }

    #[test]
    fn test_output_dir() {
        assert_eq!(env_with(&[]).output_dir(), None);
        assert_eq!(
            env_with(&[(keys::CODEFLARE_TEST_OUTPUT_DIR, "/tmp/e2e")]).output_dir(),
            Some(PathBuf::from("/tmp/e2e"))
        );
    }

    #[test]
    fn test_storage_bucket_requires_credentials() {
        let mut vars = FixedEnv::new()
            .with(keys::STORAGE_DEFAULT_ENDPOINT, "https://s3.example.com")
            .with(keys::STORAGE_ACCESS_KEY_ID, "AKIA")
            .with(keys::STORAGE_BUCKET_NAME, "datasets")
            .with(keys::STORAGE_BUCKET_MNIST_DIR, "/mnist");
        assert_eq!(TestEnvironment::new(vars.clone()).storage_bucket(), None);

        vars.insert(keys::STORAGE_SECRET_KEY, "s3cr3t");
        let bucket = TestEnvironment::new(vars)
            .storage_bucket()
            .expect("complete bucket");
        assert_eq!(bucket.endpoint, "https://s3.example.com");
        assert_eq!(bucket.region, None);
        assert_eq!(bucket.secret_key.expose(), "s3cr3t");
        assert_eq!(bucket.mnist_location().as_deref(), Some("s3://datasets/mnist"));
    }

    #[test]
    fn test_repeated_reads_agree_and_see_changes() {
        let mut vars = FixedEnv::new().with(keys::CLUSTER_TYPE, "KIND");
        let ctx = RecordingContext::new();
        {
            let env = TestEnvironment::new(&vars);
            assert_eq!(env.cluster_type(&ctx), env.cluster_type(&ctx));
            assert_eq!(env.ray_image(), env.ray_image());
        }

        vars.insert(keys::CLUSTER_TYPE, "OCP");
        let env = TestEnvironment::new(&vars);
        assert_eq!(env.cluster_type(&ctx), ClusterType::Ocp);
        assert_eq!(
            env.lookup().lookup(keys::CLUSTER_TYPE).as_deref(),
            Some("OCP")
        );
    }
}
