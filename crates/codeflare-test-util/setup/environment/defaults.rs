//! Values used when the matching variable is not set.

pub const RAY_VERSION: &str = "2.35.0";
pub const RAY_IMAGE: &str = "quay.io/modh/ray:2.35.0-py311-cu121";
pub const RAY_ROCM_IMAGE: &str = "quay.io/modh/ray:2.35.0-py311-rocm61";
pub const RAY_TORCH_CUDA_IMAGE: &str = "quay.io/rhoai/ray:2.35.0-py311-cu121-torch24-fa26";
pub const RAY_TORCH_ROCM_IMAGE: &str = "quay.io/rhoai/ray:2.35.0-py311-rocm61-torch24-fa26";

pub const PYTORCH_IMAGE: &str = "pytorch/pytorch:1.11.0-cuda11.3-cudnn8-runtime";

pub const INSTASCALE_OCM_SECRET: &str = "default/instascale-ocm-secret";

pub const MNIST_DATASET_URL: &str = "https://ossci-datasets.s3.amazonaws.com/mnist/";

pub const PIP_INDEX_URL: &str = "https://pypi.python.org/simple";
pub const PIP_TRUSTED_HOST: &str = "";
