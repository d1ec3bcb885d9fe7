//! Host sources backed by provisioning output

mod terraform;

pub use terraform::TerraformStateRepository;
