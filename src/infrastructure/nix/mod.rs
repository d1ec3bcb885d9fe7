//! Nix build adapter

mod build;

pub use build::NixBuilder;
