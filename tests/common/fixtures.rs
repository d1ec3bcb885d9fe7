//! Reusable test content.

/// State with three hosts spread over two outputs, one of them nested in a list
pub const STATE_THREE_HOSTS: &str = r#"{
  "version": 4,
  "outputs": {
    "dns": {
      "value": {
        "_type": "nixos_host",
        "hostname": "ns1",
        "ip": "10.0.0.53",
        "tags": ["dns"]
      },
      "type": "object"
    },
    "web": {
      "value": [
        {
          "_type": "nixos_host",
          "hostname": "web1",
          "ip": "10.0.0.80",
          "tags": ["web", "edge"],
          "region": "eu-west-1"
        },
        {
          "_type": "nixos_host",
          "hostname": "web2",
          "ip": "10.0.0.81",
          "tags": ["web"]
        }
      ]
    },
    "unrelated": { "value": "db.internal" }
  }
}
"#;

/// State without any marked hosts
pub const STATE_NO_HOSTS: &str = r#"{
  "version": 4,
  "outputs": { "vpc_id": { "value": "vpc-123" } }
}
"#;

/// One readable host next to two marked outputs with mistyped fields
pub const STATE_MALFORMED_HOSTS: &str = r#"{
  "version": 4,
  "outputs": {
    "dns": {
      "value": [
        { "_type": "nixos_host", "hostname": "ns1", "ip": "10.0.0.53", "tags": ["dns"] },
        { "_type": "nixos_host", "hostname": "ns2", "ip": "10.0.0.54", "tags": ["dns", 7] }
      ]
    },
    "web": {
      "value": { "_type": "nixos_host", "hostname": "web1", "ip": 167772240, "tags": ["web"] }
    }
  }
}
"#;

/// Host listing printed for [`STATE_THREE_HOSTS`]
pub const LIST_THREE_HOSTS: &str = "Found 3 hosts\n\
Hostname: ns1 \t tags: dns \t ip: 10.0.0.53\n\
Hostname: web1 \t tags: web, edge \t ip: 10.0.0.80\n\
Hostname: web2 \t tags: web \t ip: 10.0.0.81\n";

pub const CHANNELS_NIX: &str = r#"{ pins = { nixpkgs = <nixpkgs>; }; }
"#;

pub const MODULE_DEFAULT_NIX: &str = r#"{ host, ... }: { networking.hostName = host.hostname; }
"#;

pub const TEMPLATE_NIX: &str = r#"{ hosts, channels }: builtins.fromJSON hosts
"#;

/// Fake `nix-build`: records its working directory and arguments, then
/// prints an output path.
pub const FAKE_NIX_BUILD: &str = r#"#!/bin/sh
pwd > "$TERRAMENA_TEST_LOG_DIR/nix-build.cwd"
ls "$(pwd)" > "$TERRAMENA_TEST_LOG_DIR/nix-build.ls"
for arg in "$@"; do echo "$arg"; done > "$TERRAMENA_TEST_LOG_DIR/nix-build.args"
echo "/nix/store/0000-colmena-deployment"
"#;

/// Fake `nix-build` that fails
pub const FAKE_NIX_BUILD_FAILING: &str = r#"#!/bin/sh
echo "error: attribute 'pins' missing" >&2
exit 1
"#;

/// Fake `colmena`: records its arguments and `SSH_CONFIG_FILE`, prints a
/// progress line to stdout, then exits with `$FAKE_COLMENA_EXIT` (0 when unset).
pub const FAKE_COLMENA: &str = r#"#!/bin/sh
for arg in "$@"; do echo "$arg"; done > "$TERRAMENA_TEST_LOG_DIR/colmena.args"
echo "${SSH_CONFIG_FILE:-unset}" > "$TERRAMENA_TEST_LOG_DIR/colmena.ssh_config"
echo "[INFO ] All done!"
exit "${FAKE_COLMENA_EXIT:-0}"
"#;

/// Fake `ssh`: records its arguments
pub const FAKE_SSH: &str = r#"#!/bin/sh
for arg in "$@"; do echo "$arg"; done > "$TERRAMENA_TEST_LOG_DIR/ssh.args"
"#;
