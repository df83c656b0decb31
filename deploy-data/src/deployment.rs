//! Deployment-wide data shared by every environment assembler.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};
use common::{Error, Result, SpecNode};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    cluster::ClusterDeployData,
    constants::{ClusterType, Env},
};

/// Nested path holding the proxy CA certificate.
///
/// Shared clusters read it from the workload proxy spec as well.
// TODO: confirm with the product owner whether shared clusters should read tkgSharedservice.proxyCert
pub const PROXY_CERT_PATH: &str = "tkgWorkload.proxyCert";

/// Output of an environment assembler, consumed by the template renderer
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentData {
    pub env: Option<Env>,
    pub identity_mgmt_type: String,
    pub ceip: String,
    pub proxy_cert: String,
    pub is_proxy_cert: String,
    pub cluster_type: String,
    pub cluster_data: ClusterDeployData,
    #[serde(skip)]
    pub yaml_template: String,
}

impl fmt::Display for DeploymentData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CLUSTER-TYPE = {}\nCLUSTER-DATA = {}\nCEIP = {}\nPROXY-CERT = {}\nPROXY = {}",
            self.cluster_type, self.cluster_data, self.ceip, self.proxy_cert, self.is_proxy_cert
        )
    }
}

/// Encoded proxy certificate with its presence flag
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ProxyCert {
    pub cert: String,
    pub is_proxy_cert: String,
}

impl ProxyCert {
    fn absent() -> Self {
        Self {
            cert: String::new(),
            is_proxy_cert: "false".to_owned(),
        }
    }
}

/// RBAC role to user-list mapping, copied verbatim
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct RbacUsers {
    pub cluster_admin_users: String,
    pub admin_users: String,
    pub edit_users: String,
    pub view_users: String,
}

pub fn os_version(os_name: &str) -> Result<&'static str> {
    match os_name {
        "photon" => Ok("3"),
        "ubuntu" => Ok("20.04"),
        other => Err(Error::InvalidOsName(other.to_owned())),
    }
}

pub fn identity_mgmt_config(rbac: &SpecNode<'_>) -> Result<RbacUsers> {
    Ok(RbacUsers {
        cluster_admin_users: rbac.user_list_field("clusterAdminUsers")?,
        admin_users: rbac.user_list_field("adminUsers")?,
        edit_users: rbac.user_list_field("editUsers")?,
        view_users: rbac.user_list_field("viewUsers")?,
    })
}

pub fn encode_cert(raw: &str) -> String {
    STANDARD.encode(raw.as_bytes())
}

pub fn proxy_check(cluster_type: ClusterType, proxy_cert_raw: &str) -> ProxyCert {
    if proxy_cert_raw.is_empty() {
        info!("Proxy certificate for {cluster_type} is not provided");
        return ProxyCert::absent();
    }
    ProxyCert {
        cert: encode_cert(proxy_cert_raw),
        is_proxy_cert: "true".to_owned(),
    }
}

/// Absent certificate paths fall back to no proxy, malformed values are errors
fn proxy_data(proxy_spec: Option<&SpecNode<'_>>, cluster_type: ClusterType) -> Result<ProxyCert> {
    let Some(proxy_spec) = proxy_spec else {
        return Ok(ProxyCert::absent());
    };
    match proxy_spec.optional_str_field(PROXY_CERT_PATH)? {
        Some(raw) => Ok(proxy_check(cluster_type, &raw)),
        None => Ok(ProxyCert::absent()),
    }
}

pub fn workload_proxy_data(proxy_spec: Option<&SpecNode<'_>>) -> Result<ProxyCert> {
    proxy_data(proxy_spec, ClusterType::Workload)
}

pub fn shared_proxy_data(proxy_spec: Option<&SpecNode<'_>>) -> Result<ProxyCert> {
    proxy_data(proxy_spec, ClusterType::Shared)
}

#[cfg(test)]
mod tests {
    use std::{
        io::Write,
        sync::{Arc, Mutex},
    };

    use common::SpecTree;

    use super::*;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.lock().unwrap().clone())
                .unwrap()
                .lines()
                .map(str::to_owned)
                .collect()
        }
    }

    fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let out = tracing::subscriber::with_default(subscriber, f);
        (out, buffer.lines())
    }

    #[test]
    fn test_os_version() {
        assert_eq!(os_version("photon").unwrap(), "3");
        assert_eq!(os_version("ubuntu").unwrap(), "20.04");
        for bad in ["windows", "Photon", ""] {
            assert!(matches!(os_version(bad), Err(Error::InvalidOsName(n)) if n == bad));
        }
    }

    #[test]
    fn test_identity_mgmt_config_is_verbatim() {
        let tree = SpecTree::parse(
            r#"
clusterAdminUsers: " a@x.com , b@x.com "
adminUsers: ""
editUsers: e@x.com
viewUsers: v@x.com
"#,
        )
        .unwrap();
        let users = identity_mgmt_config(&tree.root()).unwrap();
        assert_eq!(users.cluster_admin_users, " a@x.com , b@x.com ");
        assert_eq!(users.admin_users, "");
        assert_eq!(users.edit_users, "e@x.com");
        assert_eq!(users.view_users, "v@x.com");
    }

    #[test]
    fn test_identity_mgmt_config_null_and_sequence() {
        let tree = SpecTree::parse(
            r#"
clusterAdminUsers:
adminUsers: [a@x.com, b@x.com]
editUsers: ~
viewUsers: []
"#,
        )
        .unwrap();
        let users = identity_mgmt_config(&tree.root()).unwrap();
        assert_eq!(users.cluster_admin_users, "");
        assert_eq!(users.admin_users, "a@x.com,b@x.com");
        assert_eq!(users.edit_users, "");
        assert_eq!(users.view_users, "");
    }

    #[test]
    fn test_identity_mgmt_config_missing_key() {
        let tree = SpecTree::parse("clusterAdminUsers: a@x.com\nadminUsers: \"\"\n").unwrap();
        assert!(matches!(
            identity_mgmt_config(&tree.root()),
            Err(Error::MissingField(p)) if p == "editUsers"
        ));
    }

    #[test]
    fn test_proxy_check_empty_logs_once() {
        let (cert, logs) = capture_logs(|| proxy_check(ClusterType::Workload, ""));
        assert_eq!(cert.cert, "");
        assert_eq!(cert.is_proxy_cert, "false");
        assert_eq!(logs.len(), 1);
        assert!(logs[0].contains("INFO"));
        assert!(logs[0].contains("Proxy certificate for workload is not provided"));
    }

    #[test]
    fn test_proxy_check_encodes() {
        let raw = "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----";
        let (cert, logs) = capture_logs(|| proxy_check(ClusterType::Shared, raw));
        assert_eq!(cert.is_proxy_cert, "true");
        assert!(logs.is_empty());
        let decoded = STANDARD.decode(&cert.cert).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), raw);
    }

    #[test]
    fn test_proxy_data_absent_path() {
        let tree = SpecTree::parse("tkgMgmt:\n  proxyCert: abc\n").unwrap();
        let spec = tree.root();
        assert_eq!(workload_proxy_data(Some(&spec)).unwrap(), ProxyCert::absent());
        assert_eq!(shared_proxy_data(Some(&spec)).unwrap(), ProxyCert::absent());
        assert_eq!(shared_proxy_data(None).unwrap(), ProxyCert::absent());
    }

    #[test]
    fn test_shared_reads_workload_path() {
        let tree = SpecTree::parse(
            "tkgWorkload:\n  proxyCert: wl-cert\ntkgSharedservice:\n  proxyCert: shared-cert\n",
        )
        .unwrap();
        let cert = shared_proxy_data(Some(&tree.root())).unwrap();
        assert_eq!(cert.cert, encode_cert("wl-cert"));
        assert_eq!(cert.is_proxy_cert, "true");
    }

    #[test]
    fn test_proxy_data_malformed_value_errors() {
        let tree = SpecTree::parse("tkgWorkload:\n  proxyCert:\n    - a\n").unwrap();
        assert!(matches!(
            workload_proxy_data(Some(&tree.root())),
            Err(Error::NotAScalar(p)) if p == "tkgWorkload.proxyCert"
        ));
    }

    #[test]
    fn test_display() {
        let data = DeploymentData {
            cluster_type: "shared".into(),
            ceip: "true".into(),
            is_proxy_cert: "false".into(),
            ..Default::default()
        };
        let rendered = data.to_string();
        assert!(rendered.starts_with("CLUSTER-TYPE = shared\nCLUSTER-DATA = \nAKO-NAME = "));
        assert!(rendered.ends_with("CEIP = true\nPROXY-CERT = \nPROXY = false"));
    }
}
