//! Template resources and manifest rendering.
//!
//! Resources are looked up in an optional directory first and fall back to the
//! copies compiled into the binary. Rendering uses minijinja with strict
//! undefined handling so a typo in a template fails loudly.

use std::path::PathBuf;

use minijinja::{Environment, UndefinedBehavior};
use thiserror::Error;
use tracing::debug;

use crate::{constants::Paths, deployment::DeploymentData};

const EMBEDDED: &[(&str, &str)] = &[
    (
        Paths::TKG_CLUSTER_14_SPEC_J2,
        include_str!("../resources/tkg_cluster_14_spec.yaml.j2"),
    ),
    (
        Paths::TKG_VMC_CLUSTER_14_SPEC_J2,
        include_str!("../resources/tkg_vmc_cluster_14_spec.yaml.j2"),
    ),
];

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("unknown template resource {0}")]
    UnknownResource(String),

    #[error("could not read template resource {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template render error: {0}")]
    Render(#[from] minijinja::Error),
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ResourceLoader {
    dir: Option<PathBuf>,
}

impl ResourceLoader {
    /// Loader that only serves the embedded resources
    pub fn embedded() -> Self {
        Self::default()
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    pub fn read_resource(&self, name: &str) -> Result<String, TemplateError> {
        if let Some(dir) = &self.dir {
            let path = dir.join(name);
            if path.is_file() {
                debug!("reading template {}", path.display());
                return std::fs::read_to_string(&path)
                    .map_err(|source| TemplateError::Read { path, source });
            }
        }

        EMBEDDED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, body)| body.to_string())
            .ok_or_else(|| TemplateError::UnknownResource(name.to_owned()))
    }
}

pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    /// Render the template carried by `data` with `data` as context
    pub fn render(&self, data: &DeploymentData) -> Result<String, TemplateError> {
        Ok(self.env.render_str(&data.yaml_template, data)?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::cluster::ClusterDeployData;

    #[test]
    fn test_embedded_resources() {
        let loader = ResourceLoader::embedded();
        let tkg = loader.read_resource(Paths::TKG_CLUSTER_14_SPEC_J2).unwrap();
        let vmc = loader
            .read_resource(Paths::TKG_VMC_CLUSTER_14_SPEC_J2)
            .unwrap();
        assert!(tkg.contains("CLUSTER_NAME"));
        assert!(vmc.contains("CLUSTER_NAME"));
        assert_ne!(tkg, vmc);
    }

    #[test]
    fn test_unknown_resource() {
        let err = ResourceLoader::embedded()
            .read_resource("nope.j2")
            .unwrap_err();
        assert!(matches!(err, TemplateError::UnknownResource(n) if n == "nope.j2"));
    }

    #[test]
    fn test_directory_overrides_embedded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(Paths::TKG_CLUSTER_14_SPEC_J2),
            "name: {{ cluster_data.cluster_name }}\n",
        )
        .unwrap();
        let loader = ResourceLoader::with_dir(dir.path());
        assert_eq!(
            loader.read_resource(Paths::TKG_CLUSTER_14_SPEC_J2).unwrap(),
            "name: {{ cluster_data.cluster_name }}\n"
        );
        // not present in the directory, served from the embedded copy
        assert!(loader
            .read_resource(Paths::TKG_VMC_CLUSTER_14_SPEC_J2)
            .unwrap()
            .contains("CLUSTER_NAME"));
    }

    #[test]
    fn test_render_strict_undefined() {
        let renderer = TemplateRenderer::new();
        let mut data = DeploymentData {
            cluster_data: ClusterDeployData {
                cluster_name: "wl-01".into(),
                ..Default::default()
            },
            yaml_template: "name: {{ cluster_data.cluster_name }}\n".into(),
            ..Default::default()
        };
        assert_eq!(renderer.render(&data).unwrap(), "name: wl-01\n");

        data.yaml_template = "name: {{ cluster_data.no_such_field }}".into();
        assert!(matches!(
            renderer.render(&data),
            Err(TemplateError::Render(_))
        ));
    }
}
