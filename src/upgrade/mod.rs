use crate::cmd::kubectl::kubectl_exec_get_component_image;
use crate::errors::{ConfigError, UpgradeError};
use crate::models::component::ComponentKind;
use crate::models::configuration::Configuration;
use crate::models::image::ImageReference;
use std::path::Path;
use std::time::Duration;

/// Deployed vs requested version of one component on one cluster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentUpgradeStatus {
    pub component: ComponentKind,
    pub cluster_name: String,
    pub image_prefix: String,
    pub deployed_version: String,
    pub requested_version: String,
}

impl ComponentUpgradeStatus {
    pub fn is_upgrade_required(&self) -> bool {
        self.deployed_version != self.requested_version
    }

    /// Image the component should run once upgraded, keeping the deployed registry and repository.
    pub fn requested_image(&self) -> String {
        format!("{}:{}", self.image_prefix, self.requested_version)
    }
}

/// Compares the image found in `kubectl_output` with the version configured for `component`.
pub fn component_upgrade_status(
    configuration: &Configuration,
    cluster_name: &str,
    component: ComponentKind,
    kubectl_output: &str,
) -> Result<ComponentUpgradeStatus, ConfigError> {
    if !configuration.cluster_exists(cluster_name) {
        return Err(ConfigError::ClusterNotFound {
            cluster_name: cluster_name.to_string(),
        });
    }

    let image = ImageReference::parse(kubectl_output)?;

    Ok(ComponentUpgradeStatus {
        component,
        cluster_name: cluster_name.to_string(),
        image_prefix: image.prefix().to_string(),
        deployed_version: image.tag().to_string(),
        requested_version: configuration.components.version(component).to_string(),
    })
}

/// Gate run before upgrading a single component: the version asked by the operator must be
/// the one declared in config.
pub fn check_requested_upgrade(
    configuration: &Configuration,
    component_name: &str,
    requested_version: &str,
) -> Result<(), ConfigError> {
    match configuration.check_component_version(component_name, requested_version) {
        Ok(()) => {
            info!(
                "{} version `{}` matches the version in config",
                component_name, requested_version
            );
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            Err(e)
        }
    }
}

/// Fetches the deployed image of `component` on the cluster and compares it with config.
pub fn fetch_component_upgrade_status<P>(
    configuration: &Configuration,
    cluster_name: &str,
    component: ComponentKind,
    kubernetes_config: P,
    envs: &[(&str, &str)],
    timeout: Duration,
) -> Result<ComponentUpgradeStatus, UpgradeError>
where
    P: AsRef<Path>,
{
    let cluster = configuration
        .cluster(cluster_name)
        .ok_or_else(|| ConfigError::ClusterNotFound {
            cluster_name: cluster_name.to_string(),
        })?;

    let output = kubectl_exec_get_component_image(
        kubernetes_config,
        cluster.workload_object(component),
        envs,
        timeout,
    )
    .map_err(|source| UpgradeError::CannotGetComponentImage {
        component,
        cluster_name: cluster_name.to_string(),
        source,
    })?;

    let status = component_upgrade_status(configuration, cluster_name, component, &output)?;
    info!(
        "{} on cluster {}: deployed `{}`, requested `{}`",
        component, cluster_name, status.deployed_version, status.requested_version
    );

    Ok(status)
}
