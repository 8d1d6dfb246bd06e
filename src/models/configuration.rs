use crate::errors::ConfigError;
use crate::models::component::ComponentKind;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Kubernetes object backing a component inside a cluster, e.g. the `aws-node` daemonset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct K8sObject {
    pub name: String,
    /// Resource type as understood by kubectl: `daemonset`, `deployment`.
    pub kind: String,
}

impl K8sObject {
    pub fn new(name: &str, kind: &str) -> Self {
        K8sObject {
            name: name.to_string(),
            kind: kind.to_string(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.kind.is_empty()
    }
}

/// One managed EKS cluster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClusterConfiguration {
    pub name: String,
    pub aws_region: String,
    pub aws_account: String,
    pub aws_node_object: K8sObject,
    pub cluster_autoscaler_object: K8sObject,
    pub core_dns_object: K8sObject,
    pub kube_proxy_object: K8sObject,
}

impl ClusterConfiguration {
    pub fn workload_object(&self, component: ComponentKind) -> &K8sObject {
        match component {
            ComponentKind::AwsNode => &self.aws_node_object,
            ComponentKind::ClusterAutoscaler => &self.cluster_autoscaler_object,
            ComponentKind::CoreDns => &self.core_dns_object,
            ComponentKind::KubeProxy => &self.kube_proxy_object,
        }
    }

    /// Returns the config file key of the first empty field, if any.
    pub fn first_empty_field(&self) -> Option<&'static str> {
        if self.name.is_empty() {
            return Some("Name");
        }
        if self.aws_region.is_empty() {
            return Some("AwsRegion");
        }
        if self.aws_account.is_empty() {
            return Some("AwsAccount");
        }

        ComponentKind::iter()
            .find(|component| !self.workload_object(*component).is_complete())
            .map(workload_object_field)
    }

    pub fn is_valid(&self) -> bool {
        self.first_empty_field().is_none()
    }
}

fn workload_object_field(component: ComponentKind) -> &'static str {
    match component {
        ComponentKind::AwsNode => "AwsNodeObject",
        ComponentKind::ClusterAutoscaler => "ClusterAutoscalerObject",
        ComponentKind::CoreDns => "CoreDnsObject",
        ComponentKind::KubeProxy => "KubeProxyObject",
    }
}

/// Fleet wide target version of each component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentVersions {
    pub aws_node: String,
    pub cluster_autoscaler: String,
    pub core_dns: String,
    pub kube_proxy: String,
}

impl ComponentVersions {
    pub fn version(&self, component: ComponentKind) -> &str {
        match component {
            ComponentKind::AwsNode => &self.aws_node,
            ComponentKind::ClusterAutoscaler => &self.cluster_autoscaler,
            ComponentKind::CoreDns => &self.core_dns,
            ComponentKind::KubeProxy => &self.kube_proxy,
        }
    }
}

/// Decoded configuration file. Built once, then only read: every lookup borrows it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Configuration {
    pub components: ComponentVersions,
    pub cluster_list: Vec<ClusterConfiguration>,
}

impl Configuration {
    pub fn new(components: ComponentVersions, cluster_list: Vec<ClusterConfiguration>) -> Self {
        Configuration {
            components,
            cluster_list,
        }
    }

    /// True only if every cluster of the list has all its fields set. A single incomplete
    /// cluster invalidates the whole list.
    pub fn is_cluster_list_valid(&self) -> bool {
        self.cluster_list.iter().all(ClusterConfiguration::is_valid)
    }

    /// True only if the four component versions are set, whatever their value.
    pub fn are_component_versions_valid(&self) -> bool {
        ComponentKind::iter().all(|component| !self.components.version(component).is_empty())
    }

    /// Same checks as `are_component_versions_valid` and `is_cluster_list_valid`, reporting
    /// the first offending component or cluster field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(component) =
            ComponentKind::iter().find(|component| self.components.version(*component).is_empty())
        {
            return Err(ConfigError::EmptyComponentVersion { component });
        }

        for cluster in &self.cluster_list {
            if let Some(field) = cluster.first_empty_field() {
                return Err(ConfigError::InvalidClusterDescriptor {
                    cluster_name: cluster.name.clone(),
                    field,
                });
            }
        }

        Ok(())
    }

    /// First cluster of the list with this exact name.
    pub fn cluster(&self, cluster_name: &str) -> Option<&ClusterConfiguration> {
        self.cluster_list.iter().find(|cluster| cluster.name == cluster_name)
    }

    pub fn cluster_exists(&self, cluster_name: &str) -> bool {
        self.cluster(cluster_name).is_some()
    }

    /// Returns `(aws_account, aws_region)` of the cluster.
    pub fn aws_account_and_region(&self, cluster_name: &str) -> Result<(&str, &str), ConfigError> {
        match self.cluster(cluster_name) {
            Some(cluster) => Ok((cluster.aws_account.as_str(), cluster.aws_region.as_str())),
            None => Err(ConfigError::ClusterNotFound {
                cluster_name: cluster_name.to_string(),
            }),
        }
    }

    /// Checks the version an operator wants to apply against the one declared in config.
    /// Comparison is byte for byte: no trimming, no case folding, no semver.
    pub fn check_component_version(&self, component_name: &str, version: &str) -> Result<(), ConfigError> {
        let component = ComponentKind::from_str(component_name)?;
        let expected = self.components.version(component);

        if version != expected {
            return Err(ConfigError::ComponentVersionMismatch {
                component,
                requested: version.to_string(),
                expected: expected.to_string(),
            });
        }

        Ok(())
    }
}
