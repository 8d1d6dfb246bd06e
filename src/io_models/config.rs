use crate::errors::ConfigError;
use crate::models::component::ComponentKind;
use crate::models::configuration::{ClusterConfiguration, ComponentVersions, Configuration, K8sObject};
use serde::Deserializer;
use serde::de::Error as _;
use serde_derive::Deserialize;
use strum::IntoEnumIterator;

/// Configuration file as written by operators. Missing cluster keys decode as empty strings
/// so they are reported by validation, missing component keys decode as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigurationFile {
    #[serde(default)]
    pub components: ComponentVersionsFile,
    #[serde(default, rename = "clusterlist")]
    pub cluster_list: Vec<ClusterListEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ComponentVersionsFile {
    #[serde(default, rename = "aws-node", deserialize_with = "optional_scalar_as_string")]
    pub aws_node: Option<String>,
    #[serde(default, rename = "cluster-autoscaler", deserialize_with = "optional_scalar_as_string")]
    pub cluster_autoscaler: Option<String>,
    #[serde(default, rename = "coredns", deserialize_with = "optional_scalar_as_string")]
    pub core_dns: Option<String>,
    #[serde(default, rename = "kube-proxy", deserialize_with = "optional_scalar_as_string")]
    pub kube_proxy: Option<String>,
}

impl ComponentVersionsFile {
    fn version(&self, component: ComponentKind) -> Option<&String> {
        match component {
            ComponentKind::AwsNode => self.aws_node.as_ref(),
            ComponentKind::ClusterAutoscaler => self.cluster_autoscaler.as_ref(),
            ComponentKind::CoreDns => self.core_dns.as_ref(),
            ComponentKind::KubeProxy => self.kube_proxy.as_ref(),
        }
    }

    pub fn to_component_versions_domain(self) -> Result<ComponentVersions, ConfigError> {
        if let Some(component) = ComponentKind::iter().find(|component| self.version(*component).is_none()) {
            return Err(ConfigError::MissingComponentVersion { component });
        }

        Ok(ComponentVersions {
            aws_node: self.aws_node.unwrap_or_default(),
            cluster_autoscaler: self.cluster_autoscaler.unwrap_or_default(),
            core_dns: self.core_dns.unwrap_or_default(),
            kube_proxy: self.kube_proxy.unwrap_or_default(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ClusterListEntry {
    #[serde(default, rename = "Name", deserialize_with = "scalar_as_string")]
    pub name: String,
    #[serde(default, rename = "AwsRegion", deserialize_with = "scalar_as_string")]
    pub aws_region: String,
    #[serde(default, rename = "AwsAccount", deserialize_with = "scalar_as_string")]
    pub aws_account: String,
    #[serde(default, rename = "AwsNodeObject")]
    pub aws_node_object: K8sObjectEntry,
    #[serde(default, rename = "ClusterAutoscalerObject")]
    pub cluster_autoscaler_object: K8sObjectEntry,
    #[serde(default, rename = "CoreDnsObject")]
    pub core_dns_object: K8sObjectEntry,
    #[serde(default, rename = "KubeProxyObject")]
    pub kube_proxy_object: K8sObjectEntry,
}

impl ClusterListEntry {
    pub fn to_cluster_configuration_domain(self) -> ClusterConfiguration {
        ClusterConfiguration {
            name: self.name,
            aws_region: self.aws_region,
            aws_account: self.aws_account,
            aws_node_object: self.aws_node_object.to_k8s_object_domain(),
            cluster_autoscaler_object: self.cluster_autoscaler_object.to_k8s_object_domain(),
            core_dns_object: self.core_dns_object.to_k8s_object_domain(),
            kube_proxy_object: self.kube_proxy_object.to_k8s_object_domain(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct K8sObjectEntry {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub name: String,
    #[serde(default, rename = "type", deserialize_with = "scalar_as_string")]
    pub kind: String,
}

impl K8sObjectEntry {
    pub fn to_k8s_object_domain(self) -> K8sObject {
        K8sObject {
            name: self.name,
            kind: self.kind,
        }
    }
}

impl ConfigurationFile {
    /// Converts the file content into the domain configuration. Only the presence of the
    /// component keys is checked here: cluster list completeness is a domain concern.
    pub fn to_configuration_domain(self) -> Result<Configuration, ConfigError> {
        let components = self.components.to_component_versions_domain()?;
        let cluster_list = self
            .cluster_list
            .into_iter()
            .map(ClusterListEntry::to_cluster_configuration_domain)
            .collect();

        Ok(Configuration::new(components, cluster_list))
    }
}

/// Operators write account ids and versions unquoted (`AwsAccount: 123456789012`,
/// `kube-proxy: 1.29`): any YAML scalar is read as its string form.
fn optional_scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match <serde_yaml::Value as serde::Deserialize>::deserialize(deserializer)? {
        serde_yaml::Value::Null => Ok(None),
        serde_yaml::Value::String(value) => Ok(Some(value)),
        serde_yaml::Value::Number(value) => Ok(Some(value.to_string())),
        serde_yaml::Value::Bool(value) => Ok(Some(value.to_string())),
        other => Err(D::Error::custom(format!(
            "invalid type: {other:?}, expected a string, a number or a boolean"
        ))),
    }
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_scalar_as_string(deserializer)?.unwrap_or_default())
}
