use crate::errors::ConfigError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum_macros::EnumIter;

/// Workload kinds tracked by the version policy. The string form is the key used in the
/// `components` section of the configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum ComponentKind {
    AwsNode,
    ClusterAutoscaler,
    CoreDns,
    KubeProxy,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::AwsNode => "aws-node",
            ComponentKind::ClusterAutoscaler => "cluster-autoscaler",
            ComponentKind::CoreDns => "coredns",
            ComponentKind::KubeProxy => "kube-proxy",
        }
    }
}

impl Display for ComponentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aws-node" => Ok(ComponentKind::AwsNode),
            "cluster-autoscaler" => Ok(ComponentKind::ClusterAutoscaler),
            "coredns" => Ok(ComponentKind::CoreDns),
            "kube-proxy" => Ok(ComponentKind::KubeProxy),
            _ => Err(ConfigError::InvalidComponentName {
                component_name: s.to_string(),
            }),
        }
    }
}
