use crate::cmd::command::CommandError;
use crate::models::component::ComponentKind;
use thiserror::Error;

/// ConfigError: everything that can go wrong while loading the configuration file or checking
/// an operator request against it. Every variant is detectable from its inputs alone.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error(
        "Error finding config file `{path}`. Does it exist? Please create it in $HOME/.k8s-cluster-upgrade-tool/config.yaml if not."
    )]
    ConfigFileNotFound { path: String },
    #[error("Error reading from config file `{path}`: {raw_error_message}.")]
    CannotReadConfigFile { path: String, raw_error_message: String },
    #[error("Error unmarshaling config file `{path}`: {raw_error_message}.")]
    CannotUnmarshalConfigFile { path: String, raw_error_message: String },
    #[error(
        "Mandatory component version of either aws-node, coredns, kube-proxy or cluster-autoscaler not set in config file: `{component}` is missing."
    )]
    MissingComponentVersion { component: ComponentKind },
    #[error(
        "One of the clusterlist elements has either Name, AwsRegion, AwsAccount, AwsNodeObject, ClusterAutoscalerObject, KubeProxyObject, CoreDnsObject missing."
    )]
    InvalidClusterList,
    #[error("Cluster `{cluster_name}` has an empty `{field}` in config file.")]
    InvalidClusterDescriptor { cluster_name: String, field: &'static str },
    #[error("Component version for `{component}` is empty in config file.")]
    EmptyComponentVersion { component: ComponentKind },
    #[error("No awsAccount and awsRegion was found for cluster `{cluster_name}`.")]
    ClusterNotFound { cluster_name: String },
    #[error(
        "Please pass a valid component name from this list [coredns, cluster-autoscaler, kube-proxy, aws-node], got `{component_name}`."
    )]
    InvalidComponentName { component_name: String },
    #[error(
        "{component} component version passed `{requested}` doesn't match the version `{expected}` in config, please check the value in config file."
    )]
    ComponentVersionMismatch {
        component: ComponentKind,
        requested: String,
        expected: String,
    },
    #[error("Invalid imageSection passed `{image_section}`, expected one of [imageTag, imagePrefix].")]
    InvalidImageSection { image_section: String },
    #[error("Cannot find an image reference of the form `prefix:tag` in `{raw_output}`.")]
    InvalidImageReference { raw_output: String },
}

/// UpgradeError: failure while fetching the deployed state of a component from a live cluster.
#[derive(Error, Debug)]
pub enum UpgradeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Cannot get `{component}` image on cluster `{cluster_name}`: {source}")]
    CannotGetComponentImage {
        component: ComponentKind,
        cluster_name: String,
        #[source]
        source: CommandError,
    },
}
