use k8s_cluster_upgrade_tool::config;
use k8s_cluster_upgrade_tool::errors::ConfigError;
use k8s_cluster_upgrade_tool::logger;
use k8s_cluster_upgrade_tool::models::component::ComponentKind;
use k8s_cluster_upgrade_tool::models::configuration::Configuration;
use k8s_cluster_upgrade_tool::models::image::extract_image_section;
use k8s_cluster_upgrade_tool::upgrade::component_upgrade_status;
use std::fs;
use tempfile::TempDir;

const CONFIG: &str = r#"---
components:
  aws-node: "aws-node-version"
  cluster-autoscaler: "cluster-autoscaler-version"
  coredns: "core-dns-version"
  kube-proxy: "kube-proxy-version"
clusterlist:
- Name: "cluster1"
  AwsRegion: "region1"
  AwsAccount: "account1"
  AwsNodeObject:
    type: "daemonset"
    name: "aws-node"
  ClusterAutoscalerObject:
    type: "deployment"
    name: "cluster-autoscaler"
  CoreDnsObject:
    type: "deployment"
    name: "coredns"
  KubeProxyObject:
    type: "daemonset"
    name: "kube-proxy"
- Name: "cluster2"
  AwsRegion: "region2"
  AwsAccount: "account2"
  AwsNodeObject:
    type: "daemonset"
    name: "aws-node"
  ClusterAutoscalerObject:
    type: "deployment"
    name: "cluster-autoscaler"
  CoreDnsObject:
    type: "deployment"
    name: "coredns"
  KubeProxyObject:
    type: "daemonset"
    name: "kube-proxy"
"#;

fn load(content: &str) -> (TempDir, Result<Configuration, ConfigError>) {
    let dir = TempDir::new().expect("cannot create temp dir");
    fs::write(dir.path().join("config.yaml"), content).expect("cannot write temp config file");
    let result = config::read("config", "yaml", dir.path().to_str().expect("utf8 temp dir"));

    (dir, result)
}

#[test]
fn two_clusters_end_to_end() {
    logger::init();

    // setup:
    let (_dir, result) = load(CONFIG);
    let configuration = result.expect("config file is valid");

    // execute & verify:
    assert!(configuration.is_cluster_list_valid());
    assert!(configuration.are_component_versions_valid());
    assert_eq!(Ok(()), configuration.validate());

    assert!(configuration.cluster_exists("cluster1"));
    assert!(!configuration.cluster_exists("cluster3"));
    assert_eq!(Ok(("account1", "region1")), configuration.aws_account_and_region("cluster1"));
    assert_eq!(
        Err(ConfigError::ClusterNotFound {
            cluster_name: "cluster3".to_string()
        }),
        configuration.aws_account_and_region("cluster3")
    );

    assert_eq!(
        Ok(()),
        configuration.check_component_version("kube-proxy", "kube-proxy-version")
    );
    assert!(matches!(
        configuration.check_component_version("coredns", "core-dns-version-2"),
        Err(ConfigError::ComponentVersionMismatch {
            component: ComponentKind::CoreDns,
            ..
        })
    ));
}

#[test]
fn deployed_image_is_compared_with_config() {
    // setup:
    let (_dir, result) = load(CONFIG);
    let configuration = result.expect("config file is valid");
    let kubectl_output = "'my-hash.dkr.ecr.eu-west-1.amazonaws.com/amazon-k8s-cni:my-version'";

    // execute:
    let tag = extract_image_section(kubectl_output, "imageTag");
    let prefix = extract_image_section(kubectl_output, "imagePrefix");
    let status = component_upgrade_status(&configuration, "cluster2", ComponentKind::AwsNode, kubectl_output)
        .expect("cluster exists and output is an image");

    // verify:
    assert_eq!(Ok("my-version".to_string()), tag);
    assert_eq!(
        Ok("my-hash.dkr.ecr.eu-west-1.amazonaws.com/amazon-k8s-cni".to_string()),
        prefix
    );
    assert!(status.is_upgrade_required());
    assert_eq!("aws-node-version", status.requested_version);
    assert_eq!(
        "my-hash.dkr.ecr.eu-west-1.amazonaws.com/amazon-k8s-cni:aws-node-version",
        status.requested_image()
    );
}

#[test]
fn incomplete_cluster_rejects_whole_config() {
    // setup:
    let content = CONFIG.replacen("AwsAccount: \"account2\"", "AwsAccount: \"\"", 1);

    // execute:
    let (_dir, result) = load(&content);

    // verify:
    assert_eq!(Err(ConfigError::InvalidClusterList), result);
}
