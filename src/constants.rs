pub const KUBECONFIG: &str = "KUBECONFIG";
pub const KUBE_SYSTEM_NAMESPACE: &str = "kube-system";

pub const CONFIG_FILE_NAME: &str = "config";
pub const CONFIG_FILE_TYPE: &str = "yaml";
pub const CONFIG_FILE_PATH: &str = "$HOME/.k8s-cluster-upgrade-tool";
