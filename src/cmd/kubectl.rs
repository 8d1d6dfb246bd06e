use std::path::Path;
use std::time::Duration;

use crate::cmd::command::{CommandError, ToolCommand};
use crate::constants::{KUBE_SYSTEM_NAMESPACE, KUBECONFIG};
use crate::models::configuration::K8sObject;

/// Image of the first container of the pod template. The quotes are printed as is by kubectl.
pub const COMPONENT_IMAGE_JSONPATH: &str = "-o=jsonpath='{$.spec.template.spec.containers[:1].image}'";

pub fn component_image_args(object: &K8sObject) -> Vec<&str> {
    vec![
        "get",
        object.kind.as_str(),
        object.name.as_str(),
        "-n",
        KUBE_SYSTEM_NAMESPACE,
        COMPONENT_IMAGE_JSONPATH,
    ]
}

/// Returns the raw kubectl output holding the image of a kube-system component.
pub fn kubectl_exec_get_component_image<P>(
    kubernetes_config: P,
    object: &K8sObject,
    envs: &[(&str, &str)],
    timeout: Duration,
) -> Result<String, CommandError>
where
    P: AsRef<Path>,
{
    let kubernetes_config = kubernetes_config.as_ref().to_string_lossy().to_string();
    let mut _envs = Vec::with_capacity(envs.len() + 1);
    _envs.push((KUBECONFIG, kubernetes_config.as_str()));
    _envs.extend_from_slice(envs);

    let mut output_vec: Vec<String> = Vec::with_capacity(1);
    let cmd = ToolCommand::new("kubectl", &component_image_args(object), &_envs);
    cmd.exec_with_timeout(
        &mut |line| output_vec.push(line),
        &mut |line| error!("{}", line),
        timeout,
    )?;

    Ok(output_vec.join(""))
}
