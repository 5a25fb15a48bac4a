use super::*;

pub fn install_namespace_listener(
    _host_global: &str,
    _callback: NamespaceCallback,
) -> Result<(), HostError> {
    Err(HostError::WindowUnavailable)
}

pub fn location_search() -> Option<String> {
    None
}
