use serde::Serialize;

/// Self-describing registration surface a host reads at plugin-load time.
///
/// Deliberately independent of any particular host API: the host calls the
/// widget's init entry point once and may render `name`/`icon` however it
/// likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PluginDescriptor {
    pub name: &'static str,
    pub icon: &'static str,
}
