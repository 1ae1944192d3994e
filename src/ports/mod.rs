/// Ports module defining interfaces for hexagonal architecture
///
/// The exporter is driven only by the CLI, so only outbound ports
/// (driven ports - infrastructure interfaces) are declared.
pub mod outbound;
