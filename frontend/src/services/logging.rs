/// Console logger with a component tag, for degraded-read paths where a
/// failure is recorded but not surfaced to the user.
pub struct Logger;

impl Logger {
    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(format!("[{}] {}", component, message));
    }
}
