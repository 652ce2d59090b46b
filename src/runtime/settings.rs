use crate::config;

/// Load settings, falling back to defaults on any problem.
///
/// The logger is not up yet when this runs, so problems come back as
/// messages for the caller to log.
pub fn load_settings() -> (config::Settings, Vec<String>) {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                (
                    config::Settings::default(),
                    vec![format!("invalid config, using defaults: {msg}")],
                )
            } else {
                (s, Vec::new())
            }
        }
        // Config is optional; failures should not prevent the app from starting.
        Err(e) => (
            config::Settings::default(),
            vec![format!("failed to load config, using defaults: {e}")],
        ),
    }
}
