use log::Level;

pub mod endpoint;

pub const DEFAULT_TARGET: &str = "wiretap::wire";

/// What to do when a body cannot be fully read for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureFailure {
    Propagate,  // return the I/O error to the caller right away
    Defer,      // log what was read, hand the error to whoever consumes the body
}

impl Default for CaptureFailure {
    fn default() -> Self {
        CaptureFailure::Propagate
    }
}

#[derive(Debug, Clone)]
pub struct WireLogConf {
    /// Capture and log full bodies, not only request line, status and headers
    pub log_wire: bool,
    pub level: Level,
    pub target: String,
    pub on_capture_failure: CaptureFailure,
}

impl WireLogConf {
    pub fn new(log_wire: bool) -> Self {
        WireLogConf {
            log_wire,
            level: Level::Info,
            target: DEFAULT_TARGET.to_string(),
            on_capture_failure: CaptureFailure::default(),
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    pub fn on_capture_failure(mut self, policy: CaptureFailure) -> Self {
        self.on_capture_failure = policy;
        self
    }
}

impl Default for WireLogConf {
    fn default() -> Self {
        WireLogConf::new(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::conf::{WireLogConf, CaptureFailure, DEFAULT_TARGET};
    use log::Level;

    #[test]
    fn defaults_to_metadata_only() {
        let conf = WireLogConf::default();
        assert!(!conf.log_wire);
        assert_eq!(Level::Info, conf.level);
        assert_eq!(DEFAULT_TARGET, conf.target);
        assert_eq!(CaptureFailure::Propagate, conf.on_capture_failure);
    }

    #[test]
    fn builder_overrides() {
        let conf = WireLogConf::new(true)
            .with_level(Level::Debug)
            .with_target("disk::rest")
            .on_capture_failure(CaptureFailure::Defer);
        assert!(conf.log_wire);
        assert_eq!(Level::Debug, conf.level);
        assert_eq!("disk::rest", conf.target);
        assert_eq!(CaptureFailure::Defer, conf.on_capture_failure);
    }

}
