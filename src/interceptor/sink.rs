use dyn_clone::{clone_trait_object, DynClone};
use log::Level;
use std::fmt::Debug;
use crate::conf::WireLogConf;

/// Where wire log lines end up
pub trait WireSink: Send + Debug + Sync + DynClone {
    fn line(&self, line: &str);
}

clone_trait_object!(WireSink);

/// Forwards every line to the `log` facade
#[derive(Debug, Clone)]
pub struct LogSink {
    pub level: Level,
    pub target: String,
}

impl From<&WireLogConf> for LogSink {
    fn from(conf: &WireLogConf) -> Self {
        LogSink { level: conf.level, target: conf.target.clone() }
    }
}

impl WireSink for LogSink {
    fn line(&self, line: &str) {
        log::log!(target: self.target.as_str(), self.level, "{}", line)
    }
}
