use crate::core::actions::scan_frame::FrameStats;
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameData {
    pub generation: u64,
    pub stats: FrameStats,
    pub render_duration: Duration,
}
