use std::collections::VecDeque;

/// Number of frame times averaged for the readout
pub const FPS_HISTORY_LEN: usize = 60;

/// Rolling frames-per-second estimate over the last `FPS_HISTORY_LEN` frames
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    history: VecDeque<f32>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            history: VecDeque::with_capacity(FPS_HISTORY_LEN + 1),
        }
    }

    /// Push one frame time in seconds
    pub fn record(&mut self, frame_time: f32) {
        self.history.push_back(frame_time);
        if self.history.len() > FPS_HISTORY_LEN {
            self.history.pop_front();
        }
    }

    pub fn average_frame_time(&self) -> f32 {
        if self.history.is_empty() {
            return 0.0;
        }
        self.history.iter().sum::<f32>() / self.history.len() as f32
    }

    pub fn fps(&self) -> f32 {
        if self.history.is_empty() {
            return 0.0;
        }
        let average = self.average_frame_time();
        1.0 / if average > 0.0 { average } else { 0.001 }
    }

    pub fn sample_count(&self) -> usize {
        self.history.len()
    }
}
