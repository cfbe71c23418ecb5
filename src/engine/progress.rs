use log::{debug, info};

/// Observer for a running evolution.
pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_score: i64);
}

/// Callback that traces generations through the `log` facade.
pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        debug!("Generation {} starting", generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, best_score: i64) {
        info!(
            "Generation {} complete, best score {}",
            generation + 1,
            best_score
        );
    }
}

/// Progress event for channel consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete { generation: usize, best_score: i64 },
}

/// Callback that forwards events over an mpsc channel, for front ends that
/// poll a run from another thread. Send errors are ignored: a dropped
/// receiver never aborts the run.
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, generation: usize, best_score: i64) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            best_score,
        });
    }
}
