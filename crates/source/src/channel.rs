use crate::SampleSource;
use frametimes_core::Sample;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc::{self, error::TryRecvError};
use tracing::{debug, warn};

/// Samples queued between the line reader and the monitor task.
const LINE_QUEUE: usize = 256;

/// Source fed by another task through an `mpsc` channel.
///
/// The queue is consumed oldest-first, one sample per tick, rather than
/// skipping ahead to the most recently queued sample; a piped capture is
/// therefore replayed frame by frame at the tick rate.  When nothing new has
/// arrived the previous sample is repeated (zero before the first one).  The
/// source finishes once every sender is gone and the queue is drained.
#[derive(Debug)]
pub struct ChannelSource {
    rx:   mpsc::Receiver<Sample>,
    last: Sample,
}

impl ChannelSource {
    pub fn new(rx: mpsc::Receiver<Sample>) -> Self {
        Self { rx, last: Sample::default() }
    }
}

impl SampleSource for ChannelSource {
    fn latest(&mut self) -> Option<Sample> {
        match self.rx.try_recv() {
            Ok(sample) => {
                self.last = sample;
                Some(sample)
            }
            Err(TryRecvError::Empty) => Some(self.last),
            Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// Parse one `"cpu gpu"` or `"cpu,gpu"` line.
///
/// Blank lines, `#` comments and anything that is not exactly two numbers
/// yield `None`.
pub fn parse_sample(line: &str) -> Option<Sample> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut fields = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|f| !f.is_empty());

    let cpu = fields.next()?.parse::<f64>().ok()?;
    let gpu = fields.next()?.parse::<f64>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Sample::new(cpu, gpu))
}

/// Spawn a background Tokio task that reads sample lines from `reader` and
/// forwards them through the returned channel.
///
/// Malformed lines are logged and skipped.  The channel closes at end of
/// input or on a read error.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<Sample>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_QUEUE);

    tokio::spawn(async move {
        let mut lines = BufReader::new(reader).lines();
        let mut line_no = 0usize;

        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!("Sample input read failed: {e}");
                    break;
                }
            };
            line_no += 1;

            let Some(sample) = parse_sample(&line) else {
                let trimmed = line.trim();
                if !trimmed.is_empty() && !trimmed.starts_with('#') {
                    warn!("Skipping malformed sample on line {line_no}: {trimmed:?}");
                }
                continue;
            };

            if tx.send(sample).await.is_err() {
                return; // monitor stopped
            }
        }

        debug!("Sample input closed after {line_no} lines");
    });

    rx
}
