//! A host rendition of the dual core tuner. A producer thread acquires
//! windows and estimates their frequency, a consumer thread classifies the
//! estimates. The two are connected by a one slot channel of 32-bit words.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, info, warn};
use micro_tuner::handoff::FrequencyWord;
use micro_tuner::interference::Estimator;
use micro_tuner::note::{classify, NoteReading};

use crate::error::{HelperError, Result};
use crate::sampler::Sampler;

/// Sending half of the frequency channel. Blocks while the previous
/// estimate has not been received.
pub struct FrequencySender(Sender<u32>);

/// Receiving half of the frequency channel. Estimates arrive in the order
/// they were sent.
pub struct FrequencyReceiver(Receiver<u32>);

pub fn frequency_channel() -> (FrequencySender, FrequencyReceiver) {
    let (sender, receiver) = bounded(1);
    (FrequencySender(sender), FrequencyReceiver(receiver))
}

impl FrequencySender {
    pub fn send(&self, frequency: f32) -> Result<()> {
        self.0
            .send(FrequencyWord::from(frequency).into())
            .map_err(|_| HelperError::Disconnected)
    }

    /// Sends without blocking. Returns false if the slot is occupied.
    pub fn try_send(&self, frequency: f32) -> Result<bool> {
        match self.0.try_send(FrequencyWord::from(frequency).into()) {
            Ok(()) => Ok(true),
            Err(crossbeam_channel::TrySendError::Full(_)) => Ok(false),
            Err(crossbeam_channel::TrySendError::Disconnected(_)) => Err(HelperError::Disconnected),
        }
    }
}

impl FrequencyReceiver {
    pub fn recv(&self) -> Result<f32> {
        self.0
            .recv()
            .map(|word| FrequencyWord::from(word).frequency())
            .map_err(|_| HelperError::Disconnected)
    }

    /// Iterates over received estimates until the sender is dropped.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.0.iter().map(|word| FrequencyWord::from(word).frequency())
    }
}

/// What the consumer makes of one estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TunerReport {
    pub frequency: f32,
    /// `None` if the frequency could not be matched to a note.
    pub reading: Option<NoteReading>,
}

/// Estimates the frequency of every window the sampler delivers and sends
/// it. Returns the number of processed windows once the sampler runs dry.
pub fn produce<I: Iterator<Item = u8>>(
    sampler: &mut Sampler<I>,
    sender: &FrequencySender,
) -> Result<usize> {
    let mut estimator = Estimator::new();
    let mut window_count = 0;
    while let Some(window) = sampler.acquire() {
        let estimate = estimator.process(&window[..]);
        // The window can be refilled from here on.
        drop(window);
        if estimate.is_fallback() {
            debug!("No peaks found, falling back to {} Hz", estimate.frequency);
        }
        sender.send(estimate.frequency)?;
        window_count += 1;
    }
    Ok(window_count)
}

/// Receives estimates until the sender hangs up, passing a report for each
/// to `handler`.
pub fn consume<F>(receiver: &FrequencyReceiver, mut handler: F)
where
    F: FnMut(TunerReport),
{
    for frequency in receiver.iter() {
        let reading = classify(frequency);
        match &reading {
            Some(reading) => info!(
                "{:<2} {:+6.1} cents {:?} | {:.2} Hz",
                reading.note.name(),
                reading.cents_offset(),
                reading.indicator,
                frequency
            ),
            None => warn!("Could not classify {} Hz", frequency),
        }
        handler(TunerReport { frequency, reading });
    }
}

/// Runs producer and consumer on separate threads until the sampler runs
/// dry, and returns the reports in arrival order.
pub fn run<I>(mut sampler: Sampler<I>) -> Result<Vec<TunerReport>>
where
    I: Iterator<Item = u8> + Send + 'static,
{
    let (sender, receiver) = frequency_channel();
    let producer = thread::spawn(move || produce(&mut sampler, &sender));
    let consumer = thread::spawn(move || {
        let mut reports = vec![];
        consume(&receiver, |report| reports.push(report));
        reports
    });
    join_tuner_threads(producer, consumer)
}

// Both threads are joined before reporting. A consumer panic makes the
// producer fail with `Disconnected`, so the panic is reported first.
fn join_tuner_threads(
    producer: JoinHandle<Result<usize>>,
    consumer: JoinHandle<Vec<TunerReport>>,
) -> Result<Vec<TunerReport>> {
    let produced = producer.join();
    let consumed = consumer.join();

    let reports = consumed.map_err(|_| HelperError::ThreadPanicked("consumer"))?;
    let window_count = produced.map_err(|_| HelperError::ThreadPanicked("producer"))??;
    debug!(
        "Processed {} windows, received {} reports",
        window_count,
        reports.len()
    );
    Ok(reports)
}
