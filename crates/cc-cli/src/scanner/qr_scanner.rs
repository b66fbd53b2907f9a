use crate::scanner::{
    Camera, CameraError, CameraLease, CameraResult, FrameSource, QrDecoder, ScannerState,
};

use cc_core::extract_customer_id;
use log::{debug, info, trace, warn};
use tokio::sync::watch;

/// How a scan session ended.
#[derive(Debug)]
pub enum ScanOutcome {
    /// A customer code was read; the camera is already released.
    Decoded { customer_id: String },
    /// Stopped by the operator, by teardown, or because the device ran dry.
    Stopped,
    /// Permission or start-up failure. Nothing was scanned.
    Failed(CameraError),
}

enum ScanEvent<F> {
    StopSignal { sender_alive: bool },
    Frame(CameraResult<Option<F>>),
}

struct StateTracker {
    tx: watch::Sender<ScannerState>,
    trail: Vec<ScannerState>,
}

impl StateTracker {
    fn enter(&mut self, state: ScannerState) {
        debug!("Scanner -> {state}");
        self.trail.push(state);
        self.tx.send_replace(state);
    }
}

/// One scan session's view of the state machine.
///
/// A session dropped before [`ScanSession::finish`] (the scan future was dropped
/// mid-flight) ends as `Stopped -> Idle`.
struct ScanSession<'a> {
    state: &'a mut StateTracker,
    finished: bool,
}

impl<'a> ScanSession<'a> {
    fn begin(state: &'a mut StateTracker) -> Self {
        state.enter(ScannerState::RequestingCameraPermission);
        Self {
            state,
            finished: false,
        }
    }

    fn enter(&mut self, state: ScannerState) {
        self.state.enter(state);
    }

    fn finish(mut self, last: ScannerState) {
        self.state.enter(last);
        self.state.enter(ScannerState::Idle);
        self.finished = true;
    }
}

impl Drop for ScanSession<'_> {
    fn drop(&mut self) {
        if !self.finished {
            debug!("Scan session torn down");
            self.state.enter(ScannerState::Stopped);
            self.state.enter(ScannerState::Idle);
        }
    }
}

/// Camera + decoder driven through the scan state machine.
pub struct QrScanner<C, D> {
    camera: C,
    decoder: D,
    state: StateTracker,
}

impl<C, D> QrScanner<C, D>
where
    C: Camera,
    D: QrDecoder<<C::Stream as FrameSource>::Frame>,
{
    pub fn new(camera: C, decoder: D) -> Self {
        let (tx, _rx) = watch::channel(ScannerState::Idle);
        Self {
            camera,
            decoder,
            state: StateTracker {
                tx,
                trail: Vec::new(),
            },
        }
    }

    pub fn state(&self) -> ScannerState {
        *self.state.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ScannerState> {
        self.state.tx.subscribe()
    }

    /// States visited by the most recent scan, in order.
    pub fn transitions(&self) -> &[ScannerState] {
        &self.state.trail
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Run one scan session until a customer code is decoded, `stop` turns true
    /// (or its sender is dropped), or the camera fails.
    ///
    /// The ledger is not touched here; the caller deducts for the decoded customer.
    pub async fn scan(&mut self, mut stop: watch::Receiver<bool>) -> ScanOutcome {
        self.state.trail.clear();
        if *stop.borrow_and_update() {
            return ScanOutcome::Stopped;
        }
        // Declared before the lease so the camera is released first on teardown.
        let mut session = ScanSession::begin(&mut self.state);

        if let Err(e) = Self::probe_permission(&mut self.camera).await {
            warn!("Camera permission check failed: {e}");
            session.finish(ScannerState::PermissionDenied);
            return ScanOutcome::Failed(e);
        }

        let mut lease = match CameraLease::acquire(&mut self.camera).await {
            Ok(lease) => lease,
            Err(e) => {
                warn!("QR scanner failed to start: {e}");
                session.finish(ScannerState::Stopped);
                return ScanOutcome::Failed(CameraError::start_failed(e.detail()));
            }
        };

        session.enter(ScannerState::Scanning);
        info!("Scanning for customer QR codes");

        loop {
            let event = tokio::select! {
                biased;
                changed = stop.changed() => ScanEvent::StopSignal { sender_alive: changed.is_ok() },
                frame = lease.next_frame() => ScanEvent::Frame(frame),
            };

            match event {
                ScanEvent::StopSignal { sender_alive } => {
                    if sender_alive && !*stop.borrow() {
                        continue;
                    }
                    lease.release();
                    info!("Scanning stopped");
                    session.finish(ScannerState::Stopped);
                    return ScanOutcome::Stopped;
                }
                ScanEvent::Frame(Ok(Some(frame))) => {
                    let Some(payload) = self.decoder.decode(&frame) else {
                        continue;
                    };
                    let Some(customer_id) = extract_customer_id(&payload).map(str::to_string)
                    else {
                        trace!("Decoded payload without a customer id: {payload}");
                        continue;
                    };

                    lease.release();
                    info!("Decoded customer {customer_id}");
                    session.finish(ScannerState::Decoded);
                    return ScanOutcome::Decoded { customer_id };
                }
                ScanEvent::Frame(Ok(None)) => {
                    lease.release();
                    info!("Camera stream ended");
                    session.finish(ScannerState::Stopped);
                    return ScanOutcome::Stopped;
                }
                ScanEvent::Frame(Err(e)) => {
                    lease.release();
                    warn!("Camera stream failed: {e}");
                    session.finish(ScannerState::Stopped);
                    return ScanOutcome::Failed(e);
                }
            }
        }
    }

    /// Acquire-test-release, so a denied permission is reported before the scanner
    /// commits to its own stream.
    async fn probe_permission(camera: &mut C) -> CameraResult<()> {
        if !camera.is_supported() {
            return Err(CameraError::unsupported());
        }
        let probe = CameraLease::acquire(camera).await?;
        probe.release();
        Ok(())
    }
}
