//! Line-oriented scanner hardware: a handheld QR reader in keyboard mode, or any
//! device/pipe that emits one decoded payload per line.

use crate::scanner::{Camera, CameraError, CameraResult, FrameSource, QrDecoder};

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

type BoxedReader = Box<dyn AsyncRead + Send + Unpin>;
type LineReader = Lines<BufReader<BoxedReader>>;

/// Reader handed back on release, so lines buffered by one session are seen by the next.
type Parking = Arc<Mutex<Option<LineReader>>>;

/// Reads payload lines from stdin or from a device path.
#[derive(Clone, Default)]
pub struct LineScannerDevice {
    device: Option<PathBuf>,
    parked: Parking,
}

impl LineScannerDevice {
    pub fn stdin() -> Self {
        Self::default()
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            device: Some(path.into()),
            parked: Parking::default(),
        }
    }

    pub fn name(&self) -> String {
        match self.device {
            Some(ref path) => path.display().to_string(),
            None => "stdin".to_string(),
        }
    }

    fn take_parked(&self) -> Option<LineReader> {
        self.parked.lock().unwrap_or_else(|p| p.into_inner()).take()
    }
}

impl fmt::Debug for LineScannerDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineScannerDevice")
            .field("device", &self.name())
            .finish()
    }
}

#[async_trait]
impl Camera for LineScannerDevice {
    type Stream = LineStream;

    async fn open(&mut self) -> CameraResult<LineStream> {
        if let Some(lines) = self.take_parked() {
            return Ok(LineStream {
                lines: Some(lines),
                parking: Some(Arc::clone(&self.parked)),
                exhausted: false,
            });
        }

        let reader: BoxedReader = match self.device {
            Some(ref path) => Box::new(
                tokio::fs::File::open(path)
                    .await
                    .map_err(|e| CameraError::from_io(&path.display().to_string(), e))?,
            ),
            None => Box::new(tokio::io::stdin()),
        };

        let mut stream = LineStream::new(reader);
        stream.parking = Some(Arc::clone(&self.parked));
        Ok(stream)
    }
}

/// One frame per line.
pub struct LineStream {
    lines: Option<LineReader>,
    parking: Option<Parking>,
    /// End of input seen; such a reader is dropped instead of parked.
    exhausted: bool,
}

impl LineStream {
    pub fn new<R: AsyncRead + Send + Unpin + 'static>(reader: R) -> Self {
        let reader: BoxedReader = Box::new(reader);
        Self {
            lines: Some(BufReader::new(reader).lines()),
            parking: None,
            exhausted: false,
        }
    }

    pub fn is_released(&self) -> bool {
        self.lines.is_none()
    }
}

#[async_trait]
impl FrameSource for LineStream {
    type Frame = String;

    async fn next_frame(&mut self) -> CameraResult<Option<String>> {
        let Some(lines) = self.lines.as_mut() else {
            return Ok(None);
        };
        let line = lines.next_line().await.map_err(CameraError::stream)?;
        if line.is_none() {
            self.exhausted = true;
        }
        Ok(line)
    }

    fn release(&mut self) {
        let Some(lines) = self.lines.take() else {
            return;
        };
        if self.exhausted {
            return;
        }
        if let Some(ref parking) = self.parking {
            *parking.lock().unwrap_or_else(|p| p.into_inner()) = Some(lines);
        }
    }
}

/// Accepts lines that look like an absolute http(s) URL; anything else is noise.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadDecoder;

impl QrDecoder<String> for PayloadDecoder {
    fn decode(&mut self, frame: &String) -> Option<String> {
        let payload = frame.trim();
        if payload.starts_with("https://") || payload.starts_with("http://") {
            Some(payload.to_string())
        } else {
            None
        }
    }
}
