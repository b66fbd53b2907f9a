use crate::scanner::CameraResult;

use std::marker::PhantomData;

use async_trait::async_trait;

/// A video device that can be opened for frames.
#[async_trait]
pub trait Camera: Send {
    type Stream: FrameSource;

    /// Whether the platform offers camera access at all.
    fn is_supported(&self) -> bool {
        true
    }

    /// Open a new stream. Callers go through [`CameraLease::acquire`].
    async fn open(&mut self) -> CameraResult<Self::Stream>;
}

/// An open stream of frames.
#[async_trait]
pub trait FrameSource: Send {
    type Frame: Send;

    /// Next frame, or `None` once the device has nothing more to give.
    async fn next_frame(&mut self) -> CameraResult<Option<Self::Frame>>;

    /// Stop all tracks and give the device back.
    fn release(&mut self);
}

/// Turns a frame into a QR payload. A frame without a readable code yields `None`.
pub trait QrDecoder<F>: Send {
    fn decode(&mut self, frame: &F) -> Option<String>;
}

/// Exclusive, scoped use of a camera.
///
/// The lease borrows the camera mutably, so a second acquisition cannot start while
/// this one is alive. The stream is released on drop.
pub struct CameraLease<'a, C: Camera> {
    stream: Option<C::Stream>,
    _camera: PhantomData<&'a mut C>,
}

impl<'a, C: Camera> CameraLease<'a, C> {
    pub async fn acquire(camera: &'a mut C) -> CameraResult<Self> {
        let stream = camera.open().await?;
        Ok(Self {
            stream: Some(stream),
            _camera: PhantomData,
        })
    }

    pub async fn next_frame(
        &mut self,
    ) -> CameraResult<Option<<C::Stream as FrameSource>::Frame>> {
        match self.stream.as_mut() {
            Some(stream) => stream.next_frame().await,
            None => Ok(None),
        }
    }

    /// Release now instead of at drop.
    pub fn release(mut self) {
        self.release_stream();
    }

    fn release_stream(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.release();
        }
    }
}

impl<C: Camera> Drop for CameraLease<'_, C> {
    fn drop(&mut self) {
        self.release_stream();
    }
}
