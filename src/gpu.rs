use std::sync::Arc;
use wgpu::{Adapter, Buffer, Device, DeviceDescriptor, Instance, Queue, Surface};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Shared wgpu device and queue.
///
/// Cheap to clone (Arc) so the presenter and any offscreen blit can share one
/// device. Construction is the only async part of the crate; callers wrap it
/// in `pollster::block_on`.
#[derive(Clone)]
pub struct GpuContext {
    device: Arc<Device>,
    queue: Arc<Queue>,
}

impl GpuContext {
    /// Create a context with no surface, for offscreen rendering and tests.
    pub async fn new() -> Result<Self> {
        let instance = Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let adapter = Self::request_adapter(&instance, None).await?;
        Self::from_adapter(&adapter).await
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Synchronously read a mappable buffer back to host memory.
    ///
    /// Blocks on device poll; used only on the test/readback path, never in
    /// the frame loop.
    pub fn read_buffer_sync(&self, buffer: &Buffer) -> Result<Vec<u8>> {
        let buffer_slice = buffer.slice(..);

        let (sender, receiver) = std::sync::mpsc::channel();
        buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
            sender.send(result).ok();
        });

        self.device
            .poll(wgpu::PollType::Wait {
                submission_index: None,
                timeout: None,
            })
            .ok();

        match receiver.recv() {
            Ok(Ok(())) => {
                let data = buffer_slice.get_mapped_range();
                let result = data.to_vec();
                drop(data);
                buffer.unmap();
                Ok(result)
            }
            Ok(Err(e)) => Err(format!("buffer mapping failed: {e:?}").into()),
            Err(_) => Err("channel closed before mapping completed".into()),
        }
    }

    pub(crate) async fn request_adapter(
        instance: &Instance,
        compatible_surface: Option<&Surface<'_>>,
    ) -> Result<Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| format!("adapter request failed: {e:?}").into())
    }

    pub(crate) async fn from_adapter(adapter: &Adapter) -> Result<Self> {
        let (device, queue) = adapter
            .request_device(&DeviceDescriptor {
                label: Some("pixelblit device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| format!("device request failed: {e:?}"))?;

        // Log validation errors instead of panicking; nothing in the frame
        // loop can recover from them anyway.
        device.on_uncaptured_error(Arc::new(|error: wgpu::Error| {
            log::error!("uncaptured wgpu error: {error}");
        }));

        Ok(Self {
            device: Arc::new(device),
            queue: Arc::new(queue),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<GpuContext>();
    }
}
