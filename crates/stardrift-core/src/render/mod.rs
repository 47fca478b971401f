//! wgpu renderer shared by the web and native frontends.

use crate::frame::SceneRenderer;
use crate::scene::Scene;
use crate::startup::Unsupported;
use crate::viewport::RenderSurface;

mod helpers;
mod sprites;

use helpers::{make_pipeline, PipelineDesc};
use sprites::InstanceData;

// The animation advances per frame, so shader time does too.
const SECONDS_PER_FRAME: f32 = 1.0 / 60.0;
const TEXT_AMBIENT: f32 = 0.02;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    light_pos: [f32; 4],
    light_color: [f32; 4],
    resolution: [f32; 2],
    time: f32,
    text_ambient: f32,
}

impl Globals {
    fn from_scene(scene: &Scene, width: u32, height: u32, time: f32) -> Self {
        let (right, up) = scene.camera.billboard_axes();
        let light = &scene.light;
        Self {
            view_proj: scene.camera.view_projection().to_cols_array_2d(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
            light_pos: light.position.extend(light.range).to_array(),
            light_color: light.color.extend(light.intensity).to_array(),
            resolution: [width as f32, height as f32],
            time,
            text_ambient: TEXT_AMBIENT,
        }
    }
}

struct TextBuffer {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

pub struct GpuState<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    background_pipeline: wgpu::RenderPipeline,
    text_pipeline: wgpu::RenderPipeline,
    sprite_pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    instance_capacity: usize,
    instances: Vec<InstanceData>,
    text: Option<TextBuffer>,
    text_revision: u64,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
}

impl<'w> GpuState<'w> {
    /// Configure `surface` and build all pipelines. Any failure to obtain an
    /// adapter or device means the host cannot render the scene.
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'w>,
        width: u32,
        height: u32,
    ) -> Result<Self, Unsupported> {
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| Unsupported::new("no GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| Unsupported::new(format!("request_device error: {e}")))?;
        log::info!("[gpu] adapter: {}", adapter.get_info().name);

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| Unsupported::new("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::SCENE_WGSL.into()),
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let background_pipeline = make_pipeline(
            &device,
            &layout,
            &shader,
            format,
            PipelineDesc {
                label: "background_pipeline",
                vs_entry: "vs_background",
                fs_entry: "fs_background",
                buffers: &[],
                topology: wgpu::PrimitiveTopology::TriangleList,
                blend: None,
            },
        );
        let text_layout = [wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 3) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            }],
        }];
        let text_pipeline = make_pipeline(
            &device,
            &layout,
            &shader,
            format,
            PipelineDesc {
                label: "text_pipeline",
                vs_entry: "vs_text",
                fs_entry: "fs_text",
                buffers: &text_layout,
                topology: wgpu::PrimitiveTopology::LineList,
                blend: Some(wgpu::BlendState::REPLACE),
            },
        );
        let sprite_layouts = sprites::layouts();
        let sprite_pipeline = make_pipeline(
            &device,
            &layout,
            &shader,
            format,
            PipelineDesc {
                label: "sprite_pipeline",
                vs_entry: "vs_sprite",
                fs_entry: "fs_sprite",
                buffers: &sprite_layouts,
                topology: wgpu::PrimitiveTopology::TriangleList,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            },
        );

        let quad_vb = helpers::vertex_buffer(
            &device,
            "quad_vb",
            bytemuck::cast_slice(&sprites::QUAD_VERTICES),
        );
        let instance_capacity = 64;
        let instance_vb = helpers::instance_buffer(
            &device,
            std::mem::size_of::<InstanceData>(),
            instance_capacity,
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            globals_buffer,
            globals_bind_group,
            background_pipeline,
            text_pipeline,
            sprite_pipeline,
            quad_vb,
            instance_vb,
            instance_capacity,
            instances: Vec::with_capacity(instance_capacity),
            text: None,
            text_revision: 0,
            width: width.max(1),
            height: height.max(1),
            clear_color: wgpu::Color {
                r: 0.01,
                g: 0.005,
                b: 0.03,
                a: 1.0,
            },
            time_accum: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Upload the text wireframe when the scene has a newer one.
    fn sync_text(&mut self, scene: &Scene) {
        if scene.text_revision() == self.text_revision {
            return;
        }
        self.text_revision = scene.text_revision();
        self.text = scene.text().filter(|m| !m.is_empty()).map(|mesh| {
            let flat: Vec<[f32; 3]> = mesh.vertices().iter().map(|v| v.to_array()).collect();
            TextBuffer {
                buffer: helpers::vertex_buffer(&self.device, "text_vb", bytemuck::cast_slice(&flat)),
                vertex_count: flat.len() as u32,
            }
        });
        log::debug!("[gpu] text uploaded (revision {})", self.text_revision);
    }

    fn upload_instances(&mut self, scene: &Scene) {
        sprites::build_instances(scene, &mut self.instances);
        if self.instances.len() > self.instance_capacity {
            self.instance_capacity = self.instances.len().next_power_of_two();
            self.instance_vb = helpers::instance_buffer(
                &self.device,
                std::mem::size_of::<InstanceData>(),
                self.instance_capacity,
            );
        }
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&self.instances));
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => return Ok(()),
            Err(e) => return Err(e),
        };
        self.time_accum += SECONDS_PER_FRAME;
        self.sync_text(scene);
        self.upload_instances(scene);
        let globals = Globals::from_scene(scene, self.width, self.height, self.time_accum);
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);

            rpass.set_pipeline(&self.background_pipeline);
            rpass.draw(0..3, 0..1);

            if let Some(text) = &self.text {
                rpass.set_pipeline(&self.text_pipeline);
                rpass.set_vertex_buffer(0, text.buffer.slice(..));
                rpass.draw(0..text.vertex_count, 0..1);
            }

            rpass.set_pipeline(&self.sprite_pipeline);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..self.instances.len() as u32);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'w> SceneRenderer for GpuState<'w> {
    type Error = wgpu::SurfaceError;

    fn render(&mut self, scene: &Scene) -> Result<(), Self::Error> {
        GpuState::render(self, scene)
    }
}

impl<'w> RenderSurface for GpuState<'w> {
    fn resize(&mut self, width: u32, height: u32) {
        self.resize_if_needed(width, height);
    }
}
