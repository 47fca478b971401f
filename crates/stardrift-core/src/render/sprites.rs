use crate::scene::Scene;
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceData {
    pos: [f32; 3],
    scale: f32,
    color: [f32; 4],
    glow: f32,
}

// Two triangles spanning [-0.5, 0.5]^2
pub(crate) const QUAD_VERTICES: [f32; 12] = [
    -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
];

pub(crate) const GLOW_WHITEN: f32 = 0.35;

pub(crate) fn layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    [
        // slot 0: quad corners
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        },
        // slot 1: per-sprite data
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceData>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 12,
                    shader_location: 2,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: 16,
                    shader_location: 3,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 32,
                    shader_location: 4,
                },
            ],
        },
    ]
}

/// Stars followed by the glow sprite of the traveling light.
pub(crate) fn build_instances(scene: &Scene, out: &mut Vec<InstanceData>) {
    out.clear();
    let star_color = scene.star_color.extend(1.0).to_array();
    out.extend(scene.stars.particles().iter().map(|p| InstanceData {
        pos: p.position.to_array(),
        scale: scene.star_size,
        color: star_color,
        glow: 0.0,
    }));
    let light = &scene.light;
    let glow_rgb = light.color.lerp(Vec3::ONE, GLOW_WHITEN);
    out.push(InstanceData {
        pos: light.position.to_array(),
        scale: light.glow_size,
        color: glow_rgb.extend(light.opacity).to_array(),
        glow: 1.0,
    });
}
