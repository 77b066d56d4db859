use cgmath::{Matrix4, Rad, Vector3};
use wgpu::{util::DeviceExt, Device};

use super::vertex::Vertex3D;
use crate::{
    gfx::geometry::GeometryData,
    wgpu_utils::{binding_types, UniformBuffer},
};

/// Per-object uniform: model matrix and flat color. MUST match
/// `ObjectUniform` in `shader.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex3D>, indices: Vec<u32>) -> Self {
        let index_count = indices.len() as u32;
        Self {
            vertices,
            indices,
            vertex_buffer: None,
            index_buffer: None,
            index_count,
        }
    }

    pub fn from_geometry(geometry: &GeometryData) -> Self {
        let (vertices, indices) = geometry.to_scene_format();
        Self::new(vertices, indices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    fn init_gpu_resources(&mut self, device: &Device) {
        self.vertex_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(&self.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.index_buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(&self.indices),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}

struct ObjectGpuResources {
    uniform: UniformBuffer<ObjectUniform>,
    bind_group: wgpu::BindGroup,
}

/// A mesh placed in the scene with a yaw rotation and a flat color.
pub struct Object {
    pub name: String,
    pub mesh: Mesh,
    pub position: Vector3<f32>,
    /// Rotation about the Y axis. Unbounded; it is fed straight into the
    /// model matrix.
    pub rotation_y: Rad<f32>,
    pub color: [f32; 4],
    gpu_resources: Option<ObjectGpuResources>, // None until init_gpu_resources called
}

impl Object {
    pub fn new(name: impl Into<String>, mesh: Mesh, color: [f32; 4]) -> Self {
        Self {
            name: name.into(),
            mesh,
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation_y: Rad(0.0),
            color,
            gpu_resources: None,
        }
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
    }

    pub fn set_rotation_y(&mut self, angle: Rad<f32>) {
        self.rotation_y = angle;
    }

    /// Translation applied after the yaw rotation.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position) * Matrix4::from_angle_y(self.rotation_y)
    }

    pub fn uniform(&self) -> ObjectUniform {
        ObjectUniform {
            model: self.model_matrix().into(),
            color: self.color,
        }
    }

    /// Uploads mesh buffers and creates the per-object bind group.
    pub fn init_gpu_resources(&mut self, device: &Device, layout: &wgpu::BindGroupLayout) {
        self.mesh.init_gpu_resources(device);

        let uniform = UniformBuffer::new_with_data(device, &self.uniform());
        let bind_group = binding_types::single_resource_bind_group(
            device,
            layout,
            uniform.binding_resource(),
            "Object Bind Group",
        );

        log::debug!(
            "Uploaded '{}': {} vertices, {} triangles",
            self.name,
            self.mesh.vertex_count(),
            self.mesh.index_count() / 3
        );

        self.gpu_resources = Some(ObjectGpuResources {
            uniform,
            bind_group,
        });
    }

    /// Sync the model matrix and color to the GPU if resources exist
    pub fn update_transform(&mut self, queue: &wgpu::Queue) {
        let content = self.uniform();
        if let Some(gpu_resources) = self.gpu_resources.as_mut() {
            gpu_resources.uniform.update_content(queue, content);
        }
    }

    pub fn bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.gpu_resources.as_ref().map(|res| &res.bind_group)
    }

    pub fn release_gpu_resources(&mut self) {
        self.gpu_resources = None;
        self.mesh.vertex_buffer = None;
        self.mesh.index_buffer = None;
    }
}

pub trait DrawObject<'a> {
    fn draw_mesh(&mut self, mesh: &'a Mesh);
    fn draw_object(&mut self, object: &'a Object);
}

impl<'a, 'b> DrawObject<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh(&mut self, mesh: &'b Mesh) {
        let (Some(vertex_buffer), Some(index_buffer)) = (&mesh.vertex_buffer, &mesh.index_buffer)
        else {
            return; // Not uploaded yet
        };

        self.set_vertex_buffer(0, vertex_buffer.slice(..));
        self.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, 0..1);
    }

    /// Binds the object's uniforms at group 1 and draws its mesh.
    fn draw_object(&mut self, object: &'b Object) {
        let Some(bind_group) = object.bind_group() else {
            return;
        };
        self.set_bind_group(1, bind_group, &[]);
        self.draw_mesh(&object.mesh);
    }
}
