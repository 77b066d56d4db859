//! Camera uniform bound at group 0 for every draw.

use crate::{
    gfx::camera::CameraUniform,
    wgpu_utils::{binding_types, UniformBuffer},
};

pub type CameraUbo = UniformBuffer<CameraUniform>;

/// Owns the camera uniform buffer with its layout and bind group.
pub struct GlobalBindings {
    ubo: CameraUbo,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let ubo = CameraUbo::new_with_data(device, &CameraUniform::default());
        let bind_group_layout = binding_types::single_uniform_layout(
            device,
            wgpu::ShaderStages::VERTEX_FRAGMENT,
            "Globals Bind Group Layout",
        );
        let bind_group = binding_types::single_resource_bind_group(
            device,
            &bind_group_layout,
            ubo.binding_resource(),
            "Globals Bind Group",
        );

        GlobalBindings {
            ubo,
            bind_group_layout,
            bind_group,
        }
    }

    /// Writes the camera matrices for the next frame.
    pub fn update(&mut self, queue: &wgpu::Queue, camera: CameraUniform) {
        self.ubo.update_content(queue, camera);
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
