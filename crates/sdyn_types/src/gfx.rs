use core::ffi::{c_char, c_int, c_void};

use crate::{c_enum, handle, zeroed_default};

pub const SG_INVALID_ID: u32 = 0;
pub const SG_NUM_SHADER_STAGES: usize = 2;
pub const SG_NUM_INFLIGHT_FRAMES: usize = 2;
pub const SG_MAX_COLOR_ATTACHMENTS: usize = 4;
pub const SG_MAX_SHADERSTAGE_BUFFERS: usize = 8;
pub const SG_MAX_SHADERSTAGE_IMAGES: usize = 12;
pub const SG_MAX_SHADERSTAGE_UBS: usize = 4;
pub const SG_MAX_UB_MEMBERS: usize = 16;
pub const SG_MAX_VERTEX_ATTRIBUTES: usize = 16;
pub const SG_MAX_MIPMAPS: usize = 16;
pub const SG_MAX_TEXTUREARRAY_LAYERS: usize = 128;
pub const SG_CUBEFACE_NUM: usize = 6;

handle! {
    sg_buffer;
    sg_image;
    sg_shader;
    sg_pipeline;
    sg_pass;
    sg_context;
}

c_enum! {
    sg_backend {
        GLCORE33 = 0,
        GLES2 = 1,
        GLES3 = 2,
        D3D11 = 3,
        METAL_IOS = 4,
        METAL_MACOS = 5,
        METAL_SIMULATOR = 6,
        WGPU = 7,
        DUMMY = 8,
    }
}

c_enum! {
    sg_pixel_format {
        DEFAULT = 0,
        NONE = 1,
        R8 = 2,
        R8SN = 3,
        R8UI = 4,
        R8SI = 5,
        R16 = 6,
        R16SN = 7,
        R16UI = 8,
        R16SI = 9,
        R16F = 10,
        RG8 = 11,
        RG8SN = 12,
        RG8UI = 13,
        RG8SI = 14,
        R32UI = 15,
        R32SI = 16,
        R32F = 17,
        RG16 = 18,
        RG16SN = 19,
        RG16UI = 20,
        RG16SI = 21,
        RG16F = 22,
        RGBA8 = 23,
        RGBA8SN = 24,
        RGBA8UI = 25,
        RGBA8SI = 26,
        BGRA8 = 27,
        RGB10A2 = 28,
        RG11B10F = 29,
        RG32UI = 30,
        RG32SI = 31,
        RG32F = 32,
        RGBA16 = 33,
        RGBA16SN = 34,
        RGBA16UI = 35,
        RGBA16SI = 36,
        RGBA16F = 37,
        RGBA32UI = 38,
        RGBA32SI = 39,
        RGBA32F = 40,
        DEPTH = 41,
        DEPTH_STENCIL = 42,
        BC1_RGBA = 43,
        BC2_RGBA = 44,
        BC3_RGBA = 45,
        BC4_R = 46,
        BC4_RSN = 47,
        BC5_RG = 48,
        BC5_RGSN = 49,
        BC6H_RGBF = 50,
        BC6H_RGBUF = 51,
        BC7_RGBA = 52,
        PVRTC_RGB_2BPP = 53,
        PVRTC_RGB_4BPP = 54,
        PVRTC_RGBA_2BPP = 55,
        PVRTC_RGBA_4BPP = 56,
        ETC2_RGB8 = 57,
        ETC2_RGB8A1 = 58,
        ETC2_RGBA8 = 59,
        ETC2_RG11 = 60,
        ETC2_RG11SN = 61,
    }
}

c_enum! {
    sg_resource_state {
        INITIAL = 0,
        ALLOC = 1,
        VALID = 2,
        FAILED = 3,
        INVALID = 4,
    }
}

c_enum! {
    sg_usage {
        DEFAULT = 0,
        IMMUTABLE = 1,
        DYNAMIC = 2,
        STREAM = 3,
    }
}

c_enum! {
    sg_buffer_type {
        DEFAULT = 0,
        VERTEXBUFFER = 1,
        INDEXBUFFER = 2,
    }
}

c_enum! {
    sg_index_type {
        DEFAULT = 0,
        NONE = 1,
        UINT16 = 2,
        UINT32 = 3,
    }
}

c_enum! {
    sg_image_type {
        DEFAULT = 0,
        _2D = 1,
        CUBE = 2,
        _3D = 3,
        ARRAY = 4,
    }
}

c_enum! {
    sg_sampler_type {
        DEFAULT = 0,
        FLOAT = 1,
        SINT = 2,
        UINT = 3,
    }
}

c_enum! {
    sg_shader_stage {
        VS = 0,
        FS = 1,
    }
}

c_enum! {
    sg_primitive_type {
        DEFAULT = 0,
        POINTS = 1,
        LINES = 2,
        LINE_STRIP = 3,
        TRIANGLES = 4,
        TRIANGLE_STRIP = 5,
    }
}

c_enum! {
    sg_filter {
        DEFAULT = 0,
        NEAREST = 1,
        LINEAR = 2,
        NEAREST_MIPMAP_NEAREST = 3,
        NEAREST_MIPMAP_LINEAR = 4,
        LINEAR_MIPMAP_NEAREST = 5,
        LINEAR_MIPMAP_LINEAR = 6,
    }
}

c_enum! {
    sg_wrap {
        DEFAULT = 0,
        REPEAT = 1,
        CLAMP_TO_EDGE = 2,
        CLAMP_TO_BORDER = 3,
        MIRRORED_REPEAT = 4,
    }
}

c_enum! {
    sg_border_color {
        DEFAULT = 0,
        TRANSPARENT_BLACK = 1,
        OPAQUE_BLACK = 2,
        OPAQUE_WHITE = 3,
    }
}

c_enum! {
    sg_vertex_format {
        INVALID = 0,
        FLOAT = 1,
        FLOAT2 = 2,
        FLOAT3 = 3,
        FLOAT4 = 4,
        BYTE4 = 5,
        BYTE4N = 6,
        UBYTE4 = 7,
        UBYTE4N = 8,
        SHORT2 = 9,
        SHORT2N = 10,
        USHORT2N = 11,
        SHORT4 = 12,
        SHORT4N = 13,
        USHORT4N = 14,
        UINT10_N2 = 15,
    }
}

c_enum! {
    sg_vertex_step {
        DEFAULT = 0,
        PER_VERTEX = 1,
        PER_INSTANCE = 2,
    }
}

c_enum! {
    sg_uniform_type {
        INVALID = 0,
        FLOAT = 1,
        FLOAT2 = 2,
        FLOAT3 = 3,
        FLOAT4 = 4,
        MAT4 = 5,
    }
}

c_enum! {
    sg_cull_mode {
        DEFAULT = 0,
        NONE = 1,
        FRONT = 2,
        BACK = 3,
    }
}

c_enum! {
    sg_face_winding {
        DEFAULT = 0,
        CCW = 1,
        CW = 2,
    }
}

c_enum! {
    sg_compare_func {
        DEFAULT = 0,
        NEVER = 1,
        LESS = 2,
        EQUAL = 3,
        LESS_EQUAL = 4,
        GREATER = 5,
        NOT_EQUAL = 6,
        GREATER_EQUAL = 7,
        ALWAYS = 8,
    }
}

c_enum! {
    sg_stencil_op {
        DEFAULT = 0,
        KEEP = 1,
        ZERO = 2,
        REPLACE = 3,
        INCR_CLAMP = 4,
        DECR_CLAMP = 5,
        INVERT = 6,
        INCR_WRAP = 7,
        DECR_WRAP = 8,
    }
}

c_enum! {
    sg_blend_factor {
        DEFAULT = 0,
        ZERO = 1,
        ONE = 2,
        SRC_COLOR = 3,
        ONE_MINUS_SRC_COLOR = 4,
        SRC_ALPHA = 5,
        ONE_MINUS_SRC_ALPHA = 6,
        DST_COLOR = 7,
        ONE_MINUS_DST_COLOR = 8,
        DST_ALPHA = 9,
        ONE_MINUS_DST_ALPHA = 10,
        SRC_ALPHA_SATURATED = 11,
        BLEND_COLOR = 12,
        ONE_MINUS_BLEND_COLOR = 13,
        BLEND_ALPHA = 14,
        ONE_MINUS_BLEND_ALPHA = 15,
    }
}

c_enum! {
    sg_blend_op {
        DEFAULT = 0,
        ADD = 1,
        SUBTRACT = 2,
        REVERSE_SUBTRACT = 3,
    }
}

c_enum! {
    sg_action {
        DEFAULT = 0,
        CLEAR = 1,
        LOAD = 2,
        DONTCARE = 3,
    }
}

/// Bit values for `sg_blend_state::color_write_mask`, which is a `uint8_t`.
pub mod sg_color_mask {
    pub const DEFAULT: u8 = 0;
    pub const NONE: u8 = 0x10;
    pub const R: u8 = 1 << 0;
    pub const G: u8 = 1 << 1;
    pub const B: u8 = 1 << 2;
    pub const A: u8 = 1 << 3;
    pub const RGB: u8 = 0x7;
    pub const RGBA: u8 = 0xF;
}

// -- pass actions and bindings -----------------------------------------------

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct sg_color_attachment_action {
    pub action: sg_action,
    pub val: [f32; 4],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct sg_depth_attachment_action {
    pub action: sg_action,
    pub val: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct sg_stencil_attachment_action {
    pub action: sg_action,
    pub val: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct sg_pass_action {
    pub _start_canary: u32,
    pub colors: [sg_color_attachment_action; SG_MAX_COLOR_ATTACHMENTS],
    pub depth: sg_depth_attachment_action,
    pub stencil: sg_stencil_attachment_action,
    pub _end_canary: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct sg_bindings {
    pub _start_canary: u32,
    pub vertex_buffers: [sg_buffer; SG_MAX_SHADERSTAGE_BUFFERS],
    pub vertex_buffer_offsets: [c_int; SG_MAX_SHADERSTAGE_BUFFERS],
    pub index_buffer: sg_buffer,
    pub index_buffer_offset: c_int,
    pub vs_images: [sg_image; SG_MAX_SHADERSTAGE_IMAGES],
    pub fs_images: [sg_image; SG_MAX_SHADERSTAGE_IMAGES],
    pub _end_canary: u32,
}

// -- resource descriptions ---------------------------------------------------

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_buffer_desc {
    pub _start_canary: u32,
    pub size: c_int,
    pub type_: sg_buffer_type,
    pub usage: sg_usage,
    pub content: *const c_void,
    pub label: *const c_char,
    pub gl_buffers: [u32; SG_NUM_INFLIGHT_FRAMES],
    pub mtl_buffers: [*const c_void; SG_NUM_INFLIGHT_FRAMES],
    pub d3d11_buffer: *const c_void,
    pub wgpu_buffer: *const c_void,
    pub _end_canary: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_subimage_content {
    pub ptr: *const c_void,
    pub size: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_image_content {
    pub subimage: [[sg_subimage_content; SG_MAX_MIPMAPS]; SG_CUBEFACE_NUM],
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_image_desc {
    pub _start_canary: u32,
    pub type_: sg_image_type,
    pub render_target: bool,
    pub width: c_int,
    pub height: c_int,
    /// `depth` for 3D images, `layers` for array images (a C union).
    pub depth: c_int,
    pub num_mipmaps: c_int,
    pub usage: sg_usage,
    pub pixel_format: sg_pixel_format,
    pub sample_count: c_int,
    pub min_filter: sg_filter,
    pub mag_filter: sg_filter,
    pub wrap_u: sg_wrap,
    pub wrap_v: sg_wrap,
    pub wrap_w: sg_wrap,
    pub border_color: sg_border_color,
    pub max_anisotropy: u32,
    pub min_lod: f32,
    pub max_lod: f32,
    pub content: sg_image_content,
    pub label: *const c_char,
    pub gl_textures: [u32; SG_NUM_INFLIGHT_FRAMES],
    pub gl_texture_target: u32,
    pub mtl_textures: [*const c_void; SG_NUM_INFLIGHT_FRAMES],
    pub d3d11_texture: *const c_void,
    pub d3d11_shader_resource_view: *const c_void,
    pub wgpu_texture: *const c_void,
    pub _end_canary: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_shader_attr_desc {
    pub name: *const c_char,
    pub sem_name: *const c_char,
    pub sem_index: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_shader_uniform_desc {
    pub name: *const c_char,
    pub type_: sg_uniform_type,
    pub array_count: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_shader_uniform_block_desc {
    pub size: c_int,
    pub uniforms: [sg_shader_uniform_desc; SG_MAX_UB_MEMBERS],
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_shader_image_desc {
    pub name: *const c_char,
    pub type_: sg_image_type,
    pub sampler_type: sg_sampler_type,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_shader_stage_desc {
    pub source: *const c_char,
    pub byte_code: *const u8,
    pub byte_code_size: c_int,
    pub entry: *const c_char,
    pub d3d11_target: *const c_char,
    pub uniform_blocks: [sg_shader_uniform_block_desc; SG_MAX_SHADERSTAGE_UBS],
    pub images: [sg_shader_image_desc; SG_MAX_SHADERSTAGE_IMAGES],
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_shader_desc {
    pub _start_canary: u32,
    pub attrs: [sg_shader_attr_desc; SG_MAX_VERTEX_ATTRIBUTES],
    pub vs: sg_shader_stage_desc,
    pub fs: sg_shader_stage_desc,
    pub label: *const c_char,
    pub _end_canary: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct sg_buffer_layout_desc {
    pub stride: c_int,
    pub step_func: sg_vertex_step,
    pub step_rate: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct sg_vertex_attr_desc {
    pub buffer_index: c_int,
    pub offset: c_int,
    pub format: sg_vertex_format,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct sg_layout_desc {
    pub buffers: [sg_buffer_layout_desc; SG_MAX_SHADERSTAGE_BUFFERS],
    pub attrs: [sg_vertex_attr_desc; SG_MAX_VERTEX_ATTRIBUTES],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct sg_stencil_state {
    pub fail_op: sg_stencil_op,
    pub depth_fail_op: sg_stencil_op,
    pub pass_op: sg_stencil_op,
    pub compare_func: sg_compare_func,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct sg_depth_stencil_state {
    pub stencil_front: sg_stencil_state,
    pub stencil_back: sg_stencil_state,
    pub depth_compare_func: sg_compare_func,
    pub depth_write_enabled: bool,
    pub stencil_enabled: bool,
    pub stencil_read_mask: u8,
    pub stencil_write_mask: u8,
    pub stencil_ref: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct sg_blend_state {
    pub enabled: bool,
    pub src_factor_rgb: sg_blend_factor,
    pub dst_factor_rgb: sg_blend_factor,
    pub op_rgb: sg_blend_op,
    pub src_factor_alpha: sg_blend_factor,
    pub dst_factor_alpha: sg_blend_factor,
    pub op_alpha: sg_blend_op,
    pub color_write_mask: u8,
    pub color_attachment_count: c_int,
    pub color_format: sg_pixel_format,
    pub depth_format: sg_pixel_format,
    pub blend_color: [f32; 4],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct sg_rasterizer_state {
    pub alpha_to_coverage_enabled: bool,
    pub cull_mode: sg_cull_mode,
    pub face_winding: sg_face_winding,
    pub sample_count: c_int,
    pub depth_bias: f32,
    pub depth_bias_slope_scale: f32,
    pub depth_bias_clamp: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_pipeline_desc {
    pub _start_canary: u32,
    pub layout: sg_layout_desc,
    pub shader: sg_shader,
    pub primitive_type: sg_primitive_type,
    pub index_type: sg_index_type,
    pub depth_stencil: sg_depth_stencil_state,
    pub blend: sg_blend_state,
    pub rasterizer: sg_rasterizer_state,
    pub label: *const c_char,
    pub _end_canary: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct sg_attachment_desc {
    pub image: sg_image,
    pub mip_level: c_int,
    /// `face` for cubemaps, `layer` for arrays, `slice` for 3D images (a C union).
    pub slice: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_pass_desc {
    pub _start_canary: u32,
    pub color_attachments: [sg_attachment_desc; SG_MAX_COLOR_ATTACHMENTS],
    pub depth_stencil_attachment: sg_attachment_desc,
    pub label: *const c_char,
    pub _end_canary: u32,
}

// -- setup and context -------------------------------------------------------

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct sg_gl_context_desc {
    pub force_gles2: bool,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_mtl_context_desc {
    pub device: *const c_void,
    pub renderpass_descriptor_cb: Option<unsafe extern "C" fn() -> *const c_void>,
    pub drawable_cb: Option<unsafe extern "C" fn() -> *const c_void>,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_d3d11_context_desc {
    pub device: *const c_void,
    pub device_context: *const c_void,
    pub render_target_view_cb: Option<unsafe extern "C" fn() -> *const c_void>,
    pub depth_stencil_view_cb: Option<unsafe extern "C" fn() -> *const c_void>,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_wgpu_context_desc {
    pub device: *const c_void,
    pub render_view_cb: Option<unsafe extern "C" fn() -> *const c_void>,
    pub resolve_view_cb: Option<unsafe extern "C" fn() -> *const c_void>,
    pub depth_stencil_view_cb: Option<unsafe extern "C" fn() -> *const c_void>,
    pub render_format: sg_pixel_format,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_context_desc {
    pub color_format: sg_pixel_format,
    pub depth_format: sg_pixel_format,
    pub sample_count: c_int,
    pub gl: sg_gl_context_desc,
    pub metal: sg_mtl_context_desc,
    pub d3d11: sg_d3d11_context_desc,
    pub wgpu: sg_wgpu_context_desc,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_desc {
    pub _start_canary: u32,
    pub buffer_pool_size: c_int,
    pub image_pool_size: c_int,
    pub shader_pool_size: c_int,
    pub pipeline_pool_size: c_int,
    pub pass_pool_size: c_int,
    pub context_pool_size: c_int,
    pub uniform_buffer_size: c_int,
    pub staging_buffer_size: c_int,
    pub sampler_cache_size: c_int,
    pub context: sg_context_desc,
    pub _end_canary: u32,
}

// -- queries -----------------------------------------------------------------

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct sg_features {
    pub instancing: bool,
    pub origin_top_left: bool,
    pub multiple_render_targets: bool,
    pub msaa_render_targets: bool,
    pub imagetype_3d: bool,
    pub imagetype_array: bool,
    pub image_clamp_to_border: bool,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct sg_limits {
    pub max_image_size_2d: c_int,
    pub max_image_size_cube: c_int,
    pub max_image_size_3d: c_int,
    pub max_image_size_array: c_int,
    pub max_image_array_layers: c_int,
    pub max_vertex_attrs: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct sg_pixelformat_info {
    pub sample: bool,
    pub filter: bool,
    pub render: bool,
    pub blend: bool,
    pub msaa: bool,
    pub depth: bool,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct sg_slot_info {
    pub state: sg_resource_state,
    pub res_id: u32,
    pub ctx_id: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct sg_buffer_info {
    pub slot: sg_slot_info,
    pub update_frame_index: u32,
    pub append_frame_index: u32,
    pub append_pos: c_int,
    pub append_overflow: bool,
    pub num_slots: c_int,
    pub active_slot: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct sg_image_info {
    pub slot: sg_slot_info,
    pub upd_frame_index: u32,
    pub num_slots: c_int,
    pub active_slot: c_int,
    pub width: c_int,
    pub height: c_int,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct sg_shader_info {
    pub slot: sg_slot_info,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct sg_pipeline_info {
    pub slot: sg_slot_info,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct sg_pass_info {
    pub slot: sg_slot_info,
}

// -- trace hooks -------------------------------------------------------------

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sg_trace_hooks {
    pub user_data: *mut c_void,
    pub reset_state_cache: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
    pub make_buffer: Option<
        unsafe extern "C" fn(desc: *const sg_buffer_desc, result: sg_buffer, user_data: *mut c_void),
    >,
    pub make_image: Option<
        unsafe extern "C" fn(desc: *const sg_image_desc, result: sg_image, user_data: *mut c_void),
    >,
    pub make_shader: Option<
        unsafe extern "C" fn(desc: *const sg_shader_desc, result: sg_shader, user_data: *mut c_void),
    >,
    pub make_pipeline: Option<
        unsafe extern "C" fn(
            desc: *const sg_pipeline_desc,
            result: sg_pipeline,
            user_data: *mut c_void,
        ),
    >,
    pub make_pass: Option<
        unsafe extern "C" fn(desc: *const sg_pass_desc, result: sg_pass, user_data: *mut c_void),
    >,
    pub destroy_buffer: Option<unsafe extern "C" fn(buf: sg_buffer, user_data: *mut c_void)>,
    pub destroy_image: Option<unsafe extern "C" fn(img: sg_image, user_data: *mut c_void)>,
    pub destroy_shader: Option<unsafe extern "C" fn(shd: sg_shader, user_data: *mut c_void)>,
    pub destroy_pipeline: Option<unsafe extern "C" fn(pip: sg_pipeline, user_data: *mut c_void)>,
    pub destroy_pass: Option<unsafe extern "C" fn(pass: sg_pass, user_data: *mut c_void)>,
    pub update_buffer: Option<
        unsafe extern "C" fn(
            buf: sg_buffer,
            data_ptr: *const c_void,
            data_size: c_int,
            user_data: *mut c_void,
        ),
    >,
    pub update_image: Option<
        unsafe extern "C" fn(img: sg_image, data: *const sg_image_content, user_data: *mut c_void),
    >,
    pub append_buffer: Option<
        unsafe extern "C" fn(
            buf: sg_buffer,
            data_ptr: *const c_void,
            data_size: c_int,
            result: c_int,
            user_data: *mut c_void,
        ),
    >,
    pub begin_default_pass: Option<
        unsafe extern "C" fn(
            pass_action: *const sg_pass_action,
            width: c_int,
            height: c_int,
            user_data: *mut c_void,
        ),
    >,
    pub begin_pass: Option<
        unsafe extern "C" fn(
            pass: sg_pass,
            pass_action: *const sg_pass_action,
            user_data: *mut c_void,
        ),
    >,
    pub apply_viewport: Option<
        unsafe extern "C" fn(
            x: c_int,
            y: c_int,
            width: c_int,
            height: c_int,
            origin_top_left: bool,
            user_data: *mut c_void,
        ),
    >,
    pub apply_scissor_rect: Option<
        unsafe extern "C" fn(
            x: c_int,
            y: c_int,
            width: c_int,
            height: c_int,
            origin_top_left: bool,
            user_data: *mut c_void,
        ),
    >,
    pub apply_pipeline: Option<unsafe extern "C" fn(pip: sg_pipeline, user_data: *mut c_void)>,
    pub apply_bindings:
        Option<unsafe extern "C" fn(bindings: *const sg_bindings, user_data: *mut c_void)>,
    pub apply_uniforms: Option<
        unsafe extern "C" fn(
            stage: sg_shader_stage,
            ub_index: c_int,
            data: *const c_void,
            num_bytes: c_int,
            user_data: *mut c_void,
        ),
    >,
    pub draw: Option<
        unsafe extern "C" fn(
            base_element: c_int,
            num_elements: c_int,
            num_instances: c_int,
            user_data: *mut c_void,
        ),
    >,
    pub end_pass: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
    pub commit: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
    pub alloc_buffer: Option<unsafe extern "C" fn(result: sg_buffer, user_data: *mut c_void)>,
    pub alloc_image: Option<unsafe extern "C" fn(result: sg_image, user_data: *mut c_void)>,
    pub alloc_shader: Option<unsafe extern "C" fn(result: sg_shader, user_data: *mut c_void)>,
    pub alloc_pipeline: Option<unsafe extern "C" fn(result: sg_pipeline, user_data: *mut c_void)>,
    pub alloc_pass: Option<unsafe extern "C" fn(result: sg_pass, user_data: *mut c_void)>,
    pub init_buffer: Option<
        unsafe extern "C" fn(
            buf_id: sg_buffer,
            desc: *const sg_buffer_desc,
            user_data: *mut c_void,
        ),
    >,
    pub init_image: Option<
        unsafe extern "C" fn(img_id: sg_image, desc: *const sg_image_desc, user_data: *mut c_void),
    >,
    pub init_shader: Option<
        unsafe extern "C" fn(
            shd_id: sg_shader,
            desc: *const sg_shader_desc,
            user_data: *mut c_void,
        ),
    >,
    pub init_pipeline: Option<
        unsafe extern "C" fn(
            pip_id: sg_pipeline,
            desc: *const sg_pipeline_desc,
            user_data: *mut c_void,
        ),
    >,
    pub init_pass: Option<
        unsafe extern "C" fn(pass_id: sg_pass, desc: *const sg_pass_desc, user_data: *mut c_void),
    >,
    pub fail_buffer: Option<unsafe extern "C" fn(buf_id: sg_buffer, user_data: *mut c_void)>,
    pub fail_image: Option<unsafe extern "C" fn(img_id: sg_image, user_data: *mut c_void)>,
    pub fail_shader: Option<unsafe extern "C" fn(shd_id: sg_shader, user_data: *mut c_void)>,
    pub fail_pipeline: Option<unsafe extern "C" fn(pip_id: sg_pipeline, user_data: *mut c_void)>,
    pub fail_pass: Option<unsafe extern "C" fn(pass_id: sg_pass, user_data: *mut c_void)>,
    pub push_debug_group:
        Option<unsafe extern "C" fn(name: *const c_char, user_data: *mut c_void)>,
    pub pop_debug_group: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
    pub err_buffer_pool_exhausted: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
    pub err_image_pool_exhausted: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
    pub err_shader_pool_exhausted: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
    pub err_pipeline_pool_exhausted: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
    pub err_pass_pool_exhausted: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
    pub err_context_mismatch: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
    pub err_pass_invalid: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
    pub err_draw_invalid: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
    pub err_bindings_invalid: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
}

zeroed_default!(
    sg_buffer_desc,
    sg_subimage_content,
    sg_image_content,
    sg_image_desc,
    sg_shader_attr_desc,
    sg_shader_uniform_desc,
    sg_shader_uniform_block_desc,
    sg_shader_image_desc,
    sg_shader_stage_desc,
    sg_shader_desc,
    sg_pipeline_desc,
    sg_pass_desc,
    sg_mtl_context_desc,
    sg_d3d11_context_desc,
    sg_wgpu_context_desc,
    sg_context_desc,
    sg_desc,
    sg_trace_hooks,
);
