/// Resource, pass and query functions of `sokol_gfx`.
///
/// Context functions (`sg_setup_context` and friends) are only meaningful to
/// a library built with multiple contexts, but every build exports them.
#[macro_export]
macro_rules! sg_functions {
    ($($generator:ident)::+ ! { $($prefix:tt)* }) => {
        $($generator)::+! {
            $($prefix)*
            group = $crate::Group::GFX;
            fn sg_setup(desc: *const sg_desc);
            fn sg_shutdown();
            fn sg_isvalid() -> bool;
            fn sg_reset_state_cache();
            fn sg_install_trace_hooks(trace_hooks: *const sg_trace_hooks) -> sg_trace_hooks;
            fn sg_push_debug_group(name: *const c_char);
            fn sg_pop_debug_group();
            fn sg_make_buffer(desc: *const sg_buffer_desc) -> sg_buffer;
            fn sg_make_image(desc: *const sg_image_desc) -> sg_image;
            fn sg_make_shader(desc: *const sg_shader_desc) -> sg_shader;
            fn sg_make_pipeline(desc: *const sg_pipeline_desc) -> sg_pipeline;
            fn sg_make_pass(desc: *const sg_pass_desc) -> sg_pass;
            fn sg_destroy_buffer(buf: sg_buffer);
            fn sg_destroy_image(img: sg_image);
            fn sg_destroy_shader(shd: sg_shader);
            fn sg_destroy_pipeline(pip: sg_pipeline);
            fn sg_destroy_pass(pass: sg_pass);
            fn sg_update_buffer(buf: sg_buffer, data_ptr: *const c_void, data_size: c_int);
            fn sg_update_image(img: sg_image, data: *const sg_image_content);
            fn sg_append_buffer(buf: sg_buffer, data_ptr: *const c_void, data_size: c_int) -> c_int;
            fn sg_query_buffer_overflow(buf: sg_buffer) -> bool;
            fn sg_begin_default_pass(
                pass_action: *const sg_pass_action,
                width: c_int,
                height: c_int,
            );
            fn sg_begin_pass(pass: sg_pass, pass_action: *const sg_pass_action);
            fn sg_apply_viewport(
                x: c_int,
                y: c_int,
                width: c_int,
                height: c_int,
                origin_top_left: bool,
            );
            fn sg_apply_scissor_rect(
                x: c_int,
                y: c_int,
                width: c_int,
                height: c_int,
                origin_top_left: bool,
            );
            fn sg_apply_pipeline(pip: sg_pipeline);
            fn sg_apply_bindings(bindings: *const sg_bindings);
            fn sg_apply_uniforms(
                stage: sg_shader_stage,
                ub_index: c_int,
                data: *const c_void,
                num_bytes: c_int,
            );
            fn sg_draw(base_element: c_int, num_elements: c_int, num_instances: c_int);
            fn sg_end_pass();
            fn sg_commit();
            fn sg_query_desc() -> sg_desc;
            fn sg_query_backend() -> sg_backend;
            fn sg_query_features() -> sg_features;
            fn sg_query_limits() -> sg_limits;
            fn sg_query_pixelformat(fmt: sg_pixel_format) -> sg_pixelformat_info;
            fn sg_query_buffer_state(buf: sg_buffer) -> sg_resource_state;
            fn sg_query_image_state(img: sg_image) -> sg_resource_state;
            fn sg_query_shader_state(shd: sg_shader) -> sg_resource_state;
            fn sg_query_pipeline_state(pip: sg_pipeline) -> sg_resource_state;
            fn sg_query_pass_state(pass: sg_pass) -> sg_resource_state;
            fn sg_query_buffer_info(buf: sg_buffer) -> sg_buffer_info;
            fn sg_query_image_info(img: sg_image) -> sg_image_info;
            fn sg_query_shader_info(shd: sg_shader) -> sg_shader_info;
            fn sg_query_pipeline_info(pip: sg_pipeline) -> sg_pipeline_info;
            fn sg_query_pass_info(pass: sg_pass) -> sg_pass_info;
            fn sg_query_buffer_defaults(desc: *const sg_buffer_desc) -> sg_buffer_desc;
            fn sg_query_image_defaults(desc: *const sg_image_desc) -> sg_image_desc;
            fn sg_query_shader_defaults(desc: *const sg_shader_desc) -> sg_shader_desc;
            fn sg_query_pipeline_defaults(desc: *const sg_pipeline_desc) -> sg_pipeline_desc;
            fn sg_query_pass_defaults(desc: *const sg_pass_desc) -> sg_pass_desc;
            fn sg_alloc_buffer() -> sg_buffer;
            fn sg_alloc_image() -> sg_image;
            fn sg_alloc_shader() -> sg_shader;
            fn sg_alloc_pipeline() -> sg_pipeline;
            fn sg_alloc_pass() -> sg_pass;
            fn sg_dealloc_buffer(buf_id: sg_buffer);
            fn sg_dealloc_image(img_id: sg_image);
            fn sg_dealloc_shader(shd_id: sg_shader);
            fn sg_dealloc_pipeline(pip_id: sg_pipeline);
            fn sg_dealloc_pass(pass_id: sg_pass);
            fn sg_init_buffer(buf_id: sg_buffer, desc: *const sg_buffer_desc);
            fn sg_init_image(img_id: sg_image, desc: *const sg_image_desc);
            fn sg_init_shader(shd_id: sg_shader, desc: *const sg_shader_desc);
            fn sg_init_pipeline(pip_id: sg_pipeline, desc: *const sg_pipeline_desc);
            fn sg_init_pass(pass_id: sg_pass, desc: *const sg_pass_desc);
            fn sg_uninit_buffer(buf_id: sg_buffer) -> bool;
            fn sg_uninit_image(img_id: sg_image) -> bool;
            fn sg_uninit_shader(shd_id: sg_shader) -> bool;
            fn sg_uninit_pipeline(pip_id: sg_pipeline) -> bool;
            fn sg_uninit_pass(pass_id: sg_pass) -> bool;
            fn sg_fail_buffer(buf_id: sg_buffer);
            fn sg_fail_image(img_id: sg_image);
            fn sg_fail_shader(shd_id: sg_shader);
            fn sg_fail_pipeline(pip_id: sg_pipeline);
            fn sg_fail_pass(pass_id: sg_pass);
            fn sg_setup_context() -> sg_context;
            fn sg_activate_context(ctx_id: sg_context);
            fn sg_discard_context(ctx_id: sg_context);
            fn sg_d3d11_device() -> *const c_void;
            fn sg_mtl_device() -> *const c_void;
            fn sg_mtl_render_command_encoder() -> *const c_void;
        }
    };
}
