/// Window, input and platform-handle functions of `sokol_app`.
#[macro_export]
macro_rules! sapp_functions {
    ($($generator:ident)::+ ! { $($prefix:tt)* }) => {
        $($generator)::+! {
            $($prefix)*
            group = $crate::Group::APP;
            fn sapp_isvalid() -> bool;
            fn sapp_width() -> c_int;
            fn sapp_height() -> c_int;
            fn sapp_color_format() -> c_int;
            fn sapp_depth_format() -> c_int;
            fn sapp_sample_count() -> c_int;
            fn sapp_high_dpi() -> bool;
            fn sapp_dpi_scale() -> f32;
            fn sapp_show_keyboard(show: bool);
            fn sapp_keyboard_shown() -> bool;
            fn sapp_is_fullscreen() -> bool;
            fn sapp_toggle_fullscreen();
            fn sapp_show_mouse(show: bool);
            fn sapp_mouse_shown() -> bool;
            fn sapp_lock_mouse(lock: bool);
            fn sapp_mouse_locked() -> bool;
            fn sapp_userdata() -> *mut c_void;
            fn sapp_query_desc() -> sapp_desc;
            fn sapp_request_quit();
            fn sapp_cancel_quit();
            fn sapp_quit();
            fn sapp_consume_event();
            fn sapp_frame_count() -> u64;
            fn sapp_set_clipboard_string(str: *const c_char);
            fn sapp_get_clipboard_string() -> *const c_char;
            fn sapp_set_window_title(str: *const c_char);
            fn sapp_get_num_dropped_files() -> c_int;
            fn sapp_get_dropped_file_path(index: c_int) -> *const c_char;
            fn sapp_run(desc: *const sapp_desc);
            fn sapp_gles2() -> bool;
            fn sapp_html5_ask_leave_site(ask: bool);
            fn sapp_html5_get_dropped_file_size(index: c_int) -> u32;
            fn sapp_html5_fetch_dropped_file(request: *const sapp_html5_fetch_request);
            fn sapp_metal_get_device() -> *const c_void;
            fn sapp_metal_get_renderpass_descriptor() -> *const c_void;
            fn sapp_metal_get_drawable() -> *const c_void;
            fn sapp_macos_get_window() -> *const c_void;
            fn sapp_ios_get_window() -> *const c_void;
            fn sapp_d3d11_get_device() -> *const c_void;
            fn sapp_d3d11_get_device_context() -> *const c_void;
            fn sapp_d3d11_get_render_target_view() -> *const c_void;
            fn sapp_d3d11_get_depth_stencil_view() -> *const c_void;
            fn sapp_win32_get_hwnd() -> *const c_void;
            fn sapp_wgpu_get_device() -> *const c_void;
            fn sapp_wgpu_get_render_view() -> *const c_void;
            fn sapp_wgpu_get_resolve_view() -> *const c_void;
            fn sapp_wgpu_get_depth_stencil_view() -> *const c_void;
            fn sapp_android_get_native_activity() -> *const c_void;
        }
    };
}
