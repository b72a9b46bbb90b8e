use core::ffi::{c_char, c_int, c_void};

use crate::{c_enum, zeroed_default};

/// Input event delivered to `sapp_desc::event_cb`.
///
/// Only ever handled by pointer on this side of the library boundary.
#[repr(C)]
pub struct sapp_event {
    _private: [u8; 0],
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sapp_desc {
    pub init_cb: Option<unsafe extern "C" fn()>,
    pub frame_cb: Option<unsafe extern "C" fn()>,
    pub cleanup_cb: Option<unsafe extern "C" fn()>,
    pub event_cb: Option<unsafe extern "C" fn(event: *const sapp_event)>,
    pub fail_cb: Option<unsafe extern "C" fn(msg: *const c_char)>,

    pub user_data: *mut c_void,
    pub init_userdata_cb: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
    pub frame_userdata_cb: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
    pub cleanup_userdata_cb: Option<unsafe extern "C" fn(user_data: *mut c_void)>,
    pub event_userdata_cb:
        Option<unsafe extern "C" fn(event: *const sapp_event, user_data: *mut c_void)>,
    pub fail_userdata_cb: Option<unsafe extern "C" fn(msg: *const c_char, user_data: *mut c_void)>,

    pub width: c_int,
    pub height: c_int,
    pub sample_count: c_int,
    pub swap_interval: c_int,
    pub high_dpi: bool,
    pub fullscreen: bool,
    pub alpha: bool,
    pub window_title: *const c_char,
    pub user_cursor: bool,
    pub enable_clipboard: bool,
    pub clipboard_size: c_int,
    pub enable_dragndrop: bool,
    pub max_dropped_files: c_int,
    pub max_dropped_file_path_length: c_int,

    pub html5_canvas_name: *const c_char,
    pub html5_canvas_resize: bool,
    pub html5_preserve_drawing_buffer: bool,
    pub html5_premultiplied_alpha: bool,
    pub html5_ask_leave_site: bool,
    pub ios_keyboard_resizes_canvas: bool,
    pub gl_force_gles2: bool,
}

c_enum! {
    sapp_html5_fetch_error {
        NO_ERROR = 0,
        BUFFER_TOO_SMALL = 1,
        OTHER = 2,
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sapp_html5_fetch_response {
    pub succeeded: bool,
    pub error_code: sapp_html5_fetch_error,
    pub file_index: c_int,
    pub fetched_size: u32,
    pub buffer_ptr: *mut c_void,
    pub buffer_size: u32,
    pub user_data: *mut c_void,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct sapp_html5_fetch_request {
    pub dropped_file_index: c_int,
    pub callback: Option<unsafe extern "C" fn(response: *const sapp_html5_fetch_response)>,
    pub buffer_ptr: *mut c_void,
    pub buffer_size: u32,
    pub user_data: *mut c_void,
}

zeroed_default!(sapp_desc, sapp_html5_fetch_response, sapp_html5_fetch_request);
