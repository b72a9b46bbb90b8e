//! Stand-in for the sokol shared library.
//!
//! Exports every registered function under its real name. Each export
//! records its name and arguments and returns a recognisable value, so a
//! test can tell that a forwarded call reached the library intact.

use std::ffi::CStr;

use parking_lot::{Mutex, const_mutex};
use sdyn_types::*;

/// Returned by every function with a string result.
pub static STUB_NAME: &CStr = c"sdyn-stub";
/// Returned by every function with a pointer result.
pub const SENTINEL_ADDRESS: usize = 0x5D0;
/// Id of every handle the stub hands out.
pub const SENTINEL_ID: u32 = 0x5D;

struct CallLog {
    last: String,
    count: usize,
}

static CALLS: Mutex<CallLog> = const_mutex(CallLog {
    last: String::new(),
    count: 0,
});

fn record(name: &str, args: &[String]) {
    let mut log = CALLS.lock();
    log.last = format!("{name}({})", args.join(", "));
    log.count += 1;
}

/// Fixed value a stub returns for its result type.
pub trait Sentinel {
    fn sentinel() -> Self;
}

macro_rules! sentinel {
    ($($ty:ty => $value:expr;)*) => {
        $(
            impl Sentinel for $ty {
                fn sentinel() -> Self {
                    $value
                }
            }
        )*
    };
}

sentinel! {
    () => ();
    bool => true;
    c_int => 42;
    f32 => 1.5;
    u32 => 0xDEAD_BEEF;
    u64 => 0x0123_4567_89AB_CDEF;
    *mut c_void => SENTINEL_ADDRESS as *mut c_void;
    *const c_void => SENTINEL_ADDRESS as *const c_void;
    *const c_char => STUB_NAME.as_ptr();
    sg_buffer => sg_buffer { id: SENTINEL_ID };
    sg_image => sg_image { id: SENTINEL_ID };
    sg_shader => sg_shader { id: SENTINEL_ID };
    sg_pipeline => sg_pipeline { id: SENTINEL_ID };
    sg_pass => sg_pass { id: SENTINEL_ID };
    sg_context => sg_context { id: SENTINEL_ID };
    sg_backend => sg_backend::WGPU;
    sg_resource_state => sg_resource_state::VALID;
    sg_features => sg_features {
        instancing: true,
        multiple_render_targets: true,
        ..Default::default()
    };
    sg_limits => sg_limits {
        max_image_size_2d: 4096,
        max_vertex_attrs: 16,
        ..Default::default()
    };
    sg_pixelformat_info => sg_pixelformat_info {
        sample: true,
        filter: true,
        ..Default::default()
    };
    sg_buffer_info => sg_buffer_info {
        slot: sg_slot_info {
            state: sg_resource_state::VALID,
            res_id: SENTINEL_ID,
            ctx_id: 1,
        },
        ..Default::default()
    };
    sg_image_info => sg_image_info {
        width: 256,
        height: 128,
        ..Default::default()
    };
    sg_shader_info => sg_shader_info::default();
    sg_pipeline_info => sg_pipeline_info::default();
    sg_pass_info => sg_pass_info::default();
    sapp_desc => sapp_desc {
        width: 640,
        height: 480,
        ..Default::default()
    };
    sg_desc => sg_desc {
        buffer_pool_size: 128,
        ..Default::default()
    };
    sg_trace_hooks => sg_trace_hooks::default();
    sg_buffer_desc => sg_buffer_desc::default();
    sg_image_desc => sg_image_desc::default();
    sg_shader_desc => sg_shader_desc::default();
    sg_pipeline_desc => sg_pipeline_desc::default();
    sg_pass_desc => sg_pass_desc::default();
    sg_context_desc => sg_context_desc::default();
}

macro_rules! stub_functions {
    (
        group = $group:expr;
        $(fn $name:ident($($param:ident : $ty:ty),* $(,)?) $(-> $ret:ty)?;)*
    ) => {
        $(
            #[unsafe(no_mangle)]
            pub extern "system" fn $name($($param: $ty),*) $(-> $ret)? {
                let args: Vec<String> = vec![$(format!("{:?}", $param)),*];
                record(stringify!($name), &args);
                Sentinel::sentinel()
            }
        )*
    };
}

sdyn_registry::sapp_functions!(stub_functions! {});
sdyn_registry::sg_functions!(stub_functions! {});
sdyn_registry::sglue_functions!(stub_functions! {});

/// Plain arithmetic export for loader tests that bind their own table.
#[unsafe(no_mangle)]
pub extern "system" fn add(a: c_int, b: c_int) -> c_int {
    record("add", &[format!("{a:?}"), format!("{b:?}")]);
    a.wrapping_add(b)
}

/// Copies the last recorded call into `out` as a NUL-terminated string,
/// truncating to `capacity`. Returns the untruncated length.
///
/// # Safety
///
/// `out` must be null or point to `capacity` writable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sdyn_stub_last_call(out: *mut c_char, capacity: usize) -> usize {
    let log = CALLS.lock();
    let bytes = log.last.as_bytes();
    if !out.is_null() && capacity > 0 {
        let len = bytes.len().min(capacity - 1);
        // SAFETY: `len + 1 <= capacity` bytes are written, as the caller allows.
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr().cast::<c_char>(), out, len);
            *out.add(len) = 0;
        }
    }
    bytes.len()
}

#[unsafe(no_mangle)]
pub extern "C" fn sdyn_stub_call_count() -> usize {
    CALLS.lock().count
}

#[unsafe(no_mangle)]
pub extern "C" fn sdyn_stub_reset() {
    let mut log = CALLS.lock();
    log.last.clear();
    log.count = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    static SERIAL: Mutex<()> = const_mutex(());

    fn last_call() -> String {
        let mut buffer = [0 as c_char; 128];
        let len = unsafe { sdyn_stub_last_call(buffer.as_mut_ptr(), buffer.len()) };
        let text = unsafe { CStr::from_ptr(buffer.as_ptr()) };
        assert_eq!(text.to_bytes().len(), len.min(buffer.len() - 1));
        text.to_string_lossy().into_owned()
    }

    #[test]
    fn exports_record_name_and_arguments() {
        let _serial = SERIAL.lock();
        sdyn_stub_reset();

        sg_draw(0, 6, 2);
        assert_eq!(last_call(), "sg_draw(0, 6, 2)");

        sg_destroy_buffer(sg_buffer { id: 7 });
        assert_eq!(last_call(), "sg_destroy_buffer(sg_buffer { id: 7 })");

        assert_eq!(add(2, 3), 5);
        assert_eq!(last_call(), "add(2, 3)");
        assert_eq!(sdyn_stub_call_count(), 3);
    }

    #[test]
    fn results_are_sentinels() {
        let _serial = SERIAL.lock();

        assert!(sapp_isvalid());
        assert_eq!(sapp_width(), 42);
        assert_eq!(sapp_dpi_scale(), 1.5);
        assert_eq!(sapp_frame_count(), 0x0123_4567_89AB_CDEF);
        assert_eq!(sg_make_buffer(std::ptr::null()), sg_buffer { id: SENTINEL_ID });
        assert_eq!(sg_query_limits().max_image_size_2d, 4096);
        assert_eq!(sg_mtl_device() as usize, SENTINEL_ADDRESS);
        let title = unsafe { CStr::from_ptr(sapp_get_clipboard_string()) };
        assert_eq!(title, STUB_NAME);
    }

    #[test]
    fn truncated_copy_stays_terminated() {
        let _serial = SERIAL.lock();
        sg_commit();

        let mut small = [1 as c_char; 4];
        let len = unsafe { sdyn_stub_last_call(small.as_mut_ptr(), small.len()) };
        assert_eq!(len, "sg_commit()".len());
        assert_eq!(small[3], 0);
        assert_eq!(unsafe { sdyn_stub_last_call(std::ptr::null_mut(), 0) }, len);
    }
}
