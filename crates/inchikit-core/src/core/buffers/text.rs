use super::BufferError;
use std::ffi::{CStr, c_char};
use std::fmt;
use std::ptr;

/// A NUL-terminated copy of a string in C-allocated memory.
///
/// An empty string owns nothing and exposes a null pointer; the native toolkit
/// treats a null options pointer as "no options".
pub struct NativeText {
    ptr: *mut c_char,
    len: usize,
}

unsafe impl Send for NativeText {}

impl NativeText {
    pub const fn empty() -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
        }
    }

    /// Copies `text` into a fresh `malloc` block of `len + 1` bytes.
    ///
    /// # Errors
    ///
    /// - `InteriorNul` if `text` contains a NUL byte (it would truncate the C string).
    /// - `Exhausted` if the allocator fails.
    pub fn new(text: &str, field: &'static str) -> Result<Self, BufferError> {
        if text.is_empty() {
            return Ok(Self::empty());
        }
        if text.as_bytes().contains(&0) {
            return Err(BufferError::InteriorNul { field });
        }

        let requested = text.len() + 1;
        let block = unsafe { libc::malloc(requested) }.cast::<c_char>();
        if block.is_null() {
            return Err(BufferError::Exhausted { requested });
        }
        unsafe {
            ptr::copy_nonoverlapping(text.as_ptr().cast::<c_char>(), block, text.len());
            block.add(text.len()).write(0);
        }

        Ok(Self {
            ptr: block,
            len: text.len(),
        })
    }

    pub fn as_ptr(&self) -> *const c_char {
        self.ptr
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.ptr.is_null()
    }

    pub fn as_str(&self) -> &str {
        if self.ptr.is_null() {
            return "";
        }
        // Copied from a `&str` without interior NULs, so always valid UTF-8.
        unsafe { CStr::from_ptr(self.ptr) }.to_str().unwrap_or_default()
    }

    pub fn release(&mut self) {
        if !self.ptr.is_null() {
            unsafe { libc::free(self.ptr.cast()) };
            self.ptr = ptr::null_mut();
        }
        self.len = 0;
    }
}

impl Default for NativeText {
    fn default() -> Self {
        Self::empty()
    }
}

impl Drop for NativeText {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for NativeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeText").field(&self.as_str()).finish()
    }
}
