use super::BufferError;
use std::fmt;
use std::marker::PhantomData;
use std::mem::size_of;
use std::ptr;
use std::slice;

/// A contiguous, C-allocated array of fixed-size records.
///
/// The allocation always holds exactly `len` records: the first append allocates one
/// record with `malloc`, every later append grows the block by one record with
/// `realloc`. Nothing is over-allocated, so `byte_len()` is both the size of the
/// contents and the size of the allocation.
///
/// An empty sequence owns no memory and exposes a null pointer, which is how the
/// native toolkit expects an absent optional array.
pub struct NativeSequence<T: Copy> {
    ptr: *mut T,
    len: usize,
    _marker: PhantomData<T>,
}

// The sequence exclusively owns its allocation.
unsafe impl<T: Copy + Send> Send for NativeSequence<T> {}

impl<T: Copy> NativeSequence<T> {
    const RECORD_SIZE: usize = {
        assert!(size_of::<T>() > 0, "zero-sized records cannot be marshaled");
        size_of::<T>()
    };

    pub const fn new() -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Appends one record, growing the native block by exactly one record.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::Exhausted` if the allocator fails. The existing records
    /// stay valid and unchanged in that case.
    pub fn push(&mut self, record: T) -> Result<(), BufferError> {
        let requested = (self.len + 1)
            .checked_mul(Self::RECORD_SIZE)
            .ok_or(BufferError::Exhausted {
                requested: usize::MAX,
            })?;

        let grown = unsafe {
            if self.ptr.is_null() {
                libc::malloc(requested)
            } else {
                libc::realloc(self.ptr.cast(), requested)
            }
        }
        .cast::<T>();

        if grown.is_null() {
            return Err(BufferError::Exhausted { requested });
        }

        unsafe { grown.add(self.len).write(record) };
        self.ptr = grown;
        self.len += 1;
        Ok(())
    }

    pub fn extend<I>(&mut self, records: I) -> Result<(), BufferError>
    where
        I: IntoIterator<Item = T>,
    {
        for record in records {
            self.push(record)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size of the native allocation in bytes.
    pub fn byte_len(&self) -> usize {
        self.len * Self::RECORD_SIZE
    }

    /// Base pointer of the block, or null when the sequence is empty.
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    pub fn as_slice(&self) -> &[T] {
        if self.ptr.is_null() {
            &[]
        } else {
            unsafe { slice::from_raw_parts(self.ptr, self.len) }
        }
    }

    /// Frees the block and resets the sequence to empty. Safe to call repeatedly.
    pub fn release(&mut self) {
        if !self.ptr.is_null() {
            unsafe { libc::free(self.ptr.cast()) };
            self.ptr = ptr::null_mut();
        }
        self.len = 0;
    }
}

impl<T: Copy> Default for NativeSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Drop for NativeSequence<T> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for NativeSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
