pub mod utils {
    use std::ffi::{CStr, CString, c_char};
    use thiserror::Error;

    // 错误定义
    #[derive(Debug, Error)]
    pub enum ConvertError {
        #[error("空指针")]
        NullPointer,
        #[error("无效的 UTF-8 序列: {0}")]
        InvalidUtf8(#[from] std::str::Utf8Error),
    }

    /// 将 C 风格字符串转换为 Rust `String`。
    ///
    /// # 参数
    ///
    /// * `s` - 指向 C 风格字符串的指针 (`*const c_char`)。该字符串应以空字符结尾。
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 如果转换成功，返回包含转换后字符串的 `Result::Ok`。
    /// * `Err(ConvertError::NullPointer)` - 如果传入的指针为空。
    /// * `Err(ConvertError::InvalidUtf8)` - 如果输入的 C 字符串包含无效的 UTF-8 序列。
    ///
    /// # 安全性
    ///
    /// 该函数使用了 `unsafe` 块来进行裸指针操作。调用者必须确保非空指针指向一个
    /// 以空字符结尾的 C 风格字符串，并且在调用期间保持有效。
    pub fn cstring_to_string(s: *const c_char) -> Result<String, ConvertError> {
        if s.is_null() {
            return Err(ConvertError::NullPointer);
        }
        unsafe {
            let c_str = CStr::from_ptr(s);
            Ok(c_str.to_str()?.to_owned())
        }
    }

    /// 将 Rust 字符串转换为 C 风格的字符串
    ///
    /// # 参数
    ///
    /// * `s` - 一个 `String` 类型的参数，代表需要转换的 Rust 字符串。
    ///
    /// # 返回值
    ///
    /// 返回一个 `*mut c_char` 类型的指针，指向转换后的 C 风格字符串。
    /// 所有权转移给调用者，使用完毕后必须通过 [free_cstring] 释放，
    /// 否则会造成内存泄漏。
    pub fn str_to_cstr(s: String) -> *mut c_char {
        // 内含空字符的字符串无法表示为 C 字符串，此时返回空串
        let a = CString::new(s).unwrap_or_else(|_| CString::new("").unwrap());
        a.into_raw()
    }

    /// 释放 `CString` 内存的函数
    ///
    /// 这个函数是为了提供给 C 语言代码使用的，因此使用 `extern "C"` 声明。
    ///
    /// # 参数
    ///
    /// * `ptr` - 一个指向 C 字符串的指针。
    #[unsafe(no_mangle)]
    pub extern "C" fn free_cstring(ptr: *mut c_char) {
        // 使用 `unsafe` 块，因为涉及到直接操作原始指针
        unsafe {
            // 检查指针是否为空，避免传入无效指针导致的错误
            if ptr.is_null() {
                return;
            }
            // 通过 `from_raw` 方法将指针转换回 `CString`，这会自动释放内存
            let _ = CString::from_raw(ptr);
        }
    }

}
