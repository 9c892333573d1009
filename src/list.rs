pub mod list {
    use std::fmt;

    /// 链表节点：持有一份字符串拷贝以及相邻节点的槽位下标
    struct Node {
        value: Box<str>,
        prev: Option<usize>,
        next: Option<usize>,
    }

    /// 字符串双向链表
    ///
    /// 节点存放在槽位数组（`Vec<Option<Node>>`）中，`prev`/`next` 为槽位下标
    /// 而不是裸指针，删除节点后下标经空闲栈回收复用，其余节点的位置保持稳定。
    /// 支持尾部插入、按值查找和按值删除；查找与删除只作用于第一个匹配的节点，
    /// 允许存在重复值。
    pub struct TextList {
        slots: Vec<Option<Node>>,
        free: Vec<usize>,
        head: Option<usize>,
        tail: Option<usize>,
        len: usize,
    }

    impl TextList {
        /// 构造一个空链表
        pub fn new() -> Self {
            TextList {
                slots: Vec::new(),
                free: Vec::new(),
                head: None,
                tail: None,
                len: 0,
            }
        }

        /// 获取链表当前的节点数量
        pub fn len(&self) -> usize {
            self.len
        }

        /// 判断链表是否为空
        pub fn is_empty(&self) -> bool {
            self.len == 0
        }

        /// 在链表尾部插入一个值
        ///
        /// # 参数
        ///
        /// * `value` - 要插入的字符串，插入时拷贝一份由节点独占持有，允许为空串
        ///
        /// # 操作逻辑
        ///
        /// 1. 新节点优先复用空闲栈中的槽位，没有空闲槽位时向数组尾部追加
        /// 2. 链表为空时头尾都指向新节点，否则挂在当前尾节点之后
        /// 3. 节点数量加 1
        ///
        /// 不修改任何已有节点的值，对重复值不做限制。
        pub fn insert(&mut self, value: &str) {
            let node = Node {
                value: Box::from(value),
                prev: self.tail,
                next: None,
            };

            let index = match self.free.pop() {
                Some(index) => {
                    debug_assert!(self.slots[index].is_none());
                    self.slots[index] = Some(node);
                    index
                }
                None => {
                    self.slots.push(Some(node));
                    self.slots.len() - 1
                }
            };

            match self.tail {
                Some(tail) => self.node_mut(tail).next = Some(index),
                None => self.head = Some(index),
            }
            self.tail = Some(index);
            self.len += 1;
        }

        /// 从头到尾查找第一个与 `value` 逐字节相等的节点
        ///
        /// # 返回值
        ///
        /// 返回指向节点内部存储值的只读引用，不发生拷贝；没有匹配或链表为空时
        /// 返回 `None`。引用的有效期到下一次修改链表为止，由借用检查器保证。
        pub fn find(&self, value: &str) -> Option<&str> {
            let mut cursor = self.head;
            while let Some(index) = cursor {
                let node = self.node(index);
                if &*node.value == value {
                    return Some(&*node.value);
                }
                cursor = node.next;
            }
            None
        }

        /// 删除第一个与 `value` 逐字节相等的节点
        ///
        /// # 返回值
        ///
        /// 找到并删除返回 `true`；链表为空或没有匹配返回 `false`，此时链表
        /// 保持原状。对空链表删除是合法的空操作，不是错误。
        pub fn remove(&mut self, value: &str) -> bool {
            let mut cursor = self.head;
            while let Some(index) = cursor {
                if &*self.node(index).value == value {
                    self.unlink(index);
                    return true;
                }
                cursor = self.node(index).next;
            }
            false
        }

        /// 获取头节点值的只读引用，链表为空时返回 `None`
        pub fn front(&self) -> Option<&str> {
            self.head.map(|index| &*self.node(index).value)
        }

        /// 获取尾节点值的只读引用，链表为空时返回 `None`
        pub fn back(&self) -> Option<&str> {
            self.tail.map(|index| &*self.node(index).value)
        }

        /// 清空链表，释放所有节点及其字符串
        pub fn clear(&mut self) {
            self.slots.clear();
            self.free.clear();
            self.head = None;
            self.tail = None;
            self.len = 0;
        }

        fn node(&self, index: usize) -> &Node {
            self.slots[index].as_ref().expect("stale node index")
        }

        fn node_mut(&mut self, index: usize) -> &mut Node {
            self.slots[index].as_mut().expect("stale node index")
        }

        /// 将指定槽位的节点摘出链表并释放
        ///
        /// 对删除节点的 `prev` 与 `next` 分别处理：任一侧没有邻居时修正对应的
        /// 锚点。唯一节点两侧都没有邻居，此时头尾锚点同时清空。
        fn unlink(&mut self, index: usize) {
            // take 之后节点连同其字符串在本函数结束时释放
            let node = self.slots[index].take().expect("unlink on a free slot");

            match node.prev {
                Some(prev) => self.node_mut(prev).next = node.next,
                None => {
                    debug_assert_eq!(self.head, Some(index));
                    self.head = node.next;
                }
            }
            match node.next {
                Some(next) => self.node_mut(next).prev = node.prev,
                None => {
                    debug_assert_eq!(self.tail, Some(index));
                    self.tail = node.prev;
                }
            }

            self.free.push(index);
            self.len -= 1;
        }
    }

    impl Default for TextList {
        fn default() -> Self {
            Self::new()
        }
    }

    // 格式化输出：从头到尾遍历，输出形式与 Vec 一致
    impl fmt::Debug for TextList {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut entries = f.debug_list();
            let mut cursor = self.head;
            while let Some(index) = cursor {
                let node = self.node(index);
                entries.entry(&node.value);
                cursor = node.next;
            }
            entries.finish()
        }
    }

    #[cfg(test)]
    impl TextList {
        fn forward_values(&self) -> Vec<&str> {
            let mut values = Vec::new();
            let mut cursor = self.head;
            while let Some(index) = cursor {
                let node = self.node(index);
                values.push(&*node.value);
                cursor = node.next;
            }
            values
        }

        fn backward_values(&self) -> Vec<&str> {
            let mut values = Vec::new();
            let mut cursor = self.tail;
            while let Some(index) = cursor {
                let node = self.node(index);
                values.push(&*node.value);
                cursor = node.prev;
            }
            values
        }
    }

    // 测试代码
    #[cfg(test)]
    mod tests {
        use super::*;

        // 插入顺序与头尾锚点
        #[test]
        fn test_insert_keeps_insertion_order() {
            let mut list = TextList::new();
            list.insert("a");
            list.insert("b");
            list.insert("c");

            assert_eq!(list.len(), 3);
            assert_eq!(list.forward_values(), vec!["a", "b", "c"]);
            assert_eq!(list.front(), Some("a"));
            assert_eq!(list.back(), Some("c"));
        }

        // 节点数量 = 插入次数 - 成功删除次数
        #[test]
        fn test_len_tracks_inserts_and_removes() {
            let mut list = TextList::new();
            for value in ["a", "b", "c", "d"] {
                list.insert(value);
            }
            assert_eq!(list.len(), 4);

            assert!(list.remove("b"));
            assert!(list.remove("d"));
            assert!(!list.remove("missing"));
            assert_eq!(list.len(), 2);
        }

        // 任意操作序列之后，反向遍历都是正向遍历的逆序，且计数等于 len
        #[test]
        fn test_traversal_is_symmetric() {
            let mut list = TextList::new();
            for value in ["a", "b", "c", "d", "e"] {
                list.insert(value);
            }
            list.remove("a");
            list.remove("c");
            list.insert("f");
            list.remove("e");

            let forward = list.forward_values();
            let mut reversed = list.backward_values();
            reversed.reverse();
            assert_eq!(forward, reversed);
            assert_eq!(forward.len(), list.len());
        }

        #[test]
        fn test_find_on_empty_list() {
            let list = TextList::new();
            assert_eq!(list.find("x"), None);
        }

        #[test]
        fn test_insert_then_find() {
            let mut list = TextList::new();
            list.insert("第一");
            list.insert("第二");
            assert_eq!(list.find("第二"), Some("第二"));
            assert_eq!(list.find("第三"), None);
        }

        #[test]
        fn test_remove_on_empty_list() {
            let mut list = TextList::new();
            assert!(!list.remove("x"));
            assert_eq!(list.len(), 0);
        }

        // 唯一节点同时是头和尾，删除后两个锚点都必须清空
        #[test]
        fn test_remove_sole_element() {
            let mut list = TextList::new();
            list.insert("only");

            assert!(list.remove("only"));
            assert_eq!(list.len(), 0);
            assert_eq!(list.front(), None);
            assert_eq!(list.back(), None);

            // 锚点清空后还能继续插入
            list.insert("again");
            assert_eq!(list.front(), Some("again"));
            assert_eq!(list.back(), Some("again"));
        }

        #[test]
        fn test_remove_head() {
            let mut list = TextList::new();
            for value in ["a", "b", "c"] {
                list.insert(value);
            }

            assert!(list.remove("a"));
            assert_eq!(list.front(), Some("b"));
            assert_eq!(list.back(), Some("c"));
            assert_eq!(list.forward_values(), vec!["b", "c"]);
            assert_eq!(list.backward_values(), vec!["c", "b"]);
        }

        #[test]
        fn test_remove_tail() {
            let mut list = TextList::new();
            for value in ["a", "b", "c"] {
                list.insert(value);
            }

            assert!(list.remove("c"));
            assert_eq!(list.back(), Some("b"));
            assert_eq!(list.forward_values(), vec!["a", "b"]);
            assert_eq!(list.backward_values(), vec!["b", "a"]);
        }

        // 删除中间节点后，前驱和后继互相连接
        #[test]
        fn test_remove_interior() {
            let mut list = TextList::new();
            for value in ["a", "b", "c"] {
                list.insert(value);
            }

            assert!(list.remove("b"));
            assert_eq!(list.forward_values(), vec!["a", "c"]);
            assert_eq!(list.backward_values(), vec!["c", "a"]);
        }

        // 重复值只影响第一个匹配的节点
        #[test]
        fn test_remove_first_duplicate_only() {
            let mut list = TextList::new();
            list.insert("x");
            list.insert("y");
            list.insert("x");

            assert!(list.remove("x"));
            assert_eq!(list.forward_values(), vec!["y", "x"]);
            assert!(list.remove("x"));
            assert_eq!(list.forward_values(), vec!["y"]);
            assert!(!list.remove("x"));
        }

        #[test]
        fn test_no_match_leaves_list_unchanged() {
            let mut list = TextList::new();
            list.insert("a");
            list.insert("b");

            assert!(!list.remove("z"));
            assert_eq!(list.len(), 2);
            assert_eq!(list.forward_values(), vec!["a", "b"]);
        }

        // 删除腾出的槽位会被后续插入复用，数组不增长
        #[test]
        fn test_vacated_slots_are_reused() {
            let mut list = TextList::new();
            for value in ["a", "b", "c"] {
                list.insert(value);
            }
            assert_eq!(list.slots.len(), 3);

            list.remove("b");
            list.insert("d");
            assert_eq!(list.slots.len(), 3);
            assert_eq!(list.forward_values(), vec!["a", "c", "d"]);
        }

        // 空串是合法的值
        #[test]
        fn test_empty_string_value() {
            let mut list = TextList::new();
            list.insert("");
            assert_eq!(list.find(""), Some(""));
            assert!(list.remove(""));
            assert!(list.is_empty());
        }

        #[test]
        fn test_clear_resets_everything() {
            let mut list = TextList::new();
            list.insert("a");
            list.insert("b");

            list.clear();
            assert_eq!(list.len(), 0);
            assert_eq!(list.front(), None);
            assert_eq!(list.back(), None);

            list.insert("c");
            assert_eq!(list.forward_values(), vec!["c"]);
        }

        #[test]
        fn test_debug_format() {
            let mut list = TextList::new();
            list.insert("a");
            list.insert("b");
            assert_eq!(format!("{:?}", list), r#"["a", "b"]"#);
        }
    }
}

pub mod c_list {
    use crate::other_list::TextList;
    use crate::other_utils::{ConvertError, cstring_to_string, str_to_cstr};
    use std::os::raw::{c_char, c_int};
    use std::ptr;

    // 不透明指针类型，对 C 完全隐藏实现细节
    #[repr(C)]
    pub struct CTextList {
        inner: TextList,
    }

    // 错误码定义
    pub const TL_SUCCESS: c_int = 0;
    pub const TL_ERROR_NULL_PTR: c_int = -1;
    pub const TL_ERROR_INVALID_UTF8: c_int = -2;

    // 将字符串转换错误映射为错误码
    fn status_of(err: &ConvertError) -> c_int {
        match err {
            ConvertError::NullPointer => TL_ERROR_NULL_PTR,
            ConvertError::InvalidUtf8(_) => TL_ERROR_INVALID_UTF8,
        }
    }

    /// 创建一个新的 C 语言接口可用的链表实例
    ///
    /// # 返回值
    ///
    /// 返回指向 [CTextList] 实例的裸指针，该实例内部包含一个空链表。
    /// 使用完毕后必须通过 [tl_free] 释放。
    #[unsafe(no_mangle)]
    pub extern "C" fn tl_new() -> *mut CTextList {
        Box::into_raw(Box::new(CTextList {
            inner: TextList::new(),
        }))
    }

    /// 释放由 [tl_new] 创建的链表实例
    ///
    /// 链表中剩余的所有节点及其字符串随之释放。
    ///
    /// # 参数
    ///
    /// * `list` - 指向 [CTextList] 实例的裸指针，传入空指针时不执行任何操作。
    #[unsafe(no_mangle)]
    pub extern "C" fn tl_free(list: *mut CTextList) {
        if !list.is_null() {
            unsafe {
                let _ = Box::from_raw(list);
            }
        }
    }

    /// 获取链表当前的节点数量
    ///
    /// # 参数
    ///
    /// * `list` - 指向 [CTextList] 实例的常量裸指针。
    ///
    /// # 返回值
    ///
    /// 返回链表中节点的数量，传入空指针时返回 0。
    #[unsafe(no_mangle)]
    pub extern "C" fn tl_len(list: *const CTextList) -> usize {
        if list.is_null() {
            0
        } else {
            unsafe { (*list).inner.len() }
        }
    }

    /// 检查链表是否为空
    ///
    /// # 参数
    ///
    /// * `list` - 指向 [CTextList] 实例的常量裸指针。
    ///
    /// # 返回值
    ///
    /// * `1` - 链表为空
    /// * `0` - 链表非空
    /// * [TL_ERROR_NULL_PTR] - 传入了空指针
    #[unsafe(no_mangle)]
    pub extern "C" fn tl_is_empty(list: *const CTextList) -> c_int {
        if list.is_null() {
            TL_ERROR_NULL_PTR
        } else {
            unsafe { (*list).inner.is_empty() as c_int }
        }
    }

    /// 在链表尾部插入一个值
    ///
    /// 字符串被拷贝进链表，调用方保留 `value` 的所有权。
    ///
    /// # 参数
    ///
    /// * `list` - 指向 [CTextList] 实例的可变裸指针。
    /// * `value` - 以空字符结尾的 C 字符串，要求是合法的 UTF-8。
    ///
    /// # 返回值
    ///
    /// * [TL_SUCCESS] - 插入成功
    /// * [TL_ERROR_NULL_PTR] - `list` 或 `value` 为空指针
    /// * [TL_ERROR_INVALID_UTF8] - `value` 不是合法的 UTF-8，此时链表不变
    #[unsafe(no_mangle)]
    pub extern "C" fn tl_insert(list: *mut CTextList, value: *const c_char) -> c_int {
        if list.is_null() {
            return TL_ERROR_NULL_PTR;
        }
        let value = match cstring_to_string(value) {
            Ok(value) => value,
            Err(err) => return status_of(&err),
        };

        unsafe {
            (*list).inner.insert(&value);
        }
        TL_SUCCESS
    }

    /// 查找第一个与 `value` 相等的节点
    ///
    /// # 参数
    ///
    /// * `list` - 指向 [CTextList] 实例的常量裸指针。
    /// * `value` - 以空字符结尾的 C 字符串，要求是合法的 UTF-8。
    ///
    /// # 返回值
    ///
    /// 找到时返回匹配值的一份新拷贝，调用方使用完毕后必须通过
    /// [crate::other_utils::free_cstring] 释放；没有匹配或参数非法时返回空指针。
    ///
    /// # 注意
    ///
    /// 这里返回拷贝而不是指向链表内部的指针：内部存储会随删除操作失效，
    /// C 调用方无法被约束在这个有效期之内。
    #[unsafe(no_mangle)]
    pub extern "C" fn tl_find(list: *const CTextList, value: *const c_char) -> *mut c_char {
        if list.is_null() {
            return ptr::null_mut();
        }
        let value = match cstring_to_string(value) {
            Ok(value) => value,
            Err(_) => return ptr::null_mut(),
        };

        unsafe {
            match (*list).inner.find(&value) {
                Some(found) => str_to_cstr(found.to_owned()),
                None => ptr::null_mut(),
            }
        }
    }

    /// 删除第一个与 `value` 相等的节点
    ///
    /// # 参数
    ///
    /// * `list` - 指向 [CTextList] 实例的可变裸指针。
    /// * `value` - 以空字符结尾的 C 字符串，要求是合法的 UTF-8。
    ///
    /// # 返回值
    ///
    /// * `1` - 找到并删除了一个节点
    /// * `0` - 没有匹配的节点，链表不变
    /// * [TL_ERROR_NULL_PTR] - `list` 或 `value` 为空指针
    /// * [TL_ERROR_INVALID_UTF8] - `value` 不是合法的 UTF-8
    #[unsafe(no_mangle)]
    pub extern "C" fn tl_remove(list: *mut CTextList, value: *const c_char) -> c_int {
        if list.is_null() {
            return TL_ERROR_NULL_PTR;
        }
        let value = match cstring_to_string(value) {
            Ok(value) => value,
            Err(err) => return status_of(&err),
        };

        unsafe { (*list).inner.remove(&value) as c_int }
    }

    /// 清空链表
    ///
    /// # 参数
    ///
    /// * `list` - 指向 [CTextList] 实例的可变裸指针。
    ///
    /// # 返回值
    ///
    /// * [TL_SUCCESS] - 清空成功
    /// * [TL_ERROR_NULL_PTR] - 传入了空指针
    #[unsafe(no_mangle)]
    pub extern "C" fn tl_clear(list: *mut CTextList) -> c_int {
        if list.is_null() {
            return TL_ERROR_NULL_PTR;
        }
        unsafe {
            (*list).inner.clear();
        }
        TL_SUCCESS
    }

}
