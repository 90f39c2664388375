use std::fmt::Debug;

/// Generates the values from `start` (inclusive) to `end` (exclusive)
pub fn gen_array(start: i32, end: i32) -> Vec<i32> {
    (start..end).collect()
}

/// Helper function to test If the chunks are in-order views which cover `src`
/// exactly
pub fn assert_partition<T>(src: &[T], chunks: &[&[T]])
where
    T: PartialEq + Debug,
{
    let mut offset = 0;
    for chunk in chunks {
        assert!(offset + chunk.len() <= src.len(), "chunk exceeds source");
        assert_eq!(*chunk, &src[offset..offset + chunk.len()]);
        assert!(
            std::ptr::eq(chunk.as_ptr(), src[offset..].as_ptr()),
            "chunk at {offset} does not borrow from source"
        );
        offset += chunk.len();
    }

    assert_eq!(offset, src.len(), "chunks do not cover source");
}
