/// 依 `char` 逐一比對正序與反序，不做大小寫或空白正規化。
pub fn is_palindrome(text: &str) -> bool {
    tracing::trace!(len = text.len(), "is_palindrome");
    text.chars().eq(text.chars().rev())
}
