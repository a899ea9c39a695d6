#[derive(Debug)]
pub struct ByteStr<B>(pub B);

impl<B: AsRef<[u8]>> std::fmt::Display for ByteStr<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.0.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::ByteStr;

    #[test]
    fn displays_bytes() {
        assert_eq!(ByteStr(b"ATGC").to_string(), "ATGC");
        assert_eq!(ByteStr(Vec::<u8>::new()).to_string(), "");
        assert_eq!(ByteStr("ATGé".as_bytes()).to_string(), "ATGé");
    }
}
