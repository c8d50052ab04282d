use super::blob_error::BlobError;
use std::fmt;
use std::str::FromStr;

const SCHEME: &str = "blob:session-";

/// セッション中だけ有効な、メモリ上のバイナリデータへの不透明なハンドル。
///
/// `BlobStore::create_object_url` からのみ発行される。文字列から復元した場合でも
/// 形式しか検証されないため、実在するかどうかはストアが解決時に判定する。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl {
    origin: u64,
    id: u64,
}

impl ObjectUrl {
    pub(crate) fn new(origin: u64, id: u64) -> Self {
        Self { origin, id }
    }

    pub(crate) fn origin(&self) -> u64 {
        self.origin
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }
}

// 表示形式: blob:session-<origin>/<id>
impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:x}/{:016x}", SCHEME, self.origin, self.id)
    }
}

impl FromStr for ObjectUrl {
    type Err = BlobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || BlobError::Malformed(s.to_string());

        let rest = s.strip_prefix(SCHEME).ok_or_else(malformed)?;
        let (origin, id) = rest.split_once('/').ok_or_else(malformed)?;
        let origin = u64::from_str_radix(origin, 16).map_err(|_| malformed())?;
        let id = u64::from_str_radix(id, 16).map_err(|_| malformed())?;
        Ok(Self { origin, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_give_back_the_same_handle() {
        let url = ObjectUrl::new(0x2a, 7);
        assert_eq!(url.to_string(), "blob:session-2a/0000000000000007");

        let parsed: ObjectUrl = url.to_string().parse().unwrap();
        assert_eq!(parsed, url);
    }

    #[test]
    fn parse_rejects_other_schemes() {
        for input in ["https://example.com/a.png", "blob:session-zz/01", "blob:session-1", ""] {
            let res = input.parse::<ObjectUrl>();
            assert_eq!(res, Err(BlobError::Malformed(input.to_string())), "{input}");
        }
    }
}
