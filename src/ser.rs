use crate::bigint::BigInt;
use serde::ser::{Serialize, Serializer};

impl Serialize for BigInt {
    /// Serialize as a native integer when the value fits 64 bits, and as a
    /// decimal string otherwise so no format has to support wider integers.
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Some(wide) = self.to_i128() {
            if let Ok(value) = u64::try_from(wide) {
                return serializer.serialize_u64(value);
            }
            if let Ok(value) = i64::try_from(wide) {
                return serializer.serialize_i64(value);
            }
        }
        serializer.collect_str(self)
    }
}
