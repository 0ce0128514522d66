/// Define a getter for a fixed-offset little-endian field of `self.data`.
///
/// The struct must hold its raw bytes in a `data: [u8; N]` field, and every
/// `$offset + size_of::<$ty>()` must lie within `N`.
#[macro_export]
macro_rules! define_field {
    (u8, $offset:expr, $name:ident) => {
        paste::paste! {
            #[doc = "Get the value of the `" $name "` field."]
            pub fn $name(&self) -> u8 {
                self.data[$offset]
            }
        }
    };
    (u16, $offset:expr, $name:ident) => {
        paste::paste! {
            #[doc = "Get the value of the `" $name "` field."]
            pub fn $name(&self) -> u16 {
                u16::from_le_bytes([self.data[$offset], self.data[$offset + 1]])
            }
        }
    };
    (u32, $offset:expr, $name:ident) => {
        paste::paste! {
            #[doc = "Get the value of the `" $name "` field."]
            pub fn $name(&self) -> u32 {
                u32::from_le_bytes([
                    self.data[$offset],
                    self.data[$offset + 1],
                    self.data[$offset + 2],
                    self.data[$offset + 3],
                ])
            }
        }
    };
    ([u8; $len:expr], $offset:expr, $name:ident) => {
        paste::paste! {
            #[doc = "Get the raw bytes of the `" $name "` field."]
            pub fn $name(&self) -> &[u8] {
                &self.data[$offset..$offset + $len]
            }
        }
    };
}
