// THEORY:
// The `Pixel` module is the "dumb" data container at the bottom of the stack.
// It holds one RGB sample and knows how to move between itself and raw byte
// representations; it performs no color analysis of its own. All quantization
// and compensation logic lives in the `quantizer` module, which operates *on*
// pixels rather than *in* them. RGB332 has no alpha channel, so neither does
// this type: alpha is dropped at image load time, before a `Pixel` ever
// exists.

pub mod pixel {
    pub type Byte = u8;
    pub type Bytes = Vec<Byte>;
    pub type Channel = Byte;

    pub const CHANNELS: usize = 3;

    /// A single RGB sample. Plain value type, transformed by pure functions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        pub red: Channel,
        pub green: Channel,
        pub blue: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Pixel { red, green, blue }
        }
    }

    impl From<&[Byte]> for Pixel {
        fn from(bytes: &[Byte]) -> Self {
            if bytes.len() != CHANNELS {
                panic!("Cannot convert {} bytes into pixel.", bytes.len());
            }
            Pixel::new(bytes[0], bytes[1], bytes[2])
        }
    }

    impl From<[Byte; CHANNELS]> for Pixel {
        fn from(bytes: [Byte; CHANNELS]) -> Self {
            Pixel::new(bytes[0], bytes[1], bytes[2])
        }
    }

    impl From<Pixel> for [Byte; CHANNELS] {
        fn from(pixel: Pixel) -> Self {
            [pixel.red, pixel.green, pixel.blue]
        }
    }

    impl From<Pixel> for Bytes {
        fn from(pixel: Pixel) -> Self {
            vec![pixel.red, pixel.green, pixel.blue]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pixel::*;

    #[test]
    fn byte_round_trip() {
        let pixel = Pixel::from([12u8, 200, 77]);
        let bytes: [Byte; CHANNELS] = pixel.into();
        assert_eq!(bytes, [12, 200, 77]);
        assert_eq!(Pixel::from(&bytes[..]), pixel);
        assert_eq!(Bytes::from(pixel), vec![12, 200, 77]);
    }

    #[test]
    #[should_panic]
    fn rejects_wrong_channel_count() {
        let rgba = [1u8, 2, 3, 4];
        let _ = Pixel::from(&rgba[..]);
    }
}
