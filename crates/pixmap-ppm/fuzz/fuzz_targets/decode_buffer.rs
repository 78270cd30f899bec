#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use pixmap_ppm::pixmap_core::bytestream::ByteCursor;
    let data = ByteCursor::new(data);

    let mut decoder = pixmap_ppm::PpmDecoder::new(data);

    if let Ok(image) = decoder.decode() {
        // whatever decodes must survive a round trip
        let bytes = pixmap_ppm::PpmEncoder::new(&image).encode_to_vec();
        let again = pixmap_ppm::PpmDecoder::new(ByteCursor::new(&bytes))
            .decode()
            .unwrap();
        assert_eq!(image, again);
    }
});
